//! Button input
//!
//! Buttons are sampled on every poll. A press is classified when the button is
//! released: held longer than its threshold it is a hold, otherwise a click.

use core::fmt;

use embassy_time::{Duration, Instant};
use heapless::Vec;
use tracing::info;

use crate::Error;

const ACTION_NAME_START_TIMER: &str = "start_timer";
const ACTION_NAME_END_TIMER: &str = "end_timer";
const ACTION_NAME_SET_MODE: &str = "set_mode";
const ACTION_NAME_DANCE: &str = "dance_dance";

/// Abstract button driver
pub trait Button {
    /// Sample the button
    fn is_pressed(&mut self) -> Result<bool, Error>;
}

/// Classified button release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Press {
    Click,
    Hold,
}

/// What the controller should do in response to a button release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Primary click: start or restart the timer
    StartTimer,
    /// Primary hold: stop everything, back to mode one
    EndTimer,
    /// Secondary click: switch mode
    SetMode,
    /// Secondary hold: dance
    Dance,
}

impl Action {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StartTimer => ACTION_NAME_START_TIMER,
            Self::EndTimer => ACTION_NAME_END_TIMER,
            Self::SetMode => ACTION_NAME_SET_MODE,
            Self::Dance => ACTION_NAME_DANCE,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracks one button's press and classifies its releases
pub struct ButtonTracker<B> {
    button: B,
    hold_threshold: Duration,
    pressed_at: Option<Instant>,
}

impl<B: Button> ButtonTracker<B> {
    pub const fn new(button: B, hold_threshold: Duration) -> Self {
        Self {
            button,
            hold_threshold,
            pressed_at: None,
        }
    }

    /// Sample the button at `now`
    ///
    /// Returns the classified press when the button was just released.
    pub fn poll(&mut self, now: Instant) -> Result<Option<Press>, Error> {
        let pressed = self.button.is_pressed()?;
        match (pressed, self.pressed_at) {
            (true, None) => {
                self.pressed_at = Some(now);
                Ok(None)
            }
            (false, Some(pressed_at)) => {
                self.pressed_at = None;
                let held = now
                    .checked_duration_since(pressed_at)
                    .unwrap_or(Duration::from_ticks(0));
                if held > self.hold_threshold {
                    Ok(Some(Press::Hold))
                } else {
                    Ok(Some(Press::Click))
                }
            }
            _ => Ok(None),
        }
    }
}

/// Polls the primary and secondary buttons and maps releases to actions
pub struct InputPoller<B> {
    primary: ButtonTracker<B>,
    secondary: ButtonTracker<B>,
}

impl<B: Button> InputPoller<B> {
    pub const fn new(primary: ButtonTracker<B>, secondary: ButtonTracker<B>) -> Self {
        Self { primary, secondary }
    }

    /// Sample both buttons, primary first
    pub fn poll(&mut self, now: Instant) -> Result<Vec<Action, 2>, Error> {
        let mut actions = Vec::new();

        if let Some(press) = self.primary.poll(now)? {
            let action = match press {
                Press::Click => {
                    info!("primary button was pressed");
                    Action::StartTimer
                }
                Press::Hold => {
                    info!("primary button was held");
                    Action::EndTimer
                }
            };
            let _ = actions.push(action);
        }

        if let Some(press) = self.secondary.poll(now)? {
            let action = match press {
                Press::Click => {
                    info!("secondary button was pressed");
                    Action::SetMode
                }
                Press::Hold => {
                    info!("secondary button was held");
                    Action::Dance
                }
            };
            let _ = actions.push(action);
        }

        Ok(actions)
    }
}
