//! Sequences run by the controller, one per button action
//!
//! All sequences are stored in an enum so the controller can hand a plain
//! value to the animation thread.

mod confirm;
mod dance;
mod timer;

use embassy_time::Duration;

pub use confirm::{CONFIRM_FIRST_ON, CONFIRM_GAP, CONFIRM_OFF, CONFIRM_ON, ConfirmSettings, confirm_mode};
pub use dance::{DANCE_EXIT_FADE, DANCE_LEAD_IN, DanceSettings, dance};
pub use timer::{TIMER_ABORT_FADE, TIMER_LEAD_IN, TimerPlan, TimerSettings, timer};

use crate::{Clock, Completion, Error, Scene, Strip, animation::fade_off};

const SEQUENCE_NAME_TIMER: &str = "timer";
const SEQUENCE_NAME_FADE_OUT: &str = "fade_out";
const SEQUENCE_NAME_CONFIRM_MODE: &str = "confirm_mode";
const SEQUENCE_NAME_DANCE: &str = "dance";

/// Sequence slot - enum containing all possible sequences
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sequence {
    /// Three phase color countdown with a blink finale
    Timer(TimerSettings),
    /// Fade from the current brightness to black
    FadeOut(Duration),
    /// Blink pattern confirming a mode switch
    ConfirmMode(ConfirmSettings),
    /// Random color fades until cancelled
    Dance(DanceSettings),
}

impl Sequence {
    /// Play the sequence on the scene
    ///
    /// Returns `Completion::Cancelled` if the scene's token was cancelled
    /// before the sequence could finish on its own.
    pub fn play<S: Strip, C: Clock>(&self, scene: &mut Scene<'_, S, C>) -> Result<Completion, Error> {
        match self {
            Self::Timer(settings) => timer(scene, settings),
            Self::FadeOut(duration) => {
                let brightness = scene.strip().brightness();
                fade_off(scene, brightness, *duration)
            }
            Self::ConfirmMode(settings) => confirm_mode(scene, settings),
            Self::Dance(settings) => dance(scene, settings),
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Timer(_) => SEQUENCE_NAME_TIMER,
            Self::FadeOut(_) => SEQUENCE_NAME_FADE_OUT,
            Self::ConfirmMode(_) => SEQUENCE_NAME_CONFIRM_MODE,
            Self::Dance(_) => SEQUENCE_NAME_DANCE,
        }
    }
}
