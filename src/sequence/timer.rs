//! Countdown timer
//!
//! Fades in on the start color, ramps start → middle → end over the bulk of
//! the timer and blinks for the last few percent.

use embassy_time::Duration;
use tracing::debug;

use crate::animation::{blink, fade_on};
use crate::color::ramp_color;
use crate::{Clock, Completion, Error, Rgb, Scene, Strip};

/// Fade-in on the start color before the color ramps begin
pub const TIMER_LEAD_IN: Duration = Duration::from_secs(5);

/// Fade to black after the timer was cancelled
pub const TIMER_ABORT_FADE: Duration = Duration::from_secs(1);

/// Share of the timer reserved for the blink finale (1/20 = 5%)
const FINALE_DIVISOR: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSettings {
    pub start: Rgb,
    pub middle: Rgb,
    pub end: Rgb,
    pub brightness: u8,
    /// Total length, lead-in and finale included
    pub duration: Duration,
}

/// Split of a timer's duration into its phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerPlan {
    pub lead_in: Duration,
    /// Length of each of the two color ramps
    pub half: Duration,
    pub finale: Duration,
}

impl TimerPlan {
    /// Plan a timer of `duration`
    ///
    /// Timers shorter than the lead-in plus finale shrink the lead-in and get
    /// zero-length color ramps.
    pub fn new(duration: Duration) -> Self {
        let finale = duration / FINALE_DIVISOR;
        let remaining = duration - finale;
        let lead_in = TIMER_LEAD_IN.min(remaining);
        let half = (remaining - lead_in) / 2;
        Self {
            lead_in,
            half,
            finale,
        }
    }

    pub fn total(&self) -> Duration {
        self.lead_in + self.half + self.half + self.finale
    }
}

/// Run the countdown
///
/// If cancelled, the strip fades to black over [`TIMER_ABORT_FADE`] before
/// returning.
pub fn timer<S: Strip, C: Clock>(
    scene: &mut Scene<'_, S, C>,
    settings: &TimerSettings,
) -> Result<Completion, Error> {
    let plan = TimerPlan::new(settings.duration);
    debug!(
        lead_in_ms = plan.lead_in.as_millis(),
        half_ms = plan.half.as_millis(),
        finale_ms = plan.finale.as_millis(),
        "starting timer"
    );

    let mut completion = fade_on(scene, settings.brightness, plan.lead_in, Some(settings.start))?;
    if completion.is_finished() {
        completion = color_ramp(scene, plan.half, settings.start, settings.middle)?;
    }
    if completion.is_finished() {
        completion = color_ramp(scene, plan.half, settings.middle, settings.end)?;
    }
    if completion.is_finished() {
        completion = blink(scene, settings.brightness, plan.finale)?;
    }

    if !completion.is_finished() {
        debug!("timer cancelled");
        scene.fade_to_black(TIMER_ABORT_FADE)?;
    }
    Ok(completion)
}

/// Fill every pixel with a color ramping from `from` to `to` over `span`
fn color_ramp<S: Strip, C: Clock>(
    scene: &mut Scene<'_, S, C>,
    span: Duration,
    from: Rgb,
    to: Rgb,
) -> Result<Completion, Error> {
    scene.render(span, |strip, elapsed| {
        strip.fill(ramp_color(elapsed, span, from, to));
        strip.show()
    })
}
