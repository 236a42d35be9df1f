//! Animation primitives
//!
//! Time-boxed loops that push one frame per tick to the strip. Every primitive
//! checks the scene's cancellation token on each tick and stops writing as
//! soon as it is cancelled.

mod blink;
mod fade;

use embassy_time::Duration;

pub use blink::{BLINK_SUB_FADE, blink};
pub use fade::{fade_off, fade_on};

use crate::{CancellationToken, Clock, Completion, Error, FrameScheduler, Strip};

/// Strip borrowed together with the frame scheduler of the running task
pub struct Scene<'a, S: Strip, C: Clock> {
    strip: &'a mut S,
    frames: FrameScheduler<'a, C>,
}

impl<'a, S: Strip, C: Clock> Scene<'a, S, C> {
    pub fn new(strip: &'a mut S, frames: FrameScheduler<'a, C>) -> Self {
        Self { strip, frames }
    }

    pub fn strip(&mut self) -> &mut S {
        &mut *self.strip
    }

    pub fn frames(&self) -> &FrameScheduler<'a, C> {
        &self.frames
    }

    pub fn is_cancelled(&self) -> bool {
        self.frames.is_cancelled()
    }

    /// Render frames over `duration`, see [`FrameScheduler::run`]
    pub fn render<F>(&mut self, duration: Duration, mut render: F) -> Result<Completion, Error>
    where
        F: FnMut(&mut S, Duration) -> Result<(), Error>,
    {
        let strip = &mut *self.strip;
        self.frames.run(duration, |elapsed| render(strip, elapsed))
    }

    /// Fade from the current brightness to black, ignoring cancellation
    ///
    /// Used for wind-downs after a sequence was cancelled, and for emergency
    /// stops. Does nothing if the strip is already dark, or if the scene's
    /// token was handed over to a sequence that fades the strip itself.
    pub fn fade_to_black(&mut self, duration: Duration) -> Result<(), Error> {
        if self.frames.is_handed_over() {
            return Ok(());
        }

        let token = CancellationToken::new();
        let brightness = self.strip.brightness();
        let mut scene = Scene {
            strip: &mut *self.strip,
            frames: self.frames.with_token(&token),
        };
        fade_off(&mut scene, brightness, duration)?;
        Ok(())
    }
}
