//! Frame scheduling and timing utilities.
//!
//! Every animation is a loop that renders one frame per tick over a wall-clock
//! window. The scheduler owns that loop so the primitives only describe what a
//! frame looks like at a given point of the window.

use embassy_time::Duration;

use crate::{CancellationToken, Clock, Error};

/// Default frame duration (one tick).
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(20);

/// How a frame loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The window ran to its end and the final frame was rendered
    Finished,
    /// The token was cancelled before the window ended
    Cancelled,
}

impl Completion {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Finished)
    }
}

/// Runs render callbacks at a fixed tick over a time window.
///
/// This scheduler:
/// - Checks the cancellation token before every frame
/// - Computes the elapsed time from the clock, not from counted frames
/// - Always renders the last frame exactly at the end of the window
///
/// # Usage
///
/// ```ignore
/// let frames = FrameScheduler::new(&clock, &token);
/// frames.run(Duration::from_secs(3), |elapsed| {
///     strip.set_brightness(ramp_u8(elapsed, duration, 255, 0));
///     strip.show()
/// })?;
/// ```
pub struct FrameScheduler<'a, C: Clock> {
    clock: &'a C,
    token: &'a CancellationToken,
    frame_duration: Duration,
}

impl<'a, C: Clock> FrameScheduler<'a, C> {
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (20 ms) for frame timing.
    pub fn new(clock: &'a C, token: &'a CancellationToken) -> Self {
        Self::with_frame_duration(clock, token, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        clock: &'a C,
        token: &'a CancellationToken,
        frame_duration: Duration,
    ) -> Self {
        Self {
            clock,
            token,
            frame_duration,
        }
    }

    /// Same clock and tick, different token
    pub fn with_token<'b>(&self, token: &'b CancellationToken) -> FrameScheduler<'b, C>
    where
        'a: 'b,
    {
        FrameScheduler {
            clock: self.clock,
            token,
            frame_duration: self.frame_duration,
        }
    }

    pub fn clock(&self) -> &'a C {
        self.clock
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Cancelled, and the next sequence takes over the wind-down
    pub fn is_handed_over(&self) -> bool {
        self.token.is_handed_over()
    }

    /// Render frames until `duration` has passed or the token is cancelled.
    ///
    /// `render` receives the time elapsed since the loop started. It is never
    /// called with more than `duration`; the final call gets exactly
    /// `duration`. A zero `duration` renders that final frame immediately.
    pub fn run<F>(&self, duration: Duration, mut render: F) -> Result<Completion, Error>
    where
        F: FnMut(Duration) -> Result<(), Error>,
    {
        let start = self.clock.now();
        loop {
            if self.token.is_cancelled() {
                return Ok(Completion::Cancelled);
            }

            let elapsed = self.clock.elapsed_since(start);
            if elapsed >= duration {
                render(duration)?;
                return Ok(Completion::Finished);
            }

            render(elapsed)?;
            self.clock.sleep(self.frame_duration);
        }
    }

    /// Wait for `duration` without rendering, still honouring cancellation
    pub fn pause(&self, duration: Duration) -> Completion {
        let start = self.clock.now();
        loop {
            if self.token.is_cancelled() {
                return Completion::Cancelled;
            }
            let elapsed = self.clock.elapsed_since(start);
            if elapsed >= duration {
                return Completion::Finished;
            }
            let remaining = duration - elapsed;
            self.clock.sleep(remaining.min(self.frame_duration));
        }
    }
}
