//! Wall-clock access for animations
//!
//! All timing math is based on [`Clock::now`], never on counted frames, so a
//! slow frame only delays the next one instead of stretching the animation.

use embassy_time::{Duration, Instant};

/// Source of time and blocking sleeps
pub trait Clock {
    /// Current instant
    fn now(&self) -> Instant;

    /// Block the calling thread for `duration`
    fn sleep(&self, duration: Duration);

    /// Time passed since `earlier`, zero if `earlier` is in the future
    fn elapsed_since(&self, earlier: Instant) -> Duration {
        self.now()
            .checked_duration_since(earlier)
            .unwrap_or(Duration::from_ticks(0))
    }
}

/// Clock backed by the embassy-time std driver
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(std::time::Duration::from_micros(duration.as_micros()));
    }
}
