use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

const ACTIVE: u8 = 0;
const CANCELLED: u8 = 1;
const HANDED_OVER: u8 = 2;

/// Cooperative cancellation flag shared between the controller and one
/// animation task.
///
/// Clones observe the same flag. A cancelled token never becomes active again,
/// every task gets a fresh one.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    state: Arc<AtomicU8>,
}

impl CancellationToken {
    /// Create a new active token
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the holder to stop
    ///
    /// The holder may still wind the strip down before it returns.
    pub fn cancel(&self) {
        self.state.fetch_max(CANCELLED, Ordering::Release);
    }

    /// Request the holder to stop and leave the strip as it is
    ///
    /// Used when the next sequence fades the strip out itself.
    pub fn hand_over(&self) {
        self.state.fetch_max(HANDED_OVER, Ordering::Release);
    }

    /// Check if stop was requested
    pub fn is_cancelled(&self) -> bool {
        self.state.load(Ordering::Acquire) != ACTIVE
    }

    /// Check if the holder must skip its wind-down
    pub fn is_handed_over(&self) -> bool {
        self.state.load(Ordering::Acquire) == HANDED_OVER
    }
}
