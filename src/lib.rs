pub mod animation;
pub mod cancel;
pub mod clock;
pub mod color;
pub mod config;
pub mod controller;
pub mod error;
pub mod frame_scheduler;
#[cfg(feature = "rpi")]
pub mod hardware;
pub mod input;
pub mod math;
pub mod mode;
pub mod sequence;
pub mod strip;

pub use animation::{Scene, blink, fade_off, fade_on};
pub use cancel::CancellationToken;
pub use clock::{Clock, SystemClock};
pub use color::Rgb;
pub use config::Config;
pub use controller::{Controller, RunState};
pub use error::{ConfigError, Error};
pub use frame_scheduler::{Completion, FrameScheduler};
pub use input::{Action, Button, ButtonTracker, InputPoller, Press};
pub use math::{interpolate, ramp, ramp_u8};
pub use mode::Mode;
pub use sequence::Sequence;
pub use strip::SmartLedStrip;
pub use embassy_time::{Duration, Instant};

/// Abstract LED strip driver
///
/// Implement this trait to support different hardware platforms.
/// Brightness is applied strip-wide when the frame is pushed with [`Strip::show`].
pub trait Strip {
    /// Set the strip-wide brightness (0-255)
    fn set_brightness(&mut self, brightness: u8);

    /// Brightness that will be applied on the next `show`
    fn brightness(&self) -> u8;

    /// Set a single pixel color. Out of range indices are ignored.
    fn set_pixel_color(&mut self, index: usize, color: Rgb);

    /// Number of pixels on the strip
    fn num_pixels(&self) -> usize;

    /// Push the current frame to the LEDs
    fn show(&mut self) -> Result<(), Error>;

    /// Set every pixel to one color
    fn fill(&mut self, color: Rgb) {
        for index in 0..self.num_pixels() {
            self.set_pixel_color(index, color);
        }
    }
}
