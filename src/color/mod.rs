mod utils;

use smart_leds::RGB8;

pub use utils::{ramp_color, random_color, rgb_from_array};

pub type Rgb = RGB8;

/// Fully dark pixel
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
