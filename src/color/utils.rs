use embassy_time::Duration;

use crate::{color::Rgb, math::ramp_u8};

/// Per-channel color ramp over a time window
///
/// # Arguments
/// * `elapsed` - Time passed since the window started
/// * `span` - Window length
/// * `from` - Color at the window start
/// * `to` - Color at the window end
#[inline]
pub fn ramp_color(elapsed: Duration, span: Duration, from: Rgb, to: Rgb) -> Rgb {
    Rgb {
        r: ramp_u8(elapsed, span, from.r, to.r),
        g: ramp_u8(elapsed, span, from.g, to.g),
        b: ramp_u8(elapsed, span, from.b, to.b),
    }
}

/// Pick a uniformly random color
pub fn random_color(rng: &mut fastrand::Rng) -> Rgb {
    Rgb {
        r: rng.u8(..),
        g: rng.u8(..),
        b: rng.u8(..),
    }
}

/// Create an RGB color from a `[r, g, b]` triple
pub const fn rgb_from_array(color: [u8; 3]) -> Rgb {
    Rgb {
        r: color[0],
        g: color[1],
        b: color[2],
    }
}
