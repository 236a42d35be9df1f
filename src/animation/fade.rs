//! Brightness fades
//!
//! Brightness is strip-wide, so fades never touch pixel colors except for the
//! optional start color of [`fade_on`].

use embassy_time::Duration;

use super::Scene;
use crate::{Clock, Completion, Error, Rgb, Strip, math::ramp_u8};

/// Fade the strip from `brightness_start` to black over `duration`
///
/// Returns immediately if the strip is already dark.
pub fn fade_off<S: Strip, C: Clock>(
    scene: &mut Scene<'_, S, C>,
    brightness_start: u8,
    duration: Duration,
) -> Result<Completion, Error> {
    if scene.strip.brightness() == 0 {
        return Ok(Completion::Finished);
    }

    scene.render(duration, |strip, elapsed| {
        strip.set_brightness(ramp_u8(elapsed, duration, brightness_start, 0));
        strip.show()
    })
}

/// Fade the strip from black to `brightness_end` over `duration`
///
/// # Arguments
/// * `brightness_end` - Brightness reached at the end of the fade
/// * `duration` - Fade duration
/// * `start_color` - Color to fill the strip with before fading in. Current
///   pixels are kept if `None`.
pub fn fade_on<S: Strip, C: Clock>(
    scene: &mut Scene<'_, S, C>,
    brightness_end: u8,
    duration: Duration,
    start_color: Option<Rgb>,
) -> Result<Completion, Error> {
    if scene.is_cancelled() {
        return Ok(Completion::Cancelled);
    }

    let strip = scene.strip();
    strip.set_brightness(0);
    if let Some(color) = start_color {
        strip.fill(color);
    }
    strip.show()?;

    scene.render(duration, |strip, elapsed| {
        strip.set_brightness(ramp_u8(elapsed, duration, 0, brightness_end));
        strip.show()
    })
}
