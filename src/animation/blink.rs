use embassy_time::Duration;

use super::{Scene, fade_off, fade_on};
use crate::{Clock, Completion, Error, Strip};

/// Longest single fade of a blink
pub const BLINK_SUB_FADE: Duration = Duration::from_secs(5);

/// Minimum number of fades, so the strip lights up at least once
const MIN_FADES: u64 = 3;

/// Alternate fade-off and fade-on until `duration` has passed
///
/// The window is split evenly into an odd number of at least three fades,
/// each at most [`BLINK_SUB_FADE`] long, starting and ending with a fade-off.
/// Every fade ends at its slot's boundary measured from the start of the
/// blink, so the strip ends dark and the pattern never outlasts `duration` by
/// more than one tick.
pub fn blink<S: Strip, C: Clock>(
    scene: &mut Scene<'_, S, C>,
    brightness: u8,
    duration: Duration,
) -> Result<Completion, Error> {
    let clock = scene.frames().clock();
    let start = clock.now();
    let fades = fade_count(duration);
    let fade = duration / fades;

    for index in 0..fades {
        let slot_end = fade * (index + 1);
        let elapsed = clock.elapsed_since(start);
        let span = if slot_end > elapsed {
            slot_end - elapsed
        } else {
            Duration::from_ticks(0)
        };

        let completion = if index % 2 == 0 {
            fade_off(scene, brightness, span)?
        } else {
            fade_on(scene, brightness, span, None)?
        };
        if !completion.is_finished() {
            return Ok(completion);
        }
    }

    Ok(Completion::Finished)
}

/// Smallest odd number of fades, at least three, that keeps each one within
/// `BLINK_SUB_FADE`
fn fade_count(duration: Duration) -> u32 {
    let count = duration
        .as_micros()
        .div_ceil(BLINK_SUB_FADE.as_micros())
        .max(MIN_FADES);
    let count = if count % 2 == 0 { count + 1 } else { count };
    u32::try_from(count).unwrap_or(u32::MAX)
}
