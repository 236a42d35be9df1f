//! Mode switch feedback
//!
//! One blink for mode one, two for mode two. Purely cosmetic.

use embassy_time::Duration;

use crate::animation::{fade_off, fade_on};
use crate::{Clock, Completion, Error, Rgb, Scene, Strip};

/// Fade-off before, and after each blink
pub const CONFIRM_OFF: Duration = Duration::from_secs(1);
/// Fade-on of the first blink, which also sets the mode's color
pub const CONFIRM_FIRST_ON: Duration = Duration::from_millis(500);
/// Fade-on of every further blink
pub const CONFIRM_ON: Duration = Duration::from_secs(1);
/// Dark pause between fades
pub const CONFIRM_GAP: Duration = Duration::from_millis(20);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmSettings {
    pub brightness: u8,
    /// Start color of the newly selected mode
    pub color: Rgb,
    pub blinks: u8,
}

pub fn confirm_mode<S: Strip, C: Clock>(
    scene: &mut Scene<'_, S, C>,
    settings: &ConfirmSettings,
) -> Result<Completion, Error> {
    let brightness = settings.brightness;

    let current = scene.strip().brightness();
    let mut completion = fade_off(scene, current, CONFIRM_OFF)?;
    for index in 0..settings.blinks {
        if !completion.is_finished() {
            break;
        }
        let (fade_in, color) = if index == 0 {
            (CONFIRM_FIRST_ON, Some(settings.color))
        } else {
            (CONFIRM_ON, None)
        };

        completion = scene.frames().pause(CONFIRM_GAP);
        if completion.is_finished() {
            completion = fade_on(scene, brightness, fade_in, color)?;
        }
        if completion.is_finished() {
            completion = scene.frames().pause(CONFIRM_GAP);
        }
        if completion.is_finished() {
            completion = fade_off(scene, brightness, CONFIRM_OFF)?;
        }
    }
    Ok(completion)
}
