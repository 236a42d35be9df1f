use embassy_time::Duration;

use crate::animation::{fade_off, fade_on};
use crate::color::random_color;
use crate::{Clock, Completion, Error, Scene, Strip};

/// Slow fade-in on the first color
pub const DANCE_LEAD_IN: Duration = Duration::from_secs(10);

/// Fade to black once the dance is cancelled
pub const DANCE_EXIT_FADE: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DanceSettings {
    pub brightness: u8,
    /// Length of each fade-off and fade-on
    pub step: Duration,
    /// Seed of the color generator
    pub seed: u64,
}

/// Fade through random colors until cancelled, then fade to black
///
/// Never finishes on its own.
pub fn dance<S: Strip, C: Clock>(
    scene: &mut Scene<'_, S, C>,
    settings: &DanceSettings,
) -> Result<Completion, Error> {
    let mut rng = fastrand::Rng::with_seed(settings.seed);
    let brightness = settings.brightness;

    let mut completion = fade_on(scene, brightness, DANCE_LEAD_IN, Some(random_color(&mut rng)))?;
    while completion.is_finished() {
        completion = fade_off(scene, brightness, settings.step)?;
        if completion.is_finished() {
            completion = fade_on(scene, brightness, settings.step, Some(random_color(&mut rng)))?;
        }
    }

    scene.fade_to_black(DANCE_EXIT_FADE)?;
    Ok(completion)
}
