//! YAML configuration
//!
//! Loaded once at startup and immutable afterwards. Keys follow the layout
//! used by rpi_ws281x setups so existing config files keep working.

use std::path::{Path, PathBuf};

use embassy_time::Duration;
use serde::Deserialize;

use crate::color::{Rgb, rgb_from_array};
use crate::error::ConfigError;
use crate::mode::Mode;
use crate::sequence::{DanceSettings, TimerSettings};
use crate::strip::MAX_LEDS;

const CONFIG_FILE_NAME: &str = "config.yaml";

const DEFAULT_LED_FREQUENCY: u32 = 800_000;
const DEFAULT_LED_DMA: u8 = 10;
const DEFAULT_PRIMARY_HOLD_SECS: f32 = 3.0;
const DEFAULT_SECONDARY_HOLD_SECS: f32 = 6.0;
const DEFAULT_POLL_INTERVAL_MS: u64 = 10;
const DEFAULT_DANCE_STEP_ONE_SECS: f32 = 0.5;
const DEFAULT_DANCE_STEP_TWO_SECS: f32 = 0.25;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub led: LedConfig,
    pub button: ButtonConfig,
    pub general: GeneralConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LedConfig {
    /// Number of pixels on the strip
    pub count: usize,
    /// GPIO of the data line
    pub pin: u8,
    /// LED data rate in Hz
    #[serde(default = "default_led_frequency")]
    pub frequency: u32,
    #[serde(default = "default_led_dma")]
    pub dma: u8,
    #[serde(default)]
    pub inverted: bool,
    /// Strip-wide brightness used by every animation
    pub brightness: u8,
    #[serde(default)]
    pub channel: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ButtonConfig {
    /// GPIO of the primary (timer) button
    pub primary: u8,
    /// GPIO of the secondary (mode) button
    pub secondary: u8,
    /// Seconds the primary button must be held to count as a hold
    #[serde(default = "default_primary_hold")]
    pub primary_hold: f32,
    /// Seconds the secondary button must be held to count as a hold
    #[serde(default = "default_secondary_hold")]
    pub secondary_hold: f32,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Default timer length in seconds
    pub timer_length: f32,
    pub mode_one: ModePreset,
    pub mode_two: ModePreset,
}

/// Colors and timings of one mode
#[derive(Debug, Clone, Deserialize)]
pub struct ModePreset {
    pub start: [u8; 3],
    pub middle: [u8; 3],
    pub end: [u8; 3],
    /// Overrides `general.timer_length` for this mode
    #[serde(default)]
    pub timer_length: Option<f32>,
    /// Seconds per dance fade
    #[serde(default)]
    pub dance_step: Option<f32>,
}

impl Config {
    /// Default location: `config.yaml` next to the executable
    pub fn default_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(CONFIG_FILE_NAME)))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Read, parse and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &contents)
    }

    /// Parse and validate a config document held in memory
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        Self::parse(Path::new("<memory>"), contents)
    }

    fn parse(path: &Path, contents: &str) -> Result<Self, ConfigError> {
        let empty = || ConfigError::Empty {
            path: path.to_path_buf(),
        };
        if contents.trim().is_empty() {
            return Err(empty());
        }

        let config: Option<Self> =
            serde_yaml::from_str(contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        let config = config.ok_or_else(empty)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.led.count == 0 || self.led.count > MAX_LEDS {
            return Err(ConfigError::Invalid(format!(
                "led.count must be between 1 and {MAX_LEDS}, got {}",
                self.led.count
            )));
        }
        check_seconds("general.timer_length", self.general.timer_length, false)?;
        check_seconds("button.primary_hold", self.button.primary_hold, true)?;
        check_seconds("button.secondary_hold", self.button.secondary_hold, true)?;

        for mode in [Mode::One, Mode::Two] {
            let preset = self.preset(mode);
            if let Some(length) = preset.timer_length {
                check_seconds(&format!("general.{mode}.timer_length"), length, false)?;
            }
            if let Some(step) = preset.dance_step {
                check_seconds(&format!("general.{mode}.dance_step"), step, true)?;
            }
        }
        Ok(())
    }

    pub fn preset(&self, mode: Mode) -> &ModePreset {
        match mode {
            Mode::One => &self.general.mode_one,
            Mode::Two => &self.general.mode_two,
        }
    }

    pub fn brightness(&self) -> u8 {
        self.led.brightness
    }

    /// Timer length of `mode`, falling back to `general.timer_length`
    pub fn timer_length(&self, mode: Mode) -> Duration {
        let seconds = self
            .preset(mode)
            .timer_length
            .unwrap_or(self.general.timer_length);
        duration_from_secs(seconds)
    }

    /// Start color of `mode`, shown by the mode confirmation pattern
    pub fn start_color(&self, mode: Mode) -> Rgb {
        rgb_from_array(self.preset(mode).start)
    }

    pub fn timer(&self, mode: Mode) -> TimerSettings {
        let preset = self.preset(mode);
        TimerSettings {
            start: rgb_from_array(preset.start),
            middle: rgb_from_array(preset.middle),
            end: rgb_from_array(preset.end),
            brightness: self.led.brightness,
            duration: self.timer_length(mode),
        }
    }

    pub fn dance(&self, mode: Mode, seed: u64) -> DanceSettings {
        let default_step = match mode {
            Mode::One => DEFAULT_DANCE_STEP_ONE_SECS,
            Mode::Two => DEFAULT_DANCE_STEP_TWO_SECS,
        };
        let step = self.preset(mode).dance_step.unwrap_or(default_step);
        DanceSettings {
            brightness: self.led.brightness,
            step: duration_from_secs(step),
            seed,
        }
    }

    pub fn primary_hold(&self) -> Duration {
        duration_from_secs(self.button.primary_hold)
    }

    pub fn secondary_hold(&self) -> Duration {
        duration_from_secs(self.button.secondary_hold)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.button.poll_interval_ms)
    }
}

/// Convert (validated) seconds to a duration, negative values become zero
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn duration_from_secs(seconds: f32) -> Duration {
    let micros = (f64::from(seconds) * 1_000_000.0).max(0.0);
    Duration::from_micros(micros as u64)
}

fn check_seconds(name: &str, value: f32, positive: bool) -> Result<(), ConfigError> {
    let valid = value.is_finite() && if positive { value > 0.0 } else { value >= 0.0 };
    if valid {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "{name} must be a {} number of seconds, got {value}",
            if positive { "positive" } else { "non-negative" }
        )))
    }
}

const fn default_led_frequency() -> u32 {
    DEFAULT_LED_FREQUENCY
}

const fn default_led_dma() -> u8 {
    DEFAULT_LED_DMA
}

const fn default_primary_hold() -> f32 {
    DEFAULT_PRIMARY_HOLD_SECS
}

const fn default_secondary_hold() -> f32 {
    DEFAULT_SECONDARY_HOLD_SECS
}

const fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}
