//! [`Strip`] adapter for `smart-leds` writers
//!
//! Keeps a frame buffer and the strip-wide brightness, and pushes the scaled
//! frame to the writer on `show`.

use core::fmt::Debug;

use heapless::Vec;
use smart_leds::SmartLedsWrite;

use crate::{Error, Rgb, Strip, color::BLACK};

/// Maximum number of LEDs the adapter supports
pub const MAX_LEDS: usize = 1024;

pub struct SmartLedStrip<W> {
    writer: W,
    pixels: Vec<Rgb, MAX_LEDS>,
    brightness: u8,
}

impl<W> SmartLedStrip<W>
where
    W: SmartLedsWrite<Color = Rgb>,
    W::Error: Debug,
{
    /// Create a new strip of `count` dark pixels
    ///
    /// # Arguments
    /// * `writer` - LED driver
    /// * `count` - Number of pixels, at most [`MAX_LEDS`]
    /// * `brightness` - Initial strip-wide brightness
    pub fn new(writer: W, count: usize, brightness: u8) -> Result<Self, Error> {
        if count == 0 || count > MAX_LEDS {
            return Err(Error::Strip(format!(
                "pixel count must be between 1 and {MAX_LEDS}, got {count}"
            )));
        }

        let mut pixels = Vec::new();
        pixels
            .resize(count, BLACK)
            .map_err(|()| Error::Strip(format!("failed to allocate {count} pixels")))?;

        Ok(Self {
            writer,
            pixels,
            brightness,
        })
    }

    /// Current frame buffer (unscaled colors)
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<W> Strip for SmartLedStrip<W>
where
    W: SmartLedsWrite<Color = Rgb>,
    W::Error: Debug,
{
    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    fn brightness(&self) -> u8 {
        self.brightness
    }

    fn set_pixel_color(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn num_pixels(&self) -> usize {
        self.pixels.len()
    }

    fn show(&mut self) -> Result<(), Error> {
        let frame = smart_leds::brightness(self.pixels.iter().copied(), self.brightness);
        self.writer
            .write(frame)
            .map_err(|err| Error::Strip(format!("{err:?}")))
    }
}
