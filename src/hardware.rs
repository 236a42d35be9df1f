//! Raspberry Pi drivers
//!
//! Buttons are GPIO inputs with the internal pull-up enabled, wired to ground,
//! so a pressed button reads low. The strip is driven over SPI0 with
//! `ws2812-spi`, which encodes every data bit as three SPI bits.

use rppal::gpio::{Gpio, InputPin};
use rppal::spi::{Bus, Mode as SpiMode, SlaveSelect, Spi};
use tracing::info;
use ws2812_spi::Ws2812;

use crate::config::{ButtonConfig, LedConfig};
use crate::{Button, Error, SmartLedStrip};

/// SPI bits per WS2812 data bit
const SPI_BITS_PER_LED_BIT: u32 = 3;

pub type HardwareStrip = SmartLedStrip<Ws2812<Spi>>;

/// Active-low push button
pub struct GpioButton {
    pin: InputPin,
}

impl GpioButton {
    pub fn new(gpio: &Gpio, pin: u8) -> Result<Self, Error> {
        let pin = gpio
            .get(pin)
            .map_err(|err| Error::Hardware(format!("GPIO {pin}: {err}")))?
            .into_input_pullup();
        Ok(Self { pin })
    }
}

impl Button for GpioButton {
    fn is_pressed(&mut self) -> Result<bool, Error> {
        Ok(self.pin.is_low())
    }
}

/// Open the primary and secondary buttons
pub fn open_buttons(config: &ButtonConfig) -> Result<(GpioButton, GpioButton), Error> {
    let gpio = Gpio::new().map_err(|err| Error::Hardware(err.to_string()))?;
    let primary = GpioButton::new(&gpio, config.primary)?;
    let secondary = GpioButton::new(&gpio, config.secondary)?;
    info!(
        primary = config.primary,
        secondary = config.secondary,
        "buttons ready"
    );
    Ok((primary, secondary))
}

/// Open the LED strip on SPI0
///
/// `led.channel` selects the chip select line. `pin`, `dma` and `inverted`
/// only matter to PWM drivers and are ignored here.
pub fn open_strip(config: &LedConfig) -> Result<HardwareStrip, Error> {
    let slave_select = match config.channel {
        0 => SlaveSelect::Ss0,
        1 => SlaveSelect::Ss1,
        2 => SlaveSelect::Ss2,
        other => {
            return Err(Error::Hardware(format!(
                "led.channel must be 0, 1 or 2, got {other}"
            )));
        }
    };
    let clock_speed = config.frequency.saturating_mul(SPI_BITS_PER_LED_BIT);

    let spi = Spi::new(Bus::Spi0, slave_select, clock_speed, SpiMode::Mode0)
        .map_err(|err| Error::Hardware(err.to_string()))?;
    let strip = SmartLedStrip::new(Ws2812::new(spi), config.count, config.brightness)?;
    info!(count = config.count, clock_speed, "strip ready");
    Ok(strip)
}
