use embedded_hal::digital::PinState;
use rppal::gpio::{Gpio, OutputPin};
use rppal::hal::Delay;

use super::GpioController;
use crate::errors::GpioError;

/// Raspberry Pi GPIO through `/dev/gpiomem`.
///
/// Lines are reset to their original mode when dropped. `Delay` sleeps on
/// the monotonic clock; kernel scheduling adds tens of microseconds of
/// jitter to each 200 µs half-period.
pub struct RpiController {
    gpio: Gpio,
}

impl RpiController {
    pub fn open() -> Result<Self, GpioError> {
        let gpio = Gpio::new().map_err(|e| GpioError::Open(e.to_string()))?;

        tracing::debug!("Opened GPIO controller");

        Ok(Self { gpio })
    }
}

impl GpioController for RpiController {
    type Line = OutputPin;
    type Delay = Delay;

    fn request_output(&mut self, pin: u8, initial: PinState) -> Result<OutputPin, GpioError> {
        let handle = self.gpio.get(pin).map_err(|e| GpioError::request(pin, e))?;

        let mut line = match initial {
            PinState::High => handle.into_output_high(),
            PinState::Low => handle.into_output_low(),
        };
        line.set_reset_on_drop(true);

        Ok(line)
    }

    fn delay(&self) -> Delay {
        Delay::new()
    }
}

impl Drop for RpiController {
    fn drop(&mut self) {
        tracing::debug!("Released GPIO controller");
    }
}
