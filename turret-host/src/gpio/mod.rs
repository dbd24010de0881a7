//! Process-wide GPIO controller handle.
//!
//! A controller hands out output lines and owns them for its lifetime:
//! dropping the controller (and the lines it produced) releases every line,
//! so release happens on every exit path of the scope that opened it.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};

use crate::errors::GpioError;

#[cfg(test)]
pub mod mock;
#[cfg(target_os = "linux")]
mod rpi;

#[cfg(target_os = "linux")]
pub use rpi::RpiController;

pub trait GpioController {
    type Line: OutputPin;
    type Delay: DelayNs;

    /// Claim BCM `pin` as an output, driven to `initial` before it is returned.
    fn request_output(&mut self, pin: u8, initial: PinState) -> Result<Self::Line, GpioError>;

    /// Monotonic delay source used to time step pulses.
    fn delay(&self) -> Self::Delay;
}
