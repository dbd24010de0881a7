use std::collections::BTreeMap;

use embedded_hal::digital::PinState;
use turret_embedded::{StepDirMotor, StepResolution};

use crate::configs::{MotorWiring, Stepper};
use crate::errors::{GpioError, LookupError};
use crate::gpio::GpioController;

pub type MotorId = u32;

pub type Motor<C> =
    StepDirMotor<<C as GpioController>::Line, <C as GpioController>::Delay>;

/// Fixed set of motors wired to one GPIO controller.
///
/// Membership is decided at construction. The registry owns the controller,
/// so dropping it releases the motors' lines first and the controller last.
pub struct MotorRegistry<C: GpioController> {
    motors: BTreeMap<MotorId, Motor<C>>,
    _controller: C,
}

impl<C: GpioController> MotorRegistry<C> {
    /// Request step, direction and enable lines for every motor at their idle
    /// levels (low, low, high). Fails on the first line that cannot be claimed.
    pub fn new(mut controller: C, wiring: &[MotorWiring], stepper: &Stepper) -> Result<Self, GpioError> {
        let resolution = StepResolution::new(stepper.steps_per_revolution);
        let mut motors = BTreeMap::new();

        for wire in wiring {
            let step = controller.request_output(wire.step, PinState::Low)?;
            let direction = controller.request_output(wire.direction, PinState::Low)?;
            let enable = controller.request_output(wire.enable, PinState::High)?;

            tracing::debug!(
                "Motor {} on step={} direction={} enable={}",
                wire.id,
                wire.step,
                wire.direction,
                wire.enable
            );

            let motor = StepDirMotor::new(step, direction, enable, controller.delay(), resolution)
                .with_pulse_delay(stepper.pulse_delay_us);
            motors.insert(wire.id, motor);
        }

        Ok(Self { motors, _controller: controller })
    }

    pub fn get_mut(&mut self, id: i64) -> Result<&mut Motor<C>, LookupError> {
        MotorId::try_from(id)
            .ok()
            .and_then(|key| self.motors.get_mut(&key))
            .ok_or(LookupError::MotorNotFound(id))
    }

    pub fn ids(&self) -> impl Iterator<Item = MotorId> + '_ {
        self.motors.keys().copied()
    }
}
