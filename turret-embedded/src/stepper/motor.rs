use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};

use super::{Direction, StepResolution};
use crate::error::{MotorError, Result};

/// Half-period of a step pulse in microseconds.
pub const DEFAULT_PULSE_DELAY_US: u32 = 200;

/// Shortest half-period `step` will hold a level for.
pub const MIN_PULSE_DELAY_US: u32 = 1;

/// A stepper driven through a STEP/DIR/EN driver board.
///
/// The enable input is active-low: driving it low energizes the coils.
/// The lines are expected to be handed over at their idle levels
/// (step low, direction low, enable high), so a fresh motor is disabled.
pub struct StepDirMotor<Pin, Delay>
where
    Pin: OutputPin,
    Delay: DelayNs,
{
    step_pin: Pin,
    dir_pin: Pin,
    enable_pin: Pin,
    delay: Delay,
    resolution: StepResolution,
    pulse_delay_us: u32,
    direction: Direction,
    enabled: bool,
}

impl<Pin, Delay> StepDirMotor<Pin, Delay>
where
    Pin: OutputPin,
    Delay: DelayNs,
{
    pub fn new(
        step_pin: Pin,
        dir_pin: Pin,
        enable_pin: Pin,
        delay: Delay,
        resolution: StepResolution,
    ) -> Self {
        Self {
            step_pin,
            dir_pin,
            enable_pin,
            delay,
            resolution,
            pulse_delay_us: DEFAULT_PULSE_DELAY_US,
            direction: Direction::CounterClockwise,
            enabled: false,
        }
    }

    /// Override the pulse half-period used by [`Self::rotate_degrees`].
    pub fn with_pulse_delay(mut self, pulse_delay_us: u32) -> Self {
        self.pulse_delay_us = pulse_delay_us;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn resolution(&self) -> StepResolution {
        self.resolution
    }

    pub fn pulse_delay_us(&self) -> u32 {
        self.pulse_delay_us
    }

    pub fn enable(&mut self, on: bool) -> Result<(), Pin::Error> {
        let level = if on { PinState::Low } else { PinState::High };
        self.enable_pin.set_state(level).map_err(MotorError::Enable)?;
        self.enabled = on;

        log::debug!("{} motor", if on { "Enabled" } else { "Disabled" });

        Ok(())
    }

    pub fn set_direction(&mut self, direction: Direction) -> Result<(), Pin::Error> {
        let level = PinState::from(direction == Direction::Clockwise);
        self.dir_pin.set_state(level).map_err(MotorError::Direction)?;
        self.direction = direction;
        Ok(())
    }

    /// Emit `count` pulses, each held high then low for `delay_us`.
    ///
    /// Blocks for at least `count * 2 * delay_us` microseconds. There is no
    /// cancellation: the train either completes or stops at the first
    /// failed write. A zero delay is raised to 1 µs so the driver still
    /// sees distinct edges.
    pub fn step(&mut self, count: u64, delay_us: u32) -> Result<(), Pin::Error> {
        let delay_us = delay_us.max(MIN_PULSE_DELAY_US);

        for _ in 0..count {
            self.step_pin.set_high().map_err(MotorError::Step)?;
            self.delay.delay_us(delay_us);
            self.step_pin.set_low().map_err(MotorError::Step)?;
            self.delay.delay_us(delay_us);
        }
        Ok(())
    }

    /// Turn by `degrees` (positive is clockwise) and return the pulse count.
    ///
    /// The motor is energized for the duration of the move and always left
    /// disabled afterwards, even when it was enabled beforehand.
    pub fn rotate_degrees(&mut self, degrees: f64) -> Result<u64, Pin::Error> {
        if degrees == 0.0 {
            return Ok(0);
        }

        if !self.enabled {
            self.enable(true)?;
        }

        let direction = Direction::from_degrees(degrees);
        let steps = self.resolution.steps_for(degrees);

        log::debug!("Rotating {:?} by {} steps", direction, steps);

        if let Err(e) = self.drive(direction, steps) {
            self.abort();
            return Err(e);
        }

        self.enable(false)?;

        Ok(steps)
    }

    fn drive(&mut self, direction: Direction, steps: u64) -> Result<(), Pin::Error> {
        self.set_direction(direction)?;
        self.step(steps, self.pulse_delay_us)
    }

    /// Single attempt to park the step line and de-energize after a failed
    /// move. Secondary failures are dropped so the original error surfaces.
    fn abort(&mut self) {
        let _ = self.step_pin.set_low();
        if self.enable_pin.set_high().is_ok() {
            self.enabled = false;
        }
        log::warn!("Motion aborted, motor enabled: {}", self.enabled);
    }
}
