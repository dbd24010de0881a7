mod motor;
mod resolution;

pub use motor::{StepDirMotor, DEFAULT_PULSE_DELAY_US, MIN_PULSE_DELAY_US};
pub use resolution::{StepResolution, DEFAULT_STEPS_PER_REVOLUTION};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// Positive angles turn clockwise, everything else counter-clockwise.
    pub fn from_degrees(degrees: f64) -> Self {
        if degrees > 0.0 {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        }
    }
}
