mod settings;

pub use settings::{Logger, MotorWiring, Settings, Stepper, DEFAULT_WIRING};
