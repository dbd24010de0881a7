use std::collections::HashSet;
use std::env;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

const DEFAULT_SETTINGS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/configs/default.toml"
));

/// Stock wiring as `(id, step, direction, enable)` BCM pin assignments.
pub const DEFAULT_WIRING: [(u32, u8, u8, u8); 3] = [(1, 4, 3, 2), (2, 22, 27, 17), (3, 11, 9, 10)];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stepper {
    pub steps_per_revolution: u32,
    pub pulse_delay_us: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotorWiring {
    pub id: u32,
    pub step: u8,
    pub direction: u8,
    pub enable: u8,
}

impl MotorWiring {
    pub fn pins(&self) -> [u8; 3] {
        [self.step, self.direction, self.enable]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub logger: Logger,
    pub stepper: Stepper,
    #[serde(default = "default_wiring")]
    pub motors: Vec<MotorWiring>,
}

fn default_wiring() -> Vec<MotorWiring> {
    DEFAULT_WIRING
        .iter()
        .map(|&(id, step, direction, enable)| MotorWiring { id, step, direction, enable })
        .collect()
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or("development".into());

        let settings: Settings = Self::defaults()
            .add_source(File::with_name(&format!("configs/{run_mode}")).required(false))
            .add_source(
                Environment::with_prefix("TURRET")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;

        Ok(settings)
    }

    /// Compiled-in defaults overlaid with a TOML document.
    pub fn from_toml(overlay: &str) -> Result<Self, ConfigError> {
        let settings: Settings = Self::defaults()
            .add_source(File::from_str(overlay, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        settings.validate()?;

        Ok(settings)
    }

    fn defaults() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Toml))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stepper.steps_per_revolution == 0 {
            return Err(ConfigError::Message(
                "stepper.steps_per_revolution must be positive".into(),
            ));
        }

        if self.stepper.pulse_delay_us == 0 {
            return Err(ConfigError::Message(
                "stepper.pulse_delay_us must be positive".into(),
            ));
        }

        let mut ids = HashSet::new();
        let mut pins = HashSet::new();
        for motor in &self.motors {
            if !ids.insert(motor.id) {
                return Err(ConfigError::Message(format!("Duplicate motor id {}", motor.id)));
            }
            for pin in motor.pins() {
                if !pins.insert(pin) {
                    return Err(ConfigError::Message(format!(
                        "GPIO {pin} assigned more than once (motor {})",
                        motor.id
                    )));
                }
            }
        }

        Ok(())
    }
}
