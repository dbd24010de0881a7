use std::fmt::Debug;

use turret_embedded::MotorError;

#[derive(Debug, thiserror::Error)]
pub enum GpioError {
    #[error("Failed to open GPIO controller: {0}")]
    Open(String),

    #[error("Failed to request GPIO {pin} as output: {reason}")]
    Request { pin: u8, reason: String },

    #[error("Failed to drive {line} line of motor {motor}: {reason}")]
    Write {
        motor: u32,
        line: &'static str,
        reason: String,
    },
}

impl GpioError {
    pub fn request<E: ToString>(pin: u8, error: E) -> Self {
        Self::Request {
            pin,
            reason: error.to_string(),
        }
    }

    pub fn write<E: Debug>(motor: u32, error: MotorError<E>) -> Self {
        Self::Write {
            motor,
            line: error.line(),
            reason: format!("{:?}", error.into_inner()),
        }
    }
}
