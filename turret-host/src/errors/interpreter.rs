use super::GpioError;

/// Failures that end an interpreter session.
#[derive(Debug, thiserror::Error)]
pub enum InterpreterError {
    #[error("GPIO error: {0}")]
    Gpio(#[from] GpioError),

    #[error("Operator I/O error: {0}")]
    Io(#[from] std::io::Error),
}
