use core::fmt;

/// Failure to drive one of a motor's output lines.
///
/// Carries the underlying line error so callers can report the backend's
/// own diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorError<E> {
    Step(E),
    Direction(E),
    Enable(E),
}

impl<E> MotorError<E> {
    /// Name of the line whose write failed.
    pub fn line(&self) -> &'static str {
        match self {
            MotorError::Step(_) => "step",
            MotorError::Direction(_) => "direction",
            MotorError::Enable(_) => "enable",
        }
    }

    pub fn into_inner(self) -> E {
        match self {
            MotorError::Step(e) | MotorError::Direction(e) | MotorError::Enable(e) => e,
        }
    }
}

impl<E: fmt::Debug> fmt::Display for MotorError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::Step(e) => write!(f, "Step line write failed: {:?}", e),
            MotorError::Direction(e) => write!(f, "Direction line write failed: {:?}", e),
            MotorError::Enable(e) => write!(f, "Enable line write failed: {:?}", e),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for MotorError<E> {}

pub type Result<T, E> = core::result::Result<T, MotorError<E>>;
