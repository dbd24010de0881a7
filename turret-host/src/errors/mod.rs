mod command;
mod gpio;
mod interpreter;

pub use command::{LookupError, ParseError};
pub use gpio::GpioError;
pub use interpreter::InterpreterError;
