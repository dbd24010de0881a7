//! Line-oriented operator console driving the motor registry.

use std::io::{BufRead, Write};

use crate::errors::{GpioError, InterpreterError};
use crate::gpio::GpioController;
use crate::registry::MotorRegistry;

mod command;

pub use command::Command;

const BANNER: &str = "Commands:
- 'motor <id>: <degrees>' to rotate
- 'enable <id>' to enable
- 'disable <id>' to disable
- 'exit' to quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Terminated,
}

/// Blocking read-parse-dispatch loop.
///
/// Malformed input and unknown motors are reported on `output` and the loop
/// carries on. GPIO and operator I/O failures end the session with an error.
pub struct Interpreter<'a, C, R, W>
where
    C: GpioController,
    R: BufRead,
    W: Write,
{
    registry: &'a mut MotorRegistry<C>,
    input: R,
    output: W,
    state: State,
}

impl<'a, C, R, W> Interpreter<'a, C, R, W>
where
    C: GpioController,
    R: BufRead,
    W: Write,
{
    pub fn new(registry: &'a mut MotorRegistry<C>, input: R, output: W) -> Self {
        Self {
            registry,
            input,
            output,
            state: State::Running,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn run(&mut self) -> Result<(), InterpreterError> {
        writeln!(self.output, "{BANNER}")?;

        while self.state == State::Running {
            self.step()?;
        }

        Ok(())
    }

    /// Prompt, read one line and act on it.
    pub fn step(&mut self) -> Result<State, InterpreterError> {
        write!(self.output, "> ")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            tracing::info!("End of operator input");
            self.state = State::Terminated;
            return Ok(self.state);
        }

        // Undecodable bytes are operator typos, left for the parser to reject
        let line = String::from_utf8_lossy(&buf);

        match line.parse::<Command>() {
            Ok(command) => self.execute(command)?,
            Err(e) => {
                tracing::warn!("Rejected {:?}: {}", line.trim(), e);
                writeln!(self.output, "{e}")?;
            }
        }

        Ok(self.state)
    }

    pub fn execute(&mut self, command: Command) -> Result<(), InterpreterError> {
        tracing::debug!("Execute {:?}", command);

        match command {
            Command::Exit => {
                self.state = State::Terminated;
            }
            Command::Rotate { motor, degrees } => match self.registry.get_mut(motor) {
                Ok(unit) => {
                    writeln!(self.output, "Rotating motor {motor} by {degrees:?}°")?;
                    self.output.flush()?;

                    let steps = unit
                        .rotate_degrees(degrees)
                        .map_err(|e| GpioError::write(motor as u32, e))?;

                    tracing::debug!("Motor {} moved {} steps", motor, steps);
                }
                Err(e) => writeln!(self.output, "{e}")?,
            },
            Command::Enable { motor } | Command::Disable { motor } => {
                let on = matches!(command, Command::Enable { .. });
                match self.registry.get_mut(motor) {
                    Ok(unit) => {
                        unit.enable(on).map_err(|e| GpioError::write(motor as u32, e))?;

                        let verb = if on { "Enabled" } else { "Disabled" };
                        writeln!(self.output, "{verb} motor {motor}")?;
                    }
                    Err(e) => writeln!(self.output, "{e}")?,
                }
            }
        }

        Ok(())
    }
}
