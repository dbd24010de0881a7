use std::io::{BufRead, Write};

use crate::configs::Settings;
use crate::errors::InterpreterError;
use crate::gpio::GpioController;
use crate::interpreter::Interpreter;
use crate::registry::MotorRegistry;

pub mod configs;
pub mod errors;
pub mod gpio;
pub mod interpreter;
pub mod registry;

/// Wire the motors onto `controller` and serve operator commands until
/// `exit`, end of input or a fatal error.
///
/// The registry, and with it the controller, is dropped before this returns,
/// so GPIO lines are released on every path out.
pub fn run_session<C, R, W>(
    controller: C,
    settings: &Settings,
    input: R,
    output: W,
) -> Result<(), InterpreterError>
where
    C: GpioController,
    R: BufRead,
    W: Write,
{
    let mut registry = MotorRegistry::new(controller, &settings.motors, &settings.stepper)?;

    tracing::info!("Motors ready: {:?}", registry.ids().collect::<Vec<_>>());

    Interpreter::new(&mut registry, input, output).run()
}

#[cfg(target_os = "linux")]
pub fn run(settings: &Settings) -> anyhow::Result<()> {
    use anyhow::Context;

    use crate::gpio::RpiController;

    let controller = RpiController::open()?;
    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();

    run_session(controller, settings, stdin, stdout)
        .inspect_err(|e| tracing::error!("Session aborted: {e}"))
        .context("Stepper session failed")?;

    tracing::info!("GPIO released, exiting");

    Ok(())
}

#[cfg(not(target_os = "linux"))]
pub fn run(_settings: &Settings) -> anyhow::Result<()> {
    anyhow::bail!("No GPIO backend for this platform")
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::errors::GpioError;
    use crate::gpio::mock::MockBoard;

    fn settings() -> Settings {
        Settings::from_toml("").unwrap()
    }

    #[test]
    fn test_exit_releases_once() {
        let board = MockBoard::new();
        let mut output = Vec::new();

        run_session(
            board.controller(),
            &settings(),
            Cursor::new("enable 1\nmotor 2: 30\ndisable 1\nexit\n"),
            &mut output,
        )
        .unwrap();

        assert_eq!(board.releases(), 1);
        assert_eq!(board.pulses(22), 1333);
    }

    #[test]
    fn test_fatal_error_still_releases() {
        let board = MockBoard::new();
        board.fail_writes_on(10);

        let result = run_session(
            board.controller(),
            &settings(),
            Cursor::new("enable 3\nexit\n"),
            Vec::new(),
        );

        assert!(matches!(
            result,
            Err(InterpreterError::Gpio(GpioError::Write { motor: 3, line: "enable", .. }))
        ));
        assert_eq!(board.releases(), 1);
    }

    #[test]
    fn test_request_failure_releases() {
        let board = MockBoard::new();
        board.refuse_request(11);

        let result = run_session(board.controller(), &settings(), Cursor::new("exit\n"), Vec::new());

        assert!(matches!(result, Err(InterpreterError::Gpio(GpioError::Request { pin: 11, .. }))));
        assert_eq!(board.releases(), 1);
    }
}
