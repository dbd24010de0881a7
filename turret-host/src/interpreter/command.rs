use std::str::FromStr;

use crate::errors::ParseError;

/// One operator instruction, parsed from a single input line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Rotate { motor: i64, degrees: f64 },
    Enable { motor: i64 },
    Disable { motor: i64 },
    Exit,
}

impl FromStr for Command {
    type Err = ParseError;

    /// Input is trimmed and case-folded. The leading keyword picks the
    /// grammar, so `motor1: 90` is a malformed rotation rather than an
    /// unknown command.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim().to_lowercase();

        if input == "exit" {
            return Ok(Command::Exit);
        }

        if let Some(rest) = input.strip_prefix("motor") {
            return parse_rotate(rest).ok_or(ParseError::MotorFormat);
        }

        if let Some(rest) = input.strip_prefix("enable") {
            return parse_motor_id(rest)
                .map(|motor| Command::Enable { motor })
                .ok_or(ParseError::EnableFormat);
        }

        if let Some(rest) = input.strip_prefix("disable") {
            return parse_motor_id(rest)
                .map(|motor| Command::Disable { motor })
                .ok_or(ParseError::DisableFormat);
        }

        Err(ParseError::UnknownCommand)
    }
}

/// `<id>: <degrees>` following the `motor` keyword.
fn parse_rotate(rest: &str) -> Option<Command> {
    let (motor, degrees) = rest.split_once(':')?;
    let motor = parse_motor_id(motor)?;
    let degrees: f64 = degrees.trim().parse().ok()?;

    degrees.is_finite().then_some(Command::Rotate { motor, degrees })
}

/// A single integer token separated from the keyword by whitespace.
fn parse_motor_id(rest: &str) -> Option<i64> {
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    // Trailing tokens are rejected rather than ignored: `enable 1 2` is a typo
    let mut tokens = rest.split_whitespace();
    let motor = tokens.next()?.parse().ok()?;

    tokens.next().is_none().then_some(motor)
}
