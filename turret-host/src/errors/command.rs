/// Malformed operator input. The message is what the operator sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid input format. Use 'motor <id>: <deg>'")]
    MotorFormat,

    #[error("Invalid input. Use 'enable <id>'")]
    EnableFormat,

    #[error("Invalid input. Use 'disable <id>'")]
    DisableFormat,

    #[error("Invalid command.")]
    UnknownCommand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Invalid motor number")]
    MotorNotFound(i64),
}
