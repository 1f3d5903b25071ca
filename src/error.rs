//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors a command can fail with.
///
/// Every variant is recoverable: the session loop prints the variant's
/// display string as the response and keeps reading. The display strings
/// are the exact user-facing messages, so translation is `to_string()`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The argument count does not match what the command declares.
    #[error("Wrong name or phone")]
    WrongArguments,

    /// A handler was invoked without a resolved command. Unreachable with
    /// the explicit command table; kept so the enum covers the full
    /// message space.
    #[error("Unknown command")]
    UnknownCommand,

    /// The second argument did not parse as an integer.
    #[error("Wrong phone format")]
    WrongPhoneFormat,

    /// The named contact is not in the address book.
    #[error("Name: {0} not in address book")]
    NameNotFound(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
