//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by contact records, the directory and the contact service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A name, phone or date failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No contact is stored under the name
    #[error("contact not found: {0}")]
    ContactNotFound(String),

    /// The contact does not hold the phone number
    #[error("phone not found: {0}")]
    PhoneNotFound(String),

    /// The contact has no birthday set
    #[error("no birthday set for {0}")]
    BirthdayNotSet(String),
}

impl ContactError {
    /// Whether this is one of the not-found kinds.
    pub fn is_not_found(&self) -> bool {
        !matches!(self, Self::Validation(_))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors produced while turning an input line into a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command was given fewer arguments than it needs
    #[error("Not enough arguments. Usage: {usage}")]
    NotEnoughArguments { usage: &'static str },

    /// The first token is not a known command
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// The input line is not valid UTF-8
    #[error("input is not valid UTF-8")]
    InvalidEncoding,

    /// An argument could not be interpreted
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Contacts could not be rendered as JSON
    #[error("Export failed: {0}")]
    Export(String),

    /// The command reached the contact service and failed there
    #[error(transparent)]
    Contact(#[from] ContactError),
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
