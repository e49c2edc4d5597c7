//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty or whitespace-only.
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided birthday is not a real `DD.MM.YYYY` date.
    InvalidDate(String),
}

impl ValidationError {
    /// The raw input that failed validation, when there was one.
    pub fn input(&self) -> Option<&str> {
        match self {
            Self::EmptyName => None,
            Self::InvalidPhone(value) | Self::InvalidDate(value) => Some(value),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name cannot be empty"),
            Self::InvalidPhone(_) => write!(f, "phone must be 10 digits"),
            Self::InvalidDate(_) => write!(f, "invalid date format"),
        }
    }
}

impl std::error::Error for ValidationError {}
