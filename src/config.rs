//! Configuration management for the contact assistant.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file loaded through `dotenvy`.

use crate::domain::Birthday;
use crate::error::{ConfigError, ConfigResult};
use crate::repositories::DEFAULT_BIRTHDAY_WINDOW_DAYS;
use chrono::{Local, NaiveDate};
use std::env;

/// Largest accepted birthday window; every birthday is at most this far away.
pub const MAX_BIRTHDAY_WINDOW_DAYS: u32 = 366;

/// Configuration for the contact assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default window for the `birthdays` command (default: 7)
    pub birthday_window_days: u32,

    /// Fixed session date; the local calendar date when unset
    pub today: Option<NaiveDate>,

    /// Whether replies are colored (default: true)
    pub color: bool,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BIRTHDAY_WINDOW_DAYS`: default upcoming-birthday window (default: 7, max 366)
    /// - `ASSISTANT_TODAY`: session date as `DD.MM.YYYY` (default: local date)
    /// - `ASSISTANT_COLOR`: `true`/`false` (default: true)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let birthday_window_days =
            Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", DEFAULT_BIRTHDAY_WINDOW_DAYS)?;
        if birthday_window_days > MAX_BIRTHDAY_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be at most {}", MAX_BIRTHDAY_WINDOW_DAYS),
            });
        }

        let today = match env::var("ASSISTANT_TODAY") {
            Ok(val) => Some(
                Birthday::parse(val.trim())
                    .map(|d| d.date())
                    .map_err(|_| ConfigError::InvalidValue {
                        var: "ASSISTANT_TODAY".to_string(),
                        reason: format!("Must be a DD.MM.YYYY date, got: {}", val),
                    })?,
            ),
            Err(_) => None,
        };

        let color = Self::parse_env_bool("ASSISTANT_COLOR", true)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            birthday_window_days,
            today,
            color,
            log_level,
        })
    }

    /// The session date: the configured override, or the local calendar date.
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as a boolean flag with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
            today: None,
            color: true,
            log_level: "error".to_string(),
        }
    }
}
