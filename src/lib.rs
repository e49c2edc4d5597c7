//! Contact Assistant - a command-line assistant bot for contacts and birthdays.
//!
//! Contacts live in memory for the duration of a session. Every name, phone
//! number and birthday is validated when it is stored, and all date math takes
//! "today" as an explicit argument.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, birthday) and birthday math
//! - **models**: The contact record
//! - **repositories**: The contact directory trait and the in-memory address book
//! - **services**: Business operations behind each command
//! - **session**: Command parsing, handlers and the interactive loop
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;
pub mod session;

pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, ContactError, ContactResult};
pub use models::Contact;
pub use repositories::{AddressBook, ContactRepository, DEFAULT_BIRTHDAY_WINDOW_DAYS};
pub use services::{AddOutcome, ContactService, UpcomingBirthday};
pub use session::{run_session, AssistantBot, Command, Reply, ReplyLevel};
