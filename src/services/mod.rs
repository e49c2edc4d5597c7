//! Application service layer.
//!
//! Services contain the business logic behind each command and sit between
//! the command handlers and the contact repository.

mod contact_service;

pub use contact_service::{AddOutcome, ContactService, UpcomingBirthday};
