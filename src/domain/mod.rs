//! Domain value objects and types.
//!
//! Type-safe wrappers for the three contact fields: names, phone numbers and
//! birthdays. Each validates at construction so invalid data cannot be held
//! by a contact.

pub mod birthday;
pub mod contact_name;
pub mod errors;
pub mod phone;

pub use birthday::{Birthday, DATE_FORMAT};
pub use contact_name::ContactName;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
