//! Data models for the contact assistant.
//!
//! A `Contact` is the record the directory stores: a name, its phone numbers
//! and an optional birthday.

pub mod contact;

pub use contact::{Contact, NO_BIRTHDAY};
