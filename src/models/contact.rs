//! Contact model: one person's name, phone numbers and optional birthday.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{ContactError, ContactResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder rendered when a contact has no birthday.
pub const NO_BIRTHDAY: &str = "N/A";

/// A contact record.
///
/// Every field is a validated value object, so a record can never be
/// observed holding a malformed phone or date. The name is fixed at creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Contact {
    /// Create a contact with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `name` is blank.
    pub fn new(name: impl Into<String>) -> ContactResult<Self> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone number. Duplicates are allowed.
    ///
    /// # Errors
    ///
    /// Returns a validation error unless `phone` is exactly ten digits; the
    /// phone list is left untouched.
    pub fn add_phone(&mut self, phone: &str) -> ContactResult<()> {
        self.phones.push(PhoneNumber::new(phone)?);
        Ok(())
    }

    /// Remove every entry equal to `phone`. Absent values are ignored.
    pub fn remove_phone(&mut self, phone: &str) {
        self.phones.retain(|p| p != phone);
    }

    /// Replace `old_phone` with `new_phone`.
    ///
    /// The new value is validated first. All occurrences of the old value are
    /// removed and the new one is appended once.
    ///
    /// # Errors
    ///
    /// - Validation error if `new_phone` is malformed.
    /// - `ContactError::PhoneNotFound` if the contact does not hold `old_phone`.
    ///
    /// Phones are unchanged on either error.
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> ContactResult<()> {
        let new_phone = PhoneNumber::new(new_phone)?;
        if self.find_phone(old_phone).is_none() {
            return Err(ContactError::PhoneNotFound(old_phone.to_string()));
        }

        self.remove_phone(old_phone);
        self.phones.push(new_phone);
        Ok(())
    }

    /// Look up a stored phone by exact value.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| *p == phone)
    }

    /// Parse and store a `DD.MM.YYYY` birthday, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `value` is not a real calendar date; the
    /// existing birthday is kept.
    pub fn set_birthday(&mut self, value: &str) -> ContactResult<()> {
        self.birthday = Some(Birthday::parse(value)?);
        Ok(())
    }

    /// Days from `today` until the next birthday, or `None` without one.
    pub fn days_until_birthday(&self, today: NaiveDate) -> Option<u32> {
        self.birthday.as_ref()?.days_until(today)
    }

    /// One-line summary: `name; phone, phone; DD.MM.YYYY` (or `N/A`).
    pub fn render(&self) -> String {
        format!(
            "{}; {}; {}",
            self.name,
            self.phones_joined(", "),
            self.birthday_label()
        )
    }

    /// Phone numbers joined with `separator`; empty when there are none.
    pub fn phones_joined(&self, separator: &str) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Birthday as `DD.MM.YYYY`, or `N/A`.
    pub fn birthday_label(&self) -> String {
        self.birthday
            .map(|b| b.to_string())
            .unwrap_or_else(|| NO_BIRTHDAY.to_string())
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
