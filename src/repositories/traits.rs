use crate::models::Contact;
use chrono::NaiveDate;

/// Default window for the upcoming-birthday query, in days.
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 7;

/// Repository for managing contacts, keyed by exact contact name.
///
/// Provides abstraction over contact storage so the service layer can run
/// against the in-memory address book or a test double.
pub trait ContactRepository {
    /// Insert a contact, replacing any contact stored under the same name.
    fn add(&mut self, contact: Contact);

    /// Retrieve a contact by name.
    fn find(&self, name: &str) -> Option<&Contact>;

    /// Retrieve a contact by name for mutation.
    fn find_mut(&mut self, name: &str) -> Option<&mut Contact>;

    /// Remove a contact, returning it if it was present.
    fn delete(&mut self, name: &str) -> Option<Contact>;

    /// All contacts in iteration order.
    fn list(&self) -> Vec<&Contact>;

    /// Number of stored contacts.
    fn len(&self) -> usize {
        self.list().len()
    }

    /// Whether the repository holds no contacts.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Contacts whose next birthday is at most `within_days` days after
    /// `today` (inclusive, today counts as 0), in iteration order.
    fn upcoming_birthdays(&self, today: NaiveDate, within_days: u32) -> Vec<&Contact> {
        self.list()
            .into_iter()
            .filter(|contact| {
                contact
                    .days_until_birthday(today)
                    .is_some_and(|days| days <= within_days)
            })
            .collect()
    }
}
