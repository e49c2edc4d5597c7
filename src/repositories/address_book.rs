use crate::models::Contact;
use crate::repositories::traits::ContactRepository;
use std::collections::HashMap;
use tracing::debug;

/// In-memory contact directory.
///
/// Contacts are keyed by name and iterate in insertion order. Replacing a
/// contact keeps the name's original position.
#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    contacts: HashMap<String, Contact>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContactRepository for AddressBook {
    fn add(&mut self, contact: Contact) {
        let name = contact.name().as_str().to_string();
        if self.contacts.insert(name.clone(), contact).is_some() {
            debug!(name = %name, "Replaced existing contact");
        } else {
            debug!(name = %name, "Stored new contact");
            self.order.push(name);
        }
    }

    fn find(&self, name: &str) -> Option<&Contact> {
        self.contacts.get(name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.contacts.get_mut(name)
    }

    fn delete(&mut self, name: &str) -> Option<Contact> {
        let removed = self.contacts.remove(name)?;
        self.order.retain(|n| n != name);
        debug!(name = %name, "Deleted contact");
        Some(removed)
    }

    fn list(&self) -> Vec<&Contact> {
        self.order
            .iter()
            .filter_map(|name| self.contacts.get(name))
            .collect()
    }

    fn len(&self) -> usize {
        self.contacts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::DEFAULT_BIRTHDAY_WINDOW_DAYS;
    use chrono::NaiveDate;

    fn contact(name: &str, birthday: Option<&str>) -> Contact {
        let mut contact = Contact::new(name).unwrap();
        if let Some(b) = birthday {
            contact.set_birthday(b).unwrap();
        }
        contact
    }

    fn names(contacts: &[&Contact]) -> Vec<String> {
        contacts.iter().map(|c| c.name().to_string()).collect()
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        assert!(book.is_empty());

        let mut ann = contact("Ann", None);
        ann.add_phone("0501234567").unwrap();
        book.add(ann);

        assert_eq!(book.len(), 1);
        assert_eq!(book.find("Ann").unwrap().render(), "Ann; 0501234567; N/A");
    }

    #[test]
    fn test_find_is_exact_and_case_sensitive() {
        let mut book = AddressBook::new();
        book.add(contact("Ann", None));
        assert!(book.find("ann").is_none());
        assert!(book.find("Ann ").is_none());
        assert!(book.find("Ann").is_some());
    }

    #[test]
    fn test_add_overwrites_whole_record_in_place() {
        let mut book = AddressBook::new();
        let mut first = contact("Ann", Some("15.03.1990"));
        first.add_phone("0501234567").unwrap();
        book.add(first);
        book.add(contact("Bob", None));
        book.add(contact("Ann", None));

        assert_eq!(book.len(), 2);
        let ann = book.find("Ann").unwrap();
        assert!(ann.phones().is_empty());
        assert!(ann.birthday().is_none());
        assert_eq!(names(&book.list()), vec!["Ann", "Bob"]);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut book = AddressBook::new();
        book.add(contact("Ann", None));
        book.add(contact("Bob", None));

        assert!(book.delete("Ann").is_some());
        assert!(book.delete("Ann").is_none());
        assert!(book.find("Ann").is_none());
        assert_eq!(names(&book.list()), vec!["Bob"]);

        assert!(book.delete("Nobody").is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let mut book = AddressBook::new();
        for name in ["Zed", "Ann", "Mia"] {
            book.add(contact(name, None));
        }
        assert_eq!(names(&book.list()), vec!["Zed", "Ann", "Mia"]);
    }

    #[test]
    fn test_upcoming_birthdays_window() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let mut book = AddressBook::new();
        book.add(contact("Far", Some("20.03.1980")));
        book.add(contact("Soon", Some("13.03.1990")));
        book.add(contact("Today", Some("10.03.2000")));
        book.add(contact("Edge", Some("17.03.1995")));
        book.add(contact("None", None));

        let upcoming = book.upcoming_birthdays(today, DEFAULT_BIRTHDAY_WINDOW_DAYS);
        assert_eq!(names(&upcoming), vec!["Soon", "Today", "Edge"]);

        let upcoming = book.upcoming_birthdays(today, 0);
        assert_eq!(names(&upcoming), vec!["Today"]);

        let upcoming = book.upcoming_birthdays(today, 10);
        assert_eq!(names(&upcoming), vec!["Far", "Soon", "Today", "Edge"]);
    }
}
