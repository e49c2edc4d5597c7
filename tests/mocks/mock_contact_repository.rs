use contact_assistant::models::Contact;
use contact_assistant::repositories::ContactRepository;
use std::cell::RefCell;
use std::collections::HashMap;

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that can be
/// easily configured with test data and tracks method calls for verification.
/// Iteration order is sorted by name so assertions stay deterministic.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockContactRepository {
    contacts: HashMap<String, Contact>,
    call_counts: RefCell<HashMap<String, usize>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository without counting a call.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        let mut repo = Self::new();
        for contact in contacts {
            repo.contacts
                .insert(contact.name().as_str().to_string(), contact);
        }
        repo
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        *self.call_counts.borrow().get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        *self
            .call_counts
            .borrow_mut()
            .entry(method.to_string())
            .or_insert(0) += 1;
    }
}

impl ContactRepository for MockContactRepository {
    fn add(&mut self, contact: Contact) {
        self.track_call("add");
        self.contacts
            .insert(contact.name().as_str().to_string(), contact);
    }

    fn find(&self, name: &str) -> Option<&Contact> {
        self.track_call("find");
        self.contacts.get(name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.track_call("find_mut");
        self.contacts.get_mut(name)
    }

    fn delete(&mut self, name: &str) -> Option<Contact> {
        self.track_call("delete");
        self.contacts.remove(name)
    }

    fn list(&self) -> Vec<&Contact> {
        self.track_call("list");
        let mut contacts: Vec<&Contact> = self.contacts.values().collect();
        contacts.sort_by(|a, b| a.name().as_str().cmp(b.name().as_str()));
        contacts
    }
}
