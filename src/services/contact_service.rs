//! Contact service layer.
//!
//! Business logic behind the assistant's commands: creating and updating
//! contacts, phone edits, birthdays and the upcoming-birthday report.

use crate::domain::{Birthday, PhoneNumber};
use crate::error::{ContactError, ContactResult};
use crate::models::Contact;
use crate::repositories::ContactRepository;
use chrono::NaiveDate;
use tracing::{debug, info};

/// What `add_contact` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new contact was created.
    Added,
    /// Phones were appended to an existing contact.
    Updated,
}

/// A contact whose birthday falls inside the requested window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub birthday: Birthday,
    pub days_until: u32,
}

/// Contact operations over any `ContactRepository`.
///
/// The service owns its repository; the session passes it around by `&mut`.
#[derive(Debug, Default)]
pub struct ContactService<R: ContactRepository> {
    repo: R,
}

impl<R: ContactRepository> ContactService<R> {
    /// Create a new contact service.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Read access to the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Create `name` with `phones`, or append `phones` to an existing contact.
    ///
    /// Every phone is validated before anything is stored, so a bad phone
    /// leaves the directory exactly as it was.
    pub fn add_contact(&mut self, name: &str, phones: &[String]) -> ContactResult<AddOutcome> {
        let phones = phones
            .iter()
            .map(PhoneNumber::new)
            .collect::<Result<Vec<_>, _>>()?;

        let outcome = match self.repo.find_mut(name) {
            Some(contact) => {
                for phone in &phones {
                    contact.add_phone(phone.as_str())?;
                }
                AddOutcome::Updated
            }
            None => {
                let mut contact = Contact::new(name)?;
                for phone in &phones {
                    contact.add_phone(phone.as_str())?;
                }
                self.repo.add(contact);
                AddOutcome::Added
            }
        };

        info!(name = %name, phones = phones.len(), ?outcome, "Contact saved");
        Ok(outcome)
    }

    /// Replace `old_phone` with `new_phone` on the named contact.
    pub fn change_phone(
        &mut self,
        name: &str,
        old_phone: &str,
        new_phone: &str,
    ) -> ContactResult<()> {
        self.contact_mut(name)?.edit_phone(old_phone, new_phone)?;
        info!(name = %name, "Phone number changed");
        Ok(())
    }

    /// Remove every occurrence of `phone` from the named contact.
    pub fn remove_phone(&mut self, name: &str, phone: &str) -> ContactResult<()> {
        self.contact_mut(name)?.remove_phone(phone);
        debug!(name = %name, "Phone number removed");
        Ok(())
    }

    /// Look up a contact by exact name.
    pub fn contact(&self, name: &str) -> ContactResult<&Contact> {
        self.repo
            .find(name)
            .ok_or_else(|| ContactError::ContactNotFound(name.to_string()))
    }

    fn contact_mut(&mut self, name: &str) -> ContactResult<&mut Contact> {
        self.repo
            .find_mut(name)
            .ok_or_else(|| ContactError::ContactNotFound(name.to_string()))
    }

    /// All contacts in directory order.
    pub fn contacts(&self) -> Vec<&Contact> {
        self.repo.list()
    }

    /// Delete a contact. Returns whether it existed; deleting an absent
    /// name is not an error.
    pub fn delete_contact(&mut self, name: &str) -> bool {
        let existed = self.repo.delete(name).is_some();
        info!(name = %name, existed, "Delete requested");
        existed
    }

    /// Set or replace the named contact's birthday.
    pub fn add_birthday(&mut self, name: &str, birthday: &str) -> ContactResult<()> {
        self.contact_mut(name)?.set_birthday(birthday)?;
        info!(name = %name, "Birthday set");
        Ok(())
    }

    /// The named contact's birthday.
    pub fn birthday(&self, name: &str) -> ContactResult<Birthday> {
        self.contact(name)?
            .birthday()
            .copied()
            .ok_or_else(|| ContactError::BirthdayNotSet(name.to_string()))
    }

    /// Birthdays within `within_days` of `today`, in directory order.
    pub fn upcoming_birthdays(&self, today: NaiveDate, within_days: u32) -> Vec<UpcomingBirthday> {
        let upcoming: Vec<UpcomingBirthday> = self
            .repo
            .upcoming_birthdays(today, within_days)
            .into_iter()
            .filter_map(|contact| {
                let birthday = *contact.birthday()?;
                let days_until = birthday.days_until(today)?;
                Some(UpcomingBirthday {
                    name: contact.name().to_string(),
                    birthday,
                    days_until,
                })
            })
            .collect();

        debug!(%today, within_days, found = upcoming.len(), "Upcoming birthdays computed");
        upcoming
    }
}
