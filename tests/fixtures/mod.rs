//! Test fixtures and sample data.

use chrono::NaiveDate;
use contact_assistant::Contact;

/// Build a date from day, month, year.
#[allow(dead_code)]
pub fn date(day: u32, month: u32, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Create a sample contact with phones and an optional birthday.
#[allow(dead_code)]
pub fn sample_contact(name: &str, phones: &[&str], birthday: Option<&str>) -> Contact {
    let mut contact = Contact::new(name).expect("valid fixture name");
    for phone in phones {
        contact.add_phone(phone).expect("valid fixture phone");
    }
    if let Some(birthday) = birthday {
        contact.set_birthday(birthday).expect("valid fixture birthday");
    }
    contact
}

/// Names of the given contacts, in order.
#[allow(dead_code)]
pub fn names(contacts: &[&Contact]) -> Vec<String> {
    contacts.iter().map(|c| c.name().to_string()).collect()
}
