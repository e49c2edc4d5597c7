//! End-to-end scenarios over the contact record and the address book.
//!
//! Each test pins `today`, so results do not depend on the system clock.

mod fixtures;

use contact_assistant::repositories::{AddressBook, ContactRepository};
use contact_assistant::{Contact, ContactError, ValidationError};
use fixtures::{date, names, sample_contact};

#[test]
fn scenario_a_add_and_render() {
    let mut book = AddressBook::new();
    let mut ann = Contact::new("Ann").unwrap();
    ann.add_phone("0501234567").unwrap();
    book.add(ann);

    assert_eq!(book.find("Ann").unwrap().render(), "Ann; 0501234567; N/A");
}

#[test]
fn scenario_b_birthday_later_this_month() {
    let ann = sample_contact("Ann", &[], Some("15.03.1990"));
    assert_eq!(ann.days_until_birthday(date(10, 3, 2024)), Some(5));
}

#[test]
fn scenario_c_birthday_already_passed() {
    let ann = sample_contact("Ann", &[], Some("15.03.1990"));
    assert_eq!(ann.days_until_birthday(date(20, 3, 2024)), Some(360));
}

#[test]
fn scenario_d_upcoming_window_filters() {
    let mut book = AddressBook::new();
    book.add(sample_contact("Near", &[], Some("13.03.1985")));
    book.add(sample_contact("Far", &[], Some("20.03.1985")));

    let upcoming = book.upcoming_birthdays(date(10, 3, 2024), 7);
    assert_eq!(names(&upcoming), vec!["Near"]);
}

#[test]
fn scenario_e_edit_missing_phone_fails() {
    let mut ann = sample_contact("Ann", &["0503333333"], None);

    let err = ann.edit_phone("0501111111", "0502222222").unwrap_err();
    assert_eq!(err, ContactError::PhoneNotFound("0501111111".into()));
    assert_eq!(ann.phones_joined(","), "0503333333");
}

#[test]
fn delete_then_find_is_not_found() {
    let mut book = AddressBook::new();
    book.add(sample_contact("Ann", &[], None));

    book.delete("Ann");
    assert!(book.find("Ann").is_none());

    book.delete("Never");
    assert!(book.find("Never").is_none());
}

#[test]
fn delete_twice_matches_delete_once() {
    let mut once = AddressBook::new();
    let mut twice = AddressBook::new();
    for book in [&mut once, &mut twice] {
        book.add(sample_contact("Ann", &["0501234567"], None));
        book.add(sample_contact("Bob", &[], Some("01.01.2000")));
    }

    once.delete("Ann");
    twice.delete("Ann");
    twice.delete("Ann");

    assert_eq!(once.list(), twice.list());
}

#[test]
fn upcoming_includes_today_and_boundary() {
    let mut book = AddressBook::new();
    book.add(sample_contact("Today", &[], Some("10.03.2000")));
    book.add(sample_contact("Boundary", &[], Some("17.03.2000")));
    book.add(sample_contact("Outside", &[], Some("18.03.2000")));

    let upcoming = book.upcoming_birthdays(date(10, 3, 2024), 7);
    assert_eq!(names(&upcoming), vec!["Today", "Boundary"]);
}

#[test]
fn upcoming_wraps_around_new_year() {
    let mut book = AddressBook::new();
    book.add(sample_contact("NewYear", &[], Some("02.01.1999")));
    book.add(sample_contact("Xmas", &[], Some("25.12.1999")));

    let upcoming = book.upcoming_birthdays(date(28, 12, 2024), 7);
    assert_eq!(names(&upcoming), vec!["NewYear"]);
}

#[test]
fn leap_day_birthday_celebrated_on_feb_28() {
    let leap = sample_contact("Leap", &[], Some("29.02.2000"));
    assert_eq!(leap.days_until_birthday(date(27, 2, 2025)), Some(1));
    assert_eq!(leap.days_until_birthday(date(28, 2, 2025)), Some(0));
    assert_eq!(leap.days_until_birthday(date(27, 2, 2028)), Some(2));
}

#[test]
fn invalid_inputs_leave_record_untouched() {
    let mut ann = sample_contact("Ann", &["0501234567"], Some("15.03.1990"));
    let before = ann.clone();

    assert_eq!(
        ann.add_phone("050123456"),
        Err(ContactError::Validation(ValidationError::InvalidPhone(
            "050123456".into()
        )))
    );
    assert!(ann.set_birthday("30.02.1990").is_err());
    assert!(ann.edit_phone("0501234567", "x").is_err());

    assert_eq!(ann, before);
}
