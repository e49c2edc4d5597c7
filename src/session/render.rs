//! Reply formatting and terminal colors.

use crate::models::Contact;
use crate::services::UpcomingBirthday;
use colored::Colorize;

/// How a reply should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyLevel {
    Info,
    Success,
    Warning,
    Error,
    /// Machine-readable output, never colored.
    Plain,
}

/// One reply printed back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub level: ReplyLevel,
    pub text: String,
    /// The session ends after this reply.
    pub exit: bool,
}

impl Reply {
    pub fn new(level: ReplyLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            exit: false,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(ReplyLevel::Info, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(ReplyLevel::Success, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(ReplyLevel::Warning, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(ReplyLevel::Error, text)
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(ReplyLevel::Plain, text)
    }

    pub fn farewell() -> Self {
        Self {
            exit: true,
            ..Self::info("Good bye!")
        }
    }

    /// The reply text with ANSI colors applied for its level.
    pub fn painted(&self) -> String {
        match self.level {
            ReplyLevel::Info => self.text.cyan().to_string(),
            ReplyLevel::Success => self.text.green().to_string(),
            ReplyLevel::Warning => self.text.yellow().to_string(),
            ReplyLevel::Error => self.text.red().to_string(),
            ReplyLevel::Plain => self.text.clone(),
        }
    }
}

/// Labelled single-line description of a contact.
pub fn contact_line(contact: &Contact) -> String {
    format!(
        "Contact name: {}, phones: {}, birthday: {}",
        contact.name(),
        contact.phones_joined("; "),
        contact.birthday_label()
    )
}

/// `Ann: 15.03.1990 in 5 days`, with `today` and singular forms handled.
pub fn upcoming_line(upcoming: &UpcomingBirthday) -> String {
    let when = match upcoming.days_until {
        0 => "today".to_string(),
        1 => "in 1 day".to_string(),
        n => format!("in {} days", n),
    };
    format!("{}: {} {}", upcoming.name, upcoming.birthday, when)
}
