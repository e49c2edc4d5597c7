//! Command parsing.
//!
//! Turns one input line into a [`Command`]. Tokens are split on whitespace and
//! the command word is matched case-insensitively; arguments are kept verbatim.

use crate::config::MAX_BIRTHDAY_WINDOW_DAYS;
use crate::error::{CommandError, CommandResult};

pub const ADD_USAGE: &str = "add <name> [phone...]";
pub const CHANGE_USAGE: &str = "change <name> <old phone> <new phone>";
pub const REMOVE_PHONE_USAGE: &str = "remove-phone <name> <phone>";
pub const PHONE_USAGE: &str = "phone <name>";
pub const DELETE_USAGE: &str = "delete <name>";
pub const ADD_BIRTHDAY_USAGE: &str = "add-birthday <name> <DD.MM.YYYY>";
pub const SHOW_BIRTHDAY_USAGE: &str = "show-birthday <name>";

/// A parsed assistant command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Add {
        name: String,
        phones: Vec<String>,
    },
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    RemovePhone {
        name: String,
        phone: String,
    },
    Phone {
        name: String,
    },
    All,
    Delete {
        name: String,
    },
    AddBirthday {
        name: String,
        birthday: String,
    },
    ShowBirthday {
        name: String,
    },
    /// `None` means the configured default window.
    Birthdays {
        days: Option<u32>,
    },
    Export,
    Exit,
}

impl Command {
    /// Parse an input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> CommandResult<Option<Self>> {
        let mut tokens = line.split_whitespace();
        let Some(word) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<String> = tokens.map(str::to_string).collect();

        let command = match word.to_lowercase().as_str() {
            "hello" => Self::Hello,
            "help" => Self::Help,
            "add" => {
                let (name, phones) = args
                    .split_first()
                    .ok_or(CommandError::NotEnoughArguments { usage: ADD_USAGE })?;
                Self::Add {
                    name: name.clone(),
                    phones: phones.to_vec(),
                }
            }
            "change" | "edit" => {
                let [name, old_phone, new_phone] = take_args::<3>(&args, CHANGE_USAGE)?;
                Self::Change {
                    name,
                    old_phone,
                    new_phone,
                }
            }
            "remove-phone" => {
                let [name, phone] = take_args::<2>(&args, REMOVE_PHONE_USAGE)?;
                Self::RemovePhone { name, phone }
            }
            "phone" | "find" => {
                let [name] = take_args::<1>(&args, PHONE_USAGE)?;
                Self::Phone { name }
            }
            "all" | "show" => Self::All,
            "delete" => {
                let [name] = take_args::<1>(&args, DELETE_USAGE)?;
                Self::Delete { name }
            }
            "add-birthday" | "birthday" => {
                let [name, birthday] = take_args::<2>(&args, ADD_BIRTHDAY_USAGE)?;
                Self::AddBirthday { name, birthday }
            }
            "show-birthday" => {
                let [name] = take_args::<1>(&args, SHOW_BIRTHDAY_USAGE)?;
                Self::ShowBirthday { name }
            }
            "birthdays" | "upcoming" => Self::Birthdays {
                days: args.first().map(|d| parse_days(d)).transpose()?,
            },
            "export" => Self::Export,
            "close" | "exit" | "bye" => Self::Exit,
            _ => return Err(CommandError::UnknownCommand(word.to_string())),
        };

        Ok(Some(command))
    }
}

/// The first `N` arguments; extra trailing arguments are ignored.
fn take_args<const N: usize>(args: &[String], usage: &'static str) -> CommandResult<[String; N]> {
    if args.len() < N {
        return Err(CommandError::NotEnoughArguments { usage });
    }
    Ok(std::array::from_fn(|i| args[i].clone()))
}

/// A birthday window in days, capped like the configured default.
fn parse_days(value: &str) -> CommandResult<u32> {
    let days = value.parse::<u32>().map_err(|_| {
        CommandError::InvalidArgument(format!("days must be a non-negative number, got: {}", value))
    })?;
    if days > MAX_BIRTHDAY_WINDOW_DAYS {
        return Err(CommandError::InvalidArgument(format!(
            "days must be at most {}, got: {}",
            MAX_BIRTHDAY_WINDOW_DAYS, days
        )));
    }
    Ok(days)
}
