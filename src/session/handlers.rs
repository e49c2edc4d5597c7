//! Command handlers for the assistant bot.
//!
//! Each handler maps one [`Command`] onto the contact service and turns the
//! result into a [`Reply`]. Errors become error replies; nothing here ends
//! the process.

use super::commands::Command;
use super::render::{contact_line, upcoming_line, Reply};
use crate::config::Config;
use crate::error::{CommandError, CommandResult, ContactError};
use crate::repositories::ContactRepository;
use crate::services::{AddOutcome, ContactService};
use tracing::{debug, warn};

const HELP_TEXT: &str = "\
Available commands:
  hello                                  greet the bot
  add <name> [phone...]                  add a contact or append phones
  change <name> <old phone> <new phone>  replace a phone number
  remove-phone <name> <phone>            remove a phone number
  phone <name>                           show a contact
  all                                    show every contact
  delete <name>                          delete a contact
  add-birthday <name> <DD.MM.YYYY>       set a birthday
  show-birthday <name>                   show a birthday
  birthdays [days]                       birthdays coming up
  export                                 print all contacts as JSON
  close | exit | bye                     leave";

/// The assistant bot: a contact service plus the session's settings.
pub struct AssistantBot<R: ContactRepository> {
    service: ContactService<R>,
    config: Config,
}

impl<R: ContactRepository> AssistantBot<R> {
    pub fn new(service: ContactService<R>, config: Config) -> Self {
        Self { service, config }
    }

    pub fn service(&self) -> &ContactService<R> {
        &self.service
    }

    /// Run one raw input line. Bytes that are not UTF-8 get an error reply.
    pub fn handle_bytes(&mut self, raw: &[u8]) -> Option<Reply> {
        match std::str::from_utf8(raw) {
            Ok(line) => self.handle_line(line),
            Err(err) => {
                debug!(valid_up_to = err.valid_up_to(), "Rejected non-UTF-8 input");
                Some(error_reply(&CommandError::InvalidEncoding))
            }
        }
    }

    /// Parse and run one input line. Blank lines produce no reply.
    pub fn handle_line(&mut self, line: &str) -> Option<Reply> {
        let result = Command::parse(line).and_then(|command| match command {
            Some(command) => self.handle(command).map(Some),
            None => Ok(None),
        });

        match result {
            Ok(reply) => reply,
            Err(err) => Some(error_reply(&err)),
        }
    }

    /// Run a parsed command.
    pub fn handle(&mut self, command: Command) -> CommandResult<Reply> {
        debug!(?command, "Handling command");

        let reply = match command {
            Command::Hello => Reply::info("How can I help you?"),
            Command::Help => Reply::info(HELP_TEXT),
            Command::Add { name, phones } => match self.service.add_contact(&name, &phones)? {
                AddOutcome::Added => Reply::success("Contact added."),
                AddOutcome::Updated => Reply::success("Contact updated."),
            },
            Command::Change {
                name,
                old_phone,
                new_phone,
            } => {
                self.service.change_phone(&name, &old_phone, &new_phone)?;
                Reply::success("Phone number updated.")
            }
            Command::RemovePhone { name, phone } => {
                self.service.remove_phone(&name, &phone)?;
                Reply::success("Phone number removed.")
            }
            Command::Phone { name } => Reply::info(contact_line(self.service.contact(&name)?)),
            Command::All => self.show_all(),
            Command::Delete { name } => {
                if self.service.delete_contact(&name) {
                    Reply::success(format!("Contact deleted: {}", name))
                } else {
                    Reply::warning(format!("Nothing to delete: {}", name))
                }
            }
            Command::AddBirthday { name, birthday } => {
                self.service.add_birthday(&name, &birthday)?;
                Reply::success("Birthday added.")
            }
            Command::ShowBirthday { name } => {
                let birthday = self.service.birthday(&name)?;
                Reply::info(format!("{}'s birthday is {}.", name, birthday))
            }
            Command::Birthdays { days } => {
                self.upcoming(days.unwrap_or(self.config.birthday_window_days))
            }
            Command::Export => self.export()?,
            Command::Exit => Reply::farewell(),
        };

        Ok(reply)
    }

    fn show_all(&self) -> Reply {
        let contacts = self.service.contacts();
        if contacts.is_empty() {
            return Reply::warning("Address book is empty.");
        }
        let lines: Vec<String> = contacts.into_iter().map(contact_line).collect();
        Reply::info(lines.join("\n"))
    }

    fn upcoming(&self, days: u32) -> Reply {
        let upcoming = self.service.upcoming_birthdays(self.config.today(), days);
        if upcoming.is_empty() {
            return Reply::warning(format!("No upcoming birthdays in the next {} days.", days));
        }
        let lines: Vec<String> = upcoming.iter().map(upcoming_line).collect();
        Reply::info(lines.join("\n"))
    }

    fn export(&self) -> CommandResult<Reply> {
        let json = serde_json::to_string_pretty(&self.service.contacts())
            .map_err(|e| CommandError::Export(e.to_string()))?;
        Ok(Reply::plain(json))
    }
}

/// Error reply for a failed command, quoting the rejected value if any.
fn error_reply(err: &CommandError) -> Reply {
    warn!(error = %err, "Command failed");
    match err {
        CommandError::Contact(ContactError::Validation(invalid)) => match invalid.input() {
            Some(input) => Reply::error(format!("Error: {} (got: {})", err, input)),
            None => Reply::error(format!("Error: {}", err)),
        },
        _ => Reply::error(format!("Error: {}", err)),
    }
}
