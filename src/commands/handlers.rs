//! Command handlers.
//!
//! Every handler returns `BookResult<Reply>`. `Assistant::respond` is the
//! single place where errors become the fixed user-facing messages.

use super::parser::Command;
use crate::book::{AddressBook, DEFAULT_WINDOW_DAYS};
use crate::clock::{Clock, SystemClock};
use crate::domain::{ContactName, PhoneNumber};
use crate::error::{BookError, BookResult};
use crate::models::Record;
use tracing::{debug, warn};

/// Shown by `birthdays` when nothing is due.
pub const NO_BIRTHDAYS_MESSAGE: &str = "No birthdays next week";

/// Shown for unrecognised commands.
pub const INVALID_COMMAND_MESSAGE: &str = "Invalid command.";

/// What a handler produced, before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// One line of text.
    Message(String),
    /// Several lines, printed in order.
    Lines(Vec<String>),
    /// The birthday query found nobody.
    NoBirthdays,
    /// The session should end.
    Exit,
}

impl Reply {
    fn message(text: impl Into<String>) -> Self {
        Self::Message(text.into())
    }

    /// The lines to print for this reply.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Message(text) => vec![text.clone()],
            Self::Lines(lines) => lines.clone(),
            Self::NoBirthdays => vec![NO_BIRTHDAYS_MESSAGE.to_string()],
            Self::Exit => vec!["Good bye!".to_string()],
        }
    }
}

/// Split off exactly `N` leading arguments; extra ones are ignored.
fn take_args<'a, const N: usize>(command: &str, args: &'a [String]) -> BookResult<[&'a str; N]> {
    if args.len() < N {
        return Err(BookError::Arity {
            command: command.to_string(),
            expected: N,
            actual: args.len(),
        });
    }
    Ok(std::array::from_fn(|i| args[i].as_str()))
}

/// Owns the address book for one session and executes commands against it.
pub struct Assistant<C: Clock = SystemClock> {
    book: AddressBook,
    clock: C,
    window_days: u32,
}

impl Assistant<SystemClock> {
    pub fn new(window_days: u32) -> Self {
        Self::with_clock(SystemClock, window_days)
    }
}

impl Default for Assistant<SystemClock> {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_DAYS)
    }
}

impl<C: Clock> Assistant<C> {
    pub fn with_clock(clock: C, window_days: u32) -> Self {
        Self {
            book: AddressBook::new(),
            clock,
            window_days,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Execute `command`, turning any error into its user-facing message.
    pub fn respond(&mut self, command: Command) -> Reply {
        match self.execute(command) {
            Ok(reply) => reply,
            Err(err) => {
                warn!(error = %err, "Command failed");
                Reply::Message(err.user_message())
            }
        }
    }

    /// Execute `command` and return the raw result.
    pub fn execute(&mut self, command: Command) -> BookResult<Reply> {
        debug!(?command, "Executing command");
        match command {
            Command::Hello => Ok(Reply::message("How can I help you?")),
            Command::Add(args) => self.add_contact(&args),
            Command::Change(args) => self.change_contact(&args),
            Command::Phone(args) => self.show_phone(&args),
            Command::All => Ok(self.show_all()),
            Command::AddBirthday(args) => self.add_birthday(&args),
            Command::ShowBirthday(args) => self.show_birthday(&args),
            Command::Birthdays => Ok(self.birthdays()),
            Command::Delete(args) => self.delete_contact(&args),
            Command::Exit => Ok(Reply::Exit),
            Command::Unknown(_) => Ok(Reply::message(INVALID_COMMAND_MESSAGE)),
        }
    }

    fn record_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.book
            .find_mut(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))
    }

    fn add_contact(&mut self, args: &[String]) -> BookResult<Reply> {
        let [name, phone] = take_args::<2>("add", args)?;
        // Validate before touching the book so a bad number leaves no record behind
        let phone = PhoneNumber::new(phone)?;

        if let Some(record) = self.book.find_mut(name) {
            record.push_phone(phone);
            return Ok(Reply::message("Contact updated."));
        }

        let mut record = Record::with_name(ContactName::new(name)?);
        record.push_phone(phone);
        self.book.add_record(record);
        Ok(Reply::message("Contact added."))
    }

    fn change_contact(&mut self, args: &[String]) -> BookResult<Reply> {
        let [name, old_phone, new_phone] = take_args::<3>("change", args)?;
        self.record_mut(name)?.edit_phone(old_phone, new_phone)?;
        Ok(Reply::message("Contact changed."))
    }

    fn show_phone(&self, args: &[String]) -> BookResult<Reply> {
        let [name] = take_args::<1>("phone", args)?;
        self.book
            .find(name)
            .map(|record| Reply::Message(record.to_string()))
            .ok_or_else(|| BookError::NotFound(name.to_string()))
    }

    fn show_all(&self) -> Reply {
        if self.book.is_empty() {
            return Reply::message("The contact list is empty.");
        }
        Reply::Lines(self.book.records().map(Record::to_string).collect())
    }

    fn add_birthday(&mut self, args: &[String]) -> BookResult<Reply> {
        let [name, birthday] = take_args::<2>("add-birthday", args)?;
        self.record_mut(name)?.add_birthday(birthday)?;
        Ok(Reply::message("Birthday added."))
    }

    fn show_birthday(&self, args: &[String]) -> BookResult<Reply> {
        let [name] = take_args::<1>("show-birthday", args)?;
        let record = self
            .book
            .find(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))?;
        let birthday = record
            .birthday()
            .ok_or_else(|| BookError::MissingBirthday(name.to_string()))?;
        Ok(Reply::Message(format!(
            "Contact name: {}, birthday: {}.",
            name, birthday
        )))
    }

    fn birthdays(&self) -> Reply {
        let upcoming = self
            .book
            .upcoming_birthdays_from(self.clock.today(), self.window_days);
        if upcoming.is_empty() {
            return Reply::NoBirthdays;
        }
        Reply::Lines(upcoming.iter().map(ToString::to_string).collect())
    }

    fn delete_contact(&mut self, args: &[String]) -> BookResult<Reply> {
        let [name] = take_args::<1>("delete", args)?;
        self.book.delete(name)?;
        Ok(Reply::message("Contact deleted."))
    }
}
