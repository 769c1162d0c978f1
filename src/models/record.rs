//! Record model representing one person in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A single contact: a fixed name, its phone numbers and an optional birthday.
///
/// Phones keep insertion order and may repeat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: ContactName,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create an empty record for `name`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::with_name(ContactName::new(name)?))
    }

    /// Create an empty record for an already validated name.
    pub fn with_name(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `number` and append it. Duplicates are kept.
    pub fn add_phone(&mut self, number: &str) -> Result<(), ValidationError> {
        self.push_phone(PhoneNumber::new(number)?);
        Ok(())
    }

    /// Append an already validated phone. Duplicates are kept.
    pub fn push_phone(&mut self, phone: PhoneNumber) {
        debug!(contact = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
    }

    /// Remove the first phone equal to `number`. Does nothing if absent.
    pub fn remove_phone(&mut self, number: &str) {
        if let Some(pos) = self.phones.iter().position(|p| p.as_str() == number) {
            debug!(contact = %self.name, phone = number, "Removing phone");
            self.phones.remove(pos);
        }
    }

    /// Replace every phone equal to `old` with `new`, keeping positions.
    ///
    /// `new` is validated even when nothing matches `old`; a miss is a
    /// silent no-op. Returns the number of entries replaced.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<usize, ValidationError> {
        let replacement = PhoneNumber::new(new)?;
        let mut replaced = 0;

        for phone in self.phones.iter_mut().filter(|p| p.as_str() == old) {
            *phone = replacement.clone();
            replaced += 1;
        }

        debug!(contact = %self.name, old, new, replaced, "Edited phone");
        Ok(replaced)
    }

    /// First phone equal to `number`, if any.
    pub fn find_phone(&self, number: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == number)
    }

    /// Validate `raw` as `DD.MM.YYYY` and set it, replacing any previous birthday.
    pub fn add_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        let birthday = Birthday::new(raw)?;
        debug!(contact = %self.name, birthday = %birthday, "Setting birthday");
        self.birthday = Some(birthday);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(PhoneNumber::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))
    }
}
