//! In-memory address book keyed by contact name.

use super::birthdays::{self, UpcomingBirthday};
use crate::clock::{Clock, SystemClock};
use crate::domain::ContactName;
use crate::error::{BookError, BookResult};
use crate::models::Record;
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::debug;

/// Owns every record, at most one per name.
///
/// Iteration follows insertion order. Overwriting a name keeps its slot.
#[derive(Debug, Default)]
pub struct AddressBook {
    records: HashMap<ContactName, Record>,
    order: Vec<ContactName>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its own name, replacing any record already there.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().clone();
        debug!(contact = %name, "Storing record");
        if self.records.insert(name.clone(), record).is_none() {
            self.order.push(name);
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NotFound` if no such record exists.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        let record = self
            .records
            .remove(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))?;
        self.order.retain(|n| n.as_str() != name);
        debug!(contact = name, "Deleted record");
        Ok(record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.order.iter().filter_map(|name| self.records.get(name))
    }

    /// Birthdays due within `window_days` of the local date.
    pub fn upcoming_birthdays(&self, window_days: u32) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_from(SystemClock.today(), window_days)
    }

    /// Birthdays due within `window_days` of `today`, in insertion order.
    ///
    /// Records without a birthday are skipped.
    pub fn upcoming_birthdays_from(
        &self,
        today: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        let upcoming: Vec<UpcomingBirthday> = self
            .records()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                birthdays::upcoming(birthday, today, window_days).map(|date| UpcomingBirthday {
                    name: record.name().clone(),
                    congratulation_date: date,
                })
            })
            .collect();

        debug!(
            %today,
            window_days,
            count = upcoming.len(),
            "Computed upcoming birthdays"
        );
        upcoming
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
        let mut record = Record::new(name).unwrap();
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        if let Some(b) = birthday {
            record.add_birthday(b).unwrap();
        }
        record
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn names(book: &AddressBook) -> Vec<&str> {
        book.records().map(|r| r.name().as_str()).collect()
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        assert!(book.is_empty());
        book.add_record(record("Bob", &["1234567890"], None));

        let found = book.find("Bob").unwrap();
        assert_eq!(found.name().as_str(), "Bob");
        assert_eq!(found.phones().len(), 1);
        assert!(book.find("Alice").is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_add_record_overwrites_in_place() {
        let mut book = AddressBook::new();
        book.add_record(record("A", &["1111111111"], None));
        book.add_record(record("B", &[], None));
        book.add_record(record("A", &["2222222222"], None));

        assert_eq!(book.len(), 2);
        assert_eq!(names(&book), vec!["A", "B"]);
        assert_eq!(book.find("A").unwrap().phones()[0].as_str(), "2222222222");
    }

    #[test]
    fn test_find_mut_edits_stored_record() {
        let mut book = AddressBook::new();
        book.add_record(record("Bob", &["1234567890"], None));
        book.find_mut("Bob").unwrap().add_phone("0987654321").unwrap();
        assert_eq!(book.find("Bob").unwrap().phones().len(), 2);
    }

    #[test]
    fn test_delete() {
        let mut book = AddressBook::new();
        book.add_record(record("A", &[], None));
        book.add_record(record("B", &[], None));
        book.add_record(record("C", &[], None));

        let removed = book.delete("B").unwrap();
        assert_eq!(removed.name().as_str(), "B");
        assert_eq!(names(&book), vec!["A", "C"]);
        assert!(book.find("B").is_none());
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let mut book = AddressBook::new();
        assert_eq!(
            book.delete("Ghost").unwrap_err(),
            BookError::NotFound("Ghost".to_string())
        );
    }

    #[test]
    fn test_readd_after_delete_goes_last() {
        let mut book = AddressBook::new();
        book.add_record(record("A", &[], None));
        book.add_record(record("B", &[], None));
        book.delete("A").unwrap();
        book.add_record(record("A", &[], None));
        assert_eq!(names(&book), vec!["B", "A"]);
    }

    #[test]
    fn test_upcoming_birthdays_scenario() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", &[], Some("15.03.1990")));

        // 15.03.2025 is a Saturday, so the greeting moves to Monday
        let result = book.upcoming_birthdays_from(date(2025, 3, 10), 7);
        let lines: Vec<String> = result.iter().map(|b| b.to_string()).collect();
        assert_eq!(lines, vec!["Contact name: Alice, birthday: 17.03.2025"]);
    }

    #[test]
    fn test_upcoming_birthdays_weekday_and_sunday() {
        let mut book = AddressBook::new();
        book.add_record(record("Wed", &[], Some("12.03.1985")));
        book.add_record(record("Sun", &[], Some("16.03.1970")));
        book.add_record(record("NoBirthday", &["1234567890"], None));
        book.add_record(record("Past", &[], Some("01.03.2000")));
        book.add_record(record("Later", &[], Some("30.03.2000")));

        let result = book.upcoming_birthdays_from(date(2025, 3, 10), 7);
        let lines: Vec<String> = result.iter().map(|b| b.to_string()).collect();
        assert_eq!(
            lines,
            vec![
                "Contact name: Wed, birthday: 12.03.2025",
                "Contact name: Sun, birthday: 17.03.2025",
            ]
        );
    }

    #[test]
    fn test_upcoming_birthdays_empty() {
        let mut book = AddressBook::new();
        assert!(book.upcoming_birthdays_from(date(2025, 3, 10), 7).is_empty());

        book.add_record(record("Far", &[], Some("01.09.1990")));
        book.add_record(record("None", &[], None));
        assert!(book.upcoming_birthdays_from(date(2025, 3, 10), 7).is_empty());
    }

    #[test]
    fn test_upcoming_birthdays_is_idempotent() {
        let mut book = AddressBook::new();
        book.add_record(record("A", &[], Some("11.03.1990")));
        book.add_record(record("B", &[], Some("14.03.1991")));

        let today = date(2025, 3, 10);
        let first = book.upcoming_birthdays_from(today, 7);
        let second = book.upcoming_birthdays_from(today, 7);
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_upcoming_birthdays_leap_day_in_common_year() {
        let mut book = AddressBook::new();
        book.add_record(record("Leap", &[], Some("29.02.2000")));

        // 28.02.2025 is a Friday
        let result = book.upcoming_birthdays_from(date(2025, 2, 25), 7);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].congratulation_date, date(2025, 2, 28));
    }
}
