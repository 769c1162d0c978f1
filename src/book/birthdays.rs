//! Upcoming birthday computation.
//!
//! A birthday is projected onto the current year, kept if it lands inside
//! `[today, today + window]`, and then moved off the weekend: Saturday goes
//! forward two days, Sunday one, so the greeting always falls on a Monday.

use crate::domain::{Birthday, ContactName, BIRTHDAY_FORMAT};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::fmt;

/// Default lookahead used by the `birthdays` command.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// A contact whose birthday falls inside the lookahead window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: ContactName,
    pub congratulation_date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, birthday: {}",
            self.name,
            self.congratulation_date.format(BIRTHDAY_FORMAT)
        )
    }
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// The date `birthday` is observed on in `year`.
///
/// Feb 29 is observed on Feb 28 when `year` is not a leap year. `None` only
/// if `year` is outside chrono's range.
pub fn observed_in_year(birthday: &Birthday, year: i32) -> Option<NaiveDate> {
    let (month, day) = match (birthday.month(), birthday.day()) {
        (2, 29) if !is_leap_year(year) => (2, 28),
        month_day => month_day,
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Shift weekend dates forward to the following Monday.
pub fn congratulation_date(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

/// Congratulation date for `birthday` if its occurrence this year lies
/// within `window_days` of `today`, bounds included.
pub fn upcoming(birthday: &Birthday, today: NaiveDate, window_days: u32) -> Option<NaiveDate> {
    let occurrence = observed_in_year(birthday, today.year())?;
    // A window reaching past chrono's last date covers everything after today
    let last_day = today
        .checked_add_signed(Duration::days(i64::from(window_days)))
        .unwrap_or(NaiveDate::MAX);

    if occurrence < today || occurrence > last_day {
        return None;
    }

    Some(congratulation_date(occurrence))
}
