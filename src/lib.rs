//! Contact Book - a command-line assistant for contacts and birthdays.
//!
//! The assistant keeps contact names, phone numbers and birthdays in memory,
//! answers line-oriented commands, and lists birthdays coming up within a
//! configurable window, moving weekend dates to the following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: The `Record` stored per contact
//! - **book**: The address book and the upcoming-birthday computation
//! - **commands**: Command parsing and handlers with their user-facing replies
//! - **session**: The interactive read-dispatch-print loop
//! - **clock**: Source of the current date
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod book;
pub mod clock;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod session;

pub use book::{AddressBook, UpcomingBirthday};
pub use clock::{Clock, FixedClock, SystemClock};
pub use commands::{Assistant, Command, Reply};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, BookResult, ConfigError};
pub use models::Record;
pub use session::Session;
