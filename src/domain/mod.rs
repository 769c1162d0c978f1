//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the values a contact is made
//! of: its name, phone numbers and birthday. Each one validates at
//! construction time, so an invalid value can never sit inside a record.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, BIRTHDAY_FORMAT};
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::PhoneNumber;
