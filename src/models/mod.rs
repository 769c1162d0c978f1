//! Data models for the address book.
//!
//! A `Record` is the unit the address book stores: one name, its phone
//! numbers and an optional birthday.

pub mod record;

pub use record::Record;
