//! Command parsing and dispatch.
//!
//! A line of input is parsed into a [`Command`], executed by the
//! [`Assistant`] against its address book, and answered with a [`Reply`].

pub mod handlers;
pub mod parser;

pub use handlers::{Assistant, Reply, INVALID_COMMAND_MESSAGE, NO_BIRTHDAYS_MESSAGE};
pub use parser::{parse_input, Command};
