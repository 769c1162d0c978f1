//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while operating on the address book or running a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A phone number, birthday or name failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No contact is stored under this name
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// The contact exists but has no birthday set
    #[error("No birthday given for {0}")]
    MissingBirthday(String),

    /// A command received fewer arguments than it needs
    #[error("Command '{command}' expects {expected} argument(s), got {actual}")]
    Arity {
        command: String,
        expected: usize,
        actual: usize,
    },
}

impl BookError {
    /// The fixed text shown to the user for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(ValidationError::InvalidPhone(_)) => {
                "The number must consist of 10 digits".to_string()
            }
            Self::Validation(ValidationError::InvalidBirthday(_)) => {
                "Invalid date format. Use DD.MM.YYYY".to_string()
            }
            Self::Validation(ValidationError::EmptyName) | Self::Arity { .. } => {
                "You must enter a name and a number or a birthday.".to_string()
            }
            Self::NotFound(_) => "This name is not in the contact list.".to_string(),
            Self::MissingBirthday(name) => format!("No birthday given for {}", name),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BookError::NotFound("Bob".to_string());
        assert_eq!(err.to_string(), "Contact not found: Bob");

        let err = BookError::Arity {
            command: "add".to_string(),
            expected: 2,
            actual: 1,
        };
        assert_eq!(err.to_string(), "Command 'add' expects 2 argument(s), got 1");

        let err = ConfigError::InvalidValue {
            var: "BIRTHDAY_WINDOW_DAYS".to_string(),
            reason: "Must be a number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for BIRTHDAY_WINDOW_DAYS: Must be a number"
        );
    }

    #[test]
    fn test_validation_converts_transparently() {
        let err: BookError = ValidationError::InvalidPhone("12".to_string()).into();
        assert_eq!(err.to_string(), "phone must be 10 digits");
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            BookError::from(ValidationError::InvalidPhone("1".to_string())).user_message(),
            "The number must consist of 10 digits"
        );
        assert_eq!(
            BookError::from(ValidationError::InvalidBirthday("x".to_string())).user_message(),
            "Invalid date format. Use DD.MM.YYYY"
        );
        assert_eq!(
            BookError::NotFound("Carol".to_string()).user_message(),
            "This name is not in the contact list."
        );
        assert_eq!(
            BookError::MissingBirthday("Dave".to_string()).user_message(),
            "No birthday given for Dave"
        );
        assert_eq!(
            BookError::Arity {
                command: "add".to_string(),
                expected: 2,
                actual: 0,
            }
            .user_message(),
            "You must enter a name and a number or a birthday."
        );
    }
}
