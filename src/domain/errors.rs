//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly 10 digits.
    InvalidPhone(String),

    /// The provided birthday is not a real `DD.MM.YYYY` date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name cannot be empty"),
            Self::InvalidPhone(_) => write!(f, "phone must be 10 digits"),
            Self::InvalidBirthday(_) => write!(f, "invalid date format, expected DD.MM.YYYY"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::InvalidPhone("123".to_string()).to_string(),
            "phone must be 10 digits"
        );
        assert_eq!(
            ValidationError::InvalidBirthday("1.1.2000".to_string()).to_string(),
            "invalid date format, expected DD.MM.YYYY"
        );
        assert_eq!(ValidationError::EmptyName.to_string(), "name cannot be empty");
    }
}
