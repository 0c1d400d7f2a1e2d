//! Field validation rules
//!
//! Pure functions with no terminal coupling. Only username, password and
//! description carry live validation; every other field is checked for
//! non-emptiness by the submit gate.

use crate::state::FieldName;
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref USERNAME_REGEX: Regex = Regex::new(r"^[a-zA-Z0-9]{6,}$").unwrap();
}

/// Symbols accepted by the password strength rule
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*()-_=+[]{}|;:'\\\",.<>?/`~";

pub const PASSWORD_MIN_CHARS: usize = 8;
pub const DESCRIPTION_MIN_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 1000;

/// A failed field rule. The display text is the message shown under the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("At least 6 alphanumeric characters, no spaces or symbols")]
    Username,
    #[error("At least 8 characters, 1 letter, 1 number, 1 symbol")]
    Password,
    #[error("Between 100 and 1000 characters")]
    DescriptionLength,
}

/// Validity flag plus the message to display (empty when valid)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verdict {
    pub valid: bool,
    pub message: String,
}

impl Verdict {
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    pub fn from_result(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Self::ok(),
            Err(err) => Self {
                valid: false,
                message: err.to_string(),
            },
        }
    }
}

/// Whether a field is re-validated on every edit
pub fn has_live_validation(field: FieldName) -> bool {
    matches!(
        field,
        FieldName::Username | FieldName::Password | FieldName::Description
    )
}

/// Validate a candidate value for a field.
///
/// Fields without a live rule always produce a valid verdict.
pub fn validate(field: FieldName, value: &str) -> Verdict {
    let result = match field {
        FieldName::Username => validate_username(value),
        FieldName::Password => validate_password(value),
        FieldName::Description => validate_description(value),
        _ => Ok(()),
    };
    Verdict::from_result(result)
}

pub fn validate_username(value: &str) -> Result<(), ValidationError> {
    if USERNAME_REGEX.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::Username)
    }
}

pub fn validate_password(value: &str) -> Result<(), ValidationError> {
    let has_letter = value.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    let has_symbol = value.chars().any(|c| PASSWORD_SYMBOLS.contains(c));

    if value.chars().count() >= PASSWORD_MIN_CHARS && has_letter && has_digit && has_symbol {
        Ok(())
    } else {
        Err(ValidationError::Password)
    }
}

pub fn validate_description(value: &str) -> Result<(), ValidationError> {
    let len = value.trim().chars().count();
    if (DESCRIPTION_MIN_CHARS..=DESCRIPTION_MAX_CHARS).contains(&len) {
        Ok(())
    } else {
        Err(ValidationError::DescriptionLength)
    }
}
