//! Field validation errors.

use std::fmt;

/// Errors raised when a form field fails validation.
///
/// The `Display` output is the user-facing text shown next to the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty after trimming.
    Required,

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),
}

impl ValidationError {
    /// The message rendered in the inline error element.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Required => "Dette feltet er påkrevd",
            Self::InvalidEmail(_) => "Vennligst oppgi en gyldig e-postadresse",
            Self::InvalidPhone(_) => "Vennligst oppgi et gyldig telefonnummer",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for ValidationError {}
