//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Minimum length of a phone number once separators are stripped.
pub const MIN_PHONE_LENGTH: usize = 8;

/// A type-safe wrapper for phone numbers.
///
/// Numbers are accepted when, after removing whitespace and hyphens, at least
/// [`MIN_PHONE_LENGTH`] characters remain. The original input is kept as typed.
///
/// # Example
///
/// ```
/// use contact_form::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("123 45 678").unwrap();
/// assert_eq!(phone.compact(), "12345678");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the number is too short.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Check a raw input against the length rule.
    pub fn is_valid(phone: &str) -> bool {
        strip_separators(phone).chars().count() >= MIN_PHONE_LENGTH
    }

    /// Get the phone number as typed.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The number without whitespace and hyphens.
    pub fn compact(&self) -> String {
        strip_separators(&self.0)
    }

    /// Format for display: eight digit numbers become `XXX XX XXX`.
    pub fn display_format(&self) -> String {
        format_phone_number(&self.0)
    }
}

fn strip_separators(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

/// Render a Norwegian eight digit number as `XXX XX XXX`.
///
/// Any input that does not reduce to exactly eight digits is returned unchanged.
pub fn format_phone_number(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 8 {
        format!("{} {} {}", &digits[..3], &digits[3..5], &digits[5..])
    } else {
        phone.to_string()
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
