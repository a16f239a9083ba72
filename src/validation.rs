//! Field and form validation.
//!
//! Rules are evaluated in order and the first failing rule wins:
//!
//! 1. Required and empty after trimming.
//! 2. Email fields must look like `local@domain.tld`.
//! 3. Telephone fields need at least eight characters once spaces and hyphens
//!    are removed.
//!
//! [`check_field`] is pure. [`validate_field`] and [`validate_form`] also update
//! the inline error indicators on the controls they judge.

use crate::domain::{EmailAddress, PhoneNumber, ValidationError};
use crate::form::{ContactForm, FieldKind, FormField};

/// Outcome of validating one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidationResult {
    pub valid: bool,
    pub message: Option<String>,
}

impl FieldValidationResult {
    fn ok() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    fn failed(error: &ValidationError) -> Self {
        Self {
            valid: false,
            message: Some(error.user_message().to_string()),
        }
    }
}

/// Apply the rules to a field without modifying it.
pub fn check_field(field: &FormField) -> FieldValidationResult {
    match first_error(field) {
        Some(error) => FieldValidationResult::failed(&error),
        None => FieldValidationResult::ok(),
    }
}

fn first_error(field: &FormField) -> Option<ValidationError> {
    let value = field.value().trim();

    if value.is_empty() {
        return field.is_required().then_some(ValidationError::Required);
    }

    match field.kind() {
        FieldKind::Email => EmailAddress::new(value).err(),
        FieldKind::Tel => PhoneNumber::new(value).err(),
        _ => None,
    }
}

/// Validate a field and refresh its error indicator.
///
/// Any existing indicator is removed first, so repeated calls never stack.
pub fn validate_field(field: &mut FormField) -> bool {
    field.clear_error();

    let result = check_field(field);
    if let Some(message) = result.message {
        tracing::debug!(field = field.id(), %message, "Field failed validation");
        field.set_error(message);
    }

    result.valid
}

/// Validate every required field. All of them are visited so each invalid
/// control gets its indicator.
pub fn validate_form(form: &mut ContactForm) -> bool {
    form.fields_mut()
        .iter_mut()
        .filter(|f| f.is_required())
        .fold(true, |all_valid, field| validate_field(field) && all_valid)
}
