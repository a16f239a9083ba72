//! Headless model of the contact form.
//!
//! [`ContactForm`] owns the controls and the submit button that the page
//! renders. Event entry points (`on_input`, `on_blur`) mirror the listeners the
//! page wires against each control.

mod field;
mod submission;

pub use field::{FieldKind, FormField, SubmitButton};
pub use submission::FormSubmission;

use crate::validation;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// Control identifiers used by the contact page.
pub mod ids {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const ADDRESS: &str = "address";
    pub const JOB_TYPE: &str = "jobType";
    pub const DESCRIPTION: &str = "description";
    pub const SITE_VISIT: &str = "siteVisit";
}

/// Label of the submit button before any submission.
pub const DEFAULT_SUBMIT_LABEL: &str = "Send henvendelse";

/// Markup shown in the submit button while a submission is in flight.
pub const LOADING_LABEL: &str = r#"<span class="spinner"></span> Sender..."#;

/// A form: its controls and its submit button.
#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: Vec<FormField>,
    submit_button: SubmitButton,
}

impl ContactForm {
    /// Create a form from arbitrary controls.
    pub fn new(fields: Vec<FormField>, submit_label: impl Into<String>) -> Self {
        Self {
            fields,
            submit_button: SubmitButton::new(submit_label),
        }
    }

    /// The contact page's form with all seven controls.
    pub fn standard() -> Self {
        Self::new(
            vec![
                FormField::new(ids::NAME, FieldKind::Text).required(),
                FormField::new(ids::EMAIL, FieldKind::Email).required(),
                FormField::new(ids::PHONE, FieldKind::Tel).required(),
                FormField::new(ids::ADDRESS, FieldKind::Text),
                FormField::new(ids::JOB_TYPE, FieldKind::Select).required(),
                FormField::new(ids::DESCRIPTION, FieldKind::TextArea).required(),
                FormField::new(ids::SITE_VISIT, FieldKind::Checkbox),
            ],
            DEFAULT_SUBMIT_LABEL,
        )
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut [FormField] {
        &mut self.fields
    }

    pub fn field(&self, id: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.id() == id)
    }

    pub fn field_mut(&mut self, id: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.id() == id)
    }

    pub fn submit_button(&self) -> &SubmitButton {
        &self.submit_button
    }

    pub fn submit_button_mut(&mut self) -> &mut SubmitButton {
        &mut self.submit_button
    }

    /// Set a control's value without touching its error state.
    ///
    /// Returns false when no control has the given id.
    pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> bool {
        match self.field_mut(id) {
            Some(field) => {
                field.set_value(value);
                true
            }
            None => false,
        }
    }

    pub fn set_checked(&mut self, id: &str, checked: bool) -> bool {
        match self.field_mut(id) {
            Some(field) => {
                field.set_checked(checked);
                true
            }
            None => false,
        }
    }

    /// Input event: store the new value and drop any error indicator.
    pub fn on_input(&mut self, id: &str, value: impl Into<String>) -> bool {
        match self.field_mut(id) {
            Some(field) => {
                field.set_value(value);
                field.clear_error();
                true
            }
            None => false,
        }
    }

    /// Blur event: validate the control. `None` when the id is unknown.
    pub fn on_blur(&mut self, id: &str) -> Option<bool> {
        self.field_mut(id).map(validation::validate_field)
    }

    /// Fill controls from a JSON object: strings set values, booleans set
    /// checkboxes. Unknown keys are skipped and returned.
    pub fn apply_json(&mut self, values: &Map<String, Value>) -> Vec<String> {
        let mut unknown = Vec::new();
        for (key, value) in values {
            let applied = match value {
                Value::Bool(checked) => self.set_checked(key, *checked),
                Value::String(s) => self.set_value(key, s.as_str()),
                Value::Null => self.set_value(key, ""),
                other => self.set_value(key, other.to_string()),
            };
            if !applied {
                unknown.push(key.clone());
            }
        }
        unknown
    }

    /// Clear every control, as a native form reset would.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.reset();
        }
    }

    /// Capture the current values.
    ///
    /// Text values are trimmed; the job type is taken verbatim. Missing
    /// optional controls yield an empty address and no site visit.
    pub fn snapshot(&self, timestamp: DateTime<Utc>) -> FormSubmission {
        let trimmed = |id: &str| {
            self.field(id)
                .map(|f| f.value().trim().to_string())
                .unwrap_or_default()
        };

        FormSubmission {
            name: trimmed(ids::NAME),
            email: trimmed(ids::EMAIL),
            phone: trimmed(ids::PHONE),
            address: trimmed(ids::ADDRESS),
            job_type: self
                .field(ids::JOB_TYPE)
                .map(|f| f.value().to_string())
                .unwrap_or_default(),
            description: trimmed(ids::DESCRIPTION),
            want_site_visit: self
                .field(ids::SITE_VISIT)
                .map(FormField::is_checked)
                .unwrap_or(false),
            timestamp,
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::standard()
    }
}
