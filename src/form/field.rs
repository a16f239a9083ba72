//! Form controls.

use serde::Serialize;

/// Semantic type of a control; drives which validation rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Select,
    TextArea,
    Checkbox,
}

/// A single input, select or textarea together with its error indicator.
///
/// The error marker class and the sibling error text are modelled as one
/// optional message, so a field can never carry two indicators at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    id: String,
    kind: FieldKind,
    required: bool,
    value: String,
    checked: bool,
    error: Option<String>,
}

impl FormField {
    /// Create an optional, empty field.
    pub fn new(id: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: id.into(),
            kind,
            required: false,
            value: String::new(),
            checked: false,
            error: None,
        }
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The raw, untrimmed value.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// Whether the field currently carries the `error` marker class.
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Text of the inline error element, if one is attached.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Number of inline error elements attached to this field (0 or 1).
    pub fn error_indicator_count(&self) -> usize {
        usize::from(self.error.is_some())
    }

    /// Attach an error indicator, replacing any existing one.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Remove the marker class and the error element.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Restore the control to its initial, empty state.
    pub fn reset(&mut self) {
        self.value.clear();
        self.checked = false;
        self.error = None;
    }
}

/// The form's submit control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitButton {
    /// Inner markup of the button.
    pub label: String,
    pub disabled: bool,
}

impl SubmitButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
        }
    }
}
