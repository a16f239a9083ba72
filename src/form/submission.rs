//! Snapshot of a form at submit time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The values a visitor submitted, captured once per submit attempt.
///
/// Required fields (`name`, `email`, `phone`, `job_type`, `description`) are
/// non-empty whenever a snapshot is taken after successful validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Empty when the address control is absent or blank.
    #[serde(default)]
    pub address: String,
    pub job_type: String,
    pub description: String,
    #[serde(default)]
    pub want_site_visit: bool,
    pub timestamp: DateTime<Utc>,
}

impl FormSubmission {
    /// Address for display, with a fallback when none was given.
    pub fn address_or_default(&self) -> &str {
        if self.address.is_empty() {
            "Ikke oppgitt"
        } else {
            &self.address
        }
    }
}
