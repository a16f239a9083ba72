//! Contact form flow for the Lindland Service website.
//!
//! This library models the client-side behavior of the site's contact page:
//! validating the enquiry form, submitting it, and showing feedback.
//!
//! # Architecture
//!
//! - **domain**: Value objects for email addresses and phone numbers
//! - **form**: Headless model of the form controls and the submit button
//! - **validation**: Field and form validation with inline error indicators
//! - **presenter**: Success/error banner with timed dismissal
//! - **delivery**: Simulated delivery and the Resend email integration
//! - **orchestrator**: The submit state machine tying the pieces together
//! - **site**: Navigation, scroll effects and analytics outside the form
//! - **config**: Configuration from environment variables
//! - **metrics**: Submission counters
//! - **error**: Error types

pub mod config;
pub mod delivery;
pub mod domain;
pub mod error;
pub mod form;
pub mod metrics;
pub mod orchestrator;
pub mod presenter;
pub mod site;
pub mod validation;

pub use config::Config;
pub use delivery::{ResendClient, ResendDelivery, SimulatedDelivery, SubmissionDelivery};
pub use domain::{EmailAddress, PhoneNumber, ValidationError};
pub use error::{ConfigError, DeliveryError};
pub use form::{ContactForm, FieldKind, FormField, FormSubmission, SubmitButton};
pub use metrics::{Metrics, MetricsSummary};
pub use orchestrator::{SharedForm, SubmissionOrchestrator, SubmissionState, SubmitOutcome};
pub use presenter::{Banner, FormMessagePresenter, MessageKind};
pub use validation::{check_field, validate_field, validate_form, FieldValidationResult};
