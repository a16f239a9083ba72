//! Delivery of form submissions.
//!
//! [`SubmissionDelivery`] is the seam between the orchestrator and whatever
//! actually sends the enquiry. The default flow uses [`SimulatedDelivery`];
//! [`ResendDelivery`] posts the enquiry as an email through the Resend API.

mod async_wrapper;
mod resend;
mod simulated;
pub mod template;

pub use async_wrapper::ResendDelivery;
pub use resend::{EmailPayload, ResendClient};
pub use simulated::{SimulatedDelivery, DEFAULT_SIMULATED_DELAY, DEFAULT_SUCCESS_PROBABILITY};

use crate::error::DeliveryResult;
use crate::form::FormSubmission;
use async_trait::async_trait;

/// Sends a submission somewhere. `Ok(())` means the enquiry was accepted.
#[async_trait]
pub trait SubmissionDelivery: Send + Sync {
    async fn deliver(&self, submission: &FormSubmission) -> DeliveryResult<()>;
}
