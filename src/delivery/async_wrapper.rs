//! Async wrapper around the synchronous ResendClient.
//!
//! Uses `tokio::task::spawn_blocking` to run the HTTP call on a dedicated
//! thread pool, preventing blocking of the async runtime.

use super::{ResendClient, SubmissionDelivery};
use crate::error::{DeliveryError, DeliveryResult};
use crate::form::FormSubmission;
use async_trait::async_trait;
use std::sync::Arc;

/// Delivers submissions as email through Resend.
#[derive(Debug, Clone)]
pub struct ResendDelivery {
    client: Arc<ResendClient>,
}

impl ResendDelivery {
    pub fn new(client: ResendClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl SubmissionDelivery for ResendDelivery {
    async fn deliver(&self, submission: &FormSubmission) -> DeliveryResult<()> {
        let client = self.client.clone();
        let submission = submission.clone();

        let response = tokio::task::spawn_blocking(move || client.send(&submission))
            .await
            .map_err(|e| DeliveryError::Http(format!("Task join error: {}", e)))??;

        tracing::info!(email_id = ?response.id, "Enquiry email accepted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_delivery_creation() {
        let client = ResendClient::with_base_url(
            "https://api.resend.com".to_string(),
            "re_test".to_string(),
        );
        let delivery = ResendDelivery::new(client);

        // Should be able to clone and share across tasks
        let shared: Arc<dyn SubmissionDelivery> = Arc::new(delivery.clone());
        drop(shared);
    }
}
