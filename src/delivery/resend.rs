//! HTTP client for the Resend transactional email API.
//!
//! This is a synchronous client built on `ureq`; [`super::ResendDelivery`]
//! runs it on the blocking thread pool so it can back the async delivery trait.

use super::template;
use crate::config::Config;
use crate::error::{ConfigError, DeliveryError, DeliveryResult};
use crate::form::FormSubmission;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// JSON body accepted by `POST /emails`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailPayload {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Response from `POST /emails`.
#[derive(Debug, Deserialize)]
pub struct SendEmailResponse {
    /// Identifier assigned to the queued email
    #[serde(default)]
    pub id: Option<String>,
}

/// HTTP client that delivers enquiries as email.
#[derive(Clone)]
pub struct ResendClient {
    /// Base URL for the Resend API
    base_url: String,

    /// API key sent as a bearer token
    api_key: String,

    /// Sender address
    from: String,

    /// Recipient address
    to: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,
}

impl ResendClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `DeliveryError::Config` when no API key is configured.
    pub fn new(config: &Config) -> DeliveryResult<Self> {
        let api_key = config
            .resend_api_key
            .clone()
            .ok_or_else(|| ConfigError::MissingVar("RESEND_API_KEY".to_string()))?;

        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Ok(Self {
            base_url: config.resend_api_url.clone(),
            api_key,
            from: config.mail_from.clone(),
            to: config.mail_to.clone(),
            agent: Arc::new(agent),
        })
    }

    /// Create a client with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        let defaults = Config::default();
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(defaults.request_timeout))
            .build();

        Self {
            base_url,
            api_key,
            from: defaults.mail_from,
            to: defaults.mail_to,
            agent: Arc::new(agent),
        }
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Build the email for a submission.
    pub fn payload(&self, submission: &FormSubmission) -> EmailPayload {
        EmailPayload {
            from: self.from.clone(),
            to: self.to.clone(),
            subject: template::subject(submission),
            html: template::html_body(submission),
        }
    }

    /// Send the enquiry email.
    pub fn send(&self, submission: &FormSubmission) -> DeliveryResult<SendEmailResponse> {
        let url = self.build_url("/emails");
        let body = serde_json::to_value(self.payload(submission))?;

        tracing::debug!("POST {}", url);

        let result = self
            .agent
            .post(&url)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| self.map_error(e));

        let response = match result {
            Ok(response) => {
                tracing::debug!("POST {} - Success (status: {})", url, response.status());
                response
            }
            Err(e) => {
                tracing::error!("POST {} - Error: {:?}", url, e);
                return Err(e);
            }
        };

        // The email is accepted once the status is 2xx; the body only carries the id.
        let text = match response.into_string() {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("POST {} - Could not read response body: {}", url, e);
                return Ok(SendEmailResponse { id: None });
            }
        };
        if text.trim().is_empty() {
            return Ok(SendEmailResponse { id: None });
        }
        Ok(serde_json::from_str(&text).unwrap_or_else(|e| {
            tracing::warn!("POST {} - Unexpected response body: {}", url, e);
            SendEmailResponse { id: None }
        }))
    }

    /// Map a ureq error to a DeliveryError.
    fn map_error(&self, error: ureq::Error) -> DeliveryError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    401 | 403 => DeliveryError::Unauthorized,
                    429 => DeliveryError::RateLimitExceeded,
                    _ => DeliveryError::Api {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => match transport.kind() {
                ureq::ErrorKind::ConnectionFailed => {
                    DeliveryError::Http("Connection failed".to_string())
                }
                ureq::ErrorKind::Io if is_timeout(&transport) => DeliveryError::Timeout,
                _ => DeliveryError::Http(transport.to_string()),
            },
        }
    }
}

/// Whether a transport error was caused by the socket timing out.
fn is_timeout(transport: &ureq::Transport) -> bool {
    use std::error::Error;

    transport
        .source()
        .and_then(|source| source.downcast_ref::<std::io::Error>())
        .map_or(false, |io| {
            matches!(
                io.kind(),
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock
            )
        })
}

impl std::fmt::Debug for ResendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResendClient")
            .field("base_url", &self.base_url)
            .field("from", &self.from)
            .field("to", &self.to)
            .finish_non_exhaustive()
    }
}
