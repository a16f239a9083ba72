//! Error types for the contact form flow.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Per-field validation errors live in [`crate::domain::ValidationError`].

use thiserror::Error;

/// Errors that can occur when delivering a form submission.
#[derive(Error, Debug)]
pub enum DeliveryError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Email provider returned an error status code
    #[error("Email API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Failed to encode or parse JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Delivery did not complete in time
    #[error("Delivery timed out")]
    Timeout,

    /// Authentication failed
    #[error("Authentication failed")]
    Unauthorized,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// The simulator drew a failure
    #[error("Simulated delivery failure")]
    Simulated,

    /// Delivery is not configured correctly
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with DeliveryError
pub type DeliveryResult<T> = Result<T, DeliveryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
