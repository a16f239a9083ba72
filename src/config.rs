//! Configuration management for the contact form flow.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file. Every setting has a default, so an empty environment yields the
//! simulated flow.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::time::Duration;

/// Configuration for the contact form flow.
#[derive(Debug, Clone)]
pub struct Config {
    /// Resend API key; when set, enquiries are delivered as real email
    pub resend_api_key: Option<String>,

    /// Resend API base URL (default: https://api.resend.com)
    pub resend_api_url: String,

    /// Sender address for enquiry emails
    pub mail_from: String,

    /// Recipient address for enquiry emails
    pub mail_to: String,

    /// Simulated network delay in milliseconds (default: 1500)
    pub submission_delay_ms: u64,

    /// Simulated success probability (0.0-1.0, default: 0.9)
    pub success_probability: f64,

    /// How long a success message stays visible, in milliseconds (default: 10000)
    pub success_message_ttl_ms: u64,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `RESEND_API_KEY`: enables email delivery through Resend
    /// - `RESEND_API_URL`: API base URL (default: https://api.resend.com)
    /// - `MAIL_FROM` / `MAIL_TO`: sender and recipient addresses
    /// - `SUBMISSION_DELAY_MS`: simulated delay (default: 1500)
    /// - `SUCCESS_PROBABILITY`: simulated success rate (default: 0.9)
    /// - `SUCCESS_MESSAGE_TTL_MS`: success banner lifetime (default: 10000)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let resend_api_key = match env::var("RESEND_API_KEY") {
            Ok(key) if key.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "RESEND_API_KEY".to_string(),
                    reason: "Cannot be empty".to_string(),
                })
            }
            Ok(key) => Some(key),
            Err(_) => None,
        };

        let resend_api_url = env::var("RESEND_API_URL").unwrap_or(defaults.resend_api_url);
        if !resend_api_url.starts_with("http://") && !resend_api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "RESEND_API_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let mail_from = Self::parse_env_email("MAIL_FROM", defaults.mail_from)?;
        let mail_to = Self::parse_env_email("MAIL_TO", defaults.mail_to)?;

        let submission_delay_ms =
            Self::parse_env_u64("SUBMISSION_DELAY_MS", defaults.submission_delay_ms)?;
        let success_probability =
            Self::parse_env_f64("SUCCESS_PROBABILITY", defaults.success_probability)?;
        if !(0.0..=1.0).contains(&success_probability) {
            return Err(ConfigError::InvalidValue {
                var: "SUCCESS_PROBABILITY".to_string(),
                reason: "Must be between 0.0 and 1.0".to_string(),
            });
        }
        let success_message_ttl_ms =
            Self::parse_env_u64("SUCCESS_MESSAGE_TTL_MS", defaults.success_message_ttl_ms)?;
        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", defaults.request_timeout)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            resend_api_key,
            resend_api_url,
            mail_from,
            mail_to,
            submission_delay_ms,
            success_probability,
            success_message_ttl_ms,
            request_timeout,
            log_level,
        })
    }

    /// Whether enquiries go out through the email API.
    pub fn uses_email_delivery(&self) -> bool {
        self.resend_api_key.is_some()
    }

    pub fn submission_delay(&self) -> Duration {
        Duration::from_millis(self.submission_delay_ms)
    }

    pub fn success_message_ttl(&self) -> Duration {
        Duration::from_millis(self.success_message_ttl_ms)
    }

    /// Upper bound on a single delivery, slightly above the HTTP timeout so the
    /// transport reports its own timeout first.
    pub fn delivery_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
            .saturating_add(self.submission_delay())
            .saturating_add(Duration::from_secs(1))
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as f64 with a default value.
    fn parse_env_f64(var_name: &str, default: f64) -> ConfigResult<f64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<f64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Read an email address variable, falling back to a default.
    fn parse_env_email(var_name: &str, default: String) -> ConfigResult<String> {
        match env::var(var_name) {
            Ok(val) if crate::domain::EmailAddress::is_valid(&val) => Ok(val),
            Ok(val) => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be an email address, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            resend_api_key: None,
            resend_api_url: "https://api.resend.com".to_string(),
            mail_from: "noreply@lindlandservice.no".to_string(),
            mail_to: "post@lindlandservice.no".to_string(),
            submission_delay_ms: 1500,
            success_probability: 0.9,
            success_message_ttl_ms: 10_000,
            request_timeout: 10,
            log_level: "info".to_string(),
        }
    }
}
