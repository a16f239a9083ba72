//! Contact form driver.
//!
//! Reads a JSON object of field values from stdin, fills the contact form,
//! runs one submission with the configured delivery and prints the outcome,
//! the banner and the form state as JSON on stdout.

use anyhow::{Context, Result};
use contact_form::{Config, ContactForm, SubmissionOrchestrator};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tokio::io::AsyncReadExt;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only, stdout carries the result)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut input = String::new();
    tokio::io::stdin()
        .read_to_string(&mut input)
        .await
        .context("Failed to read form values from stdin")?;

    let values: Value = serde_json::from_str(&input).context("Form values must be JSON")?;
    let values = values
        .as_object()
        .context("Form values must be a JSON object")?;

    let mut form = ContactForm::standard();
    for key in form.apply_json(values) {
        warn!("Ignoring unknown field: {}", key);
    }

    let form = Arc::new(Mutex::new(form));
    let orchestrator = SubmissionOrchestrator::from_config(&config, form.clone())
        .context("Failed to set up delivery")?;

    info!(
        email_delivery = config.uses_email_delivery(),
        "Submitting contact form"
    );
    let outcome = orchestrator.submit().await;

    let fields = {
        let form = form
            .lock()
            .map_err(|_| anyhow::anyhow!("Form state poisoned"))?;
        serde_json::to_value(form.fields())?
    };

    let report = json!({
        "result": outcome,
        "banner": orchestrator.presenter().banner(),
        "fields": fields,
        "metrics": orchestrator.metrics().summary(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    if let contact_form::SubmitOutcome::Failed(reason) = &outcome {
        error!("Submission failed: {}", reason);
    }

    Ok(())
}
