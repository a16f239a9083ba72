//! Submission orchestration.
//!
//! A submit attempt moves through
//! `Idle -> Validating -> Submitting -> {Succeeded, Failed} -> Idle`.
//! While a submission is in flight the submit button is disabled; that
//! disabled button is the only thing preventing a second, concurrent attempt.

use crate::config::Config;
use crate::delivery::{ResendClient, ResendDelivery, SimulatedDelivery, SubmissionDelivery};
use crate::error::{DeliveryError, DeliveryResult};
use crate::form::{ContactForm, LOADING_LABEL};
use crate::metrics::{DeliveryTimer, Metrics};
use crate::presenter::{FormMessagePresenter, MessageKind};
use crate::validation;
use chrono::Utc;
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// Form shared between event handlers and the orchestrator.
pub type SharedForm = Arc<Mutex<ContactForm>>;

/// Shown after a successful submission.
pub const SUCCESS_MESSAGE: &str = "Takk for din henvendelse! Jeg vil kontakte deg så snart som mulig, vanligvis innen én arbeidsdag.";

/// Shown after a failed submission.
pub const ERROR_MESSAGE: &str =
    "Beklager, noe gikk galt. Vennligst prøv igjen eller ring meg direkte.";

/// Upper bound on a single delivery call unless configured otherwise.
pub const DEFAULT_DELIVERY_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the orchestrator is in the submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionState {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// Result of one call to [`SubmissionOrchestrator::submit`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "lowercase")]
pub enum SubmitOutcome {
    /// A submission was already in flight; nothing happened.
    Ignored,
    /// Validation failed; nothing was sent.
    Invalid,
    Succeeded,
    /// Delivery failed with the given reason; the form keeps its values.
    Failed(String),
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Holds the "submitting" UI state: disabled button with a loading label.
///
/// Dropping the guard re-enables the button, restores the label it had when
/// acquired, and returns the orchestrator to `Idle`. This runs on every exit
/// path, including a panic in the delivery future.
struct SubmittingGuard {
    form: SharedForm,
    state: Arc<Mutex<SubmissionState>>,
    original_label: String,
}

impl SubmittingGuard {
    fn acquire(
        locked: &mut ContactForm,
        form: SharedForm,
        state: Arc<Mutex<SubmissionState>>,
    ) -> Self {
        let button = locked.submit_button_mut();
        button.disabled = true;
        let original_label = std::mem::replace(&mut button.label, LOADING_LABEL.to_string());

        Self {
            form,
            state,
            original_label,
        }
    }
}

impl Drop for SubmittingGuard {
    fn drop(&mut self) {
        {
            let mut form = lock(&self.form);
            let button = form.submit_button_mut();
            button.disabled = false;
            button.label = std::mem::take(&mut self.original_label);
        }
        *lock(&self.state) = SubmissionState::Idle;
        tracing::debug!("Submit button restored");
    }
}

/// Coordinates validation, delivery and feedback for one form.
pub struct SubmissionOrchestrator {
    form: SharedForm,
    delivery: Arc<dyn SubmissionDelivery>,
    presenter: FormMessagePresenter,
    state: Arc<Mutex<SubmissionState>>,
    delivery_timeout: Duration,
    metrics: Metrics,
}

impl SubmissionOrchestrator {
    pub fn new(
        form: SharedForm,
        delivery: Arc<dyn SubmissionDelivery>,
        presenter: FormMessagePresenter,
    ) -> Self {
        Self {
            form,
            delivery,
            presenter,
            state: Arc::new(Mutex::new(SubmissionState::Idle)),
            delivery_timeout: DEFAULT_DELIVERY_TIMEOUT,
            metrics: Metrics::new(),
        }
    }

    /// Build the orchestrator the configuration describes: email delivery
    /// when an API key is present, the simulator otherwise.
    pub fn from_config(config: &Config, form: SharedForm) -> DeliveryResult<Self> {
        let delivery: Arc<dyn SubmissionDelivery> = if config.uses_email_delivery() {
            tracing::info!("Using email delivery via {}", config.resend_api_url);
            Arc::new(ResendDelivery::new(ResendClient::new(config)?))
        } else {
            tracing::info!("Using simulated delivery");
            Arc::new(
                SimulatedDelivery::new()
                    .with_delay(config.submission_delay())
                    .with_success_probability(config.success_probability),
            )
        };

        let presenter = FormMessagePresenter::with_success_ttl(config.success_message_ttl());
        Ok(Self::new(form, delivery, presenter).with_delivery_timeout(config.delivery_timeout()))
    }

    pub fn with_delivery_timeout(mut self, timeout: Duration) -> Self {
        self.delivery_timeout = timeout;
        self
    }

    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn form(&self) -> SharedForm {
        Arc::clone(&self.form)
    }

    pub fn presenter(&self) -> &FormMessagePresenter {
        &self.presenter
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn state(&self) -> SubmissionState {
        *lock(&self.state)
    }

    fn set_state(&self, next: SubmissionState) {
        let mut state = lock(&self.state);
        tracing::debug!(from = ?*state, to = ?next, "Submission state change");
        *state = next;
    }

    /// Handle a submit intent.
    pub async fn submit(&self) -> SubmitOutcome {
        let (guard, submission) = {
            let mut form = lock(&self.form);

            if form.submit_button().disabled {
                tracing::debug!("Submit ignored: submission already in flight");
                return SubmitOutcome::Ignored;
            }

            self.set_state(SubmissionState::Validating);
            if !validation::validate_form(&mut form) {
                self.set_state(SubmissionState::Idle);
                self.metrics.record_validation_failure();
                return SubmitOutcome::Invalid;
            }

            let submission = form.snapshot(Utc::now());
            let guard =
                SubmittingGuard::acquire(&mut form, Arc::clone(&self.form), Arc::clone(&self.state));
            (guard, submission)
        };

        self.set_state(SubmissionState::Submitting);
        self.metrics.record_submission();

        let timer = DeliveryTimer::new(self.metrics.clone());
        let result =
            match tokio::time::timeout(self.delivery_timeout, self.delivery.deliver(&submission))
                .await
            {
                Ok(result) => result,
                Err(_) => Err(DeliveryError::Timeout),
            };
        timer.complete();

        let outcome = match result {
            Ok(()) => {
                self.set_state(SubmissionState::Succeeded);
                self.presenter.show(MessageKind::Success, SUCCESS_MESSAGE);
                lock(&self.form).reset();
                self.metrics.record_success();
                tracing::info!("Form submitted");
                SubmitOutcome::Succeeded
            }
            Err(e) => {
                self.set_state(SubmissionState::Failed);
                self.presenter.show(MessageKind::Error, ERROR_MESSAGE);
                self.metrics.record_failure();
                tracing::error!("Form submission error: {}", e);
                SubmitOutcome::Failed(e.to_string())
            }
        };

        drop(guard);
        outcome
    }
}

impl std::fmt::Debug for SubmissionOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionOrchestrator")
            .field("state", &self.state())
            .field("delivery_timeout", &self.delivery_timeout)
            .finish_non_exhaustive()
    }
}
