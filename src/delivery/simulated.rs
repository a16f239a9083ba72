//! Stand-in for a real delivery call.

use super::SubmissionDelivery;
use crate::error::{DeliveryError, DeliveryResult};
use crate::form::FormSubmission;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::sync::Mutex;
use std::time::Duration;

/// Artificial latency before the simulated outcome is decided.
pub const DEFAULT_SIMULATED_DELAY: Duration = Duration::from_millis(1500);

/// Share of simulated submissions that succeed.
pub const DEFAULT_SUCCESS_PROBABILITY: f64 = 0.9;

/// Waits a fixed delay, then succeeds or fails at random.
///
/// Both the success probability and the random source are injectable so
/// tests can force either branch.
pub struct SimulatedDelivery {
    delay: Duration,
    success_probability: f64,
    rng: Mutex<Box<dyn RngCore + Send>>,
}

impl SimulatedDelivery {
    /// Simulator with the default delay and probability, seeded from entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Simulator drawing from the given random source.
    pub fn with_rng(rng: impl RngCore + Send + 'static) -> Self {
        Self {
            delay: DEFAULT_SIMULATED_DELAY,
            success_probability: DEFAULT_SUCCESS_PROBABILITY,
            rng: Mutex::new(Box::new(rng)),
        }
    }

    /// Set the success probability, clamped to `[0, 1]`.
    pub fn with_success_probability(mut self, probability: f64) -> Self {
        self.success_probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn success_probability(&self) -> f64 {
        self.success_probability
    }

    fn draw(&self) -> f64 {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen::<f64>()
    }
}

impl Default for SimulatedDelivery {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SimulatedDelivery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulatedDelivery")
            .field("delay", &self.delay)
            .field("success_probability", &self.success_probability)
            .finish()
    }
}

#[async_trait]
impl SubmissionDelivery for SimulatedDelivery {
    async fn deliver(&self, submission: &FormSubmission) -> DeliveryResult<()> {
        tokio::time::sleep(self.delay).await;

        let payload = serde_json::to_string(submission)?;
        tracing::info!(submission = %payload, "Form data submitted");

        if self.draw() < self.success_probability {
            Ok(())
        } else {
            Err(DeliveryError::Simulated)
        }
    }
}
