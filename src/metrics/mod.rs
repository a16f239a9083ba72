//! Basic metrics instrumentation for the submission flow.
//!
//! Provides counters for submit attempts and their outcomes, plus delivery
//! duration tracking.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Metrics collector for contact form submissions.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Submit attempts that passed validation
    submissions_total: Arc<AtomicU64>,

    /// Submissions the delivery accepted
    submissions_succeeded: Arc<AtomicU64>,

    /// Submissions whose delivery failed or timed out
    submissions_failed: Arc<AtomicU64>,

    /// Submit attempts blocked by validation
    validation_failures: Arc<AtomicU64>,

    /// Number of delivery calls timed
    deliveries_total: Arc<AtomicU64>,

    /// Total delivery time in milliseconds
    delivery_duration_total_ms: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            submissions_total: Arc::new(AtomicU64::new(0)),
            submissions_succeeded: Arc::new(AtomicU64::new(0)),
            submissions_failed: Arc::new(AtomicU64::new(0)),
            validation_failures: Arc::new(AtomicU64::new(0)),
            deliveries_total: Arc::new(AtomicU64::new(0)),
            delivery_duration_total_ms: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn record_submission(&self) {
        self.submissions_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_success(&self) {
        self.submissions_succeeded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.submissions_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_validation_failure(&self) {
        self.validation_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one delivery call with its duration.
    pub fn record_delivery(&self, duration: Duration) {
        self.deliveries_total.fetch_add(1, Ordering::Relaxed);
        self.delivery_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn submissions_total(&self) -> u64 {
        self.submissions_total.load(Ordering::Relaxed)
    }

    pub fn submissions_succeeded(&self) -> u64 {
        self.submissions_succeeded.load(Ordering::Relaxed)
    }

    pub fn submissions_failed(&self) -> u64 {
        self.submissions_failed.load(Ordering::Relaxed)
    }

    pub fn validation_failures(&self) -> u64 {
        self.validation_failures.load(Ordering::Relaxed)
    }

    pub fn deliveries_total(&self) -> u64 {
        self.deliveries_total.load(Ordering::Relaxed)
    }

    pub fn delivery_duration_total_ms(&self) -> u64 {
        self.delivery_duration_total_ms.load(Ordering::Relaxed)
    }

    /// Get average delivery duration in milliseconds.
    pub fn delivery_duration_avg_ms(&self) -> f64 {
        let total = self.delivery_duration_total_ms();
        let count = self.deliveries_total();
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        self.submissions_total.store(0, Ordering::Relaxed);
        self.submissions_succeeded.store(0, Ordering::Relaxed);
        self.submissions_failed.store(0, Ordering::Relaxed);
        self.validation_failures.store(0, Ordering::Relaxed);
        self.deliveries_total.store(0, Ordering::Relaxed);
        self.delivery_duration_total_ms.store(0, Ordering::Relaxed);
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            submissions_total: self.submissions_total(),
            submissions_succeeded: self.submissions_succeeded(),
            submissions_failed: self.submissions_failed(),
            validation_failures: self.validation_failures(),
            deliveries_total: self.deliveries_total(),
            delivery_duration_avg_ms: self.delivery_duration_avg_ms(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, serde::Serialize)]
pub struct MetricsSummary {
    pub submissions_total: u64,
    pub submissions_succeeded: u64,
    pub submissions_failed: u64,
    pub validation_failures: u64,
    pub deliveries_total: u64,
    pub delivery_duration_avg_ms: f64,
}

/// Helper for timing a delivery call.
pub struct DeliveryTimer {
    start: Instant,
    metrics: Metrics,
}

impl DeliveryTimer {
    /// Start timing a delivery.
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record the duration.
    pub fn complete(self) {
        self.metrics.record_delivery(self.start.elapsed());
    }
}
