//! Session metrics.
//!
//! Counters for what happened on a page: translation attempts, requests
//! rejected before sending, backend failures, and copies.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters for one translation session.
#[derive(Debug, Default)]
pub struct SessionMetrics {
    /// Submissions that passed validation and were sent
    requests_sent: AtomicUsize,

    /// Submissions stopped by validation
    validation_rejections: AtomicUsize,

    /// Sent requests that failed (network, status, or body)
    backend_failures: AtomicUsize,

    /// Successful copies to the clipboard
    copies: AtomicUsize,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_request_sent(&self) {
        self.requests_sent.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_validation_rejection(&self) {
        self.validation_rejections.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_backend_failure(&self) {
        self.backend_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_copy(&self) {
        self.copies.fetch_add(1, Ordering::Relaxed);
    }

    pub fn requests_sent(&self) -> usize {
        self.requests_sent.load(Ordering::Relaxed)
    }

    pub fn validation_rejections(&self) -> usize {
        self.validation_rejections.load(Ordering::Relaxed)
    }

    pub fn backend_failures(&self) -> usize {
        self.backend_failures.load(Ordering::Relaxed)
    }

    pub fn copies(&self) -> usize {
        self.copies.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let sent = self.requests_sent();
        let failures = self.backend_failures();
        let success_rate = if sent > 0 {
            ((sent - failures) as f64 / sent as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            requests_sent: sent,
            validation_rejections: self.validation_rejections(),
            backend_failures: failures,
            success_rate,
            copies: self.copies(),
        }
    }
}

/// Snapshot of the session counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub requests_sent: usize,
    pub validation_rejections: usize,
    pub backend_failures: usize,

    /// Successful requests as a percentage of sent requests (0-100)
    pub success_rate: f64,

    pub copies: usize,
}
