//! Global atomic counters for scoring observability.
//!
//! Counters are incremented silently at the call site. Call
//! [`Metrics::flush`] to emit current values as a single
//! `tracing::info!` event (e.g. at the end of a CLI invocation).

use std::sync::atomic::{AtomicU64, Ordering};

/// Global metrics singleton.
pub static METRICS: Metrics = Metrics::new();

/// Lightweight atomic counters, no allocations or locking.
pub struct Metrics {
    scores_computed: AtomicU64,
    assessments_completed: AtomicU64,
    weights_adapted: AtomicU64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub const fn new() -> Self {
        Self {
            scores_computed: AtomicU64::new(0),
            assessments_completed: AtomicU64::new(0),
            weights_adapted: AtomicU64::new(0),
        }
    }

    /// Increment the scores-computed counter by one.
    pub fn inc_scores_computed(&self) {
        self.scores_computed.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(metric = "scores_computed", "counter incremented");
    }

    /// Increment the assessments-completed counter by one.
    pub fn inc_assessments_completed(&self) {
        self.assessments_completed.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(metric = "assessments_completed", "counter incremented");
    }

    /// Increment the weights-adapted counter by one.
    pub fn inc_weights_adapted(&self) {
        self.weights_adapted.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(metric = "weights_adapted", "counter incremented");
    }

    /// Emit all current counter values as a single `info!` event.
    ///
    /// Call this at natural boundaries (end of a CLI command, batch run)
    /// rather than on every increment.
    pub fn flush(&self) {
        tracing::info!(
            metric = "flush",
            scores_computed = self.scores_computed(),
            assessments_completed = self.assessments_completed(),
            weights_adapted = self.weights_adapted(),
        );
    }

    /// Read the current scores-computed count.
    pub fn scores_computed(&self) -> u64 {
        self.scores_computed.load(Ordering::Relaxed)
    }

    /// Read the current assessments-completed count.
    pub fn assessments_completed(&self) -> u64 {
        self.assessments_completed.load(Ordering::Relaxed)
    }

    /// Read the current weights-adapted count.
    pub fn weights_adapted(&self) -> u64 {
        self.weights_adapted.load(Ordering::Relaxed)
    }

    /// Reset all counters to zero (useful in tests).
    pub fn reset(&self) {
        self.scores_computed.store(0, Ordering::Relaxed);
        self.assessments_completed.store(0, Ordering::Relaxed);
        self.weights_adapted.store(0, Ordering::Relaxed);
    }
}
