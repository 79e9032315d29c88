//! Structured observability hooks for scoring lifecycle events.
//!
//! This module provides:
//! - Assessment-scoped tracing spans via the `AssessmentSpan` RAII guard
//! - Emission functions for key events: score computed, weights adapted,
//!   assessment completed
//!
//! Events are emitted at `info!` level and filtered via `RUST_LOG`.

use tracing::info;
use uuid::Uuid;

use crate::domain::{CoherenceBand, CulturalContext, WeightSet};

/// RAII guard that enters an assessment-scoped tracing span.
///
/// # Example
///
/// ```ignore
/// let _span = AssessmentSpan::enter(agent_a.agent_id, agent_b.agent_id);
/// // tracing calls are now associated with both agent ids
/// ```
pub struct AssessmentSpan {
    _span: tracing::span::EnteredSpan,
}

impl AssessmentSpan {
    /// Create and enter a span tagged with both agent ids.
    pub fn enter(agent_a: Uuid, agent_b: Uuid) -> Self {
        let span = tracing::info_span!("coherence.assess", agent_a = %agent_a, agent_b = %agent_b);
        Self {
            _span: span.entered(),
        }
    }
}

/// Emit event: a coherence score was computed for an agent.
pub fn emit_score_computed(agent_id: Uuid, total: f64, band: CoherenceBand) {
    info!(
        event = "coherence.score_computed",
        agent_id = %agent_id,
        total = total,
        band = %band,
    );
}

/// Emit event: a weight set was culturally adapted.
pub fn emit_weights_adapted(culture: CulturalContext, original: &WeightSet, adapted: &WeightSet) {
    info!(
        event = "coherence.weights_adapted",
        culture = %culture,
        historical = adapted.historical,
        present = adapted.present,
        prospective = adapted.prospective,
        meta_adaptive = adapted.meta_adaptive,
        original_historical = original.historical,
    );
}

/// Emit event: a coordination assessment completed.
pub fn emit_assessment_completed(
    agent_a: Uuid,
    agent_b: Uuid,
    potential: f64,
    band: CoherenceBand,
    strategies: usize,
) {
    info!(
        event = "coherence.assessment_completed",
        agent_a = %agent_a,
        agent_b = %agent_b,
        potential = potential,
        band = %band,
        strategies = strategies,
    );
}
