//! Coherence scoring engine.
//!
//! Computes a weighted composite of four sub-scores (historical continuity,
//! present integration, prospective coherence, and meta-adaptive capacity)
//! from an [`AgentProfile`] and an injected evaluation timestamp. All
//! functions are pure; repeated calls with identical inputs and the same
//! `now` produce identical results.

use chrono::{DateTime, Utc};

use crate::cultural::CulturalWeightAdapter;
use crate::domain::{
    AgentProfile, Interpretation, Result, ScoreResult, SubScores, WeightSet,
};
use crate::metrics::METRICS;
use crate::obs::emit_score_computed;
use crate::similarity::{clamp01, jaccard, mean, pearson, variance};
use crate::tables::{CulturalModifierTable, TimelineTable};

/// Exponential decay constant for historical continuity, in days.
const HISTORY_DECAY_DAYS: f64 = 30.0;

/// Maximum population variance of values confined to [0, 1].
const MAX_UNIT_VARIANCE: f64 = 0.25;

/// Rule count at which the rule-saturation check reaches 1.0.
const RULE_SATURATION_COUNT: usize = 10;

/// Distinct goal types at which goal diversity reaches 1.0.
const GOAL_DIVERSITY_CAP: usize = 5;

/// Meta-adaptive default when no modification history exists.
const NO_MODIFICATION_DEFAULT: f64 = 0.3;

/// Category names an ontology is checked against for completeness.
const EXPECTED_ONTOLOGY_CATEGORIES: [&str; 5] =
    ["agents", "objects", "relations", "values", "processes"];

/// Neutral term used wherever an empty collection leaves a check undefined.
const NEUTRAL: f64 = 0.5;

/// Scores an agent's identity coherence.
#[derive(Debug, Clone, Default)]
pub struct CoherenceScorer {
    adapter: CulturalWeightAdapter,
    timelines: TimelineTable,
}

impl CoherenceScorer {
    /// Scorer backed by custom lookup tables.
    pub fn new(modifiers: CulturalModifierTable, timelines: TimelineTable) -> Self {
        Self {
            adapter: CulturalWeightAdapter::new(modifiers),
            timelines,
        }
    }

    /// The cultural weight adapter in use.
    pub fn adapter(&self) -> &CulturalWeightAdapter {
        &self.adapter
    }

    /// Score with the default weight set.
    pub fn score(&self, agent: &AgentProfile, now: DateTime<Utc>) -> ScoreResult {
        self.score_with_weights(agent, &WeightSet::default(), now)
    }

    /// Score with an explicit weight set.
    pub fn score_with_weights(
        &self,
        agent: &AgentProfile,
        weights: &WeightSet,
        now: DateTime<Utc>,
    ) -> ScoreResult {
        let subs = SubScores {
            historical: self.historical_continuity(agent, now),
            present: self.present_integration(agent),
            prospective: self.prospective_coherence(agent),
            meta_adaptive: self.meta_adaptive_capacity(agent),
        };

        let total = clamp01(
            weights.historical * subs.historical
                + weights.present * subs.present
                + weights.prospective * subs.prospective
                + weights.meta_adaptive * subs.meta_adaptive,
        );

        let interpretation = Interpretation::for_score(total);
        METRICS.inc_scores_computed();
        emit_score_computed(agent.agent_id, total, interpretation.band);

        ScoreResult {
            total,
            subs,
            weights: *weights,
            base_weights: None,
            scored_at: now,
            interpretation,
        }
    }

    /// Score with weights adapted to the agent's cultural context.
    ///
    /// Reports both the original and the adapted weight set. The base
    /// weights are never mutated; adaptation produces a fresh set.
    pub fn score_culturally_adapted(
        &self,
        agent: &AgentProfile,
        now: DateTime<Utc>,
    ) -> Result<ScoreResult> {
        let base = WeightSet::default();
        let adapted = self.adapter.adapt(&base, agent.culture)?;
        let mut result = self.score_with_weights(agent, &adapted, now);
        result.base_weights = Some(base);
        Ok(result)
    }

    /// Historical continuity: exponentially decayed weighted mean of the
    /// Jaccard similarity between the current kernel and each snapshot.
    /// 0.0 when the history is empty.
    fn historical_continuity(&self, agent: &AgentProfile, now: DateTime<Utc>) -> f64 {
        if agent.history.is_empty() {
            return 0.0;
        }

        let mut weighted_sum = 0.0;
        let mut weight_total = 0.0;
        for snapshot in &agent.history {
            let age_days =
                (now - snapshot.recorded_at).num_seconds().max(0) as f64 / 86_400.0;
            let decay = (-age_days / HISTORY_DECAY_DAYS).exp();
            weighted_sum += decay * jaccard(&agent.identity_kernel, &snapshot.kernel);
            weight_total += decay;
        }

        if weight_total == 0.0 {
            return 0.0;
        }
        clamp01(weighted_sum / weight_total)
    }

    /// Present integration: 0.6 × component compatibility + 0.4 × internal
    /// coherence.
    fn present_integration(&self, agent: &AgentProfile) -> f64 {
        let compat = component_compatibility(agent);
        let internal = internal_coherence(agent);
        clamp01(0.6 * compat + 0.4 * internal)
    }

    /// Prospective coherence: 0.6 × projection alignment + 0.4 × adaptive
    /// capacity.
    fn prospective_coherence(&self, agent: &AgentProfile) -> f64 {
        let alignment = projection_alignment(agent);

        let distinct_types: std::collections::BTreeSet<&str> = agent
            .projection
            .goals
            .iter()
            .map(|g| g.goal_type.as_str())
            .collect();
        let diversity = distinct_types.len().min(GOAL_DIVERSITY_CAP) as f64
            / GOAL_DIVERSITY_CAP as f64;
        let plausibility = self.timelines.plausibility(&agent.projection.timeline);
        let adaptive = (diversity + plausibility) / 2.0;

        clamp01(0.6 * alignment + 0.4 * adaptive)
    }

    /// Meta-adaptive capacity: 0.5 × modification ability + 0.5 × coherence
    /// maintenance.
    fn meta_adaptive_capacity(&self, agent: &AgentProfile) -> f64 {
        let record = &agent.self_modification;
        let ability = if record.history.is_empty() {
            NO_MODIFICATION_DEFAULT
        } else {
            let distinct: std::collections::BTreeSet<&str> =
                record.history.iter().map(String::as_str).collect();
            (NO_MODIFICATION_DEFAULT
                + 0.05 * record.history.len() as f64
                + 0.10 * distinct.len() as f64)
                .min(1.0)
        };
        let maintenance = clamp01(record.maintenance_capacity);
        clamp01(0.5 * ability + 0.5 * maintenance)
    }
}

/// Mean absolute pairwise correlation across the four present-state vectors.
///
/// Pairs with fewer than two shared points or zero variance contribute the
/// neutral 0.5.
fn component_compatibility(agent: &AgentProfile) -> f64 {
    let components = agent.present.components();
    let mut scores = Vec::with_capacity(6);
    for i in 0..components.len() {
        for j in (i + 1)..components.len() {
            let score = pearson(components[i], components[j])
                .map(f64::abs)
                .unwrap_or(NEUTRAL);
            scores.push(score);
        }
    }
    mean(&scores).unwrap_or(NEUTRAL)
}

/// Unweighted mean of the four internal-coherence checks.
fn internal_coherence(agent: &AgentProfile) -> f64 {
    let framework = &agent.framework;

    // Belief consistency: low confidence variance reads as a settled system.
    let confidences: Vec<f64> = framework
        .beliefs
        .beliefs
        .iter()
        .map(|b| b.confidence)
        .collect();
    let belief_check = match variance(&confidences) {
        Some(var) => 1.0 - (var / MAX_UNIT_VARIANCE).min(1.0),
        None => NEUTRAL,
    };

    let rule_check =
        (framework.rules.rules.len() as f64 / RULE_SATURATION_COUNT as f64).min(1.0);

    let present_categories = EXPECTED_ONTOLOGY_CATEGORIES
        .iter()
        .filter(|name| framework.ontology.categories.contains_key(**name))
        .count();
    let ontology_check =
        present_categories as f64 / EXPECTED_ONTOLOGY_CATEGORIES.len() as f64;

    let alignment_check = clamp01(framework.authenticity.value_alignment);

    (belief_check + rule_check + ontology_check + alignment_check) / 4.0
}

/// Blend of goal/kernel term overlap and the stated alignment value.
fn projection_alignment(agent: &AgentProfile) -> f64 {
    let goals = &agent.projection.goals;
    let kernel = &agent.identity_kernel;

    let overlap = if goals.is_empty() || kernel.is_empty() {
        NEUTRAL
    } else {
        let matching = goals
            .iter()
            .filter(|goal| {
                let description = goal.description.to_lowercase();
                kernel
                    .iter()
                    .any(|tag| description.contains(&tag.to_lowercase()))
            })
            .count();
        matching as f64 / goals.len() as f64
    };

    let stated = clamp01(agent.projection.stated_alignment);
    (overlap + stated) / 2.0
}
