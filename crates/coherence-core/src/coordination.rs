//! Coordination assessment engine.
//!
//! Compares two agents' coherence, normative-framework compatibility,
//! capability overlap, and cultural coordination into one composite
//! potential plus ranked intervention suggestions.

use chrono::{DateTime, Utc};

use crate::coherence::CoherenceScorer;
use crate::domain::{
    AgentProfile, CoordinationRecommendation, CoordinationResult, InterventionKind,
    InterventionPriority, InterventionStrategy, Result,
};
use crate::metrics::METRICS;
use crate::obs::{emit_assessment_completed, AssessmentSpan};
use crate::similarity::{clamp01, jaccard, mean};
use crate::tables;

/// Composite weighting: min coherence / framework / capability / cultural.
const POTENTIAL_WEIGHTS: [f64; 4] = [0.3, 0.25, 0.25, 0.2];

/// Capability-overlap default when either capability set is empty.
const EMPTY_CAPABILITY_DEFAULT: f64 = 0.3;

/// Neutral term for empty paired collections.
const NEUTRAL: f64 = 0.5;

/// Intervention trigger thresholds.
const FRAMEWORK_INTERVENTION_THRESHOLD: f64 = 0.6;
const CAPABILITY_INTERVENTION_THRESHOLD: f64 = 0.5;
const CULTURAL_INTERVENTION_THRESHOLD: f64 = 0.6;
const COMPREHENSIVE_INTERVENTION_THRESHOLD: f64 = 0.5;

/// Assesses the coordination potential between two agents.
#[derive(Debug, Clone, Default)]
pub struct CoordinationScorer {
    coherence: CoherenceScorer,
}

impl CoordinationScorer {
    /// Scorer backed by a custom coherence scorer (and its tables).
    pub fn new(coherence: CoherenceScorer) -> Self {
        Self { coherence }
    }

    /// Assess two agents' coordination potential at `now`.
    pub fn assess(
        &self,
        agent_a: &AgentProfile,
        agent_b: &AgentProfile,
        now: DateTime<Utc>,
    ) -> Result<CoordinationResult> {
        let _span = AssessmentSpan::enter(agent_a.agent_id, agent_b.agent_id);

        let score_a = self.coherence.score_culturally_adapted(agent_a, now)?;
        let score_b = self.coherence.score_culturally_adapted(agent_b, now)?;

        let framework_compat = framework_compatibility(agent_a, agent_b);
        let capability_overlap = capability_overlap(agent_a, agent_b);
        let cultural_coordination =
            tables::cultural_coordination(agent_a.culture, agent_b.culture);

        let potential = clamp01(
            POTENTIAL_WEIGHTS[0] * score_a.total.min(score_b.total)
                + POTENTIAL_WEIGHTS[1] * framework_compat
                + POTENTIAL_WEIGHTS[2] * capability_overlap
                + POTENTIAL_WEIGHTS[3] * cultural_coordination,
        );

        let recommendation = CoordinationRecommendation::for_potential(potential);
        let strategies = suggest_interventions(
            potential,
            framework_compat,
            capability_overlap,
            cultural_coordination,
        );

        METRICS.inc_assessments_completed();
        emit_assessment_completed(
            agent_a.agent_id,
            agent_b.agent_id,
            potential,
            recommendation.band,
            strategies.len(),
        );

        Ok(CoordinationResult {
            potential,
            agent_a: score_a,
            agent_b: score_b,
            framework_compat,
            capability_overlap,
            cultural_coordination,
            recommendation,
            strategies,
        })
    }
}

/// Overall belief/rule/ontology/authenticity compatibility: the mean of the
/// four sub-compatibilities.
fn framework_compatibility(a: &AgentProfile, b: &AgentProfile) -> f64 {
    let scores = [
        belief_compatibility(a, b),
        rule_compatibility(a, b),
        ontology_compatibility(a, b),
        authenticity_compatibility(a, b),
    ];
    clamp01(scores.iter().sum::<f64>() / scores.len() as f64)
}

fn belief_compatibility(a: &AgentProfile, b: &AgentProfile) -> f64 {
    let conf_a: Vec<f64> = a
        .framework
        .beliefs
        .beliefs
        .iter()
        .map(|belief| belief.confidence)
        .collect();
    let conf_b: Vec<f64> = b
        .framework
        .beliefs
        .beliefs
        .iter()
        .map(|belief| belief.confidence)
        .collect();

    let confidence_term = match (mean(&conf_a), mean(&conf_b)) {
        (Some(ma), Some(mb)) => 1.0 - (ma - mb).abs(),
        _ => NEUTRAL,
    };
    let style_term = tables::decision_style_compat(
        a.framework.beliefs.decision_style,
        b.framework.beliefs.decision_style,
    );
    (confidence_term + style_term) / 2.0
}

fn rule_compatibility(a: &AgentProfile, b: &AgentProfile) -> f64 {
    let strict_a: Vec<f64> = a
        .framework
        .rules
        .rules
        .iter()
        .map(|rule| rule.strictness)
        .collect();
    let strict_b: Vec<f64> = b
        .framework
        .rules
        .rules
        .iter()
        .map(|rule| rule.strictness)
        .collect();

    let strictness_term = match (mean(&strict_a), mean(&strict_b)) {
        (Some(ma), Some(mb)) => 1.0 - (ma - mb).abs(),
        _ => NEUTRAL,
    };
    let conflict_term = tables::conflict_style_compat(
        a.framework.rules.conflict_style,
        b.framework.rules.conflict_style,
    );
    let goal_term = tables::goal_orientation_compat(
        a.framework.rules.goal_orientation,
        b.framework.rules.goal_orientation,
    );
    (strictness_term + conflict_term + goal_term) / 3.0
}

fn ontology_compatibility(a: &AgentProfile, b: &AgentProfile) -> f64 {
    let cats_a: std::collections::BTreeSet<String> =
        a.framework.ontology.categories.keys().cloned().collect();
    let cats_b: std::collections::BTreeSet<String> =
        b.framework.ontology.categories.keys().cloned().collect();

    let category_term = if cats_a.is_empty() || cats_b.is_empty() {
        NEUTRAL
    } else {
        jaccard(&cats_a, &cats_b)
    };
    let agency_term = tables::agency_conception_compat(
        a.framework.ontology.agency_conception,
        b.framework.ontology.agency_conception,
    );
    let time_term = tables::time_orientation_compat(
        a.framework.ontology.time_orientation,
        b.framework.ontology.time_orientation,
    );
    (category_term + agency_term + time_term) / 3.0
}

fn authenticity_compatibility(a: &AgentProfile, b: &AgentProfile) -> f64 {
    let auth_a = &a.framework.authenticity;
    let auth_b = &b.framework.authenticity;

    let alignment_term = 1.0 - (auth_a.value_alignment - auth_b.value_alignment).abs();
    let expression_term =
        1.0 - (auth_a.expression_consistency - auth_b.expression_consistency).abs();
    let relationship_term =
        tables::relationship_model_compat(auth_a.relationship_model, auth_b.relationship_model);
    (alignment_term + expression_term + relationship_term) / 3.0
}

/// Capability overlap: 0.4 × Jaccard + 0.6 × min(1, 2 × complementarity).
///
/// Complementarity is the fraction of the union outside the intersection,
/// so a mix of shared and distinct capabilities scores highest. Returns the
/// fixed 0.3 default when either capability set is empty.
fn capability_overlap(a: &AgentProfile, b: &AgentProfile) -> f64 {
    if a.capabilities.is_empty() || b.capabilities.is_empty() {
        return EMPTY_CAPABILITY_DEFAULT;
    }

    let union = a.capabilities.union(&b.capabilities).count();
    let intersection = a.capabilities.intersection(&b.capabilities).count();
    let overlap = intersection as f64 / union as f64;
    let complementarity = (union - intersection) as f64 / union as f64;

    clamp01(0.4 * overlap + 0.6 * (2.0 * complementarity).min(1.0))
}

/// Independently triggered intervention rules, sorted highest priority
/// first (stable for equal priorities).
fn suggest_interventions(
    potential: f64,
    framework_compat: f64,
    capability_overlap: f64,
    cultural_coordination: f64,
) -> Vec<InterventionStrategy> {
    let mut strategies = Vec::new();

    if framework_compat < FRAMEWORK_INTERVENTION_THRESHOLD {
        strategies.push(InterventionStrategy {
            kind: InterventionKind::BeliefBridging,
            priority: InterventionPriority::High,
            description: "Facilitate structured dialogue to surface and bridge \
                          divergent beliefs, rules, and ontologies"
                .to_string(),
            timeline: "2-4 weeks".to_string(),
            expected_improvement: 0.15,
        });
    }

    if capability_overlap < CAPABILITY_INTERVENTION_THRESHOLD {
        strategies.push(InterventionStrategy {
            kind: InterventionKind::CapabilityDevelopment,
            priority: InterventionPriority::Medium,
            description: "Develop shared capabilities or explicit hand-off \
                          protocols for non-overlapping skills"
                .to_string(),
            timeline: "1-3 months".to_string(),
            expected_improvement: 0.10,
        });
    }

    if cultural_coordination < CULTURAL_INTERVENTION_THRESHOLD {
        strategies.push(InterventionStrategy {
            kind: InterventionKind::CulturalBridging,
            priority: InterventionPriority::High,
            description: "Establish shared norms that translate between the \
                          agents' cultural frames"
                .to_string(),
            timeline: "3-6 weeks".to_string(),
            expected_improvement: 0.12,
        });
    }

    if potential < COMPREHENSIVE_INTERVENTION_THRESHOLD {
        strategies.push(InterventionStrategy {
            kind: InterventionKind::ComprehensiveCoordination,
            priority: InterventionPriority::Critical,
            description: "Run a comprehensive coordination program covering \
                          beliefs, capabilities, and cultural framing before \
                          joint work begins"
                .to_string(),
            timeline: "3-6 months".to_string(),
            expected_improvement: 0.25,
        });
    }

    strategies.sort_by(|a, b| b.priority.cmp(&a.priority));
    strategies
}
