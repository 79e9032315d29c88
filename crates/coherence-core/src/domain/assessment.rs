//! Coordination assessment results and intervention strategies.

use serde::{Deserialize, Serialize};

use super::score::{CoherenceBand, ScoreResult};

/// Priority tier for an intervention strategy.
///
/// Strategies are reported highest-priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterventionPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for InterventionPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        };
        write!(f, "{s}")
    }
}

/// Kind of intervention a coordination assessment can suggest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterventionKind {
    BeliefBridging,
    CapabilityDevelopment,
    CulturalBridging,
    ComprehensiveCoordination,
}

impl std::fmt::Display for InterventionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::BeliefBridging => "belief_bridging",
            Self::CapabilityDevelopment => "capability_development",
            Self::CulturalBridging => "cultural_bridging",
            Self::ComprehensiveCoordination => "comprehensive_coordination",
        };
        write!(f, "{s}")
    }
}

/// One suggested intervention with fixed metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InterventionStrategy {
    pub kind: InterventionKind,
    pub priority: InterventionPriority,
    pub description: String,
    /// Estimated timeline text, e.g. "2-4 weeks".
    pub timeline: String,
    /// Expected improvement to the composite potential, in [0, 1].
    pub expected_improvement: f64,
}

/// Confidence tag attached to a coordination recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTag {
    High,
    Medium,
    Low,
}

/// Categorical recommendation for a pair of agents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoordinationRecommendation {
    pub band: CoherenceBand,
    pub summary: String,
    pub confidence: ConfidenceTag,
}

impl CoordinationRecommendation {
    /// Build the recommendation for a composite coordination potential.
    pub fn for_potential(potential: f64) -> Self {
        let band = CoherenceBand::classify(potential);
        let summary = match band {
            CoherenceBand::Excellent => {
                "Excellent coordination potential; proceed with joint work"
            }
            CoherenceBand::Good => {
                "Good coordination potential; align expectations before starting"
            }
            CoherenceBand::Moderate => {
                "Moderate coordination potential; targeted bridging recommended"
            }
            CoherenceBand::Low => {
                "Low coordination potential; substantial preparation required"
            }
            CoherenceBand::VeryLow => {
                "Very low coordination potential; joint work is not advisable yet"
            }
        };
        let confidence = match band {
            CoherenceBand::Excellent | CoherenceBand::Good => ConfidenceTag::High,
            CoherenceBand::Moderate => ConfidenceTag::Medium,
            CoherenceBand::Low | CoherenceBand::VeryLow => ConfidenceTag::Low,
        };
        Self {
            band,
            summary: summary.to_string(),
            confidence,
        }
    }
}

/// Result of assessing two agents' coordination potential.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoordinationResult {
    /// Composite coordination potential in [0, 1].
    pub potential: f64,

    /// Culturally adapted coherence result for each agent.
    pub agent_a: ScoreResult,
    pub agent_b: ScoreResult,

    /// Belief/rule/ontology/authenticity compatibility in [0, 1].
    pub framework_compat: f64,

    /// Capability-set overlap/complementarity score in [0, 1].
    pub capability_overlap: f64,

    /// Cultural coordination score in [0, 1].
    pub cultural_coordination: f64,

    /// Categorical recommendation with confidence tag.
    pub recommendation: CoordinationRecommendation,

    /// Suggested interventions, highest priority first.
    pub strategies: Vec<InterventionStrategy>,
}
