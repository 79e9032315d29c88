//! Agent profile: the immutable input record for all scoring.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::{CoherenceError, Result};

/// Cultural background tag for an agent.
///
/// A closed set: the modifier and coordination tables are keyed on these
/// variants. Serialized snake_case for profile files.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CulturalContext {
    WesternIndividualist,
    EastAsianCollectivist,
    IndigenousRelational,
    SouthAsianDharmic,
    SecularRationalist,
}

impl std::fmt::Display for CulturalContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::WesternIndividualist => "western_individualist",
            Self::EastAsianCollectivist => "east_asian_collectivist",
            Self::IndigenousRelational => "indigenous_relational",
            Self::SouthAsianDharmic => "south_asian_dharmic",
            Self::SecularRationalist => "secular_rationalist",
        };
        write!(f, "{s}")
    }
}

/// How an agent arrives at decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStyle {
    Analytical,
    Intuitive,
    Consensus,
    Directive,
}

/// How an agent handles conflicting demands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictStyle {
    Collaborative,
    Compromising,
    Avoidant,
    Competitive,
}

/// What an agent's goals are organized around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalOrientation {
    Achievement,
    Maintenance,
    Exploration,
}

/// How an agent conceives of its own agency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgencyConception {
    Autonomous,
    Relational,
    Distributed,
}

/// Which temporal frame anchors an agent's self-understanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOrientation {
    PastAnchored,
    PresentFocused,
    FutureOriented,
}

/// How an agent models its relationships with other agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipModel {
    Transactional,
    Communal,
    Hierarchical,
}

/// One recorded state of an agent's identity kernel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IdentitySnapshot {
    /// When the kernel was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Core self-identifying tags at that time.
    pub kernel: BTreeSet<String>,
}

/// Four named activation vectors describing the agent's present state.
///
/// Each vector is a short time-series of activation levels in [0, 1]; the
/// present-integration sub-score correlates them pairwise.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PresentState {
    pub somatic: Vec<f64>,
    pub cognitive: Vec<f64>,
    pub social: Vec<f64>,
    pub narrative: Vec<f64>,
}

impl PresentState {
    /// The four component vectors in canonical order.
    pub fn components(&self) -> [&[f64]; 4] {
        [
            &self.somatic,
            &self.cognitive,
            &self.social,
            &self.narrative,
        ]
    }
}

/// A single belief with a confidence level in [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Belief {
    pub statement: String,
    pub confidence: f64,
}

/// The agent's belief system plus its decision style.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BeliefSystem {
    pub beliefs: Vec<Belief>,
    pub decision_style: DecisionStyle,
}

/// A self-governing rule with a strictness level in [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rule {
    pub description: String,
    pub strictness: f64,
}

/// The agent's rule system plus its conflict and goal styles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuleSystem {
    pub rules: Vec<Rule>,
    pub conflict_style: ConflictStyle,
    pub goal_orientation: GoalOrientation,
}

/// The agent's ontology: named categories with their member concepts, plus
/// its conception of agency and temporal orientation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OntologySystem {
    pub categories: BTreeMap<String, Vec<String>>,
    pub agency_conception: AgencyConception,
    pub time_orientation: TimeOrientation,
}

/// Authenticity record: how faithfully the agent expresses its values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthenticityRecord {
    /// Stated alignment between values and behavior, in [0, 1].
    pub value_alignment: f64,
    /// Consistency of outward expression with inner state, in [0, 1].
    pub expression_consistency: f64,
    pub relationship_model: RelationshipModel,
}

/// The belief/rule/ontology/authenticity bundle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormativeFramework {
    pub beliefs: BeliefSystem,
    pub rules: RuleSystem,
    pub ontology: OntologySystem,
    pub authenticity: AuthenticityRecord,
}

/// A single stated goal with a type tag (e.g. "mastery", "relational").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub description: String,
    pub goal_type: String,
}

/// The agent's stated future projection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FutureProjection {
    pub goals: Vec<Goal>,
    /// Timeline bucket tag, e.g. "1_year". Unknown tags score neutrally.
    pub timeline: String,
    /// Stated alignment between projected goals and current identity, [0, 1].
    pub stated_alignment: f64,
}

/// Record of the agent's self-modification history and capacity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelfModification {
    /// Modification-type tags, in the order the modifications occurred.
    pub history: Vec<String>,
    /// Self-assessed capacity to maintain coherence through change, [0, 1].
    pub maintenance_capacity: f64,
}

/// Immutable profile of an agent: everything the scorers read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentProfile {
    /// Unique identifier for this profile.
    pub agent_id: Uuid,

    /// Human-readable agent name.
    pub name: String,

    /// Cultural background tag.
    pub culture: CulturalContext,

    /// Current identity kernel: core self-identifying tags.
    pub identity_kernel: BTreeSet<String>,

    /// Ordered identity-kernel history, oldest first.
    pub history: Vec<IdentitySnapshot>,

    /// Present-state activation vectors.
    pub present: PresentState,

    /// Belief/rule/ontology/authenticity records.
    pub framework: NormativeFramework,

    /// Stated future projection.
    pub projection: FutureProjection,

    /// Self-modification record.
    pub self_modification: SelfModification,

    /// Capability tags.
    pub capabilities: BTreeSet<String>,
}

fn check_unit_interval(value: f64, field: &str) -> Result<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(CoherenceError::InvalidAgentProfile(format!(
            "{field} must be a finite value in [0, 1], got {value}"
        )));
    }
    Ok(())
}

impl AgentProfile {
    /// Validate structural invariants of a loaded profile.
    ///
    /// Scoring itself never fails on sparse data (empty collections degrade
    /// to documented neutral defaults), but out-of-range numeric fields are
    /// profile authoring errors and are rejected up front.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CoherenceError::InvalidAgentProfile(
                "name cannot be empty".to_string(),
            ));
        }

        for belief in &self.framework.beliefs.beliefs {
            check_unit_interval(belief.confidence, "belief confidence")?;
        }
        for rule in &self.framework.rules.rules {
            check_unit_interval(rule.strictness, "rule strictness")?;
        }
        check_unit_interval(
            self.framework.authenticity.value_alignment,
            "authenticity value_alignment",
        )?;
        check_unit_interval(
            self.framework.authenticity.expression_consistency,
            "authenticity expression_consistency",
        )?;
        check_unit_interval(self.projection.stated_alignment, "projection stated_alignment")?;
        check_unit_interval(
            self.self_modification.maintenance_capacity,
            "self_modification maintenance_capacity",
        )?;

        for (i, values) in self.present.components().iter().enumerate() {
            for v in values.iter() {
                if !v.is_finite() {
                    return Err(CoherenceError::InvalidAgentProfile(format!(
                        "present-state component {i} contains a non-finite value"
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn minimal_profile() -> AgentProfile {
        AgentProfile {
            agent_id: Uuid::new_v4(),
            name: "iris".to_string(),
            culture: CulturalContext::SecularRationalist,
            identity_kernel: BTreeSet::from(["curious".to_string()]),
            history: vec![IdentitySnapshot {
                recorded_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
                kernel: BTreeSet::from(["curious".to_string()]),
            }],
            present: PresentState::default(),
            framework: NormativeFramework {
                beliefs: BeliefSystem {
                    beliefs: vec![Belief {
                        statement: "evidence first".to_string(),
                        confidence: 0.9,
                    }],
                    decision_style: DecisionStyle::Analytical,
                },
                rules: RuleSystem {
                    rules: vec![],
                    conflict_style: ConflictStyle::Collaborative,
                    goal_orientation: GoalOrientation::Exploration,
                },
                ontology: OntologySystem {
                    categories: BTreeMap::new(),
                    agency_conception: AgencyConception::Autonomous,
                    time_orientation: TimeOrientation::FutureOriented,
                },
                authenticity: AuthenticityRecord {
                    value_alignment: 0.8,
                    expression_consistency: 0.7,
                    relationship_model: RelationshipModel::Communal,
                },
            },
            projection: FutureProjection {
                goals: vec![],
                timeline: "1_year".to_string(),
                stated_alignment: 0.75,
            },
            self_modification: SelfModification {
                history: vec![],
                maintenance_capacity: 0.6,
            },
            capabilities: BTreeSet::new(),
        }
    }

    #[test]
    fn test_profile_serde_roundtrip() {
        let profile = minimal_profile();
        let json = serde_json::to_string(&profile).expect("serialize");
        let back: AgentProfile = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(profile, back);
    }

    #[test]
    fn test_culture_serializes_snake_case() {
        let json = serde_json::to_string(&CulturalContext::EastAsianCollectivist).unwrap();
        assert_eq!(json, "\"east_asian_collectivist\"");
        assert_eq!(
            CulturalContext::EastAsianCollectivist.to_string(),
            "east_asian_collectivist"
        );
    }

    #[test]
    fn test_validate_accepts_minimal_profile() {
        assert!(minimal_profile().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let mut profile = minimal_profile();
        profile.name = "  ".to_string();
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_confidence() {
        let mut profile = minimal_profile();
        profile.framework.beliefs.beliefs[0].confidence = 1.3;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite_present_state() {
        let mut profile = minimal_profile();
        profile.present.cognitive = vec![0.5, f64::NAN];
        assert!(profile.validate().is_err());
    }
}
