//! Static lookup data: cultural weight modifiers, timeline plausibility,
//! categorical compatibility, and cultural coordination scores.
//!
//! All tables are immutable values constructed once and injected into the
//! scorers. The categorical style lookups are symmetrized: a pair is tried
//! in both orders before falling back to [`FALLBACK_COMPAT`]. The cultural
//! coordination table stays order-sensitive.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{
    AgencyConception, ConflictStyle, CulturalContext, DecisionStyle, GoalOrientation,
    RelationshipModel, TimeOrientation, WeightModifiers,
};

/// Fallback score for any categorical pair without a table entry.
pub const FALLBACK_COMPAT: f64 = 0.5;

/// Score for two identical categorical attribute values.
pub const IDENTICAL_COMPAT: f64 = 0.9;

/// Cultural coordination score for two agents sharing a culture.
pub const SAME_CULTURE_COORDINATION: f64 = 0.8;

// ---------------------------------------------------------------------------
// Cultural weight modifiers
// ---------------------------------------------------------------------------

/// Per-culture multiplicative modifiers for the coherence weight set.
///
/// Cultures absent from the table leave weights unchanged, so custom tables
/// (including empty ones) are valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CulturalModifierTable {
    pub modifiers: BTreeMap<CulturalContext, WeightModifiers>,
}

impl CulturalModifierTable {
    /// Table with no entries; every culture falls through unchanged.
    pub fn empty() -> Self {
        Self {
            modifiers: BTreeMap::new(),
        }
    }

    /// Look up the modifiers for a culture.
    pub fn get(&self, culture: CulturalContext) -> Option<&WeightModifiers> {
        self.modifiers.get(&culture)
    }

    /// Load a table from a JSON string (configuration override).
    pub fn from_json_str(json: &str) -> crate::domain::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for CulturalModifierTable {
    fn default() -> Self {
        let mut modifiers = BTreeMap::new();
        modifiers.insert(
            CulturalContext::WesternIndividualist,
            WeightModifiers {
                historical: 0.9,
                present: 1.0,
                prospective: 1.2,
                meta_adaptive: 1.1,
            },
        );
        modifiers.insert(
            CulturalContext::EastAsianCollectivist,
            WeightModifiers {
                historical: 1.2,
                present: 1.1,
                prospective: 0.9,
                meta_adaptive: 0.9,
            },
        );
        modifiers.insert(
            CulturalContext::IndigenousRelational,
            WeightModifiers {
                historical: 1.3,
                present: 1.1,
                prospective: 0.8,
                meta_adaptive: 0.8,
            },
        );
        modifiers.insert(
            CulturalContext::SouthAsianDharmic,
            WeightModifiers {
                historical: 1.1,
                present: 1.0,
                prospective: 1.0,
                meta_adaptive: 1.0,
            },
        );
        modifiers.insert(
            CulturalContext::SecularRationalist,
            WeightModifiers {
                historical: 0.8,
                present: 1.1,
                prospective: 1.1,
                meta_adaptive: 1.2,
            },
        );
        Self { modifiers }
    }
}

// ---------------------------------------------------------------------------
// Timeline plausibility
// ---------------------------------------------------------------------------

/// Plausibility lookup for the five fixed projection timeline buckets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimelineTable {
    pub buckets: BTreeMap<String, f64>,
}

impl TimelineTable {
    /// Plausibility for a timeline tag; unknown tags score 0.5.
    pub fn plausibility(&self, timeline: &str) -> f64 {
        self.buckets.get(timeline).copied().unwrap_or(FALLBACK_COMPAT)
    }
}

impl Default for TimelineTable {
    fn default() -> Self {
        let buckets = BTreeMap::from([
            ("6_months".to_string(), 0.9),
            ("1_year".to_string(), 0.85),
            ("2_years".to_string(), 0.75),
            ("5_years".to_string(), 0.6),
            ("10_years".to_string(), 0.4),
        ]);
        Self { buckets }
    }
}

// ---------------------------------------------------------------------------
// Categorical compatibility lookups
// ---------------------------------------------------------------------------

/// Symmetrized pair lookup: identical values score [`IDENTICAL_COMPAT`],
/// listed pairs (tried in both orders) use their table value, everything
/// else falls back to [`FALLBACK_COMPAT`].
macro_rules! symmetric_lookup {
    ($a:expr, $b:expr, $pair_fn:expr) => {{
        if $a == $b {
            IDENTICAL_COMPAT
        } else {
            $pair_fn($a, $b)
                .or_else(|| $pair_fn($b, $a))
                .unwrap_or(FALLBACK_COMPAT)
        }
    }};
}

/// Decision-style compatibility.
pub fn decision_style_compat(a: DecisionStyle, b: DecisionStyle) -> f64 {
    use DecisionStyle::*;
    fn pair(a: DecisionStyle, b: DecisionStyle) -> Option<f64> {
        match (a, b) {
            (Analytical, Intuitive) => Some(0.5),
            (Analytical, Consensus) => Some(0.6),
            (Analytical, Directive) => Some(0.7),
            (Intuitive, Consensus) => Some(0.7),
            (Intuitive, Directive) => Some(0.4),
            (Consensus, Directive) => Some(0.3),
            _ => None,
        }
    }
    symmetric_lookup!(a, b, pair)
}

/// Conflict-style compatibility.
pub fn conflict_style_compat(a: ConflictStyle, b: ConflictStyle) -> f64 {
    use ConflictStyle::*;
    fn pair(a: ConflictStyle, b: ConflictStyle) -> Option<f64> {
        match (a, b) {
            (Collaborative, Compromising) => Some(0.8),
            (Collaborative, Avoidant) => Some(0.5),
            (Collaborative, Competitive) => Some(0.4),
            (Compromising, Avoidant) => Some(0.6),
            (Compromising, Competitive) => Some(0.5),
            (Avoidant, Competitive) => Some(0.2),
            _ => None,
        }
    }
    symmetric_lookup!(a, b, pair)
}

/// Goal-orientation compatibility.
pub fn goal_orientation_compat(a: GoalOrientation, b: GoalOrientation) -> f64 {
    use GoalOrientation::*;
    fn pair(a: GoalOrientation, b: GoalOrientation) -> Option<f64> {
        match (a, b) {
            (Achievement, Maintenance) => Some(0.5),
            (Achievement, Exploration) => Some(0.7),
            (Maintenance, Exploration) => Some(0.4),
            _ => None,
        }
    }
    symmetric_lookup!(a, b, pair)
}

/// Agency-conception compatibility.
pub fn agency_conception_compat(a: AgencyConception, b: AgencyConception) -> f64 {
    use AgencyConception::*;
    fn pair(a: AgencyConception, b: AgencyConception) -> Option<f64> {
        match (a, b) {
            (Autonomous, Relational) => Some(0.5),
            (Autonomous, Distributed) => Some(0.4),
            (Relational, Distributed) => Some(0.7),
            _ => None,
        }
    }
    symmetric_lookup!(a, b, pair)
}

/// Time-orientation compatibility.
pub fn time_orientation_compat(a: TimeOrientation, b: TimeOrientation) -> f64 {
    use TimeOrientation::*;
    fn pair(a: TimeOrientation, b: TimeOrientation) -> Option<f64> {
        match (a, b) {
            (PastAnchored, PresentFocused) => Some(0.6),
            (PastAnchored, FutureOriented) => Some(0.4),
            (PresentFocused, FutureOriented) => Some(0.6),
            _ => None,
        }
    }
    symmetric_lookup!(a, b, pair)
}

/// Relationship-model compatibility.
pub fn relationship_model_compat(a: RelationshipModel, b: RelationshipModel) -> f64 {
    use RelationshipModel::*;
    fn pair(a: RelationshipModel, b: RelationshipModel) -> Option<f64> {
        match (a, b) {
            (Transactional, Communal) => Some(0.4),
            (Transactional, Hierarchical) => Some(0.6),
            (Communal, Hierarchical) => Some(0.5),
            _ => None,
        }
    }
    symmetric_lookup!(a, b, pair)
}

// ---------------------------------------------------------------------------
// Cultural coordination
// ---------------------------------------------------------------------------

/// Cultural coordination score for an ordered culture pair.
///
/// Identical cultures score exactly [`SAME_CULTURE_COORDINATION`]. Distinct
/// pairs use the ordered lookup below; unlisted ordered pairs fall back to
/// [`FALLBACK_COMPAT`].
pub fn cultural_coordination(a: CulturalContext, b: CulturalContext) -> f64 {
    use CulturalContext::*;
    if a == b {
        return SAME_CULTURE_COORDINATION;
    }
    match (a, b) {
        (WesternIndividualist, EastAsianCollectivist) => 0.55,
        (EastAsianCollectivist, WesternIndividualist) => 0.6,
        (WesternIndividualist, SecularRationalist) => 0.75,
        (SecularRationalist, WesternIndividualist) => 0.75,
        (EastAsianCollectivist, IndigenousRelational) => 0.7,
        (IndigenousRelational, EastAsianCollectivist) => 0.65,
        (IndigenousRelational, SouthAsianDharmic) => 0.7,
        (SouthAsianDharmic, EastAsianCollectivist) => 0.65,
        (SecularRationalist, IndigenousRelational) => 0.45,
        (IndigenousRelational, SecularRationalist) => 0.4,
        _ => FALLBACK_COMPAT,
    }
}
