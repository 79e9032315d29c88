//! Domain models for coherence assessment.
//!
//! Canonical definitions for the core entities:
//! - `AgentProfile`: Immutable input record for all scoring
//! - `WeightSet`: Validated sub-score weighting coefficients
//! - `ScoreResult`: Coherence score with interpretation
//! - `CoordinationResult`: Two-agent assessment with interventions

pub mod agent;
pub mod assessment;
pub mod error;
pub mod score;
pub mod weights;

// Re-export main types and errors
pub use agent::{
    AgencyConception, AgentProfile, AuthenticityRecord, Belief, BeliefSystem, ConflictStyle,
    CulturalContext, DecisionStyle, FutureProjection, Goal, GoalOrientation, IdentitySnapshot,
    NormativeFramework, OntologySystem, PresentState, RelationshipModel, Rule, RuleSystem,
    SelfModification, TimeOrientation,
};
pub use assessment::{
    ConfidenceTag, CoordinationRecommendation, CoordinationResult, InterventionKind,
    InterventionPriority, InterventionStrategy,
};
pub use error::{CoherenceError, Result};
pub use score::{CoherenceBand, Interpretation, ScoreResult, SubScores};
pub use weights::{WeightModifiers, WeightSet, WEIGHT_SUM_TOLERANCE};
