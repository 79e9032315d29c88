//! Agent Coherence Core Library
//!
//! Deterministic, single-threaded scoring of agent identity coherence,
//! cross-agent coordination potential, and culturally adapted weighting.
//! All scoring functions are pure: the evaluation timestamp is an explicit
//! parameter, so identical inputs always produce identical results.

pub mod coherence;
pub mod coordination;
pub mod cultural;
pub mod domain;
pub mod metrics;
pub mod obs;
pub mod report;
pub mod similarity;
pub mod tables;
pub mod telemetry;

pub use domain::{
    AgencyConception, AgentProfile, AuthenticityRecord, Belief, BeliefSystem, CoherenceBand,
    CoherenceError, ConfidenceTag, ConflictStyle, CoordinationRecommendation, CoordinationResult,
    CulturalContext, DecisionStyle, FutureProjection, Goal, GoalOrientation, IdentitySnapshot,
    Interpretation, InterventionKind, InterventionPriority, InterventionStrategy,
    NormativeFramework, OntologySystem, PresentState, RelationshipModel, Result, Rule,
    RuleSystem, ScoreResult, SelfModification, SubScores, TimeOrientation, WeightModifiers,
    WeightSet, WEIGHT_SUM_TOLERANCE,
};

pub use coherence::CoherenceScorer;
pub use coordination::CoordinationScorer;
pub use cultural::CulturalWeightAdapter;

pub use similarity::{clamp01, jaccard, mean, pearson, variance};
pub use tables::{
    cultural_coordination, CulturalModifierTable, TimelineTable, FALLBACK_COMPAT,
    IDENTICAL_COMPAT, SAME_CULTURE_COORDINATION,
};

pub use report::{
    read_assessment_artifact, render_assessment_md, render_score_report_md,
    write_assessment_artifact, AssessmentArtifact,
};

pub use metrics::METRICS;
pub use obs::{
    emit_assessment_completed, emit_score_computed, emit_weights_adapted, AssessmentSpan,
};
pub use telemetry::{init_tracing, LogFormat};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
