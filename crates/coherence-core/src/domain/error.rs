//! Domain-level error taxonomy for coherence assessment.

/// Coherence assessment domain errors.
#[derive(Debug, thiserror::Error)]
pub enum CoherenceError {
    #[error("invalid weight set: {0}")]
    InvalidWeightSet(String),

    #[error("degenerate weights after cultural adaptation for culture '{culture}': modifiers reduce the weight sum to zero")]
    DegenerateWeights { culture: String },

    #[error("invalid agent profile: {0}")]
    InvalidAgentProfile(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for coherence assessment operations.
pub type Result<T> = std::result::Result<T, CoherenceError>;
