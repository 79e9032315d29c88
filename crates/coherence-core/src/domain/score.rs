//! Coherence score results and their categorical interpretation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::weights::WeightSet;

/// Five ordered interpretation bands for a composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoherenceBand {
    VeryLow,
    Low,
    Moderate,
    Good,
    Excellent,
}

impl CoherenceBand {
    /// Classify a composite score against the fixed thresholds.
    pub fn classify(score: f64) -> Self {
        if score >= 0.8 {
            Self::Excellent
        } else if score >= 0.7 {
            Self::Good
        } else if score >= 0.5 {
            Self::Moderate
        } else if score >= 0.3 {
            Self::Low
        } else {
            Self::VeryLow
        }
    }

    /// Fixed description text for coherence results.
    pub fn description(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent identity coherence across time and self-model",
            Self::Good => "Good identity coherence with minor inconsistencies",
            Self::Moderate => "Moderate coherence; identity is stable but strained",
            Self::Low => "Low coherence; identity shows significant fragmentation",
            Self::VeryLow => "Very low coherence; identity continuity is at risk",
        }
    }

    /// Fixed recommendation text for coherence results.
    pub fn recommendation(self) -> &'static str {
        match self {
            Self::Excellent => "Maintain current integration practices",
            Self::Good => "Address minor inconsistencies through targeted reflection",
            Self::Moderate => "Strengthen the weakest sub-dimension before taking on change",
            Self::Low => "Prioritize identity-stabilizing work; defer self-modification",
            Self::VeryLow => "Immediate coherence-restoration work is required",
        }
    }
}

impl std::fmt::Display for CoherenceBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Moderate => "moderate",
            Self::Low => "low",
            Self::VeryLow => "very_low",
        };
        write!(f, "{s}")
    }
}

/// Band plus its fixed texts, attached to every score result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interpretation {
    pub band: CoherenceBand,
    pub description: String,
    pub recommendation: String,
}

impl Interpretation {
    /// Build the interpretation for a composite score.
    pub fn for_score(score: f64) -> Self {
        let band = CoherenceBand::classify(score);
        Self {
            band,
            description: band.description().to_string(),
            recommendation: band.recommendation().to_string(),
        }
    }
}

/// The four sub-scores, each clamped to [0, 1].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SubScores {
    pub historical: f64,
    pub present: f64,
    pub prospective: f64,
    pub meta_adaptive: f64,
}

/// Result of scoring one agent's coherence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreResult {
    /// Composite score in [0, 1].
    pub total: f64,

    /// The four clamped sub-scores.
    pub subs: SubScores,

    /// The weight set actually used to combine the sub-scores.
    pub weights: WeightSet,

    /// The pre-adaptation weight set, when the culturally adapted path ran.
    pub base_weights: Option<WeightSet>,

    /// The injected evaluation timestamp.
    pub scored_at: DateTime<Utc>,

    /// Categorical interpretation.
    pub interpretation: Interpretation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_thresholds() {
        assert_eq!(CoherenceBand::classify(0.85), CoherenceBand::Excellent);
        assert_eq!(CoherenceBand::classify(0.8), CoherenceBand::Excellent);
        assert_eq!(CoherenceBand::classify(0.79), CoherenceBand::Good);
        assert_eq!(CoherenceBand::classify(0.7), CoherenceBand::Good);
        assert_eq!(CoherenceBand::classify(0.5), CoherenceBand::Moderate);
        assert_eq!(CoherenceBand::classify(0.49), CoherenceBand::Low);
        assert_eq!(CoherenceBand::classify(0.3), CoherenceBand::Low);
        assert_eq!(CoherenceBand::classify(0.29), CoherenceBand::VeryLow);
        assert_eq!(CoherenceBand::classify(0.0), CoherenceBand::VeryLow);
    }

    #[test]
    fn test_band_ordering() {
        assert!(CoherenceBand::VeryLow < CoherenceBand::Low);
        assert!(CoherenceBand::Low < CoherenceBand::Moderate);
        assert!(CoherenceBand::Moderate < CoherenceBand::Good);
        assert!(CoherenceBand::Good < CoherenceBand::Excellent);
    }

    #[test]
    fn test_interpretation_carries_band_texts() {
        let interp = Interpretation::for_score(0.72);
        assert_eq!(interp.band, CoherenceBand::Good);
        assert_eq!(interp.description, CoherenceBand::Good.description());
        assert_eq!(interp.recommendation, CoherenceBand::Good.recommendation());
    }

    #[test]
    fn test_band_serde_roundtrip() {
        for band in [
            CoherenceBand::VeryLow,
            CoherenceBand::Low,
            CoherenceBand::Moderate,
            CoherenceBand::Good,
            CoherenceBand::Excellent,
        ] {
            let json = serde_json::to_string(&band).unwrap();
            let back: CoherenceBand = serde_json::from_str(&json).unwrap();
            assert_eq!(band, back);
        }
    }
}
