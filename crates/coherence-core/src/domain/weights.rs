//! Weighting coefficients for the four coherence sub-scores.

use serde::{Deserialize, Serialize};

use super::error::{CoherenceError, Result};

/// Tolerance on the unit-sum invariant at construction.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.001;

/// Four non-negative coefficients that must sum to 1.0.
///
/// Constructed only through [`WeightSet::new`] (or [`Default`]), so any
/// `WeightSet` in circulation satisfies the unit-sum invariant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeightSet {
    pub historical: f64,
    pub present: f64,
    pub prospective: f64,
    pub meta_adaptive: f64,
}

impl WeightSet {
    /// Create a validated weight set.
    ///
    /// Fails when any coefficient is negative or non-finite, or when the
    /// sum deviates from 1.0 by more than [`WEIGHT_SUM_TOLERANCE`].
    pub fn new(historical: f64, present: f64, prospective: f64, meta_adaptive: f64) -> Result<Self> {
        let coefficients = [historical, present, prospective, meta_adaptive];
        if coefficients.iter().any(|c| !c.is_finite() || *c < 0.0) {
            return Err(CoherenceError::InvalidWeightSet(format!(
                "coefficients must be finite and non-negative, got {coefficients:?}"
            )));
        }

        let sum: f64 = coefficients.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(CoherenceError::InvalidWeightSet(format!(
                "coefficients must sum to 1.0 (±{WEIGHT_SUM_TOLERANCE}), got {sum}"
            )));
        }

        Ok(Self {
            historical,
            present,
            prospective,
            meta_adaptive,
        })
    }

    /// Sum of the four coefficients.
    pub fn sum(&self) -> f64 {
        self.historical + self.present + self.prospective + self.meta_adaptive
    }
}

impl Default for WeightSet {
    fn default() -> Self {
        Self {
            historical: 0.30,
            present: 0.30,
            prospective: 0.25,
            meta_adaptive: 0.15,
        }
    }
}

/// Per-culture multiplicative modifiers for the four coefficients.
///
/// Unlike [`WeightSet`], modifiers carry no unit-sum invariant; the adapter
/// renormalizes after multiplication.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeightModifiers {
    pub historical: f64,
    pub present: f64,
    pub prospective: f64,
    pub meta_adaptive: f64,
}

impl WeightModifiers {
    /// Identity modifiers (all 1.0).
    pub fn neutral() -> Self {
        Self {
            historical: 1.0,
            present: 1.0,
            prospective: 1.0,
            meta_adaptive: 1.0,
        }
    }
}
