//! Cultural weight adaptation: rescale a weight set by per-culture modifiers.

use crate::domain::{CoherenceError, CulturalContext, Result, WeightSet};
use crate::metrics::METRICS;
use crate::obs::emit_weights_adapted;
use crate::tables::CulturalModifierTable;

/// Adapts coherence weights to a cultural context.
///
/// The adapter never mutates its input: it returns a fresh [`WeightSet`],
/// so it is safe to share across callers.
#[derive(Debug, Clone, Default)]
pub struct CulturalWeightAdapter {
    table: CulturalModifierTable,
}

impl CulturalWeightAdapter {
    /// Adapter backed by a custom modifier table.
    pub fn new(table: CulturalModifierTable) -> Self {
        Self { table }
    }

    /// The modifier table in use.
    pub fn table(&self) -> &CulturalModifierTable {
        &self.table
    }

    /// Adapt `weights` for `culture`.
    ///
    /// Cultures without a table entry return the input unchanged. Otherwise
    /// the coefficients are multiplied elementwise and renormalized to sum
    /// to 1.0. Fails with [`CoherenceError::DegenerateWeights`] when the
    /// post-multiplication sum is zero or non-finite; callers must supply
    /// non-zero weights and modifiers.
    pub fn adapt(&self, weights: &WeightSet, culture: CulturalContext) -> Result<WeightSet> {
        let Some(modifiers) = self.table.get(culture) else {
            return Ok(*weights);
        };

        let historical = weights.historical * modifiers.historical;
        let present = weights.present * modifiers.present;
        let prospective = weights.prospective * modifiers.prospective;
        let meta_adaptive = weights.meta_adaptive * modifiers.meta_adaptive;

        let sum = historical + present + prospective + meta_adaptive;
        if !sum.is_finite() || sum <= 0.0 {
            return Err(CoherenceError::DegenerateWeights {
                culture: culture.to_string(),
            });
        }

        let adapted = WeightSet::new(
            historical / sum,
            present / sum,
            prospective / sum,
            meta_adaptive / sum,
        )?;

        METRICS.inc_weights_adapted();
        emit_weights_adapted(culture, weights, &adapted);
        Ok(adapted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WeightModifiers;
    use std::collections::BTreeMap;

    #[test]
    fn test_adapted_weights_sum_to_one() {
        let adapter = CulturalWeightAdapter::default();
        for culture in [
            CulturalContext::WesternIndividualist,
            CulturalContext::EastAsianCollectivist,
            CulturalContext::IndigenousRelational,
            CulturalContext::SouthAsianDharmic,
            CulturalContext::SecularRationalist,
        ] {
            let adapted = adapter
                .adapt(&WeightSet::default(), culture)
                .expect("adapt");
            assert!(
                (adapted.sum() - 1.0).abs() < 1e-9,
                "sum {} for {culture}",
                adapted.sum()
            );
        }
    }

    #[test]
    fn test_unknown_culture_returns_input_unchanged() {
        let adapter = CulturalWeightAdapter::new(CulturalModifierTable::empty());
        let weights = WeightSet::default();
        let adapted = adapter
            .adapt(&weights, CulturalContext::SecularRationalist)
            .expect("adapt");
        assert_eq!(adapted, weights);
    }

    #[test]
    fn test_neutral_modifiers_preserve_weights() {
        let table = CulturalModifierTable {
            modifiers: BTreeMap::from([(
                CulturalContext::SouthAsianDharmic,
                WeightModifiers::neutral(),
            )]),
        };
        let adapter = CulturalWeightAdapter::new(table);
        let weights = WeightSet::default();
        let adapted = adapter
            .adapt(&weights, CulturalContext::SouthAsianDharmic)
            .expect("adapt");
        assert!((adapted.historical - weights.historical).abs() < 1e-12);
        assert!((adapted.meta_adaptive - weights.meta_adaptive).abs() < 1e-12);
    }

    #[test]
    fn test_zero_modifiers_fail() {
        let table = CulturalModifierTable {
            modifiers: BTreeMap::from([(
                CulturalContext::SecularRationalist,
                WeightModifiers {
                    historical: 0.0,
                    present: 0.0,
                    prospective: 0.0,
                    meta_adaptive: 0.0,
                },
            )]),
        };
        let adapter = CulturalWeightAdapter::new(table);
        let result = adapter.adapt(&WeightSet::default(), CulturalContext::SecularRationalist);
        assert!(matches!(
            result,
            Err(CoherenceError::DegenerateWeights { .. })
        ));
    }

    #[test]
    fn test_adaptation_shifts_emphasis() {
        // Indigenous-relational boosts historical continuity.
        let adapter = CulturalWeightAdapter::default();
        let base = WeightSet::default();
        let adapted = adapter
            .adapt(&base, CulturalContext::IndigenousRelational)
            .expect("adapt");
        assert!(adapted.historical > base.historical);
        assert!(adapted.prospective < base.prospective);
    }
}
