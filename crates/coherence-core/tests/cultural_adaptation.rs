use std::collections::BTreeMap;

use coherence_core::{
    CoherenceError, CulturalContext, CulturalModifierTable, CulturalWeightAdapter,
    WeightModifiers, WeightSet,
};

const ALL_CULTURES: [CulturalContext; 5] = [
    CulturalContext::WesternIndividualist,
    CulturalContext::EastAsianCollectivist,
    CulturalContext::IndigenousRelational,
    CulturalContext::SouthAsianDharmic,
    CulturalContext::SecularRationalist,
];

#[test]
fn adapted_weights_always_sum_to_one() {
    let adapter = CulturalWeightAdapter::default();
    let inputs = [
        WeightSet::default(),
        WeightSet::new(0.25, 0.25, 0.25, 0.25).unwrap(),
        WeightSet::new(0.7, 0.1, 0.1, 0.1).unwrap(),
        WeightSet::new(0.0, 0.5, 0.5, 0.0).unwrap(),
    ];
    for weights in inputs {
        for culture in ALL_CULTURES {
            let adapted = adapter.adapt(&weights, culture).expect("adapt");
            assert!(
                (adapted.sum() - 1.0).abs() < 1e-9,
                "culture {culture}: sum {}",
                adapted.sum()
            );
        }
    }
}

#[test]
fn missing_table_entry_leaves_weights_unchanged() {
    let adapter = CulturalWeightAdapter::new(CulturalModifierTable::empty());
    let weights = WeightSet::new(0.4, 0.3, 0.2, 0.1).unwrap();
    for culture in ALL_CULTURES {
        let adapted = adapter.adapt(&weights, culture).expect("adapt");
        assert_eq!(adapted, weights);
    }
}

#[test]
fn adaptation_is_pure_and_repeatable() {
    let adapter = CulturalWeightAdapter::default();
    let weights = WeightSet::default();
    let first = adapter
        .adapt(&weights, CulturalContext::EastAsianCollectivist)
        .expect("adapt");
    let second = adapter
        .adapt(&weights, CulturalContext::EastAsianCollectivist)
        .expect("adapt");
    assert_eq!(first, second);
    // Input untouched.
    assert_eq!(weights, WeightSet::default());
}

#[test]
fn zero_sum_modifiers_are_rejected() {
    let table = CulturalModifierTable {
        modifiers: BTreeMap::from([(
            CulturalContext::WesternIndividualist,
            WeightModifiers {
                historical: 0.0,
                present: 0.0,
                prospective: 0.0,
                meta_adaptive: 0.0,
            },
        )]),
    };
    let adapter = CulturalWeightAdapter::new(table);
    let result = adapter.adapt(&WeightSet::default(), CulturalContext::WesternIndividualist);
    assert!(matches!(
        result,
        Err(CoherenceError::DegenerateWeights { .. })
    ));
}

#[test]
fn zero_weight_survives_when_other_coefficients_carry_the_sum() {
    let table = CulturalModifierTable {
        modifiers: BTreeMap::from([(
            CulturalContext::SecularRationalist,
            WeightModifiers {
                historical: 2.0,
                present: 1.0,
                prospective: 1.0,
                meta_adaptive: 1.0,
            },
        )]),
    };
    let adapter = CulturalWeightAdapter::new(table);
    let weights = WeightSet::new(0.0, 0.5, 0.3, 0.2).unwrap();
    let adapted = adapter
        .adapt(&weights, CulturalContext::SecularRationalist)
        .expect("adapt");
    assert_eq!(adapted.historical, 0.0);
    assert!((adapted.sum() - 1.0).abs() < 1e-9);
}

#[test]
fn modifier_table_round_trips_through_json() {
    let table = CulturalModifierTable::default();
    let json = serde_json::to_string_pretty(&table).expect("serialize");
    let back = CulturalModifierTable::from_json_str(&json).expect("parse");
    assert_eq!(table, back);

    let adapter = CulturalWeightAdapter::new(back);
    let adapted = adapter
        .adapt(&WeightSet::default(), CulturalContext::IndigenousRelational)
        .expect("adapt");
    assert!((adapted.sum() - 1.0).abs() < 1e-9);
}
