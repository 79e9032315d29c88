use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Duration, TimeZone, Utc};
use coherence_core::{
    AgencyConception, AgentProfile, AuthenticityRecord, Belief, BeliefSystem, ConflictStyle,
    CoordinationScorer, CulturalContext, DecisionStyle, FutureProjection, Goal, GoalOrientation,
    IdentitySnapshot, InterventionKind, InterventionPriority, NormativeFramework, OntologySystem,
    PresentState, RelationshipModel, Rule, RuleSystem, SelfModification, TimeOrientation,
};
use uuid::Uuid;

fn tags(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn eval_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 15, 9, 0, 0).unwrap()
}

fn base_agent(name: &str, culture: CulturalContext) -> AgentProfile {
    AgentProfile {
        agent_id: Uuid::new_v4(),
        name: name.to_string(),
        culture,
        identity_kernel: tags(&["curious", "careful"]),
        history: vec![IdentitySnapshot {
            recorded_at: eval_time() - Duration::days(7),
            kernel: tags(&["curious", "careful"]),
        }],
        present: PresentState {
            somatic: vec![0.5, 0.6, 0.7],
            cognitive: vec![0.52, 0.61, 0.72],
            social: vec![0.48, 0.59, 0.68],
            narrative: vec![0.51, 0.62, 0.71],
        },
        framework: NormativeFramework {
            beliefs: BeliefSystem {
                beliefs: vec![Belief {
                    statement: "evidence first".to_string(),
                    confidence: 0.8,
                }],
                decision_style: DecisionStyle::Analytical,
            },
            rules: RuleSystem {
                rules: vec![Rule {
                    description: "verify claims".to_string(),
                    strictness: 0.7,
                }],
                conflict_style: ConflictStyle::Collaborative,
                goal_orientation: GoalOrientation::Achievement,
            },
            ontology: OntologySystem {
                categories: BTreeMap::from([
                    ("agents".to_string(), vec!["self".to_string()]),
                    ("values".to_string(), vec!["honesty".to_string()]),
                ]),
                agency_conception: AgencyConception::Autonomous,
                time_orientation: TimeOrientation::FutureOriented,
            },
            authenticity: AuthenticityRecord {
                value_alignment: 0.8,
                expression_consistency: 0.8,
                relationship_model: RelationshipModel::Communal,
            },
        },
        projection: FutureProjection {
            goals: vec![Goal {
                description: "stay curious".to_string(),
                goal_type: "mastery".to_string(),
            }],
            timeline: "1_year".to_string(),
            stated_alignment: 0.8,
        },
        self_modification: SelfModification {
            history: vec!["belief_revision".to_string()],
            maintenance_capacity: 0.7,
        },
        capabilities: tags(&["planning", "analysis"]),
    }
}

/// An agent engineered to coordinate badly with `base_agent`.
fn discordant_agent(name: &str) -> AgentProfile {
    let mut agent = base_agent(name, CulturalContext::IndigenousRelational);
    agent.culture = CulturalContext::SecularRationalist;
    agent.history.clear();
    agent.identity_kernel = tags(&["detached"]);
    agent.capabilities = BTreeSet::new();
    agent.framework.beliefs.beliefs = vec![Belief {
        statement: "certainty is possible".to_string(),
        confidence: 0.1,
    }];
    agent.framework.beliefs.decision_style = DecisionStyle::Directive;
    agent.framework.rules.conflict_style = ConflictStyle::Competitive;
    agent.framework.rules.goal_orientation = GoalOrientation::Maintenance;
    agent.framework.ontology.categories = BTreeMap::from([(
        "machines".to_string(),
        vec!["tools".to_string()],
    )]);
    agent.framework.ontology.agency_conception = AgencyConception::Distributed;
    agent.framework.ontology.time_orientation = TimeOrientation::PastAnchored;
    agent.framework.authenticity.value_alignment = 0.1;
    agent.framework.authenticity.expression_consistency = 0.15;
    agent.framework.authenticity.relationship_model = RelationshipModel::Transactional;
    agent.projection.goals.clear();
    agent.projection.timeline = "7_years".to_string();
    agent.projection.stated_alignment = 0.1;
    agent.self_modification.history.clear();
    agent.self_modification.maintenance_capacity = 0.1;
    agent.present = PresentState::default();
    agent
}

#[test]
fn same_culture_pair_scores_cultural_coordination_point_eight() {
    let scorer = CoordinationScorer::default();
    let a = base_agent("vela", CulturalContext::SouthAsianDharmic);
    let b = base_agent("iris", CulturalContext::SouthAsianDharmic);
    let result = scorer.assess(&a, &b, eval_time()).expect("assess");
    assert_eq!(result.cultural_coordination, 0.8);
}

#[test]
fn compatible_pair_needs_no_comprehensive_program() {
    let scorer = CoordinationScorer::default();
    let a = base_agent("vela", CulturalContext::WesternIndividualist);
    let mut b = base_agent("iris", CulturalContext::WesternIndividualist);
    b.capabilities = tags(&["analysis", "writing"]);
    let result = scorer.assess(&a, &b, eval_time()).expect("assess");

    assert!(result.potential >= 0.5, "potential {}", result.potential);
    assert!(!result
        .strategies
        .iter()
        .any(|s| s.kind == InterventionKind::ComprehensiveCoordination));
}

#[test]
fn discordant_pair_gets_critical_comprehensive_strategy_first() {
    let scorer = CoordinationScorer::default();
    let a = base_agent("vela", CulturalContext::IndigenousRelational);
    let b = discordant_agent("unit-9");
    let result = scorer.assess(&a, &b, eval_time()).expect("assess");

    assert!(result.potential < 0.5, "potential {}", result.potential);
    let first = result.strategies.first().expect("strategies");
    assert_eq!(first.kind, InterventionKind::ComprehensiveCoordination);
    assert_eq!(first.priority, InterventionPriority::Critical);
}

#[test]
fn strategies_are_sorted_by_descending_priority() {
    let scorer = CoordinationScorer::default();
    let a = base_agent("vela", CulturalContext::IndigenousRelational);
    let b = discordant_agent("unit-9");
    let result = scorer.assess(&a, &b, eval_time()).expect("assess");

    for window in result.strategies.windows(2) {
        assert!(window[0].priority >= window[1].priority);
    }
}

#[test]
fn empty_capability_set_uses_fixed_default() {
    let scorer = CoordinationScorer::default();
    let a = base_agent("vela", CulturalContext::SecularRationalist);
    let mut b = base_agent("iris", CulturalContext::SecularRationalist);
    b.capabilities = BTreeSet::new();
    let result = scorer.assess(&a, &b, eval_time()).expect("assess");
    assert_eq!(result.capability_overlap, 0.3);
}

#[test]
fn result_embeds_culturally_adapted_scores_for_both_agents() {
    let scorer = CoordinationScorer::default();
    let a = base_agent("vela", CulturalContext::EastAsianCollectivist);
    let b = base_agent("iris", CulturalContext::WesternIndividualist);
    let result = scorer.assess(&a, &b, eval_time()).expect("assess");

    assert!(result.agent_a.base_weights.is_some());
    assert!(result.agent_b.base_weights.is_some());
    assert!((result.agent_a.weights.sum() - 1.0).abs() < 1e-9);
    assert!((result.agent_b.weights.sum() - 1.0).abs() < 1e-9);
}

#[test]
fn coordination_result_serde_roundtrip() {
    let scorer = CoordinationScorer::default();
    let a = base_agent("vela", CulturalContext::SecularRationalist);
    let b = base_agent("iris", CulturalContext::SouthAsianDharmic);
    let result = scorer.assess(&a, &b, eval_time()).expect("assess");

    let json = serde_json::to_string(&result).expect("serialize");
    let back: coherence_core::CoordinationResult =
        serde_json::from_str(&json).expect("deserialize");
    assert_eq!(result, back);
}
