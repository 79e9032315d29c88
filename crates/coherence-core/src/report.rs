//! Markdown rendering and JSON artifacts for assessment results.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{CoordinationResult, Result, ScoreResult};

/// Persisted assessment artifact: the result plus identifying metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssessmentArtifact {
    pub assessment_id: Uuid,
    pub agent_a_name: String,
    pub agent_b_name: String,
    pub result: CoordinationResult,
}

/// Render a markdown report for one agent's coherence score.
pub fn render_score_report_md(agent_name: &str, result: &ScoreResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("# Coherence Report: {agent_name}\n\n"));
    out.push_str(&format!(
        "**Total: {:.3}** ({})\n\n",
        result.total, result.interpretation.band
    ));
    out.push_str(&format!("> {}\n\n", result.interpretation.description));

    out.push_str("## Sub-scores\n");
    out.push_str(&format!("- historical continuity: {:.3}\n", result.subs.historical));
    out.push_str(&format!("- present integration: {:.3}\n", result.subs.present));
    out.push_str(&format!("- prospective coherence: {:.3}\n", result.subs.prospective));
    out.push_str(&format!(
        "- meta-adaptive capacity: {:.3}\n\n",
        result.subs.meta_adaptive
    ));

    out.push_str("## Weights\n");
    out.push_str(&format!(
        "- historical {:.3} / present {:.3} / prospective {:.3} / meta-adaptive {:.3}\n",
        result.weights.historical,
        result.weights.present,
        result.weights.prospective,
        result.weights.meta_adaptive,
    ));
    if let Some(base) = &result.base_weights {
        out.push_str(&format!(
            "- before cultural adaptation: {:.3} / {:.3} / {:.3} / {:.3}\n",
            base.historical, base.present, base.prospective, base.meta_adaptive,
        ));
    }
    out.push('\n');

    out.push_str(&format!(
        "**Recommendation:** {}\n",
        result.interpretation.recommendation
    ));
    out
}

/// Render a markdown report for a two-agent coordination assessment.
pub fn render_assessment_md(artifact: &AssessmentArtifact) -> String {
    let result = &artifact.result;
    let mut out = String::new();
    out.push_str(&format!(
        "# Coordination Assessment: {} × {}\n\n",
        artifact.agent_a_name, artifact.agent_b_name
    ));
    out.push_str(&format!(
        "**Potential: {:.3}** ({}, confidence {:?})\n\n",
        result.potential, result.recommendation.band, result.recommendation.confidence
    ));
    out.push_str(&format!("> {}\n\n", result.recommendation.summary));

    out.push_str("## Components\n");
    out.push_str(&format!(
        "- coherence: {} {:.3} / {} {:.3}\n",
        artifact.agent_a_name,
        result.agent_a.total,
        artifact.agent_b_name,
        result.agent_b.total,
    ));
    out.push_str(&format!("- framework compatibility: {:.3}\n", result.framework_compat));
    out.push_str(&format!("- capability overlap: {:.3}\n", result.capability_overlap));
    out.push_str(&format!(
        "- cultural coordination: {:.3}\n\n",
        result.cultural_coordination
    ));

    if result.strategies.is_empty() {
        out.push_str("No interventions suggested.\n");
    } else {
        out.push_str("## Suggested Interventions\n");
        for strategy in &result.strategies {
            out.push_str(&format!(
                "- **{}** ({}): {} — {} (expected +{:.2})\n",
                strategy.kind,
                strategy.priority,
                strategy.description,
                strategy.timeline,
                strategy.expected_improvement,
            ));
        }
    }
    out
}

/// Persist `<dir>/<assessment_id>/assessment.json` in pretty JSON format.
pub fn write_assessment_artifact(artifact: &AssessmentArtifact, dir: &Path) -> Result<PathBuf> {
    let assessment_dir = dir.join(artifact.assessment_id.to_string());
    std::fs::create_dir_all(&assessment_dir)?;

    let path = assessment_dir.join("assessment.json");
    let json = serde_json::to_vec_pretty(artifact)?;
    std::fs::write(&path, &json)?;

    Ok(path)
}

/// Read `<dir>/<assessment_id>/assessment.json`.
pub fn read_assessment_artifact(assessment_id: Uuid, dir: &Path) -> Result<AssessmentArtifact> {
    let path = dir
        .join(assessment_id.to_string())
        .join("assessment.json");
    let json = std::fs::read(&path)?;
    let artifact: AssessmentArtifact = serde_json::from_slice(&json)?;
    Ok(artifact)
}
