//! Agent Coherence CLI
//!
//! The `coherence` command scores agent profiles and assesses coordination
//! potential between pairs of agents.
//!
//! ## Commands
//!
//! - `score`: Score one agent's identity coherence
//! - `assess`: Assess coordination potential between two agents
//! - `weights`: Show default or culturally adapted weight sets

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use uuid::Uuid;

use coherence_core::{
    render_assessment_md, render_score_report_md, write_assessment_artifact, AgentProfile,
    AssessmentArtifact, CoherenceScorer, CoordinationScorer, CulturalContext, LogFormat,
    WeightSet, METRICS,
};

#[derive(Parser)]
#[command(name = "coherence")]
#[command(author = "Coherence Lab")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Agent coherence scoring and coordination assessment", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one agent's identity coherence
    Score {
        /// Path to the agent profile file (JSON)
        #[arg(short, long)]
        agent: PathBuf,

        /// Adapt the weights to the agent's cultural context
        #[arg(long)]
        cultural: bool,

        /// Evaluation timestamp (RFC 3339; defaults to now)
        #[arg(long)]
        now: Option<String>,

        /// Render a markdown report instead of JSON
        #[arg(long)]
        markdown: bool,
    },

    /// Assess coordination potential between two agents
    Assess {
        /// Path to the first agent profile (JSON)
        #[arg(long)]
        agent_a: PathBuf,

        /// Path to the second agent profile (JSON)
        #[arg(long)]
        agent_b: PathBuf,

        /// Evaluation timestamp (RFC 3339; defaults to now)
        #[arg(long)]
        now: Option<String>,

        /// Directory to persist the assessment artifact into
        #[arg(long)]
        artifacts_dir: Option<PathBuf>,

        /// Render a markdown report instead of JSON
        #[arg(long)]
        markdown: bool,
    },

    /// Show the default or culturally adapted weight set
    Weights {
        /// Cultural context to adapt for (e.g. east_asian_collectivist)
        #[arg(long)]
        culture: Option<String>,
    },
}

fn load_profile(path: &Path) -> Result<AgentProfile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read agent profile {:?}", path))?;
    let profile: AgentProfile = serde_json::from_str(&content)
        .with_context(|| format!("parse agent profile {:?}", path))?;
    profile
        .validate()
        .with_context(|| format!("validate agent profile {:?}", path))?;
    Ok(profile)
}

fn parse_now(now: Option<&str>) -> Result<DateTime<Utc>> {
    match now {
        Some(raw) => {
            let parsed = DateTime::parse_from_rfc3339(raw)
                .with_context(|| format!("parse --now value '{raw}' as RFC 3339"))?;
            Ok(parsed.with_timezone(&Utc))
        }
        None => Ok(Utc::now()),
    }
}

fn parse_culture(raw: &str) -> Result<CulturalContext> {
    // Culture tags are serialized snake_case; reuse the serde form.
    serde_json::from_value(serde_json::Value::String(raw.to_string()))
        .with_context(|| format!("unknown culture tag '{raw}'"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Plain
    };
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    coherence_core::init_tracing(format, level);

    match cli.command {
        Commands::Score {
            agent,
            cultural,
            now,
            markdown,
        } => {
            let profile = load_profile(&agent)?;
            let now = parse_now(now.as_deref())?;
            let scorer = CoherenceScorer::default();

            let result = if cultural {
                scorer.score_culturally_adapted(&profile, now)?
            } else {
                scorer.score(&profile, now)
            };

            info!(agent = %profile.name, total = result.total, "scored agent");
            if markdown {
                println!("{}", render_score_report_md(&profile.name, &result));
            } else {
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
        }

        Commands::Assess {
            agent_a,
            agent_b,
            now,
            artifacts_dir,
            markdown,
        } => {
            let profile_a = load_profile(&agent_a)?;
            let profile_b = load_profile(&agent_b)?;
            let now = parse_now(now.as_deref())?;

            let scorer = CoordinationScorer::default();
            let result = scorer.assess(&profile_a, &profile_b, now)?;

            let artifact = AssessmentArtifact {
                assessment_id: Uuid::new_v4(),
                agent_a_name: profile_a.name.clone(),
                agent_b_name: profile_b.name.clone(),
                result,
            };

            if let Some(dir) = artifacts_dir {
                let path = write_assessment_artifact(&artifact, &dir)?;
                info!(path = %path.display(), "assessment artifact written");
            }

            if markdown {
                println!("{}", render_assessment_md(&artifact));
            } else {
                println!("{}", serde_json::to_string_pretty(&artifact)?);
            }
        }

        Commands::Weights { culture } => {
            let base = WeightSet::default();
            match culture {
                Some(raw) => {
                    let culture = parse_culture(&raw)?;
                    let scorer = CoherenceScorer::default();
                    let adapted = scorer.adapter().adapt(&base, culture)?;
                    println!("{}", serde_json::to_string_pretty(&adapted)?);
                }
                None => {
                    println!("{}", serde_json::to_string_pretty(&base)?);
                }
            }
        }
    }

    METRICS.flush();
    Ok(())
}
