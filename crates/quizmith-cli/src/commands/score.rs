//! The `quizmith score` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use serde::Serialize;

use quizmith_core::defaults;
use quizmith_core::model::{QuizResult, ResolvedProfile, Response};
use quizmith_core::session::QuizSession;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoreOutput {
    result: QuizResult,
    profile: ResolvedProfile,
}

pub async fn execute(
    responses_path: PathBuf,
    data: Option<PathBuf>,
    format: String,
    config: Option<PathBuf>,
) -> Result<()> {
    let content = std::fs::read_to_string(&responses_path)
        .with_context(|| format!("failed to read responses: {}", responses_path.display()))?;
    let responses: Vec<Response> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse responses: {}", responses_path.display()))?;

    let mut session = QuizSession::new();
    for response in responses {
        session.add_response(response);
    }
    let result = session.calculate_results();

    let config = super::resolve_config(config.as_deref(), data, None)?;
    let loader = super::build_loader(&config);
    let profile = match loader.resolve_profile(result.total_score).await {
        Ok(profile) => profile,
        Err(e) => {
            tracing::warn!("profile configuration unavailable, using built-in profile: {e}");
            defaults::default_profile()
        }
    };

    match format.as_str() {
        "json" => {
            let output = ScoreOutput { result, profile };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        "table" => {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(vec!["Topic", "Total", "Count", "Average"]);
            for score in &result.topic_scores {
                table.add_row(vec![
                    Cell::new(&score.topic),
                    Cell::new(score.total_weight),
                    Cell::new(score.count),
                    Cell::new(format!("{:.2}", score.average_weight)),
                ]);
            }
            println!("{table}");
            println!(
                "Total score: {} ({} responses)",
                result.total_score,
                result.responses.len()
            );
            println!("Profile: {} ({})", profile.profile.name, profile.profile.description);
        }
        other => anyhow::bail!("unknown format: {other} (expected table or json)"),
    }

    Ok(())
}
