//! The `quizmith validate` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use quizmith_core::loader::{validate_document, validation_warnings};
use quizmith_core::model::QuizData;

pub fn execute(data_path: PathBuf) -> Result<()> {
    let content = std::fs::read_to_string(&data_path)
        .with_context(|| format!("failed to read quiz data: {}", data_path.display()))?;

    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse JSON: {}", data_path.display()))?;

    if !validate_document(&value) {
        anyhow::bail!(
            "{} is structurally invalid (missing sections, questions without \
             id/text/topic, or answers without id/text/weight)",
            data_path.display()
        );
    }

    let data: QuizData = serde_json::from_value(value)
        .with_context(|| format!("failed to decode quiz data: {}", data_path.display()))?;

    println!(
        "Quiz: {} ({} questions, {} profiles)",
        data.quiz_metadata.title,
        data.questions.len(),
        data.results.profiles.len()
    );

    let warnings = validation_warnings(&data);
    for w in &warnings {
        let prefix = w
            .question_id
            .as_ref()
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Configuration valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
