//! The `quizmith init` command.

use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;

use quizmith_core::defaults;
use quizmith_core::model::{
    AnswerData, CategoryConfig, ProfileConfig, QuestionData, QuestionType, QuizData, QuizMetadata,
    ResultsConfig, ScoringConfig,
};
use quizmith_sources::config::QuizmithConfig;

pub fn execute() -> Result<()> {
    write_if_absent(
        Path::new("quizmith.toml"),
        &toml::to_string_pretty(&QuizmithConfig::default())?,
    )?;

    let data = starter_quiz_data();
    write_if_absent(
        Path::new("quiz-data.json"),
        &serde_json::to_string_pretty(&data)?,
    )?;

    Ok(())
}

fn write_if_absent(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping", path.display());
        return Ok(());
    }
    std::fs::write(path, content)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Created {}", path.display());
    Ok(())
}

/// The built-in question set, expressed as an authorable document with
/// ordering, scoring, and a three-profile result range.
fn starter_quiz_data() -> QuizData {
    let questions: Vec<QuestionData> = defaults::default_questions()
        .iter()
        .enumerate()
        .map(|(i, question)| QuestionData {
            id: question.id.clone(),
            text: question.text.clone(),
            topic: question.topic.clone(),
            question_type: QuestionType::Single,
            required: true,
            order: (i + 1) as i64,
            metadata: None,
            answers: question
                .answers
                .iter()
                .map(|answer| AnswerData {
                    id: answer.id.clone(),
                    text: answer.text.clone(),
                    weight: answer.weight,
                    topic: answer.topic.clone(),
                    background_color: None,
                    text_color: None,
                    answer_type: None,
                    description: None,
                })
                .collect(),
        })
        .collect();

    let max_score: u32 = questions
        .iter()
        .map(|q| q.answers.iter().map(|a| a.weight).max().unwrap_or(0))
        .sum();

    let mut categories = IndexMap::new();
    for question in &questions {
        categories
            .entry(question.topic.clone())
            .or_insert_with(|| CategoryConfig {
                weight: 1.0,
                description: format!("How you approach {}", question.topic.to_lowercase()),
            });
    }

    let mut profiles = IndexMap::new();
    profiles.insert(
        "steady_specialist".to_string(),
        ProfileConfig {
            name: "Steady Specialist".into(),
            description: "You favor depth, structure, and proven approaches.".into(),
            score_range: [0, 12],
            characteristics: vec![
                "Methodical and reliable".into(),
                "Prefers established processes".into(),
            ],
        },
    );
    profiles.insert(
        "balanced_professional".to_string(),
        ProfileConfig {
            name: "Balanced Professional".into(),
            description: "You adapt your working style to the situation.".into(),
            score_range: [13, 18],
            characteristics: vec![
                "Adaptable across teams and tasks".into(),
                "Comfortable with independent and group work".into(),
            ],
        },
    );
    profiles.insert(
        "dynamic_leader".to_string(),
        ProfileConfig {
            name: "Dynamic Leader".into(),
            description: "You push for momentum and bring others along.".into(),
            score_range: [19, max_score],
            characteristics: vec![
                "Energized by fast-moving environments".into(),
                "Takes initiative under pressure".into(),
            ],
        },
    );

    QuizData {
        quiz_metadata: QuizMetadata {
            title: "Work Style Quiz".into(),
            description: "Discover how you prefer to work".into(),
            version: "1.0.0".into(),
            created_at: String::new(),
            updated_at: String::new(),
        },
        questions,
        scoring: ScoringConfig {
            algorithm: "weighted_sum".into(),
            max_score,
            categories,
        },
        results: ResultsConfig { profiles },
    }
}
