//! Quiz configuration loading, validation, and profile resolution.
//!
//! The loader fetches the hosted JSON document once through a caller-supplied
//! [`ConfigFetcher`], caches it for its own lifetime, and answers typed
//! queries against it.

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::OnceCell;

use crate::defaults;
use crate::error::ConfigError;
use crate::model::{
    AnswerData, Question, QuestionData, QuizData, QuizMetadata, ResolvedProfile, ResultsConfig,
    ScoringConfig,
};
use crate::traits::{ConfigFetcher, QuestionSource};

/// Profile key tried when no configured score range matches.
pub const DEFAULT_PROFILE_KEY: &str = "balanced_professional";

/// Fetches, caches, and interprets a quiz configuration document.
pub struct QuizLoader {
    fetcher: Box<dyn ConfigFetcher>,
    cache: OnceCell<QuizData>,
}

impl QuizLoader {
    pub fn new(fetcher: impl ConfigFetcher + 'static) -> Self {
        Self {
            fetcher: Box::new(fetcher),
            cache: OnceCell::new(),
        }
    }

    pub fn boxed(fetcher: Box<dyn ConfigFetcher>) -> Self {
        Self {
            fetcher,
            cache: OnceCell::new(),
        }
    }

    /// Fetch and parse the configuration document. The first successful call
    /// caches the document for the lifetime of this loader; later calls
    /// return the cached value without re-fetching.
    pub async fn load(&self) -> Result<&QuizData, ConfigError> {
        self.cache
            .get_or_try_init(|| async {
                let raw = self.fetcher.fetch().await?;
                let data: QuizData = serde_json::from_str(&raw).map_err(|e| {
                    ConfigError::Invalid(format!("malformed quiz document: {e}"))
                })?;
                tracing::debug!(
                    source = self.fetcher.name(),
                    questions = data.questions.len(),
                    "quiz configuration loaded"
                );
                Ok(data)
            })
            .await
    }

    /// Questions in display order (ascending `order`, document order breaks
    /// ties), projected to the quiz-taking shape.
    pub async fn questions(&self) -> Result<Vec<Question>, ConfigError> {
        let data = self.questions_with_styling().await?;
        Ok(data.iter().map(Question::from).collect())
    }

    /// Full question records in display order, styling included, for admin
    /// screens and store seeding.
    pub async fn questions_with_styling(&self) -> Result<Vec<QuestionData>, ConfigError> {
        let data = self.load().await?;
        let mut questions = data.questions.clone();
        questions.sort_by_key(|q| q.order);
        Ok(questions)
    }

    pub async fn metadata(&self) -> Result<&QuizMetadata, ConfigError> {
        Ok(&self.load().await?.quiz_metadata)
    }

    pub async fn scoring(&self) -> Result<&ScoringConfig, ConfigError> {
        Ok(&self.load().await?.scoring)
    }

    pub async fn results_config(&self) -> Result<&ResultsConfig, ConfigError> {
        Ok(&self.load().await?.results)
    }

    pub async fn question_by_id(&self, id: &str) -> Result<Option<&QuestionData>, ConfigError> {
        Ok(self.load().await?.questions.iter().find(|q| q.id == id))
    }

    pub async fn questions_by_topic(
        &self,
        topic: &str,
    ) -> Result<Vec<&QuestionData>, ConfigError> {
        Ok(self
            .load()
            .await?
            .questions
            .iter()
            .filter(|q| q.topic == topic)
            .collect())
    }

    /// The full answer record, styling included, for one selected answer.
    pub async fn answer_with_styling(
        &self,
        question_id: &str,
        answer_id: &str,
    ) -> Result<Option<&AnswerData>, ConfigError> {
        Ok(self
            .question_by_id(question_id)
            .await?
            .and_then(|q| q.answers.iter().find(|a| a.id == answer_id)))
    }

    /// Resolve the respondent's profile from a total score. Total on the
    /// score input: falls back to the designated default profile rather
    /// than failing, so the respondent-facing flow never dead-ends.
    pub async fn resolve_profile(&self, total_score: u32) -> Result<ResolvedProfile, ConfigError> {
        Ok(resolve_profile_in(self.results_config().await?, total_score))
    }
}

#[async_trait]
impl QuestionSource for QuizLoader {
    fn name(&self) -> &str {
        "json-config"
    }

    async fn questions(&self) -> Result<Vec<Question>, ConfigError> {
        QuizLoader::questions(self).await
    }
}

/// First profile in declared order whose inclusive `[min, max]` range
/// contains the score wins; overlapping ranges are an authoring concern,
/// not a runtime error. Falls back to the `balanced_professional` entry,
/// then to the compiled-in profile.
pub fn resolve_profile_in(results: &ResultsConfig, total_score: u32) -> ResolvedProfile {
    for (key, profile) in &results.profiles {
        let [min, max] = profile.score_range;
        if total_score >= min && total_score <= max {
            return ResolvedProfile {
                key: key.clone(),
                profile: profile.clone(),
            };
        }
    }

    match results.profiles.get(DEFAULT_PROFILE_KEY) {
        Some(profile) => ResolvedProfile {
            key: DEFAULT_PROFILE_KEY.to_string(),
            profile: profile.clone(),
        },
        None => {
            tracing::warn!(
                score = total_score,
                "no profile range matched and no '{DEFAULT_PROFILE_KEY}' entry; using built-in profile"
            );
            defaults::default_profile()
        }
    }
}

/// Structural validity check for a raw configuration document: required
/// top-level sections, id/text/topic on every question, at least one answer
/// per question, id/text and a numeric weight on every answer. Never
/// errors; callers decide whether to fall back.
pub fn validate_document(data: &Value) -> bool {
    let Some(root) = data.as_object() else {
        return false;
    };
    if !root.contains_key("quizMetadata")
        || !root.contains_key("scoring")
        || !root.contains_key("results")
    {
        return false;
    }
    let Some(questions) = root.get("questions").and_then(Value::as_array) else {
        return false;
    };

    for question in questions {
        let has_required_fields = ["id", "text", "topic"].iter().all(|field| {
            question
                .get(*field)
                .and_then(Value::as_str)
                .is_some_and(|s| !s.is_empty())
        });
        if !has_required_fields {
            return false;
        }

        let Some(answers) = question.get("answers").and_then(Value::as_array) else {
            return false;
        };
        if answers.is_empty() {
            return false;
        }
        for answer in answers {
            let id_ok = answer
                .get("id")
                .and_then(Value::as_str)
                .is_some_and(|s| !s.is_empty());
            let text_ok = answer
                .get("text")
                .and_then(Value::as_str)
                .is_some_and(|s| !s.is_empty());
            let weight_ok = answer.get("weight").is_some_and(Value::is_number);
            if !id_ok || !text_ok || !weight_ok {
                return false;
            }
        }
    }

    true
}

/// A warning from configuration validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question id, when the warning concerns a specific question.
    pub question_id: Option<String>,
    pub message: String,
}

/// Authoring-level checks on a parsed document. These do not make the
/// configuration unusable; they flag things an operator should fix.
pub fn validation_warnings(data: &QuizData) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen_ids = std::collections::HashSet::new();
    for question in &data.questions {
        if !seen_ids.insert(&question.id) {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: format!("duplicate question id: {}", question.id),
            });
        }
    }

    for question in &data.questions {
        if question.answers.len() < 2 {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: format!("only {} answer(s); at least 2 required", question.answers.len()),
            });
        }
        for answer in &question.answers {
            if answer.weight < 1 {
                warnings.push(ValidationWarning {
                    question_id: Some(question.id.clone()),
                    message: format!("answer {} has weight 0; weights must be >= 1", answer.id),
                });
            }
        }
    }

    // Overlapping profile ranges are resolved first-match-wins at runtime;
    // surface them so the author knows which profile shadows which.
    let profiles: Vec<_> = data.results.profiles.iter().collect();
    for (i, (key_a, profile_a)) in profiles.iter().enumerate() {
        for (key_b, profile_b) in profiles.iter().skip(i + 1) {
            let [min_a, max_a] = profile_a.score_range;
            let [min_b, max_b] = profile_b.score_range;
            if min_a <= max_b && min_b <= max_a {
                warnings.push(ValidationWarning {
                    question_id: None,
                    message: format!(
                        "profile ranges overlap: '{key_a}' [{min_a}, {max_a}] and '{key_b}' [{min_b}, {max_b}] (first match wins)"
                    ),
                });
            }
        }
    }

    warnings
}
