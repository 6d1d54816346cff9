//! The admin override store.
//!
//! A durable record of admin-authored questions that, when non-empty,
//! entirely supersedes the loaded JSON configuration for quiz-taking.
//! Persistence goes through [`crate::kv::KeyValueStore`], so the logic here
//! runs unchanged against the in-memory store in tests and a file (or any
//! other key-value backing) in deployment.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use quizmith_core::error::ConfigError;
use quizmith_core::loader::QuizLoader;
use quizmith_core::model::{Answer, Question, QuestionData, QuestionType};
use quizmith_core::traits::QuestionSource;

use crate::kv::{KeyValueStore, StoreError};

const QUESTIONS_KEY: &str = "quiz_admin_questions";
const AUTH_KEY: &str = "quiz_admin_auth";

/// An admin-authored question as persisted in the override store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminQuestion {
    pub id: String,
    pub text: String,
    pub topic: String,
    #[serde(rename = "type", default)]
    pub question_type: QuestionType,
    pub answers: Vec<AnswerForm>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An answer as entered in the admin question form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerForm {
    pub id: String,
    pub text: String,
    pub weight: u32,
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

/// Form input for creating or editing a question. An empty `id` means
/// "create": the store assigns a fresh id on save.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionForm {
    #[serde(default)]
    pub id: String,
    pub text: String,
    pub topic: String,
    #[serde(rename = "type", default)]
    pub question_type: QuestionType,
    pub answers: Vec<AnswerForm>,
}

/// Persisted authenticated-session marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub username: String,
    pub is_authenticated: bool,
}

/// The credential pair the store checks logins against.
///
/// A single fixed pair is a deliberate demo-mode simplification, not a
/// security boundary; deployments are expected to front this with a real
/// identity provider.
#[derive(Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self {
            username: "admin".into(),
            password: "@Dmin".into(),
        }
    }
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Why a question form was rejected before reaching the store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("question text is required")]
    MissingText,

    #[error("question topic is required")]
    MissingTopic,

    #[error("at least 2 answers with text are required (got {provided})")]
    TooFewAnswers { provided: usize },
}

/// Errors from seeding or reloading the store from the JSON backend.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Caller-side gate applied before [`AdminStore::save_question`]: a question
/// needs text, a topic, and at least two answers with non-empty text.
pub fn validate_question_form(form: &QuestionForm) -> Result<(), FormError> {
    if form.text.trim().is_empty() {
        return Err(FormError::MissingText);
    }
    if form.topic.trim().is_empty() {
        return Err(FormError::MissingTopic);
    }
    let provided = form
        .answers
        .iter()
        .filter(|a| !a.text.trim().is_empty())
        .count();
    if provided < 2 {
        return Err(FormError::TooFewAnswers { provided });
    }
    Ok(())
}

/// The admin override store.
pub struct AdminStore {
    kv: Box<dyn KeyValueStore>,
    credentials: AdminCredentials,
}

impl AdminStore {
    pub fn new(kv: impl KeyValueStore + 'static, credentials: AdminCredentials) -> Self {
        Self {
            kv: Box::new(kv),
            credentials,
        }
    }

    // -----------------------------------------------------------------------
    // Authentication
    // -----------------------------------------------------------------------

    /// Check the credential pair; on success persist the session marker.
    /// Reports failure as `false` — no lockout, no backoff.
    pub fn login(&self, username: &str, password: &str) -> bool {
        let valid =
            username == self.credentials.username && password == self.credentials.password;
        if !valid {
            return false;
        }

        let user = AdminUser {
            username: username.to_string(),
            is_authenticated: true,
        };
        let marker = match serde_json::to_string(&user) {
            Ok(marker) => marker,
            Err(e) => {
                tracing::warn!("failed to serialize auth marker: {e}");
                return false;
            }
        };
        if let Err(e) = self.kv.set(AUTH_KEY, &marker) {
            tracing::warn!("failed to persist auth marker: {e}");
            return false;
        }
        true
    }

    pub fn logout(&self) {
        if let Err(e) = self.kv.remove(AUTH_KEY) {
            tracing::warn!("failed to clear auth marker: {e}");
        }
    }

    /// Reads the persisted marker; missing or malformed data reads as not
    /// authenticated.
    pub fn is_authenticated(&self) -> bool {
        self.current_user()
            .map(|user| user.is_authenticated)
            .unwrap_or(false)
    }

    pub fn current_user(&self) -> Option<AdminUser> {
        let marker = self.kv.get(AUTH_KEY).ok().flatten()?;
        serde_json::from_str(&marker).ok()
    }

    // -----------------------------------------------------------------------
    // Question CRUD
    // -----------------------------------------------------------------------

    /// Upsert by id. An empty id gets a fresh one assigned. `created_at` is
    /// preserved across edits; `updated_at` is refreshed on every save.
    pub fn save_question(&self, form: QuestionForm) -> Result<AdminQuestion, StoreError> {
        let mut questions = self.all_questions();
        let now = Utc::now();

        let id = if form.id.trim().is_empty() {
            Uuid::new_v4().to_string()
        } else {
            form.id.clone()
        };
        let existing = questions.iter().position(|q| q.id == id);

        let question = AdminQuestion {
            id,
            text: form.text,
            topic: form.topic,
            question_type: form.question_type,
            answers: form.answers,
            created_at: existing
                .map(|i| questions[i].created_at)
                .unwrap_or(now),
            updated_at: now,
        };

        match existing {
            Some(i) => questions[i] = question.clone(),
            None => questions.push(question.clone()),
        }
        self.write_questions(&questions)?;
        Ok(question)
    }

    /// All stored questions. Missing or corrupt stored data reads as an
    /// empty store, never as an error.
    pub fn all_questions(&self) -> Vec<AdminQuestion> {
        let raw = match self.kv.get(QUESTIONS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("override store unreadable, treating as empty: {e}");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(questions) => questions,
            Err(e) => {
                tracing::warn!("stored questions are malformed, treating as empty: {e}");
                Vec::new()
            }
        }
    }

    pub fn question(&self, id: &str) -> Option<AdminQuestion> {
        self.all_questions().into_iter().find(|q| q.id == id)
    }

    /// Delete by id. Returns whether a record was actually removed.
    pub fn delete_question(&self, id: &str) -> bool {
        let questions = self.all_questions();
        let remaining: Vec<AdminQuestion> =
            questions.iter().filter(|q| q.id != id).cloned().collect();
        if remaining.len() == questions.len() {
            return false;
        }
        match self.write_questions(&remaining) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("failed to persist deletion of {id}: {e}");
                false
            }
        }
    }

    // -----------------------------------------------------------------------
    // Import / export
    // -----------------------------------------------------------------------

    /// All stored questions as a pretty-printed JSON array.
    pub fn export_questions(&self) -> String {
        let questions = self.all_questions();
        // A vec of plain data serializes infallibly.
        serde_json::to_string_pretty(&questions).unwrap_or_else(|_| "[]".to_string())
    }

    /// Replace the entire store with the payload, but only if it parses as
    /// an array of question records; otherwise the store is left untouched
    /// and the call reports failure.
    pub fn import_questions(&self, payload: &str) -> bool {
        let questions: Vec<AdminQuestion> = match serde_json::from_str(payload) {
            Ok(questions) => questions,
            Err(e) => {
                tracing::warn!("import payload rejected: {e}");
                return false;
            }
        };
        match self.write_questions(&questions) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("failed to persist imported questions: {e}");
                false
            }
        }
    }

    // -----------------------------------------------------------------------
    // JSON backend sync
    // -----------------------------------------------------------------------

    /// One-time seeding: populate the store from the loader's questions,
    /// but only when the store is currently empty. Returns the number of
    /// questions seeded (0 means the store was already populated).
    pub async fn initialize_from_backend(&self, loader: &QuizLoader) -> Result<usize, SyncError> {
        if !self.all_questions().is_empty() {
            tracing::debug!("override store already populated, skipping seed");
            return Ok(0);
        }
        self.replace_from_backend(loader).await
    }

    /// Unconditionally replace the entire store with the loader's current
    /// questions, discarding admin edits. An explicit, destructive operator
    /// action.
    pub async fn reload_from_backend(&self, loader: &QuizLoader) -> Result<usize, SyncError> {
        self.replace_from_backend(loader).await
    }

    async fn replace_from_backend(&self, loader: &QuizLoader) -> Result<usize, SyncError> {
        let source = loader.questions_with_styling().await?;
        let now = Utc::now();
        let questions: Vec<AdminQuestion> = source
            .iter()
            .map(|data| admin_question_from_data(data, now))
            .collect();
        self.write_questions(&questions)?;
        tracing::info!(count = questions.len(), "override store replaced from JSON backend");
        Ok(questions.len())
    }

    // -----------------------------------------------------------------------
    // Resolution helper
    // -----------------------------------------------------------------------

    /// Stored questions projected to the quiz-taking shape; empty when the
    /// store is empty (callers then defer to the configuration loader).
    pub fn quiz_questions(&self) -> Vec<Question> {
        self.all_questions().iter().map(quiz_question).collect()
    }

    fn write_questions(&self, questions: &[AdminQuestion]) -> Result<(), StoreError> {
        let json = serde_json::to_string(questions)?;
        self.kv.set(QUESTIONS_KEY, &json)
    }
}

#[async_trait]
impl QuestionSource for AdminStore {
    fn name(&self) -> &str {
        "override-store"
    }

    async fn questions(&self) -> Result<Vec<Question>, ConfigError> {
        Ok(self.quiz_questions())
    }
}

/// Total projection from the stored shape to the quiz-taking shape;
/// admin-only fields (type, timestamps, styling) do not survive it.
fn quiz_question(question: &AdminQuestion) -> Question {
    Question {
        id: question.id.clone(),
        text: question.text.clone(),
        topic: question.topic.clone(),
        answers: question
            .answers
            .iter()
            .map(|answer| Answer {
                id: answer.id.clone(),
                text: answer.text.clone(),
                weight: answer.weight,
                topic: answer.topic.clone(),
            })
            .collect(),
    }
}

fn admin_question_from_data(data: &QuestionData, now: DateTime<Utc>) -> AdminQuestion {
    AdminQuestion {
        id: data.id.clone(),
        text: data.text.clone(),
        topic: data.topic.clone(),
        question_type: data.question_type,
        answers: data
            .answers
            .iter()
            .map(|answer| AnswerForm {
                id: answer.id.clone(),
                text: answer.text.clone(),
                weight: answer.weight,
                topic: answer.topic.clone(),
                background_color: answer.background_color.clone(),
            })
            .collect(),
        created_at: now,
        updated_at: now,
    }
}
