//! Core data model types for quizmith.
//!
//! Two families of types live here: the configuration document schema
//! (`QuizData` and friends, camelCase on the wire to match the hosted JSON
//! document) and the quiz-taking shapes (`Question`, `Response`,
//! `QuizResult`) that the session and scoring code operate on.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The complete quiz configuration document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizData {
    /// Title, description, and versioning for the quiz.
    pub quiz_metadata: QuizMetadata,
    /// All authored questions, in document order.
    pub questions: Vec<QuestionData>,
    /// Scoring parameters.
    pub scoring: ScoringConfig,
    /// Result profiles keyed by profile id, in declared order.
    pub results: ResultsConfig,
}

/// Quiz-level metadata. Timestamps are kept as opaque strings; the document
/// is externally authored and this crate never interprets them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizMetadata {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// A question as authored in the configuration document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionData {
    /// Globally unique question identifier.
    pub id: String,
    /// The question shown to the respondent.
    pub text: String,
    /// Scoring dimension this question contributes to.
    pub topic: String,
    /// How the question is presented.
    #[serde(rename = "type", default)]
    pub question_type: QuestionType,
    #[serde(default)]
    pub required: bool,
    /// Display position; ascending, need not be contiguous.
    pub order: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<QuestionMeta>,
    /// The selectable answers, in display order.
    pub answers: Vec<AnswerData>,
}

/// Authoring metadata attached to a question.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionMeta {
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub difficulty: Difficulty,
}

/// Authoring difficulty rating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// How a question is presented to the respondent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    #[default]
    Single,
    Multiple,
    Rating,
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionType::Single => write!(f, "single"),
            QuestionType::Multiple => write!(f, "multiple"),
            QuestionType::Rating => write!(f, "rating"),
        }
    }
}

impl FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" => Ok(QuestionType::Single),
            "multiple" => Ok(QuestionType::Multiple),
            "rating" => Ok(QuestionType::Rating),
            other => Err(format!("unknown question type: {other}")),
        }
    }
}

/// An answer as authored in the configuration document, including styling
/// the quiz-taking flow never sees.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerData {
    /// Unique within the owning question.
    pub id: String,
    pub text: String,
    /// Scoring value; positive integer, validated at load time.
    pub weight: u32,
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Scoring parameters for the quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringConfig {
    #[serde(default)]
    pub algorithm: String,
    #[serde(default)]
    pub max_score: u32,
    /// Per-topic weighting, keyed by topic name.
    #[serde(default)]
    pub categories: IndexMap<String, CategoryConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub weight: f64,
    #[serde(default)]
    pub description: String,
}

/// Result profiles, keyed by profile id. Declaration order matters: profile
/// resolution takes the first range that contains the score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsConfig {
    pub profiles: IndexMap<String, ProfileConfig>,
}

/// A named result category resolved from a total-score range.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Inclusive `[min, max]` total-score range.
    pub score_range: [u32; 2],
    #[serde(default)]
    pub characteristics: Vec<String>,
}

/// A resolved profile together with the key it was declared under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedProfile {
    pub key: String,
    #[serde(flatten)]
    pub profile: ProfileConfig,
}

// ---------------------------------------------------------------------------
// Quiz-taking shapes
// ---------------------------------------------------------------------------

/// A question as the quiz-taking flow sees it. Admin-only fields (type,
/// timestamps, styling) are deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub topic: String,
    pub answers: Vec<Answer>,
}

/// An answer as the quiz-taking flow sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub id: String,
    pub text: String,
    pub weight: u32,
    pub topic: String,
}

impl From<&QuestionData> for Question {
    fn from(data: &QuestionData) -> Self {
        Question {
            id: data.id.clone(),
            text: data.text.clone(),
            topic: data.topic.clone(),
            answers: data.answers.iter().map(Answer::from).collect(),
        }
    }
}

impl From<&AnswerData> for Answer {
    fn from(data: &AnswerData) -> Self {
        Answer {
            id: data.id.clone(),
            text: data.text.clone(),
            weight: data.weight,
            topic: data.topic.clone(),
        }
    }
}

/// A respondent's choice for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub question_id: String,
    pub answer_id: String,
    pub weight: u32,
    pub topic: String,
}

/// Aggregated score for one topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicScore {
    pub topic: String,
    pub total_weight: u32,
    pub count: u32,
    /// `total_weight / count`, rounded to two decimal places.
    pub average_weight: f64,
}

/// The outcome of a completed quiz. Immutable snapshot: the session that
/// produced it can be mutated or reset without affecting the result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub responses: Vec<Response>,
    pub topic_scores: Vec<TopicScore>,
    pub total_score: u32,
    pub completed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_type_display_and_parse() {
        assert_eq!(QuestionType::Single.to_string(), "single");
        assert_eq!(QuestionType::Rating.to_string(), "rating");
        assert_eq!("single".parse::<QuestionType>().unwrap(), QuestionType::Single);
        assert_eq!(
            "Multiple".parse::<QuestionType>().unwrap(),
            QuestionType::Multiple
        );
        assert!("ranked".parse::<QuestionType>().is_err());
    }

    #[test]
    fn quiz_data_parses_camel_case_document() {
        let doc = r##"{
            "quizMetadata": {
                "title": "Work Style Quiz",
                "description": "Find your work style",
                "version": "1.2.0",
                "createdAt": "2024-01-01",
                "updatedAt": "2024-06-01"
            },
            "questions": [
                {
                    "id": "q1",
                    "text": "How do you prefer to communicate?",
                    "topic": "Communication",
                    "type": "single",
                    "required": true,
                    "order": 2,
                    "answers": [
                        {
                            "id": "q1a1",
                            "text": "Face-to-face",
                            "weight": 4,
                            "topic": "Communication",
                            "backgroundColor": "#e8f4e8"
                        }
                    ]
                }
            ],
            "scoring": {
                "algorithm": "weighted_sum",
                "maxScore": 25,
                "categories": {
                    "Communication": { "weight": 1.0, "description": "How you talk" }
                }
            },
            "results": {
                "profiles": {
                    "dynamic_leader": {
                        "name": "Dynamic Leader",
                        "description": "Leads from the front",
                        "scoreRange": [18, 25],
                        "characteristics": ["decisive"]
                    }
                }
            }
        }"##;

        let data: QuizData = serde_json::from_str(doc).unwrap();
        assert_eq!(data.quiz_metadata.title, "Work Style Quiz");
        assert_eq!(data.questions[0].question_type, QuestionType::Single);
        assert_eq!(data.questions[0].order, 2);
        assert_eq!(
            data.questions[0].answers[0].background_color.as_deref(),
            Some("#e8f4e8")
        );
        assert_eq!(data.scoring.max_score, 25);
        let profile = &data.results.profiles["dynamic_leader"];
        assert_eq!(profile.score_range, [18, 25]);
    }

    #[test]
    fn question_projection_drops_admin_fields() {
        let data = QuestionData {
            id: "q1".into(),
            text: "Pick one".into(),
            topic: "Motivation".into(),
            question_type: QuestionType::Rating,
            required: false,
            order: 1,
            metadata: None,
            answers: vec![AnswerData {
                id: "a1".into(),
                text: "Yes".into(),
                weight: 3,
                topic: "Motivation".into(),
                background_color: Some("#fff".into()),
                text_color: None,
                answer_type: None,
                description: Some("styled".into()),
            }],
        };

        let question = Question::from(&data);
        assert_eq!(question.id, "q1");
        assert_eq!(question.answers.len(), 1);
        assert_eq!(question.answers[0].weight, 3);
        // The quiz-taking shape serializes without any styling fields.
        let json = serde_json::to_value(&question).unwrap();
        assert!(json["answers"][0].get("backgroundColor").is_none());
    }

    #[test]
    fn response_serde_round_trip() {
        let response = Response {
            question_id: "q1".into(),
            answer_id: "q1a2".into(),
            weight: 3,
            topic: "Communication".into(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"questionId\""));
        let back: Response = serde_json::from_str(&json).unwrap();
        assert_eq!(back, response);
    }
}
