//! Per-session response aggregation and score calculation.

use chrono::Utc;

use crate::model::{QuizResult, Response, TopicScore};

/// Collects one respondent's answers and computes weighted scores.
///
/// One session per respondent. The session owns the in-progress responses
/// exclusively and is reset (or discarded) between quiz attempts; it never
/// touches persisted configuration.
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    responses: Vec<Response>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a response. Re-answering a question replaces the previous
    /// response in place, so navigating back never duplicates weight and
    /// the ordering of the other responses is unaffected.
    pub fn add_response(&mut self, response: Response) {
        match self
            .responses
            .iter_mut()
            .find(|r| r.question_id == response.question_id)
        {
            Some(existing) => *existing = response,
            None => self.responses.push(response),
        }
    }

    /// Number of questions answered so far.
    pub fn response_count(&self) -> usize {
        self.responses.len()
    }

    pub fn has_answered(&self, question_id: &str) -> bool {
        self.responses.iter().any(|r| r.question_id == question_id)
    }

    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    /// Compute per-topic and overall scores from whatever responses exist
    /// at call time; whether the quiz counts as "finished" is the caller's
    /// decision. The returned result is an owned snapshot — mutating the
    /// session afterwards does not alter it.
    pub fn calculate_results(&self) -> QuizResult {
        let topic_scores = self.topic_scores();
        let total_score = self.responses.iter().map(|r| r.weight).sum();

        QuizResult {
            responses: self.responses.clone(),
            topic_scores,
            total_score,
            completed_at: Utc::now(),
        }
    }

    /// Discard all responses, returning the session to its empty state.
    pub fn reset(&mut self) {
        self.responses.clear();
    }

    fn topic_scores(&self) -> Vec<TopicScore> {
        // Topics appear in first-seen order so repeated runs over the same
        // responses produce identical output.
        let mut scores: Vec<TopicScore> = Vec::new();
        for response in &self.responses {
            match scores.iter_mut().find(|s| s.topic == response.topic) {
                Some(score) => {
                    score.total_weight += response.weight;
                    score.count += 1;
                }
                None => scores.push(TopicScore {
                    topic: response.topic.clone(),
                    total_weight: response.weight,
                    count: 1,
                    average_weight: 0.0,
                }),
            }
        }
        for score in &mut scores {
            score.average_weight =
                round2(f64::from(score.total_weight) / f64::from(score.count));
        }
        scores
    }
}

/// Round to two decimal places, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
