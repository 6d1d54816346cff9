//! Ordered fallback policy for selecting the active question source.

use crate::defaults;
use crate::model::Question;
use crate::traits::QuestionSource;

/// Walks its sources in order and serves the first non-empty question set.
///
/// Holds no state of its own. The chain never fails and never returns an
/// empty list: when every source is empty or unavailable it serves the
/// compiled-in default set, so the quiz-taking flow is never blocked.
pub struct SourceChain {
    sources: Vec<Box<dyn QuestionSource>>,
}

impl SourceChain {
    pub fn new(sources: Vec<Box<dyn QuestionSource>>) -> Self {
        Self { sources }
    }

    /// The question list the quiz should currently present.
    pub async fn active_questions(&self) -> Vec<Question> {
        for source in &self.sources {
            match source.questions().await {
                Ok(questions) if !questions.is_empty() => {
                    tracing::debug!(
                        source = source.name(),
                        count = questions.len(),
                        "question source selected"
                    );
                    return questions;
                }
                Ok(_) => {
                    tracing::debug!(source = source.name(), "source empty, falling through");
                }
                Err(e) => {
                    tracing::warn!(source = source.name(), "source unavailable: {e}");
                }
            }
        }

        tracing::warn!("no question source available, serving built-in defaults");
        defaults::default_questions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use async_trait::async_trait;

    struct FixedSource(Vec<Question>);

    #[async_trait]
    impl QuestionSource for FixedSource {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn questions(&self) -> Result<Vec<Question>, ConfigError> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl QuestionSource for FailingSource {
        fn name(&self) -> &str {
            "failing"
        }

        async fn questions(&self) -> Result<Vec<Question>, ConfigError> {
            Err(ConfigError::Unavailable("boom".into()))
        }
    }

    fn one_question(id: &str) -> Vec<Question> {
        vec![Question {
            id: id.into(),
            text: "text".into(),
            topic: "Topic".into(),
            answers: vec![],
        }]
    }

    #[tokio::test]
    async fn first_non_empty_source_wins() {
        let chain = SourceChain::new(vec![
            Box::new(FixedSource(vec![])),
            Box::new(FixedSource(one_question("from-second"))),
            Box::new(FixedSource(one_question("from-third"))),
        ]);

        let questions = chain.active_questions().await;
        assert_eq!(questions[0].id, "from-second");
    }

    #[tokio::test]
    async fn errors_fall_through_to_later_sources() {
        let chain = SourceChain::new(vec![
            Box::new(FailingSource),
            Box::new(FixedSource(one_question("survivor"))),
        ]);

        let questions = chain.active_questions().await;
        assert_eq!(questions[0].id, "survivor");
    }

    #[tokio::test]
    async fn exhausted_chain_serves_builtin_defaults() {
        let chain = SourceChain::new(vec![
            Box::new(FixedSource(vec![])),
            Box::new(FailingSource),
        ]);

        let questions = chain.active_questions().await;
        assert!(!questions.is_empty());
        assert_eq!(questions.len(), defaults::default_questions().len());
    }

    #[tokio::test]
    async fn empty_chain_still_serves_questions() {
        let chain = SourceChain::new(vec![]);
        assert!(!chain.active_questions().await.is_empty());
    }
}
