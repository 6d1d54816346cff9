//! Compiled-in fallback question set and profile.
//!
//! Last resort of the resolution chain: when neither the override store nor
//! the JSON configuration yields questions, the quiz still runs on these.

use crate::model::{Answer, ProfileConfig, Question, ResolvedProfile};

fn answer(id: &str, text: &str, weight: u32, topic: &str) -> Answer {
    Answer {
        id: id.into(),
        text: text.into(),
        weight,
        topic: topic.into(),
    }
}

fn question(id: &str, text: &str, topic: &str, answers: Vec<Answer>) -> Question {
    Question {
        id: id.into(),
        text: text.into(),
        topic: topic.into(),
        answers,
    }
}

/// The built-in work-style question set.
pub fn default_questions() -> Vec<Question> {
    vec![
        question(
            "q1",
            "How do you prefer to communicate with your team?",
            "Communication",
            vec![
                answer("q1a1", "Face-to-face meetings", 4, "Communication"),
                answer("q1a2", "Video calls", 3, "Communication"),
                answer("q1a3", "Instant messaging", 2, "Communication"),
                answer("q1a4", "Email", 1, "Communication"),
            ],
        ),
        question(
            "q2",
            "What motivates you most at work?",
            "Motivation",
            vec![
                answer("q2a1", "Recognition and praise", 4, "Motivation"),
                answer("q2a2", "Financial rewards", 3, "Motivation"),
                answer("q2a3", "Learning new skills", 5, "Motivation"),
                answer("q2a4", "Work-life balance", 2, "Motivation"),
                answer("q2a5", "Career advancement", 4, "Motivation"),
            ],
        ),
        question(
            "q3",
            "How do you handle stressful situations?",
            "Stress Management",
            vec![
                answer("q3a1", "Take a break and recharge", 3, "Stress Management"),
                answer("q3a2", "Work through it immediately", 5, "Stress Management"),
                answer("q3a3", "Ask for help from colleagues", 4, "Stress Management"),
                answer("q3a4", "Plan and prioritize tasks", 4, "Stress Management"),
            ],
        ),
        question(
            "q4",
            "What type of work environment do you thrive in?",
            "Work Environment",
            vec![
                answer("q4a1", "Quiet and focused", 3, "Work Environment"),
                answer("q4a2", "Collaborative and social", 4, "Work Environment"),
                answer("q4a3", "Fast-paced and dynamic", 5, "Work Environment"),
                answer("q4a4", "Structured and organized", 2, "Work Environment"),
            ],
        ),
        question(
            "q5",
            "How do you approach problem-solving?",
            "Problem Solving",
            vec![
                answer("q5a1", "Analyze data and research", 4, "Problem Solving"),
                answer("q5a2", "Brainstorm with others", 3, "Problem Solving"),
                answer("q5a3", "Try different solutions quickly", 5, "Problem Solving"),
                answer("q5a4", "Follow established procedures", 2, "Problem Solving"),
            ],
        ),
    ]
}

/// Profile served when the configuration names no matching profile and no
/// `balanced_professional` entry exists to fall back on.
pub fn default_profile() -> ResolvedProfile {
    ResolvedProfile {
        key: "balanced_professional".into(),
        profile: ProfileConfig {
            name: "Balanced Professional".into(),
            description: "You adapt your working style to the situation, balancing \
                          collaboration, focus, and initiative."
                .into(),
            score_range: [0, 100],
            characteristics: vec![
                "Adaptable across teams and tasks".into(),
                "Comfortable with both independent and group work".into(),
                "Steady under changing priorities".into(),
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_is_non_empty_with_valid_questions() {
        let questions = default_questions();
        assert_eq!(questions.len(), 5);
        for question in &questions {
            assert!(question.answers.len() >= 2);
            assert!(!question.topic.is_empty());
            for answer in &question.answers {
                assert!(answer.weight >= 1);
                assert_eq!(answer.topic, question.topic);
            }
        }
    }

    #[test]
    fn default_question_ids_are_unique() {
        let questions = default_questions();
        let mut ids: Vec<&str> = questions.iter().map(|q| q.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), questions.len());
    }
}
