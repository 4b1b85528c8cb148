//! Core data model types for corequiz.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::QuizError;

/// Stable identifier of a quiz inside one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuizId(pub u64);

impl fmt::Display for QuizId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for QuizId {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(QuizId)
            .map_err(|_| QuizError::InvalidId(s.to_string()))
    }
}

/// One question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quiz {
    /// Assigned by the store.
    pub id: QuizId,
    /// The question text shown to the player.
    pub question: String,
    /// The expected answer.
    pub answer: String,
}

impl Quiz {
    /// Whether `response` matches the stored answer.
    pub fn is_correct(&self, response: &str) -> bool {
        answers_match(response, &self.answer)
    }
}

/// Compare two answers ignoring case and surrounding whitespace.
pub fn answers_match(response: &str, expected: &str) -> bool {
    normalize(response) == normalize(expected)
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// A question/answer pair before it has been given an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSeed {
    pub question: String,
    pub answer: String,
}

impl QuizSeed {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// The built-in sample quizzes loaded at startup.
pub fn sample_quizzes() -> Vec<QuizSeed> {
    vec![
        QuizSeed::new("Capital of Italy", "Rome"),
        QuizSeed::new("Capital of France", "Paris"),
        QuizSeed::new("Capital of Spain", "Madrid"),
        QuizSeed::new("Capital of Portugal", "Lisbon"),
    ]
}
