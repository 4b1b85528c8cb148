//! In-memory quiz store.
//!
//! Quizzes are keyed by a [`QuizId`] drawn from a monotonically increasing
//! counter, so ids are never reused within a store and key order equals
//! insertion order.

use std::collections::BTreeMap;

use crate::error::QuizError;
use crate::model::{Quiz, QuizId, QuizSeed};

/// Ordered collection of quizzes for one session.
#[derive(Debug, Clone, Default)]
pub struct QuizStore {
    quizzes: BTreeMap<QuizId, Quiz>,
    next_id: u64,
}

impl QuizStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with `seeds`, in order.
    pub fn with_seeds<I>(seeds: I) -> Result<Self, QuizError>
    where
        I: IntoIterator<Item = QuizSeed>,
    {
        let mut store = Self::new();
        for seed in seeds {
            store.add(seed.question, seed.answer)?;
        }
        Ok(store)
    }

    /// Append a new quiz and return its id.
    pub fn add(
        &mut self,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Result<QuizId, QuizError> {
        let (question, answer) = validated(question.into(), answer.into())?;
        let id = QuizId(self.next_id);
        self.next_id += 1;
        self.quizzes.insert(
            id,
            Quiz {
                id,
                question,
                answer,
            },
        );
        tracing::debug!(%id, "quiz added");
        Ok(id)
    }

    /// Look up a quiz by id.
    pub fn get(&self, id: QuizId) -> Result<&Quiz, QuizError> {
        self.quizzes.get(&id).ok_or(QuizError::NotFound(id))
    }

    /// Replace the question and answer of an existing quiz.
    pub fn update(
        &mut self,
        id: QuizId,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Result<(), QuizError> {
        let quiz = self.quizzes.get_mut(&id).ok_or(QuizError::NotFound(id))?;
        let (question, answer) = validated(question.into(), answer.into())?;
        quiz.question = question;
        quiz.answer = answer;
        tracing::debug!(%id, "quiz updated");
        Ok(())
    }

    /// Remove a quiz, returning it.
    pub fn delete(&mut self, id: QuizId) -> Result<Quiz, QuizError> {
        let quiz = self.quizzes.remove(&id).ok_or(QuizError::NotFound(id))?;
        tracing::debug!(%id, "quiz deleted");
        Ok(quiz)
    }

    /// Snapshot of every live quiz in insertion order.
    pub fn all(&self) -> Vec<Quiz> {
        self.quizzes.values().cloned().collect()
    }

    /// Iterate over live quizzes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Quiz> {
        self.quizzes.values()
    }

    pub fn count(&self) -> usize {
        self.quizzes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }
}

fn validated(question: String, answer: String) -> Result<(String, String), QuizError> {
    let question = question.trim();
    let answer = answer.trim();
    if question.is_empty() {
        return Err(QuizError::EmptyField("question"));
    }
    if answer.is_empty() {
        return Err(QuizError::EmptyField("answer"));
    }
    Ok((question.to_string(), answer.to_string()))
}
