//! Quiz error types.
//!
//! Every failure a command can recover from at the prompt boundary is a
//! [`QuizError`]. The session controller downcasts to this type to tell a
//! user mistake apart from a broken terminal without string matching.

use thiserror::Error;

use crate::model::QuizId;

/// Errors raised by the quiz store and the command handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// An id-requiring command was invoked without an id.
    #[error("missing id parameter for '{command}'")]
    MissingArgument { command: &'static str },

    /// The supplied id does not resolve to a live quiz.
    #[error("no quiz with id {0}")]
    NotFound(QuizId),

    /// The supplied id token is not a number.
    #[error("invalid id '{0}', expected a number")]
    InvalidId(String),

    /// A question or answer was empty after trimming.
    #[error("the {0} must not be empty")]
    EmptyField(&'static str),
}

impl QuizError {
    /// Returns `true` if the error came from a malformed or missing argument
    /// rather than from the state of the store.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            QuizError::MissingArgument { .. } | QuizError::InvalidId(_)
        )
    }
}
