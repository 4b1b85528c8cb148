//! The play state machine.
//!
//! Pure transitions, zero effects: the session feeds in random draws and
//! player responses and renders whatever state comes out.
//!
//! ```text
//! Selecting --(remaining empty)--> Won
//! Selecting --(draw one)---------> AwaitingAnswer
//! AwaitingAnswer --(match)-------> Selecting
//! AwaitingAnswer --(mismatch)----> Lost
//! ```

use rand::Rng;

use crate::model::Quiz;

/// Where a round currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayState {
    /// Ready to draw the next quiz.
    Selecting,
    /// Waiting for the player to answer this quiz.
    AwaitingAnswer(Quiz),
    /// Every quiz was answered correctly.
    Won,
    /// A wrong answer ended the round.
    Lost,
}

/// Outcome of answering the pending quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

/// One run of the `play` command.
#[derive(Debug, Clone)]
pub struct PlayRound {
    remaining: Vec<Quiz>,
    score: usize,
    state: PlayState,
}

impl PlayRound {
    /// Start a round over `quizzes`; order is irrelevant.
    pub fn new(quizzes: Vec<Quiz>) -> Self {
        Self {
            remaining: quizzes,
            score: 0,
            state: PlayState::Selecting,
        }
    }

    /// Draw the next quiz uniformly at random from the remaining set.
    ///
    /// Returns `None` when the round is over, moving to [`PlayState::Won`]
    /// if nothing is left to ask. Calling this while an answer is pending
    /// returns the pending quiz again.
    pub fn next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&Quiz> {
        if let PlayState::Selecting = self.state {
            if self.remaining.is_empty() {
                tracing::debug!(score = self.score, "play round won");
                self.state = PlayState::Won;
            } else {
                let index = rng.gen_range(0..self.remaining.len());
                let quiz = self.remaining.swap_remove(index);
                tracing::debug!(id = %quiz.id, left = self.remaining.len(), "quiz drawn");
                self.state = PlayState::AwaitingAnswer(quiz);
            }
        }
        match &self.state {
            PlayState::AwaitingAnswer(quiz) => Some(quiz),
            _ => None,
        }
    }

    /// Answer the pending quiz. Returns `None` if no quiz is pending.
    pub fn answer(&mut self, response: &str) -> Option<Verdict> {
        let PlayState::AwaitingAnswer(quiz) = &self.state else {
            return None;
        };
        if quiz.is_correct(response) {
            self.score += 1;
            self.state = PlayState::Selecting;
            Some(Verdict::Correct)
        } else {
            tracing::debug!(score = self.score, "play round lost");
            self.state = PlayState::Lost;
            Some(Verdict::Incorrect)
        }
    }

    pub fn state(&self) -> &PlayState {
        &self.state
    }

    /// Correct answers so far.
    pub fn score(&self) -> usize {
        self.score
    }

    /// Quizzes not yet drawn.
    pub fn remaining(&self) -> &[Quiz] {
        &self.remaining
    }

    pub fn is_over(&self) -> bool {
        matches!(self.state, PlayState::Won | PlayState::Lost)
    }
}
