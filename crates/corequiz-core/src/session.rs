//! The session controller.
//!
//! A [`Session`] owns the quiz store, the random source used by `play`
//! and the prompt text. It reads one command per line from a [`Terminal`],
//! dispatches it through the command table and keeps going until `quit`
//! or the end of input.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::command::{parse_line, Command, Input, HELP};
use crate::error::QuizError;
use crate::model::QuizId;
use crate::play::{PlayRound, PlayState, Verdict};
use crate::store::QuizStore;
use crate::traits::{Terminal, Tone};

/// Default main prompt.
pub const DEFAULT_PROMPT: &str = "quiz > ";

/// Printed by `credits`.
pub const AUTHORS: &[&str] = &["Victor De Pablo Gozalo", "Mario Esperalta Delgado"];

/// Whether the read loop should keep going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One interactive session.
pub struct Session {
    store: QuizStore,
    rng: StdRng,
    prompt: String,
}

impl Session {
    /// Create a session over `store` with an entropy-seeded random source.
    pub fn new(store: QuizStore) -> Self {
        Self {
            store,
            rng: StdRng::from_entropy(),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    /// Use a fixed seed so `play` draws quizzes in a reproducible order.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Set the main prompt text.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn store(&self) -> &QuizStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut QuizStore {
        &mut self.store
    }

    /// Run the read loop until `quit` or the end of input.
    ///
    /// Only a failure of the main prompt itself ends the loop with an error.
    pub async fn run(&mut self, term: &mut dyn Terminal) -> Result<()> {
        loop {
            let prompt = term.paint(&self.prompt, Tone::Blue);
            let Some(line) = term.ask(&prompt, "").await? else {
                self.close(term);
                return Ok(());
            };
            if self.execute(&line, term).await == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Interpret one input line. Errors are reported on the terminal.
    pub async fn execute(&mut self, line: &str, term: &mut dyn Terminal) -> Flow {
        let result = match parse_line(line) {
            Input::Empty => Ok(Flow::Continue),
            Input::Unknown(token) => {
                let line = format!("Unknown command: '{}'", term.paint(token, Tone::Red));
                term.say(&line, None);
                let hint = format!(
                    "Use '{}' to see all available commands.",
                    term.paint("help", Tone::Green)
                );
                term.say(&hint, None);
                Ok(Flow::Continue)
            }
            Input::Command { command, arg } => self.dispatch(command, arg, term).await,
        };

        match result {
            Ok(flow) => flow,
            Err(err) => {
                if let Some(quiz_err) = err.downcast_ref::<QuizError>() {
                    tracing::debug!(error = %quiz_err, "command rejected");
                    term.error(&quiz_err.to_string());
                } else {
                    tracing::error!(error = %err, "command failed");
                    term.error(&format!("{err:#}"));
                }
                Flow::Continue
            }
        }
    }

    async fn dispatch(
        &mut self,
        command: Command,
        arg: Option<&str>,
        term: &mut dyn Terminal,
    ) -> Result<Flow> {
        tracing::debug!(%command, ?arg, "dispatch");
        match command {
            Command::Help => self.help(term),
            Command::List => self.list(term),
            Command::Show => self.show(required_id(command, arg)?, term),
            Command::Add => self.add(term).await,
            Command::Delete => self.delete(required_id(command, arg)?, term),
            Command::Edit => self.edit(required_id(command, arg)?, term).await,
            Command::Test => self.test(required_id(command, arg)?, term).await,
            Command::Play => self.play(term).await,
            Command::Credits => self.credits(term),
            Command::Quit => Ok(self.close(term)),
        }
    }

    fn help(&self, term: &mut dyn Terminal) -> Result<Flow> {
        term.say("Commands:", None);
        for line in HELP {
            term.say(line, None);
        }
        Ok(Flow::Continue)
    }

    fn list(&self, term: &mut dyn Terminal) -> Result<Flow> {
        for quiz in self.store.iter() {
            let line = format!(
                "[{}]: {}",
                term.paint(&quiz.id.to_string(), Tone::Magenta),
                quiz.question
            );
            term.say(&line, None);
        }
        Ok(Flow::Continue)
    }

    fn show(&self, id: QuizId, term: &mut dyn Terminal) -> Result<Flow> {
        let quiz = self.store.get(id)?;
        let line = format!(
            "[{}]: {} {} {}",
            term.paint(&id.to_string(), Tone::Magenta),
            quiz.question,
            term.paint("=>", Tone::Magenta),
            quiz.answer
        );
        term.say(&line, None);
        Ok(Flow::Continue)
    }

    async fn add(&mut self, term: &mut dyn Terminal) -> Result<Flow> {
        let prompt = term.paint("Enter a question: ", Tone::Red);
        let Some(question) = term.ask(&prompt, "").await? else {
            return Ok(self.close(term));
        };
        let prompt = term.paint("Enter the answer: ", Tone::Red);
        let Some(answer) = term.ask(&prompt, "").await? else {
            return Ok(self.close(term));
        };

        let id = self.store.add(question, answer)?;
        let quiz = self.store.get(id)?;
        let line = format!(
            "{}: {} {} {}",
            term.paint("Added", Tone::Magenta),
            quiz.question,
            term.paint("=>", Tone::Magenta),
            quiz.answer
        );
        term.say(&line, None);
        Ok(Flow::Continue)
    }

    fn delete(&mut self, id: QuizId, term: &mut dyn Terminal) -> Result<Flow> {
        let quiz = self.store.delete(id)?;
        let line = format!(
            "Deleted quiz {}: {}",
            term.paint(&id.to_string(), Tone::Magenta),
            quiz.question
        );
        term.say(&line, None);
        Ok(Flow::Continue)
    }

    async fn edit(&mut self, id: QuizId, term: &mut dyn Terminal) -> Result<Flow> {
        let current = self.store.get(id)?.clone();

        let prompt = term.paint("Enter a question: ", Tone::Red);
        let Some(question) = term.ask(&prompt, &current.question).await? else {
            return Ok(self.close(term));
        };
        let prompt = term.paint("Enter the answer: ", Tone::Red);
        let Some(answer) = term.ask(&prompt, &current.answer).await? else {
            return Ok(self.close(term));
        };

        self.store.update(id, question, answer)?;
        let quiz = self.store.get(id)?;
        let line = format!(
            "Quiz {} changed to: {} {} {}",
            term.paint(&id.to_string(), Tone::Magenta),
            quiz.question,
            term.paint("=>", Tone::Magenta),
            quiz.answer
        );
        term.say(&line, None);
        Ok(Flow::Continue)
    }

    async fn test(&mut self, id: QuizId, term: &mut dyn Terminal) -> Result<Flow> {
        let quiz = self.store.get(id)?.clone();

        let prompt = term.paint(&question_prompt(&quiz.question), Tone::Red);
        let Some(response) = term.ask(&prompt, "").await? else {
            return Ok(self.close(term));
        };

        if quiz.is_correct(&response) {
            term.say("Your answer is CORRECT", Some(Tone::Green));
        } else {
            term.say("Your answer is INCORRECT", Some(Tone::Red));
        }
        Ok(Flow::Continue)
    }

    async fn play(&mut self, term: &mut dyn Terminal) -> Result<Flow> {
        let mut round = PlayRound::new(self.store.all());

        loop {
            let Some(quiz) = round.next(&mut self.rng) else {
                break;
            };
            let prompt = term.paint(&question_prompt(&quiz.question), Tone::Red);
            let Some(response) = term.ask(&prompt, "").await? else {
                return Ok(self.close(term));
            };
            match round.answer(&response) {
                Some(Verdict::Correct) => {
                    let line = format!("Correct - {} right so far", round.score());
                    term.say(&line, Some(Tone::Green));
                }
                Some(Verdict::Incorrect) | None => break,
            }
        }

        match round.state() {
            PlayState::Won => term.say("Nothing left to ask.", None),
            _ => term.say("INCORRECT", Some(Tone::Red)),
        }
        term.say(&format!("Game over. Score: {}", round.score()), None);
        term.banner(&round.score().to_string(), Some(Tone::Magenta));
        Ok(Flow::Continue)
    }

    fn credits(&self, term: &mut dyn Terminal) -> Result<Flow> {
        term.say("Authors:", None);
        for author in AUTHORS {
            term.say(author, Some(Tone::Green));
        }
        Ok(Flow::Continue)
    }

    fn close(&self, term: &mut dyn Terminal) -> Flow {
        term.say("Bye!", None);
        Flow::Quit
    }
}

/// Resolve the id argument of an id-requiring command.
fn required_id(command: Command, arg: Option<&str>) -> Result<QuizId, QuizError> {
    arg.ok_or(QuizError::MissingArgument {
        command: command.name(),
    })?
    .parse()
}

/// Render a question as a prompt, adding a question mark when missing.
fn question_prompt(question: &str) -> String {
    if question.ends_with('?') {
        format!("{question} ")
    } else {
        format!("{question}? ")
    }
}
