//! Scripted terminal for testing.

use std::collections::VecDeque;

use async_trait::async_trait;

use crate::traits::{Terminal, Tone};

/// Something that happened on a [`ScriptedTerminal`], in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A prompt was issued with the given pre-filled text.
    Asked { prompt: String, initial: String },
    /// A scripted answer was handed back.
    Answered(String),
    /// A line of output.
    Said(String),
    /// A banner rendering.
    Banner(String),
}

/// A terminal that replays canned answers and records everything else.
///
/// When the script runs out, `ask` reports the input as closed.
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    answers: VecDeque<String>,
    events: Vec<Event>,
}

impl ScriptedTerminal {
    /// Create a terminal that will answer prompts with `answers`, in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            events: Vec::new(),
        }
    }

    /// Every event in the order it happened.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// All output lines, without prompts or banners.
    pub fn lines(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Said(line) => Some(line.as_str()),
                _ => None,
            })
            .collect()
    }

    /// All output joined with newlines, for substring assertions.
    pub fn output(&self) -> String {
        self.lines().join("\n")
    }

    /// The prompts issued, with their pre-filled text.
    pub fn prompts(&self) -> Vec<(&str, &str)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Asked { prompt, initial } => Some((prompt.as_str(), initial.as_str())),
                _ => None,
            })
            .collect()
    }

    /// Banner values rendered so far.
    pub fn banners(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Banner(value) => Some(value.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    /// Forget recorded events, keeping unconsumed answers.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[async_trait(?Send)]
impl Terminal for ScriptedTerminal {
    async fn ask(&mut self, prompt: &str, initial: &str) -> anyhow::Result<Option<String>> {
        self.events.push(Event::Asked {
            prompt: prompt.to_string(),
            initial: initial.to_string(),
        });
        let answer = self.answers.pop_front();
        if let Some(answer) = &answer {
            self.events.push(Event::Answered(answer.clone()));
        }
        Ok(answer)
    }

    fn say(&mut self, line: &str, _tone: Option<Tone>) {
        self.events.push(Event::Said(line.to_string()));
    }

    fn banner(&mut self, value: &str, _tone: Option<Tone>) {
        self.events.push(Event::Banner(value.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replays_answers_then_closes() {
        let mut term = ScriptedTerminal::new(["one", "two"]);

        assert_eq!(term.ask("> ", "").await.unwrap().as_deref(), Some("one"));
        assert_eq!(term.ask("> ", "x").await.unwrap().as_deref(), Some("two"));
        assert_eq!(term.ask("> ", "").await.unwrap(), None);
        assert_eq!(term.prompts(), vec![("> ", ""), ("> ", "x"), ("> ", "")]);
        assert_eq!(term.remaining(), 0);
    }

    #[test]
    fn error_goes_through_say() {
        let mut term = ScriptedTerminal::default();
        term.error("boom");
        term.banner("3", None);
        assert_eq!(term.lines(), vec!["Error: boom"]);
        assert_eq!(term.banners(), vec!["3"]);
    }
}
