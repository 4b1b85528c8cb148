//! The terminal collaborator the session talks to.
//!
//! Implemented by the rustyline terminal in `corequiz-cli` and by
//! [`ScriptedTerminal`](crate::scripted::ScriptedTerminal) in tests.

use async_trait::async_trait;

/// Color hint attached to a piece of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Red,
    Green,
    Blue,
    Magenta,
}

/// Line-oriented terminal used by the session controller.
///
/// Exactly one `ask` is outstanding at a time; the session awaits each
/// answer before producing more output or asking again.
#[async_trait(?Send)]
pub trait Terminal {
    /// Prompt for one line of input, pre-filling the edit buffer with
    /// `initial`. Returns `None` once the input is closed.
    async fn ask(&mut self, prompt: &str, initial: &str) -> anyhow::Result<Option<String>>;

    /// Write one line of output.
    fn say(&mut self, line: &str, tone: Option<Tone>);

    /// Report an error to the user.
    fn error(&mut self, message: &str) {
        let line = format!("{}: {}", self.paint("Error", Tone::Red), message);
        self.say(&line, None);
    }

    /// Render `value` in large letters.
    fn banner(&mut self, value: &str, tone: Option<Tone>);

    /// Color a fragment for inline use. Plain by default.
    fn paint(&self, text: &str, _tone: Tone) -> String {
        text.to_string()
    }
}
