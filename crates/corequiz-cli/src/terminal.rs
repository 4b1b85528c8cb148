//! Console terminal backed by rustyline.
//!
//! The line editor is owned by a dedicated input thread. Each prompt is a
//! request sent over a channel; the session awaits the reply, so exactly
//! one prompt is outstanding at any time and output stays in order.

use anyhow::{anyhow, Context as _, Result};
use async_trait::async_trait;
use colored::Colorize;
use rustyline::completion::Completer;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, Context, Editor, Helper};
use tokio::sync::{mpsc, oneshot};

use corequiz_core::command::completions;
use corequiz_core::traits::{Terminal, Tone};

use crate::banner;

/// Tab completion over the command table.
struct CommandHelper;

impl Completer for CommandHelper {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        let head = &line[..pos];
        // Only the command token is completed.
        if head.contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }
        let candidates = completions(&head.to_lowercase())
            .into_iter()
            .map(String::from)
            .collect();
        Ok((0, candidates))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {}

impl Validator for CommandHelper {}

impl Helper for CommandHelper {}

struct PromptRequest {
    prompt: String,
    initial: String,
    reply: oneshot::Sender<rustyline::Result<String>>,
}

/// The interactive terminal used by the `corequiz` binary.
pub struct ConsoleTerminal {
    requests: mpsc::Sender<PromptRequest>,
}

impl ConsoleTerminal {
    /// Start the input thread and its line editor.
    pub fn spawn() -> Result<Self> {
        let (requests, mut incoming) = mpsc::channel::<PromptRequest>(1);
        let (ready_tx, ready_rx) = std::sync::mpsc::sync_channel(1);

        std::thread::Builder::new()
            .name("corequiz-input".into())
            .spawn(move || {
                let mut editor = match new_editor() {
                    Ok(editor) => {
                        let _ = ready_tx.send(Ok(()));
                        editor
                    }
                    Err(err) => {
                        let _ = ready_tx.send(Err(err));
                        return;
                    }
                };
                while let Some(request) = incoming.blocking_recv() {
                    let line =
                        editor.readline_with_initial(&request.prompt, (&request.initial, ""));
                    let _ = request.reply.send(line);
                }
                tracing::debug!("input thread finished");
            })
            .context("failed to start the input thread")?;

        ready_rx
            .recv()
            .context("input thread exited during startup")?
            .context("failed to initialise the line editor")?;

        Ok(Self { requests })
    }
}

fn new_editor() -> rustyline::Result<Editor<CommandHelper, DefaultHistory>> {
    let config = Config::builder()
        .auto_add_history(true)
        .completion_type(CompletionType::List)
        .build();
    let mut editor = Editor::with_config(config)?;
    editor.set_helper(Some(CommandHelper));
    Ok(editor)
}

fn colorize(text: &str, tone: Tone) -> String {
    let painted = match tone {
        Tone::Red => text.red(),
        Tone::Green => text.green(),
        Tone::Blue => text.blue(),
        Tone::Magenta => text.magenta(),
    };
    painted.bold().to_string()
}

#[async_trait(?Send)]
impl Terminal for ConsoleTerminal {
    async fn ask(&mut self, prompt: &str, initial: &str) -> Result<Option<String>> {
        let (reply, response) = oneshot::channel();
        self.requests
            .send(PromptRequest {
                prompt: prompt.to_string(),
                initial: initial.to_string(),
                reply,
            })
            .await
            .map_err(|_| anyhow!("the input thread has stopped"))?;

        match response.await.context("the input thread dropped a prompt")? {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Eof) => Ok(None),
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                Ok(Some(String::new()))
            }
            Err(err) => Err(err).context("failed to read input"),
        }
    }

    fn say(&mut self, line: &str, tone: Option<Tone>) {
        match tone {
            Some(tone) => println!("{}", colorize(line, tone)),
            None => println!("{line}"),
        }
    }

    fn error(&mut self, message: &str) {
        println!(
            "{}: {}",
            colorize("Error", Tone::Red),
            message.red().bold().on_bright_yellow()
        );
    }

    fn banner(&mut self, value: &str, tone: Option<Tone>) {
        for row in banner::render(value) {
            self.say(&row, tone);
        }
    }

    fn paint(&self, text: &str, tone: Tone) -> String {
        colorize(text, tone)
    }
}
