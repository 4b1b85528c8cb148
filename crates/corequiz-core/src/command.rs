//! Command table and input-line parsing.

use std::fmt;

/// A recognized command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    List,
    Show,
    Add,
    Delete,
    Edit,
    Test,
    Play,
    Credits,
    Quit,
}

/// Every accepted spelling, in the order offered for completion.
pub const COMMANDS: &[(&str, Command)] = &[
    ("h", Command::Help),
    ("help", Command::Help),
    ("list", Command::List),
    ("show", Command::Show),
    ("add", Command::Add),
    ("delete", Command::Delete),
    ("edit", Command::Edit),
    ("test", Command::Test),
    ("p", Command::Play),
    ("play", Command::Play),
    ("credits", Command::Credits),
    ("q", Command::Quit),
    ("quit", Command::Quit),
];

/// One line of help per command.
pub const HELP: &[&str] = &[
    "  h|help - Show this help.",
    "  list - List the existing quizzes.",
    "  show <id> - Show the question and answer of the given quiz.",
    "  add - Add a new quiz interactively.",
    "  delete <id> - Delete the given quiz.",
    "  edit <id> - Edit the given quiz.",
    "  test <id> - Try to answer the given quiz.",
    "  p|play - Play: answer every quiz in random order.",
    "  credits - Show the authors.",
    "  q|quit - Exit the program.",
];

impl Command {
    /// Look up a command token, ignoring case.
    pub fn lookup(token: &str) -> Option<Command> {
        let token = token.to_lowercase();
        COMMANDS
            .iter()
            .find(|(name, _)| *name == token)
            .map(|(_, command)| *command)
    }

    /// Canonical name, used in messages.
    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::List => "list",
            Command::Show => "show",
            Command::Add => "add",
            Command::Delete => "delete",
            Command::Edit => "edit",
            Command::Test => "test",
            Command::Play => "play",
            Command::Credits => "credits",
            Command::Quit => "quit",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input<'a> {
    /// Blank line.
    Empty,
    /// A known command with its optional argument token.
    Command {
        command: Command,
        arg: Option<&'a str>,
    },
    /// The first token did not name a command.
    Unknown(&'a str),
}

/// Split a line into command token and optional argument.
pub fn parse_line(line: &str) -> Input<'_> {
    let mut tokens = line.split_whitespace();
    let Some(token) = tokens.next() else {
        return Input::Empty;
    };
    match Command::lookup(token) {
        Some(command) => Input::Command {
            command,
            arg: tokens.next(),
        },
        None => Input::Unknown(token),
    }
}

/// Command names starting with `prefix`, or all of them when none match.
pub fn completions(prefix: &str) -> Vec<&'static str> {
    let hits: Vec<_> = COMMANDS
        .iter()
        .map(|(name, _)| *name)
        .filter(|name| name.starts_with(prefix))
        .collect();
    if hits.is_empty() {
        COMMANDS.iter().map(|(name, _)| *name).collect()
    } else {
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(Command::lookup("LIST"), Some(Command::List));
        assert_eq!(Command::lookup("Q"), Some(Command::Quit));
        assert_eq!(Command::lookup("p"), Some(Command::Play));
        assert_eq!(Command::lookup("nope"), None);
    }

    #[test]
    fn parse_command_with_argument() {
        assert_eq!(
            parse_line("show 3"),
            Input::Command {
                command: Command::Show,
                arg: Some("3")
            }
        );
        assert_eq!(
            parse_line("  Edit   7  extra"),
            Input::Command {
                command: Command::Edit,
                arg: Some("7")
            }
        );
    }

    #[test]
    fn parse_empty_and_unknown() {
        assert_eq!(parse_line(""), Input::Empty);
        assert_eq!(parse_line("   \t"), Input::Empty);
        assert_eq!(parse_line("frobnicate 1"), Input::Unknown("frobnicate"));
    }

    #[test]
    fn completions_filter_by_prefix() {
        assert_eq!(completions("de"), vec!["delete"]);
        assert_eq!(completions("p"), vec!["p", "play"]);
        assert_eq!(completions("zz").len(), COMMANDS.len());
    }

    #[test]
    fn every_command_has_a_spelling() {
        for command in [
            Command::Help,
            Command::List,
            Command::Show,
            Command::Add,
            Command::Delete,
            Command::Edit,
            Command::Test,
            Command::Play,
            Command::Credits,
            Command::Quit,
        ] {
            assert_eq!(Command::lookup(command.name()), Some(command));
        }
    }
}
