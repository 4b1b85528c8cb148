//! corequiz CLI: the interactive quiz prompt.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use corequiz_core::{QuizStore, Session, Terminal, Tone};

mod banner;
mod config;
mod terminal;

use config::{load_config_from, QuizConfig};
use terminal::ConsoleTerminal;

const TITLE: &str = "CORE Quiz";

#[derive(Parser)]
#[command(name = "corequiz", version, about = "Interactive trivia quiz")]
struct Cli {
    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start with an empty store instead of the sample quizzes
    #[arg(long)]
    no_samples: bool,

    /// Seed for the order in which `play` asks quizzes
    #[arg(long)]
    seed: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Skip the title banner
    #[arg(long)]
    no_banner: bool,
}

impl Cli {
    /// Command-line flags take precedence over the config file.
    fn apply(&self, config: &mut QuizConfig) {
        if self.no_samples {
            config.seed_samples = false;
        }
        if let Some(seed) = self.seed {
            config.rng_seed = Some(seed);
        }
        if self.no_color {
            config.color = false;
        }
        if self.no_banner {
            config.banner = false;
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("corequiz=warn,corequiz_core=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = load_config_from(cli.config.as_deref())?;
    cli.apply(&mut config);

    if !config.color {
        colored::control::set_override(false);
    }

    let store = QuizStore::with_seeds(config.seeds()).context("invalid quiz in configuration")?;
    tracing::info!(quizzes = store.count(), "store ready");

    let mut session = Session::new(store).with_prompt(config.prompt.clone());
    if let Some(seed) = config.rng_seed {
        session = session.with_seed(seed);
    }

    let mut term = ConsoleTerminal::spawn()?;
    if config.banner {
        term.banner(TITLE, Some(Tone::Green));
    }

    session.run(&mut term).await
}
