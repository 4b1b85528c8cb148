//! Configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use corequiz_core::model::{sample_quizzes, QuizSeed};
use corequiz_core::session::DEFAULT_PROMPT;

/// Top-level corequiz configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Main prompt text.
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Show the title banner at startup.
    #[serde(default = "default_true")]
    pub banner: bool,
    /// Colored output.
    #[serde(default = "default_true")]
    pub color: bool,
    /// Start with the built-in sample quizzes.
    #[serde(default = "default_true")]
    pub seed_samples: bool,
    /// Fixed seed for the play order.
    #[serde(default)]
    pub rng_seed: Option<u64>,
    /// Extra quizzes added at startup, after the samples.
    #[serde(default)]
    pub quizzes: Vec<QuizSeed>,
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            banner: true,
            color: true,
            seed_samples: true,
            rng_seed: None,
            quizzes: Vec::new(),
        }
    }
}

impl QuizConfig {
    /// The quizzes the store starts with, in order.
    pub fn seeds(&self) -> Vec<QuizSeed> {
        let mut seeds = if self.seed_samples {
            sample_quizzes()
        } else {
            Vec::new()
        };
        seeds.extend(self.quizzes.iter().cloned());
        seeds
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `corequiz.toml` in the current directory
/// 2. `~/.config/corequiz/config.toml`
///
/// Environment variable overrides: `COREQUIZ_PROMPT`, `COREQUIZ_SEED`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("corequiz.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let config = match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<QuizConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizConfig::default(),
    };

    apply_env_overrides(config, |key| std::env::var(key).ok())
}

/// Apply `COREQUIZ_*` overrides looked up through `var`.
fn apply_env_overrides<F>(mut config: QuizConfig, var: F) -> Result<QuizConfig>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(prompt) = var("COREQUIZ_PROMPT") {
        config.prompt = prompt;
    }
    if let Some(seed) = var("COREQUIZ_SEED") {
        let seed = seed
            .trim()
            .parse()
            .with_context(|| format!("COREQUIZ_SEED must be a number, got '{seed}'"))?;
        config.rng_seed = Some(seed);
    }
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("corequiz"))
}
