use std::path::PathBuf;

use crate::errors::AppError;

pub const DEFAULT_MIN_DISTINCT: usize = 2;

/// Application configuration loaded from environment variables.
/// Every variable is optional. `CLASSIFIER_MIN_DISTINCT` is validated when a
/// batch asks for it, so a command-line override can stand in for a bad value.
#[derive(Debug, Clone)]
pub struct Config {
    pub lexicon_path: Option<PathBuf>,
    min_distinct_raw: Option<String>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            lexicon_path: lookup("CLASSIFIER_LEXICON_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            min_distinct_raw: lookup("CLASSIFIER_MIN_DISTINCT"),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// The diversity threshold from the environment, or the default when unset.
    pub fn min_distinct(&self) -> Result<usize, AppError> {
        match &self.min_distinct_raw {
            Some(raw) => parse_min_distinct(raw),
            None => Ok(DEFAULT_MIN_DISTINCT),
        }
    }

    /// `override_value` (from the command line) wins over the environment.
    pub fn resolve_min_distinct(&self, override_value: Option<usize>) -> Result<usize, AppError> {
        match override_value {
            Some(n) => Ok(n),
            None => self.min_distinct(),
        }
    }
}

fn parse_min_distinct(raw: &str) -> Result<usize, AppError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(AppError::Config(format!(
            "CLASSIFIER_MIN_DISTINCT must be an integer >= 1, got '{raw}'"
        ))),
    }
}
