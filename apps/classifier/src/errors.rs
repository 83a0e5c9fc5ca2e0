use thiserror::Error;

/// Application-level error type.
/// Only the edges fail (config, lexicon loading, ingest); classification itself is total.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid pattern '{pattern}' in lexicon group '{group}': {source}")]
    InvalidPattern {
        group: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Process exit code for the CLI: 2 for bad configuration or input, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Config(_) | AppError::Validation(_) | AppError::InvalidPattern { .. } => {
                tracing::error!("Rejected input: {self}");
                2
            }
            AppError::Json(e) => {
                tracing::error!("Malformed JSON: {e}");
                2
            }
            AppError::Io(e) => {
                tracing::error!("I/O error: {e}");
                1
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                1
            }
        }
    }
}
