use thiserror::Error;

use crate::keywords::Polarity;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{polarity} keyword set is empty")]
    EmptyKeywordSet { polarity: Polarity },

    #[error("{polarity} keyword set contains a blank keyword")]
    BlankKeyword { polarity: Polarity },

    #[error("keyword {0:?} is listed as both positive and negative")]
    OverlappingKeyword(String),

    #[error("unknown keyword polarity {0:?} (expected \"positive\" or \"negative\")")]
    UnknownPolarity(String),

    #[error("keyword polarity {0:?} is given more than once")]
    DuplicatePolarity(String),

    #[error("entity label is blank")]
    EmptyEntityLabel,

    #[error("entity label {label:?} has a blank name")]
    EmptyEntityName { label: String },

    #[error("sample review list is empty")]
    EmptySamples,
}
