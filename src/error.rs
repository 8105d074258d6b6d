use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("tagger model line {line}: {reason}")]
    ModelParse { line: usize, reason: String },

    #[error("tagger model contains no entries")]
    EmptyModel,

    #[error("toolkit operation `{operation}` unavailable: {reason}")]
    Toolkit {
        operation: &'static str,
        reason: String,
    },

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
