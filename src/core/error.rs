//! Error types for the knowledge-base core

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the store, scorer and entry validation
#[derive(Debug, Error)]
pub enum QaError {
    #[error("File {} not found!", .0.display())]
    NotFound(PathBuf),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Unsupported language '{language}'. Supported: {}", .supported.join(", "))]
    UnsupportedLanguage {
        language: String,
        supported: Vec<String>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid knowledge base JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QaError>;
