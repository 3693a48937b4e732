//! Error types for mdweb.

use std::path::PathBuf;
use thiserror::Error;

use crate::model::FragmentName;

/// Main error type for mdweb operations.
///
/// Undefined references inside a fragment are not represented here: they
/// are skipped during tangling and never surface as errors.
#[derive(Error, Debug)]
pub enum MdwebError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Unknown root fragment: {0}")]
    UnknownRoot(FragmentName),

    #[error("Invalid output path for root fragment: {}", .0.display())]
    InvalidOutputPath(PathBuf),
}

/// Result type alias for mdweb operations.
pub type Result<T> = std::result::Result<T, MdwebError>;
