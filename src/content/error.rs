//! Snapshot loading errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading content or commerce snapshots from disk.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("TOML parsing error in `{0}`")]
    Toml(PathBuf, #[source] toml::de::Error),

    #[error("JSON parsing error in `{0}`")]
    Json(PathBuf, #[source] serde_json::Error),

    #[error("unsupported snapshot format `{0}` (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),
}
