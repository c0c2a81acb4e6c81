//! Errors raised while loading `sdgen.toml`.

use std::path::PathBuf;
use thiserror::Error;

/// Config loading and validation failures.
///
/// Every variant names where the problem is: the file for I/O and syntax
/// errors, the `[section.key]` for rejected values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid config `{0}`: {1}")]
    Toml(PathBuf, #[source] toml::de::Error),

    #[error("invalid [{key}] in sdgen.toml: {reason}")]
    Validation { key: &'static str, reason: String },
}

impl ConfigError {
    pub fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            key,
            reason: reason.into(),
        }
    }
}
