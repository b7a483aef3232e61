//! The pitchdeck error type.
//!
//! Only setup can fail loudly: config, catalog parsing and validation, and
//! I/O on paths that exist. A game or document that is not there is a
//! `None`, never a variant here. The CLI reports these through `color-eyre`.

use std::path::PathBuf;

/// Failure raised by config loading, catalog loading, or content reads.
#[derive(Debug, thiserror::Error)]
pub enum PitchdeckError {
    /// Unreadable or malformed `pitchdeck.toml`, or no home directory.
    #[error("config error: {message}")]
    Config { message: String },

    /// Catalog JSON that does not deserialize.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// A read that failed for a reason other than the path being absent.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Catalog records that break an invariant (duplicate or unsafe slug).
    #[error("validation error: {message}")]
    Validation { message: String },
}

/// `Result` with [`PitchdeckError`] as the error.
pub type Result<T> = std::result::Result<T, PitchdeckError>;

impl PitchdeckError {
    /// Build a [`PitchdeckError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Build a [`PitchdeckError::Parse`].
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }

    /// Build a [`PitchdeckError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    /// Attach the offending path to an I/O failure.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
