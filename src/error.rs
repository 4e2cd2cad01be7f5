//! Structured error types for materializing a configuration document.

use std::path::PathBuf;
use thiserror::Error;

/// Broad error classes for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// File missing, unreadable or unwritable
    Io,
    /// Invalid YAML, or YAML that could not be emitted
    Parse,
    /// Valid YAML without the expected shape
    Schema,
}

#[derive(Debug, Error)]
pub enum MaterializeError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML")]
    Parse(#[source] serde_yaml::Error),

    #[error("document root must be a mapping")]
    NotAMapping,

    #[error("missing required section `{0}`")]
    MissingSection(&'static str),

    #[error("section `{0}` must be a mapping")]
    SectionNotMapping(&'static str),

    #[error("failed to serialize document")]
    Serialize(#[source] serde_yaml::Error),

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MaterializeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MaterializeError::Read { .. } | MaterializeError::Write { .. } => ErrorKind::Io,
            MaterializeError::Parse(_) | MaterializeError::Serialize(_) => ErrorKind::Parse,
            MaterializeError::NotAMapping
            | MaterializeError::MissingSection(_)
            | MaterializeError::SectionNotMapping(_) => ErrorKind::Schema,
        }
    }
}

/// Result type for materializer operations.
pub type Result<T> = std::result::Result<T, MaterializeError>;
