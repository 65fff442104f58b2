// Error types for location parsing, configuration and the backend collaborator

use crate::model::CollectionId;
use std::path::PathBuf;

/// A location string that does not name any view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("path must start with '/': {0}")]
    MissingLeadingSlash(String),

    #[error("no view matches {0}")]
    Unmatched(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine config directory")]
    NoConfigDir,

    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config file malformed: {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures reported by whatever serves collections and answers.
///
/// These never originate in the navigation layer; the app surfaces them in
/// the status bar or the transcript.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    #[error("collection not found: {0}")]
    CollectionNotFound(CollectionId),

    #[error("backend unavailable: {0}")]
    Unavailable(String),
}
