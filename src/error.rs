//! Error types for the viewer library

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by theme lookup, asset setup, config persistence and
/// host mounting.
///
/// Selection requests never produce errors; out-of-range offsets are clamped.
#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("host container `{0}` not found")]
    ContainerNotFound(String),

    #[error("host container `{0}` already exists")]
    DuplicateContainer(String),

    #[error("asset base path already set to {}", .0.display())]
    BasePathAlreadySet(PathBuf),

    #[error("unknown grammar `{0}`")]
    UnknownGrammar(String),

    #[error("theme error: {0}")]
    Theme(String),

    #[error("no user config directory available")]
    NoConfigDir,

    #[error("failed to serialize config: {0}")]
    SerializeConfig(#[from] serde_yaml::Error),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ViewerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = ViewerError> = std::result::Result<T, E>;
