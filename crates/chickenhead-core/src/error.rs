// crates/chickenhead-core/src/error.rs - Error types shared by every snippet operation
//
// The resolver and store never print anything. They hand one of these back and
// let the command layer decide how to present it.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Everything that can go wrong while running a chickenhead command
#[derive(Error, Debug)]
pub enum ChickenheadError {
    /// A required argument was missing or malformed
    #[error("{0}")]
    Validation(String),

    /// The operation needed an existing snippet and there was none
    #[error("snippet not found: {}", .0.display())]
    NotFound(PathBuf),

    /// `add` targeted a snippet that is already on disk
    #[error("this snippet already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// A filesystem call failed
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The editor or search tool is missing, failed to start, or failed
    #[error("{0}")]
    ExternalTool(String),
}

impl ChickenheadError {
    /// Wrap an I/O error together with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for snippet operations
pub type Result<T> = std::result::Result<T, ChickenheadError>;
