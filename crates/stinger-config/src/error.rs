//! Error types for configuration operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while preparing a render configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to create directory
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        /// Path of the directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Output path exists but is not a directory
    #[error("output path '{0}' is not a directory")]
    NotADirectory(PathBuf),

    /// Sample rate cannot be used for rendering
    #[error("invalid sample rate: {0} Hz")]
    InvalidSampleRate(u32),
}

impl ConfigError {
    /// Create a create directory error.
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::CreateDir {
            path: path.into(),
            source,
        }
    }
}
