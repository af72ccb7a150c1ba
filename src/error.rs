//! Application-wide error types.
//!
//! Library modules return [`Result`] with the [`Error`] enum below, while
//! the CLI and `main` use `anyhow` for convenient propagation.
//!
//! Rule violations are not errors: they are reported through
//! [`crate::rules::RuleReport`]. Only failures that stop a file, a directory
//! or the whole run end up here.
//!
//! # Example
//!
//! ```ignore
//! use audio_lib_checker::error::{Error, Result};
//!
//! fn load(path: &Path) -> Result<TrackTag> {
//!     let tag = reader.read(path)?;
//!     Ok(tag)
//! }
//! ```

use std::path::PathBuf;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Tag data could not be read from an audio file
    #[error("Metadata error for {path}: {message}")]
    Metadata { path: PathBuf, message: String },

    /// A cover image or the cover directory could not be written
    #[error("Cannot write cover {path}: {source}")]
    CoverExport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The export file could not be created or written
    #[error("Cannot create file {path}: {source}")]
    OutputFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a metadata error.
    pub fn metadata(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Metadata {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a cover export error.
    pub fn cover_export(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CoverExport {
            path: path.into(),
            source,
        }
    }

    /// Create an output file error.
    pub fn output_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputFile {
            path: path.into(),
            source,
        }
    }

    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
