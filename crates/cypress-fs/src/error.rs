//! Error types for cypress-fs

use std::path::PathBuf;

/// Result type for cypress-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cypress-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but does not hold the expected JSON shape.
    #[error("Malformed {path}, expected {expected}")]
    MalformedFile { path: PathBuf, expected: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(path: impl Into<PathBuf>, expected: impl Into<String>) -> Self {
        Self::MalformedFile {
            path: path.into(),
            expected: expected.into(),
        }
    }

    /// The path of the file this error concerns.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } | Self::MalformedFile { path, .. } => path,
        }
    }
}
