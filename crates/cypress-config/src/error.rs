//! Error types for cypress-config

/// Result type for cypress-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a resolution call
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A recognised configuration key holds a value of the wrong shape
    #[error("Expected {expected} ({key}), but got {received}")]
    InvalidKeyValue {
        key: String,
        expected: &'static str,
        received: String,
    },

    /// A test file pattern could not be compiled
    #[error("Invalid pattern {pattern:?}: {message}")]
    InvalidPattern { pattern: String, message: String },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from cypress-fs (including malformed JSON files)
    #[error(transparent)]
    Fs(#[from] cypress_fs::Error),
}

impl Error {
    pub(crate) fn invalid_value(
        key: &str,
        expected: &'static str,
        received: &serde_json::Value,
    ) -> Self {
        Self::InvalidKeyValue {
            key: key.to_string(),
            expected,
            received: received.to_string(),
        }
    }
}
