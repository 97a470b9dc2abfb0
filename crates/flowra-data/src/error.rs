//! Error types for collection store operations.

use thiserror::Error;

/// A specialized [`Result`] type for collection store operations.
///
/// [`Result`]: std::result::Result
pub type DataResult<T, E = DataError> = std::result::Result<T, E>;

/// The error type for collection store operations.
///
/// Store failures are surfaced to the caller unmodified: pagination never
/// performs a mutation, so re-invoking with the same cursor is always safe
/// and retries are left to the caller's discretion.
#[derive(Debug, Error)]
pub enum DataError {
    /// A collection lock was poisoned by a panicked writer.
    #[error("collection lock poisoned")]
    Poisoned,

    /// The backing store failed to execute the scan.
    #[error("collection scan failed: {message}")]
    Unavailable {
        /// Human-readable failure description from the backing store.
        message: String,
    },
}

impl DataError {
    /// Creates an [`DataError::Unavailable`] with the given message.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}
