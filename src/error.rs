//! Error types.

use thiserror::Error;

/// Result alias for fallible map operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by [`LongKeyMap`](crate::LongKeyMap).
///
/// Missing keys are never errors; lookups and removals return `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Capacity or load factor rejected at construction.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A mutating call received an argument it cannot accept.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Creates an [`Error::InvalidConfiguration`] from any message.
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Creates an [`Error::InvalidArgument`] from any message.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
