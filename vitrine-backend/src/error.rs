//! Error types for storage operations.

use thiserror::Error;

/// Error type for cache store operations.
///
/// This enum categorizes errors that can occur while interacting with the
/// host's cache store into distinct groups for appropriate handling.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Internal store error, state or computation error.
    ///
    /// Any error not related to reaching the store.
    #[error(transparent)]
    InternalError(Box<dyn std::error::Error + Send + Sync>),

    /// The store itself could not be reached.
    #[error(transparent)]
    ConnectionError(Box<dyn std::error::Error + Send + Sync>),
}

impl StorageError {
    /// Wraps an internal store error.
    pub fn internal<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::InternalError(Box::new(source))
    }
}
