//! Error types for lifecycle operations.
//!
//! Request-time handlers never surface these: fetch interception, push
//! relay and notification clicks always resolve, degrading through their
//! fallback chains instead. Only install/activate report errors upward.

use thiserror::Error;
use vitrine_backend::StorageError;
use vitrine_core::FetchError;

/// Error raised by agent lifecycle operations.
#[derive(Debug, Error)]
pub enum AgentError {
    /// The cache store failed.
    #[error("cache storage error: {0}")]
    Storage(#[from] StorageError),

    /// The live fetch failed.
    #[error("network fetch error: {0}")]
    Fetch(#[from] FetchError),
}
