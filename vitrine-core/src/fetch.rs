//! Trait for reaching the live network.
//!
//! The agent never talks to a transport directly; every live round-trip
//! goes through [`Fetch`], the host's fetch primitive. This keeps the
//! strategies independently testable with a scripted fetcher.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::{ResourceRequest, ResponseSnapshot};

/// Error produced by a failed live fetch.
///
/// A response with an error status (404, 500) is not a `FetchError`; this
/// type covers only failures where no response was produced at all.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The host reported no connectivity.
    #[error("network unreachable")]
    Offline,

    /// The transport failed before a response was produced.
    #[error(transparent)]
    ConnectionError(Box<dyn std::error::Error + Send + Sync>),
}

impl FetchError {
    /// Wraps a transport error.
    pub fn connection<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConnectionError(Box::new(source))
    }
}

/// The host's network-fetch primitive.
///
/// # Examples
///
/// ```rust,ignore
/// struct StaticFetch {
///     snapshot: ResponseSnapshot,
/// }
///
/// #[async_trait]
/// impl Fetch for StaticFetch {
///     async fn fetch(&self, _request: &ResourceRequest) -> Result<ResponseSnapshot, FetchError> {
///         Ok(self.snapshot.clone())
///     }
/// }
/// ```
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Performs one live round-trip for the given request.
    async fn fetch(&self, request: &ResourceRequest) -> Result<ResponseSnapshot, FetchError>;
}

#[async_trait]
impl<F> Fetch for Arc<F>
where
    F: Fetch + ?Sized,
{
    async fn fetch(&self, request: &ResourceRequest) -> Result<ResponseSnapshot, FetchError> {
        (**self).fetch(request).await
    }
}

#[async_trait]
impl Fetch for Box<dyn Fetch> {
    async fn fetch(&self, request: &ResourceRequest) -> Result<ResponseSnapshot, FetchError> {
        (**self).fetch(request).await
    }
}
