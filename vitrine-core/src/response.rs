//! Stored response snapshots.

use bytes::Bytes;
use http::{HeaderMap, StatusCode, header::HeaderName, header::HeaderValue};
use serde::{Deserialize, Serialize};

/// A copy of a fetched response as held by the cache store.
///
/// Snapshots carry status, headers and a fully buffered body. `HeaderMap`
/// and `StatusCode` are serialized through `http-serde`, so a snapshot can
/// round-trip through any serde-based store without losing header fidelity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseSnapshot {
    #[serde(with = "http_serde::status_code")]
    status: StatusCode,
    #[serde(with = "http_serde::header_map")]
    headers: HeaderMap,
    body: Bytes,
}

impl ResponseSnapshot {
    /// Creates a snapshot with the given status and body and no headers.
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Creates a 200 OK snapshot with the given body.
    pub fn ok_with_body(body: impl Into<Bytes>) -> Self {
        Self::new(StatusCode::OK, body)
    }

    /// The synthetic response returned when both the live fetch and every
    /// cache lookup have failed: an empty body with a 503 status, so the
    /// caller sees failure in the status rather than as an error.
    pub fn offline_placeholder() -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, Bytes::new())
    }

    /// Adds a header, replacing any previous value with the same name.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Returns the response status.
    #[inline]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the response headers.
    #[inline]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the buffered body.
    #[inline]
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Whether the status is in the ok range (2xx).
    ///
    /// Strategies only store ok responses; error pages are never cached.
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.status.is_success()
    }
}
