//! Request routing: mapping request shape to a retrieval policy.

use vitrine_core::{Destination, ResourceRequest};

use crate::config::AgentConfig;

/// The retrieval policy chosen for an intercepted request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Not interceptable; the live fetch goes out unmodified.
    Passthrough,
    /// Prefer a live fetch, fall back to cache.
    NetworkFirst,
    /// Prefer the cache, fetch only on miss.
    CacheFirst,
    /// Serve from cache immediately, refresh in the background.
    StaleWhileRevalidate,
}

/// Selects the retrieval policy for a request.
///
/// Rules are evaluated in order, first match wins:
///
/// 1. Non-GET requests and non-HTTP(S) schemes pass through.
/// 2. Network-first hosts get [`Route::NetworkFirst`].
/// 3. App-shell paths get [`Route::CacheFirst`].
/// 4. Images get [`Route::StaleWhileRevalidate`].
/// 5. Everything else defaults to [`Route::NetworkFirst`].
pub fn route(request: &ResourceRequest, config: &AgentConfig) -> Route {
    if !request.is_get() || !request.is_http() {
        return Route::Passthrough;
    }
    if let Some(host) = request.host()
        && config.is_network_first(host)
    {
        return Route::NetworkFirst;
    }
    if config.in_app_shell(request.path()) {
        return Route::CacheFirst;
    }
    if request.destination() == Destination::Image {
        return Route::StaleWhileRevalidate;
    }
    Route::NetworkFirst
}
