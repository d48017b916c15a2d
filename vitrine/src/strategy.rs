//! The cache policy dispatcher and its retrieval strategies.

use std::sync::Arc;

use tracing::{debug, warn};
use vitrine_backend::CacheStorage;
use vitrine_core::{CacheName, Fetch, Offload, ResourceKey, ResourceRequest, ResponseSnapshot};

use crate::config::AgentConfig;
use crate::route::{Route, route};

/// Applies a retrieval policy to every intercepted request.
///
/// The dispatcher owns the two active cache generations (through their
/// configured names) and never fails: a request that cannot be satisfied
/// by network or cache resolves to the offline fallback.
///
/// Cloning is cheap; all clones share the same store, fetcher and task
/// pool.
#[derive(Debug)]
pub struct Dispatcher<S, F, O> {
    storage: Arc<S>,
    fetch: Arc<F>,
    offload: O,
    config: Arc<AgentConfig>,
}

impl<S, F, O: Clone> Clone for Dispatcher<S, F, O> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            fetch: Arc::clone(&self.fetch),
            offload: self.offload.clone(),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S, F, O> Dispatcher<S, F, O>
where
    S: CacheStorage + 'static,
    F: Fetch + 'static,
    O: Offload + 'static,
{
    /// Creates a dispatcher over the given host services.
    pub fn new(storage: S, fetch: F, offload: O, config: Arc<AgentConfig>) -> Self {
        Self {
            storage: Arc::new(storage),
            fetch: Arc::new(fetch),
            offload,
            config,
        }
    }

    /// Returns the dispatcher configuration.
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Returns the underlying cache store.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub(crate) fn fetcher(&self) -> &F {
        &self.fetch
    }

    /// Routes the request and executes the selected strategy.
    pub async fn dispatch(&self, request: &ResourceRequest) -> ResponseSnapshot {
        let selected = route(request, &self.config);
        debug!(url = %request.uri(), route = ?selected, "dispatching request");
        match selected {
            Route::Passthrough => self.passthrough(request).await,
            Route::NetworkFirst => self.network_first(request).await,
            Route::CacheFirst => self.cache_first(request).await,
            Route::StaleWhileRevalidate => self.stale_while_revalidate(request).await,
        }
    }

    /// Non-interceptable requests: one live fetch, no cache interaction.
    async fn passthrough(&self, request: &ResourceRequest) -> ResponseSnapshot {
        match self.fetch.fetch(request).await {
            Ok(response) => response,
            Err(error) => {
                debug!(url = %request.uri(), error = %error, "passthrough fetch failed");
                ResponseSnapshot::offline_placeholder()
            }
        }
    }

    /// Trust the cache, touch the network only on a miss.
    ///
    /// At most one network round-trip per call, no retry. Successful
    /// fetches land in the static generation: only shell assets are
    /// routed here, and they belong to the release.
    async fn cache_first(&self, request: &ResourceRequest) -> ResponseSnapshot {
        let key = request.key();
        match self.storage.read_any(&key).await {
            Ok(Some(hit)) => {
                debug!(%key, "cache-first hit");
                return hit;
            }
            Ok(None) => {}
            Err(error) => warn!(%key, error = %error, "cache lookup failed, treating as miss"),
        }
        match self.fetch.fetch(request).await {
            Ok(response) => {
                if response.is_ok() {
                    self.store(&self.config.static_cache(), &key, response.clone())
                        .await;
                }
                response
            }
            Err(error) => {
                warn!(%key, error = %error, "cache-first fetch failed");
                self.offline_fallback(request).await
            }
        }
    }

    /// Trust the network, use the cache only as a degraded-mode fallback.
    async fn network_first(&self, request: &ResourceRequest) -> ResponseSnapshot {
        let key = request.key();
        match self.fetch.fetch(request).await {
            Ok(response) => {
                if response.is_ok() {
                    self.store(&self.config.dynamic_cache(), &key, response.clone())
                        .await;
                }
                response
            }
            Err(error) => {
                debug!(%key, error = %error, "network-first fetch failed, trying cache");
                match self.storage.read_any(&key).await {
                    Ok(Some(cached)) => cached,
                    Ok(None) => self.offline_fallback(request).await,
                    Err(storage_error) => {
                        warn!(%key, error = %storage_error, "cache fallback lookup failed");
                        self.offline_fallback(request).await
                    }
                }
            }
        }
    }

    /// Serve a cached copy immediately and refresh it in the background.
    ///
    /// Never blocks on the network when a cached copy exists: the refresh
    /// is detached and its completion is not awaited. Without a cached
    /// copy this degrades to a single awaited fetch.
    async fn stale_while_revalidate(&self, request: &ResourceRequest) -> ResponseSnapshot {
        let key = request.key();
        let cached = match self.storage.read(&self.config.dynamic_cache(), &key).await {
            Ok(cached) => cached,
            Err(error) => {
                warn!(%key, error = %error, "cache lookup failed, treating as miss");
                None
            }
        };

        if let Some(hit) = cached {
            debug!(%key, "serving stale copy, refreshing in background");
            self.spawn_revalidate(request.clone());
            return hit;
        }

        match self.fetch.fetch(request).await {
            Ok(response) => {
                if response.is_ok() {
                    self.store(&self.config.dynamic_cache(), &key, response.clone())
                        .await;
                }
                response
            }
            Err(error) => {
                warn!(%key, error = %error, "revalidate fetch failed with empty cache");
                self.offline_fallback(request).await
            }
        }
    }

    /// Detaches a fetch-and-store refresh of the dynamic entry.
    ///
    /// Failures are logged, not raised: losing one refresh cycle only
    /// means the entry stays stale until the next request.
    fn spawn_revalidate(&self, request: ResourceRequest) {
        let storage = Arc::clone(&self.storage);
        let fetch = Arc::clone(&self.fetch);
        let cache = self.config.dynamic_cache();
        self.offload.spawn("revalidate", async move {
            let key = request.key();
            match fetch.fetch(&request).await {
                Ok(response) if response.is_ok() => {
                    if let Err(error) = storage.write(&cache, &key, response).await {
                        warn!(%key, error = %error, "background refresh store failed");
                    }
                }
                Ok(response) => {
                    debug!(%key, status = %response.status(), "background refresh returned non-ok response");
                }
                Err(error) => warn!(%key, error = %error, "background refresh failed"),
            }
        });
    }

    /// The end of every fallback chain.
    ///
    /// Failed navigations get the cached root document so the SPA shell
    /// still loads; everything else gets an empty 503 snapshot.
    pub(crate) async fn offline_fallback(&self, request: &ResourceRequest) -> ResponseSnapshot {
        if request.destination().is_navigation() {
            let root = ResourceKey::get(self.config.root_document.clone());
            match self.storage.read_any(&root).await {
                Ok(Some(shell)) => {
                    debug!(url = %request.uri(), "serving cached root document for failed navigation");
                    return shell;
                }
                Ok(None) => {}
                Err(error) => warn!(error = %error, "root document lookup failed"),
            }
        }
        ResponseSnapshot::offline_placeholder()
    }

    /// Best-effort store; a write failure costs a future hit, nothing more.
    async fn store(&self, cache: &CacheName, key: &ResourceKey, response: ResponseSnapshot) {
        if let Err(error) = self.storage.write(cache, key, response).await {
            warn!(%cache, %key, error = %error, "failed to store response copy");
        }
    }
}
