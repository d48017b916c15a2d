//! Install and activate transitions.
//!
//! Install populates the static generation with the app-shell manifest,
//! forcing a fresh fetch per asset so a stale shell is never carried
//! across releases. Activate sweeps every generation not retained by the
//! current configuration.

use http::Uri;
use tracing::{info, warn};
use vitrine_backend::CacheStorage;
use vitrine_core::{CacheName, Fetch, Offload, ResourceRequest};

use crate::error::AgentError;
use crate::strategy::Dispatcher;

/// Outcome of an install: how many shell assets were cached and how many
/// failed. Failures never abort the install.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstallReport {
    /// Assets fetched and stored into the static generation.
    pub cached: usize,
    /// Assets that could not be fetched or stored.
    pub failed: usize,
}

/// Outcome of an activation: the generations that were swept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivateReport {
    /// Names of the deleted generations, in enumeration order.
    pub deleted: Vec<CacheName>,
}

impl<S, F, O> Dispatcher<S, F, O>
where
    S: CacheStorage + 'static,
    F: Fetch + 'static,
    O: Offload + 'static,
{
    /// Populates the static generation with the full asset manifest.
    ///
    /// Every asset is fetched fresh, bypassing any cached copy. A failed
    /// asset is logged and skipped; install proceeds regardless and there
    /// is no rollback.
    pub async fn install(&self) -> InstallReport {
        let cache = self.config().static_cache();
        let mut report = InstallReport::default();
        for path in &self.config().app_shell {
            let uri = match path.parse::<Uri>() {
                Ok(uri) => uri,
                Err(error) => {
                    warn!(%path, error = %error, "invalid app-shell path");
                    report.failed += 1;
                    continue;
                }
            };
            let request = ResourceRequest::get(uri);
            match self.fetcher().fetch(&request).await {
                Ok(response) if response.is_ok() => {
                    match self.storage().write(&cache, &request.key(), response).await {
                        Ok(()) => report.cached += 1,
                        Err(error) => {
                            warn!(%path, error = %error, "failed to store app-shell asset");
                            report.failed += 1;
                        }
                    }
                }
                Ok(response) => {
                    warn!(
                        %path,
                        status = %response.status(),
                        "app-shell asset fetch returned non-ok status"
                    );
                    report.failed += 1;
                }
                Err(error) => {
                    warn!(%path, error = %error, "failed to precache app-shell asset");
                    report.failed += 1;
                }
            }
        }
        info!(
            cache = %cache,
            cached = report.cached,
            failed = report.failed,
            "app shell installed"
        );
        report
    }

    /// Deletes every generation not retained by the current configuration.
    ///
    /// Idempotent: re-activating with unchanged versions deletes nothing.
    /// Claiming open clients is the caller's job; the dispatcher only
    /// owns the cache side of activation.
    pub async fn activate(&self) -> Result<ActivateReport, AgentError> {
        let retained = self.config().retained();
        let mut report = ActivateReport::default();
        for name in self.storage().cache_names().await? {
            if retained.contains(&name) {
                continue;
            }
            match self.storage().drop_cache(&name).await {
                Ok(true) => {
                    info!(cache = %name, "removed superseded cache generation");
                    report.deleted.push(name);
                }
                Ok(false) => {}
                Err(error) => {
                    warn!(cache = %name, error = %error, "failed to remove cache generation");
                }
            }
        }
        Ok(report)
    }
}
