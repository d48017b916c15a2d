//! The event facade: one handler per host event kind.

use std::sync::Arc;

use tracing::{debug, info};
use vitrine_backend::CacheStorage;
use vitrine_core::{Fetch, Offload, ResourceRequest, ResponseSnapshot};

use crate::clients::Clients;
use crate::config::AgentConfig;
use crate::error::AgentError;
use crate::lifecycle::{ActivateReport, InstallReport};
use crate::notify::{ACTION_DISMISS, Notifier, PushPayload, WebNotification};
use crate::strategy::Dispatcher;

/// The agent: a set of independent async handlers over injected host
/// services.
///
/// Handlers share no mutable state beyond the cache store. The
/// request-time handlers ([`handle_fetch`], [`handle_push`],
/// [`handle_notification_click`], [`handle_sync`]) always resolve; only
/// activation can report an error upward.
///
/// [`handle_fetch`]: ServiceAgent::handle_fetch
/// [`handle_push`]: ServiceAgent::handle_push
/// [`handle_notification_click`]: ServiceAgent::handle_notification_click
/// [`handle_sync`]: ServiceAgent::handle_sync
pub struct ServiceAgent<S, F, O, N, C> {
    dispatcher: Dispatcher<S, F, O>,
    notifier: Arc<N>,
    clients: Arc<C>,
    config: Arc<AgentConfig>,
}

impl<S, F, O, N, C> ServiceAgent<S, F, O, N, C>
where
    S: CacheStorage + 'static,
    F: Fetch + 'static,
    O: Offload + 'static,
    N: Notifier,
    C: Clients,
{
    /// Wires an agent over the given host services.
    pub fn new(
        storage: S,
        fetch: F,
        offload: O,
        notifier: N,
        clients: C,
        config: AgentConfig,
    ) -> Self {
        let config = Arc::new(config);
        Self {
            dispatcher: Dispatcher::new(storage, fetch, offload, Arc::clone(&config)),
            notifier: Arc::new(notifier),
            clients: Arc::new(clients),
            config,
        }
    }

    /// Returns the underlying dispatcher.
    pub fn dispatcher(&self) -> &Dispatcher<S, F, O> {
        &self.dispatcher
    }

    /// Install event: precache the app shell.
    pub async fn handle_install(&self) -> InstallReport {
        self.dispatcher.install().await
    }

    /// Activate event: sweep superseded generations, then take control of
    /// any already-open clients immediately.
    pub async fn handle_activate(&self) -> Result<ActivateReport, AgentError> {
        let report = self.dispatcher.activate().await?;
        self.clients.claim().await;
        Ok(report)
    }

    /// Fetch-interception event: route and execute a retrieval strategy.
    ///
    /// Never fails; at worst the offline placeholder comes back.
    pub async fn handle_fetch(&self, request: &ResourceRequest) -> ResponseSnapshot {
        self.dispatcher.dispatch(request).await
    }

    /// Push event: parse the payload (degrading to plain text) and
    /// display the notification.
    pub async fn handle_push(&self, payload: Option<&[u8]>) {
        let payload = match payload {
            Some(data) => PushPayload::parse(data),
            None => PushPayload::default(),
        };
        let notification = WebNotification::from_payload(payload, &self.config.notification);
        info!(tag = %notification.tag, "displaying push notification");
        self.notifier.show(notification).await;
    }

    /// Notification-interaction event.
    ///
    /// `dismiss` closes with no further effect. Any other action (the
    /// `view` button or the default body click) reuses an open window of
    /// this origin, or opens a new one at the target URL.
    pub async fn handle_notification_click(&self, action: &str, url: &str) {
        if action == ACTION_DISMISS {
            debug!("notification dismissed");
            return;
        }
        if !self.clients.focus_existing(url).await {
            self.clients.open_window(url).await;
        }
    }

    /// Background-sync event, filtered by tag.
    ///
    /// Only the configured tag is acknowledged; the routine itself is a
    /// placeholder until queued purchases move into the agent. Returns
    /// whether the tag was recognized.
    pub async fn handle_sync(&self, tag: &str) -> bool {
        if tag != self.config.sync_tag {
            debug!(tag, "ignoring unknown sync tag");
            return false;
        }
        info!(tag, "sync event acknowledged");
        true
    }
}
