//! Agent configuration.
//!
//! All of it is static at runtime: the manifest and host lists are
//! compile-time constants of the deployment, and bumping [`release`]
//! is the sole mechanism for invalidating previously cached app-shell
//! assets.
//!
//! [`release`]: AgentConfig::release

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use vitrine_core::CacheName;

/// Fixed iconography and defaults for displayed notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationStyle {
    /// Icon shown in the notification body.
    pub icon: SmolStr,
    /// Small monochrome badge.
    pub badge: SmolStr,
    /// Title used when a push payload does not carry one.
    pub default_title: SmolStr,
    /// Canonical tag; the platform collapses notifications sharing it.
    pub tag: SmolStr,
}

impl Default for NotificationStyle {
    fn default() -> Self {
        Self {
            icon: SmolStr::new_static("/img/icons/icon-96.png"),
            badge: SmolStr::new_static("/img/icons/badge-96.png"),
            default_title: SmolStr::new_static("Vitrine"),
            tag: SmolStr::new_static("vitrine-aviso"),
        }
    }
}

/// Static configuration of the caching and notification agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Release version of the app shell; embedded in the static
    /// generation name, so bumping it supersedes every cached shell asset.
    pub release: SmolStr,
    /// Rolling version of the dynamic generation. Changes rarely; the
    /// dynamic cache is not tied to shell releases.
    pub dynamic_release: SmolStr,
    /// Root-relative paths making up the app shell, cached at install.
    pub app_shell: Vec<SmolStr>,
    /// Hostname substrings whose requests always prefer a live fetch.
    pub network_first_hosts: Vec<SmolStr>,
    /// Path of the document served as the navigation fallback.
    pub root_document: SmolStr,
    /// Notification iconography and defaults.
    pub notification: NotificationStyle,
    /// The only background-sync tag the agent reacts to.
    pub sync_tag: SmolStr,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            release: SmolStr::new_static("v2"),
            dynamic_release: SmolStr::new_static("v1"),
            app_shell: [
                "/",
                "/index.html",
                "/productos.html",
                "/compras.html",
                "/css/estilos.css",
                "/js/app.js",
                "/js/ui.js",
                "/img/logo.png",
            ]
            .into_iter()
            .map(SmolStr::new_static)
            .collect(),
            network_first_hosts: ["firestore.googleapis.com", "fcm.googleapis.com"]
                .into_iter()
                .map(SmolStr::new_static)
                .collect(),
            root_document: SmolStr::new_static("/index.html"),
            notification: NotificationStyle::default(),
            sync_tag: SmolStr::new_static("sync-compras"),
        }
    }
}

impl AgentConfig {
    /// Creates a new [`AgentConfigBuilder`].
    pub fn builder() -> AgentConfigBuilder {
        AgentConfigBuilder::default()
    }

    /// Name of the active static generation, e.g. `static-v2`.
    pub fn static_cache(&self) -> CacheName {
        CacheName::new(format!("static-{}", self.release))
    }

    /// Name of the active dynamic generation, e.g. `dynamic-v1`.
    pub fn dynamic_cache(&self) -> CacheName {
        CacheName::new(format!("dynamic-{}", self.dynamic_release))
    }

    /// The generation names activation retains; everything else is swept.
    pub fn retained(&self) -> [CacheName; 2] {
        [self.static_cache(), self.dynamic_cache()]
    }

    /// Whether a hostname matches the network-first list.
    pub fn is_network_first(&self, host: &str) -> bool {
        self.network_first_hosts
            .iter()
            .any(|candidate| host.contains(candidate.as_str()))
    }

    /// Whether a path is an app-shell asset (exact match).
    pub fn in_app_shell(&self, path: &str) -> bool {
        self.app_shell.iter().any(|entry| entry == path)
    }
}

/// Builder for [`AgentConfig`].
#[derive(Debug, Default)]
pub struct AgentConfigBuilder {
    config: AgentConfig,
}

impl AgentConfigBuilder {
    /// Sets the app-shell release version.
    pub fn release(mut self, release: impl Into<SmolStr>) -> Self {
        self.config.release = release.into();
        self
    }

    /// Sets the dynamic generation version.
    pub fn dynamic_release(mut self, release: impl Into<SmolStr>) -> Self {
        self.config.dynamic_release = release.into();
        self
    }

    /// Replaces the app-shell manifest.
    pub fn app_shell<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        self.config.app_shell = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the network-first hostname list.
    pub fn network_first_hosts<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        self.config.network_first_hosts = hosts.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the navigation-fallback document path.
    pub fn root_document(mut self, path: impl Into<SmolStr>) -> Self {
        self.config.root_document = path.into();
        self
    }

    /// Sets the notification styling.
    pub fn notification(mut self, style: NotificationStyle) -> Self {
        self.config.notification = style;
        self
    }

    /// Sets the recognized background-sync tag.
    pub fn sync_tag(mut self, tag: impl Into<SmolStr>) -> Self {
        self.config.sync_tag = tag.into();
        self
    }

    /// Finishes the builder.
    pub fn build(self) -> AgentConfig {
        self.config
    }
}
