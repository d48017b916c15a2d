#![warn(missing_docs)]
//! # vitrine
//!
//! Offline caching and notification agent for the Vitrine storefront.
//!
//! The agent reacts to host-dispatched events (install, activate, fetch
//! interception, push, notification interaction, background sync) with
//! short async routines over an injected snapshot store. Every handler is
//! designed to resolve: request-time failures degrade through a fallback
//! chain instead of propagating.
//!
//! ```rust,no_run
//! use vitrine::{AgentConfig, ServiceAgent, offload::TaskPool};
//! # use vitrine_memory::MemoryStorage;
//! # async fn example(fetch: impl vitrine_core::Fetch + 'static,
//! #                  notifier: impl vitrine::notify::Notifier + 'static,
//! #                  clients: impl vitrine::clients::Clients + 'static) {
//! let agent = ServiceAgent::new(
//!     MemoryStorage::new(),
//!     fetch,
//!     TaskPool::new(),
//!     notifier,
//!     clients,
//!     AgentConfig::default(),
//! );
//! agent.handle_install().await;
//! agent.handle_activate().await.unwrap();
//! # }
//! ```

/// The event facade: one handler per host event kind.
pub mod agent;

/// Window-client abstraction (enumeration, claim, focus, open).
pub mod clients;

/// Agent configuration: release versions, app-shell manifest,
/// network-first hosts, notification styling.
pub mod config;

/// Error types for lifecycle operations.
pub mod error;

/// Install and activate: populating the static generation and sweeping
/// superseded ones.
pub mod lifecycle;

/// Push notification relay: payload parsing, notification construction,
/// interaction handling.
pub mod notify;

/// Detached background task pool for fire-and-forget cache refreshes.
pub mod offload;

/// The routing contract mapping request shape to retrieval policy.
pub mod route;

/// The cache policy dispatcher and its three retrieval strategies.
pub mod strategy;

pub use agent::ServiceAgent;
pub use config::{AgentConfig, AgentConfigBuilder, NotificationStyle};
pub use error::AgentError;
pub use lifecycle::{ActivateReport, InstallReport};
pub use route::{Route, route};
pub use strategy::Dispatcher;

pub use vitrine_core::{
    CacheName, Destination, DisabledOffload, Fetch, FetchError, Offload, ResourceKey,
    ResourceRequest, ResponseSnapshot,
};

/// The `vitrine` prelude.
///
/// ```rust
/// use vitrine::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{AgentConfig, AgentError, Dispatcher, Route, ServiceAgent};
    pub use vitrine_core::{ResourceRequest, ResponseSnapshot};
}
