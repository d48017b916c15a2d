//! Shared test doubles for the Vitrine agent.
//!
//! The real store already has an in-process implementation
//! (`vitrine_memory::MemoryStorage`); this crate adds scripted doubles
//! for the remaining host services: the network fetcher, the notifier
//! and the window registry.

mod clients;
mod fetch;
mod notifier;

pub use clients::MockClients;
pub use fetch::{FetchOutcome, MockFetch};
pub use notifier::MockNotifier;

/// Installs a compact fmt subscriber once per test binary.
///
/// Repeated calls are fine; later ones are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
