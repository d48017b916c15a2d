//! Offload trait for background task execution.
//!
//! This module provides the [`Offload`] trait which abstracts over
//! implementations for spawning detached tasks. The stale-while-revalidate
//! strategy uses it to refresh a cache entry without blocking the response.

use std::future::Future;

use smol_str::SmolStr;

/// Trait for spawning detached background tasks.
///
/// The primary implementation is the task pool in the `vitrine` crate,
/// which tracks spawned tasks and instruments them with tracing spans.
///
/// # Clone bound
///
/// Implementors should use `Arc` internally so all cloned instances share
/// the same state.
pub trait Offload: Send + Sync + Clone {
    /// Spawn a future to be executed in the background.
    ///
    /// The caller does not await completion. If the execution context is
    /// torn down first, the work is dropped; for a cache refresh that
    /// just means the entry is not updated that cycle.
    ///
    /// # Arguments
    ///
    /// * `kind` - A label categorizing the task (e.g., "revalidate").
    ///   Used for tracing.
    /// * `future` - The future to execute. Must be `Send + 'static` as it
    ///   may run on a different thread.
    fn spawn<F>(&self, kind: impl Into<SmolStr>, future: F)
    where
        F: Future<Output = ()> + Send + 'static;
}

/// An [`Offload`] that drops every task without running it.
///
/// Useful where background refreshes are unwanted: the cached entry is
/// simply never revalidated.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledOffload;

impl Offload for DisabledOffload {
    fn spawn<F>(&self, _kind: impl Into<SmolStr>, _future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
    }
}
