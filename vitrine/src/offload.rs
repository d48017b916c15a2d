//! Detached background task pool.
//!
//! The stale-while-revalidate strategy refreshes cache entries without
//! blocking the response. [`TaskPool`] runs those refreshes as tracked
//! tokio tasks: callers never await them, tests can.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use smol_str::SmolStr;
use tokio::task::JoinHandle;
use tracing::{Instrument, info_span};
use vitrine_core::Offload;

#[derive(Debug, Default)]
struct TaskPoolInner {
    tasks: DashMap<u64, JoinHandle<()>>,
    task_counter: AtomicU64,
}

/// Pool of detached background tasks.
///
/// Tasks remove themselves from the pool on completion. If the process is
/// torn down first, in-flight work is dropped; for a cache refresh that
/// only means the entry is not updated that cycle.
///
/// Clones share the same pool.
#[derive(Clone, Debug, Default)]
pub struct TaskPool {
    inner: Arc<TaskPoolInner>,
}

impl TaskPool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tracked tasks that have not finished yet.
    pub fn active_task_count(&self) -> usize {
        self.inner
            .tasks
            .iter()
            .filter(|entry| !entry.is_finished())
            .count()
    }

    /// Drops handles of finished tasks.
    pub fn cleanup_finished(&self) {
        self.inner.tasks.retain(|_, handle| !handle.is_finished());
    }

    /// Waits for every currently tracked task to complete.
    ///
    /// Polls with a yield between checks to avoid busy-waiting. Intended
    /// for tests that need the background refresh to have landed.
    pub async fn wait_all(&self) {
        loop {
            self.cleanup_finished();
            if self.inner.tasks.is_empty() {
                break;
            }
            tokio::task::yield_now().await;
        }
    }
}

impl Offload for TaskPool {
    fn spawn<F>(&self, kind: impl Into<SmolStr>, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let kind = kind.into();
        let id = self.inner.task_counter.fetch_add(1, Ordering::Relaxed);
        let inner = Arc::clone(&self.inner);
        let span = info_span!("background_task", kind = %kind, id);
        let handle = tokio::spawn(
            async move {
                future.await;
                inner.tasks.remove(&id);
            }
            .instrument(span),
        );
        self.inner.tasks.insert(id, handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn tasks_remove_themselves_on_completion() {
        let pool = TaskPool::new();
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        pool.spawn("test", async move {
            let _ = rx.await;
        });
        assert_eq!(pool.active_task_count(), 1);

        tx.send(()).unwrap();
        pool.wait_all().await;
        assert_eq!(pool.active_task_count(), 0);
    }

    #[tokio::test]
    async fn wait_all_returns_immediately_when_empty() {
        TaskPool::new().wait_all().await;
    }
}
