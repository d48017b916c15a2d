//! Window-client abstraction.
//!
//! The host exposes the windows of this origin: the agent claims them at
//! activation and steers one of them when a notification is clicked.

use std::sync::Arc;

use async_trait::async_trait;

/// The host's window enumeration/focus/open primitive.
#[async_trait]
pub trait Clients: Send + Sync {
    /// Takes control of already-open windows immediately, instead of
    /// waiting for their next load.
    async fn claim(&self);

    /// Focuses an existing window of this origin and navigates it to
    /// `url`. Returns `false` when no window exists.
    async fn focus_existing(&self, url: &str) -> bool;

    /// Opens a new window at `url`.
    async fn open_window(&self, url: &str);
}

#[async_trait]
impl<C> Clients for Arc<C>
where
    C: Clients + ?Sized,
{
    async fn claim(&self) {
        (**self).claim().await
    }

    async fn focus_existing(&self, url: &str) -> bool {
        (**self).focus_existing(url).await
    }

    async fn open_window(&self, url: &str) {
        (**self).open_window(url).await
    }
}
