use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use vitrine::clients::Clients;

/// Recording window registry.
///
/// Configure `has_window` to control whether a focusable window exists;
/// the recorded navigations tell the test which path was taken.
#[derive(Clone, Default)]
pub struct MockClients {
    has_window: Arc<AtomicBool>,
    claims: Arc<AtomicUsize>,
    focused: Arc<Mutex<Vec<String>>>,
    opened: Arc<Mutex<Vec<String>>>,
}

impl MockClients {
    /// A registry with no open windows.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with one focusable window.
    pub fn with_open_window() -> Self {
        let clients = Self::default();
        clients.has_window.store(true, Ordering::SeqCst);
        clients
    }

    /// How many times the agent claimed the open clients.
    pub fn claim_count(&self) -> usize {
        self.claims.load(Ordering::SeqCst)
    }

    /// URLs an existing window was navigated to.
    pub fn focused(&self) -> Vec<String> {
        self.focused.lock().unwrap().clone()
    }

    /// URLs opened in a new window.
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

#[async_trait]
impl Clients for MockClients {
    async fn claim(&self) {
        self.claims.fetch_add(1, Ordering::SeqCst);
    }

    async fn focus_existing(&self, url: &str) -> bool {
        if self.has_window.load(Ordering::SeqCst) {
            self.focused.lock().unwrap().push(url.to_owned());
            true
        } else {
            false
        }
    }

    async fn open_window(&self, url: &str) {
        self.opened.lock().unwrap().push(url.to_owned());
    }
}
