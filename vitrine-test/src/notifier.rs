use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use vitrine::notify::{Notifier, WebNotification};

/// Recording notifier.
#[derive(Clone, Default)]
pub struct MockNotifier {
    shown: Arc<Mutex<Vec<WebNotification>>>,
}

impl MockNotifier {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every notification displayed so far, in order.
    pub fn shown(&self) -> Vec<WebNotification> {
        self.shown.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn show(&self, notification: WebNotification) {
        self.shown.lock().unwrap().push(notification);
    }
}
