use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dashmap::DashMap;
use vitrine_core::{Fetch, FetchError, ResourceRequest, ResponseSnapshot};

/// Scripted outcome for one URL.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// Resolve with the given snapshot.
    Respond(ResponseSnapshot),
    /// Fail with a network error.
    Fail,
    /// Never resolve. Lets tests prove a strategy does not wait on the
    /// network.
    Stall,
}

/// Programmable network fetcher with call counters.
///
/// Outcomes are scripted per URL; unscripted URLs get the fallback
/// outcome (a network failure unless changed). Clones share the same
/// script and counters.
#[derive(Clone)]
pub struct MockFetch {
    outcomes: Arc<DashMap<String, FetchOutcome>>,
    fallback: Arc<Mutex<FetchOutcome>>,
    calls: Arc<DashMap<String, usize>>,
    total: Arc<AtomicUsize>,
}

impl Default for MockFetch {
    fn default() -> Self {
        Self::new()
    }
}

impl MockFetch {
    /// A fetcher that fails every unscripted request (offline).
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(DashMap::new()),
            fallback: Arc::new(Mutex::new(FetchOutcome::Fail)),
            calls: Arc::new(DashMap::new()),
            total: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A fetcher that answers every unscripted request with 200 and a
    /// fixed body.
    pub fn online() -> Self {
        let fetch = Self::new();
        fetch.set_fallback(FetchOutcome::Respond(ResponseSnapshot::ok_with_body(
            "fetched",
        )));
        fetch
    }

    /// Scripts a successful response for a URL.
    pub fn respond(&self, url: &str, snapshot: ResponseSnapshot) {
        self.outcomes
            .insert(url.to_owned(), FetchOutcome::Respond(snapshot));
    }

    /// Scripts a network failure for a URL.
    pub fn fail(&self, url: &str) {
        self.outcomes.insert(url.to_owned(), FetchOutcome::Fail);
    }

    /// Scripts a never-resolving fetch for a URL.
    pub fn stall(&self, url: &str) {
        self.outcomes.insert(url.to_owned(), FetchOutcome::Stall);
    }

    /// Replaces the outcome for every unscripted URL.
    pub fn set_fallback(&self, outcome: FetchOutcome) {
        *self.fallback.lock().unwrap() = outcome;
    }

    /// Number of fetches issued for one URL.
    pub fn fetch_count(&self, url: &str) -> usize {
        self.calls.get(url).map(|count| *count).unwrap_or(0)
    }

    /// Number of fetches issued in total.
    pub fn total_count(&self) -> usize {
        self.total.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetch for MockFetch {
    async fn fetch(&self, request: &ResourceRequest) -> Result<ResponseSnapshot, FetchError> {
        let url = request.uri().to_string();
        *self.calls.entry(url.clone()).or_insert(0) += 1;
        self.total.fetch_add(1, Ordering::SeqCst);

        let outcome = self
            .outcomes
            .get(&url)
            .map(|entry| entry.value().clone())
            .unwrap_or_else(|| self.fallback.lock().unwrap().clone());

        match outcome {
            FetchOutcome::Respond(snapshot) => Ok(snapshot),
            FetchOutcome::Fail => Err(FetchError::Offline),
            FetchOutcome::Stall => {
                futures::future::pending::<()>().await;
                unreachable!("stalled fetch never resolves")
            }
        }
    }
}
