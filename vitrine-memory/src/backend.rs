//! Dashmap-backed storage implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use vitrine_backend::{CacheStorage, DeleteStatus, StorageResult};
use vitrine_core::{CacheName, ResourceKey, ResponseSnapshot};

/// Concurrent in-memory cache store.
///
/// One snapshot map per generation name. Reads are lock-free at the outer
/// map; writes take a per-generation shard lock. Clones share the same
/// underlying maps.
///
/// # Caveats
///
/// - Entries are **never evicted**; a generation only shrinks when it is
///   dropped wholesale, which is exactly the lifecycle the agent applies.
/// - Nothing is persisted; the store lives and dies with the process.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    caches: Arc<DashMap<CacheName, HashMap<ResourceKey, ResponseSnapshot>>>,
}

impl MemoryStorage {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generation if it does not exist yet.
    ///
    /// Writes create generations implicitly; this exists for tests that
    /// want a named empty generation to assert lifecycle sweeps against.
    pub fn open(&self, cache: &CacheName) {
        self.caches.entry(cache.clone()).or_default();
    }

    /// Number of entries in one generation, or `None` if it does not exist.
    pub fn entry_count(&self, cache: &CacheName) -> Option<usize> {
        self.caches.get(cache).map(|entries| entries.len())
    }
}

impl std::fmt::Debug for MemoryStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStorage")
            .field("cache_count", &self.caches.len())
            .finish()
    }
}

#[async_trait]
impl CacheStorage for MemoryStorage {
    async fn read(
        &self,
        cache: &CacheName,
        key: &ResourceKey,
    ) -> StorageResult<Option<ResponseSnapshot>> {
        Ok(self
            .caches
            .get(cache)
            .and_then(|entries| entries.get(key).cloned()))
    }

    async fn write(
        &self,
        cache: &CacheName,
        key: &ResourceKey,
        snapshot: ResponseSnapshot,
    ) -> StorageResult<()> {
        self.caches
            .entry(cache.clone())
            .or_default()
            .insert(key.clone(), snapshot);
        Ok(())
    }

    async fn remove(&self, cache: &CacheName, key: &ResourceKey) -> StorageResult<DeleteStatus> {
        let removed = self
            .caches
            .get_mut(cache)
            .and_then(|mut entries| entries.remove(key));
        match removed {
            Some(_) => Ok(DeleteStatus::Deleted(1)),
            None => Ok(DeleteStatus::Missing),
        }
    }

    async fn read_any(&self, key: &ResourceKey) -> StorageResult<Option<ResponseSnapshot>> {
        let mut names: Vec<CacheName> = self.caches.iter().map(|e| e.key().clone()).collect();
        names.sort();
        for name in names {
            if let Some(found) = self
                .caches
                .get(&name)
                .and_then(|entries| entries.get(key).cloned())
            {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }

    async fn cache_names(&self) -> StorageResult<Vec<CacheName>> {
        let mut names: Vec<CacheName> = self.caches.iter().map(|e| e.key().clone()).collect();
        names.sort();
        Ok(names)
    }

    async fn drop_cache(&self, cache: &CacheName) -> StorageResult<bool> {
        Ok(self.caches.remove(cache).is_some())
    }
}
