use std::sync::Arc;

use async_trait::async_trait;
use vitrine_core::{CacheName, ResourceKey, ResponseSnapshot};

use crate::StorageError;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Status of a remove operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteStatus {
    /// The number of deleted entries.
    Deleted(u32),
    /// No entry existed for the key.
    Missing,
}

/// The host's cache store: one snapshot namespace per generation name.
///
/// Implementations must be safe for concurrent use across handler
/// instances; the agent issues overlapping reads and writes with no
/// coordination beyond last-writer-wins.
#[async_trait]
pub trait CacheStorage: Sync + Send {
    /// Looks up a snapshot in one generation.
    async fn read(
        &self,
        cache: &CacheName,
        key: &ResourceKey,
    ) -> StorageResult<Option<ResponseSnapshot>>;

    /// Stores a snapshot into one generation, replacing any previous entry.
    ///
    /// Writing into a generation that does not exist yet creates it.
    async fn write(
        &self,
        cache: &CacheName,
        key: &ResourceKey,
        snapshot: ResponseSnapshot,
    ) -> StorageResult<()>;

    /// Removes a single entry from one generation.
    async fn remove(&self, cache: &CacheName, key: &ResourceKey) -> StorageResult<DeleteStatus>;

    /// Looks up a snapshot across every generation (combined namespace).
    ///
    /// Generations are consulted in lexicographic name order so repeated
    /// lookups are deterministic when a key exists in more than one.
    async fn read_any(&self, key: &ResourceKey) -> StorageResult<Option<ResponseSnapshot>>;

    /// Enumerates every existing generation name.
    async fn cache_names(&self) -> StorageResult<Vec<CacheName>>;

    /// Deletes an entire generation. Returns whether it existed.
    async fn drop_cache(&self, cache: &CacheName) -> StorageResult<bool>;
}

#[async_trait]
impl CacheStorage for &dyn CacheStorage {
    async fn read(
        &self,
        cache: &CacheName,
        key: &ResourceKey,
    ) -> StorageResult<Option<ResponseSnapshot>> {
        (*self).read(cache, key).await
    }

    async fn write(
        &self,
        cache: &CacheName,
        key: &ResourceKey,
        snapshot: ResponseSnapshot,
    ) -> StorageResult<()> {
        (*self).write(cache, key, snapshot).await
    }

    async fn remove(&self, cache: &CacheName, key: &ResourceKey) -> StorageResult<DeleteStatus> {
        (*self).remove(cache, key).await
    }

    async fn read_any(&self, key: &ResourceKey) -> StorageResult<Option<ResponseSnapshot>> {
        (*self).read_any(key).await
    }

    async fn cache_names(&self) -> StorageResult<Vec<CacheName>> {
        (*self).cache_names().await
    }

    async fn drop_cache(&self, cache: &CacheName) -> StorageResult<bool> {
        (*self).drop_cache(cache).await
    }
}

#[async_trait]
impl CacheStorage for Box<dyn CacheStorage> {
    async fn read(
        &self,
        cache: &CacheName,
        key: &ResourceKey,
    ) -> StorageResult<Option<ResponseSnapshot>> {
        (**self).read(cache, key).await
    }

    async fn write(
        &self,
        cache: &CacheName,
        key: &ResourceKey,
        snapshot: ResponseSnapshot,
    ) -> StorageResult<()> {
        (**self).write(cache, key, snapshot).await
    }

    async fn remove(&self, cache: &CacheName, key: &ResourceKey) -> StorageResult<DeleteStatus> {
        (**self).remove(cache, key).await
    }

    async fn read_any(&self, key: &ResourceKey) -> StorageResult<Option<ResponseSnapshot>> {
        (**self).read_any(key).await
    }

    async fn cache_names(&self) -> StorageResult<Vec<CacheName>> {
        (**self).cache_names().await
    }

    async fn drop_cache(&self, cache: &CacheName) -> StorageResult<bool> {
        (**self).drop_cache(cache).await
    }
}

#[async_trait]
impl<S> CacheStorage for Arc<S>
where
    S: CacheStorage + ?Sized,
{
    async fn read(
        &self,
        cache: &CacheName,
        key: &ResourceKey,
    ) -> StorageResult<Option<ResponseSnapshot>> {
        (**self).read(cache, key).await
    }

    async fn write(
        &self,
        cache: &CacheName,
        key: &ResourceKey,
        snapshot: ResponseSnapshot,
    ) -> StorageResult<()> {
        (**self).write(cache, key, snapshot).await
    }

    async fn remove(&self, cache: &CacheName, key: &ResourceKey) -> StorageResult<DeleteStatus> {
        (**self).remove(cache, key).await
    }

    async fn read_any(&self, key: &ResourceKey) -> StorageResult<Option<ResponseSnapshot>> {
        (**self).read_any(key).await
    }

    async fn cache_names(&self) -> StorageResult<Vec<CacheName>> {
        (**self).cache_names().await
    }

    async fn drop_cache(&self, cache: &CacheName) -> StorageResult<bool> {
        (**self).drop_cache(cache).await
    }
}
