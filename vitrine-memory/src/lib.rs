//! In-memory cache store for the Vitrine offline caching agent.
//!
//! Provides [`MemoryStorage`], a concurrent [`CacheStorage`] implementation
//! backed by `dashmap`. It models the host's cache storage in-process and
//! doubles as the substitutable fake store for tests.
//!
//! [`CacheStorage`]: vitrine_backend::CacheStorage

mod backend;

pub use backend::MemoryStorage;
