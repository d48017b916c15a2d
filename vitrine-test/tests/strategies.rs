//! Strategy behavior: routing outcomes, fallback chains, and the
//! non-blocking guarantee of stale-while-revalidate.

use std::sync::Arc;
use std::time::Duration;

use http::{Method, StatusCode};
use vitrine::offload::TaskPool;
use vitrine::{AgentConfig, Destination, Dispatcher, ResourceRequest, ResponseSnapshot};
use vitrine_backend::CacheStorage;
use vitrine_core::ResourceKey;
use vitrine_memory::MemoryStorage;
use vitrine_test::{MockFetch, init_tracing};

fn dispatcher(
    storage: &MemoryStorage,
    fetch: &MockFetch,
    pool: &TaskPool,
) -> Dispatcher<MemoryStorage, MockFetch, TaskPool> {
    init_tracing();
    Dispatcher::new(
        storage.clone(),
        fetch.clone(),
        pool.clone(),
        Arc::new(AgentConfig::default()),
    )
}

fn snapshot(body: &str) -> ResponseSnapshot {
    ResponseSnapshot::ok_with_body(body.to_owned())
}

#[tokio::test]
async fn cache_first_hit_never_touches_network() {
    let storage = MemoryStorage::new();
    let fetch = MockFetch::new();
    let pool = TaskPool::new();
    let config = AgentConfig::default();

    storage
        .write(
            &config.static_cache(),
            &ResourceKey::get("/index.html"),
            snapshot("shell"),
        )
        .await
        .unwrap();

    let dispatcher = dispatcher(&storage, &fetch, &pool);
    let response = dispatcher
        .dispatch(&ResourceRequest::get("/index.html".parse().unwrap()))
        .await;

    assert_eq!(response.body(), "shell");
    assert_eq!(fetch.total_count(), 0);
}

#[tokio::test]
async fn cache_first_miss_fetches_once_and_stores_into_static() {
    let storage = MemoryStorage::new();
    let fetch = MockFetch::new();
    let pool = TaskPool::new();
    fetch.respond("/css/estilos.css", snapshot("css"));

    let dispatcher = dispatcher(&storage, &fetch, &pool);
    let response = dispatcher
        .dispatch(&ResourceRequest::get("/css/estilos.css".parse().unwrap()))
        .await;

    assert_eq!(response.body(), "css");
    assert_eq!(fetch.fetch_count("/css/estilos.css"), 1);

    let stored = storage
        .read(
            &AgentConfig::default().static_cache(),
            &ResourceKey::get("/css/estilos.css"),
        )
        .await
        .unwrap();
    assert_eq!(stored.unwrap().body(), "css");
}

#[tokio::test]
async fn cache_first_does_not_store_error_responses() {
    let storage = MemoryStorage::new();
    let fetch = MockFetch::new();
    let pool = TaskPool::new();
    fetch.respond(
        "/js/app.js",
        ResponseSnapshot::new(StatusCode::NOT_FOUND, "missing"),
    );

    let dispatcher = dispatcher(&storage, &fetch, &pool);
    let response = dispatcher
        .dispatch(&ResourceRequest::get("/js/app.js".parse().unwrap()))
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let stored = storage
        .read(
            &AgentConfig::default().static_cache(),
            &ResourceKey::get("/js/app.js"),
        )
        .await
        .unwrap();
    assert!(stored.is_none());
}

#[tokio::test]
async fn cache_first_offline_miss_resolves_to_placeholder() {
    let storage = MemoryStorage::new();
    let fetch = MockFetch::new();
    let pool = TaskPool::new();

    let dispatcher = dispatcher(&storage, &fetch, &pool);
    let response = dispatcher
        .dispatch(&ResourceRequest::get("/js/app.js".parse().unwrap()))
        .await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(response.body().is_empty());
}

#[tokio::test]
async fn network_first_prefers_live_response_over_cached_entry() {
    let storage = MemoryStorage::new();
    let fetch = MockFetch::new();
    let pool = TaskPool::new();
    let config = AgentConfig::default();
    let url = "https://tienda.example/api/productos";

    storage
        .write(&config.dynamic_cache(), &ResourceKey::get(url), snapshot("old"))
        .await
        .unwrap();
    fetch.respond(url, snapshot("fresh"));

    let dispatcher = dispatcher(&storage, &fetch, &pool);
    let response = dispatcher
        .dispatch(&ResourceRequest::get(url.parse().unwrap()))
        .await;

    assert_eq!(response.body(), "fresh");
    assert_eq!(fetch.fetch_count(url), 1);

    // The dynamic entry is overwritten with the live copy.
    let stored = storage
        .read(&config.dynamic_cache(), &ResourceKey::get(url))
        .await
        .unwrap();
    assert_eq!(stored.unwrap().body(), "fresh");
}

#[tokio::test]
async fn network_first_falls_back_to_any_cached_copy() {
    let storage = MemoryStorage::new();
    let fetch = MockFetch::new();
    let pool = TaskPool::new();
    let config = AgentConfig::default();
    let url = "https://tienda.example/api/productos";

    storage
        .write(&config.dynamic_cache(), &ResourceKey::get(url), snapshot("old"))
        .await
        .unwrap();

    let dispatcher = dispatcher(&storage, &fetch, &pool);
    let response = dispatcher
        .dispatch(&ResourceRequest::get(url.parse().unwrap()))
        .await;

    assert_eq!(response.body(), "old");
}

#[tokio::test]
async fn network_first_with_empty_cache_resolves_to_placeholder() {
    let storage = MemoryStorage::new();
    let fetch = MockFetch::new();
    let pool = TaskPool::new();

    let dispatcher = dispatcher(&storage, &fetch, &pool);
    let response = dispatcher
        .dispatch(&ResourceRequest::get(
            "https://tienda.example/api/productos".parse().unwrap(),
        ))
        .await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn failed_navigation_serves_cached_root_document() {
    let storage = MemoryStorage::new();
    let fetch = MockFetch::new();
    let pool = TaskPool::new();
    let config = AgentConfig::default();

    storage
        .write(
            &config.static_cache(),
            &ResourceKey::get("/index.html"),
            snapshot("shell"),
        )
        .await
        .unwrap();

    let dispatcher = dispatcher(&storage, &fetch, &pool);
    // Not a shell path, so this navigation is network-first; the network
    // is down and the page itself was never cached.
    let response = dispatcher
        .dispatch(&ResourceRequest::navigate(
            "https://tienda.example/ofertas.html".parse().unwrap(),
        ))
        .await;

    assert_eq!(response.body(), "shell");
}

#[tokio::test(start_paused = true)]
async fn stale_while_revalidate_does_not_wait_for_stalled_fetch() {
    let storage = MemoryStorage::new();
    let fetch = MockFetch::new();
    let pool = TaskPool::new();
    let config = AgentConfig::default();
    let url = "https://tienda.example/img/producto-7.png";

    storage
        .write(&config.dynamic_cache(), &ResourceKey::get(url), snapshot("stale"))
        .await
        .unwrap();
    fetch.stall(url);

    let dispatcher = dispatcher(&storage, &fetch, &pool);
    let request =
        ResourceRequest::get(url.parse().unwrap()).with_destination(Destination::Image);

    // Must resolve long before the stalled background fetch ever could.
    let response = tokio::time::timeout(Duration::from_secs(1), dispatcher.dispatch(&request))
        .await
        .expect("strategy blocked on the network despite a cached copy");

    assert_eq!(response.body(), "stale");
}

#[tokio::test]
async fn stale_while_revalidate_refreshes_entry_in_background() {
    let storage = MemoryStorage::new();
    let fetch = MockFetch::new();
    let pool = TaskPool::new();
    let config = AgentConfig::default();
    let url = "https://tienda.example/img/producto-7.png";

    storage
        .write(&config.dynamic_cache(), &ResourceKey::get(url), snapshot("stale"))
        .await
        .unwrap();
    fetch.respond(url, snapshot("fresh"));

    let dispatcher = dispatcher(&storage, &fetch, &pool);
    let request =
        ResourceRequest::get(url.parse().unwrap()).with_destination(Destination::Image);

    let response = dispatcher.dispatch(&request).await;
    assert_eq!(response.body(), "stale");

    pool.wait_all().await;
    let stored = storage
        .read(&config.dynamic_cache(), &ResourceKey::get(url))
        .await
        .unwrap();
    assert_eq!(stored.unwrap().body(), "fresh");
    assert_eq!(fetch.fetch_count(url), 1);
}

#[tokio::test]
async fn stale_while_revalidate_failed_refresh_keeps_old_entry() {
    let storage = MemoryStorage::new();
    let fetch = MockFetch::new();
    let pool = TaskPool::new();
    let config = AgentConfig::default();
    let url = "https://tienda.example/img/producto-7.png";

    storage
        .write(&config.dynamic_cache(), &ResourceKey::get(url), snapshot("stale"))
        .await
        .unwrap();

    let dispatcher = dispatcher(&storage, &fetch, &pool);
    let request =
        ResourceRequest::get(url.parse().unwrap()).with_destination(Destination::Image);

    let response = dispatcher.dispatch(&request).await;
    assert_eq!(response.body(), "stale");

    pool.wait_all().await;
    let stored = storage
        .read(&config.dynamic_cache(), &ResourceKey::get(url))
        .await
        .unwrap();
    assert_eq!(stored.unwrap().body(), "stale");
}

#[tokio::test]
async fn stale_while_revalidate_miss_awaits_fetch() {
    let storage = MemoryStorage::new();
    let fetch = MockFetch::new();
    let pool = TaskPool::new();
    let config = AgentConfig::default();
    let url = "https://tienda.example/img/producto-9.png";

    fetch.respond(url, snapshot("img"));

    let dispatcher = dispatcher(&storage, &fetch, &pool);
    let request =
        ResourceRequest::get(url.parse().unwrap()).with_destination(Destination::Image);

    let response = dispatcher.dispatch(&request).await;
    assert_eq!(response.body(), "img");
    assert_eq!(fetch.fetch_count(url), 1);

    let stored = storage
        .read(&config.dynamic_cache(), &ResourceKey::get(url))
        .await
        .unwrap();
    assert_eq!(stored.unwrap().body(), "img");
}

#[tokio::test]
async fn passthrough_skips_cache_entirely() {
    let storage = MemoryStorage::new();
    let fetch = MockFetch::new();
    let pool = TaskPool::new();
    let url = "https://tienda.example/api/compras";

    fetch.respond(url, snapshot("created"));

    let dispatcher = dispatcher(&storage, &fetch, &pool);
    let request = ResourceRequest::new(Method::POST, url.parse().unwrap(), Destination::Other);

    let response = dispatcher.dispatch(&request).await;
    assert_eq!(response.body(), "created");
    assert!(storage.cache_names().await.unwrap().is_empty());
}

#[tokio::test]
async fn offline_navigation_with_empty_cache_is_an_empty_503() {
    let storage = MemoryStorage::new();
    let fetch = MockFetch::new();
    let pool = TaskPool::new();

    let dispatcher = dispatcher(&storage, &fetch, &pool);
    let response = dispatcher
        .dispatch(&ResourceRequest::navigate("/index.html".parse().unwrap()))
        .await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(response.body().is_empty());
}
