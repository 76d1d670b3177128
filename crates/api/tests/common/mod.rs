//! Shared helpers for API integration tests.
//!
//! Requests are sent straight to the router via `tower::ServiceExt`, so no
//! TCP listener is involved. `build_test_app` mirrors the production router
//! construction in `main.rs` (same middleware stack, same state shape).

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use framenote_api::config::ServerConfig;
use framenote_api::router::build_app_router;
use framenote_api::state::AppState;
use framenote_api::storage::FileStore;
use framenote_api::ws::RoomRegistry;
use framenote_events::EventBus;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a throwaway temp directory as storage root, and a small fixed reviewer
/// list for mention tests.
pub fn test_config() -> ServerConfig {
    let dir = tempfile::tempdir().expect("create temp storage root");
    let storage_root = dir.path().to_string_lossy().into_owned();
    // Leak the guard so the directory outlives the app under test.
    std::mem::forget(dir);

    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        storage_root,
        max_upload_bytes: 512 * 1024 * 1024,
        ws_heartbeat_secs: 30,
        mention_users: vec![
            "Marta".to_string(),
            "Miguel".to_string(),
            "Priya".to_string(),
        ],
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// The returned `Router` is cheap to clone; clones share the same state
/// (pool, file store, room registry, event bus), so a test that uploads a
/// file and then streams it back should clone one app rather than build
/// two.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_config(pool).0
}

/// Like [`build_test_app`], but also hands back the generated config so a
/// test can inspect deployment-derived paths (e.g. the storage root).
pub fn build_test_app_with_config(pool: PgPool) -> (Router, ServerConfig) {
    let config = test_config();
    let state = AppState {
        pool,
        file_store: Arc::new(FileStore::new(&config.storage_root)),
        rooms: Arc::new(RoomRegistry::new()),
        event_bus: Arc::new(EventBus::default()),
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config);
    (app, config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or_else(|e| panic!("Body is not valid JSON: {e}"))
}

// ---------------------------------------------------------------------------
// Domain helpers
// ---------------------------------------------------------------------------

/// POST a multipart video upload (`name` + `file` fields) for a brand.
pub async fn upload_video(
    app: Router,
    brand_id: i64,
    name: &str,
    filename: &str,
    bytes: &[u8],
) -> Response<Body> {
    let boundary = "framenote-test-boundary";

    let mut body = Vec::new();
    body.extend_from_slice(
        format!("--{boundary}\r\nContent-Disposition: form-data; name=\"name\"\r\n\r\n{name}\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; \
             filename=\"{filename}\"\r\nContent-Type: video/mp4\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    let request = Request::builder()
        .method(Method::POST)
        .uri(format!("/api/v1/brands/{brand_id}/videos"))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Create a brand via the API and return its id.
pub async fn seed_brand(app: Router, name: &str) -> i64 {
    let response = post_json(app, "/api/v1/brands", serde_json::json!({ "name": name })).await;
    let json = body_json(response).await;
    json["data"]["id"].as_i64().expect("brand id")
}

/// Create a brand with one uploaded video and return `(brand_id, room_id)`.
///
/// Drives the real endpoints so the seeded rows look exactly like what
/// production writes.
pub async fn seed_room(app: Router) -> (i64, String) {
    let brand_id = seed_brand(app.clone(), "Acme").await;

    let response = upload_video(app, brand_id, "Launch teaser", "teaser.mp4", b"fake video").await;
    let json = body_json(response).await;
    let room_id = json["data"]["room_id"].as_str().expect("room id").to_string();

    (brand_id, room_id)
}
