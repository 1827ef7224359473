//! Common test utilities and fixtures
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;
use tracklist_server::{api, config::ServerConfig, state::AppState};
use tracklist_storage::TrackStore;

pub const BOUNDARY: &str = "tracklist-test-boundary";

/// Router over a fresh data directory; keep the `TempDir` alive for the test
pub async fn create_test_app() -> (Router, TrackStore, TempDir) {
    create_test_app_with(ServerConfig::default()).await
}

pub async fn create_test_app_with(mut config: ServerConfig) -> (Router, TrackStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    config.storage.data_dir = temp_dir.path().to_path_buf();

    let store = TrackStore::new(temp_dir.path());
    store.initialize().await.unwrap();

    let app = api::router(AppState::new(store.clone(), Arc::new(config)));
    (app, store, temp_dir)
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method(method)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method(method)
        .body(Body::empty())
        .unwrap()
}

/// Multipart request with a single `file` field
pub fn upload_request(uri: &str, file_name: &str, content_type: &str, data: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n",
            file_name
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .uri(uri)
        .method("POST")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

/// POST a track and return its JSON
pub async fn create_track(app: &Router, title: &str, artist: &str, genres: &[&str]) -> serde_json::Value {
    let response = send(
        app,
        json_request(
            "POST",
            "/api/tracks",
            serde_json::json!({
                "title": title,
                "artist": artist,
                "album": "Test Album",
                "genres": genres,
            }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}
