//! Shared helpers for integration tests.
//!
//! Builds the production router via `build_app_router` so tests exercise
//! the same middleware stack (CORS, request ID, timeout, tracing, panic
//! recovery) that production uses.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use stickerlab_api::config::ServerConfig;
use stickerlab_api::router::build_app_router;
use stickerlab_api::state::AppState;
use stickerlab_core::CategorySet;

/// Build a test `ServerConfig` rooted at `static_dir`.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config(static_dir: PathBuf, categories: CategorySet) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        static_dir,
        categories,
    }
}

/// Build the full application router over a static directory.
pub fn build_test_app(static_dir: PathBuf, categories: CategorySet) -> Router {
    let config = test_config(static_dir, categories);
    let state = AppState {
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Create a temporary static tree with the given asset files.
///
/// `files` maps category subdirectories (under `static/assets`) to
/// filenames; each file is written with a small placeholder payload.
/// Returns the temp dir (keep it alive) and the static root inside it.
pub fn asset_fixture(files: &[(&str, &[&str])]) -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let static_dir = tmp.path().join("static");
    for (subdir, names) in files {
        let dir = static_dir.join("assets").join(subdir);
        fs::create_dir_all(&dir).unwrap();
        for name in *names {
            write_png_stub(&dir, name);
        }
    }
    fs::create_dir_all(static_dir.join("assets")).unwrap();
    (tmp, static_dir)
}

fn write_png_stub(dir: &Path, name: &str) {
    fs::write(dir.join(name), b"png-stub").unwrap();
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as a string (for key-order assertions).
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Assert a response is OK and return its JSON body.
pub async fn ok_json(response: Response<Body>) -> serde_json::Value {
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}
