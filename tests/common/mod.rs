// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::Value;
use std::sync::Arc;
use vc_dashboard::config::Config;
use vc_dashboard::routes::create_router;
use vc_dashboard::AppState;

/// Serve `router` on an ephemeral local port and return its base URL.
#[allow(dead_code)]
pub async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub upstream");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Stub upstream failed");
    });
    format!("http://{addr}")
}

/// Stub dashboard API answering both endpoints with fixed responses.
#[allow(dead_code)]
pub fn stub_api(user: (StatusCode, Value), usage: (StatusCode, Value)) -> Router {
    Router::new()
        .route(
            "/api/user",
            get(move || {
                let (status, body) = user.clone();
                async move { (status, Json(body)) }
            }),
        )
        .route(
            "/api/usage",
            get(move || {
                let (status, body) = usage.clone();
                async move { (status, Json(body)) }
            }),
        )
}

/// A healthy usage payload: three days, activity at 21:00 and 22:00.
#[allow(dead_code)]
pub fn sample_usage() -> Value {
    let mut hourly = vec![0; 24];
    hourly[21] = 5400;
    hourly[22] = 3600;
    serde_json::json!({
        "ok": true,
        "total_seconds": 9000,
        "daily": [
            { "label": "10/14", "seconds": 1800 },
            { "label": "10/15", "seconds": 7200 },
            { "label": "10/16", "seconds": 0 }
        ],
        "hourly": hourly
    })
}

/// Create a widget app pointed at `api_base_url`.
#[allow(dead_code)]
pub fn create_test_app(api_base_url: &str) -> (Router, Arc<AppState>) {
    let config = Config {
        api_base_url: api_base_url.to_string(),
        ..Config::default()
    };
    let state = Arc::new(AppState::new(config).expect("Failed to build app state"));
    (create_router(state.clone()), state)
}

/// Collect a response body as UTF-8.
#[allow(dead_code)]
pub async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}
