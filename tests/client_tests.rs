// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard API client tests against an in-process stub server.

use axum::{
    http::{header, HeaderMap, HeaderValue, StatusCode},
    routing::get,
    Json, Router,
};
use serde_json::json;
use vc_dashboard::error::AppError;
use vc_dashboard::models::Session;
use vc_dashboard::services::{DashboardApi, DashboardClient};

mod common;

#[tokio::test]
async fn test_fetch_user_and_usage() {
    let base = common::spawn_upstream(common::stub_api(
        (
            StatusCode::OK,
            json!({ "authenticated": true, "user": { "id": "1", "username": "ann", "avatar": "h1" } }),
        ),
        (StatusCode::OK, common::sample_usage()),
    ))
    .await;
    let client = DashboardClient::new(base, None).unwrap();

    let user = client.fetch_user().await.expect("user fetch");
    match user.session() {
        Session::Authenticated(u) => assert_eq!(u.username, "ann"),
        Session::Anonymous => panic!("expected an authenticated session"),
    }

    let usage = client.fetch_usage().await.expect("usage fetch");
    assert!(usage.ok);
    assert_eq!(usage.total_seconds, 9000.0);
    assert_eq!(usage.daily.len(), 3);
    assert_eq!(usage.hourly.len(), 24);
}

#[tokio::test]
async fn test_cookie_is_forwarded() {
    let router = Router::new().route(
        "/api/user",
        get(|headers: HeaderMap| async move {
            let authenticated = headers
                .get(header::COOKIE)
                .and_then(|v| v.to_str().ok())
                == Some("session=abc");
            let user = authenticated.then(|| json!({ "id": "1", "username": "ann" }));
            Json(json!({ "authenticated": authenticated, "user": user }))
        }),
    );
    let base = common::spawn_upstream(router).await;
    let client = DashboardClient::new(base, None).unwrap();

    let anonymous = client.fetch_user().await.unwrap();
    assert!(!anonymous.authenticated);

    let with_cookie = client.with_cookie(Some(HeaderValue::from_static("session=abc")));
    let user = with_cookie.fetch_user().await.unwrap();
    assert!(user.authenticated);
}

#[tokio::test]
async fn test_error_status_carries_server_message() {
    let base = common::spawn_upstream(common::stub_api(
        (StatusCode::OK, json!({ "authenticated": false })),
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "ok": false, "error": "aggregation failed" }),
        ),
    ))
    .await;
    let client = DashboardClient::new(base, None).unwrap();

    let err = client.fetch_usage().await.unwrap_err();
    assert!(matches!(err, AppError::UpstreamStatus { status: 500, .. }));
    assert_eq!(err.server_message(), Some("aggregation failed"));
}

#[tokio::test]
async fn test_invalid_json_is_decode_error() {
    let router = Router::new().route("/api/usage", get(|| async { "<html>not json</html>" }));
    let base = common::spawn_upstream(router).await;
    let client = DashboardClient::new(base, None).unwrap();

    let err = client.fetch_usage().await.unwrap_err();
    assert!(matches!(err, AppError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Bind then drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = DashboardClient::new(format!("http://{addr}"), None).unwrap();

    let err = client.fetch_user().await.unwrap_err();
    assert!(matches!(err, AppError::Transport(_)), "got {err:?}");
}
