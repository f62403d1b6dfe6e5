// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Widget routes.
//!
//! Each request is one page load: a fresh document, both renderers run once
//! against the dashboard API with the caller's cookie, then the result is
//! returned as HTML or as JSON slot state.

use crate::dashboard;
use crate::render::{html, Document};
use crate::AppState;
use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::Html,
    routing::get,
    Json, Router,
};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/widget", get(get_widget))
        .route("/widget/state", get(get_widget_state))
}

/// Render the host page.
async fn get_widget(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Html<String> {
    let doc = render_document(&state, &headers).await;
    Html(html::render_page(&doc, &state.config.login_url))
}

/// Rendered slot state as JSON.
async fn get_widget_state(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Json<Document> {
    Json(render_document(&state, &headers).await)
}

async fn render_document(state: &AppState, headers: &HeaderMap) -> Document {
    let cookie = headers.get(header::COOKIE).cloned();
    let api = state.client.with_cookie(cookie);

    let mut doc = Document::host_page();
    dashboard::on_ready(&api, &mut doc, &state.config.cdn_base_url).await;
    doc
}
