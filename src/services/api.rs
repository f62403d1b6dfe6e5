// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard API client.
//!
//! Both endpoints are read-only GETs. The browser's session cookie is passed
//! through untouched; the widget never looks inside it.

use crate::error::{AppError, Result};
use crate::models::{UsageResponse, UserResponse};
use async_trait::async_trait;
use reqwest::header::{HeaderValue, COOKIE};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// The two endpoints the renderers consume.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// `GET /api/user`
    async fn fetch_user(&self) -> Result<UserResponse>;

    /// `GET /api/usage`
    async fn fetch_usage(&self) -> Result<UsageResponse>;
}

/// reqwest-backed [`DashboardApi`].
#[derive(Clone)]
pub struct DashboardClient {
    http: reqwest::Client,
    base_url: String,
    cookie: Option<HeaderValue>,
}

impl DashboardClient {
    /// Create a client for the API at `base_url`.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| AppError::Transport(format!("HTTP client setup failed: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            cookie: None,
        })
    }

    /// Copy of this client that forwards the given `Cookie` header.
    ///
    /// The underlying connection pool is shared.
    pub fn with_cookie(&self, cookie: Option<HeaderValue>) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            cookie,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Generic GET request with JSON response.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.http.get(&url);
        if let Some(cookie) = &self.cookie {
            request = request.header(COOKIE, cookie.clone());
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Transport(format!("Reading body failed: {}", e)))?;

        if !status.is_success() {
            tracing::debug!(%url, status = status.as_u16(), "Dashboard API error status");
            return Err(AppError::UpstreamStatus {
                status: status.as_u16(),
                error: extract_error_message(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| AppError::Decode(format!("{}: {}", path, e)))
    }
}

#[async_trait]
impl DashboardApi for DashboardClient {
    async fn fetch_user(&self) -> Result<UserResponse> {
        self.get_json("/api/user").await
    }

    async fn fetch_usage(&self) -> Result<UsageResponse> {
        self.get_json("/api/usage").await
    }
}

/// Body of a failed call: `{ "ok": false, "error": "..." }`.
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Pull the `error` string out of an error body, if it is JSON.
fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|e| !e.is_empty())
}
