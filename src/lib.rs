// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! VC Dashboard widget: login panel and voice-chat usage charts.
//!
//! This crate renders the dashboard widget from the dashboard API's
//! `/api/user` and `/api/usage` endpoints, either into any
//! [`render::RenderTarget`] or as a complete HTML page served over HTTP.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod middleware;
pub mod models;
pub mod render;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::DashboardClient;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub client: DashboardClient,
}

impl AppState {
    /// Build state with a client for `config.api_base_url`.
    pub fn new(config: Config) -> error::Result<Self> {
        let client = DashboardClient::new(config.api_base_url.clone(), config.api_timeout)?;
        Ok(Self { config, client })
    }
}
