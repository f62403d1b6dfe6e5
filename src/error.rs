// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for dashboard API calls.
//!
//! Renderers never propagate these: every variant is turned into slot
//! output plus a log event.

/// Failure talking to the dashboard API.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Dashboard API request failed: {0}")]
    Transport(String),

    #[error("Dashboard API returned HTTP {status}")]
    UpstreamStatus {
        status: u16,
        /// `error` field of the JSON body, when the server sent one.
        error: Option<String>,
    },

    #[error("Invalid dashboard API response: {0}")]
    Decode(String),
}

impl AppError {
    /// Server-supplied error string, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            AppError::UpstreamStatus { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    /// True for failures where the server answered with a status code,
    /// as opposed to transport or parse failures.
    pub fn is_upstream_status(&self) -> bool {
        matches!(self, AppError::UpstreamStatus { .. })
    }
}

/// Result type alias for API calls.
pub type Result<T> = std::result::Result<T, AppError>;
