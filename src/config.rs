//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local development.

use std::env;
use std::time::Duration;

/// Discord CDN host used for avatar images.
pub const DEFAULT_CDN_BASE_URL: &str = "https://cdn.discordapp.com";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the dashboard API serving `/api/user` and `/api/usage`
    pub api_base_url: String,
    /// Base URL of the avatar CDN
    pub cdn_base_url: String,
    /// Target of the "log in" call-to-action link
    pub login_url: String,
    /// Server port
    pub port: u16,
    /// Per-request timeout for dashboard API calls (None = wait forever)
    pub api_timeout: Option<Duration>,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000".to_string(),
            cdn_base_url: DEFAULT_CDN_BASE_URL.to_string(),
            login_url: "/login".to_string(),
            port: 8080,
            api_timeout: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_base_url = env::var("API_BASE_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());
        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                var: "API_BASE_URL",
                reason: format!("expected an http(s) URL, got {api_base_url:?}"),
            });
        }

        let port = match env::var("PORT") {
            Ok(v) => v.trim().parse().map_err(|e| ConfigError::Invalid {
                var: "PORT",
                reason: format!("{e}"),
            })?,
            Err(_) => 8080,
        };

        let api_timeout = match env::var("API_TIMEOUT_SECS") {
            Ok(v) if !v.trim().is_empty() => {
                let secs: u64 = v.trim().parse().map_err(|e| ConfigError::Invalid {
                    var: "API_TIMEOUT_SECS",
                    reason: format!("{e}"),
                })?;
                Some(Duration::from_secs(secs))
            }
            _ => None,
        };

        Ok(Self {
            api_base_url,
            cdn_base_url: env::var("CDN_BASE_URL")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_CDN_BASE_URL.to_string()),
            login_url: env::var("LOGIN_URL").unwrap_or_else(|_| "/login".to_string()),
            port,
            api_timeout,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}
