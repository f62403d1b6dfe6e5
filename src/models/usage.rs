//! Usage statistics payload from `GET /api/usage`.

use serde::Deserialize;

/// Number of hour-of-day buckets in the hourly series.
pub const HOURS_PER_DAY: usize = 24;

/// Aggregate usage statistics.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsageResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub total_seconds: f64,
    /// Per-day totals, oldest first
    #[serde(default)]
    pub daily: Vec<DailyUsage>,
    /// Seconds per hour of day, index 0-23
    #[serde(default)]
    pub hourly: Vec<f64>,
}

/// One day in the daily series.
#[derive(Debug, Clone, Deserialize)]
pub struct DailyUsage {
    pub label: String,
    #[serde(default)]
    pub seconds: f64,
}

impl UsageResponse {
    /// The hourly series padded or truncated to exactly 24 buckets.
    pub fn hourly_slots(&self) -> [f64; HOURS_PER_DAY] {
        let mut slots = [0.0; HOURS_PER_DAY];
        for (slot, value) in slots.iter_mut().zip(&self.hourly) {
            *slot = *value;
        }
        slots
    }
}
