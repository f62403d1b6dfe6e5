// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Usage statistics renderer: headline total plus daily and hourly bars.

use crate::error::AppError;
use crate::models::UsageResponse;
use crate::render::target::{Bar, RenderTarget, Slot};
use crate::services::DashboardApi;
use crate::time_utils::{format_duration, format_hours};

pub const USAGE_UNAVAILABLE: &str = "usage unavailable";
pub const FETCH_FAILED: &str = "statistics fetch failed";

/// What the usage box should show.
#[derive(Debug, Clone, PartialEq)]
pub enum UsageView {
    Stats(UsageStats),
    /// Inline message in place of the charts.
    Error(String),
}

/// Rendered statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct UsageStats {
    pub total_hours: String,
    pub total_exact: String,
    pub daily: Vec<Bar>,
    pub hourly: Vec<Bar>,
}

/// Scale a series so its largest value is 100%.
///
/// The maximum is floored at 1 so an all-zero series renders flat instead of
/// dividing by zero. Heights are clamped to 0-100.
pub fn scale_bars<I, L>(series: I) -> Vec<Bar>
where
    I: IntoIterator<Item = (L, f64)>,
    L: Into<String>,
{
    let points: Vec<(String, f64)> = series.into_iter().map(|(l, s)| (l.into(), s)).collect();
    let max = points.iter().map(|(_, s)| *s).fold(1.0_f64, f64::max);

    points
        .into_iter()
        .map(|(label, seconds)| Bar {
            label,
            height_pct: (seconds / max * 100.0).clamp(0.0, 100.0),
            tooltip: format!("{}h", format_hours(seconds.max(0.0))),
        })
        .collect()
}

impl UsageView {
    pub fn from_response(response: &UsageResponse) -> Self {
        if !response.ok {
            return UsageView::Error(unavailable_message(response.error.as_deref()));
        }

        let daily = scale_bars(
            response
                .daily
                .iter()
                .map(|day| (day.label.as_str(), day.seconds)),
        );
        let hourly = scale_bars(
            response
                .hourly_slots()
                .into_iter()
                .enumerate()
                .map(|(hour, seconds)| (hour.to_string(), seconds)),
        );

        let total_seconds = response.total_seconds.max(0.0);
        UsageView::Stats(UsageStats {
            total_hours: format_hours(total_seconds),
            total_exact: format_duration(total_seconds.round() as u64),
            daily,
            hourly,
        })
    }

    /// Map a failed fetch to the message shown in the usage box.
    pub fn from_error(err: &AppError) -> Self {
        if err.is_upstream_status() {
            UsageView::Error(unavailable_message(err.server_message()))
        } else {
            UsageView::Error(FETCH_FAILED.to_string())
        }
    }

    /// Write this view into `target`.
    pub fn apply<T: RenderTarget>(&self, target: &mut T) {
        match self {
            UsageView::Error(message) => {
                target.render_into(Slot::UsageBox, |el| el.show_message(message.as_str()));
                // Nothing from an earlier successful render may survive.
                target.render_into(Slot::UsageTotal, |el| {
                    el.text = None;
                    el.title = None;
                });
                target.render_into(Slot::UsageDaily, |el| el.replace_bars(Vec::new()));
                target.render_into(Slot::UsageHourly, |el| el.replace_bars(Vec::new()));
            }
            UsageView::Stats(stats) => {
                target.render_into(Slot::UsageBox, |el| el.message = None);
                target.render_into(Slot::UsageTotal, |el| {
                    el.set_text(stats.total_hours.as_str());
                    el.title = Some(stats.total_exact.clone());
                });
                target.render_into(Slot::UsageDaily, |el| el.replace_bars(stats.daily.clone()));
                target.render_into(Slot::UsageHourly, |el| {
                    el.replace_bars(stats.hourly.clone())
                });
            }
        }
    }
}

fn unavailable_message(server_error: Option<&str>) -> String {
    match server_error {
        Some(e) if !e.is_empty() => format!("{}: {}", USAGE_UNAVAILABLE, e),
        _ => USAGE_UNAVAILABLE.to_string(),
    }
}

/// Fetches `/api/usage` and draws the usage box.
pub struct UsageRenderer<'a, A: ?Sized> {
    api: &'a A,
}

impl<'a, A: DashboardApi + ?Sized> UsageRenderer<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    /// Fetch the statistics. Failures become [`UsageView::Error`].
    pub async fn load(&self) -> UsageView {
        match self.api.fetch_usage().await {
            Ok(response) => {
                if !response.ok {
                    tracing::warn!(error = ?response.error, "Usage endpoint reported failure");
                }
                UsageView::from_response(&response)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Usage fetch failed");
                UsageView::from_error(&e)
            }
        }
    }

    /// Fetch, then render into `target`.
    pub async fn render<T: RenderTarget>(&self, target: &mut T) {
        let view = self.load().await;
        view.apply(target);
    }
}
