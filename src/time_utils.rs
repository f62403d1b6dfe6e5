// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for duration formatting.

/// Seconds as hours with one decimal place ("12.5").
///
/// Ties round away from zero (900 s is "0.3", not "0.2").
pub fn format_hours(seconds: f64) -> String {
    let tenths = (seconds / 360.0).round();
    format!("{:.1}", tenths / 10.0)
}

/// Seconds as an exact duration ("1h 2m 3s").
///
/// Hours are omitted when zero; minutes are shown when non-zero or when
/// they sit between non-zero hours and seconds.
pub fn format_duration(total_seconds: u64) -> String {
    let h = total_seconds / 3600;
    let m = (total_seconds % 3600) / 60;
    let s = total_seconds % 60;

    let mut parts = Vec::with_capacity(3);
    if h > 0 {
        parts.push(format!("{h}h"));
    }
    if m > 0 || (h > 0 && s > 0) {
        parts.push(format!("{m}m"));
    }
    parts.push(format!("{s}s"));
    parts.join(" ")
}
