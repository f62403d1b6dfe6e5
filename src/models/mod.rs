// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Response shapes consumed from the dashboard API.

pub mod usage;
pub mod user;

pub use usage::{DailyUsage, UsageResponse, HOURS_PER_DAY};
pub use user::{DiscordUser, Session, UserResponse};
