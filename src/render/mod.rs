// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Widget rendering: render targets, the two renderers and the host page.

pub mod html;
pub mod target;
pub mod usage;
pub mod user;

pub use target::{Bar, Document, Element, RenderTarget, Slot};
pub use usage::{UsageRenderer, UsageView};
pub use user::{UserInfoRenderer, UserView};
