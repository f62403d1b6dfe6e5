// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Page bootstrap: runs both renderers once per ready signal.

use crate::render::{RenderTarget, UsageRenderer, UserInfoRenderer};
use crate::services::DashboardApi;

/// Handle the page's ready signal.
///
/// Both fetches run concurrently; each renderer writes only after its own
/// fetch has finished. The renderers touch disjoint slots, so the order in
/// which their results land does not matter.
pub async fn on_ready<A, T>(api: &A, target: &mut T, cdn_base_url: &str)
where
    A: DashboardApi + ?Sized,
    T: RenderTarget,
{
    let user = UserInfoRenderer::new(api, cdn_base_url);
    let usage = UsageRenderer::new(api);

    let (user_view, usage_view) = tokio::join!(user.load(), usage.load());

    user_view.apply(target);
    usage_view.apply(target);
    tracing::debug!("Dashboard rendered");
}
