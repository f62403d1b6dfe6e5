// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login / user panel renderer.

use crate::models::{Session, UserResponse};
use crate::render::target::{RenderTarget, Slot};
use crate::services::DashboardApi;

pub const STATUS_LOGGED_IN: &str = "logged in";
pub const STATUS_LOGGED_OUT: &str = "logged out";
pub const STATUS_UNAVAILABLE: &str = "user info unavailable";

/// What the user panel should show.
#[derive(Debug, Clone, PartialEq)]
pub enum UserView {
    LoggedOut,
    LoggedIn(UserPanel),
    /// The user endpoint could not be read.
    Unavailable,
}

/// Fields of the logged-in panel.
#[derive(Debug, Clone, PartialEq)]
pub struct UserPanel {
    pub display_name: String,
    pub identity: String,
    pub avatar_url: String,
    pub avatar_alt: String,
}

impl UserView {
    pub fn from_response(response: &UserResponse, cdn_base_url: &str) -> Self {
        match response.session() {
            Session::Anonymous => UserView::LoggedOut,
            Session::Authenticated(user) => UserView::LoggedIn(UserPanel {
                display_name: user.display_name().to_string(),
                identity: user.identity_line(),
                avatar_url: user.avatar_url(cdn_base_url),
                avatar_alt: user.avatar_alt(),
            }),
        }
    }

    /// Write this view into `target`.
    pub fn apply<T: RenderTarget>(&self, target: &mut T) {
        match self {
            UserView::LoggedOut => show_call_to_action(target, STATUS_LOGGED_OUT),
            UserView::Unavailable => show_call_to_action(target, STATUS_UNAVAILABLE),
            UserView::LoggedIn(panel) => {
                target.render_into(Slot::CallToAction, |el| el.hide());
                target.render_into(Slot::UserBox, |el| el.show());
                target.render_into(Slot::UserStatus, |el| el.set_text(STATUS_LOGGED_IN));
                target.render_into(Slot::UserName, |el| el.set_text(panel.display_name.as_str()));
                target.render_into(Slot::UserId, |el| el.set_text(panel.identity.as_str()));
                target.render_into(Slot::UserAvatar, |el| {
                    el.set_image(panel.avatar_url.as_str(), panel.avatar_alt.as_str())
                });
            }
        }
    }
}

fn show_call_to_action<T: RenderTarget>(target: &mut T, status: &str) {
    target.render_into(Slot::UserBox, |el| el.hide());
    target.render_into(Slot::CallToAction, |el| el.show());
    target.render_into(Slot::UserStatus, |el| el.set_text(status));
}

/// Fetches `/api/user` and drives the login / user panel.
pub struct UserInfoRenderer<'a, A: ?Sized> {
    api: &'a A,
    cdn_base_url: &'a str,
}

impl<'a, A: DashboardApi + ?Sized> UserInfoRenderer<'a, A> {
    pub fn new(api: &'a A, cdn_base_url: &'a str) -> Self {
        Self { api, cdn_base_url }
    }

    /// Fetch the user state. Failures become [`UserView::Unavailable`].
    pub async fn load(&self) -> UserView {
        match self.api.fetch_user().await {
            Ok(response) => UserView::from_response(&response, self.cdn_base_url),
            Err(e) => {
                tracing::warn!(error = %e, "User info fetch failed");
                UserView::Unavailable
            }
        }
    }

    /// Fetch, then render into `target`.
    pub async fn render<T: RenderTarget>(&self, target: &mut T) {
        let view = self.load().await;
        view.apply(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_CDN_BASE_URL;
    use crate::error::AppError;
    use crate::models::DiscordUser;
    use crate::render::target::Document;
    use crate::services::api::MockDashboardApi;

    fn authenticated(user: DiscordUser) -> UserResponse {
        UserResponse {
            authenticated: true,
            user: Some(user),
        }
    }

    #[tokio::test]
    async fn test_unauthenticated_shows_call_to_action() {
        let mut api = MockDashboardApi::new();
        api.expect_fetch_user()
            .times(1)
            .returning(|| Ok(UserResponse::default()));

        let mut doc = Document::host_page();
        UserInfoRenderer::new(&api, DEFAULT_CDN_BASE_URL)
            .render(&mut doc)
            .await;

        assert_eq!(doc.slot(Slot::CallToAction).unwrap().visible, Some(true));
        assert_eq!(doc.slot(Slot::UserBox).unwrap().visible, Some(false));
        assert_eq!(
            doc.slot(Slot::UserStatus).unwrap().text.as_deref(),
            Some(STATUS_LOGGED_OUT)
        );
    }

    #[tokio::test]
    async fn test_authenticated_populates_panel() {
        let mut api = MockDashboardApi::new();
        api.expect_fetch_user().times(1).returning(|| {
            Ok(authenticated(DiscordUser {
                id: "1".to_string(),
                username: "ann".to_string(),
                global_name: Some("Ann".to_string()),
                avatar: Some("h1".to_string()),
                discriminator: None,
            }))
        });

        let mut doc = Document::host_page();
        UserInfoRenderer::new(&api, DEFAULT_CDN_BASE_URL)
            .render(&mut doc)
            .await;

        assert_eq!(doc.slot(Slot::CallToAction).unwrap().visible, Some(false));
        assert_eq!(doc.slot(Slot::UserBox).unwrap().visible, Some(true));
        assert_eq!(
            doc.slot(Slot::UserStatus).unwrap().text.as_deref(),
            Some(STATUS_LOGGED_IN)
        );
        assert_eq!(doc.slot(Slot::UserName).unwrap().text.as_deref(), Some("Ann"));
        assert_eq!(doc.slot(Slot::UserId).unwrap().text.as_deref(), Some("@ann"));

        let avatar = doc.slot(Slot::UserAvatar).unwrap();
        assert_eq!(
            avatar.src.as_deref(),
            Some("https://cdn.discordapp.com/avatars/1/h1.png")
        );
        assert_eq!(avatar.alt.as_deref(), Some("ann avatar"));
    }

    #[tokio::test]
    async fn test_fetch_failure_is_contained() {
        let mut api = MockDashboardApi::new();
        api.expect_fetch_user()
            .times(1)
            .returning(|| Err(AppError::Transport("connection refused".to_string())));

        let mut doc = Document::host_page();
        UserInfoRenderer::new(&api, DEFAULT_CDN_BASE_URL)
            .render(&mut doc)
            .await;

        assert_eq!(doc.slot(Slot::CallToAction).unwrap().visible, Some(true));
        assert_eq!(doc.slot(Slot::UserBox).unwrap().visible, Some(false));
        assert_eq!(
            doc.slot(Slot::UserStatus).unwrap().text.as_deref(),
            Some(STATUS_UNAVAILABLE)
        );
    }

    #[tokio::test]
    async fn test_missing_elements_are_skipped() {
        let mut api = MockDashboardApi::new();
        api.expect_fetch_user().returning(|| {
            Ok(authenticated(DiscordUser {
                id: "1".to_string(),
                username: "ann".to_string(),
                ..Default::default()
            }))
        });

        // Page without avatar, id line or status indicator
        let mut doc = Document::with_ids(["cta-area", "user-box", "user-name"]);
        UserInfoRenderer::new(&api, DEFAULT_CDN_BASE_URL)
            .render(&mut doc)
            .await;

        assert_eq!(doc.element("cta-area").unwrap().visible, Some(false));
        assert_eq!(doc.element("user-name").unwrap().text.as_deref(), Some("ann"));
        assert!(doc.element("user-avatar").is_none());
    }
}
