//! User identity payload from `GET /api/user`.

use serde::{Deserialize, Deserializer};

/// Number of built-in default avatars on the Discord CDN.
const DEFAULT_AVATAR_COUNT: u64 = 5;

/// Response of the user-identity endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserResponse {
    pub authenticated: bool,
    #[serde(default)]
    pub user: Option<DiscordUser>,
}

/// Session state derived from a [`UserResponse`].
#[derive(Debug, Clone, Copy)]
pub enum Session<'a> {
    Anonymous,
    Authenticated(&'a DiscordUser),
}

impl UserResponse {
    /// Resolve the session. A payload claiming authentication without a user
    /// object is treated as anonymous.
    pub fn session(&self) -> Session<'_> {
        match (self.authenticated, &self.user) {
            (true, Some(user)) => Session::Authenticated(user),
            (true, None) => {
                tracing::warn!("User endpoint reported authenticated without a user object");
                Session::Anonymous
            }
            (false, _) => Session::Anonymous,
        }
    }
}

/// Discord account as returned by the dashboard API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscordUser {
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub global_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub discriminator: Option<String>,
}

impl DiscordUser {
    /// Human display name, falling back to the account handle.
    pub fn display_name(&self) -> &str {
        match self.global_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.username,
        }
    }

    /// `@handle`, else `ID: <id>`, else empty.
    pub fn identity_line(&self) -> String {
        if !self.username.is_empty() {
            format!("@{}", self.username)
        } else if !self.id.is_empty() {
            format!("ID: {}", self.id)
        } else {
            String::new()
        }
    }

    /// Index into the CDN's default avatar set.
    ///
    /// Missing or non-numeric discriminators count as 0.
    pub fn default_avatar_index(&self) -> u64 {
        self.discriminator
            .as_deref()
            .and_then(|d| d.trim().parse::<u64>().ok())
            .unwrap_or(0)
            % DEFAULT_AVATAR_COUNT
    }

    /// Avatar image URL on the given CDN.
    pub fn avatar_url(&self, cdn_base_url: &str) -> String {
        match self.avatar.as_deref() {
            Some(hash) if !hash.is_empty() => {
                format!("{}/avatars/{}/{}.png", cdn_base_url, self.id, hash)
            }
            _ => format!(
                "{}/embed/avatars/{}.png",
                cdn_base_url,
                self.default_avatar_index()
            ),
        }
    }

    /// Alt text for the avatar image.
    pub fn avatar_alt(&self) -> String {
        format!("{} avatar", self.username)
    }
}

/// Accept `"0042"`, `42` or `null`.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
