use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::api::LoginGrant;

/// The signed-in user as this client knows them.
///
/// Built once per login from the submitted username and the grant; never
/// mutated afterwards. Field names on disk follow the persisted `currentUser`
/// entry (`name`, `expiresInMs`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub username: String,
    #[serde(rename = "name", default)]
    pub display_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(rename = "expiresInMs", default)]
    pub token_expiry_ms: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<DateTime<Utc>>,
}

impl UserProfile {
    pub fn from_login(username: &str, grant: &LoginGrant, issued_at: DateTime<Utc>) -> Self {
        Self {
            username: username.to_string(),
            display_name: username.to_string(),
            email: username.to_string(),
            roles: grant.roles.clone(),
            token_type: grant.token_type.clone(),
            token_expiry_ms: grant.expires_in_ms,
            issued_at: Some(issued_at),
        }
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let issued_at = self.issued_at?;
        let ms = self.token_expiry_ms?;
        issued_at.checked_add_signed(Duration::try_milliseconds(ms)?)
    }

    /// Informational only; the backend decides whether a token is still good
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().is_some_and(|expires| expires <= now)
    }

    pub fn greeting_name(&self) -> &str {
        if self.display_name.is_empty() {
            &self.username
        } else {
            &self.display_name
        }
    }
}
