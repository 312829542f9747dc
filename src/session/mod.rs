pub mod navigation;
pub mod profile;
pub mod roles;
pub mod store;

pub use navigation::{ensure_section, visible_sections, Section};
pub use profile::UserProfile;
pub use roles::{normalize_role, Role, ROLE_PREFIX};
pub use store::{SessionStore, AUTH_TOKEN_KEY, CURRENT_USER_KEY};

/// Token and profile of the signed-in user.
///
/// Both are present or both are absent; `is_authenticated` is derived from
/// that rather than stored, so there is no third flag to drift.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    credentials: Option<(String, UserProfile)>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub(crate) fn signed_in(token: String, user: UserProfile) -> Self {
        Self {
            credentials: Some((token, user)),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.credentials.as_ref().map(|(token, _)| token.as_str())
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.credentials.as_ref().map(|(_, user)| user)
    }
}
