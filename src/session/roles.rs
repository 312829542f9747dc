use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Session;

/// Prefix some backends put in front of role names (`ROLE_REGISTRAR`)
pub const ROLE_PREFIX: &str = "ROLE_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Registrar,
    Faculty,
    Student,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Registrar, Role::Faculty, Role::Student];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Registrar => "REGISTRAR",
            Role::Faculty => "FACULTY",
            Role::Student => "STUDENT",
        }
    }
}

impl AsRef<str> for Role {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bare = normalize_role(s.trim());
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == bare)
            .ok_or_else(|| format!("unknown role '{}'", s))
    }
}

/// Strip the `ROLE_` prefix when present; matching stays case-sensitive
pub fn normalize_role(role: &str) -> &str {
    role.strip_prefix(ROLE_PREFIX).unwrap_or(role)
}

impl Session {
    /// Presentation guard only; the backend re-checks every request
    pub fn has_role(&self, role: &str) -> bool {
        let Some(user) = self.user() else {
            return false;
        };
        let wanted = normalize_role(role);
        user.roles.iter().any(|held| normalize_role(held) == wanted)
    }

    /// True on the first role the user holds
    pub fn has_any_role<I, R>(&self, roles: I) -> bool
    where
        I: IntoIterator<Item = R>,
        R: AsRef<str>,
    {
        roles.into_iter().any(|role| self.has_role(role.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::UserProfile;

    fn session_with(roles: &[&str]) -> Session {
        let user = UserProfile {
            username: "u".to_string(),
            display_name: "u".to_string(),
            email: "u".to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            token_type: None,
            token_expiry_ms: None,
            issued_at: None,
        };
        Session::signed_in("t".to_string(), user)
    }

    #[test]
    fn prefixed_role_matches_both_spellings() {
        let session = session_with(&["ROLE_REGISTRAR"]);
        assert!(session.has_role("REGISTRAR"));
        assert!(session.has_role("ROLE_REGISTRAR"));
        assert!(!session.has_role("ADMIN"));
    }

    #[test]
    fn bare_role_matches_both_spellings() {
        let session = session_with(&["STUDENT"]);
        assert!(session.has_role("STUDENT"));
        assert!(session.has_role("ROLE_STUDENT"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let session = session_with(&["ROLE_REGISTRAR"]);
        assert!(!session.has_role("registrar"));
        assert!(!session.has_role("role_REGISTRAR"));
    }

    #[test]
    fn anonymous_session_has_no_roles() {
        let session = Session::anonymous();
        for role in ["ADMIN", "REGISTRAR", "FACULTY", "STUDENT", "ROLE_ADMIN", ""] {
            assert!(!session.has_role(role));
        }
        assert!(!session.has_any_role(Role::ALL));
    }

    #[test]
    fn has_any_role_needs_one_match() {
        let session = session_with(&["FACULTY"]);
        assert!(session.has_any_role([Role::Admin, Role::Faculty]));
        assert!(!session.has_any_role([Role::Admin, Role::Registrar]));
        assert!(!session.has_any_role(Vec::<String>::new()));
    }

    #[test]
    fn role_parses_with_or_without_prefix() {
        assert_eq!("ROLE_ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("FACULTY".parse::<Role>().unwrap(), Role::Faculty);
        assert!("faculty".parse::<Role>().is_err());
    }
}
