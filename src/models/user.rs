use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::error::{ArmsError, ArmsResult};

/// Account as listed by the admin endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn enabled_by_default() -> bool {
    true
}

/// Body of `POST /admin/users`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub roles: Vec<String>,
}

impl NewUser {
    pub fn validate(&self) -> ArmsResult<()> {
        if self.username.trim().is_empty() || self.password.trim().is_empty() {
            return Err(ArmsError::validation("Username and password are required"));
        }
        if self.roles.is_empty() {
            return Err(ArmsError::validation("At least one role is required"));
        }
        Ok(())
    }
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("email", &self.email)
            .field("roles", &self.roles)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn users_default_to_enabled() {
        let user: User = serde_json::from_value(json!({ "username": "fac1", "roles": ["FACULTY"] })).unwrap();
        assert!(user.enabled);
    }

    #[test]
    fn new_user_debug_hides_password() {
        let user = NewUser {
            username: "reg2".to_string(),
            password: "s3cret".to_string(),
            email: None,
            roles: vec!["REGISTRAR".to_string()],
        };
        assert!(!format!("{:?}", user).contains("s3cret"));
        assert!(user.validate().is_ok());
    }
}
