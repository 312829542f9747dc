use serde::{Deserialize, Serialize};
use std::fmt;

use super::gateway::{ApiGateway, RequestOptions};
use crate::error::{ArmsError, ArmsResult};

#[derive(Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Blank fields are rejected before any request is made
    pub fn validate(&self) -> ArmsResult<()> {
        if self.username.trim().is_empty() || self.password.trim().is_empty() {
            return Err(ArmsError::validation("Please enter both username and password"));
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Login payload in either of the backend's spellings
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginPayload {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    expires_in_ms: Option<i64>,
    #[serde(default)]
    roles: Option<Vec<String>>,
}

/// Canonical result of a successful login exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginGrant {
    pub access_token: String,
    pub token_type: Option<String>,
    pub expires_in_ms: Option<i64>,
    pub roles: Vec<String>,
}

impl TryFrom<LoginPayload> for LoginGrant {
    type Error = ArmsError;

    fn try_from(payload: LoginPayload) -> Result<Self, Self::Error> {
        let access_token = payload
            .access_token
            .filter(|t| !t.is_empty())
            .or(payload.token.filter(|t| !t.is_empty()))
            .ok_or_else(|| ArmsError::decode("login response did not include an access token"))?;

        Ok(Self {
            access_token,
            token_type: payload.token_type,
            expires_in_ms: payload.expires_in_ms,
            roles: payload.roles.unwrap_or_default(),
        })
    }
}

#[derive(Clone)]
pub struct AuthApi {
    gateway: ApiGateway,
}

impl AuthApi {
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    /// `POST /auth/login`; no session state is touched here
    pub async fn login(&self, credentials: &Credentials) -> ArmsResult<LoginGrant> {
        let payload: LoginPayload = self
            .gateway
            .fetch("/auth/login", RequestOptions::post(credentials)?, None)
            .await?;
        LoginGrant::try_from(payload)
    }
}
