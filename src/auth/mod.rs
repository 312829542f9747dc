//! Credential exchange and sign-out.
//!
//! `login` is the only path that creates a session from the network; a failed
//! login leaves whatever session existed before untouched.

use chrono::Utc;
use tracing::{info, warn};

use crate::api::{AuthApi, Credentials};
use crate::error::ArmsResult;
use crate::session::{SessionStore, UserProfile};

/// Exchange credentials for a token and persist the resulting session
pub async fn login(api: &AuthApi, store: &mut SessionStore, credentials: &Credentials) -> ArmsResult<UserProfile> {
    credentials.validate()?;

    let grant = match api.login(credentials).await {
        Ok(grant) => grant,
        Err(err) => {
            warn!(username = %credentials.username, error = %err, "login failed");
            return Err(err);
        }
    };

    let profile = UserProfile::from_login(&credentials.username, &grant, Utc::now());
    store.save(grant.access_token, profile.clone())?;
    info!(username = %profile.username, roles = ?profile.roles, "logged in");
    Ok(profile)
}

/// Local sign-out; the backend is not contacted
pub fn logout(store: &mut SessionStore) {
    if let Some(user) = store.session().user() {
        info!(username = %user.username, "logged out");
    }
    store.clear();
}
