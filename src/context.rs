use std::sync::Arc;

use crate::api::{ArmsApi, Credentials};
use crate::auth;
use crate::config::AppConfig;
use crate::error::{ArmsError, ArmsResult};
use crate::roster::Roster;
use crate::session::{ensure_section, Section, Session, SessionStore, UserProfile};
use crate::storage::FileStore;

/// Everything a command needs, constructed once at startup and passed down
pub struct AppContext {
    api: ArmsApi,
    session: SessionStore,
}

impl AppContext {
    pub fn new(api: ArmsApi, session: SessionStore) -> Self {
        Self { api, session }
    }

    /// HTTP transport against the configured backend, session restored from the config directory
    pub fn from_config(config: &AppConfig) -> ArmsResult<Self> {
        let api = ArmsApi::http(&config.api)?;
        let dir = config.storage.resolve_dir().ok_or_else(|| {
            ArmsError::Storage("no config directory: set ARMS_CONFIG_DIR or HOME".to_string())
        })?;
        let storage = FileStore::open(dir)?;
        Ok(Self::new(api, SessionStore::open(Arc::new(storage))))
    }

    pub fn api(&self) -> &ArmsApi {
        &self.api
    }

    pub fn session(&self) -> &Session {
        self.session.session()
    }

    pub async fn login(&mut self, credentials: &Credentials) -> ArmsResult<UserProfile> {
        auth::login(&self.api.auth, &mut self.session, credentials).await
    }

    pub fn logout(&mut self) {
        auth::logout(&mut self.session);
    }

    pub fn require_token(&self) -> ArmsResult<&str> {
        self.session().token().ok_or(ArmsError::Unauthenticated)
    }

    /// Token for a request made on behalf of `section`, refused locally when the section is hidden
    pub fn require_section(&self, section: Section) -> ArmsResult<&str> {
        ensure_section(self.session(), section)?;
        self.require_token()
    }

    pub fn roster(&self) -> Roster {
        Roster::new(self.api.registrar.clone())
    }
}
