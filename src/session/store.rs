use std::sync::Arc;

use tracing::{debug, info, warn};

use super::{Session, UserProfile};
use crate::error::ArmsResult;
use crate::storage::KeyValueStore;

pub const AUTH_TOKEN_KEY: &str = "authToken";
pub const CURRENT_USER_KEY: &str = "currentUser";

/// Owns the in-memory [`Session`] and its two persisted entries.
///
/// The session changes only through `restore`, `save` and `clear`.
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
    session: Session,
}

impl SessionStore {
    /// An anonymous store over `storage`; nothing is read yet
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            storage,
            session: Session::anonymous(),
        }
    }

    /// Construct and immediately restore whatever was persisted
    pub fn open(storage: Arc<dyn KeyValueStore>) -> Self {
        let mut store = Self::new(storage);
        store.restore();
        store
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Load the persisted session; never fails.
    ///
    /// A missing or unreadable entry on either key clears both and leaves the
    /// session anonymous.
    pub fn restore(&mut self) -> &Session {
        match self.read_persisted() {
            Ok(Some((token, user))) => {
                debug!(username = %user.username, "restored session");
                self.session = Session::signed_in(token, user);
            }
            Ok(None) => {
                debug!("no persisted session");
                self.clear();
            }
            Err(reason) => {
                warn!(%reason, "discarding persisted session");
                self.clear();
            }
        }
        &self.session
    }

    fn read_persisted(&self) -> Result<Option<(String, UserProfile)>, String> {
        let token = self.storage.get(AUTH_TOKEN_KEY).map_err(|e| e.to_string())?;
        let user = self.storage.get(CURRENT_USER_KEY).map_err(|e| e.to_string())?;

        let (token, user) = match (token, user) {
            (Some(token), Some(user)) => (token, user),
            (None, None) => return Ok(None),
            _ => return Err("only one of token and profile was stored".to_string()),
        };
        if token.trim().is_empty() {
            return Err("stored token is empty".to_string());
        }
        let user: UserProfile =
            serde_json::from_str(&user).map_err(|e| format!("stored profile is unreadable: {}", e))?;
        Ok(Some((token, user)))
    }

    /// Persist both entries, then sign in.
    ///
    /// On a storage failure the in-memory session is untouched and a token
    /// written before a failed profile write is removed again.
    pub fn save(&mut self, token: String, user: UserProfile) -> ArmsResult<&Session> {
        let serialized = serde_json::to_string(&user)?;

        self.storage.set(AUTH_TOKEN_KEY, &token)?;
        if let Err(err) = self.storage.set(CURRENT_USER_KEY, &serialized) {
            if let Err(rollback) = self.storage.remove(AUTH_TOKEN_KEY) {
                warn!(error = %rollback, "could not roll back token after failed profile write");
            }
            return Err(err.into());
        }

        info!(username = %user.username, roles = ?user.roles, "session saved");
        self.session = Session::signed_in(token, user);
        Ok(&self.session)
    }

    /// Sign out and remove both entries; always succeeds in memory
    pub fn clear(&mut self) {
        self.session = Session::anonymous();
        for key in [AUTH_TOKEN_KEY, CURRENT_USER_KEY] {
            if let Err(err) = self.storage.remove(key) {
                warn!(key, error = %err, "could not remove persisted session entry");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::LoginGrant;
    use crate::error::ArmsError;
    use crate::storage::{MemoryStore, StorageError};
    use chrono::Utc;

    fn profile(username: &str, roles: &[&str]) -> UserProfile {
        let grant = LoginGrant {
            access_token: "t".to_string(),
            token_type: Some("Bearer".to_string()),
            expires_in_ms: Some(3_600_000),
            roles: roles.iter().map(|r| r.to_string()).collect(),
        };
        UserProfile::from_login(username, &grant, Utc::now())
    }

    fn store_over(storage: &MemoryStore) -> SessionStore {
        SessionStore::new(Arc::new(storage.clone()))
    }

    #[test]
    fn save_then_restore_round_trips_through_storage() {
        let storage = MemoryStore::new();
        let mut store = store_over(&storage);
        store.save("t1".to_string(), profile("stu1", &["STUDENT"])).unwrap();
        assert!(store.is_authenticated());
        assert_eq!(storage.get(AUTH_TOKEN_KEY).unwrap().as_deref(), Some("t1"));

        let reopened = SessionStore::open(Arc::new(storage.clone()));
        let session = reopened.session();
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("t1"));
        assert_eq!(session.user().unwrap().username, "stu1");
    }

    #[test]
    fn corrupt_profile_clears_both_entries() {
        let storage = MemoryStore::new();
        storage.set(AUTH_TOKEN_KEY, "t1").unwrap();
        storage.set(CURRENT_USER_KEY, "{not json").unwrap();

        let store = SessionStore::open(Arc::new(storage.clone()));
        assert!(!store.is_authenticated());
        assert_eq!(storage.get(AUTH_TOKEN_KEY).unwrap(), None);
        assert_eq!(storage.get(CURRENT_USER_KEY).unwrap(), None);
        assert!(storage.is_empty());
    }

    #[test]
    fn token_without_profile_is_discarded() {
        let storage = MemoryStore::new();
        storage.set(AUTH_TOKEN_KEY, "t1").unwrap();

        let store = SessionStore::open(Arc::new(storage.clone()));
        assert!(!store.is_authenticated());
        assert!(storage.is_empty());
    }

    #[test]
    fn profile_without_username_is_discarded() {
        let storage = MemoryStore::new();
        storage.set(AUTH_TOKEN_KEY, "t1").unwrap();
        storage.set(CURRENT_USER_KEY, r#"{"roles":["ADMIN"]}"#).unwrap();

        let store = SessionStore::open(Arc::new(storage.clone()));
        assert!(!store.is_authenticated());
        assert!(storage.is_empty());
    }

    #[test]
    fn clear_signs_out_and_removes_entries() {
        let storage = MemoryStore::new();
        let mut store = store_over(&storage);
        store.save("t1".to_string(), profile("admin", &["ADMIN"])).unwrap();

        store.clear();
        assert!(!store.is_authenticated());
        assert_eq!(store.session(), &Session::anonymous());
        assert!(storage.is_empty());
    }

    /// Accepts the token write and refuses everything else
    struct ProfileWriteFails {
        inner: MemoryStore,
    }

    impl KeyValueStore for ProfileWriteFails {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if key == CURRENT_USER_KEY {
                return Err(StorageError::Unavailable("disk full".to_string()));
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn failed_save_keeps_previous_session_and_rolls_back_token() {
        let inner = MemoryStore::new();
        let mut store = SessionStore::new(Arc::new(ProfileWriteFails { inner: inner.clone() }));

        let err = store.save("t1".to_string(), profile("stu1", &["STUDENT"])).unwrap_err();
        assert!(matches!(err, ArmsError::Storage(_)));
        assert!(!store.is_authenticated());
        assert!(inner.is_empty());
    }
}
