//! File-backed implementations of the session persistence seams.
//!
//! Keys mirror the browser build's `localStorage` layout: `user_data`,
//! `user_profile`, `auth_token` for the login session, `gemini-api-key`
//! for the text-generation credential.

use portal_core::Result;
use portal_core::session::{CredentialStore, IdentityPersistence, Profile, UserIdentity};

use crate::storage::LocalStore;

pub const USER_DATA_KEY: &str = "user_data";
pub const USER_PROFILE_KEY: &str = "user_profile";
pub const AUTH_TOKEN_KEY: &str = "auth_token";
pub const API_CREDENTIAL_KEY: &str = "gemini-api-key";

/// Persisted identity: `user_data` + `user_profile` + `auth_token`.
pub struct LocalIdentityStore {
    store: LocalStore,
}

impl LocalIdentityStore {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    /// The opaque bearer token, when the backend issued one.
    pub fn auth_token(&self) -> Result<Option<String>> {
        Ok(self.store.get_string(AUTH_TOKEN_KEY).map_err(portal_core::PortalError::from)?)
    }

    pub fn set_auth_token(&self, token: &str) -> Result<()> {
        Ok(self.store.set_string(AUTH_TOKEN_KEY, token)?)
    }
}

impl IdentityPersistence for LocalIdentityStore {
    fn load(&self) -> Result<Option<(UserIdentity, Option<Profile>)>> {
        let Some(user) = self.store.get::<UserIdentity>(USER_DATA_KEY)? else {
            return Ok(None);
        };
        // The profile is a weak relation: a malformed or missing profile
        // never blocks restoring the identity.
        let profile = self.store.get::<Profile>(USER_PROFILE_KEY)?;
        Ok(Some((user, profile)))
    }

    fn store(&self, user: &UserIdentity, profile: Option<&Profile>) -> Result<()> {
        self.store.set(USER_DATA_KEY, user)?;
        match profile {
            Some(profile) => self.store.set(USER_PROFILE_KEY, profile)?,
            None => self.store.remove(USER_PROFILE_KEY)?,
        }
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.store.remove(USER_DATA_KEY)?;
        self.store.remove(USER_PROFILE_KEY)?;
        self.store.remove(AUTH_TOKEN_KEY)?;
        Ok(())
    }
}

/// Persisted text-generation credential, independent of the login session.
pub struct LocalCredentialStore {
    store: LocalStore,
}

impl LocalCredentialStore {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }
}

impl CredentialStore for LocalCredentialStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.store.get_string(API_CREDENTIAL_KEY)?)
    }

    fn store(&self, credential: &str) -> Result<()> {
        Ok(self.store.set_string(API_CREDENTIAL_KEY, credential)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::role::Role;
    use portal_core::session::SessionStore;
    use tempfile::TempDir;

    fn identity() -> UserIdentity {
        UserIdentity {
            id: 11,
            email: "bob@edu.com".into(),
            first_name: "Bob".into(),
            last_name: "Williams".into(),
            user_type: Role::Student,
        }
    }

    fn store_in(dir: &TempDir) -> LocalStore {
        LocalStore::with_dir(dir.path().to_path_buf())
    }

    #[test]
    fn test_identity_round_trip_through_fresh_store() {
        let dir = TempDir::new().unwrap();
        let persistence = LocalIdentityStore::new(store_in(&dir));

        let session = SessionStore::new();
        session.set_session(Some(identity()), None).unwrap();
        let snapshot = session.session();
        persistence
            .store(snapshot.user.as_ref().unwrap(), snapshot.profile.as_ref())
            .unwrap();

        // A brand-new store instance restores an equivalent role/user pair.
        let restored = SessionStore::new();
        let persistence = LocalIdentityStore::new(store_in(&dir));
        assert!(restored.restore(&persistence).unwrap());
        assert_eq!(restored.session().role, Some(Role::Student));
        assert_eq!(restored.session().user, Some(identity()));
    }

    #[test]
    fn test_malformed_identity_restores_as_logged_out() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(USER_DATA_KEY), "not json at all").unwrap();

        let persistence = LocalIdentityStore::new(store_in(&dir));
        let session = SessionStore::new();
        assert!(!session.restore(&persistence).unwrap());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_clear_wipes_all_three_keys_and_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let persistence = LocalIdentityStore::new(store_in(&dir));
        persistence.store(&identity(), None).unwrap();
        persistence.set_auth_token("tok-123").unwrap();

        persistence.clear().unwrap();
        persistence.clear().unwrap();

        assert!(persistence.load().unwrap().is_none());
        assert!(persistence.auth_token().unwrap().is_none());
    }

    #[test]
    fn test_credential_survives_identity_clear() {
        let dir = TempDir::new().unwrap();
        let creds = LocalCredentialStore::new(store_in(&dir));
        let persistence = LocalIdentityStore::new(store_in(&dir));

        let session = SessionStore::new();
        session.set_api_credential("AIza-local-key", &creds).unwrap();
        persistence.store(&identity(), None).unwrap();

        // Logout path: identity goes, the credential stays.
        persistence.clear().unwrap();
        let fresh = SessionStore::new();
        fresh.restore_credential(&creds).unwrap();
        assert_eq!(fresh.api_credential(), "AIza-local-key");
    }
}
