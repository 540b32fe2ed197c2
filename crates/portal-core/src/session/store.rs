//! The session store: the single authoritative holder of identity, role,
//! profile and the text-generation credential.

use std::sync::{Arc, RwLock};

use crate::error::{PortalError, Result};
use crate::role::Role;
use crate::session::model::{Profile, Session, UserIdentity};
use crate::session::persistence::{CredentialStore, IdentityPersistence};

#[derive(Debug, Default)]
struct StoreState {
    session: Session,
    api_credential: String,
}

/// A cheap-to-clone handle to the process-wide session state.
///
/// Every clone observes the same instance; screens read it synchronously on
/// each transition, so there are no stale copies. There is one logical
/// writer at a time (the event handler currently executing), the lock only
/// guards against readers observing a half-applied mutation.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<StoreState>>,
}

impl SessionStore {
    /// Creates an empty store (logged out, no credential).
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the current session.
    pub fn session(&self) -> Session {
        self.inner.read().expect("session lock poisoned").session.clone()
    }

    /// Returns the current role, if authenticated.
    pub fn role(&self) -> Option<Role> {
        self.inner.read().expect("session lock poisoned").session.role
    }

    /// True when an identity is present.
    pub fn is_authenticated(&self) -> bool {
        self.inner
            .read()
            .expect("session lock poisoned")
            .session
            .is_authenticated()
    }

    /// Replaces the session with the given identity and optional profile.
    ///
    /// The role is always derived from `user.user_type`, never supplied
    /// separately, which is what keeps the role-and-user invariant. Passing
    /// `None` for the user with a profile attached is rejected; passing
    /// `None` for both is equivalent to [`clear_session`](Self::clear_session).
    pub fn set_session(
        &self,
        user: Option<UserIdentity>,
        profile: Option<Profile>,
    ) -> Result<()> {
        let mut state = self.inner.write().expect("session lock poisoned");
        match user {
            Some(user) => {
                state.session = Session {
                    role: Some(user.user_type),
                    user: Some(user),
                    profile,
                };
            }
            None if profile.is_some() => {
                return Err(PortalError::invalid_state(
                    "cannot attach a profile without a user",
                ));
            }
            None => {
                state.session = Session::empty();
            }
        }
        debug_assert!(state.session.invariant_holds());
        Ok(())
    }

    /// Resets role, user and profile unconditionally.
    ///
    /// Idempotent and infallible: logout must be able to wipe local state
    /// even when the backend logout call has already failed.
    pub fn clear_session(&self) {
        let mut state = self.inner.write().expect("session lock poisoned");
        state.session = Session::empty();
    }

    /// Restores a previously persisted identity, once at startup.
    ///
    /// Returns whether a session was restored. Malformed persisted data is
    /// reported by the persistence layer as absent and leaves the store
    /// logged out.
    pub fn restore(&self, persistence: &dyn IdentityPersistence) -> Result<bool> {
        match persistence.load()? {
            Some((user, profile)) => {
                self.set_session(Some(user), profile)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    // ============================================================================
    // Text-generation credential
    // ============================================================================

    /// The current credential ("" when unset).
    pub fn api_credential(&self) -> String {
        self.inner
            .read()
            .expect("session lock poisoned")
            .api_credential
            .clone()
    }

    /// Loads the persisted credential into the store, once at startup.
    pub fn restore_credential(&self, creds: &dyn CredentialStore) -> Result<()> {
        if let Some(value) = creds.load()? {
            self.inner
                .write()
                .expect("session lock poisoned")
                .api_credential = value;
        }
        Ok(())
    }

    /// Sets the credential and writes it through to persistence.
    ///
    /// The credential lifecycle is independent of the login session: it is
    /// not touched by [`clear_session`](Self::clear_session).
    pub fn set_api_credential(
        &self,
        credential: impl Into<String>,
        creds: &dyn CredentialStore,
    ) -> Result<()> {
        let credential = credential.into();
        creds.store(&credential)?;
        self.inner
            .write()
            .expect("session lock poisoned")
            .api_credential = credential;
        Ok(())
    }
}
