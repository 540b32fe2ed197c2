//! Storage seams for the session store.
//!
//! The store itself is pure state; reading and writing the browser-local
//! key/value files is delegated through these traits, implemented in
//! `portal-infrastructure`.

use crate::error::Result;
use crate::session::{Profile, UserIdentity};

/// Persisted identity data (`user_data` / `user_profile` keys).
///
/// `load` must treat malformed persisted data as absent: a corrupt file is
/// indistinguishable from a logged-out state, never an error that blocks
/// startup.
pub trait IdentityPersistence: Send + Sync {
    /// Reads the stored identity and profile, if any.
    fn load(&self) -> Result<Option<(UserIdentity, Option<Profile>)>>;

    /// Stores the identity (and profile when present).
    fn store(&self, user: &UserIdentity, profile: Option<&Profile>) -> Result<()>;

    /// Removes all persisted identity data, including any auth token.
    /// Must succeed on an already-empty store.
    fn clear(&self) -> Result<()>;
}

/// Persisted text-generation credential (`gemini-api-key` key).
///
/// Deliberately separate from [`IdentityPersistence`]: the credential is a
/// local tool configuration, not an authentication artifact, and survives
/// logout and login alike.
pub trait CredentialStore: Send + Sync {
    /// Reads the stored credential; absent reads as `None`.
    fn load(&self) -> Result<Option<String>>;

    /// Writes the credential. Called on every change.
    fn store(&self, credential: &str) -> Result<()>;
}
