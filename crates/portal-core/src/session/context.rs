//! Process-wide accessor for the session store.
//!
//! Most code receives the store by parameter; this accessor exists for the
//! outermost shell where threading a handle through every screen is not
//! practical. Reading it before installation is an explicit error, not a
//! panic.

use once_cell::sync::OnceCell;

use crate::error::{PortalError, Result};
use crate::session::store::SessionStore;

static CONTEXT: OnceCell<SessionStore> = OnceCell::new();

/// Installs the store as the process-wide session context.
///
/// May be called exactly once, at startup.
pub fn install(store: SessionStore) -> Result<()> {
    CONTEXT
        .set(store)
        .map_err(|_| PortalError::invalid_state("session context is already installed"))
}

/// Returns a handle to the installed store.
///
/// Fails with `InvalidState` when [`install`] has not run yet.
pub fn current() -> Result<SessionStore> {
    CONTEXT
        .get()
        .cloned()
        .ok_or_else(|| PortalError::invalid_state("session context must be installed before use"))
}
