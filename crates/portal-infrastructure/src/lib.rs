//! File-backed persistence for the placement portal: the local key/value
//! store and the identity/credential seams consumed by `portal-core`.

pub mod identity;
pub mod paths;
pub mod storage;

pub use crate::identity::{LocalCredentialStore, LocalIdentityStore};
pub use crate::storage::{AtomicJsonFile, LocalStore, StorageError};
