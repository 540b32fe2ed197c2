//! Persisted key/value state.

mod atomic_json;
mod local_store;

pub use atomic_json::{AtomicJsonFile, StorageError};
pub use local_store::LocalStore;
