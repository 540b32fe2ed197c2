//! Core domain logic for the placement portal client: the session store,
//! role-gated navigation, the screen dispatcher and the form state
//! machines. Pure logic only; persistence and HTTP live in the sibling
//! crates.

pub mod error;
pub mod forms;
pub mod gateway;
pub mod navigation;
pub mod role;
pub mod session;

// Re-export common error type
pub use error::{PortalError, Result};
