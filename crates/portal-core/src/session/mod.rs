//! Session state: models, the shared store, persistence seams and the
//! process-wide accessor.

pub mod context;
mod model;
mod persistence;
mod store;

pub use model::{Profile, RecruiterProfile, Session, StudentProfile, UserIdentity};
pub use persistence::{CredentialStore, IdentityPersistence};
pub use store::SessionStore;
