//! Form state machines for login and registration.
//!
//! Each form owns its field values, a field-keyed error map and a phase.
//! Validation is synchronous and local; only a form that passed validation
//! ever produces a gateway call, and a form already submitting ignores
//! further submit attempts.

mod login;
mod registration;
pub mod rules;

pub use login::LoginForm;
pub use registration::{RegistrationForm, fields};

/// Error-map key for the single non-field submission error.
pub const SUBMIT_ERROR: &str = "submit";

/// Lifecycle of a form.
///
/// `Validating` only exists while the synchronous rules run; callers
/// observe `Editing` (rules failed), `Submitting` (rules passed, request
/// in flight), and the two terminal outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}
