//! User roles and the login-tab role hint.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// The three account types known to the portal.
///
/// The role determines which part of the screen graph a session may reach.
/// Wire format and persisted format are the lowercase names used by the
/// authentication backend (`user_type` field).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Student,
    Recruiter,
    Admin,
}

/// The role preselected on the login/registration tabs.
///
/// This is a display hint only: it never grants or denies access, and the
/// admin role has no tab (administrators still sign in through the same
/// login screen).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LoginRole {
    #[default]
    Student,
    Recruiter,
}

impl From<LoginRole> for Role {
    fn from(role: LoginRole) -> Self {
        match role {
            LoginRole::Student => Role::Student,
            LoginRole::Recruiter => Role::Recruiter,
        }
    }
}

impl Role {
    /// Returns the login-tab hint for this role, if it has one.
    pub fn login_tab(self) -> Option<LoginRole> {
        match self {
            Role::Student => Some(LoginRole::Student),
            Role::Recruiter => Some(LoginRole::Recruiter),
            Role::Admin => None,
        }
    }
}
