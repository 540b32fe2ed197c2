//! Session domain models.
//!
//! The session is the single source of truth for who is signed in. It is
//! created empty at process start, populated by login/registration or by
//! restoring persisted identity, and cleared entirely on logout.

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// The authenticated user's identity as the backend reports it.
///
/// Owned exclusively by the session; immutable once set except by a fresh
/// login. Field names match the backend wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub user_type: Role,
}

/// Role-specific profile extension returned alongside the identity.
///
/// A weak, optional relation: navigation decisions never require it. The
/// backend returns a shape determined by the account type, hence the
/// untagged representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Profile {
    Student(StudentProfile),
    Recruiter(RecruiterProfile),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub student_id: String,
    pub university: String,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub year_of_study: Option<i32>,
    #[serde(default)]
    pub phone_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecruiterProfile {
    pub company_name: String,
    #[serde(default)]
    pub company_website: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub company_size: String,
    #[serde(default)]
    pub industry: String,
}

/// The current session: role, identity and optional profile.
///
/// Invariant: `role` and `user` are both `None` or both `Some`. The store
/// enforces this on every mutation; a session observed violating it is a
/// bug, never valid input.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Session {
    pub role: Option<Role>,
    pub user: Option<UserIdentity>,
    pub profile: Option<Profile>,
}

impl Session {
    /// The empty (logged-out) session.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when an identity is present.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// The role-and-user pairing invariant.
    pub fn invariant_holds(&self) -> bool {
        self.role.is_some() == self.user.is_some()
    }
}
