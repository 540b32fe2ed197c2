//! The screen graph.
//!
//! A screen is a named UI state the dispatcher can be in, distinct from any
//! URL though the snake_case names double as route segments. Unknown names
//! resolve to the landing screen rather than an error state.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::role::Role;

/// Every screen the portal can show.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Screen {
    // Public
    Welcome,
    Login,
    Register,
    // Student
    StudentOnboarding,
    StudentDashboard,
    ResumeOptimizer,
    MockInterview,
    JobListings,
    ApplicationTracker,
    StudentProfile,
    // Recruiter
    RecruiterDashboard,
    CreateJob,
    ManageJobs,
    CandidateReview,
    CompanyProfile,
    // Shared by students and recruiters
    Messaging,
    // Admin
    AdminDashboard,
    JobApproval,
    UserManagement,
    ContentManagement,
}

const STUDENT_ONLY: &[Role] = &[Role::Student];
const RECRUITER_ONLY: &[Role] = &[Role::Recruiter];
const ADMIN_ONLY: &[Role] = &[Role::Admin];
const STUDENT_OR_RECRUITER: &[Role] = &[Role::Student, Role::Recruiter];

impl Screen {
    /// Parses a screen name, falling back to the landing screen for
    /// anything unknown or unmapped.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or(Screen::Welcome)
    }

    /// The roles allowed to see this screen; `None` means public.
    pub fn allowed_roles(self) -> Option<&'static [Role]> {
        match self {
            Screen::Welcome | Screen::Login | Screen::Register => None,
            Screen::StudentOnboarding
            | Screen::StudentDashboard
            | Screen::ResumeOptimizer
            | Screen::MockInterview
            | Screen::JobListings
            | Screen::ApplicationTracker
            | Screen::StudentProfile => Some(STUDENT_ONLY),
            Screen::RecruiterDashboard
            | Screen::CreateJob
            | Screen::ManageJobs
            | Screen::CandidateReview
            | Screen::CompanyProfile => Some(RECRUITER_ONLY),
            Screen::Messaging => Some(STUDENT_OR_RECRUITER),
            Screen::AdminDashboard
            | Screen::JobApproval
            | Screen::UserManagement
            | Screen::ContentManagement => Some(ADMIN_ONLY),
        }
    }

    /// The default dashboard for a role, used when an authenticated user
    /// revisits a public screen.
    pub fn dashboard(role: Role) -> Self {
        match role {
            Role::Student => Screen::StudentDashboard,
            Role::Recruiter => Screen::RecruiterDashboard,
            Role::Admin => Screen::AdminDashboard,
        }
    }

    /// The first screen after a successful login. Students land on
    /// onboarding; the other roles go straight to their dashboard.
    pub fn post_login(role: Role) -> Self {
        match role {
            Role::Student => Screen::StudentOnboarding,
            Role::Recruiter => Screen::RecruiterDashboard,
            Role::Admin => Screen::AdminDashboard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        assert_eq!(Screen::ResumeOptimizer.to_string(), "resume_optimizer");
        assert_eq!(Screen::from_name("resume_optimizer"), Screen::ResumeOptimizer);
        assert_eq!(Screen::from_name("job_approval"), Screen::JobApproval);
    }

    #[test]
    fn test_unknown_names_land_on_welcome() {
        assert_eq!(Screen::from_name("no_such_screen"), Screen::Welcome);
        assert_eq!(Screen::from_name(""), Screen::Welcome);
    }

    #[test]
    fn test_gating_classification() {
        assert!(Screen::Welcome.allowed_roles().is_none());
        assert_eq!(Screen::JobListings.allowed_roles(), Some(STUDENT_ONLY));
        assert_eq!(Screen::Messaging.allowed_roles(), Some(STUDENT_OR_RECRUITER));
        assert_eq!(Screen::UserManagement.allowed_roles(), Some(ADMIN_ONLY));
    }
}
