//! Dashboard summaries and the admin user directory.
//!
//! Static demo figures mirroring what the backend will eventually serve;
//! the shapes are what matter to the screens.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct StudentSummary {
    pub skills: Vec<String>,
    pub applications_sent: u32,
    pub interviews_scheduled: u32,
    pub profile_views: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecruiterSummary {
    pub active_listings: u32,
    pub new_applicants: u32,
    pub messages: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlyCount {
    pub month: String,
    pub applications: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminSummary {
    pub total_users: u32,
    pub active_jobs: u32,
    pub pending_approvals: u32,
    pub success_rate_percent: u32,
    pub monthly_applications: Vec<MonthlyCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryEntry {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserDirectory {
    pub students: Vec<DirectoryEntry>,
    pub recruiters: Vec<DirectoryEntry>,
}

pub fn student_summary() -> StudentSummary {
    StudentSummary {
        skills: [
            "React",
            "TypeScript",
            "Node.js",
            "Figma",
            "SQL",
            "GraphQL",
            "Docker",
        ]
        .iter()
        .map(|skill| skill.to_string())
        .collect(),
        applications_sent: 12,
        interviews_scheduled: 3,
        profile_views: 45,
    }
}

pub fn recruiter_summary() -> RecruiterSummary {
    RecruiterSummary {
        active_listings: 8,
        new_applicants: 24,
        messages: 5,
    }
}

pub fn admin_summary() -> AdminSummary {
    let months = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];
    let counts = [65, 59, 80, 81, 56, 55];
    AdminSummary {
        total_users: 1234,
        active_jobs: 56,
        pending_approvals: 8,
        success_rate_percent: 78,
        monthly_applications: months
            .iter()
            .zip(counts)
            .map(|(month, applications)| MonthlyCount {
                month: month.to_string(),
                applications,
            })
            .collect(),
    }
}

/// The admin user-management directory.
pub fn user_directory() -> UserDirectory {
    let entry = |name: &str, email: &str| DirectoryEntry {
        name: name.to_string(),
        email: email.to_string(),
    };
    UserDirectory {
        students: vec![
            entry("Alice Johnson", "alice@edu.com"),
            entry("Bob Williams", "bob@edu.com"),
        ],
        recruiters: vec![entry("Charles Davis", "charles@techsolutions.com")],
    }
}
