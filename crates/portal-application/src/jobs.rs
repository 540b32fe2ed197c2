//! The job board: postings, the approval workflow and the student-visible
//! listings filter.
//!
//! A recruiter submission always starts pending; only an admin decision
//! moves it to approved or rejected, and students only ever see approved
//! postings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use portal_core::{PortalError, Result};

/// Where a posting sits in the approval workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Approved,
    Rejected,
}

/// One job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub description: String,
    /// Match score shown to students, when one has been computed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_percentage: Option<u8>,
    pub status: JobStatus,
    pub submitted_at: DateTime<Utc>,
}

/// In-memory job board backing the listings, manage-jobs and approval
/// screens.
#[derive(Debug, Default)]
pub struct JobBoard {
    postings: Vec<JobPosting>,
}

impl JobBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A board seeded with the demo listings.
    pub fn with_demo_data() -> Self {
        let mut board = Self::new();
        let demo = [
            (
                "Frontend Developer",
                "Tech Solutions Inc.",
                "Developing and maintaining user-facing features using React.js.",
                Some(92),
                JobStatus::Approved,
            ),
            (
                "Backend Engineer",
                "Data Systems",
                "Building server-side logic, database interactions and APIs.",
                Some(85),
                JobStatus::Approved,
            ),
            (
                "UI/UX Designer",
                "Creative Minds",
                "Designing engaging and user-friendly interfaces for web and mobile.",
                Some(78),
                JobStatus::Approved,
            ),
            (
                "Data Scientist",
                "Analytics Corp.",
                "Utilizing statistical methods and machine learning to analyze large datasets.",
                None,
                JobStatus::Pending,
            ),
            (
                "Product Manager",
                "Innovate Co.",
                "Defining product vision, strategy, and roadmap.",
                None,
                JobStatus::Approved,
            ),
        ];
        for (title, company, description, match_percentage, status) in demo {
            board.postings.push(JobPosting {
                id: Uuid::new_v4(),
                title: title.to_string(),
                company: company.to_string(),
                description: description.to_string(),
                match_percentage,
                status,
                submitted_at: Utc::now(),
            });
        }
        board
    }

    /// Submits a new posting. It enters the board pending approval.
    pub fn submit(
        &mut self,
        title: impl Into<String>,
        company: impl Into<String>,
        description: impl Into<String>,
    ) -> Uuid {
        let posting = JobPosting {
            id: Uuid::new_v4(),
            title: title.into(),
            company: company.into(),
            description: description.into(),
            match_percentage: None,
            status: JobStatus::Pending,
            submitted_at: Utc::now(),
        };
        let id = posting.id;
        info!(%id, title = %posting.title, "job posting submitted for approval");
        self.postings.push(posting);
        id
    }

    pub fn get(&self, id: Uuid) -> Option<&JobPosting> {
        self.postings.iter().find(|posting| posting.id == id)
    }

    /// Every posting, regardless of status (the admin view).
    pub fn postings(&self) -> &[JobPosting] {
        &self.postings
    }

    /// What students see: approved postings only.
    pub fn approved_listings(&self) -> Vec<&JobPosting> {
        self.postings
            .iter()
            .filter(|posting| posting.status == JobStatus::Approved)
            .collect()
    }

    /// The admin approval queue.
    pub fn pending_approval(&self) -> Vec<&JobPosting> {
        self.postings
            .iter()
            .filter(|posting| posting.status == JobStatus::Pending)
            .collect()
    }

    pub fn approve(&mut self, id: Uuid) -> Result<()> {
        self.decide(id, JobStatus::Approved)
    }

    pub fn reject(&mut self, id: Uuid) -> Result<()> {
        self.decide(id, JobStatus::Rejected)
    }

    fn decide(&mut self, id: Uuid, status: JobStatus) -> Result<()> {
        let posting = self
            .postings
            .iter_mut()
            .find(|posting| posting.id == id)
            .ok_or_else(|| PortalError::invalid_state(format!("unknown job posting: {id}")))?;
        info!(%id, ?status, "job posting decided");
        posting.status = status;
        Ok(())
    }
}
