//! Application layer for the placement portal.
//!
//! This crate provides the use cases that coordinate between the domain
//! layer and the infrastructure/gateway layers: the authentication flow,
//! the AI-assisted feature services, the job board, student onboarding,
//! dashboard summaries and the unified app shell.

pub mod app;
pub mod assistant;
pub mod auth_flow;
pub mod dashboard;
pub mod jobs;
pub mod onboarding;

pub use app::PortalApp;
pub use assistant::AssistantService;
pub use auth_flow::AuthFlow;
pub use jobs::{JobBoard, JobPosting, JobStatus};
pub use onboarding::StudentOnboarding;
