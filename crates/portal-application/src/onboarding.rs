//! The three-step student onboarding flow.
//!
//! Personal info, a free-text skills entry, then AI skill suggestions.
//! The suggestion call is the only external dependency; its failure is
//! carried as an inline message and never blocks finishing onboarding.

use portal_core::navigation::Screen;

use crate::assistant::{self, AssistantService};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnboardingStep {
    #[default]
    PersonalInfo,
    Skills,
    Suggestions,
}

/// State of the onboarding wizard.
#[derive(Debug, Clone, Default)]
pub struct StudentOnboarding {
    step: OnboardingStep,
    full_name: String,
    email: String,
    skills: String,
    suggested_skills: Vec<String>,
    suggestion_error: Option<String>,
}

impl StudentOnboarding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn set_personal_info(&mut self, full_name: impl Into<String>, email: impl Into<String>) {
        self.full_name = full_name.into();
        self.email = email.into();
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn skills(&self) -> &str {
        &self.skills
    }

    pub fn set_skills(&mut self, skills: impl Into<String>) {
        self.skills = skills.into();
    }

    pub fn suggested_skills(&self) -> &[String] {
        &self.suggested_skills
    }

    /// The inline message from a failed suggestion call, if any.
    pub fn suggestion_error(&self) -> Option<&str> {
        self.suggestion_error.as_deref()
    }

    pub fn next(&mut self) {
        self.step = match self.step {
            OnboardingStep::PersonalInfo => OnboardingStep::Skills,
            OnboardingStep::Skills | OnboardingStep::Suggestions => OnboardingStep::Suggestions,
        };
    }

    pub fn back(&mut self) {
        self.step = match self.step {
            OnboardingStep::PersonalInfo | OnboardingStep::Skills => OnboardingStep::PersonalInfo,
            OnboardingStep::Suggestions => OnboardingStep::Skills,
        };
    }

    /// Asks the assistant for complementary skills and advances to the
    /// suggestions step. With no skills entered this is a no-op; a failed
    /// call still advances, carrying the inline error instead of a list.
    pub async fn request_suggestions(&mut self, assistant: &AssistantService) {
        if self.skills.trim().is_empty() {
            return;
        }

        let response = assistant.suggest_skills(&self.skills).await;
        if assistant::is_error_text(&response) {
            self.suggestion_error = Some(response);
            self.suggested_skills.clear();
        } else {
            self.suggestion_error = None;
            self.suggested_skills = assistant::split_comma_list(&response);
        }
        self.step = OnboardingStep::Suggestions;
    }

    /// Finishing onboarding lands on the student dashboard.
    pub fn finish(&self) -> Screen {
        Screen::StudentDashboard
    }
}
