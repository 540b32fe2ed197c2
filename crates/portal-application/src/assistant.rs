//! AI-assisted feature services.
//!
//! Each operation builds one prompt and makes one call to the
//! text-generation service. Failures arrive as strings starting with
//! `"Error:"` and pass through untouched so the feature screens render
//! them inline; nothing here can affect session state.

use std::sync::Arc;

use tracing::debug;

use portal_core::gateway::TextGenerator;
use portal_core::session::SessionStore;

/// Prompt construction and dispatch for every AI-assisted feature.
pub struct AssistantService {
    generator: Arc<dyn TextGenerator>,
    store: SessionStore,
}

impl AssistantService {
    /// The credential is read from the store per call, so a key saved in
    /// settings takes effect without rebuilding the service.
    pub fn new(generator: Arc<dyn TextGenerator>, store: SessionStore) -> Self {
        Self { generator, store }
    }

    async fn generate(&self, prompt: String) -> String {
        debug!(prompt_len = prompt.len(), "requesting text generation");
        self.generator
            .generate(&prompt, &self.store.api_credential())
            .await
    }

    /// Resume feedback for the resume optimizer screen.
    pub async fn analyze_resume(&self, resume_text: &str) -> String {
        self.generate(format!(
            "Analyze this resume and provide constructive feedback in HTML format. \
             Focus on strengths, areas for improvement, and specific recommendations:\n\n{resume_text}"
        ))
        .await
    }

    /// Interview questions for the mock-interview screen, one per line.
    /// Split with [`split_lines`] after checking [`is_error_text`].
    pub async fn interview_questions(&self, resume_text: &str) -> String {
        self.generate(format!(
            "Based on this resume, generate 5 relevant interview questions (one per line):\n\n{resume_text}"
        ))
        .await
    }

    /// Feedback on a single interview answer.
    pub async fn evaluate_answer(&self, question: &str, answer: &str) -> String {
        self.generate(format!(
            "Evaluate this interview answer and provide constructive feedback:\n\n\
             Question: {question}\nAnswer: {answer}"
        ))
        .await
    }

    /// Drafts a posting for the recruiter's create-job screen.
    pub async fn job_description(&self, job_title: &str, skills: &str) -> String {
        self.generate(format!(
            "Generate a comprehensive job description in HTML format for: {job_title}\n\
             Required skills: {skills}\n\
             Include responsibilities, requirements, and benefits."
        ))
        .await
    }

    /// Complementary skills for onboarding, comma separated. Split with
    /// [`split_comma_list`] after checking [`is_error_text`].
    pub async fn suggest_skills(&self, current_skills: &str) -> String {
        self.generate(format!(
            "Based on these current skills: {current_skills}\n\
             Suggest 5-7 complementary skills to learn next. Return only skill names separated by commas."
        ))
        .await
    }

    /// Quality review of a pending posting for the admin approval screen.
    pub async fn validate_posting(&self, job_description: &str) -> String {
        self.generate(format!(
            "Review this job posting for quality, clarity, and compliance. \
             Provide recommendations:\n\n{job_description}"
        ))
        .await
    }
}

/// True for the inline failure strings the text-generation contract emits.
pub fn is_error_text(text: &str) -> bool {
    text.starts_with("Error:")
}

/// Splits a one-item-per-line response, dropping blanks.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Splits a comma-separated response, dropping blanks.
pub fn split_comma_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records the prompt and returns a canned response.
    struct StubGenerator {
        response: String,
        prompts: Mutex<Vec<String>>,
    }

    impl StubGenerator {
        fn new(response: &str) -> Self {
            Self {
                response: response.to_string(),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait::async_trait]
    impl TextGenerator for StubGenerator {
        async fn generate(&self, prompt: &str, _credential: &str) -> String {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.response.clone()
        }
    }

    fn service_with(stub: Arc<StubGenerator>) -> AssistantService {
        AssistantService::new(stub, SessionStore::new())
    }

    #[tokio::test]
    async fn test_evaluate_answer_embeds_question_and_answer() {
        let stub = Arc::new(StubGenerator::new("Good answer."));
        let service = service_with(stub.clone());

        let feedback = service
            .evaluate_answer("Why Rust?", "Because of the type system.")
            .await;
        assert_eq!(feedback, "Good answer.");

        let prompts = stub.prompts.lock().unwrap();
        assert!(prompts[0].contains("Question: Why Rust?"));
        assert!(prompts[0].contains("Answer: Because of the type system."));
    }

    #[tokio::test]
    async fn test_error_strings_pass_through() {
        let stub = Arc::new(StubGenerator::new("Error: API key not provided"));
        let service = service_with(stub);

        let result = service.analyze_resume("my resume").await;
        assert!(is_error_text(&result));
    }

    #[test]
    fn test_split_lines_drops_blanks() {
        let questions = split_lines("Q1\n\n  Q2  \nQ3\n");
        assert_eq!(questions, vec!["Q1", "Q2", "Q3"]);
    }

    #[test]
    fn test_split_comma_list() {
        let skills = split_comma_list("Rust, SQL, , Docker");
        assert_eq!(skills, vec!["Rust", "SQL", "Docker"]);
    }
}
