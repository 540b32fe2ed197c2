//! External collaborator contracts: the authentication backend and the
//! generative-text service.
//!
//! Both are consumed through traits so the application layer can be driven
//! against in-memory fakes. The HTTP implementations live in the
//! `portal-gateway` crate.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::role::LoginRole;
use crate::session::{Profile, UserIdentity};

/// Errors produced by the authentication backend boundary.
#[derive(Error, Debug, Clone)]
pub enum GatewayError {
    /// The request never produced an HTTP response (connect failure,
    /// timeout, malformed reply).
    #[error("Request failed: {message}")]
    Request { message: String, is_timeout: bool },

    /// The backend answered with a non-success status. `message` carries
    /// the backend's `error` string; `field_errors` its per-field map.
    #[error("{message}")]
    Response {
        status_code: u16,
        message: String,
        field_errors: HashMap<String, String>,
    },
}

impl GatewayError {
    /// A transport-level failure with no response.
    pub fn request(message: impl Into<String>) -> Self {
        Self::Request {
            message: message.into(),
            is_timeout: false,
        }
    }

    /// A request that exceeded the client timeout.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Request {
            message: message.into(),
            is_timeout: true,
        }
    }

    /// A rejection with a status code and no field detail.
    pub fn response(status_code: u16, message: impl Into<String>) -> Self {
        Self::Response {
            status_code,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    /// The canonical 401 rejection.
    pub fn unauthorized() -> Self {
        Self::response(401, "Authentication credentials were not provided")
    }

    /// True when the backend rejected the session itself (HTTP 401).
    /// Callers must treat this globally, not as a per-form failure.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Response { status_code: 401, .. })
    }

    /// True when retrying the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Request { is_timeout, .. } => *is_timeout,
            Self::Response { status_code, .. } => {
                matches!(status_code, 429 | 500 | 502 | 503 | 504)
            }
        }
    }

    /// The HTTP status code, when a response was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Request { .. } => None,
            Self::Response { status_code, .. } => Some(*status_code),
        }
    }

    /// Per-field messages from the backend, empty for transport failures.
    pub fn field_errors(&self) -> &HashMap<String, String> {
        static EMPTY: once_cell::sync::Lazy<HashMap<String, String>> =
            once_cell::sync::Lazy::new(HashMap::new);
        match self {
            Self::Request { .. } => &EMPTY,
            Self::Response { field_errors, .. } => field_errors,
        }
    }
}

// ============================================================================
// Wire payloads (snake_case, as the backend speaks them)
// ============================================================================

/// Body of `POST login/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub user_type: LoginRole,
}

/// Body of `POST register/student/`. The backend uses the email as the
/// username and derives year-of-study from the graduation year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentRegistration {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub password_confirm: String,
    pub student_id: String,
    pub university: String,
    pub course: String,
    pub year_of_study: i32,
    pub phone_number: String,
}

/// Body of `POST register/recruiter/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecruiterRegistration {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub password_confirm: String,
    pub company_name: String,
    pub company_website: String,
    pub position: String,
    pub phone_number: String,
    pub company_size: String,
    pub industry: String,
}

/// Success payload shared by login, registration, check-auth and profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: UserIdentity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
}

/// The authentication backend.
///
/// All six operations map 1:1 to backend endpoints. Implementations must
/// translate any 401 into an error for which
/// [`GatewayError::is_unauthorized`] returns true.
#[async_trait::async_trait]
pub trait AuthGateway: Send + Sync {
    async fn register_student(
        &self,
        request: StudentRegistration,
    ) -> Result<AuthResponse, GatewayError>;

    async fn register_recruiter(
        &self,
        request: RecruiterRegistration,
    ) -> Result<AuthResponse, GatewayError>;

    async fn login(&self, request: LoginRequest) -> Result<AuthResponse, GatewayError>;

    async fn logout(&self) -> Result<(), GatewayError>;

    async fn check_auth(&self) -> Result<AuthResponse, GatewayError>;

    async fn profile(&self) -> Result<AuthResponse, GatewayError>;
}

/// The generative-text service.
///
/// Deliberately infallible at the type level: every failure (missing
/// credential, network error, non-2xx, empty response) comes back as a
/// `String` starting with `"Error:"` so callers can render it inline
/// without branching on a Result.
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, credential: &str) -> String;
}
