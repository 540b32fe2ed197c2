//! HTTP implementation of the authentication backend contract.
//!
//! Thin and mechanical: six endpoints, JSON bodies, an optional bearer
//! token, and a fixed request timeout so a dead backend surfaces as a
//! retryable failure instead of a hang.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use portal_core::gateway::{
    AuthGateway, AuthResponse, GatewayError, LoginRequest, RecruiterRegistration,
    StudentRegistration,
};
use portal_infrastructure::LocalIdentityStore;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Supplies the persisted bearer token, when one exists.
///
/// Token lookup happens per request, matching the browser client: a token
/// stored after login is picked up by the next call without rebuilding the
/// gateway.
pub trait TokenProvider: Send + Sync {
    fn token(&self) -> Option<String>;
}

impl TokenProvider for LocalIdentityStore {
    fn token(&self) -> Option<String> {
        self.auth_token().ok().flatten()
    }
}

/// No persisted token; cookie/session auth only.
pub struct NoToken;

impl TokenProvider for NoToken {
    fn token(&self) -> Option<String> {
        None
    }
}

/// `AuthGateway` over HTTP.
#[derive(Clone)]
pub struct HttpAuthGateway {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl HttpAuthGateway {
    /// Creates a gateway against `base_url` (e.g. `http://host/api/auth`).
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenProvider>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            tokens,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.tokens.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        default_message: &str,
    ) -> Result<T, GatewayError> {
        let response = self
            .authorized(builder)
            .send()
            .await
            .map_err(|err| map_transport_error(&err))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "auth backend rejected request");
            return Err(map_rejection(status, &body, default_message));
        }

        response.json::<T>().await.map_err(|err| {
            GatewayError::request(format!("Failed to parse backend response: {err}"))
        })
    }
}

/// The backend's failure body: `{ error, errors? }`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    #[serde(default)]
    errors: Option<HashMap<String, String>>,
}

fn map_transport_error(err: &reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::timeout(format!("Request timed out: {err}"))
    } else {
        GatewayError::request(format!("Request failed: {err}"))
    }
}

fn map_rejection(status: StatusCode, body: &str, default_message: &str) -> GatewayError {
    let parsed = serde_json::from_str::<ErrorBody>(body).ok();
    let message = parsed
        .as_ref()
        .and_then(|b| b.error.clone())
        .unwrap_or_else(|| default_message.to_string());
    let field_errors = parsed.and_then(|b| b.errors).unwrap_or_default();

    GatewayError::Response {
        status_code: status.as_u16(),
        message,
        field_errors,
    }
}

#[async_trait::async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn register_student(
        &self,
        request: StudentRegistration,
    ) -> Result<AuthResponse, GatewayError> {
        self.send(
            self.client.post(self.url("register/student/")).json(&request),
            "Registration failed",
        )
        .await
    }

    async fn register_recruiter(
        &self,
        request: RecruiterRegistration,
    ) -> Result<AuthResponse, GatewayError> {
        self.send(
            self.client.post(self.url("register/recruiter/")).json(&request),
            "Registration failed",
        )
        .await
    }

    async fn login(&self, request: LoginRequest) -> Result<AuthResponse, GatewayError> {
        self.send(
            self.client.post(self.url("login/")).json(&request),
            "Login failed",
        )
        .await
    }

    async fn logout(&self) -> Result<(), GatewayError> {
        // The body is ignored; only success matters here.
        let _: serde_json::Value = self
            .send(self.client.post(self.url("logout/")), "Logout failed")
            .await?;
        Ok(())
    }

    async fn check_auth(&self) -> Result<AuthResponse, GatewayError> {
        self.send(
            self.client.get(self.url("check-auth/")),
            "Authentication check failed",
        )
        .await
    }

    async fn profile(&self) -> Result<AuthResponse, GatewayError> {
        self.send(
            self.client.get(self.url("profile/")),
            "Failed to fetch profile",
        )
        .await
    }
}
