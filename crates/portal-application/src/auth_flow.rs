//! The authentication flow: forms → gateway → session store.
//!
//! Every path that can change who is signed in runs through here. The flow
//! owns the ordering guarantees the rest of the portal relies on: a form
//! that fails validation never reaches the gateway, a successful response
//! is persisted before the store is updated, and logout wipes local state
//! whether or not the backend call succeeds.

use std::sync::Arc;

use chrono::{Datelike, Utc};
use tracing::{debug, info, warn};

use portal_core::Result;
use portal_core::forms::{LoginForm, RegistrationForm, fields};
use portal_core::gateway::{
    AuthGateway, AuthResponse, LoginRequest, RecruiterRegistration, StudentRegistration,
};
use portal_core::role::{LoginRole, Role};
use portal_core::session::{CredentialStore, IdentityPersistence, SessionStore};

/// Login, registration, logout and startup restoration.
pub struct AuthFlow {
    gateway: Arc<dyn AuthGateway>,
    store: SessionStore,
    identity: Arc<dyn IdentityPersistence>,
}

impl AuthFlow {
    pub fn new(
        gateway: Arc<dyn AuthGateway>,
        store: SessionStore,
        identity: Arc<dyn IdentityPersistence>,
    ) -> Self {
        Self {
            gateway,
            store,
            identity,
        }
    }

    /// Submits the login form.
    ///
    /// Returns the signed-in role on success, `None` when validation failed,
    /// the form was already submitting, or the gateway rejected the attempt
    /// (the form carries the error in those cases). A 401 here means bad
    /// credentials, not an invalidated session: the store stays logged out
    /// and the form becomes retryable.
    pub async fn login(&self, form: &mut LoginForm) -> Result<Option<Role>> {
        if !form.try_submit() {
            return Ok(None);
        }

        let request = LoginRequest {
            email: form.email().to_string(),
            password: form.password().to_string(),
            user_type: form.role(),
        };

        match self.gateway.login(request).await {
            Ok(response) => {
                let role = response.user.user_type;
                self.apply_auth_response(response)?;
                form.submit_succeeded();
                info!(%role, "login succeeded");
                Ok(Some(role))
            }
            Err(err) => {
                debug!(error = %err, "login rejected");
                form.submit_failed(err.to_string());
                Ok(None)
            }
        }
    }

    /// Submits the registration form for whichever tab is active.
    ///
    /// A successful registration signs the new account in immediately, the
    /// same as a login. Backend field errors are merged into the form next
    /// to the non-field `submit` message.
    pub async fn register(&self, form: &mut RegistrationForm) -> Result<Option<Role>> {
        if !form.try_submit() {
            return Ok(None);
        }

        let result = match form.role() {
            LoginRole::Student => self.gateway.register_student(student_request(form)).await,
            LoginRole::Recruiter => {
                self.gateway
                    .register_recruiter(recruiter_request(form))
                    .await
            }
        };

        match result {
            Ok(response) => {
                let role = response.user.user_type;
                self.apply_auth_response(response)?;
                form.submit_succeeded();
                info!(%role, "registration succeeded");
                Ok(Some(role))
            }
            Err(err) => {
                debug!(error = %err, "registration rejected");
                let field_errors = err.field_errors().clone();
                form.submit_failed(err.to_string(), &field_errors);
                Ok(None)
            }
        }
    }

    /// Signs out.
    ///
    /// Local cleanup is unconditional and runs even when the backend call
    /// fails: the store is cleared first (infallible), then the persisted
    /// identity. A gateway failure is logged, never propagated, so callers
    /// can always land on the welcome screen.
    pub async fn logout(&self) -> Result<()> {
        let result = self.gateway.logout().await;

        self.store.clear_session();
        self.identity.clear()?;

        if let Err(err) = result {
            warn!(error = %err, "backend logout failed, local session cleared anyway");
        }
        Ok(())
    }

    /// Restores persisted state once at startup.
    ///
    /// The credential loads regardless of login state. A restored identity
    /// is re-validated against the backend: a 401 demotes it through the
    /// same invalidation path as any other 401, while an unreachable
    /// backend keeps the restored session (the next gateway call will
    /// re-check). Returns whether the store ends up authenticated.
    pub async fn startup(&self, credentials: &dyn CredentialStore) -> Result<bool> {
        self.store.restore_credential(credentials)?;

        if !self.store.restore(self.identity.as_ref())? {
            return Ok(false);
        }

        match self.gateway.check_auth().await {
            Ok(response) => {
                self.apply_auth_response(response)?;
                Ok(true)
            }
            Err(err) if err.is_unauthorized() => {
                info!("restored session rejected by backend");
                self.invalidate_session()?;
                Ok(false)
            }
            Err(err) => {
                warn!(error = %err, "auth check unreachable, keeping restored session");
                Ok(true)
            }
        }
    }

    /// Re-fetches the profile for the signed-in user.
    pub async fn refresh_profile(&self) -> Result<()> {
        match self.gateway.profile().await {
            Ok(response) => self.apply_auth_response(response),
            Err(err) if err.is_unauthorized() => {
                self.invalidate_session()?;
                Err(err.into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// The global 401 handler: wipes persisted identity and the store.
    ///
    /// The caller is responsible for the accompanying hard redirect to the
    /// landing screen.
    pub fn invalidate_session(&self) -> Result<()> {
        self.store.clear_session();
        self.identity.clear()
    }

    fn apply_auth_response(&self, response: AuthResponse) -> Result<()> {
        let AuthResponse { user, profile } = response;
        self.identity.store(&user, profile.as_ref())?;
        self.store.set_session(Some(user), profile)
    }
}

/// The backend takes the department as the course name and a year-of-study
/// derived from the graduation year (a four-year programme is assumed).
fn year_of_study(graduation_year: &str) -> i32 {
    graduation_year
        .trim()
        .parse::<i32>()
        .map(|year| year - Utc::now().year() + 4)
        .unwrap_or(1)
}

fn student_request(form: &RegistrationForm) -> StudentRegistration {
    StudentRegistration {
        // The backend uses the email as the username.
        username: form.value(fields::EMAIL).to_string(),
        email: form.value(fields::EMAIL).to_string(),
        first_name: form.value(fields::FIRST_NAME).to_string(),
        last_name: form.value(fields::LAST_NAME).to_string(),
        password: form.value(fields::PASSWORD).to_string(),
        password_confirm: form.value(fields::CONFIRM_PASSWORD).to_string(),
        student_id: form.value(fields::STUDENT_ID).to_string(),
        university: form.value(fields::UNIVERSITY).to_string(),
        course: form.value(fields::DEPARTMENT).to_string(),
        year_of_study: year_of_study(form.value(fields::GRADUATION_YEAR)),
        phone_number: form.value(fields::PHONE).to_string(),
    }
}

fn recruiter_request(form: &RegistrationForm) -> RecruiterRegistration {
    RecruiterRegistration {
        username: form.value(fields::EMAIL).to_string(),
        email: form.value(fields::EMAIL).to_string(),
        first_name: form.value(fields::FIRST_NAME).to_string(),
        last_name: form.value(fields::LAST_NAME).to_string(),
        password: form.value(fields::PASSWORD).to_string(),
        password_confirm: form.value(fields::CONFIRM_PASSWORD).to_string(),
        company_name: form.value(fields::COMPANY_NAME).to_string(),
        company_website: form.value(fields::COMPANY_WEBSITE).to_string(),
        position: form.value(fields::POSITION).to_string(),
        phone_number: form.value(fields::PHONE).to_string(),
        company_size: form.value(fields::COMPANY_SIZE).to_string(),
        industry: "Technology".to_string(),
    }
}
