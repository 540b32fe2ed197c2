//! End-to-end tests for the authentication flow and role-gated navigation,
//! driven through the app shell against an in-memory gateway.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use portal_application::PortalApp;
use portal_core::forms::{FormPhase, LoginForm, RegistrationForm, SUBMIT_ERROR, fields};
use portal_core::gateway::{
    AuthGateway, AuthResponse, GatewayError, LoginRequest, RecruiterRegistration,
    StudentRegistration, TextGenerator,
};
use portal_core::navigation::{RouteDecision, Screen};
use portal_core::role::{LoginRole, Role};
use portal_core::session::{CredentialStore, IdentityPersistence, Profile, UserIdentity};

// ============================================================================
// In-memory collaborators
// ============================================================================

type GatewayResult = Result<AuthResponse, GatewayError>;

#[derive(Default)]
struct MockGateway {
    login_result: Mutex<Option<GatewayResult>>,
    register_result: Mutex<Option<GatewayResult>>,
    check_auth_result: Mutex<Option<GatewayResult>>,
    logout_error: Mutex<Option<GatewayError>>,
    login_calls: AtomicUsize,
    register_calls: AtomicUsize,
    logout_calls: AtomicUsize,
    check_auth_calls: AtomicUsize,
}

impl MockGateway {
    fn with_login(result: GatewayResult) -> Self {
        let gateway = Self::default();
        *gateway.login_result.lock().unwrap() = Some(result);
        gateway
    }

    fn take(slot: &Mutex<Option<GatewayResult>>) -> GatewayResult {
        slot.lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Err(GatewayError::request("no response configured")))
    }
}

#[async_trait::async_trait]
impl AuthGateway for MockGateway {
    async fn register_student(&self, _request: StudentRegistration) -> GatewayResult {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        Self::take(&self.register_result)
    }

    async fn register_recruiter(&self, _request: RecruiterRegistration) -> GatewayResult {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        Self::take(&self.register_result)
    }

    async fn login(&self, _request: LoginRequest) -> GatewayResult {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        Self::take(&self.login_result)
    }

    async fn logout(&self) -> Result<(), GatewayError> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        match self.logout_error.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn check_auth(&self) -> GatewayResult {
        self.check_auth_calls.fetch_add(1, Ordering::SeqCst);
        Self::take(&self.check_auth_result)
    }

    async fn profile(&self) -> GatewayResult {
        Self::take(&self.check_auth_result)
    }
}

#[derive(Default)]
struct MemoryIdentity {
    stored: Mutex<Option<(UserIdentity, Option<Profile>)>>,
}

impl IdentityPersistence for MemoryIdentity {
    fn load(&self) -> portal_core::Result<Option<(UserIdentity, Option<Profile>)>> {
        Ok(self.stored.lock().unwrap().clone())
    }

    fn store(&self, user: &UserIdentity, profile: Option<&Profile>) -> portal_core::Result<()> {
        *self.stored.lock().unwrap() = Some((user.clone(), profile.cloned()));
        Ok(())
    }

    fn clear(&self) -> portal_core::Result<()> {
        *self.stored.lock().unwrap() = None;
        Ok(())
    }
}

#[derive(Default)]
struct MemoryCredentials {
    value: Mutex<Option<String>>,
}

impl CredentialStore for MemoryCredentials {
    fn load(&self) -> portal_core::Result<Option<String>> {
        Ok(self.value.lock().unwrap().clone())
    }

    fn store(&self, credential: &str) -> portal_core::Result<()> {
        *self.value.lock().unwrap() = Some(credential.to_string());
        Ok(())
    }
}

struct SilentGenerator;

#[async_trait::async_trait]
impl TextGenerator for SilentGenerator {
    async fn generate(&self, _prompt: &str, _credential: &str) -> String {
        "ok".to_string()
    }
}

// ============================================================================
// Fixtures
// ============================================================================

fn identity(role: Role) -> UserIdentity {
    UserIdentity {
        id: 42,
        email: "alice@edu.com".into(),
        first_name: "Alice".into(),
        last_name: "Johnson".into(),
        user_type: role,
    }
}

fn auth_response(role: Role) -> AuthResponse {
    AuthResponse {
        user: identity(role),
        profile: None,
    }
}

fn app_with(gateway: Arc<MockGateway>, persistence: Arc<MemoryIdentity>) -> PortalApp {
    PortalApp::new(
        gateway,
        Arc::new(SilentGenerator),
        persistence,
        Arc::new(MemoryCredentials::default()),
    )
}

fn valid_login_form() -> LoginForm {
    let mut form = LoginForm::new(LoginRole::Student);
    form.set_email("alice@edu.com");
    form.set_password("secret1");
    form
}

fn valid_student_registration() -> RegistrationForm {
    let mut form = RegistrationForm::new(LoginRole::Student);
    form.set_value(fields::FIRST_NAME, "Alice");
    form.set_value(fields::LAST_NAME, "Johnson");
    form.set_value(fields::EMAIL, "alice@edu.com");
    form.set_value(fields::PHONE, "+1 555 000 1111");
    form.set_value(fields::PASSWORD, "Abcdef12");
    form.set_value(fields::CONFIRM_PASSWORD, "Abcdef12");
    form.set_value(fields::STUDENT_ID, "S-1001");
    form.set_value(fields::UNIVERSITY, "State University");
    form.set_value(fields::DEPARTMENT, "Computer Science");
    form.set_value(fields::GRADUATION_YEAR, "2027");
    form.set_agreements(true, true);
    form
}

// ============================================================================
// Login
// ============================================================================

#[tokio::test]
async fn test_login_makes_exactly_one_call_and_lands_on_onboarding() {
    let gateway = Arc::new(MockGateway::with_login(Ok(auth_response(Role::Student))));
    let mut app = app_with(gateway.clone(), Arc::new(MemoryIdentity::default()));

    let mut form = valid_login_form();
    assert!(app.sign_in(&mut form).await.unwrap());

    assert_eq!(gateway.login_calls.load(Ordering::SeqCst), 1);
    assert_eq!(form.phase(), FormPhase::Succeeded);
    assert_eq!(app.session().role, Some(Role::Student));
    assert_eq!(app.current_screen(), Screen::StudentOnboarding);
}

#[tokio::test]
async fn test_invalid_email_never_reaches_the_gateway() {
    let gateway = Arc::new(MockGateway::with_login(Ok(auth_response(Role::Student))));
    let mut app = app_with(gateway.clone(), Arc::new(MemoryIdentity::default()));

    let mut form = LoginForm::new(LoginRole::Student);
    form.set_email("bad");
    form.set_password("secret1");

    assert!(!app.sign_in(&mut form).await.unwrap());
    assert_eq!(gateway.login_calls.load(Ordering::SeqCst), 0);
    assert!(form.error("email").is_some());
    assert!(!app.store().is_authenticated());
}

#[tokio::test]
async fn test_rejected_login_fails_the_form_and_leaves_store_untouched() {
    let gateway = Arc::new(MockGateway::with_login(Err(GatewayError::unauthorized())));
    let mut app = app_with(gateway, Arc::new(MemoryIdentity::default()));

    let mut form = valid_login_form();
    assert!(!app.sign_in(&mut form).await.unwrap());

    assert_eq!(form.phase(), FormPhase::Failed);
    assert!(form.error(SUBMIT_ERROR).is_some());
    assert!(!app.store().is_authenticated());
    assert_eq!(app.current_screen(), Screen::Welcome);
}

// ============================================================================
// Registration
// ============================================================================

#[tokio::test]
async fn test_weak_password_blocks_registration_call() {
    let gateway = Arc::new(MockGateway::default());
    let mut app = app_with(gateway.clone(), Arc::new(MemoryIdentity::default()));

    let mut form = valid_student_registration();
    form.set_value(fields::PASSWORD, "abc");
    form.set_value(fields::CONFIRM_PASSWORD, "abc");

    assert!(!app.sign_up(&mut form).await.unwrap());
    assert_eq!(gateway.register_calls.load(Ordering::SeqCst), 0);
    assert_eq!(
        form.error(fields::PASSWORD),
        Some("Password must be at least 8 characters")
    );
}

#[tokio::test]
async fn test_valid_registration_makes_exactly_one_call() {
    let gateway = Arc::new(MockGateway::default());
    *gateway.register_result.lock().unwrap() = Some(Ok(auth_response(Role::Student)));
    let mut app = app_with(gateway.clone(), Arc::new(MemoryIdentity::default()));

    let mut form = valid_student_registration();
    assert!(app.sign_up(&mut form).await.unwrap());

    assert_eq!(gateway.register_calls.load(Ordering::SeqCst), 1);
    assert_eq!(app.session().role, Some(Role::Student));
}

#[tokio::test]
async fn test_backend_field_errors_reach_the_form() {
    let gateway = Arc::new(MockGateway::default());
    *gateway.register_result.lock().unwrap() = Some(Err(GatewayError::Response {
        status_code: 400,
        message: "Registration failed".into(),
        field_errors: HashMap::from([("email".to_string(), "Email already registered".to_string())]),
    }));
    let mut app = app_with(gateway, Arc::new(MemoryIdentity::default()));

    let mut form = valid_student_registration();
    assert!(!app.sign_up(&mut form).await.unwrap());
    assert_eq!(form.phase(), FormPhase::Failed);
    assert_eq!(form.error(fields::EMAIL), Some("Email already registered"));
}

// ============================================================================
// Logout
// ============================================================================

#[tokio::test]
async fn test_logout_clears_session_even_when_backend_fails() {
    let gateway = Arc::new(MockGateway::with_login(Ok(auth_response(Role::Recruiter))));
    *gateway.logout_error.lock().unwrap() =
        Some(GatewayError::request("connection reset by peer"));
    let persistence = Arc::new(MemoryIdentity::default());
    let mut app = app_with(gateway.clone(), persistence.clone());

    let mut form = valid_login_form();
    form.set_role(LoginRole::Recruiter);
    app.sign_in(&mut form).await.unwrap();
    assert!(app.store().is_authenticated());

    app.sign_out().await.unwrap();

    assert_eq!(gateway.logout_calls.load(Ordering::SeqCst), 1);
    let session = app.session();
    assert_eq!(session.role, None);
    assert_eq!(session.user, None);
    assert_eq!(session.profile, None);
    assert!(persistence.stored.lock().unwrap().is_none());
    assert_eq!(app.current_screen(), Screen::Welcome);
}

// ============================================================================
// Startup restoration
// ============================================================================

#[tokio::test]
async fn test_restored_session_reproduces_role_and_user() {
    let persistence = Arc::new(MemoryIdentity::default());

    // First run: sign in, which persists the identity.
    let gateway = Arc::new(MockGateway::with_login(Ok(auth_response(Role::Student))));
    let mut app = app_with(gateway, persistence.clone());
    app.sign_in(&mut valid_login_form()).await.unwrap();

    // Second run: a fresh app over the same persisted state.
    let gateway = Arc::new(MockGateway::default());
    *gateway.check_auth_result.lock().unwrap() = Some(Ok(auth_response(Role::Student)));
    let mut app = app_with(gateway, persistence);
    app.startup().await.unwrap();

    assert_eq!(app.session().role, Some(Role::Student));
    assert_eq!(app.session().user, Some(identity(Role::Student)));
    assert_eq!(app.current_screen(), Screen::StudentDashboard);
}

#[tokio::test]
async fn test_startup_demotes_session_the_backend_rejects() {
    let persistence = Arc::new(MemoryIdentity::default());
    persistence.store(&identity(Role::Student), None).unwrap();

    let gateway = Arc::new(MockGateway::default());
    *gateway.check_auth_result.lock().unwrap() = Some(Err(GatewayError::unauthorized()));
    let mut app = app_with(gateway, persistence.clone());
    app.startup().await.unwrap();

    assert!(!app.store().is_authenticated());
    assert!(persistence.stored.lock().unwrap().is_none());
    assert_eq!(app.current_screen(), Screen::Welcome);
}

#[tokio::test]
async fn test_startup_keeps_session_when_backend_is_unreachable() {
    let persistence = Arc::new(MemoryIdentity::default());
    persistence.store(&identity(Role::Recruiter), None).unwrap();

    let gateway = Arc::new(MockGateway::default());
    *gateway.check_auth_result.lock().unwrap() =
        Some(Err(GatewayError::request("connection refused")));
    let mut app = app_with(gateway, persistence);
    app.startup().await.unwrap();

    assert_eq!(app.session().role, Some(Role::Recruiter));
    assert_eq!(app.current_screen(), Screen::RecruiterDashboard);
}

#[tokio::test]
async fn test_rejected_profile_fetch_forces_logout_and_redirect() {
    let gateway = Arc::new(MockGateway::with_login(Ok(auth_response(Role::Student))));
    let persistence = Arc::new(MemoryIdentity::default());
    let mut app = app_with(gateway.clone(), persistence.clone());
    app.sign_in(&mut valid_login_form()).await.unwrap();

    *gateway.check_auth_result.lock().unwrap() = Some(Err(GatewayError::unauthorized()));
    let err = app.refresh_profile().await.unwrap_err();

    assert!(err.is_session_invalid());
    assert!(!app.store().is_authenticated());
    assert!(persistence.stored.lock().unwrap().is_none());
    assert_eq!(app.current_screen(), Screen::Welcome);
}

// ============================================================================
// Role-gated navigation through the shell
// ============================================================================

#[tokio::test]
async fn test_student_requesting_admin_screen_lands_home() {
    let gateway = Arc::new(MockGateway::with_login(Ok(auth_response(Role::Student))));
    let mut app = app_with(gateway, Arc::new(MemoryIdentity::default()));
    app.sign_in(&mut valid_login_form()).await.unwrap();

    let decision = app.go_to(Screen::AdminDashboard);
    assert_eq!(decision, RouteDecision::RedirectLanding);
    assert_eq!(app.current_screen(), Screen::Welcome);

    // The session itself is untouched by the denial.
    assert_eq!(app.session().role, Some(Role::Student));
}

#[tokio::test]
async fn test_unknown_route_name_is_failsafe() {
    let gateway = Arc::new(MockGateway::default());
    let mut app = app_with(gateway, Arc::new(MemoryIdentity::default()));

    app.go_to_named("totally/bogus");
    assert_eq!(app.current_screen(), Screen::Welcome);
}

// ============================================================================
// Credential lifecycle
// ============================================================================

#[tokio::test]
async fn test_credential_survives_sign_out() {
    let gateway = Arc::new(MockGateway::with_login(Ok(auth_response(Role::Student))));
    let mut app = app_with(gateway, Arc::new(MemoryIdentity::default()));

    app.set_api_credential("AIza-local-key").unwrap();
    app.sign_in(&mut valid_login_form()).await.unwrap();
    app.sign_out().await.unwrap();

    assert_eq!(app.store().api_credential(), "AIza-local-key");
}
