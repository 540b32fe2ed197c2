//! The app shell: one surface wiring the session store, the navigator,
//! the auth flow and the feature services together.
//!
//! Screens talk to this type only. Every navigation goes through the
//! navigator's authorization check, and every sign-in/sign-out path keeps
//! the store, the persisted identity and the active screen in step.

use std::sync::Arc;

use tracing::info;

use portal_core::forms::{LoginForm, RegistrationForm};
use portal_core::gateway::{AuthGateway, TextGenerator};
use portal_core::navigation::{Navigator, RouteDecision, Screen};
use portal_core::role::{LoginRole, Role};
use portal_core::session::{CredentialStore, IdentityPersistence, Session, SessionStore};
use portal_core::{PortalError, Result};
use portal_gateway::{GeminiClient, HttpAuthGateway};
use portal_infrastructure::{LocalCredentialStore, LocalIdentityStore, LocalStore};

use crate::assistant::AssistantService;
use crate::auth_flow::AuthFlow;
use crate::jobs::JobBoard;

/// The portal client.
pub struct PortalApp {
    store: SessionStore,
    navigator: Navigator,
    auth: AuthFlow,
    assistant: AssistantService,
    jobs: JobBoard,
    credentials: Arc<dyn CredentialStore>,
}

impl PortalApp {
    /// Wires an app over the given collaborators. The session store is
    /// created here so every component observes the same instance.
    pub fn new(
        gateway: Arc<dyn AuthGateway>,
        generator: Arc<dyn TextGenerator>,
        identity: Arc<dyn IdentityPersistence>,
        credentials: Arc<dyn CredentialStore>,
    ) -> Self {
        let store = SessionStore::new();
        Self {
            auth: AuthFlow::new(gateway, store.clone(), identity),
            assistant: AssistantService::new(generator, store.clone()),
            navigator: Navigator::new(),
            jobs: JobBoard::with_demo_data(),
            credentials,
            store,
        }
    }

    /// Wires an app against a real backend and the platform config
    /// directory, e.g. `PortalApp::open("http://host/api/auth")`.
    pub fn open(auth_base_url: impl Into<String>) -> Result<Self> {
        let store_dir = || -> Result<LocalStore> {
            LocalStore::open_default().map_err(PortalError::from)
        };
        let identity = Arc::new(LocalIdentityStore::new(store_dir()?));
        let credentials = Arc::new(LocalCredentialStore::new(store_dir()?));
        let gateway = Arc::new(HttpAuthGateway::new(auth_base_url, identity.clone()));

        Ok(Self::new(
            gateway,
            Arc::new(GeminiClient::new()),
            identity,
            credentials,
        ))
    }

    /// Restores persisted state and routes to the right first screen:
    /// the role's dashboard when a session survived, welcome otherwise.
    pub async fn startup(&mut self) -> Result<()> {
        let authenticated = self.auth.startup(self.credentials.as_ref()).await?;
        if authenticated {
            if let Some(role) = self.store.role() {
                let session = self.session();
                self.navigator.request(Screen::dashboard(role), &session);
            }
        }
        info!(screen = %self.navigator.current(), "portal started");
        Ok(())
    }

    // ============================================================================
    // Navigation
    // ============================================================================

    pub fn current_screen(&self) -> Screen {
        self.navigator.current()
    }

    pub fn selected_login_role(&self) -> LoginRole {
        self.navigator.selected_login_role()
    }

    /// Role tile picked on the welcome screen.
    pub fn select_role(&mut self, role: Role) {
        self.navigator.select_role(role);
    }

    pub fn go_to(&mut self, destination: Screen) -> RouteDecision {
        let session = self.session();
        self.navigator.request(destination, &session)
    }

    /// Navigation by route segment; unknown names land on welcome.
    pub fn go_to_named(&mut self, name: &str) -> RouteDecision {
        let session = self.session();
        self.navigator.request_named(name, &session)
    }

    // ============================================================================
    // Authentication
    // ============================================================================

    /// Submits the login form and, on success, enters the role's initial
    /// screen. Returns whether a session was established.
    pub async fn sign_in(&mut self, form: &mut LoginForm) -> Result<bool> {
        match self.auth.login(form).await? {
            Some(role) => {
                let session = self.session();
                self.navigator.login_succeeded(role, &session);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Submits the registration form; a new account is signed in directly.
    pub async fn sign_up(&mut self, form: &mut RegistrationForm) -> Result<bool> {
        match self.auth.register(form).await? {
            Some(role) => {
                let session = self.session();
                self.navigator.login_succeeded(role, &session);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Signs out. The screen and the store change together, then the
    /// backend and persisted identity are cleaned up; a failing backend
    /// call cannot keep the user signed in.
    pub async fn sign_out(&mut self) -> Result<()> {
        self.navigator.logout(&self.store);
        self.auth.logout().await
    }

    /// Re-fetches the signed-in user's profile from the backend.
    pub async fn refresh_profile(&mut self) -> Result<()> {
        if let Err(err) = self.auth.refresh_profile().await {
            self.handle_error(&err)?;
            return Err(err);
        }
        Ok(())
    }

    /// The global reaction to a session-invalid (401) error from any call:
    /// wipe identity and hard-redirect to the landing screen.
    pub fn handle_error(&mut self, err: &PortalError) -> Result<()> {
        if err.is_session_invalid() {
            self.auth.invalidate_session()?;
            self.navigator.logout(&self.store);
        }
        Ok(())
    }

    // ============================================================================
    // State access
    // ============================================================================

    pub fn session(&self) -> Session {
        self.store.session()
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn assistant(&self) -> &AssistantService {
        &self.assistant
    }

    pub fn jobs(&self) -> &JobBoard {
        &self.jobs
    }

    pub fn jobs_mut(&mut self) -> &mut JobBoard {
        &mut self.jobs
    }

    /// Saves the text-generation credential, written through to disk.
    pub fn set_api_credential(&self, credential: impl Into<String>) -> Result<()> {
        self.store
            .set_api_credential(credential, self.credentials.as_ref())
    }
}
