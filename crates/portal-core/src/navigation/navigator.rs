//! The screen dispatcher.
//!
//! A small state machine over [`Screen`] that funnels every transition into
//! a gated subtree through [`authorize`]. Both the URL-style and the
//! in-memory dispatch paths go through `request`, so there is no way to
//! reach a protected screen without the check running.

use tracing::debug;

use crate::navigation::authorize::{RouteDecision, authorize};
use crate::navigation::screen::Screen;
use crate::role::{LoginRole, Role};
use crate::session::{Session, SessionStore};

/// Navigation state: the active screen plus the login-tab hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    current: Screen,
    selected_login_role: LoginRole,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            current: Screen::Welcome,
            selected_login_role: LoginRole::default(),
        }
    }
}

impl Navigator {
    /// Starts on the landing screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// The screen currently being shown.
    pub fn current(&self) -> Screen {
        self.current
    }

    /// The tab preselected on the login/registration forms. A hint only;
    /// it has no authorization effect.
    pub fn selected_login_role(&self) -> LoginRole {
        self.selected_login_role
    }

    pub fn set_selected_login_role(&mut self, role: LoginRole) {
        self.selected_login_role = role;
    }

    /// Role picked on the landing screen. Every role goes through the login
    /// screen; roles with a login tab preselect it.
    pub fn select_role(&mut self, role: Role) {
        if let Some(tab) = role.login_tab() {
            self.selected_login_role = tab;
        }
        self.current = Screen::Login;
    }

    /// Requests a transition to `destination`, applying whatever the
    /// authorization decision says. Returns the decision so callers can
    /// log or surface redirects.
    pub fn request(&mut self, destination: Screen, session: &Session) -> RouteDecision {
        let decision = authorize(destination, session);
        let landed = match decision {
            RouteDecision::Allow => destination,
            RouteDecision::RedirectLogin => Screen::Login,
            RouteDecision::RedirectLanding => Screen::Welcome,
            RouteDecision::RedirectDashboard(role) => Screen::dashboard(role),
        };
        if landed != destination {
            debug!(requested = %destination, landed = %landed, "navigation redirected");
        }
        self.current = landed;
        decision
    }

    /// Requests a transition by screen name (route segment). Unknown names
    /// fall back to the landing screen before authorization runs.
    pub fn request_named(&mut self, name: &str, session: &Session) -> RouteDecision {
        self.request(Screen::from_name(name), session)
    }

    /// Enters the role's initial screen after a successful login. The
    /// session must already be populated; the transition is still checked.
    pub fn login_succeeded(&mut self, role: Role, session: &Session) -> RouteDecision {
        self.request(Screen::post_login(role), session)
    }

    /// Logs out: clears the store and lands on the welcome screen in one
    /// call, so no observer can see a cleared role on a protected screen
    /// or a live role on the landing screen.
    pub fn logout(&mut self, store: &SessionStore) {
        store.clear_session();
        self.current = Screen::Welcome;
    }
}
