//! The role-gated routing decision.
//!
//! One pure function answers every "may this session see that screen"
//! question, whether the caller is a URL router or an in-memory screen
//! switch. Denials always resolve to a redirect, never an error.

use crate::role::Role;
use crate::navigation::screen::Screen;
use crate::session::Session;

/// The outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the requested screen.
    Allow,
    /// Unauthenticated request for a gated screen: go sign in.
    RedirectLogin,
    /// Authenticated but the role is not in the allowed set: denial routes
    /// to the public landing screen, not an error screen.
    RedirectLanding,
    /// Authenticated visit to a public screen: skip it and show the role's
    /// default dashboard.
    RedirectDashboard(Role),
}

/// Decides whether `session` may see `destination`.
///
/// Pure and deterministic: same inputs, same decision, no side effects.
pub fn authorize(destination: Screen, session: &Session) -> RouteDecision {
    match (destination.allowed_roles(), session.role) {
        (None, Some(role)) => RouteDecision::RedirectDashboard(role),
        (None, None) => RouteDecision::Allow,
        (Some(_), None) => RouteDecision::RedirectLogin,
        (Some(allowed), Some(role)) if allowed.contains(&role) => RouteDecision::Allow,
        (Some(_), Some(_)) => RouteDecision::RedirectLanding,
    }
}
