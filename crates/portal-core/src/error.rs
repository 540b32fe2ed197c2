//! Error types for the placement portal client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::gateway::GatewayError;

/// A shared error type for the portal client.
///
/// Field-level validation failures never appear here: they live in the
/// per-form error maps and stay inside the forms layer. This type covers
/// everything that crosses a component boundary.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum PortalError {
    /// An operation was attempted against state that cannot accept it,
    /// e.g. reading the session context before it is installed, or
    /// supplying a profile without a user.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The backend rejected the current session (HTTP 401). Handled
    /// globally: persisted identity is wiped and navigation lands on the
    /// public landing screen.
    #[error("Session is no longer valid")]
    SessionInvalid,

    /// Network or backend failure other than a session rejection.
    #[error("Gateway error: {message}")]
    Gateway {
        status_code: Option<u16>,
        message: String,
    },

    /// Local persisted-state failure (key/value store).
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PortalError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an InvalidState error
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is an InvalidState error
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState(_))
    }

    /// Check if this is the global session-invalid (401) error
    pub fn is_session_invalid(&self) -> bool {
        matches!(self, Self::SessionInvalid)
    }

    /// Check if this is a gateway error
    pub fn is_gateway(&self) -> bool {
        matches!(self, Self::Gateway { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for PortalError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for PortalError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// A 401 from any gateway call is promoted to the global session-invalid
/// error; everything else stays a plain gateway failure.
impl From<GatewayError> for PortalError {
    fn from(err: GatewayError) -> Self {
        if err.is_unauthorized() {
            return Self::SessionInvalid;
        }
        Self::Gateway {
            status_code: err.status_code(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, PortalError>`.
pub type Result<T> = std::result::Result<T, PortalError>;
