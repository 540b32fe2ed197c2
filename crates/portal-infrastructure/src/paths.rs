//! Path resolution for persisted portal state.
//!
//! Everything the browser build keeps in `localStorage` lives here as one
//! file per key under the platform config directory.
//!
//! ```text
//! ~/.config/placement-portal/       # Linux; platform-appropriate elsewhere
//! ├── user_data                     # JSON UserIdentity
//! ├── user_profile                  # JSON Profile
//! ├── auth_token                    # opaque bearer token
//! └── gemini-api-key                # plain string credential
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for the portal.
pub struct PortalPaths;

impl PortalPaths {
    const APP_DIR: &'static str = "placement-portal";

    /// Returns the portal configuration directory, creating nothing.
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(Self::APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }
}
