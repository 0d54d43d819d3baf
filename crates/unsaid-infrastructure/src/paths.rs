//! Unified path management for UNSAID configuration and data files.
//!
//! All configuration, secrets, and translation data live under the
//! platform config directory, resolved via the `dirs` crate. This keeps
//! paths consistent across Linux, macOS, and Windows.

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

/// Unified path management for UNSAID.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/unsaid/            # Config directory
/// ├── secret.json              # API keys and secrets
/// └── translations/            # Translation record files
///     └── <record-id>.toml
/// ```
pub struct UnsaidPaths;

impl UnsaidPaths {
    /// Returns the UNSAID configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/unsaid/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("unsaid"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the secrets file.
    ///
    /// # Security Note
    ///
    /// Ensure this file has appropriate permissions (e.g., 600) to prevent
    /// unauthorized access.
    pub fn secret_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("secret.json"))
    }

    /// Returns the directory that holds translation record files.
    pub fn translations_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("translations"))
    }
}
