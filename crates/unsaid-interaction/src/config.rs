//! Secret configuration for the remote translation boundary.
//!
//! API keys live in `secret.json` under the platform config directory
//! (`~/.config/unsaid/secret.json` on Linux). Error messages never
//! include secret values.

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Root structure of secret.json.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecretConfig {
    /// Gemini API credentials, absent when the user has not configured them
    #[serde(default)]
    pub gemini: Option<GeminiConfig>,
}

/// Gemini API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    pub api_key: String,
    /// Optional model to try before the built-in priority list
    #[serde(default)]
    pub model_name: Option<String>,
}

/// Loads the secret configuration from the platform config directory.
pub fn load_secret_config() -> Result<SecretConfig, String> {
    let path = secret_file_path()?;
    if !path.exists() {
        return Err(format!("Secret file not found at: {}", path.display()));
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read secret file at {}: {e}", path.display()))?;

    serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse secret file at {}: {e}", path.display()))
}

fn secret_file_path() -> Result<PathBuf, String> {
    let config_dir =
        dirs::config_dir().ok_or_else(|| "Could not determine config directory".to_string())?;
    Ok(config_dir.join("unsaid").join("secret.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_with_model_override() {
        let config: SecretConfig = serde_json::from_str(
            r#"{"gemini": {"api_key": "k", "model_name": "gemini-2.5-pro"}}"#,
        )
        .unwrap();
        let gemini = config.gemini.unwrap();
        assert_eq!(gemini.api_key, "k");
        assert_eq!(gemini.model_name.as_deref(), Some("gemini-2.5-pro"));
    }

    #[test]
    fn test_tolerates_missing_sections() {
        let config: SecretConfig = serde_json::from_str("{}").unwrap();
        assert!(config.gemini.is_none());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config: SecretConfig = serde_json::from_str(
            r#"{"gemini": {"api_key": "k"}, "openai": {"api_key": "x"}}"#,
        )
        .unwrap();
        assert!(config.gemini.is_some());
    }
}
