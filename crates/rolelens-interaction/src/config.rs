//! Configuration file management for RoleLens.
//!
//! Supports reading secrets from `~/.config/rolelens/secret.json`.
//! A missing or unreadable file is reported as a soft error so callers
//! can fall back to environment variables or offline operation; error
//! messages never contain the secrets themselves.

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Root configuration structure for secret.json
#[derive(Debug, Clone, Deserialize)]
pub struct SecretConfig {
    #[serde(default)]
    pub openrouter: Option<OpenRouterConfig>,
}

/// OpenRouter API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OpenRouterConfig {
    pub api_key: String,
    #[serde(default)]
    pub model_name: Option<String>,
}

/// Loads the secret configuration file from ~/.config/rolelens/secret.json
pub fn load_secret_config() -> Result<SecretConfig, String> {
    let config_path = get_config_path()?;

    if !config_path.exists() {
        return Err(format!(
            "Configuration file not found at: {}",
            config_path.display()
        ));
    }

    let content = fs::read_to_string(&config_path).map_err(|e| {
        format!(
            "Failed to read configuration file at {}: {}",
            config_path.display(),
            e
        )
    })?;

    serde_json::from_str(&content).map_err(|e| {
        format!(
            "Failed to parse configuration file at {}: {}",
            config_path.display(),
            e
        )
    })
}

/// Returns the path to the configuration file: ~/.config/rolelens/secret.json
fn get_config_path() -> Result<PathBuf, String> {
    let home = dirs::home_dir().ok_or_else(|| "Could not determine home directory".to_string())?;
    Ok(home.join(".config").join("rolelens").join("secret.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_config_parses_with_and_without_model_name() {
        let config: SecretConfig = serde_json::from_str(
            r#"{"openrouter": {"api_key": "sk-or-test", "model_name": "openai/gpt-4o"}}"#,
        )
        .unwrap();
        let openrouter = config.openrouter.unwrap();
        assert_eq!(openrouter.api_key, "sk-or-test");
        assert_eq!(openrouter.model_name.as_deref(), Some("openai/gpt-4o"));

        let config: SecretConfig =
            serde_json::from_str(r#"{"openrouter": {"api_key": "sk-or-test"}}"#).unwrap();
        assert!(config.openrouter.unwrap().model_name.is_none());
    }

    #[test]
    fn empty_secret_file_is_valid() {
        let config: SecretConfig = serde_json::from_str("{}").unwrap();
        assert!(config.openrouter.is_none());
    }
}
