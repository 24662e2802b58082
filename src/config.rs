//! Plugin configuration.
//!
//! Precedence, lowest to highest: built-in defaults, user config
//! (`~/.config/prowler-plugin/config.toml`), current directory
//! (`./prowler-plugin.toml`), an explicitly passed config file,
//! `PROWLER_PLUGIN_*` environment variables, CLI flags.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct PluginConfig {
    #[serde(default)]
    pub scanner: ScannerConfig,
}

/// How to reach the scanner and its credentials store.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ScannerConfig {
    /// Path to the prowler binary.
    #[serde(default = "default_prowler_path")]
    pub prowler_path: PathBuf,

    /// Credentials store override. When unset, resolution falls back to
    /// `AWS_SHARED_CREDENTIALS_FILE`, then `~/.aws/credentials`.
    pub credentials_file: Option<PathBuf>,
}

fn default_prowler_path() -> PathBuf {
    PathBuf::from("prowler")
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            prowler_path: default_prowler_path(),
            credentials_file: None,
        }
    }
}

impl ScannerConfig {
    pub fn with_prowler_path(mut self, path: PathBuf) -> Self {
        self.prowler_path = path;
        self
    }

    pub fn with_credentials_file(mut self, path: PathBuf) -> Self {
        self.credentials_file = Some(path);
        self
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PluginConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: PluginConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// `~/.config/prowler-plugin/config.toml`
    pub fn get_user_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config/prowler-plugin/config.toml"))
    }

    /// `./prowler-plugin.toml`
    pub fn get_current_config_path() -> PathBuf {
        PathBuf::from("./prowler-plugin.toml")
    }

    pub fn generate_default_config() -> String {
        toml::to_string_pretty(&Self::default()).unwrap_or_else(|_| {
            r#"[scanner]
prowler_path = "prowler"
# credentials_file = "/var/lib/prowler-plugin/credentials"
"#
            .to_string()
        })
    }

    /// Merge another config into this one; set values in `other` win.
    pub fn merge(&mut self, other: &PluginConfig) {
        if other.scanner.prowler_path != default_prowler_path() {
            self.scanner.prowler_path = other.scanner.prowler_path.clone();
        }
        if other.scanner.credentials_file.is_some() {
            self.scanner.credentials_file = other.scanner.credentials_file.clone();
        }
    }

    pub fn apply_env_vars(&mut self, env_vars: &HashMap<String, String>) {
        for (key, value) in env_vars {
            if let Some(config_key) = key.strip_prefix("PROWLER_PLUGIN_") {
                match config_key {
                    "SCANNER_PATH" => self.scanner.prowler_path = PathBuf::from(value),
                    "CREDENTIALS_FILE" => {
                        self.scanner.credentials_file = Some(PathBuf::from(value));
                    }
                    _ => {}
                }
            }
        }
    }

    /// Load configuration with the full precedence chain. CLI-level
    /// overrides are applied by the caller after this returns.
    pub fn load_with_precedence(
        config_path: Option<&Path>,
        env_vars: &HashMap<String, String>,
    ) -> Result<Self> {
        let mut config = Self::default();

        if let Some(user_path) = Self::get_user_config_path() {
            if user_path.exists() {
                if let Ok(user_config) = Self::load_from_file(&user_path) {
                    config.merge(&user_config);
                    tracing::debug!(path = %user_path.display(), "loaded user config");
                }
            }
        }

        let current_path = Self::get_current_config_path();
        if current_path.exists() {
            if let Ok(current_config) = Self::load_from_file(&current_path) {
                config.merge(&current_config);
                tracing::debug!(path = %current_path.display(), "loaded current directory config");
            }
        }

        if let Some(path) = config_path {
            let explicit = Self::load_from_file(path)
                .map_err(|e| anyhow!("failed to load config file {}: {e}", path.display()))?;
            config.merge(&explicit);
        }

        config.apply_env_vars(env_vars);

        Ok(config)
    }
}
