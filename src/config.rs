//! Configuration loading for bench-router.
//!
//! Configuration is loaded from TOML with the following resolution order:
//! 1. `--config <path>` (must exist when given)
//! 2. `~/.bench-router/config.toml`
//! 3. Built-in defaults
//!
//! Secrets are loaded separately with a mandatory permission check from
//! `~/.bench-router/secrets.toml` (must be 0600 or 0400), falling back to the
//! `OPENROUTER_API_KEY` environment variable.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::gateway::{API_KEY_ENV_VAR, Attribution, DEFAULT_BASE_URL};
use crate::leaderboard::DEFAULT_LEADERBOARD_URL;
use crate::{Result, RouterError};

const CONFIG_DIR: &str = ".bench-router";

/// Router configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub endpoints: EndpointsConfig,
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub aliases: AliasesConfig,
}

/// Upstream endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EndpointsConfig {
    #[serde(default = "default_leaderboard_url")]
    pub leaderboard_url: String,
    /// Gateway API root; `/models` and `/chat/completions` hang off it.
    #[serde(default = "default_gateway_base_url")]
    pub gateway_base_url: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            leaderboard_url: default_leaderboard_url(),
            gateway_base_url: default_gateway_base_url(),
        }
    }
}

fn default_leaderboard_url() -> String {
    DEFAULT_LEADERBOARD_URL.to_string()
}

fn default_gateway_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Attribution sent with chat completions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    #[serde(default)]
    pub referer: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl ClientConfig {
    /// Configured attribution, defaults filled in.
    pub fn attribution(&self) -> Attribution {
        let default = Attribution::default();
        Attribution {
            referer: self.referer.clone().unwrap_or(default.referer),
            title: self.title.clone().unwrap_or(default.title),
        }
    }
}

/// Alias table overlay.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AliasesConfig {
    /// TOML file merged over the compiled-in alias table.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Secrets (API keys).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Secrets {
    #[serde(default)]
    pub openrouter: Option<ApiKeySecret>,
}

/// A single API key secret.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiKeySecret {
    pub api_key: String,
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// Falls back to built-in defaults when no explicit path is given and no
    /// user config exists.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match Self::resolve_config_path(explicit_path)? {
            Some(path) => Self::load_from_file(&path),
            None => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            RouterError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        Self::from_toml_str(&content).map_err(|e| {
            RouterError::Configuration(format!("Failed to parse config file {path:?}: {e}"))
        })
    }

    fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(RouterError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        Ok(dirs::home_dir()
            .map(|home| home.join(CONFIG_DIR).join("config.toml"))
            .filter(|path| path.exists()))
    }
}

impl Secrets {
    /// Load `~/.bench-router/secrets.toml` if it exists.
    ///
    /// Returns empty secrets if there is no file (the key may come from the
    /// environment).
    pub fn load() -> Result<Self> {
        match dirs::home_dir().map(|home| home.join(CONFIG_DIR).join("secrets.toml")) {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => Ok(Secrets::default()),
        }
    }

    /// Load a secrets file, rejecting it if group or others can read it.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        Self::check_permissions(path)?;
        let content = fs::read_to_string(path).map_err(|e| {
            RouterError::Configuration(format!("Failed to read secrets file {path:?}: {e}"))
        })?;
        toml::from_str(&content).map_err(|e| {
            RouterError::Configuration(format!("Failed to parse secrets file {path:?}: {e}"))
        })
    }

    #[cfg(unix)]
    fn check_permissions(path: &Path) -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let metadata = fs::metadata(path).map_err(|e| {
            RouterError::Configuration(format!("Failed to stat secrets file {path:?}: {e}"))
        })?;

        let mode = metadata.permissions().mode();
        if mode & 0o077 != 0 {
            return Err(RouterError::Configuration(format!(
                "Secrets file {path:?} has insecure permissions {:o}. Must be 0600 or 0400.",
                mode & 0o777
            )));
        }

        Ok(())
    }

    #[cfg(not(unix))]
    fn check_permissions(_path: &Path) -> Result<()> {
        Ok(())
    }

    /// Gateway API key, falling back to `OPENROUTER_API_KEY`.
    pub fn api_key(&self) -> Option<String> {
        self.file_api_key()
            .or_else(|| std::env::var(API_KEY_ENV_VAR).ok())
            .filter(|key| !key.is_empty())
    }

    fn file_api_key(&self) -> Option<String> {
        self.openrouter.as_ref().map(|s| s.api_key.clone())
    }
}
