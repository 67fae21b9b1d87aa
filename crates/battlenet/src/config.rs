use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::region::{Locale, Region, Scope};

const APP_NAME: &str = "battlenet";
const CONFIG_FILE: &str = "config.json";

/// Client configuration
///
/// Holds the application credentials registered with Blizzard and the
/// defaults used when constructing a client. Tokens are never persisted here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
    #[serde(default)]
    pub region: Region,
    /// Locale for localized strings; falls back to the system locale
    #[serde(default = "default_locale")]
    pub locale: Option<Locale>,
    /// Redirect URI registered for the authorization code flow
    #[serde(default = "default_redirect_uri")]
    pub redirect_uri: String,
    #[serde(default = "default_scopes")]
    pub scopes: Vec<Scope>,
}

fn default_locale() -> Option<Locale> {
    Locale::from_system()
}

fn default_redirect_uri() -> String {
    "https://localhost/callback".to_string()
}

fn default_scopes() -> Vec<Scope> {
    vec![Scope::OpenId, Scope::WowProfile]
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            region: Region::default(),
            locale: default_locale(),
            redirect_uri: default_redirect_uri(),
            scopes: default_scopes(),
        }
    }
}

impl ClientConfig {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            ..Self::default()
        }
    }

    /// Returns true when both client credentials are set
    pub fn has_credentials(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}

/// Configuration manager
pub struct ConfigManager {
    path: PathBuf,
    config: RwLock<ClientConfig>,
}

impl ConfigManager {
    /// Creates a configuration manager for the platform config directory
    pub fn new() -> Result<Self> {
        Self::with_dir(Self::config_dir()?)
    }

    /// Creates a configuration manager rooted at `dir`
    pub fn with_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir).context("Failed to create config directory")?;

        let path = dir.join(CONFIG_FILE);

        let config = if path.exists() {
            let data = std::fs::read_to_string(&path).context("Failed to read config file")?;
            serde_json::from_str(&data).unwrap_or_else(|e| {
                tracing::warn!("Ignoring unreadable config file {}: {}", path.display(), e);
                ClientConfig::default()
            })
        } else {
            ClientConfig::default()
        };

        Ok(Self {
            path,
            config: RwLock::new(config),
        })
    }

    /// Gets a copy of the current configuration
    pub fn get(&self) -> ClientConfig {
        match self.config.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Updates and saves the configuration
    pub fn save(&self, config: ClientConfig) -> Result<()> {
        let json = serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
        std::fs::write(&self.path, json).context("Failed to write config file")?;

        match self.config.write() {
            Ok(mut guard) => *guard = config,
            Err(poisoned) => *poisoned.into_inner() = config,
        }

        Ok(())
    }

    /// Path of the backing JSON file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Could not determine config directory")?
            .join(APP_NAME))
    }
}
