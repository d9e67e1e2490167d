//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// CLI configuration file (`minimart.toml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store identity and checkout destination.
    #[serde(default)]
    pub store: StoreInfo,

    /// Durable storage location.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Admin login settings.
    #[serde(default)]
    pub admin: AdminConfig,
}

impl StoreConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse config: {}", path))
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

/// Store identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreInfo {
    /// Store display name.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// WhatsApp destination number, international format, digits only.
    #[serde(default = "default_whatsapp_number")]
    pub whatsapp_number: String,

    /// Default locale for listings and messages.
    #[serde(default = "default_locale")]
    pub locale: String,
}

fn default_store_name() -> String {
    "Minimart".to_string()
}

fn default_whatsapp_number() -> String {
    "31600000000".to_string()
}

fn default_locale() -> String {
    "en".to_string()
}

impl Default for StoreInfo {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            whatsapp_number: default_whatsapp_number(),
            locale: default_locale(),
        }
    }
}

/// Durable storage location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON data file, relative to the working directory.
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

fn default_data_file() -> String {
    "minimart-data.json".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

/// Admin login settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Stored admin password hash; set via `minimart admin set-password`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,

    /// Consecutive failures allowed before locking the login form.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// How long a lock lasts, in seconds.
    #[serde(default = "default_lockout_secs")]
    pub lockout_secs: i64,
}

fn default_max_attempts() -> u32 {
    5
}

fn default_lockout_secs() -> i64 {
    300
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            password_hash: None,
            max_attempts: default_max_attempts(),
            lockout_secs: default_lockout_secs(),
        }
    }
}

/// Generate a default minimart.toml config file.
pub fn generate_default_config() -> String {
    r#"# Minimart store configuration

[store]
name = "Minimart"
# International format, digits only.
whatsapp_number = "31600000000"
# Default locale: en, nl or ar.
locale = "en"

[storage]
data_file = "minimart-data.json"

[admin]
# Set via `minimart admin set-password`.
max_attempts = 5
lockout_secs = 300
"#
    .to_string()
}
