//! # Configuration Management Module
//!
//! Loads and writes the console's TOML configuration. Every section has
//! defaults so a missing file can be replaced by `blitzseller init`.
//!
//! ## Configuration Structure
//!
//! - [`AppConfig`] - Branding and the artificial delays of the auth and quest flows
//! - [`StorageConfig`] - Where the session slot lives
//! - [`LoggingConfig`] - Log level and optional log file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use blitzseller::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml").await?;
//!     println!("Data dir: {}", config.storage.data_dir);
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration File Format
//!
//! ```toml
//! [app]
//! name = "BRIDGE Solutions"
//! auth_delay_ms = 500
//! quest_complete_delay_ms = 500
//!
//! [storage]
//! data_dir = "./data"
//! session_key = "blitzseller-user"
//!
//! [logging]
//! level = "info"
//! file = "blitzseller.log"
//! ```

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tokio::fs;

use crate::auth::session::DEFAULT_SESSION_KEY;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub name: String,
    pub tagline: String,
    /// Artificial wait before login/register resolve (ms).
    #[serde(default = "default_delay_ms")]
    pub auth_delay_ms: u64,
    /// Artificial wait before a quest card flips to completed (ms).
    #[serde(default = "default_delay_ms")]
    pub quest_complete_delay_ms: u64,
}

fn default_delay_ms() -> u64 {
    500
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: String,
    /// Key of the slot holding the serialized current user.
    #[serde(default = "default_session_key")]
    pub session_key: String,
}

fn default_session_key() -> String {
    DEFAULT_SESSION_KEY.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        config.validate()?;
        Ok(config)
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.storage.data_dir.trim().is_empty() {
            return Err(anyhow!("storage.data_dir must not be empty"));
        }
        if self.storage.session_key.trim().is_empty() {
            return Err(anyhow!("storage.session_key must not be empty"));
        }
        Ok(())
    }

    /// Directory of the sled database backing the session slot.
    pub fn session_db_path(&self) -> PathBuf {
        PathBuf::from(&self.storage.data_dir).join("session")
    }

    pub fn auth_delay(&self) -> Duration {
        Duration::from_millis(self.app.auth_delay_ms)
    }

    pub fn quest_complete_delay(&self) -> Duration {
        Duration::from_millis(self.app.quest_complete_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            app: AppConfig {
                name: "BRIDGE Solutions".to_string(),
                tagline: "Transforme suas vendas em um jogo".to_string(),
                auth_delay_ms: default_delay_ms(),
                quest_complete_delay_ms: default_delay_ms(),
            },
            storage: StorageConfig {
                data_dir: "./data".to_string(),
                session_key: default_session_key(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file: Some("blitzseller.log".to_string()),
            },
        }
    }
}
