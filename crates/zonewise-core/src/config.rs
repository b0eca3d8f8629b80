use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Result, ZonewiseError};

/// Top-level configuration for the Zonewise application.
///
/// Loaded from `zonewise.toml` in the working directory by default. Each
/// section corresponds to one concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZonewiseConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl ZonewiseConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ZonewiseConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| ZonewiseError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Directory holding the history file and catalog file.
    pub data_dir: String,
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: ".".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Chat engine settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Maximum utterance length in characters.
    pub max_utterance_chars: usize,
    /// Display-time offset east of UTC, in minutes.
    pub utc_offset_minutes: i32,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            max_utterance_chars: 2000,
            utc_offset_minutes: 330,
        }
    }
}

/// History persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// History file name, relative to the data directory.
    pub history_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            history_file: "history.json".to_string(),
        }
    }
}

/// Zone catalog settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog file name, relative to the data directory.
    pub file: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            file: "catalog.toml".to_string(),
        }
    }
}
