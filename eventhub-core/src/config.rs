//! Global eventhub configuration.
//!
//! Preferences only: the config file never stores event data. `browse`
//! applies `default_sort` and `default_category` when the flags are absent.

use std::path::PathBuf;

use ::config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{EventHubError, EventHubResult};

/// User preferences at ~/.config/eventhub/config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventHubConfig {
    /// Sort applied by `browse` when --sort is not given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_sort: Option<String>,

    /// Category filter applied by `browse` when --category is not given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_category: Option<String>,
}

impl EventHubConfig {
    pub fn config_path() -> EventHubResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EventHubError::Config("Could not determine config directory".into()))?
            .join("eventhub");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> EventHubResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: EventHubConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| EventHubError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EventHubError::Config(e.to_string()))?;

        Ok(config)
    }

    /// Save the current config to ~/.config/eventhub/config.toml
    pub fn save(&self) -> EventHubResult<()> {
        let config_path = Self::config_path()?;

        let content =
            toml::to_string_pretty(self).map_err(|e| EventHubError::Config(e.to_string()))?;

        std::fs::write(&config_path, content)
            .map_err(|e| EventHubError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> EventHubResult<()> {
        let contents = "\
# eventhub configuration

# Sort order for `eventhub browse` (latest, popular, price-asc, price-desc):
# default_sort = \"latest\"

# Category filter for `eventhub browse`:
# default_category = \"Tech\"
";

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                EventHubError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| EventHubError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
