//! Configuration management for Parley Desktop

use parley_core::DEFAULT_LOCALE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    pub dark_mode: bool,
    pub locale: String,
    pub font_size: f32,
    /// Optional JSON language file, takes precedence over `locale`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ui: UiConfig {
                dark_mode: true,
                locale: DEFAULT_LOCALE.to_string(),
                font_size: 14.0,
                language_file: None,
            },
        }
    }
}

impl AppConfig {
    pub fn load(data_dir: &Path) -> anyhow::Result<Self> {
        let config_path = data_dir.join("config.json");

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Self = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save(data_dir)?;
            Ok(config)
        }
    }

    pub fn save(&self, data_dir: &Path) -> anyhow::Result<()> {
        let config_path = data_dir.join("config.json");
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
