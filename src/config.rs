use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{AppError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub openai_api_key: Option<String>,

    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Article text is cut to this many characters before it is sent
    /// for summarization.
    #[serde(default = "default_max_article_chars")]
    pub max_article_chars: usize,

    /// TTF font used for PDF export. When unset, a few well-known
    /// system font locations are tried.
    pub pdf_font_path: Option<String>,
}

fn default_api_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_max_article_chars() -> usize {
    4000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            api_url: default_api_url(),
            model: default_model(),
            max_article_chars: default_max_article_chars(),
            pdf_font_path: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))?
        } else {
            let config = Config::default();
            config.save()?;
            config
        };

        // The environment wins over the config file so the key never
        // has to be written to disk.
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            if !key.is_empty() {
                config.openai_api_key = Some(key);
            }
        }

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| AppError::Config(e.to_string()))?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tomtat")
            .join("config.toml")
    }
}
