//! Storefront view configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::i18n::Translations;

/// Settings the views need from the hosting application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorefrontConfig {
    /// Base URL of the media directory (e.g. `https://shop.test/pub/media`).
    #[serde(default)]
    pub media_base_url: String,

    /// Symbol printed before prices.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Shown when a product has no description.
    #[serde(default = "default_no_description_text")]
    pub no_description_text: String,

    /// Overrides layered on the English defaults.
    #[serde(default)]
    pub translations: Translations,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_no_description_text() -> String {
    "No description available".to_string()
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            media_base_url: String::new(),
            currency_symbol: default_currency_symbol(),
            no_description_text: default_no_description_text(),
            translations: Translations::new(),
        }
    }
}

impl StorefrontConfig {
    /// Load config from a TOML or JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            Self::from_toml_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Parse config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// English defaults with this config's overrides applied.
    pub fn translator(&self) -> Translations {
        let mut table = Translations::english();
        table.merge(self.translations.clone());
        table
    }
}
