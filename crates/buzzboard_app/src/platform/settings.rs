//! Optional `buzzboard.ron` settings beside the binary. Anything missing
//! falls back to a default; a malformed file is reported and ignored.

use std::fs;
use std::time::Duration;

use buzzboard_core::Category;
use buzzboard_engine::FetchSettings;
use reader_logging::reader_warn;
use serde::{Deserialize, Serialize};

const SETTINGS_FILENAME: &str = "buzzboard.ron";

// API keys are baked in at build time, the settings file may override them.
const PRIMARY_API_KEY: Option<&str> = option_env!("NEWSDATA_API_KEY");
const FALLBACK_API_KEY: Option<&str> = option_env!("TOP_HEADLINES_API_KEY");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub language: String,
    pub country: String,
    pub default_category: String,
    pub request_timeout_secs: u64,
    pub primary_api_key: Option<String>,
    pub fallback_api_key: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            country: "us".to_string(),
            default_category: "general".to_string(),
            request_timeout_secs: 30,
            primary_api_key: None,
            fallback_api_key: None,
        }
    }
}

impl Settings {
    pub fn default_category(&self) -> Category {
        match Category::parse(&self.default_category) {
            Some(category) => category,
            None => {
                reader_warn!(
                    "unknown default_category {:?}, using General",
                    self.default_category
                );
                Category::General
            }
        }
    }

    pub fn to_fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            primary_api_key: self
                .primary_api_key
                .clone()
                .or_else(|| PRIMARY_API_KEY.map(str::to_string))
                .unwrap_or_default(),
            fallback_api_key: self
                .fallback_api_key
                .clone()
                .or_else(|| FALLBACK_API_KEY.map(str::to_string))
                .unwrap_or_default(),
            language: self.language.clone(),
            country: self.country.clone(),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            ..FetchSettings::default()
        }
    }
}

pub fn load() -> Settings {
    let content = match fs::read_to_string(SETTINGS_FILENAME) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Settings::default();
        }
        Err(err) => {
            reader_warn!("failed to read {}: {}", SETTINGS_FILENAME, err);
            return Settings::default();
        }
    };

    match ron::from_str(&content) {
        Ok(settings) => settings,
        Err(err) => {
            reader_warn!("failed to parse {}: {}", SETTINGS_FILENAME, err);
            Settings::default()
        }
    }
}
