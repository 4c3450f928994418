// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for botstats
//!
//! Handles loading and saving settings from `$BOTSTATS_HOME/settings.json`
//! (default `./.botstats/settings.json`).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{BotStatsError, Result};

/// Value shipped in sample `.env` files; never a real key
const PLACEHOLDER_API_KEY: &str = "YOUR_ACTUAL_KEY_HERE";

/// Main settings structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Where the stats documents live
    #[serde(default)]
    pub data: DataConfig,

    /// Gemini chat front end
    #[serde(default)]
    pub gemini: GeminiConfig,
}

/// Locations of the persisted stats documents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Bounded conversation history
    #[serde(default = "default_history_file")]
    pub history_file: PathBuf,

    /// Daily stat record, kept apart from the history document
    #[serde(default = "default_daily_stats_file")]
    pub daily_stats_file: PathBuf,
}

/// Gemini-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key (if stored directly, not recommended)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Environment variable name for API key
    #[serde(default = "default_gemini_api_key_env")]
    pub api_key_env: String,

    /// Default model to use
    #[serde(default = "default_gemini_model")]
    pub default_model: String,

    /// Base URL for API (for custom endpoints)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum output tokens
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_history_file() -> PathBuf {
    PathBuf::from("data").join("bot_stats.json")
}

fn default_daily_stats_file() -> PathBuf {
    PathBuf::from("data").join("daily_stats.json")
}

fn default_gemini_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_gemini_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    500
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            history_file: default_history_file(),
            daily_stats_file: default_daily_stats_file(),
        }
    }
}

impl DataConfig {
    /// Place both documents under `dir`, keeping their file names
    pub fn with_data_dir(&self, dir: &Path) -> Self {
        let file_name = |path: &Path, fallback: &str| {
            path.file_name()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(fallback))
        };
        Self {
            history_file: dir.join(file_name(self.history_file.as_path(), "bot_stats.json")),
            daily_stats_file: dir.join(file_name(self.daily_stats_file.as_path(), "daily_stats.json")),
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: default_gemini_api_key_env(),
            default_model: default_gemini_model(),
            base_url: None,
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl Settings {
    /// Get the botstats home directory (`$BOTSTATS_HOME` or `./.botstats`).
    pub fn botstats_home() -> PathBuf {
        if let Ok(home) = std::env::var("BOTSTATS_HOME") {
            return PathBuf::from(home);
        }
        PathBuf::from(".botstats")
    }

    /// Get the default settings file path.
    pub fn default_path() -> PathBuf {
        Self::botstats_home().join("settings.json")
    }

    /// Load settings from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load settings from a specific path; defaults when the file is absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a specific path, fully overwriting.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject values no request or store could work with.
    pub fn validate(&self) -> Result<()> {
        if self.data.history_file.as_os_str().is_empty() {
            return Err(BotStatsError::Config(
                "data.history_file must not be empty".to_string(),
            ));
        }
        if self.data.daily_stats_file.as_os_str().is_empty() {
            return Err(BotStatsError::Config(
                "data.daily_stats_file must not be empty".to_string(),
            ));
        }
        if !(0.0..=2.0).contains(&self.gemini.temperature) {
            return Err(BotStatsError::Config(format!(
                "gemini.temperature must be between 0.0 and 2.0, got {}",
                self.gemini.temperature
            )));
        }
        if self.gemini.max_tokens == 0 {
            return Err(BotStatsError::Config(
                "gemini.max_tokens must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the Gemini API key (a usable env var takes priority over the stored key).
    pub fn get_gemini_api_key(&self) -> Option<String> {
        let usable = |key: &String| !key.trim().is_empty() && key != PLACEHOLDER_API_KEY;
        std::env::var(&self.gemini.api_key_env)
            .ok()
            .filter(usable)
            .or_else(|| self.gemini.api_key.clone().filter(usable))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(
            settings.data.history_file,
            PathBuf::from("data").join("bot_stats.json")
        );
        assert_eq!(settings.gemini.default_model, "gemini-2.5-flash");
        assert_eq!(settings.gemini.max_tokens, 500);
        assert!((settings.gemini.temperature - 0.7).abs() < f32::EPSILON);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_with_data_dir() {
        let data = DataConfig::default().with_data_dir(Path::new("/tmp/stats"));
        assert_eq!(data.history_file, PathBuf::from("/tmp/stats/bot_stats.json"));
        assert_eq!(
            data.daily_stats_file,
            PathBuf::from("/tmp/stats/daily_stats.json")
        );
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "gemini": { "max_tokens": 1024 } }"#).unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.gemini.max_tokens, 1024);
        assert_eq!(settings.gemini.api_key_env, "GEMINI_API_KEY");
        assert_eq!(settings.data.daily_stats_file, default_daily_stats_file());
    }

    #[test]
    fn test_invalid_temperature_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "gemini": { "temperature": 3.5 } }"#).unwrap();

        let result = Settings::load_from(&path);
        assert!(matches!(result, Err(BotStatsError::Config(_))));
    }

    #[test]
    fn test_placeholder_key_ignored() {
        let mut settings = Settings::default();
        settings.gemini.api_key_env = "BOTSTATS_TEST_UNSET_KEY_98765".to_string();
        settings.gemini.api_key = Some(PLACEHOLDER_API_KEY.to_string());
        assert!(settings.get_gemini_api_key().is_none());

        settings.gemini.api_key = Some("real-key".to_string());
        assert_eq!(settings.get_gemini_api_key(), Some("real-key".to_string()));
    }

    #[test]
    fn test_unusable_env_key_falls_back_to_stored() {
        let mut settings = Settings::default();
        settings.gemini.api_key_env = "BOTSTATS_TEST_UNUSABLE_KEY_24680".to_string();
        settings.gemini.api_key = Some("stored-real-key".to_string());

        std::env::set_var("BOTSTATS_TEST_UNUSABLE_KEY_24680", "");
        assert_eq!(
            settings.get_gemini_api_key(),
            Some("stored-real-key".to_string())
        );

        std::env::set_var("BOTSTATS_TEST_UNUSABLE_KEY_24680", PLACEHOLDER_API_KEY);
        assert_eq!(
            settings.get_gemini_api_key(),
            Some("stored-real-key".to_string())
        );

        std::env::remove_var("BOTSTATS_TEST_UNUSABLE_KEY_24680");
    }
}
