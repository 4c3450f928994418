// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use botstats::config::Settings;
use botstats::error::BotStatsError;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_settings_default_paths_are_separate() {
    let settings = Settings::default();
    assert_eq!(
        settings.data.history_file,
        PathBuf::from("data/bot_stats.json")
    );
    assert_ne!(settings.data.history_file, settings.data.daily_stats_file);
}

#[test]
fn test_settings_missing_file_gives_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let settings = Settings::load_from(&temp_dir.path().join("absent.json")).unwrap();
    assert_eq!(settings.gemini.default_model, "gemini-2.5-flash");
}

#[test]
fn test_settings_save_and_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("conf").join("settings.json");

    let mut settings = Settings::default();
    settings.gemini.base_url = Some("http://localhost:9999".to_string());
    settings.data.history_file = PathBuf::from("/var/lib/botstats/history.json");
    settings.save_to(&path).unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(
        loaded.gemini.base_url.as_deref(),
        Some("http://localhost:9999")
    );
    assert_eq!(
        loaded.data.history_file,
        PathBuf::from("/var/lib/botstats/history.json")
    );
}

#[test]
fn test_settings_malformed_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    std::fs::write(&path, "{ nope").unwrap();

    assert!(matches!(
        Settings::load_from(&path),
        Err(BotStatsError::Json(_))
    ));
}

#[test]
fn test_settings_zero_max_tokens_rejected() {
    let mut settings = Settings::default();
    settings.gemini.max_tokens = 0;
    assert!(matches!(
        settings.validate(),
        Err(BotStatsError::Config(_))
    ));
}

#[test]
fn test_settings_api_key_priority() {
    // Use a custom env var name to avoid test pollution
    let mut settings = Settings::default();
    settings.gemini.api_key_env = "BOTSTATS_TEST_API_KEY_12345".to_string();
    settings.gemini.api_key = Some("config-key".to_string());

    std::env::remove_var("BOTSTATS_TEST_API_KEY_12345");
    assert_eq!(settings.get_gemini_api_key(), Some("config-key".to_string()));

    std::env::set_var("BOTSTATS_TEST_API_KEY_12345", "env-key");
    assert_eq!(settings.get_gemini_api_key(), Some("env-key".to_string()));

    std::env::remove_var("BOTSTATS_TEST_API_KEY_12345");
}
