//! Configuration tests
//!
//! The round-trip test is a guard: when a field is added to `Config` it must
//! also appear in `to_toml()` and `FileConfig`, or these tests fail.

use super::*;

#[test]
fn default_config_round_trips() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let file = parsed.unwrap();
    assert_eq!(file.api_url.as_deref(), Some(DEFAULT_API_URL));
    assert_eq!(file.request_timeout_secs, Some(10));
    assert_eq!(file.history_initial_limit, Some(10));
    assert_eq!(file.stats_refresh_ms, Some(30_000));

    let logging = file.logging.expect("logging section should be present");
    assert_eq!(logging.level.as_deref(), Some("info"));
    assert_eq!(logging.file_rotation, Some(LogRotation::Daily));
}

#[test]
fn file_values_override_defaults() {
    let file: FileConfig = toml::from_str(
        r#"
        api_url = "http://analysis.internal:9000"
        stats_refresh_ms = 5000

        [logging]
        level = "debug"
        file_rotation = "hourly"
        "#,
    )
    .unwrap();

    let config = Config::from_sources(file);
    assert_eq!(config.api_url, "http://analysis.internal:9000");
    assert_eq!(config.stats_refresh_ms, 5_000);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.file_rotation, LogRotation::Hourly);

    // Untouched fields keep their defaults
    assert_eq!(config.history_initial_limit, 10);
    assert_eq!(config.request_timeout_secs, 10);
}

#[test]
fn empty_file_yields_defaults() {
    let file: FileConfig = toml::from_str("").unwrap();
    let config = Config::from_sources(file);

    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert_eq!(config.stats_refresh_ms, 30_000);
    assert_eq!(config.theme, "dark");
    assert!(!config.logging.file_enabled);
}

#[test]
fn invalid_rotation_is_rejected() {
    let parsed: Result<FileConfig, _> = toml::from_str(
        r#"
        [logging]
        file_rotation = "weekly"
        "#,
    );
    assert!(parsed.is_err());
}
