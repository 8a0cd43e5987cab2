//! Application configuration
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/sentiscope/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

mod serialization;

#[cfg(test)]
mod tests;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default sentiment service base URL
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the sentiment service
    pub api_url: String,

    /// Uniform request timeout applied to every API call
    pub request_timeout_secs: u64,

    /// Initial history window size
    pub history_initial_limit: usize,

    /// Cache-stats poll interval in milliseconds; 0 disables auto-refresh
    pub stats_refresh_ms: u64,

    /// Theme name: "dark", "light", "nord", "solarized"
    pub theme: String,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: 10,
            history_initial_limit: 10,
            stats_refresh_ms: 30_000,
            theme: "dark".to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Log file rotation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Hourly,
    Daily,
    Never,
}

impl LogRotation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogRotation::Hourly => "hourly",
            LogRotation::Daily => "daily",
            LogRotation::Never => "never",
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default log level when RUST_LOG is not set
    pub level: String,

    /// Write structured logs to rotating files in addition to the TUI buffer
    pub file_enabled: bool,

    /// Directory for log files
    pub file_dir: PathBuf,

    /// Log file name prefix
    pub file_prefix: String,

    /// Rotation policy for log files
    pub file_rotation: LogRotation,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_prefix: "sentiscope.log".to_string(),
            file_rotation: LogRotation::Daily,
        }
    }
}

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub api_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub history_initial_limit: Option<usize>,
    pub stats_refresh_ms: Option<u64>,
    pub theme: Option<String>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

/// [logging] section of the config file
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_prefix: Option<String>,
    pub file_rotation: Option<LogRotation>,
}

impl LoggingConfig {
    fn from_file(file: Option<FileLogging>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            level: file.level.unwrap_or(defaults.level),
            file_enabled: file.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file.file_dir.map(PathBuf::from).unwrap_or(defaults.file_dir),
            file_prefix: file.file_prefix.unwrap_or(defaults.file_prefix),
            file_rotation: file.file_rotation.unwrap_or(defaults.file_rotation),
        }
    }
}

impl Config {
    /// Get the config file path: ~/.config/sentiscope/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("sentiscope").join("config.toml"))
    }

    /// Create the config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        let template = Self::default().to_toml();
        let _ = std::fs::write(&path, template);
    }

    /// Load the file config if it exists
    ///
    /// A config file that exists but cannot be parsed fails fast with an
    /// actionable message instead of silently falling back to defaults.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\nConfig error: failed to parse {}\n", path.display());
                    eprintln!("  {}\n", e);
                    eprintln!("  To reset, delete the file and restart sentiscope.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\nConfig error: cannot read {}: {}\n", path.display(), e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars > file > defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();
        Self::from_sources(file)
    }

    fn from_sources(file: FileConfig) -> Self {
        let defaults = Self::default();

        // API URL: env > file > default
        let api_url = std::env::var("SENTISCOPE_API_URL")
            .ok()
            .or(file.api_url)
            .unwrap_or(defaults.api_url);

        // Theme: env > file > default
        let theme = std::env::var("SENTISCOPE_THEME")
            .ok()
            .or(file.theme)
            .unwrap_or(defaults.theme);

        // Poll interval: env > file > default
        let stats_refresh_ms = std::env::var("SENTISCOPE_STATS_REFRESH_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(file.stats_refresh_ms)
            .unwrap_or(defaults.stats_refresh_ms);

        Self {
            api_url,
            request_timeout_secs: file
                .request_timeout_secs
                .unwrap_or(defaults.request_timeout_secs),
            history_initial_limit: file
                .history_initial_limit
                .unwrap_or(defaults.history_initial_limit),
            stats_refresh_ms,
            theme,
            logging: LoggingConfig::from_file(file.logging),
        }
    }
}
