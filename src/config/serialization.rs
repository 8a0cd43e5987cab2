//! Config file template generation
//!
//! `Config::to_toml()` is the single source of truth for the file written
//! on first run. Every persistable field must appear here with a comment;
//! the round-trip test in tests.rs keeps this in sync with `FileConfig`.

use super::Config;

impl Config {
    /// Render the configuration as a commented TOML template
    pub fn to_toml(&self) -> String {
        format!(
            r#"# sentiscope configuration
# Precedence: environment variables > this file > built-in defaults
#
# Environment overrides:
#   SENTISCOPE_API_URL           - sentiment service base URL
#   SENTISCOPE_THEME             - color theme
#   SENTISCOPE_STATS_REFRESH_MS  - cache-stats poll interval
#   RUST_LOG                     - tracing filter (overrides logging.level)

# Base URL of the sentiment service
api_url = "{api_url}"

# Request timeout in seconds, applied uniformly to every API call
request_timeout_secs = {timeout}

# Initial history window size; Load More grows it by 10
history_initial_limit = {history_limit}

# Cache-stats poll interval in milliseconds (0 disables auto-refresh)
stats_refresh_ms = {stats_refresh}

# Theme: "dark", "light", "nord", "solarized"
theme = "{theme}"

[logging]
# Default log level when RUST_LOG is not set: trace, debug, info, warn, error
level = "{log_level}"
# Also write structured JSON logs to rotating files
file_enabled = {file_enabled}
file_dir = "{file_dir}"
file_prefix = "{file_prefix}"
# Rotation: "hourly", "daily", "never"
file_rotation = "{file_rotation}"
"#,
            api_url = self.api_url,
            timeout = self.request_timeout_secs,
            history_limit = self.history_initial_limit,
            stats_refresh = self.stats_refresh_ms,
            theme = self.theme,
            log_level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display(),
            file_prefix = self.logging.file_prefix,
            file_rotation = self.logging.file_rotation.as_str(),
        )
    }
}
