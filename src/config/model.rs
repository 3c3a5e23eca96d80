//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the client works out of the box
//! against a calculator service on `localhost:8080`.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub polling: PollingConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the calculator service lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Scheme, host and port; API paths are appended to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Honour `HTTP_PROXY`/`HTTPS_PROXY` from the environment.
    #[serde(default = "default_true")]
    pub use_system_proxy: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            use_system_proxy: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollingConfig {
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl PollingConfig {
    /// Refresh cadence. Never zero.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.max(1))
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

/// UI appearance and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_banner_timeout_secs")]
    pub banner_timeout_secs: u64,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    #[serde(default = "default_max_history")]
    pub max_history: usize,
}

impl UiConfig {
    pub fn banner_timeout(&self) -> Duration {
        Duration::from_secs(self.banner_timeout_secs)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            banner_timeout_secs: default_banner_timeout_secs(),
            timestamp_format: default_timestamp_format(),
            max_history: default_max_history(),
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_level(),
            log_dir: default_log_dir(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}
fn default_true() -> bool {
    true
}
fn default_interval_secs() -> u64 {
    5
}
fn default_banner_timeout_secs() -> u64 {
    5
}
fn default_timestamp_format() -> String {
    "%H:%M:%S".to_string()
}
fn default_max_history() -> usize {
    100
}
fn default_level() -> String {
    "info".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/exprtrack/logs".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.server.base_url, "http://localhost:8080");
        assert_eq!(cfg.polling.interval(), Duration::from_secs(5));
        assert_eq!(cfg.ui.banner_timeout(), Duration::from_secs(5));
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn test_partial_sections() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            base_url = "http://calc.internal:9000"

            [polling]
            interval_secs = 2
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.base_url, "http://calc.internal:9000");
        assert!(cfg.server.use_system_proxy);
        assert_eq!(cfg.polling.interval(), Duration::from_secs(2));
        assert_eq!(cfg.ui.max_history, 100);
    }

    #[test]
    fn test_zero_interval_is_raised() {
        let cfg: AppConfig = toml::from_str("[polling]\ninterval_secs = 0").unwrap();
        assert_eq!(cfg.polling.interval(), Duration::from_secs(1));
    }
}
