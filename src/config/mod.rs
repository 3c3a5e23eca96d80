pub mod expression_id;
pub mod model;

use anyhow::{bail, Context, Result};
use chrono::format::{Item, StrftimeItems};
use std::path::PathBuf;

pub use model::{AppConfig, LoggingConfig, ServerConfig};

/// Overrides `server.base_url`, matching the variable the calculator
/// services themselves read.
const BASE_URL_ENV: &str = "ORCHESTRATOR_URL";

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("exprtrack")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    let path = config_path();
    let mut config = if path.exists() {
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        toml::from_str(&contents).with_context(|| "Failed to parse config file")?
    } else {
        AppConfig::default()
    };
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    validate(&config).with_context(|| format!("Invalid config in {}", path.display()))?;
    Ok(config)
}

fn validate(config: &AppConfig) -> Result<()> {
    let fmt = &config.ui.timestamp_format;
    if StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error)) {
        bail!("ui.timestamp_format '{}' is not a valid strftime format", fmt);
    }
    Ok(())
}

fn apply_env_overrides(config: &mut AppConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(url) = lookup(BASE_URL_ENV).filter(|u| !u.trim().is_empty()) {
        config.server.base_url = url.trim().to_string();
    }
}
