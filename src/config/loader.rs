//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::HelpdeskConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<HelpdeskConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: HelpdeskConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply `PORT` and `HELPDESK_DATA_DIR` overrides, then re-validate.
pub fn apply_env_overrides(mut config: HelpdeskConfig) -> Result<HelpdeskConfig, ConfigError> {
    if let Ok(port) = std::env::var("PORT") {
        config.listener.bind_address = with_port(&config.listener.bind_address, port.trim());
    }
    if let Ok(dir) = std::env::var("HELPDESK_DATA_DIR") {
        config.storage.data_dir = dir;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

fn with_port(bind_address: &str, port: &str) -> String {
    let host = bind_address
        .rsplit_once(':')
        .map(|(host, _)| host)
        .unwrap_or(bind_address);
    format!("{}:{}", host, port)
}
