mod loader;
mod types;
pub mod validation;

pub use loader::{load_config, load_config_from_file};
pub use types::*;

use crate::foundation::{RelayError, CONFIG_FILE_NAME};
use std::path::{Path, PathBuf};

pub const CONFIG_PATH_ENV: &str = "RELAY_CONFIG_PATH";

/// `RELAY_CONFIG_PATH` when set, otherwise `relay-config.toml` inside `data_dir`.
pub fn resolve_config_path(data_dir: &Path) -> PathBuf {
    if let Ok(value) = std::env::var(CONFIG_PATH_ENV) {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }
    data_dir.join(CONFIG_FILE_NAME)
}

/// Resolve, load and validate the relay configuration.
pub fn load_relay_config(data_dir: &Path) -> Result<RelayConfig, RelayError> {
    let config_path = resolve_config_path(data_dir);
    load_relay_config_from_path(&config_path)
}

pub fn load_relay_config_from_path(path: &Path) -> Result<RelayConfig, RelayError> {
    let config = load_config_from_file(path)?;
    config.validate().map_err(|errors| RelayError::ConfigError(format!("validation failed: {:?}", errors)))?;
    Ok(config)
}
