//! Configuration loader using Figment for layered config management.
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. TOML config file
//! 3. Environment variables (RELAY_* prefix)

use crate::foundation::{RelayError, CONFIG_ENV_PREFIX, CONFIG_FILE_NAME};
use crate::infrastructure::config::types::RelayConfig;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use log::{debug, info};
use std::path::Path;

/// Load configuration from the default file in `data_dir` (`relay-config.toml`).
pub fn load_config(data_dir: &Path) -> Result<RelayConfig, RelayError> {
    load_config_from_file(&data_dir.join(CONFIG_FILE_NAME))
}

/// Load configuration from a specific file path.
///
/// A missing file is not an error; defaults and environment still apply.
/// Example env override: `RELAY_RELAY__FINGERPRINT_POLICY=verify` -> `relay.fingerprint_policy`.
pub fn load_config_from_file(path: &Path) -> Result<RelayConfig, RelayError> {
    info!("config: loading path={}", path.display());
    let config: RelayConfig = figment_base(path).merge(Env::prefixed(CONFIG_ENV_PREFIX).split("__")).extract()?;
    debug!(
        "config: loaded owner={} fingerprint_policy={:?} max_content_bytes={} notification_log={}",
        config.relay.owner.as_deref().unwrap_or("-"),
        config.relay.fingerprint_policy,
        config.relay.max_content_bytes,
        config.notifications.log_path.as_deref().unwrap_or("-")
    );
    Ok(config)
}

fn figment_base(path: &Path) -> Figment {
    let figment = Figment::new().merge(Serialized::defaults(RelayConfig::default()));
    if path.exists() {
        figment.merge(Toml::file(path))
    } else {
        debug!("config: file missing, using defaults and env only path={}", path.display());
        figment
    }
}
