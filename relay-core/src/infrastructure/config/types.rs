use crate::domain::FingerprintPolicy;
use crate::foundation::DEFAULT_MAX_CONTENT_BYTES;
use serde::{Deserialize, Serialize};

/// Root configuration of a relay instance.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RelayConfig {
    #[serde(default)]
    pub relay: RelaySettings,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RelaySettings {
    /// Deploying identity, `0x`-prefixed hex. Becomes the owner and the first trusted relayer.
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub fingerprint_policy: FingerprintPolicy,
    /// Maximum outbound content size in bytes; `0` disables the check.
    #[serde(default = "default_max_content_bytes")]
    pub max_content_bytes: usize,
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self { owner: None, fingerprint_policy: FingerprintPolicy::default(), max_content_bytes: DEFAULT_MAX_CONTENT_BYTES }
    }
}

fn default_max_content_bytes() -> usize {
    DEFAULT_MAX_CONTENT_BYTES
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Append notifications as JSON lines to this file.
    #[serde(default)]
    pub log_path: Option<String>,
    /// Emit notifications through the `log` facade.
    #[serde(default = "default_true")]
    pub structured_log: bool,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { log_path: None, structured_log: true }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter expression passed to `init_logger`, e.g. `info,relay_core=debug`.
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub log_dir: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), log_dir: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
