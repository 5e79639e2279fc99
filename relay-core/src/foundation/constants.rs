//! System-wide constants for the relay.

/// Identity width in bytes (canonical address form).
pub const IDENTITY_SIZE: usize = 20;

/// Keccak-256 fingerprint size in bytes.
pub const FINGERPRINT_SIZE: usize = 32;

/// Default cap on outbound message content (64 KiB).
///
/// `0` in configuration disables the cap.
pub const DEFAULT_MAX_CONTENT_BYTES: usize = 64 * 1024;

/// Environment variable prefix for config overrides.
///
/// Example: `RELAY_RELAY__FINGERPRINT_POLICY` -> `relay.fingerprint_policy`
pub const CONFIG_ENV_PREFIX: &str = "RELAY_";

/// Default config file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "relay-config.toml";
