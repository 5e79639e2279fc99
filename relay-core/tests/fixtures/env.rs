#![allow(dead_code)]

use std::sync::{Mutex, MutexGuard, OnceLock};

/// Serializes tests that read or mutate process environment variables.
pub fn lock_env() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(())).lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
