#![allow(dead_code)]

use crate::fixtures::{OWNER, TEST_NOW_SECS};
use relay_core::domain::FingerprintPolicy;
use relay_core::foundation::ManualClock;
use relay_core::infrastructure::notify::MemoryNotificationLog;
use relay_core::{Identity, RelayCore, RelayNotification, RelayOptions};
use std::sync::Arc;

/// A relay wired to a manual clock and an in-memory notification log.
pub struct TestRelay {
    pub core: RelayCore,
    pub clock: Arc<ManualClock>,
    pub notifications: Arc<MemoryNotificationLog>,
}

impl TestRelay {
    pub fn published(&self) -> Vec<RelayNotification> {
        self.notifications.snapshot()
    }
}

pub struct RelayBuilder {
    deployer: Identity,
    options: RelayOptions,
    now_secs: u64,
}

impl Default for RelayBuilder {
    fn default() -> Self {
        Self { deployer: OWNER, options: RelayOptions::default(), now_secs: TEST_NOW_SECS }
    }
}

impl RelayBuilder {
    pub fn deployer(mut self, deployer: Identity) -> Self {
        self.deployer = deployer;
        self
    }

    pub fn fingerprint_policy(mut self, policy: FingerprintPolicy) -> Self {
        self.options.fingerprint_policy = policy;
        self
    }

    pub fn max_content_bytes(mut self, max: usize) -> Self {
        self.options.max_content_bytes = max;
        self
    }

    pub fn now_secs(mut self, now_secs: u64) -> Self {
        self.now_secs = now_secs;
        self
    }

    pub fn build(self) -> TestRelay {
        let clock = Arc::new(ManualClock::new(self.now_secs));
        let notifications = Arc::new(MemoryNotificationLog::new());
        let core = RelayCore::with_parts(self.deployer, self.options, clock.clone(), notifications.clone()).expect("build relay");
        TestRelay { core, clock, notifications }
    }
}

/// Relay owned by `OWNER` with `relayer` already granted trust.
pub fn relay_with_trusted(relayer: Identity) -> TestRelay {
    let relay = RelayBuilder::default().build();
    relay.core.set_relayer_trust(OWNER, relayer, true).expect("grant relayer");
    relay
}
