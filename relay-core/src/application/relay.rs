use crate::domain::{
    FingerprintPolicy, InboundDelivery, InboundProcessor, InboundReceipt, OutboundLedger, OutboundMessage, Ownership, RelayNotification,
    RelayerRegistry,
};
use crate::foundation::{Clock, Fingerprint, Identity, RelayError, Result, SystemClock, DEFAULT_MAX_CONTENT_BYTES};
use crate::infrastructure::config::RelayConfig;
use crate::infrastructure::notify::{FileNotificationLog, MultiNotificationSink, NotificationSink, StructuredNotificationLogger};
use log::{debug, info, trace, warn};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

/// Tunables of a relay instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RelayOptions {
    pub fingerprint_policy: FingerprintPolicy,
    /// `0` disables the outbound size check.
    pub max_content_bytes: usize,
}

impl Default for RelayOptions {
    fn default() -> Self {
        Self { fingerprint_policy: FingerprintPolicy::default(), max_content_bytes: DEFAULT_MAX_CONTENT_BYTES }
    }
}

struct RelayState {
    ownership: Ownership,
    registry: RelayerRegistry,
    outbound: OutboundLedger,
    inbound: InboundProcessor,
}

/// The relay: owner gate, relayer registry, outbound ledger and inbound replay protection behind one lock.
///
/// Every operation takes the lock, so writes are serialized and reads see the last commit.
/// Notifications are published while the lock is held; sink order equals commit order.
pub struct RelayCore {
    state: Mutex<RelayState>,
    clock: Arc<dyn Clock>,
    sink: Arc<dyn NotificationSink>,
}

impl RelayCore {
    /// Relay with the system clock, default options and log-backed notifications.
    pub fn new(deployer: Identity) -> Result<Self> {
        Self::with_parts(deployer, RelayOptions::default(), Arc::new(SystemClock), Arc::new(StructuredNotificationLogger))
    }

    /// `deployer` becomes the owner and the first trusted relayer.
    pub fn with_parts(
        deployer: Identity,
        options: RelayOptions,
        clock: Arc<dyn Clock>,
        sink: Arc<dyn NotificationSink>,
    ) -> Result<Self> {
        let ownership = Ownership::new(deployer)?;
        let state = RelayState {
            ownership,
            registry: RelayerRegistry::with_bootstrap_relayer(deployer),
            outbound: OutboundLedger::new(options.max_content_bytes),
            inbound: InboundProcessor::new(options.fingerprint_policy),
        };
        info!(
            "relay: initialized owner={} fingerprint_policy={:?} max_content_bytes={}",
            deployer, options.fingerprint_policy, options.max_content_bytes
        );
        Ok(Self { state: Mutex::new(state), clock, sink })
    }

    /// Builds a relay from validated configuration: owner, options and notification sinks.
    pub fn bootstrap(config: &RelayConfig) -> Result<Self> {
        config.validate().map_err(|errors| RelayError::ConfigError(format!("validation failed: {:?}", errors)))?;
        let owner: Identity = config
            .relay
            .owner
            .as_deref()
            .ok_or_else(|| RelayError::ConfigError("relay.owner is required".to_string()))?
            .trim()
            .parse()?;

        let mut sinks = MultiNotificationSink::new();
        if config.notifications.structured_log {
            sinks.add_sink(Box::new(StructuredNotificationLogger));
        }
        if let Some(path) = config.notifications.log_path.as_deref() {
            let file = FileNotificationLog::new(Path::new(path.trim())).map_err(|err| crate::storage_err!("open notification log", err))?;
            sinks.add_sink(Box::new(file));
        }
        debug!("relay: bootstrap sinks={} notification_log={}", sinks.len(), config.notifications.log_path.as_deref().unwrap_or("-"));

        let options =
            RelayOptions { fingerprint_policy: config.relay.fingerprint_policy, max_content_bytes: config.relay.max_content_bytes };
        Self::with_parts(owner, options, Arc::new(SystemClock), Arc::new(sinks))
    }

    fn lock_state(&self) -> Result<MutexGuard<'_, RelayState>> {
        self.state.lock().map_err(|_| crate::storage_err!("relay state lock", "poisoned"))
    }

    pub fn owner(&self) -> Result<Identity> {
        Ok(self.lock_state()?.ownership.owner())
    }

    pub fn fingerprint_policy(&self) -> Result<FingerprintPolicy> {
        Ok(self.lock_state()?.inbound.policy())
    }

    /// Moves the admin gate. Relayer trust is left untouched.
    pub fn transfer_ownership(&self, caller: Identity, new_owner: Identity) -> Result<()> {
        let mut state = self.lock_state()?;
        let previous_owner = state.ownership.transfer(&caller, new_owner).map_err(|err| {
            warn!("relay: ownership transfer rejected caller={} new_owner={} error={}", caller, new_owner, err);
            err
        })?;
        info!("relay: ownership transferred previous_owner={} new_owner={}", previous_owner, new_owner);
        self.sink.publish(&RelayNotification::OwnershipTransferred { previous_owner, new_owner });
        Ok(())
    }

    pub fn set_relayer_trust(&self, caller: Identity, target: Identity, trusted: bool) -> Result<()> {
        let mut state = self.lock_state()?;
        let RelayState { ownership, registry, .. } = &mut *state;
        let change = registry.set_relayer_trust(ownership, &caller, target, trusted).map_err(|err| {
            warn!("relay: trust update rejected caller={} relayer={} trusted={} error={}", caller, target, trusted, err);
            err
        })?;
        info!("relay: relayer trust set relayer={} trusted={} changed={}", change.relayer, change.trusted, change.changed);
        self.sink.publish(&RelayNotification::RelayerTrustChanged { relayer: change.relayer, trusted: change.trusted });
        Ok(())
    }

    pub fn is_trusted(&self, identity: Identity) -> Result<bool> {
        Ok(self.lock_state()?.registry.is_trusted(&identity))
    }

    pub fn trusted_relayers(&self) -> Result<Vec<Identity>> {
        Ok(self.lock_state()?.registry.trusted_relayers())
    }

    /// Permissionless. Returns the index of the new ledger entry.
    pub fn submit_outbound(&self, caller: Identity, content: impl Into<String>) -> Result<u64> {
        let content = content.into();
        let mut state = self.lock_state()?;
        let submitted_at = self.clock.now_secs();
        let message = state.outbound.append(caller, content, submitted_at).map_err(|err| {
            debug!("relay: outbound rejected sender={} error={}", caller, err);
            err
        })?;
        let index = message.index;
        info!("relay: outbound submitted index={} sender={} submitted_at={} bytes={}", index, caller, submitted_at, message.content.len());
        self.sink.publish(&RelayNotification::MessageSubmitted {
            index,
            sender: message.sender,
            content: message.content.clone(),
            submitted_at,
        });
        Ok(index)
    }

    pub fn count(&self) -> Result<u64> {
        Ok(self.lock_state()?.outbound.count())
    }

    /// Full snapshot in submission order.
    pub fn list_all(&self) -> Result<Vec<OutboundMessage>> {
        let messages = self.lock_state()?.outbound.list_all();
        trace!("relay: list_all count={}", messages.len());
        Ok(messages)
    }

    pub fn list_range(&self, start: u64, limit: u64) -> Result<Vec<OutboundMessage>> {
        Ok(self.lock_state()?.outbound.list_range(start, limit))
    }

    pub fn get(&self, index: u64) -> Result<Option<OutboundMessage>> {
        Ok(self.lock_state()?.outbound.get(index))
    }

    /// Accepts a message attributed to `original_sender` from a trusted relayer, at most once per dedup key.
    pub fn deliver_inbound(
        &self,
        caller: Identity,
        original_sender: Identity,
        content: impl Into<String>,
        timestamp: u64,
        supplied_fingerprint: Fingerprint,
    ) -> Result<InboundReceipt> {
        self.deliver(caller, InboundDelivery::with_fingerprint(original_sender, content, timestamp, supplied_fingerprint))
    }

    pub fn deliver(&self, caller: Identity, delivery: InboundDelivery) -> Result<InboundReceipt> {
        let mut state = self.lock_state()?;
        let RelayState { registry, inbound, .. } = &mut *state;
        let original_sender = delivery.original_sender;
        let receipt = inbound.accept(registry, &caller, delivery).map_err(|err| {
            warn!("relay: inbound rejected relayer={} original_sender={} code={:?} error={}", caller, original_sender, err.code(), err);
            err
        })?;
        info!(
            "relay: inbound accepted relayer={} original_sender={} timestamp={} fingerprint={}",
            caller, receipt.original_sender, receipt.timestamp, receipt.fingerprint
        );
        self.sink.publish(&RelayNotification::MessageReceived {
            original_sender: receipt.original_sender,
            content: receipt.content.clone(),
            timestamp: receipt.timestamp,
        });
        Ok(receipt)
    }

    pub fn is_processed(&self, fingerprint: &Fingerprint) -> Result<bool> {
        Ok(self.lock_state()?.inbound.is_processed(fingerprint))
    }

    pub fn processed_count(&self) -> Result<u64> {
        Ok(self.lock_state()?.inbound.processed_count())
    }
}
