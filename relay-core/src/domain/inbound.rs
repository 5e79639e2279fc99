use crate::domain::hashes::fingerprint;
use crate::domain::registry::RelayerRegistry;
use crate::foundation::{Fingerprint, Identity, RelayError, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// How the dedup key of an inbound delivery is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FingerprintPolicy {
    /// Recompute from the payload; a differing supplied value is logged and ignored.
    #[default]
    Recompute,
    /// Recompute from the payload; a differing supplied value is rejected.
    Verify,
    /// Use the supplied value as-is.
    TrustSupplied,
}

/// Caller-side envelope for an inbound delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundDelivery {
    pub original_sender: Identity,
    pub content: String,
    pub timestamp: u64,
    pub fingerprint: Fingerprint,
}

impl InboundDelivery {
    /// Builds an envelope carrying the canonical fingerprint of the payload.
    pub fn new(original_sender: Identity, content: impl Into<String>, timestamp: u64) -> Self {
        let content = content.into();
        let fingerprint = fingerprint(&original_sender, &content, timestamp);
        Self { original_sender, content, timestamp, fingerprint }
    }

    pub fn with_fingerprint(original_sender: Identity, content: impl Into<String>, timestamp: u64, fingerprint: Fingerprint) -> Self {
        Self { original_sender, content: content.into(), timestamp, fingerprint }
    }

    pub fn computed_fingerprint(&self) -> Fingerprint {
        fingerprint(&self.original_sender, &self.content, self.timestamp)
    }
}

/// Acceptance report for an inbound delivery; `fingerprint` is the recorded dedup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundReceipt {
    pub original_sender: Identity,
    pub content: String,
    pub timestamp: u64,
    pub fingerprint: Fingerprint,
}

/// Replay-protected acceptance of inbound deliveries from trusted relayers.
#[derive(Debug, Clone, Default)]
pub struct InboundProcessor {
    processed: HashSet<Fingerprint>,
    policy: FingerprintPolicy,
}

impl InboundProcessor {
    pub fn new(policy: FingerprintPolicy) -> Self {
        Self { processed: HashSet::new(), policy }
    }

    pub fn policy(&self) -> FingerprintPolicy {
        self.policy
    }

    pub fn dedup_key(&self, delivery: &InboundDelivery) -> Result<Fingerprint> {
        if self.policy == FingerprintPolicy::TrustSupplied {
            return Ok(delivery.fingerprint);
        }
        let computed = delivery.computed_fingerprint();
        if !computed.ct_eq(&delivery.fingerprint) {
            match self.policy {
                FingerprintPolicy::Verify => {
                    return Err(RelayError::FingerprintMismatch {
                        supplied: delivery.fingerprint.to_string(),
                        computed: computed.to_string(),
                    });
                }
                _ => {
                    warn!(
                        "inbound: supplied fingerprint ignored supplied={} computed={} original_sender={}",
                        delivery.fingerprint, computed, delivery.original_sender
                    );
                }
            }
        }
        Ok(computed)
    }

    /// Checks, in order: caller trust, dedup key, replay. Nothing is recorded unless all pass.
    pub fn accept(&mut self, registry: &RelayerRegistry, caller: &Identity, delivery: InboundDelivery) -> Result<InboundReceipt> {
        if !registry.is_trusted(caller) {
            return Err(RelayError::UntrustedRelayer { caller: caller.to_string() });
        }
        let key = self.dedup_key(&delivery)?;
        if self.processed.contains(&key) {
            return Err(RelayError::AlreadyProcessed { fingerprint: key.to_string() });
        }
        self.processed.insert(key);
        debug!("inbound: fingerprint recorded fingerprint={} processed_count={}", key, self.processed.len());
        Ok(InboundReceipt {
            original_sender: delivery.original_sender,
            content: delivery.content,
            timestamp: delivery.timestamp,
            fingerprint: key,
        })
    }

    pub fn is_processed(&self, fingerprint: &Fingerprint) -> bool {
        self.processed.contains(fingerprint)
    }

    pub fn processed_count(&self) -> u64 {
        self.processed.len() as u64
    }
}
