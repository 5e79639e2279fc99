use crate::domain::ownership::Ownership;
use crate::foundation::{Identity, RelayError, Result};
use std::collections::HashMap;

/// Outcome of a trust update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrustChange {
    pub relayer: Identity,
    pub trusted: bool,
    /// `false` when the entry already held `trusted`.
    pub changed: bool,
}

/// Owner-controlled map of relayer identity to trust.
///
/// Entries are never removed; revoking trust flips the flag to `false`.
#[derive(Clone, Debug, Default)]
pub struct RelayerRegistry {
    relayers: HashMap<Identity, bool>,
}

impl RelayerRegistry {
    pub fn new() -> Self {
        Self { relayers: HashMap::new() }
    }

    /// Registry with `bootstrap` already trusted; used for the deploying identity.
    pub fn with_bootstrap_relayer(bootstrap: Identity) -> Self {
        let mut registry = Self::new();
        registry.relayers.insert(bootstrap, true);
        registry
    }

    pub fn is_trusted(&self, identity: &Identity) -> bool {
        self.relayers.get(identity).copied().unwrap_or(false)
    }

    pub fn set_relayer_trust(&mut self, gate: &Ownership, caller: &Identity, target: Identity, trusted: bool) -> Result<TrustChange> {
        gate.require_owner(caller)?;
        if target.is_null() {
            return Err(RelayError::null_identity("relayer"));
        }
        let previous = self.relayers.insert(target, trusted).unwrap_or(false);
        Ok(TrustChange { relayer: target, trusted, changed: previous != trusted })
    }

    /// Currently trusted identities in ascending order.
    pub fn trusted_relayers(&self) -> Vec<Identity> {
        let mut trusted: Vec<Identity> = self.relayers.iter().filter(|(_, trusted)| **trusted).map(|(id, _)| *id).collect();
        trusted.sort();
        trusted
    }
}
