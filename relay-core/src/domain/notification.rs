use crate::foundation::Identity;
use serde::{Deserialize, Serialize};

/// Externally observable record of a committed state change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RelayNotification {
    MessageSubmitted { index: u64, sender: Identity, content: String, submitted_at: u64 },
    RelayerTrustChanged { relayer: Identity, trusted: bool },
    MessageReceived { original_sender: Identity, content: String, timestamp: u64 },
    OwnershipTransferred { previous_owner: Identity, new_owner: Identity },
}

impl RelayNotification {
    pub fn kind(&self) -> &'static str {
        match self {
            RelayNotification::MessageSubmitted { .. } => "message_submitted",
            RelayNotification::RelayerTrustChanged { .. } => "relayer_trust_changed",
            RelayNotification::MessageReceived { .. } => "message_received",
            RelayNotification::OwnershipTransferred { .. } => "ownership_transferred",
        }
    }
}
