pub mod hashes;
pub mod inbound;
pub mod notification;
pub mod outbound;
pub mod ownership;
pub mod registry;

pub use hashes::{abi_encode_delivery, fingerprint};
pub use inbound::{FingerprintPolicy, InboundDelivery, InboundProcessor, InboundReceipt};
pub use notification::RelayNotification;
pub use outbound::{OutboundLedger, OutboundMessage};
pub use ownership::Ownership;
pub use registry::{RelayerRegistry, TrustChange};
