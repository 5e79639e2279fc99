// Public crate surface is organized by layer: `domain`, `infrastructure`, `application`, `foundation`.
pub mod application;
pub mod domain;
pub mod foundation;
pub mod infrastructure;

pub use application::{RelayCore, RelayOptions};
pub use domain::{fingerprint, FingerprintPolicy, InboundDelivery, InboundReceipt, OutboundMessage, RelayNotification};
pub use foundation::{ErrorKind, Fingerprint, Identity, RelayError, Result};
