pub mod relay;

pub use relay::{RelayCore, RelayOptions};
