pub mod encoding;
pub(crate) mod hex_fmt;
pub mod time;

pub use encoding::*;
pub use time::*;
