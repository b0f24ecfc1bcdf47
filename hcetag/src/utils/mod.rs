//! Small helpers shared across the crate: APDU hex formatting for the
//! diagnostic trace and timeout conversions for the payload fetch.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
