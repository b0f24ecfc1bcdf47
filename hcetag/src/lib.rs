// hcetag/src/lib.rs

//! hcetag
//!
//! Host card emulation of an NFC Forum Type 4 Tag. Serves a read-only
//! NDEF file (a URI or text record) built from whatever payload the data
//! layer marks as active.
#![warn(missing_docs)]

pub mod cache;
pub mod constants;
pub mod emulator;
pub mod error;
pub mod ndef;
pub mod prelude;
pub mod protocol;
pub mod source;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the payload types are available for consumers and for the
// `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
