// hcetag/src/prelude.rs
//! Common imports: `use hcetag::prelude::*;`

pub use crate::cache::PayloadCache;
pub use crate::emulator::{EmulatorConfig, TagEmulator, TagEmulatorBuilder};
pub use crate::ndef::{build_ndef_file, parse_ndef_file};
pub use crate::protocol::{Command, Response, StatusWord};
pub use crate::source::{FetchOutcome, PayloadSource, StaticSource};
pub use crate::transport::{HostApduService, MockReader};
pub use crate::{ActivePayload, DeactivationReason, Error, FileId, PayloadKind, Result};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, default_fetch_timeout, ms, parse_hex};
