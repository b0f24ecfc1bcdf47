// hcetag/src/protocol/trace.rs
//! APDU trace lines for field debugging.
//!
//! Every exchange is logged at `trace`, and every error status is repeated
//! at `warn` together with the raw command so that a log captured on a
//! customer device is enough to replay the failing tap.

use crate::protocol::status::StatusWord;
use crate::utils::bytes_to_hex_spaced;

/// Log an inbound command.
pub fn command(raw: &[u8]) {
    log::trace!(">> C-APDU {}", bytes_to_hex_spaced(raw));
}

/// Log an outbound response.
pub fn response(raw: &[u8], status: StatusWord) {
    log::trace!("<< R-APDU {} [{}]", bytes_to_hex_spaced(raw), status);
}

/// Log a command answered with an error status.
pub fn rejected(name: &str, raw: &[u8], status: StatusWord, reason: &str) {
    log::warn!(
        "{} rejected with {}: {} (command {})",
        name,
        status,
        reason,
        bytes_to_hex_spaced(raw)
    );
}
