// hcetag/src/protocol/response.rs
//! Response APDUs.

use crate::protocol::parser;
use crate::protocol::status::StatusWord;
use crate::Result;

/// A response APDU: optional data followed by the status word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Response data, empty for status-only answers
    pub data: Vec<u8>,
    /// Trailing status word
    pub status: StatusWord,
}

impl Response {
    /// Status-only response.
    pub fn status(status: StatusWord) -> Self {
        Self {
            data: Vec::new(),
            status,
        }
    }

    /// Data followed by 9000.
    pub fn ok(data: Vec<u8>) -> Self {
        Self {
            data,
            status: StatusWord::Success,
        }
    }

    /// Wire bytes; the status word is always the last two bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        let mut out = self.data;
        out.extend_from_slice(&self.status.to_bytes());
        out
    }
}

/// Split raw response bytes into data and the trailing SW1 SW2 value.
/// Used on the reader side of tests and tooling.
pub fn split_status(raw: &[u8]) -> Result<(&[u8], u16)> {
    parser::ensure_len(raw, 2)?;
    let at = raw.len() - 2;
    let sw = parser::be_u16_at(raw, at)?;
    Ok((&raw[..at], sw))
}
