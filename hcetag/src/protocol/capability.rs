// hcetag/src/protocol/capability.rs
//! Capability Container file (file id E103).
//!
//! Layout (NFC Forum Type 4 Tag, mapping version 2.0):
//!
//! ```text
//! CCLEN(2) | version(1) | MLe(2) | MLc(2) | T=04 L=06 | file id(2) | max size(2) | read | write
//! ```

use crate::constants::{MAX_NDEF_FILE_SIZE, NDEF_FILE_ID};
use crate::protocol::parser;
use crate::types::FileId;
use crate::{Error, Result};

/// CCLEN value and total size of the capability container
pub const CC_LEN: usize = 15;

/// Mapping version 2.0
pub const MAPPING_VERSION: u8 = 0x20;

/// Maximum R-APDU data size (MLe) and C-APDU data size (MLc) advertised
pub const MAX_LE: u16 = 0xFFFF;
/// Maximum C-APDU data size advertised
pub const MAX_LC: u16 = 0xFFFF;

/// NDEF File Control TLV tag and length
pub const NDEF_FILE_CONTROL_TAG: u8 = 0x04;
/// Length of the NDEF File Control TLV value
pub const NDEF_FILE_CONTROL_LEN: u8 = 0x06;

/// Access condition bytes
pub const ACCESS_GRANTED: u8 = 0x00;
/// Write access byte of a read-only tag
pub const ACCESS_DENIED: u8 = 0xFF;

const fn build() -> [u8; CC_LEN] {
    let cclen = (CC_LEN as u16).to_be_bytes();
    let mle = MAX_LE.to_be_bytes();
    let mlc = MAX_LC.to_be_bytes();
    let file = NDEF_FILE_ID.to_be_bytes();
    let max = (MAX_NDEF_FILE_SIZE as u16).to_be_bytes();
    [
        cclen[0],
        cclen[1],
        MAPPING_VERSION,
        mle[0],
        mle[1],
        mlc[0],
        mlc[1],
        NDEF_FILE_CONTROL_TAG,
        NDEF_FILE_CONTROL_LEN,
        file[0],
        file[1],
        max[0],
        max[1],
        ACCESS_GRANTED,
        ACCESS_DENIED,
    ]
}

/// The CC file served for E103. Read-only tag: write access is denied.
pub const CAPABILITY_CONTAINER: [u8; CC_LEN] = build();

/// Decoded view of a capability container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityContainer {
    /// CCLEN
    pub cc_len: u16,
    /// Mapping version, 0x20 for 2.0
    pub mapping_version: u8,
    /// MLe: largest R-APDU data field
    pub max_le: u16,
    /// MLc: largest C-APDU data field
    pub max_lc: u16,
    /// Where the NDEF file lives
    pub ndef_file_id: FileId,
    /// Largest NDEF file, NLEN included
    pub max_ndef_size: u16,
    /// Read access condition
    pub read_access: u8,
    /// Write access condition
    pub write_access: u8,
}

impl CapabilityContainer {
    /// Decode the first 15 bytes of a CC file.
    pub fn parse(data: &[u8]) -> Result<Self> {
        parser::ensure_len(data, CC_LEN)?;
        let tag = parser::byte_at(data, 7)?;
        let len = parser::byte_at(data, 8)?;
        if tag != NDEF_FILE_CONTROL_TAG || len != NDEF_FILE_CONTROL_LEN {
            return Err(Error::NdefFormat(format!(
                "unexpected file control TLV {:02X} {:02X}",
                tag, len
            )));
        }
        Ok(Self {
            cc_len: parser::be_u16_at(data, 0)?,
            mapping_version: parser::byte_at(data, 2)?,
            max_le: parser::be_u16_at(data, 3)?,
            max_lc: parser::be_u16_at(data, 5)?,
            ndef_file_id: FileId::new(parser::be_u16_at(data, 9)?),
            max_ndef_size: parser::be_u16_at(data, 11)?,
            read_access: parser::byte_at(data, 13)?,
            write_access: parser::byte_at(data, 14)?,
        })
    }

    /// Readable by anyone, writable by no one.
    pub fn is_read_only(&self) -> bool {
        self.read_access == ACCESS_GRANTED && self.write_access == ACCESS_DENIED
    }
}
