// hcetag/src/protocol/apdu.rs
//! Command APDU view and reader-side encoders.

use crate::constants::{
    APDU_HEADER_LEN, EXTENDED_LE_APDU_LEN, INS_READ_BINARY, INS_SELECT, P1_SELECT_BY_FILE_ID,
    P1_SELECT_BY_NAME, P2_NO_RESPONSE_DATA,
};
use crate::protocol::parser;
use crate::types::FileId;
use crate::{Error, Result};

/// A borrowed view over a raw command APDU.
///
/// Layout: `CLA INS P1 P2 [Lc data] [Le]`. Only the header is validated up
/// front; body fields are decoded on demand because their meaning depends
/// on the instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandApdu<'a> {
    /// Class byte
    pub cla: u8,
    /// Instruction byte
    pub ins: u8,
    /// Parameter 1
    pub p1: u8,
    /// Parameter 2
    pub p2: u8,
    raw: &'a [u8],
}

impl<'a> CommandApdu<'a> {
    /// Split off the four header bytes. Fails on anything shorter.
    pub fn parse(raw: &'a [u8]) -> Result<Self> {
        parser::ensure_len(raw, APDU_HEADER_LEN)?;
        Ok(Self {
            cla: raw[0],
            ins: raw[1],
            p1: raw[2],
            p2: raw[3],
            raw,
        })
    }

    /// The whole command as received.
    pub fn raw(&self) -> &'a [u8] {
        self.raw
    }

    /// Everything after the header.
    pub fn body(&self) -> &'a [u8] {
        &self.raw[APDU_HEADER_LEN..]
    }

    /// P1 P2 read as one big-endian value (READ BINARY offset).
    pub fn p1p2(&self) -> u16 {
        u16::from_be_bytes([self.p1, self.p2])
    }

    /// Short Lc byte at offset 4, if present.
    pub fn lc(&self) -> Option<u8> {
        self.raw.get(APDU_HEADER_LEN).copied()
    }

    /// Command data as declared by the short Lc byte. Fails when the
    /// command has no Lc or is shorter than Lc announces.
    pub fn data(&self) -> Result<&'a [u8]> {
        let lc = self
            .lc()
            .ok_or_else(|| Error::MalformedApdu("missing Lc".into()))?;
        parser::slice_at(self.raw, APDU_HEADER_LEN + 1, lc as usize)
    }

    /// Expected response length for a command without a data field.
    ///
    /// * header only: `None`, the caller reads to the end of the file
    /// * `00 Le1 Le2` after the header: extended Le, `0000` means 65536
    /// * otherwise the trailing byte: short Le, `00` means 256
    pub fn le(&self) -> Option<usize> {
        let len = self.raw.len();
        if len <= APDU_HEADER_LEN {
            return None;
        }
        if len == EXTENDED_LE_APDU_LEN && self.raw[APDU_HEADER_LEN] == 0x00 {
            let ext = u16::from_be_bytes([self.raw[5], self.raw[6]]);
            return Some(if ext == 0 { 65536 } else { ext as usize });
        }
        let short = self.raw[len - 1];
        Some(if short == 0 { 256 } else { short as usize })
    }
}

/// Encode SELECT by name (`00 A4 04 00 Lc AID 00`).
pub fn encode_select_aid(aid: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(6 + aid.len());
    buf.extend_from_slice(&[0x00, INS_SELECT, P1_SELECT_BY_NAME, 0x00]);
    buf.push(aid.len() as u8);
    buf.extend_from_slice(aid);
    buf.push(0x00);
    buf
}

/// Encode SELECT by file id without FCI (`00 A4 00 0C 02 id`).
pub fn encode_select_file(file_id: FileId) -> Vec<u8> {
    let mut buf = vec![0x00, INS_SELECT, P1_SELECT_BY_FILE_ID, P2_NO_RESPONSE_DATA, 0x02];
    buf.extend_from_slice(&file_id.to_be_bytes());
    buf
}

/// Encode READ BINARY with a short Le.
pub fn encode_read_binary(offset: u16, le: u8) -> Vec<u8> {
    let [p1, p2] = offset.to_be_bytes();
    vec![0x00, INS_READ_BINARY, p1, p2, le]
}

/// Encode READ BINARY with an extended Le (`00 Le1 Le2`).
pub fn encode_read_binary_extended(offset: u16, le: u16) -> Vec<u8> {
    let [p1, p2] = offset.to_be_bytes();
    let [le1, le2] = le.to_be_bytes();
    vec![0x00, INS_READ_BINARY, p1, p2, 0x00, le1, le2]
}
