// hcetag/src/protocol/command.rs
//! Command APDUs decoded into the operations the tag knows.

use crate::constants::{
    INS_READ_BINARY, INS_SELECT, INS_UPDATE_BINARY, P1_SELECT_BY_FILE_ID, P1_SELECT_BY_NAME,
    P2_FIRST_OR_ONLY, P2_NO_RESPONSE_DATA,
};
use crate::protocol::apdu::CommandApdu;
use crate::types::FileId;
use crate::Result;

/// The forms of SELECT the tag distinguishes. P1 alone decides between
/// name and file-id selection, before any length check of either form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Select<'a> {
    /// P1=04. `None` when the command is too short for the AID it declares.
    ByName(Option<&'a [u8]>),
    /// P1=00, P2 in {00, 0C}. `None` when Lc is not 2 or the data is short.
    ByFileId(Option<FileId>),
    /// Any other P1/P2 pair.
    Other { p1: u8, p2: u8 },
}

/// A command APDU decoded into what the emulator should do with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    /// SELECT (A4)
    Select(Select<'a>),
    /// READ BINARY (B0) with offset from P1P2 and the decoded Le
    ReadBinary { offset: u16, le: Option<usize> },
    /// UPDATE BINARY (D6)
    UpdateBinary,
    /// Any other instruction
    Unsupported { ins: u8 },
}

impl<'a> Command<'a> {
    /// Decode a raw command. Only a command shorter than its header is an
    /// error; every other shape maps onto a variant so that the caller can
    /// answer it with a status word.
    pub fn parse(raw: &'a [u8]) -> Result<Self> {
        let apdu = CommandApdu::parse(raw)?;
        Ok(Self::from_apdu(&apdu))
    }

    /// Decode an already split command.
    pub fn from_apdu(apdu: &CommandApdu<'a>) -> Self {
        match apdu.ins {
            INS_SELECT => Command::Select(decode_select(apdu)),
            INS_READ_BINARY => Command::ReadBinary {
                offset: apdu.p1p2(),
                le: apdu.le(),
            },
            INS_UPDATE_BINARY => Command::UpdateBinary,
            ins => Command::Unsupported { ins },
        }
    }

    /// Short name used in the APDU trace.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Select(Select::ByName(_)) => "SELECT AID",
            Command::Select(Select::ByFileId(_)) => "SELECT FILE",
            Command::Select(Select::Other { .. }) => "SELECT",
            Command::ReadBinary { .. } => "READ BINARY",
            Command::UpdateBinary => "UPDATE BINARY",
            Command::Unsupported { .. } => "UNSUPPORTED",
        }
    }
}

fn decode_select<'a>(apdu: &CommandApdu<'a>) -> Select<'a> {
    match (apdu.p1, apdu.p2) {
        (P1_SELECT_BY_NAME, _) => Select::ByName(apdu.data().ok()),
        (P1_SELECT_BY_FILE_ID, P2_FIRST_OR_ONLY | P2_NO_RESPONSE_DATA) => {
            let file_id = match apdu.lc() {
                Some(2) => apdu
                    .data()
                    .ok()
                    .and_then(|d| FileId::try_from(d).ok()),
                _ => None,
            };
            Select::ByFileId(file_id)
        }
        (p1, p2) => Select::Other { p1, p2 },
    }
}
