// hcetag/src/constants.rs
//! Wire constants for the emulated NFC Forum Type 4 Tag

/// NDEF Tag Application AID (NFC Forum Type 4 Tag v2.0)
pub const NDEF_APPLICATION_AID: [u8; 7] = [0xD2, 0x76, 0x00, 0x00, 0x85, 0x01, 0x01];

/// File identifier of the Capability Container
pub const CC_FILE_ID: u16 = 0xE103;

/// File identifier of the NDEF file
pub const NDEF_FILE_ID: u16 = 0xE104;

/// ISO 7816-4 instruction bytes handled by the emulator
pub const INS_SELECT: u8 = 0xA4;
/// READ BINARY
pub const INS_READ_BINARY: u8 = 0xB0;
/// UPDATE BINARY, always refused
pub const INS_UPDATE_BINARY: u8 = 0xD6;

/// SELECT P1 values
pub const P1_SELECT_BY_FILE_ID: u8 = 0x00;
/// SELECT by DF name (AID)
pub const P1_SELECT_BY_NAME: u8 = 0x04;

/// SELECT P2 values accepted for file selection (first-or-only / no FCI)
pub const P2_FIRST_OR_ONLY: u8 = 0x00;
/// No FCI returned
pub const P2_NO_RESPONSE_DATA: u8 = 0x0C;

/// Command header length: CLA INS P1 P2
pub const APDU_HEADER_LEN: usize = 4;

/// Length of a READ BINARY command carrying an extended Le (header + 00 + Le1 Le2)
pub const EXTENDED_LE_APDU_LEN: usize = 7;

/// Largest NDEF file (NLEN included) the tag will ever expose. The
/// capability container advertises exactly this value.
pub const MAX_NDEF_FILE_SIZE: usize = 1024;

/// Size of the NLEN prefix at the start of the NDEF file
pub const NLEN_SIZE: usize = 2;

/// Text served when no active payload exists
pub const NO_ACTIVE_CARD_TEXT: &str = "NO_ACTIVE_CARD";

/// Text served when the payload does not fit into the NDEF file
pub const CONTENT_TOO_LARGE_TEXT: &str = "Content too large";

/// Language code for text records when the caller does not choose one
pub const DEFAULT_LANGUAGE_CODE: &str = "en";

/// NDEF record header bits
pub const NDEF_FLAG_MB: u8 = 0x80;
/// Message End
pub const NDEF_FLAG_ME: u8 = 0x40;
/// Chunk Flag, rejected on parse
pub const NDEF_FLAG_CF: u8 = 0x20;
/// Short Record: one-byte payload length
pub const NDEF_FLAG_SR: u8 = 0x10;
/// ID Length field present
pub const NDEF_FLAG_IL: u8 = 0x08;
/// Low three bits hold the TNF
pub const NDEF_TNF_MASK: u8 = 0x07;

/// Type Name Format: NFC Forum well-known type
pub const NDEF_TNF_WELL_KNOWN: u8 = 0x01;

/// Well-known record types
pub const NDEF_TYPE_URI: u8 = b'U';
/// Text record type
pub const NDEF_TYPE_TEXT: u8 = b'T';

/// Largest payload that still fits the one-byte short-record length field
pub const NDEF_SHORT_RECORD_MAX: usize = 255;

/// Budget in milliseconds for fetching the active payload during an
/// application SELECT. Readers drop a tag that stays silent for a few
/// hundred milliseconds.
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 500;
