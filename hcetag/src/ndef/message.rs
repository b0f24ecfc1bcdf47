// hcetag/src/ndef/message.rs
//! The NDEF file: NLEN followed by a single record.

use crate::constants::{
    CONTENT_TOO_LARGE_TEXT, DEFAULT_LANGUAGE_CODE, MAX_NDEF_FILE_SIZE, NLEN_SIZE,
    NO_ACTIVE_CARD_TEXT,
};
use crate::ndef::record::{NdefRecord, build_text_record, build_uri_record};
use crate::protocol::parser;
use crate::types::{ActivePayload, PayloadKind};
use crate::{Error, Result};

/// Build the NDEF file (NLEN + one record) for a payload.
///
/// A non-blank URI wins over the text; blank text and no URI gives the
/// `NO_ACTIVE_CARD` text record. Output never exceeds
/// [`MAX_NDEF_FILE_SIZE`]: oversized content is replaced by a short
/// "Content too large" text record.
pub fn build_ndef_file(kind: PayloadKind, primary_text: &str, uri: Option<&str>) -> Vec<u8> {
    build_ndef_file_with_language(kind, primary_text, uri, DEFAULT_LANGUAGE_CODE)
}

/// [`build_ndef_file`] with an explicit language code for text records.
pub fn build_ndef_file_with_language(
    kind: PayloadKind,
    primary_text: &str,
    uri: Option<&str>,
    language_code: &str,
) -> Vec<u8> {
    let record = match uri.filter(|u| !u.trim().is_empty()) {
        Some(uri) => build_uri_record(uri),
        None if !primary_text.trim().is_empty() => build_text_record(primary_text, language_code),
        None => build_text_record(NO_ACTIVE_CARD_TEXT, language_code),
    };

    let file = wrap_record(&record);
    if file.len() <= MAX_NDEF_FILE_SIZE {
        return file;
    }

    log::warn!(
        "{} payload needs {} bytes, limit is {}; serving fallback",
        kind,
        file.len(),
        MAX_NDEF_FILE_SIZE
    );
    // Recurses once: the fallback text is far below the limit.
    build_ndef_file_with_language(PayloadKind::Text, CONTENT_TOO_LARGE_TEXT, None, language_code)
}

/// NDEF file for an optional payload; `None` means there is no active card.
pub fn ndef_file_for(payload: Option<&ActivePayload>, language_code: &str) -> Vec<u8> {
    match payload {
        Some(p) => build_ndef_file_with_language(p.kind, &p.text, p.usable_uri(), language_code),
        None => no_active_card_file(language_code),
    }
}

/// The file served when the data layer has nothing to broadcast.
pub fn no_active_card_file(language_code: &str) -> Vec<u8> {
    build_ndef_file_with_language(PayloadKind::Text, NO_ACTIVE_CARD_TEXT, None, language_code)
}

/// Prefix a record with its 2-byte big-endian length (NLEN).
pub fn wrap_record(record: &[u8]) -> Vec<u8> {
    let mut file = Vec::with_capacity(NLEN_SIZE + record.len());
    file.extend_from_slice(&(record.len().min(u16::MAX as usize) as u16).to_be_bytes());
    file.extend_from_slice(record);
    file
}

/// Decode an NDEF file back into its single record.
pub fn parse_ndef_file(file: &[u8]) -> Result<NdefRecord> {
    let nlen = parser::be_u16_at(file, 0)? as usize;
    let message = parser::slice_at(file, NLEN_SIZE, nlen)?;
    let (record, used) = NdefRecord::parse(message)?;
    if used != nlen {
        return Err(Error::NdefFormat(format!(
            "record occupies {} bytes but NLEN is {}",
            used, nlen
        )));
    }
    Ok(record)
}
