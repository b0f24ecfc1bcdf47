// hcetag/src/ndef/record.rs
//! NDEF record encoding and decoding.

use crate::constants::{
    DEFAULT_LANGUAGE_CODE, NDEF_FLAG_CF, NDEF_FLAG_IL, NDEF_FLAG_MB, NDEF_FLAG_ME, NDEF_FLAG_SR,
    NDEF_SHORT_RECORD_MAX, NDEF_TNF_MASK, NDEF_TNF_WELL_KNOWN, NDEF_TYPE_TEXT, NDEF_TYPE_URI,
};
use crate::ndef::uri;
use crate::protocol::parser;
use crate::{Error, Result};

/// Text record status byte: bit 7 selects UTF-16, bits 5..0 hold the
/// language code length.
const TEXT_UTF16_FLAG: u8 = 0x80;
const TEXT_LANG_LEN_MASK: u8 = 0x3F;

/// A single NDEF record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdefRecord {
    /// Type Name Format (3 bits)
    pub tnf: u8,
    /// Record type, `U` or `T` for the records the tag serves
    pub record_type: Vec<u8>,
    /// Optional record id; sets IL when present
    pub id: Option<Vec<u8>>,
    /// Record payload
    pub payload: Vec<u8>,
}

/// Decoded payload of the well-known record types the tag serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordContent {
    /// URI with its prefix expanded
    Uri(String),
    /// Text and its language code
    Text { language: String, text: String },
    /// Any other record type
    Other,
}

impl NdefRecord {
    /// Well-known (TNF 1) record with a one-byte type.
    pub fn well_known(record_type: u8, payload: Vec<u8>) -> Self {
        Self {
            tnf: NDEF_TNF_WELL_KNOWN,
            record_type: vec![record_type],
            id: None,
            payload,
        }
    }

    /// Whether the payload length fits the one-byte SR form.
    pub fn is_short(&self) -> bool {
        self.payload.len() <= NDEF_SHORT_RECORD_MAX
    }

    /// Serialize as the only record of a message (MB=1, ME=1, CF=0).
    pub fn encode(&self) -> Vec<u8> {
        let mut header = NDEF_FLAG_MB | NDEF_FLAG_ME | (self.tnf & NDEF_TNF_MASK);
        if self.is_short() {
            header |= NDEF_FLAG_SR;
        }
        if self.id.is_some() {
            header |= NDEF_FLAG_IL;
        }

        let id_len = self.id.as_ref().map_or(0, Vec::len);
        let mut out =
            Vec::with_capacity(6 + id_len + self.record_type.len() + self.payload.len());
        out.push(header);
        out.push(self.record_type.len() as u8);
        if self.is_short() {
            out.push(self.payload.len() as u8);
        } else {
            out.extend_from_slice(&(self.payload.len() as u32).to_be_bytes());
        }
        if let Some(id) = &self.id {
            out.push(id.len() as u8);
        }
        out.extend_from_slice(&self.record_type);
        if let Some(id) = &self.id {
            out.extend_from_slice(id);
        }
        out.extend_from_slice(&self.payload);
        out
    }

    /// Decode one record from the front of `data`. Returns the record and
    /// the number of bytes it occupied. Chunked records are rejected.
    pub fn parse(data: &[u8]) -> Result<(Self, usize)> {
        let header = parser::byte_at(data, 0)?;
        if header & NDEF_FLAG_CF != 0 {
            return Err(Error::NdefFormat("chunked records are not supported".into()));
        }
        let type_len = parser::byte_at(data, 1)? as usize;

        let mut cursor = 2usize;
        let payload_len = if header & NDEF_FLAG_SR != 0 {
            let len = parser::byte_at(data, cursor)? as usize;
            cursor += 1;
            len
        } else {
            let len = parser::be_u32_at(data, cursor)? as usize;
            cursor += 4;
            len
        };

        let id_len = if header & NDEF_FLAG_IL != 0 {
            let len = parser::byte_at(data, cursor)? as usize;
            cursor += 1;
            Some(len)
        } else {
            None
        };

        let record_type = parser::slice_at(data, cursor, type_len)?.to_vec();
        cursor += type_len;

        let id = match id_len {
            Some(len) => {
                let id = parser::slice_at(data, cursor, len)?.to_vec();
                cursor += len;
                Some(id)
            }
            None => None,
        };

        let payload = parser::slice_at(data, cursor, payload_len)?.to_vec();
        cursor += payload_len;

        Ok((
            Self {
                tnf: header & NDEF_TNF_MASK,
                record_type,
                id,
                payload,
            },
            cursor,
        ))
    }

    /// Interpret the payload of a URI or Text record.
    pub fn content(&self) -> Result<RecordContent> {
        if self.tnf != NDEF_TNF_WELL_KNOWN {
            return Ok(RecordContent::Other);
        }
        match self.record_type.as_slice() {
            [NDEF_TYPE_URI] => decode_uri(&self.payload),
            [NDEF_TYPE_TEXT] => decode_text(&self.payload),
            _ => Ok(RecordContent::Other),
        }
    }
}

/// URI record payload: identifier code followed by the rest of the URI.
pub fn uri_payload(uri: &str) -> Vec<u8> {
    let (code, rest) = uri::abbreviate(uri);
    let mut payload = Vec::with_capacity(1 + rest.len());
    payload.push(code);
    payload.extend_from_slice(rest.as_bytes());
    payload
}

/// Text record payload: status byte, language code, UTF-8 text.
pub fn text_payload(text: &str, language_code: &str) -> Vec<u8> {
    let lang = usable_language_code(language_code);
    let mut payload = Vec::with_capacity(1 + lang.len() + text.len());
    payload.push(lang.len() as u8 & TEXT_LANG_LEN_MASK);
    payload.extend_from_slice(lang.as_bytes());
    payload.extend_from_slice(text.as_bytes());
    payload
}

/// Serialize a complete URI record (type `U`).
pub fn build_uri_record(uri: &str) -> Vec<u8> {
    NdefRecord::well_known(NDEF_TYPE_URI, uri_payload(uri)).encode()
}

/// Serialize a complete Text record (type `T`, UTF-8).
pub fn build_text_record(text: &str, language_code: &str) -> Vec<u8> {
    NdefRecord::well_known(NDEF_TYPE_TEXT, text_payload(text, language_code)).encode()
}

fn usable_language_code(code: &str) -> &str {
    let valid = !code.is_empty()
        && code.len() <= TEXT_LANG_LEN_MASK as usize
        && code.bytes().all(|b| b.is_ascii_graphic());
    if valid {
        code
    } else {
        log::warn!(
            "language code {:?} not usable in a text record, using {:?}",
            code,
            DEFAULT_LANGUAGE_CODE
        );
        DEFAULT_LANGUAGE_CODE
    }
}

fn decode_uri(payload: &[u8]) -> Result<RecordContent> {
    let code = parser::byte_at(payload, 0)?;
    let prefix = uri::expand(code)
        .ok_or_else(|| Error::NdefFormat(format!("reserved uri identifier code {:#04x}", code)))?;
    let rest = std::str::from_utf8(&payload[1..])
        .map_err(|e| Error::NdefFormat(format!("uri is not utf-8: {}", e)))?;
    Ok(RecordContent::Uri(format!("{}{}", prefix, rest)))
}

fn decode_text(payload: &[u8]) -> Result<RecordContent> {
    let status = parser::byte_at(payload, 0)?;
    let lang_len = (status & TEXT_LANG_LEN_MASK) as usize;
    let lang = parser::slice_at(payload, 1, lang_len)?;
    let body = &payload[1 + lang_len..];

    let language = String::from_utf8_lossy(lang).into_owned();
    let text = if status & TEXT_UTF16_FLAG != 0 {
        if body.len() % 2 != 0 {
            return Err(Error::NdefFormat("odd utf-16 text length".into()));
        }
        let units: Vec<u16> = body
            .chunks(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        String::from_utf16(&units)
            .map_err(|e| Error::NdefFormat(format!("text is not utf-16: {}", e)))?
    } else {
        std::str::from_utf8(body)
            .map_err(|e| Error::NdefFormat(format!("text is not utf-8: {}", e)))?
            .to_string()
    };

    Ok(RecordContent::Text { language, text })
}
