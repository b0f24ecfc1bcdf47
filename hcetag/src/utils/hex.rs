//! Hexadecimal helpers for APDU traces.
//!
//! Readers, NFC controller logs and the ISO 7816 documents all print APDUs
//! as uppercase byte pairs, so the trace output follows the same shape and
//! can be pasted straight into a test vector.

use std::fmt::Write;

/// Uppercase hex without separators.
///
/// Example: `&[0xd2, 0x76]` -> `"D276"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
        // writing into a String cannot fail
        let _ = write!(s, "{:02X}", b);
        s
    })
}

/// Uppercase hex with one space between bytes.
///
/// Example: `&[0x00, 0xa4, 0x04, 0x00]` -> `"00 A4 04 00"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = write!(s, "{:02X}", b);
    }
    s
}

/// Parse an APDU written as hex. Whitespace and `:` separators are
/// ignored, case does not matter.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let digits: Vec<u8> = s
        .bytes()
        .filter(|c| !c.is_ascii_whitespace() && *c != b':')
        .collect();

    if digits.len() % 2 != 0 {
        return Err("hex string has odd length".to_string());
    }

    digits
        .chunks(2)
        .map(|pair| {
            let text = std::str::from_utf8(pair).map_err(|e| e.to_string())?;
            u8::from_str_radix(text, 16).map_err(|e| format!("invalid hex pair '{}': {}", text, e))
        })
        .collect()
}
