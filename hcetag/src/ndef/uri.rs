// hcetag/src/ndef/uri.rs
//! URI Identifier Codes (NFC Forum URI Record Type Definition, table 3).

/// Code used when no abbreviation applies: the reader prepends `https://`.
pub const DEFAULT_URI_CODE: u8 = 0x04;

/// Prefixes the encoder abbreviates, longest first so that `https://www.`
/// wins over `https://`.
const ENCODED_PREFIXES: [(&str, u8); 4] = [
    ("https://www.", 0x02),
    ("http://www.", 0x01),
    ("https://", 0x04),
    ("http://", 0x03),
];

/// Full decoding table, indexed by identifier code.
const PREFIX_TABLE: [&str; 36] = [
    "",
    "http://www.",
    "https://www.",
    "http://",
    "https://",
    "tel:",
    "mailto:",
    "ftp://anonymous:anonymous@",
    "ftp://ftp.",
    "ftps://",
    "sftp://",
    "smb://",
    "nfs://",
    "ftp://",
    "dav://",
    "news:",
    "telnet://",
    "imap:",
    "rtsp://",
    "urn:",
    "pop:",
    "sip:",
    "sips:",
    "tftp:",
    "btspp://",
    "btl2cap://",
    "btgoep://",
    "tcpobex://",
    "irdaobex://",
    "file://",
    "urn:epc:id:",
    "urn:epc:tag:",
    "urn:epc:pat:",
    "urn:epc:raw:",
    "urn:epc:",
    "urn:nfc:",
];

/// Split `uri` into its identifier code and the remainder to store.
/// Unrecognized URIs keep every byte and get the `https://` code.
pub fn abbreviate(uri: &str) -> (u8, &str) {
    ENCODED_PREFIXES
        .iter()
        .find_map(|(prefix, code)| uri.strip_prefix(prefix).map(|rest| (*code, rest)))
        .unwrap_or((DEFAULT_URI_CODE, uri))
}

/// Prefix for an identifier code; `None` for reserved codes.
pub fn expand(code: u8) -> Option<&'static str> {
    PREFIX_TABLE.get(code as usize).copied()
}
