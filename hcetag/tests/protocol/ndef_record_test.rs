use hcetag::constants::{CONTENT_TOO_LARGE_TEXT, MAX_NDEF_FILE_SIZE, NO_ACTIVE_CARD_TEXT};
use hcetag::ndef::{self, RecordContent, build_ndef_file, parse_ndef_file};
use hcetag::PayloadKind;

#[path = "../common/mod.rs"]
mod common;

fn content(file: &[u8]) -> RecordContent {
    parse_ndef_file(file).unwrap().content().unwrap()
}

#[test]
fn nexus_link_bytes() {
    let file = build_ndef_file(PayloadKind::Link, "", Some(common::fixtures::NEXUS_URI));
    assert_eq!(file, common::fixtures::nexus_ndef_file());
    assert_eq!(
        content(&file),
        RecordContent::Uri(common::fixtures::NEXUS_URI.to_string())
    );
}

#[test]
fn uri_prefix_codes() {
    let cases = [
        ("http://www.a.io", 0x01u8),
        ("https://www.a.io", 0x02),
        ("http://a.io", 0x03),
        ("https://a.io", 0x04),
    ];
    for (uri, code) in cases {
        let file = build_ndef_file(PayloadKind::Link, "", Some(uri));
        let record = parse_ndef_file(&file).unwrap();
        assert_eq!(record.payload[0], code, "{}", uri);
        assert_eq!(content(&file), RecordContent::Uri(uri.to_string()));
    }
}

#[test]
fn unknown_scheme_is_sent_whole_under_https_code() {
    let file = build_ndef_file(PayloadKind::Link, "", Some("mailto:a@b.c"));
    let record = parse_ndef_file(&file).unwrap();
    assert_eq!(record.payload[0], 0x04);
    assert_eq!(&record.payload[1..], b"mailto:a@b.c");
}

#[test]
fn text_record_bytes() {
    let file = build_ndef_file(PayloadKind::Text, "Hi", None);
    assert_eq!(
        file,
        vec![0x00, 0x09, 0xD1, 0x01, 0x05, 0x54, 0x02, b'e', b'n', b'H', b'i']
    );
}

#[test]
fn contact_card_is_served_as_text() {
    let payload = common::fixtures::contact_text();
    let file = ndef::ndef_file_for(Some(&payload), "en");
    match content(&file) {
        RecordContent::Text { language, text } => {
            assert_eq!(language, "en");
            assert_eq!(text, payload.text);
        }
        other => panic!("unexpected content: {:?}", other),
    }
}

#[test]
fn sentinel_and_size_fallback() {
    let empty = build_ndef_file(PayloadKind::Text, "", None);
    assert!(matches!(content(&empty), RecordContent::Text { text, .. } if text == NO_ACTIVE_CARD_TEXT));

    let huge = "x".repeat(MAX_NDEF_FILE_SIZE);
    let file = build_ndef_file(PayloadKind::Text, &huge, None);
    assert!(file.len() <= MAX_NDEF_FILE_SIZE);
    assert!(matches!(content(&file), RecordContent::Text { text, .. } if text == CONTENT_TOO_LARGE_TEXT));
}

#[test]
fn long_record_uses_four_byte_length() {
    let text = "y".repeat(300);
    let file = build_ndef_file(PayloadKind::Text, &text, None);
    // MB|ME|TNF=1 without SR
    assert_eq!(file[2], 0xC1);
    let payload_len = u32::from_be_bytes([file[4], file[5], file[6], file[7]]);
    assert_eq!(payload_len as usize, 1 + 2 + 300);
}
