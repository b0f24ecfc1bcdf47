#[path = "../common/mod.rs"]
mod common;

use common::helpers;
use hcetag::ndef::{RecordContent, parse_ndef_file};
use hcetag::prelude::*;

#[test]
fn reader_sequence_reads_nexus_link() -> anyhow::Result<()> {
    common::init_logging();
    let (mut emu, _mock) = helpers::emulator_with_payload(Some(common::fixtures::nexus_link()));
    let mut reader = MockReader::new();

    let file = reader.read_ndef_file(&mut emu)?;
    assert_eq!(file, common::fixtures::nexus_ndef_file());
    assert_eq!(
        parse_ndef_file(&file)?.content()?,
        RecordContent::Uri(common::fixtures::NEXUS_URI.to_string())
    );
    // SELECT AID, SELECT CC, READ CC, SELECT NDEF, READ NLEN, READ body
    assert_eq!(reader.sent.len(), 6);
    Ok(())
}

#[test]
fn long_text_is_read_in_chunks() -> anyhow::Result<()> {
    let text = "n".repeat(700);
    let (mut emu, _mock) = helpers::emulator_with_payload(Some(ActivePayload::text(text.clone())));
    let mut reader = MockReader::new();

    let file = reader.read_ndef_file(&mut emu)?;
    match parse_ndef_file(&file)?.content()? {
        RecordContent::Text { text: got, .. } => assert_eq!(got, text),
        other => panic!("unexpected content: {:?}", other),
    }
    assert!(reader.sent.len() > 6);
    Ok(())
}

#[test]
fn reader_sees_error_status() {
    let (mut emu, _mock) = helpers::emulator_with_payload(None);
    let mut reader = MockReader::new();
    match reader.select_file(&mut emu, FileId::NDEF) {
        Err(Error::UnexpectedStatus(sw)) => assert_eq!(sw, 0x6985),
        other => panic!("expected UnexpectedStatus, got: {:?}", other),
    }
}

#[test]
fn deactivate_through_service_trait() -> anyhow::Result<()> {
    let (mut emu, _mock) = helpers::emulator_with_payload(None);
    let mut reader = MockReader::new();
    reader.select_ndef_application(&mut emu)?;
    reader.deactivate(&mut emu, DeactivationReason::LinkLoss);
    assert!(!emu.session().application_selected());
    Ok(())
}
