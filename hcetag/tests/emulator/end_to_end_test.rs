#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{CONDITIONS_NOT_SATISFIED, FILE_NOT_FOUND, OK, ok_with};
use common::helpers;
use hcetag::prelude::*;
use hcetag::protocol::CAPABILITY_CONTAINER;

#[test]
fn reader_reads_nlen_after_selects() -> anyhow::Result<()> {
    common::init_logging();
    let (mut emu, _mock) = helpers::emulator_with_payload(Some(common::fixtures::nexus_link()));

    let select_app = parse_hex("00 A4 04 00 07 D2 76 00 00 85 01 01").map_err(anyhow::Error::msg)?;
    assert_eq!(emu.handle_command(&select_app), OK.to_vec());

    let select_ndef = parse_hex("00 A4 00 0C 02 E1 04").map_err(anyhow::Error::msg)?;
    assert_eq!(emu.handle_command(&select_ndef), OK.to_vec());

    let read_nlen = parse_hex("00 B0 00 00 02").map_err(anyhow::Error::msg)?;
    assert_eq!(emu.handle_command(&read_nlen), ok_with(&[0x00, 0x17]));
    Ok(())
}

#[test]
fn full_nexus_link_read() -> anyhow::Result<()> {
    common::init_logging();
    let (mut emu, _mock) = helpers::emulator_with_payload(Some(common::fixtures::nexus_link()));
    let expected = common::fixtures::nexus_ndef_file();

    helpers::select_ndef_file(&mut emu);
    let resp = emu.handle_command(&helpers::read_binary_apdu(2, (expected.len() - 2) as u8));
    assert_eq!(resp, ok_with(&expected[2..]));

    // Header-only READ BINARY returns the rest of the file.
    let resp = emu.handle_command(&[0x00, 0xB0, 0x00, 0x00]);
    assert_eq!(resp, ok_with(&expected));
    Ok(())
}

#[test]
fn capability_container_read() {
    let (mut emu, _mock) = helpers::emulator_with_payload(None);
    emu.handle_command(&helpers::select_ndef_app_apdu());
    assert_eq!(emu.handle_command(&helpers::select_cc_apdu()), OK.to_vec());
    let resp = emu.handle_command(&helpers::read_binary_apdu(0, 0x0F));
    assert_eq!(resp, ok_with(&CAPABILITY_CONTAINER));
}

#[test]
fn le_larger_than_remaining_is_clamped() {
    let (mut emu, _mock) = helpers::emulator_with_payload(Some(ActivePayload::text("abc")));
    helpers::select_ndef_file(&mut emu);
    let resp = emu.handle_command(&helpers::read_binary_apdu(0, 0xFF));
    let file = hcetag::ndef::ndef_file_for(Some(&ActivePayload::text("abc")), "en");
    assert_eq!(resp, ok_with(&file));

    // Offset equal to the file length yields an empty success.
    let resp = emu.handle_command(&helpers::read_binary_apdu(file.len() as u16, 0x10));
    assert_eq!(resp, OK.to_vec());
}

#[test]
fn commands_out_of_order_are_refused() {
    let (mut emu, _mock) = helpers::emulator_with_payload(None);
    assert_eq!(
        emu.handle_command(&helpers::select_ndef_file_apdu()),
        CONDITIONS_NOT_SATISFIED.to_vec()
    );
    assert_eq!(
        emu.handle_command(&helpers::read_binary_apdu(0, 2)),
        CONDITIONS_NOT_SATISFIED.to_vec()
    );
}

#[test]
fn unknown_aid_and_file() {
    let (mut emu, mock) = helpers::emulator_with_payload(None);
    let other_aid = parse_hex("00 A4 04 00 07 A0 00 00 00 03 10 10").unwrap();
    assert_eq!(emu.handle_command(&other_aid), FILE_NOT_FOUND.to_vec());
    assert_eq!(mock.calls(), 0);

    emu.handle_command(&helpers::select_ndef_app_apdu());
    let other_file = parse_hex("00 A4 00 0C 02 E1 05").unwrap();
    assert_eq!(emu.handle_command(&other_file), FILE_NOT_FOUND.to_vec());
}

#[test]
fn write_and_unknown_instructions() {
    let (mut emu, _mock) = helpers::emulator_with_payload(None);
    emu.handle_command(&helpers::select_ndef_app_apdu());
    let update = parse_hex("00 D6 00 00 01 00").unwrap();
    assert_eq!(emu.handle_command(&update), CONDITIONS_NOT_SATISFIED.to_vec());
    assert_eq!(emu.handle_command(&[0x00, 0xCA, 0x00, 0x00]), vec![0x6A, 0x81]);
    assert_eq!(emu.handle_command(&[0x00, 0xA4]), vec![0x6F, 0x00]);
}

#[test]
fn payload_change_is_picked_up_on_next_select() {
    let (mut emu, mock) = helpers::emulator_with_payload(Some(ActivePayload::text("one")));
    helpers::select_ndef_file(&mut emu);
    let first = emu.handle_command(&[0x00, 0xB0, 0x00, 0x00]);

    mock.set_payload(Some(common::fixtures::nexus_link()));
    emu.handle_deactivation(DeactivationReason::LinkLoss);
    helpers::select_ndef_file(&mut emu);
    let second = emu.handle_command(&[0x00, 0xB0, 0x00, 0x00]);

    assert_ne!(first, second);
    assert_eq!(second, ok_with(&common::fixtures::nexus_ndef_file()));
    assert_eq!(mock.calls(), 2);
}
