use hcetag::FileId;
use hcetag::protocol::apdu::{CommandApdu, encode_read_binary_extended};
use hcetag::protocol::{Command, Select, StatusWord, split_status};
use hcetag::utils::parse_hex;

#[test]
fn select_aid_from_hex() {
    let raw = parse_hex("00 A4 04 00 07 D2 76 00 00 85 01 01").unwrap();
    match Command::parse(&raw).unwrap() {
        Command::Select(Select::ByName(Some(aid))) => {
            assert_eq!(aid, &[0xD2, 0x76, 0x00, 0x00, 0x85, 0x01, 0x01]);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn select_file_with_either_p2() {
    for p2 in [0x00u8, 0x0C] {
        let raw = [0x00, 0xA4, 0x00, p2, 0x02, 0xE1, 0x03];
        assert_eq!(
            Command::parse(&raw).unwrap(),
            Command::Select(Select::ByFileId(Some(FileId::CAPABILITY_CONTAINER)))
        );
    }
}

#[test]
fn select_file_with_wrong_lc_has_no_id() {
    let raw = [0x00, 0xA4, 0x00, 0x0C, 0x03, 0xE1, 0x04, 0x00];
    assert_eq!(
        Command::parse(&raw).unwrap(),
        Command::Select(Select::ByFileId(None))
    );
}

#[test]
fn read_binary_offsets_and_le() {
    let raw = parse_hex("00 B0 00 02 7F").unwrap();
    assert_eq!(
        Command::parse(&raw).unwrap(),
        Command::ReadBinary {
            offset: 2,
            le: Some(0x7F)
        }
    );

    let ext = encode_read_binary_extended(0x0010, 0x0200);
    assert_eq!(
        Command::parse(&ext).unwrap(),
        Command::ReadBinary {
            offset: 0x10,
            le: Some(0x200)
        }
    );

    let no_le = [0x00, 0xB0, 0x00, 0x00];
    assert_eq!(CommandApdu::parse(&no_le).unwrap().le(), None);
}

#[test]
fn other_instructions() {
    assert_eq!(
        Command::parse(&[0x00, 0xD6, 0x00, 0x00, 0x01, 0xAA]).unwrap(),
        Command::UpdateBinary
    );
    assert_eq!(
        Command::parse(&[0x00, 0xCA, 0x00, 0x00]).unwrap(),
        Command::Unsupported { ins: 0xCA }
    );
}

#[test]
fn header_shorter_than_four_bytes_is_an_error() {
    assert!(Command::parse(&[]).is_err());
    assert!(Command::parse(&[0x00, 0xA4, 0x04]).is_err());
}

#[test]
fn status_words_round_trip_through_u16() {
    for sw in [0x9000u16, 0x6A82, 0x6A81, 0x6F00, 0x6700, 0x6985] {
        let status = StatusWord::from_u16(sw).unwrap();
        assert_eq!(status.as_u16(), sw);
    }
    let (data, sw) = split_status(&[0x01, 0x02, 0x90, 0x00]).unwrap();
    assert_eq!(data, &[0x01, 0x02]);
    assert_eq!(sw, 0x9000);
}
