use hcetag::constants::MAX_NDEF_FILE_SIZE;
use hcetag::protocol::{CAPABILITY_CONTAINER, CapabilityContainer};
use hcetag::FileId;

#[test]
fn served_cc_bytes() {
    assert_eq!(
        hcetag::utils::bytes_to_hex(&CAPABILITY_CONTAINER),
        "000F20FFFFFFFF0406E104040000FF"
    );
    assert_eq!(
        hcetag::utils::bytes_to_hex(&CAPABILITY_CONTAINER),
        hex::encode_upper(CAPABILITY_CONTAINER)
    );
}

#[test]
fn cc_describes_read_only_ndef_file() {
    let cc = CapabilityContainer::parse(&CAPABILITY_CONTAINER).unwrap();
    assert_eq!(cc.cc_len as usize, CAPABILITY_CONTAINER.len());
    assert_eq!(cc.mapping_version, 0x20);
    assert_eq!(cc.ndef_file_id, FileId::NDEF);
    assert_eq!(cc.max_ndef_size as usize, MAX_NDEF_FILE_SIZE);
    assert!(cc.is_read_only());
}

#[test]
fn truncated_cc_is_rejected() {
    assert!(CapabilityContainer::parse(&CAPABILITY_CONTAINER[..10]).is_err());
}
