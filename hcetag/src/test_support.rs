//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize the canned reader commands and the
//! MockSource-backed emulator setup so tests across the crate and the
//! tests/ directory share the same logic.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use crate::constants::NDEF_APPLICATION_AID;
use crate::emulator::TagEmulator;
use crate::protocol::apdu;
use crate::source::{MockSource, PayloadSource};
use crate::types::{ActivePayload, FileId};
use crate::Result;

/// `00 A4 04 00 07 D2760000850101` without a trailing Le.
#[doc(hidden)]
pub fn select_ndef_app_apdu() -> Vec<u8> {
    let mut cmd = vec![0x00, 0xA4, 0x04, 0x00, NDEF_APPLICATION_AID.len() as u8];
    cmd.extend_from_slice(&NDEF_APPLICATION_AID);
    cmd
}

/// `00 A4 00 0C 02 E103`
#[doc(hidden)]
pub fn select_cc_apdu() -> Vec<u8> {
    apdu::encode_select_file(FileId::CAPABILITY_CONTAINER)
}

/// `00 A4 00 0C 02 E104`
#[doc(hidden)]
pub fn select_ndef_file_apdu() -> Vec<u8> {
    apdu::encode_select_file(FileId::NDEF)
}

/// READ BINARY with a short Le.
#[doc(hidden)]
pub fn read_binary_apdu(offset: u16, le: u8) -> Vec<u8> {
    apdu::encode_read_binary(offset, le)
}

/// Build an emulator whose source is a [`MockSource`] returning `payload`.
/// The mock is returned too so tests can inspect or change it.
#[doc(hidden)]
pub fn emulator_with_payload(payload: Option<ActivePayload>) -> (TagEmulator, Arc<MockSource>) {
    let mock = Arc::new(MockSource::new(payload));
    let source: Arc<dyn PayloadSource> = mock.clone();
    (TagEmulator::new(source), mock)
}

/// Like [`emulator_with_payload`] with a slow source and a short fetch
/// budget.
#[doc(hidden)]
pub fn emulator_with_slow_source(
    payload: Option<ActivePayload>,
    delay: Duration,
    fetch_timeout: Duration,
) -> Result<(TagEmulator, Arc<MockSource>)> {
    let mock = Arc::new(MockSource::new(payload).with_delay(delay));
    let source: Arc<dyn PayloadSource> = mock.clone();
    let emulator = TagEmulator::builder()
        .with_source(source)
        .with_fetch_timeout(fetch_timeout)
        .build()?;
    Ok((emulator, mock))
}

/// Run application SELECT then SELECT of the NDEF file, returning both
/// responses.
#[doc(hidden)]
pub fn select_ndef_file(emulator: &mut TagEmulator) -> (Vec<u8>, Vec<u8>) {
    let app = emulator.handle_command(&select_ndef_app_apdu());
    let file = emulator.handle_command(&select_ndef_file_apdu());
    (app, file)
}
