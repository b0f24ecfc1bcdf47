#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;

use common::fixtures::ok_with;
use common::helpers;
use hcetag::cache::spawn_cache_refresher;
use hcetag::ndef::{RecordContent, parse_ndef_file};
use hcetag::prelude::*;
use hcetag::source::{MockSource, PayloadSource};

fn emulator_with_cache(mock: &Arc<MockSource>, cache: &Arc<PayloadCache>) -> TagEmulator {
    let source: Arc<dyn PayloadSource> = mock.clone();
    TagEmulator::builder()
        .with_source(source)
        .with_cache(Arc::clone(cache))
        .build()
        .unwrap()
}

#[test]
fn warm_cache_skips_the_source() {
    let mock = Arc::new(MockSource::new(Some(ActivePayload::text("from store"))));
    let cache = Arc::new(PayloadCache::new());
    cache.update(Some(&common::fixtures::nexus_link()));

    let mut emu = emulator_with_cache(&mock, &cache);
    helpers::select_ndef_file(&mut emu);
    let resp = emu.handle_command(&[0x00, 0xB0, 0x00, 0x00]);
    assert_eq!(resp, ok_with(&common::fixtures::nexus_ndef_file()));
    assert_eq!(mock.calls(), 0);
}

#[test]
fn cold_cache_falls_through_to_source() {
    let mock = Arc::new(MockSource::new(Some(common::fixtures::nexus_link())));
    let cache = Arc::new(PayloadCache::new());

    let mut emu = emulator_with_cache(&mock, &cache);
    helpers::select_ndef_file(&mut emu);
    let resp = emu.handle_command(&[0x00, 0xB0, 0x00, 0x00]);
    assert_eq!(resp, ok_with(&common::fixtures::nexus_ndef_file()));
    assert_eq!(mock.calls(), 1);
    assert!(!cache.is_populated());
}

#[test]
fn refresher_notifications_change_served_file() {
    let mock = Arc::new(MockSource::new(None));
    let cache = Arc::new(PayloadCache::new());
    let (tx, rx) = crossbeam_channel::unbounded();
    let handle = spawn_cache_refresher(Arc::clone(&cache), rx).unwrap();

    tx.send(Some(common::fixtures::nexus_link())).unwrap();
    drop(tx);
    handle.join().unwrap();

    let mut emu = emulator_with_cache(&mock, &cache);
    helpers::select_ndef_file(&mut emu);
    let resp = emu.handle_command(&[0x00, 0xB0, 0x00, 0x00]);
    assert_eq!(resp, ok_with(&common::fixtures::nexus_ndef_file()));

    cache.clear();
    emu.handle_deactivation(DeactivationReason::LinkLoss);
    helpers::select_ndef_file(&mut emu);
    let resp = emu.handle_command(&[0x00, 0xB0, 0x00, 0x00]);
    assert_eq!(resp, ok_with(&hcetag::ndef::no_active_card_file("en")));
    assert_eq!(mock.calls(), 1);
}

fn served_language(emu: &mut TagEmulator) -> String {
    emu.handle_deactivation(DeactivationReason::LinkLoss);
    helpers::select_ndef_file(emu);
    let resp = emu.handle_command(&[0x00, 0xB0, 0x00, 0x00]);
    match parse_ndef_file(&resp[..resp.len() - 2]).unwrap().content().unwrap() {
        RecordContent::Text { language, .. } => language,
        other => panic!("unexpected content: {:?}", other),
    }
}

#[test]
fn cache_hit_and_miss_use_the_configured_language() {
    let mock = Arc::new(MockSource::new(Some(ActivePayload::text("Hallo"))));
    let source: Arc<dyn PayloadSource> = mock.clone();
    let cache = Arc::new(PayloadCache::with_language_code("de"));
    let mut emu = TagEmulator::builder()
        .with_source(source)
        .with_cache(Arc::clone(&cache))
        .with_language_code("de")
        .build()
        .unwrap();

    assert_eq!(served_language(&mut emu), "de");
    assert_eq!(mock.calls(), 1);

    cache.update(Some(&ActivePayload::text("Hallo")));
    assert_eq!(served_language(&mut emu), "de");
    assert_eq!(mock.calls(), 1);
}

#[test]
fn cache_in_another_language_is_refused() {
    let source: Arc<dyn PayloadSource> = Arc::new(MockSource::new(None));
    let result = TagEmulator::builder()
        .with_source(source)
        .with_cache(Arc::new(PayloadCache::new()))
        .with_language_code("de")
        .build();
    assert!(matches!(result, Err(Error::LanguageMismatch { .. })));
}
