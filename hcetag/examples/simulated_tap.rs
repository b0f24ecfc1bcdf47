// Simulated reader tap against an in-process tag emulator.
//
// Plays the reader side of an NFC Forum Type 4 Tag read and prints every
// APDU exchanged. Run with `RUST_LOG=hcetag=trace` to also see the
// emulator's own trace.

use std::sync::Arc;

use hcetag::cache::spawn_cache_refresher;
use hcetag::ndef::{RecordContent, parse_ndef_file};
use hcetag::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let uri = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://nexus.app/u/abc123".to_string());

    let source = Arc::new(StaticSource::new(Some(ActivePayload::link(uri))));
    let cache = Arc::new(PayloadCache::new());
    let (updates, notifications) = crossbeam_channel::unbounded();
    let refresher = spawn_cache_refresher(Arc::clone(&cache), notifications)?;

    let mut emulator = TagEmulator::builder()
        .with_source(source.clone())
        .with_cache(Arc::clone(&cache))
        .with_fetch_timeout(ms(500))
        .build()?;
    let mut reader = MockReader::new();

    println!("=== Tap 1 ===");
    let file = reader.read_ndef_file(&mut emulator)?;
    print_exchanges(&reader);
    print_content(&file)?;
    reader.deactivate(&mut emulator, DeactivationReason::LinkLoss);

    // The data layer clears the active card and notifies the cache. Tap 2
    // is answered from the cache without asking the source.
    println!("\n=== Tap 2 (no active card, served from cache) ===");
    source.set(None);
    let _ = updates.send(None);
    drop(updates);
    let _ = refresher.join();
    let mut reader = MockReader::new();
    let file = reader.read_ndef_file(&mut emulator)?;
    print_exchanges(&reader);
    print_content(&file)?;

    Ok(())
}

fn print_exchanges(reader: &MockReader) {
    for (cmd, resp) in reader.sent.iter().zip(&reader.received) {
        println!(">> {}", bytes_to_hex_spaced(cmd));
        println!("<< {}", bytes_to_hex_spaced(resp));
    }
}

fn print_content(file: &[u8]) -> Result<()> {
    match parse_ndef_file(file)?.content()? {
        RecordContent::Uri(uri) => println!("URI record: {}", uri),
        RecordContent::Text { language, text } => println!("Text record [{}]: {}", language, text),
        RecordContent::Other => println!("Unrecognized record"),
    }
    Ok(())
}
