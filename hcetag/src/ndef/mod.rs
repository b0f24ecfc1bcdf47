// hcetag/src/ndef/mod.rs
//! NDEF records and the Type 4 Tag NDEF file that carries them.

pub mod message;
pub mod record;
pub mod uri;

pub use message::{build_ndef_file, ndef_file_for, no_active_card_file, parse_ndef_file};
pub use record::{NdefRecord, RecordContent, build_text_record, build_uri_record};
