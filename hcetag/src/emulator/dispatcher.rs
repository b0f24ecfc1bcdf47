// hcetag/src/emulator/dispatcher.rs
//! Command dispatch for the emulated tag.

use std::sync::Arc;

use crate::cache::PayloadCache;
use crate::constants::NDEF_APPLICATION_AID;
use crate::emulator::builder::TagEmulatorBuilder;
use crate::emulator::config::EmulatorConfig;
#[cfg(feature = "diagnostics")]
use crate::emulator::exchange_log::{ExchangeLog, ExchangeRecord};
use crate::emulator::session::{SelectedFile, Session};
use crate::ndef;
use crate::protocol::{Command, Response, Select, StatusWord, trace};
use crate::source::{FetchOutcome, PayloadFetcher, PayloadSource};
use crate::types::{DeactivationReason, FileId};

/// Emulated NFC Forum Type 4 Tag for one contactless connection.
///
/// Commands arrive strictly one after another on the link, so the
/// emulator is driven through `&mut self` and keeps its session state
/// without locking.
pub struct TagEmulator {
    fetcher: PayloadFetcher,
    cache: Option<Arc<PayloadCache>>,
    config: EmulatorConfig,
    session: Session,
    #[cfg(feature = "diagnostics")]
    exchanges: ExchangeLog,
}

impl TagEmulator {
    /// Emulator with the default configuration and no cache.
    pub fn new(source: Arc<dyn PayloadSource>) -> Self {
        Self::from_parts(source, None, EmulatorConfig::default())
    }

    /// Start a [`TagEmulatorBuilder`].
    pub fn builder() -> TagEmulatorBuilder {
        TagEmulatorBuilder::new()
    }

    pub(crate) fn from_parts(
        source: Arc<dyn PayloadSource>,
        cache: Option<Arc<PayloadCache>>,
        config: EmulatorConfig,
    ) -> Self {
        Self {
            fetcher: PayloadFetcher::new(source),
            cache,
            config,
            session: Session::new(),
            #[cfg(feature = "diagnostics")]
            exchanges: ExchangeLog::default(),
        }
    }

    /// Configuration in effect.
    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    /// Current per-connection state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Answer one command APDU. Always returns a response ending in a
    /// status word; malformed input never escapes as an error.
    pub fn handle_command(&mut self, raw: &[u8]) -> Vec<u8> {
        trace::command(raw);
        let response = self.dispatch(raw);
        let status = response.status;
        let bytes = response.into_bytes();
        trace::response(&bytes, status);

        #[cfg(feature = "diagnostics")]
        self.exchanges.push(ExchangeRecord {
            command: raw.to_vec(),
            response: bytes.clone(),
        });

        bytes
    }

    /// The reader went away or selected another application.
    pub fn handle_deactivation(&mut self, reason: DeactivationReason) {
        log::debug!("deactivated: {}", reason);
        self.session.deactivate();
    }

    /// Recent command/response pairs, oldest first.
    #[cfg(feature = "diagnostics")]
    pub fn exchanges(&self) -> impl Iterator<Item = &ExchangeRecord> {
        self.exchanges.iter()
    }

    fn dispatch(&mut self, raw: &[u8]) -> Response {
        let command = match Command::parse(raw) {
            Ok(command) => command,
            Err(e) => return reject("APDU", raw, StatusWord::Unknown, &e.to_string()),
        };

        match command {
            Command::Select(Select::ByName(aid)) => self.select_application(raw, aid),
            Command::Select(Select::ByFileId(file_id)) => self.select_file(raw, file_id),
            Command::Select(Select::Other { p1, p2 }) => reject(
                "SELECT",
                raw,
                StatusWord::FileNotFound,
                &format!("unsupported P1/P2 {:02X}{:02X}", p1, p2),
            ),
            Command::ReadBinary { offset, le } => self.read_binary(raw, offset, le),
            Command::UpdateBinary => reject(
                "UPDATE BINARY",
                raw,
                StatusWord::ConditionsNotSatisfied,
                "tag is read-only",
            ),
            Command::Unsupported { ins } => reject(
                "APDU",
                raw,
                StatusWord::InstructionNotSupported,
                &format!("instruction {:02X}", ins),
            ),
        }
    }

    fn select_application(&mut self, raw: &[u8], aid: Option<&[u8]>) -> Response {
        let Some(aid) = aid else {
            return reject(
                "SELECT AID",
                raw,
                StatusWord::Unknown,
                "command shorter than declared AID",
            );
        };
        if aid != NDEF_APPLICATION_AID {
            return reject("SELECT AID", raw, StatusWord::FileNotFound, "unknown AID");
        }

        let ndef_file = self.refresh_ndef();
        log::debug!("NDEF application selected, file is {} bytes", ndef_file.len());
        self.session.select_application(ndef_file);
        Response::status(StatusWord::Success)
    }

    fn select_file(&mut self, raw: &[u8], file_id: Option<FileId>) -> Response {
        if !self.session.application_selected() {
            return reject(
                "SELECT FILE",
                raw,
                StatusWord::ConditionsNotSatisfied,
                "application not selected",
            );
        }
        let Some(file_id) = file_id else {
            return reject("SELECT FILE", raw, StatusWord::WrongLength, "Lc must be 2");
        };

        let file = match file_id {
            FileId::CAPABILITY_CONTAINER => SelectedFile::CapabilityContainer,
            FileId::NDEF => SelectedFile::Ndef,
            other => {
                return reject(
                    "SELECT FILE",
                    raw,
                    StatusWord::FileNotFound,
                    &format!("unknown file {}", other),
                );
            }
        };
        log::debug!("selected file {}", file_id);
        self.session.select_file(file);
        Response::status(StatusWord::Success)
    }

    fn read_binary(&self, raw: &[u8], offset: u16, le: Option<usize>) -> Response {
        if !self.session.application_selected() {
            return reject(
                "READ BINARY",
                raw,
                StatusWord::ConditionsNotSatisfied,
                "application not selected",
            );
        }
        let Some(file) = self.session.selected_bytes() else {
            return reject("READ BINARY", raw, StatusWord::Unknown, "no file selected");
        };

        let offset = offset as usize;
        if offset > file.len() {
            return reject(
                "READ BINARY",
                raw,
                StatusWord::WrongLength,
                &format!("offset {} beyond file of {} bytes", offset, file.len()),
            );
        }

        let remaining = file.len() - offset;
        let count = le.map_or(remaining, |le| le.min(remaining));
        Response::ok(file[offset..offset + count].to_vec())
    }

    /// Work out the NDEF file to expose for this application SELECT.
    ///
    /// Cache hit first; otherwise a bounded fetch. A source that answers
    /// "nothing active" yields the sentinel file; an unavailable source
    /// keeps the previous file when there is one.
    fn refresh_ndef(&self) -> Arc<Vec<u8>> {
        if self.config.use_cache {
            if let Some(cached) = self.cache.as_ref().and_then(|c| c.load()) {
                log::trace!("serving NDEF file from cache");
                return cached;
            }
        }

        let language = &self.config.language_code;
        match self.fetcher.fetch(self.config.fetch_timeout) {
            FetchOutcome::Found(payload) => {
                log::debug!("active {} payload fetched", payload.kind);
                Arc::new(ndef::ndef_file_for(Some(&payload), language))
            }
            FetchOutcome::Empty => {
                log::debug!("no active payload");
                Arc::new(ndef::no_active_card_file(language))
            }
            FetchOutcome::Unavailable(e) => match self.session.current_ndef() {
                Some(previous) => {
                    log::warn!("payload fetch failed ({}), keeping previous NDEF file", e);
                    Arc::clone(previous)
                }
                None => {
                    log::warn!("payload fetch failed ({}), serving fallback", e);
                    Arc::new(ndef::no_active_card_file(language))
                }
            },
        }
    }
}

fn reject(name: &str, raw: &[u8], status: StatusWord, reason: &str) -> Response {
    trace::rejected(name, raw, status, reason);
    Response::status(status)
}
