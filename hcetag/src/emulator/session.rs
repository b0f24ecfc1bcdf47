// hcetag/src/emulator/session.rs
//! Per-connection selection state.

use std::sync::Arc;

use crate::protocol::CAPABILITY_CONTAINER;

/// Logical files addressable by READ BINARY.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectedFile {
    /// CC file, E103
    CapabilityContainer,
    /// NDEF file, E104
    Ndef,
}

/// Per-connection state of the emulated tag.
#[derive(Debug, Default, Clone)]
pub struct Session {
    application_selected: bool,
    selected_file: Option<SelectedFile>,
    current_ndef: Option<Arc<Vec<u8>>>,
}

impl Session {
    /// Idle session: nothing selected, no NDEF file yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the NDEF application is selected.
    pub fn application_selected(&self) -> bool {
        self.application_selected
    }

    /// File addressed by READ BINARY, if any.
    pub fn selected_file(&self) -> Option<SelectedFile> {
        self.selected_file
    }

    /// The NDEF file computed at the last application SELECT.
    pub fn current_ndef(&self) -> Option<&Arc<Vec<u8>>> {
        self.current_ndef.as_ref()
    }

    /// NDEF application selected: file selection is cleared and the freshly
    /// computed NDEF file replaces the previous one.
    pub fn select_application(&mut self, ndef_file: Arc<Vec<u8>>) {
        self.application_selected = true;
        self.selected_file = None;
        self.current_ndef = Some(ndef_file);
    }

    /// Point READ BINARY at `file`.
    pub fn select_file(&mut self, file: SelectedFile) {
        self.selected_file = Some(file);
    }

    /// Link torn down. The NDEF file is kept for a quick re-tap.
    pub fn deactivate(&mut self) {
        self.application_selected = false;
        self.selected_file = None;
    }

    /// Contents of the selected file, if any.
    pub fn selected_bytes(&self) -> Option<&[u8]> {
        match self.selected_file? {
            SelectedFile::CapabilityContainer => Some(&CAPABILITY_CONTAINER[..]),
            SelectedFile::Ndef => self.current_ndef.as_deref().map(Vec::as_slice),
        }
    }
}
