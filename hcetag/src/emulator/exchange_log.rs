// hcetag/src/emulator/exchange_log.rs
//! Bounded record of recent exchanges (feature `diagnostics`).

use std::collections::VecDeque;

use crate::utils::bytes_to_hex_spaced;

/// Number of exchanges kept before the oldest is dropped
pub const EXCHANGE_LOG_CAPACITY: usize = 32;

/// One command and the response sent for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeRecord {
    /// Raw command APDU
    pub command: Vec<u8>,
    /// Raw response APDU, status word included
    pub response: Vec<u8>,
}

impl std::fmt::Display for ExchangeRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            ">> {} << {}",
            bytes_to_hex_spaced(&self.command),
            bytes_to_hex_spaced(&self.response)
        )
    }
}

/// Ring of the last [`EXCHANGE_LOG_CAPACITY`] exchanges.
#[derive(Debug, Default)]
pub struct ExchangeLog {
    records: VecDeque<ExchangeRecord>,
}

impl ExchangeLog {
    /// Append, dropping the oldest record when full.
    pub fn push(&mut self, record: ExchangeRecord) {
        if self.records.len() == EXCHANGE_LOG_CAPACITY {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    /// Records oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &ExchangeRecord> {
        self.records.iter()
    }
}
