// hcetag/src/error.rs
//! Crate error type.

use thiserror::Error;

/// Crate-wide error type
#[derive(Error, Debug)]
pub enum Error {
    /// Input shorter (or longer) than the layout requires
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Command APDU that cannot be decoded
    #[error("malformed apdu: {0}")]
    MalformedApdu(String),

    /// NDEF file or record that cannot be decoded
    #[error("ndef format error: {0}")]
    NdefFormat(String),

    /// Reader side: the tag answered something other than 9000
    #[error("unexpected status word {0:#06x}")]
    UnexpectedStatus(u16),

    /// The payload store did not answer within the fetch budget
    #[error("operation timed out")]
    Timeout,

    /// The payload store failed or could not be reached
    #[error("payload source unavailable: {0}")]
    SourceUnavailable(String),

    /// Builder finished without a payload source
    #[error("no payload source configured")]
    SourceNotConfigured,

    /// Cache and emulator would build text records in different languages
    #[error("cache builds '{cache}' text records but the emulator is configured for '{config}'")]
    LanguageMismatch { config: String, cache: String },
}

/// Result alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
