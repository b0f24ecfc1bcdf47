// hcetag/src/emulator/mod.rs
//! The Type 4 Tag state machine: session state, configuration and the
//! command dispatcher.

pub mod builder;
pub mod config;
pub mod dispatcher;
#[cfg(feature = "diagnostics")]
pub mod exchange_log;
pub mod session;

pub use builder::TagEmulatorBuilder;
pub use config::EmulatorConfig;
pub use dispatcher::TagEmulator;
#[cfg(feature = "diagnostics")]
pub use exchange_log::ExchangeRecord;
pub use session::{SelectedFile, Session};
