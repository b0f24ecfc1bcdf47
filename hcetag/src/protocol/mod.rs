// hcetag/src/protocol/mod.rs
//! ISO 7816-4 command and response handling for a Type 4 Tag.

pub mod apdu;
pub mod capability;
pub mod command;
pub mod parser;
pub mod response;
pub mod status;
pub mod trace;

pub use apdu::CommandApdu;
pub use capability::{CAPABILITY_CONTAINER, CapabilityContainer};
pub use command::{Command, Select};
pub use response::{Response, split_status};
pub use status::StatusWord;
