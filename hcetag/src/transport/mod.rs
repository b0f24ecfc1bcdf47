// hcetag/src/transport/mod.rs
//! Boundary with the platform NFC stack.

pub mod mock;
pub mod traits;

pub use mock::MockReader;
pub use traits::HostApduService;
