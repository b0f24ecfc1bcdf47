// Shared helpers for the integration test crates in `tests/`.
#![allow(dead_code)]


pub mod helpers {
    pub use hcetag::test_support::*;
}

/// Install env_logger once so `RUST_LOG=hcetag=trace` shows the APDU trace.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
