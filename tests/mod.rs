//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.
mod cycling;
mod errors;
mod random;

/// Show solver logs when a test fails, run with `RUST_LOG=trace` to see every pivot.
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
