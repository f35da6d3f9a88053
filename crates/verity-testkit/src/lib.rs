//! Verity Testkit
//!
//! Test handlers kept out of the production crate: a controllable clock, an
//! in-memory settings store that can omit keys, and verification fixtures.

#![allow(missing_docs)]

pub mod clock;
pub mod fixtures;
pub mod settings;

pub use clock::FixedClock;
pub use fixtures::{day, reference_instant, VerificationBuilder};
pub use settings::InMemorySettings;

/// Install a test-writer tracing subscriber honoring `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
