//! Shared helpers for integration tests.

#![allow(dead_code)]

pub use includes_conformance::test_utils::{DEFAULT_TEST_SEED, init_test_logging};
pub use includes_conformance::{assert_with_log, test_complete, test_phase};

use includes_conformance::config::HarnessConfig;

/// Size limit small enough for the full policy fan-out to stay fast.
pub const SMALL_SIZE_LIMIT: usize = 40;

/// Configuration for a reduced sweep on a two-worker pool.
#[must_use]
pub fn small_config(seed: u64) -> HarnessConfig {
    HarnessConfig::new(seed)
        .with_size_limit(SMALL_SIZE_LIMIT)
        .with_workers(Some(2))
        .with_grain(3)
}

/// Starts a named integration test.
pub fn init_test(name: &str) {
    init_test_logging();
    test_phase!(name);
}
