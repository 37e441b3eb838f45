//! Logging and assertion helpers shared by unit and integration tests.
//!
//! Available under `cfg(test)` and the `test-internals` feature.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Default seed for tests that need a fixed, non-default seed.
pub const DEFAULT_TEST_SEED: u64 = 0x00C0_FFEE;

static INIT_LOGGING: Once = Once::new();

/// Installs a test-writer subscriber once per process.
///
/// Honors `RUST_LOG`; defaults to `info`.
pub fn init_test_logging() {
    INIT_LOGGING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Logs the start of a named test phase.
#[macro_export]
macro_rules! test_phase {
    ($name:expr) => {
        ::tracing::info!(phase = %$name, "test phase start")
    };
}

/// Logs the completion of a named test.
#[macro_export]
macro_rules! test_complete {
    ($name:expr) => {
        ::tracing::info!(test = %$name, "test complete")
    };
}

/// Asserts a condition, logging expected and actual values before panicking.
#[macro_export]
macro_rules! assert_with_log {
    ($cond:expr, $what:expr, $expected:expr, $actual:expr) => {{
        let ok: bool = $cond;
        if !ok {
            ::tracing::error!(
                what = $what,
                expected = ?$expected,
                actual = ?$actual,
                "assertion failed"
            );
        }
        assert!(
            ok,
            "{}: expected {:?}, got {:?}",
            $what, $expected, $actual
        );
    }};
}
