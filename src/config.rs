//! Harness configuration.
//!
//! Defaults reproduce the fixed sweep: seed 42, sizes below one million,
//! exhaustive lengths up to 16, growth factors 3.1415 (first range) and
//! 2.71828 (second range), and a mutable-comparator re-run for lengths
//! below 5.
//!
//! ```
//! use includes_conformance::config::{ExitPolicy, HarnessConfig};
//!
//! let config = HarnessConfig::new(7)
//!     .with_size_limit(2_000)
//!     .with_exit_policy(ExitPolicy::FailOnMismatch);
//! config.validate().expect("valid config");
//! assert_eq!(config.seed, 7);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::HarnessError;
use crate::harness::sweep::SizeSchedule;

/// Seed applied when none is configured.
pub const DEFAULT_SEED: u64 = 42;
/// Exclusive upper bound on generated lengths.
pub const DEFAULT_SIZE_LIMIT: usize = 1_000_000;
/// Lengths up to and including this value are stepped by one.
pub const DEFAULT_LINEAR_LIMIT: usize = 16;
/// Geometric growth of the first range's length past the linear phase.
pub const DEFAULT_FIRST_GROWTH: f64 = 3.1415;
/// Geometric growth of the second range's length past the linear phase.
pub const DEFAULT_SECOND_GROWTH: f64 = 2.71828;
/// Both lengths below this value also run with the mutable comparator.
pub const DEFAULT_MUTABLE_COMPARATOR_LIMIT: usize = 5;
/// Elements of the second range per parallel chunk.
pub const DEFAULT_GRAIN: usize = 64;

/// What the process exit status reflects once the sweep completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum ExitPolicy {
    /// Exit successfully whenever the sweep completes; mismatches are only
    /// reported.
    #[default]
    ReportOnly,
    /// Exit with a failure status when any mismatch was recorded.
    FailOnMismatch,
}

impl ExitPolicy {
    /// Stable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReportOnly => "report_only",
            Self::FailOnMismatch => "fail_on_mismatch",
        }
    }
}

/// Configuration for a conformance run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarnessConfig {
    /// Seed for the sequence generator, applied at the start of each sweep.
    pub seed: u64,
    /// Exclusive upper bound on both lengths.
    pub size_limit: usize,
    /// Last length of the exhaustive phase.
    pub linear_limit: usize,
    /// Growth factor for the first range's length.
    pub first_growth: f64,
    /// Growth factor for the second range's length.
    pub second_growth: f64,
    /// Threshold below which the mutable comparator is also dispatched.
    pub mutable_comparator_limit: usize,
    /// Worker threads for parallel policies; `None` uses the pool default.
    pub workers: Option<usize>,
    /// Elements of the second range per parallel chunk.
    pub grain: usize,
    /// Exit status policy.
    pub exit_policy: ExitPolicy,
    /// Stop the sweep after the first dispatch that records a mismatch.
    pub stop_on_first_failure: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl HarnessConfig {
    /// Default configuration with the given seed.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            seed,
            size_limit: DEFAULT_SIZE_LIMIT,
            linear_limit: DEFAULT_LINEAR_LIMIT,
            first_growth: DEFAULT_FIRST_GROWTH,
            second_growth: DEFAULT_SECOND_GROWTH,
            mutable_comparator_limit: DEFAULT_MUTABLE_COMPARATOR_LIMIT,
            workers: None,
            grain: DEFAULT_GRAIN,
            exit_policy: ExitPolicy::ReportOnly,
            stop_on_first_failure: false,
        }
    }

    /// Sets the seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the exclusive upper bound on lengths.
    #[must_use]
    pub const fn with_size_limit(mut self, size_limit: usize) -> Self {
        self.size_limit = size_limit;
        self
    }

    /// Sets the last length of the exhaustive phase.
    #[must_use]
    pub const fn with_linear_limit(mut self, linear_limit: usize) -> Self {
        self.linear_limit = linear_limit;
        self
    }

    /// Sets both growth factors.
    #[must_use]
    pub const fn with_growth(mut self, first: f64, second: f64) -> Self {
        self.first_growth = first;
        self.second_growth = second;
        self
    }

    /// Sets the mutable-comparator threshold.
    #[must_use]
    pub const fn with_mutable_comparator_limit(mut self, limit: usize) -> Self {
        self.mutable_comparator_limit = limit;
        self
    }

    /// Sets the worker count for parallel policies.
    #[must_use]
    pub const fn with_workers(mut self, workers: Option<usize>) -> Self {
        self.workers = workers;
        self
    }

    /// Sets the parallel chunk size.
    #[must_use]
    pub const fn with_grain(mut self, grain: usize) -> Self {
        self.grain = grain;
        self
    }

    /// Sets the exit policy.
    #[must_use]
    pub const fn with_exit_policy(mut self, exit_policy: ExitPolicy) -> Self {
        self.exit_policy = exit_policy;
        self
    }

    /// Stops the sweep after the first mismatch.
    #[must_use]
    pub const fn with_stop_on_first_failure(mut self, stop: bool) -> Self {
        self.stop_on_first_failure = stop;
        self
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<(), HarnessError> {
        for (field, growth) in [
            ("first_growth", self.first_growth),
            ("second_growth", self.second_growth),
        ] {
            if !growth.is_finite() || growth <= 1.0 {
                return Err(HarnessError::invalid(
                    field,
                    format!("must be a finite factor above 1.0, got {growth}"),
                ));
            }
        }
        if self.grain == 0 {
            return Err(HarnessError::invalid("grain", "must be at least 1"));
        }
        if self.workers == Some(0) {
            return Err(HarnessError::invalid("workers", "must be at least 1"));
        }
        Ok(())
    }

    /// Lengths swept for the first range.
    #[must_use]
    pub fn first_schedule(&self) -> SizeSchedule {
        SizeSchedule::new(self.size_limit, self.linear_limit, self.first_growth)
    }

    /// Lengths swept for the second range.
    #[must_use]
    pub fn second_schedule(&self) -> SizeSchedule {
        SizeSchedule::new(self.size_limit, self.linear_limit, self.second_growth)
    }

    /// Parses a TOML document; missing keys keep their defaults.
    #[cfg(feature = "config-file")]
    pub fn from_toml_str(source: &str) -> Result<Self, HarnessError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML file.
    #[cfg(feature = "config-file")]
    pub fn from_toml_file(path: impl AsRef<std::path::Path>) -> Result<Self, HarnessError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| HarnessError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }
}
