//! Entry driver: runs every scenario and reports completion.

use core::fmt;

use tracing::info;

use crate::algorithm::{Candidate, PstlCandidate};
use crate::compare::less;
use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::harness::report::{Reporter, RunSummary, SweepReport};
use crate::harness::sweep::test_includes;
use crate::value::Num;

/// Element-type pairing swept by a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Scenario {
    /// `f64` against `f64` under `<`.
    #[cfg_attr(feature = "cli", value(name = "float64"))]
    Float64,
    /// `Num<i64>` against `Num<i32>` under a cross-type closure.
    #[cfg_attr(feature = "cli", value(name = "num_i64_i32"))]
    NumI64I32,
}

impl Scenario {
    /// Every scenario, in run order.
    pub const ALL: [Self; 2] = [Self::Float64, Self::NumI64I32];

    /// Stable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Float64 => "float64",
            Self::NumI64I32 => "num_i64_i32",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sweeps one scenario.
pub fn run_scenario<K: Candidate>(
    scenario: Scenario,
    config: &HarnessConfig,
    candidate: &K,
    reporter: &mut Reporter,
) -> SweepReport {
    let name = scenario.name();
    match scenario {
        Scenario::Float64 => {
            test_includes::<f64, f64, _, _>(config, candidate, name, less::<f64>, reporter)
        }
        Scenario::NumI64I32 => test_includes::<Num<i64>, Num<i32>, _, _>(
            config,
            candidate,
            name,
            |x: &Num<i64>, y: &Num<i32>| x < y,
            reporter,
        ),
    }
}

/// Runs `scenarios` against `candidate`.
///
/// With `stop_on_first_failure`, remaining scenarios are skipped once a
/// mismatch is recorded.
pub fn run_with<K: Candidate>(
    config: &HarnessConfig,
    candidate: &K,
    scenarios: &[Scenario],
) -> Result<RunSummary, HarnessError> {
    config.validate()?;
    let mut reporter = Reporter::new(config.stop_on_first_failure);
    let mut sweeps = Vec::with_capacity(scenarios.len());
    for &scenario in scenarios {
        if reporter.should_stop() {
            break;
        }
        sweeps.push(run_scenario(scenario, config, candidate, &mut reporter));
    }
    let summary = RunSummary {
        candidate: candidate.name(),
        exit_policy: config.exit_policy,
        sweeps,
    };
    info!(
        candidate = summary.candidate,
        checks = summary.checks(),
        mismatches = summary.mismatch_count(),
        "run complete"
    );
    Ok(summary)
}

/// Runs `scenarios` against the default candidate.
pub fn run(config: &HarnessConfig, scenarios: &[Scenario]) -> Result<RunSummary, HarnessError> {
    config.validate()?;
    let candidate = PstlCandidate::from_config(config)?;
    run_with(config, &candidate, scenarios)
}

/// Runs every scenario against the default candidate.
pub fn run_all(config: &HarnessConfig) -> Result<RunSummary, HarnessError> {
    run(config, &Scenario::ALL)
}

/// Completion marker printed once every sweep has finished.
#[must_use]
pub const fn done() -> &'static str {
    "done"
}
