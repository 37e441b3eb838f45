//! Non-fatal reporting of oracle results.
//!
//! A failed check is recorded as a [`Mismatch`] and logged; it never aborts
//! the sweep. Callers read the accumulated outcome through [`SweepReport`]
//! and [`RunSummary`].

use std::fmt::{self, Write as _};

use serde::Serialize;
use serde_json::json;
use tracing::error;

use crate::compare::ComparatorForm;
use crate::config::ExitPolicy;
use crate::error::HarnessError;
use crate::policy::ExecutionPolicy;

/// One comparison where the candidate disagreed with the reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// Diagnostic of the failed check.
    pub message: &'static str,
    /// Scenario the sweep was running.
    pub scenario: &'static str,
    /// Length of the first range.
    pub n: usize,
    /// Length of the second range.
    pub m: usize,
    /// Execution policy of the candidate call.
    pub policy: ExecutionPolicy,
    /// Access shape of the first range.
    pub first_shape: &'static str,
    /// Access shape of the second range.
    pub second_shape: &'static str,
    /// Comparator form of the dispatch.
    pub form: ComparatorForm,
    /// Reference result.
    pub expected: bool,
    /// Candidate result.
    pub actual: bool,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: scenario {} n={} m={} policy={} shapes=({}, {}) comparator={}: expected {}, got {}",
            self.message,
            self.scenario,
            self.n,
            self.m,
            self.policy,
            self.first_shape,
            self.second_shape,
            self.form.as_str(),
            self.expected,
            self.actual
        )
    }
}

impl std::error::Error for Mismatch {}

/// Counter snapshot used to attribute results to one sweep.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Mark {
    checks: u64,
    skips: u64,
    mismatches: usize,
}

/// Accumulates check outcomes across sweeps.
#[derive(Debug, Default)]
pub struct Reporter {
    checks: u64,
    skips: u64,
    mismatches: Vec<Mismatch>,
    stop_on_first_failure: bool,
}

impl Reporter {
    /// Creates an empty reporter.
    #[must_use]
    pub fn new(stop_on_first_failure: bool) -> Self {
        Self {
            stop_on_first_failure,
            ..Self::default()
        }
    }

    /// Records one check. When `condition` is false, `mismatch` builds the
    /// record, which is logged and kept.
    ///
    /// Returns `condition`.
    pub fn expect_true<F>(&mut self, condition: bool, message: &'static str, mismatch: F) -> bool
    where
        F: FnOnce(&'static str) -> Mismatch,
    {
        self.checks += 1;
        if !condition {
            let mismatch = mismatch(message);
            error!(
                scenario = mismatch.scenario,
                n = mismatch.n,
                m = mismatch.m,
                policy = mismatch.policy.as_str(),
                first_shape = mismatch.first_shape,
                second_shape = mismatch.second_shape,
                comparator = mismatch.form.as_str(),
                expected = mismatch.expected,
                actual = mismatch.actual,
                "{message}"
            );
            self.mismatches.push(mismatch);
        }
        condition
    }

    /// Records a combination that was excluded from checking.
    pub fn record_skip(&mut self) {
        self.skips += 1;
    }

    /// Number of checks performed.
    #[must_use]
    pub const fn checks(&self) -> u64 {
        self.checks
    }

    /// Number of skipped combinations.
    #[must_use]
    pub const fn skips(&self) -> u64 {
        self.skips
    }

    /// Recorded mismatches, in order.
    #[must_use]
    pub fn mismatches(&self) -> &[Mismatch] {
        &self.mismatches
    }

    /// Returns true when no mismatch was recorded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// Returns true when the sweep should stop early.
    #[must_use]
    pub fn should_stop(&self) -> bool {
        self.stop_on_first_failure && !self.mismatches.is_empty()
    }

    pub(crate) fn mark(&self) -> Mark {
        Mark {
            checks: self.checks,
            skips: self.skips,
            mismatches: self.mismatches.len(),
        }
    }

    pub(crate) fn report_since(
        &self,
        mark: Mark,
        scenario: &'static str,
        seed: u64,
        pairs: u64,
    ) -> SweepReport {
        SweepReport {
            scenario,
            seed,
            pairs,
            checks: self.checks - mark.checks,
            skips: self.skips - mark.skips,
            stopped_early: self.should_stop(),
            mismatches: self.mismatches[mark.mismatches..].to_vec(),
        }
    }
}

/// Outcome of one scenario sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SweepReport {
    /// Scenario name.
    pub scenario: &'static str,
    /// Seed the generator started from.
    pub seed: u64,
    /// (n, m) pairs visited.
    pub pairs: u64,
    /// Checks performed.
    pub checks: u64,
    /// Combinations excluded by the reverse-shape gate.
    pub skips: u64,
    /// Whether the sweep stopped before exhausting its schedule.
    pub stopped_early: bool,
    /// Mismatches recorded during this sweep.
    pub mismatches: Vec<Mismatch>,
}

impl SweepReport {
    /// Returns true when the sweep recorded no mismatch.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// One-line summary.
    #[must_use]
    pub fn to_text(&self) -> String {
        format!(
            "{}: {} pairs, {} checks, {} skipped, {} mismatches{}",
            self.scenario,
            self.pairs,
            self.checks,
            self.skips,
            self.mismatches.len(),
            if self.stopped_early {
                " (stopped early)"
            } else {
                ""
            }
        )
    }
}

/// Outcome of a full run over every scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Candidate that was exercised.
    pub candidate: &'static str,
    /// Configured exit policy.
    pub exit_policy: ExitPolicy,
    /// Per-scenario reports, in run order.
    pub sweeps: Vec<SweepReport>,
}

impl RunSummary {
    /// Total checks across sweeps.
    #[must_use]
    pub fn checks(&self) -> u64 {
        self.sweeps.iter().map(|s| s.checks).sum()
    }

    /// Total mismatches across sweeps.
    #[must_use]
    pub fn mismatch_count(&self) -> usize {
        self.sweeps.iter().map(|s| s.mismatches.len()).sum()
    }

    /// Returns true when no sweep recorded a mismatch.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.sweeps.iter().all(SweepReport::is_clean)
    }

    /// Process exit status for this outcome under the configured policy.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self.exit_policy {
            ExitPolicy::FailOnMismatch if !self.is_clean() => 1,
            ExitPolicy::ReportOnly | ExitPolicy::FailOnMismatch => 0,
        }
    }

    /// Renders a human-readable report, one line per mismatch.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            &mut out,
            "includes conformance ({}, {}): {} sweeps, {} checks, {} mismatches",
            self.candidate,
            self.exit_policy.as_str(),
            self.sweeps.len(),
            self.checks(),
            self.mismatch_count()
        );
        for sweep in &self.sweeps {
            let _ = writeln!(&mut out, "  {}", sweep.to_text());
            for mismatch in &sweep.mismatches {
                let _ = writeln!(&mut out, "    {mismatch}");
            }
        }
        out
    }

    /// Renders a JSON report.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "summary": {
                "candidate": self.candidate,
                "exit_policy": self.exit_policy,
                "checks": self.checks(),
                "mismatches": self.mismatch_count(),
                "clean": self.is_clean(),
            },
            "sweeps": self.sweeps,
        })
    }

    /// Pretty-printed JSON report.
    pub fn render_json(&self) -> Result<String, HarnessError> {
        Ok(serde_json::to_string_pretty(&self.to_json())?)
    }
}
