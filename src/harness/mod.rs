//! Differential conformance harness for ordered inclusion.
//!
//! Data flow: [`entry`] picks a scenario, [`sweep`] enumerates lengths and
//! generates sorted inputs, [`dispatch`] fans each pair out over every policy
//! and access shape, [`oracle`] compares candidate and reference, and
//! [`report`] collects the outcome without ever aborting the run.

pub mod dispatch;
pub mod entry;
pub mod oracle;
pub mod report;
pub mod sweep;

pub use dispatch::{PolicyCase, invoke_on_all_policies};
pub use entry::{Scenario, done, run, run_all, run_scenario, run_with};
pub use oracle::{DifferentialOracle, WRONG_RESULT};
pub use report::{Mismatch, Reporter, RunSummary, SweepReport};
pub use sweep::{SizeSchedule, test_includes};
