//! Includes Conformance: a differential harness for ordered multiset inclusion.
//!
//! # Overview
//!
//! `includes(first, second, comp)` answers whether the sorted range `second`
//! is a sub-multiset of the sorted range `first` under a strict weak ordering.
//! This crate checks a policy-parameterized candidate implementation against a
//! trusted sequential reference over a reproducible sweep of lengths, value
//! distributions, element types, access shapes and comparator forms.
//!
//! # Guarantees
//!
//! - **Reproducible**: every input is a function of the configured seed
//! - **Non-fatal**: a mismatch is recorded and the sweep continues
//! - **Exhaustive small cases**: every length pair up to 17 is visited
//! - **Self-checked**: built-in mutants confirm the oracle catches defects
//!
//! # Module Structure
//!
//! - [`value`]: Ordered value wrapper with cross-type comparison and conversion
//! - [`sequence`]: Seeded input generation and sorting
//! - [`compare`]: Comparator trait, mutable-call adapter, cross-type helper
//! - [`shape`]: Access shapes and range views
//! - [`policy`]: Execution policies
//! - [`algorithm`]: Reference, candidate trait and default candidate
//! - [`harness`]: Dispatcher, oracle, sweep driver, reporting and entry driver
//! - [`meta`]: Mutation testing of the oracle
//! - [`config`]: Run configuration
//! - [`error`](mod@error): Infrastructure errors
//! - [`util`]: Seeded random source
//!
//! # Example
//!
//! ```
//! use includes_conformance::config::HarnessConfig;
//! use includes_conformance::harness::{done, run_all};
//!
//! let config = HarnessConfig::default().with_size_limit(8);
//! let summary = run_all(&config).expect("harness setup");
//! assert!(summary.is_clean());
//! assert_eq!(done(), "done");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]

pub mod algorithm;
pub mod compare;
pub mod config;
pub mod error;
pub mod harness;
pub mod meta;
pub mod policy;
pub mod sequence;
pub mod shape;
pub mod util;
pub mod value;

#[cfg(any(test, feature = "test-internals"))]
pub mod test_utils;

pub use algorithm::{Candidate, PstlCandidate};
pub use compare::{Compare, NonConst, less};
pub use config::{ExitPolicy, HarnessConfig};
pub use error::HarnessError;
pub use harness::{Reporter, RunSummary, Scenario, done, run_all};
pub use policy::ExecutionPolicy;
pub use value::Num;
