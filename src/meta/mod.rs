//! Meta-testing infrastructure for verifying the differential oracle itself.
//!
//! Meta-tests sweep the default candidate and a set of deliberately broken
//! candidates over identical inputs, then confirm that the baseline is clean
//! and that every mutant trips the oracle.

pub mod mutation;
pub mod runner;

pub use mutation::{
    ALL_PROPERTIES, BuiltinMutation, MutantCandidate, UNCLASSIFIED, builtin_mutations,
    property_from_mismatch,
};
pub use runner::{MetaCoverageEntry, MetaCoverageReport, MetaReport, MetaResult, MetaRunner};
