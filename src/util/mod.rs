//! Internal utilities for the harness.
//!
//! Kept minimal so every input of a run is a function of the configured seed.

pub mod rng;

pub use rng::{RAND_MAX, SweepRng};
