//! Meta-tests: the oracle must flag every built-in mutant.

mod common;
mod meta;
