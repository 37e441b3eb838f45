//! Meta-test runner and coverage reporting.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;

use serde_json::json;
use tracing::{info, info_span, warn};

use crate::algorithm::{Candidate, PstlCandidate};
use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::harness::{Mismatch, Scenario, run_with};
use crate::util::SweepRng;

use super::mutation::{ALL_PROPERTIES, BuiltinMutation, MutantCandidate, property_from_mismatch};

/// Size limit of the reduced sweep each meta run performs.
pub const META_SIZE_LIMIT: usize = 24;
/// Forked seeds swept per run.
pub const META_ROUNDS: u64 = 2;

/// Result of a single meta mutation run.
#[derive(Debug, Clone)]
pub struct MetaResult {
    /// Mutation identifier.
    pub mutation: &'static str,
    /// Property expected to fail under mutation.
    pub property: &'static str,
    /// Mismatches from the baseline (control) runs.
    pub baseline_mismatches: Vec<Mismatch>,
    /// Mismatches from the mutated runs.
    pub mutation_mismatches: Vec<Mismatch>,
}

impl MetaResult {
    /// Returns true if the baseline runs produced no mismatch.
    #[must_use]
    pub fn baseline_clean(&self) -> bool {
        self.baseline_mismatches.is_empty()
    }

    /// Returns true if some mismatch of the mutated runs is evidence against
    /// the targeted property.
    #[must_use]
    pub fn mutation_detected(&self) -> bool {
        self.mutation_mismatches
            .iter()
            .any(|mismatch| property_from_mismatch(mismatch) == self.property)
    }
}

/// Coverage entry for a single property.
#[derive(Debug, Clone)]
pub struct MetaCoverageEntry {
    /// Property name.
    pub property: &'static str,
    /// Mutations that were detected for this property.
    pub tests: Vec<&'static str>,
}

impl MetaCoverageEntry {
    /// Returns true if at least one detected mutation covered this property.
    #[must_use]
    pub fn is_covered(&self) -> bool {
        !self.tests.is_empty()
    }
}

/// Coverage report across all properties.
#[derive(Debug, Clone)]
pub struct MetaCoverageReport {
    entries: Vec<MetaCoverageEntry>,
}

impl MetaCoverageReport {
    fn from_map(
        all_properties: &[&'static str],
        map: &BTreeMap<&'static str, BTreeSet<&'static str>>,
    ) -> Self {
        let entries = all_properties
            .iter()
            .map(|&property| MetaCoverageEntry {
                property,
                tests: map
                    .get(property)
                    .map(|set| set.iter().copied().collect())
                    .unwrap_or_default(),
            })
            .collect();
        Self { entries }
    }

    /// Returns the coverage entries in property order.
    #[must_use]
    pub fn entries(&self) -> &[MetaCoverageEntry] {
        &self.entries
    }

    /// Returns properties with zero coverage.
    #[must_use]
    pub fn missing_properties(&self) -> Vec<&'static str> {
        self.entries
            .iter()
            .filter(|entry| !entry.is_covered())
            .map(|entry| entry.property)
            .collect()
    }

    /// Renders a human-readable coverage report.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            let _ = if entry.tests.is_empty() {
                writeln!(&mut out, "{}: <missing>", entry.property)
            } else {
                writeln!(&mut out, "{}: {}", entry.property, entry.tests.join(", "))
            };
        }
        out
    }

    /// Renders a JSON coverage report.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let properties = self
            .entries
            .iter()
            .map(|entry| {
                json!({
                    "property": entry.property,
                    "tests": entry.tests,
                })
            })
            .collect::<Vec<_>>();
        json!({ "properties": properties })
    }
}

/// Report for a full meta-test run.
#[derive(Debug, Clone)]
pub struct MetaReport {
    results: Vec<MetaResult>,
    coverage: MetaCoverageReport,
}

impl MetaReport {
    /// Returns all per-mutation results.
    #[must_use]
    pub fn results(&self) -> &[MetaResult] {
        &self.results
    }

    /// Returns the coverage report.
    #[must_use]
    pub fn coverage(&self) -> &MetaCoverageReport {
        &self.coverage
    }

    /// Returns results where the baseline was dirty or the mutation slipped
    /// through.
    #[must_use]
    pub fn failures(&self) -> Vec<&MetaResult> {
        self.results
            .iter()
            .filter(|result| !result.baseline_clean() || !result.mutation_detected())
            .collect()
    }

    /// Renders a human-readable meta report.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let failures = self.failures();
        let _ = writeln!(
            &mut out,
            "meta report: {} mutations, {} failures",
            self.results.len(),
            failures.len()
        );
        for failure in failures {
            let _ = writeln!(
                &mut out,
                "failure: {} (property {})",
                failure.mutation, failure.property
            );
        }
        let _ = writeln!(&mut out, "coverage:");
        out.push_str(&self.coverage.to_text());
        out
    }

    /// Renders a JSON meta report.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let entry = |result: &MetaResult| {
            json!({
                "mutation": result.mutation,
                "property": result.property,
                "baseline_clean": result.baseline_clean(),
                "mutation_detected": result.mutation_detected(),
                "mismatches": result.mutation_mismatches.len(),
            })
        };
        let failures = self.failures().into_iter().map(entry).collect::<Vec<_>>();
        let results = self.results.iter().map(entry).collect::<Vec<_>>();
        json!({
            "summary": {
                "mutations": self.results.len(),
                "failures": failures.len(),
            },
            "results": results,
            "failures": failures,
            "coverage": self.coverage.to_json(),
        })
    }
}

/// Runner for meta-testing the oracle with built-in mutations.
///
/// Each round sweeps with a seed forked from the runner seed; the baseline
/// and every mutant of a round see identical inputs.
#[derive(Debug, Clone)]
pub struct MetaRunner {
    seed: u64,
    rounds: u64,
    size_limit: usize,
    workers: Option<usize>,
}

impl MetaRunner {
    /// Creates a new meta runner with a deterministic seed.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            seed,
            rounds: META_ROUNDS,
            size_limit: META_SIZE_LIMIT,
            workers: None,
        }
    }

    /// Sets the number of forked seeds swept.
    #[must_use]
    pub const fn with_rounds(mut self, rounds: u64) -> Self {
        self.rounds = rounds;
        self
    }

    /// Sets the size limit of each sweep.
    #[must_use]
    pub const fn with_size_limit(mut self, size_limit: usize) -> Self {
        self.size_limit = size_limit;
        self
    }

    /// Sets the worker count of every candidate's pool.
    #[must_use]
    pub const fn with_workers(mut self, workers: Option<usize>) -> Self {
        self.workers = workers;
        self
    }

    fn round_configs(&self) -> Vec<HarnessConfig> {
        let root = SweepRng::new(self.seed);
        (0..self.rounds)
            .map(|round| {
                HarnessConfig::new(root.fork(round).seed())
                    .with_size_limit(self.size_limit)
                    .with_workers(self.workers)
                    .with_grain(1)
            })
            .collect()
    }

    fn sweep<K: Candidate>(
        configs: &[HarnessConfig],
        candidate: &K,
    ) -> Result<Vec<Mismatch>, HarnessError> {
        let mut mismatches = Vec::new();
        for config in configs {
            let summary = run_with(config, candidate, &Scenario::ALL)?;
            mismatches.extend(summary.sweeps.into_iter().flat_map(|s| s.mismatches));
        }
        Ok(mismatches)
    }

    /// Runs all provided mutations and returns a report.
    pub fn run<I>(&self, mutations: I) -> Result<MetaReport, HarnessError>
    where
        I: IntoIterator<Item = BuiltinMutation>,
    {
        let span = info_span!("meta", seed = self.seed, rounds = self.rounds);
        let _guard = span.enter();
        let configs = self.round_configs();
        let grain = 1;

        let baseline = PstlCandidate::new(self.workers, grain)?;
        let baseline_mismatches = Self::sweep(&configs, &baseline)?;
        if !baseline_mismatches.is_empty() {
            warn!(count = baseline_mismatches.len(), "baseline candidate is not clean");
        }

        let mut results = Vec::new();
        let mut coverage_map: BTreeMap<&'static str, BTreeSet<&'static str>> = BTreeMap::new();
        for mutation in mutations {
            let mutant = MutantCandidate::new(mutation, PstlCandidate::new(self.workers, grain)?);
            let mutation_mismatches = Self::sweep(&configs, &mutant)?;
            let result = MetaResult {
                mutation: mutation.name(),
                property: mutation.property(),
                baseline_mismatches: baseline_mismatches.clone(),
                mutation_mismatches,
            };
            info!(
                mutation = result.mutation,
                detected = result.mutation_detected(),
                "mutation run complete"
            );
            if result.mutation_detected() {
                coverage_map
                    .entry(result.property)
                    .or_default()
                    .insert(result.mutation);
            }
            results.push(result);
        }

        let coverage = MetaCoverageReport::from_map(ALL_PROPERTIES, &coverage_map);
        Ok(MetaReport { results, coverage })
    }
}
