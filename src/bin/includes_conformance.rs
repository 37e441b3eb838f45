//! includes-conformance: differential sweep of a policy-parameterized
//! `includes` against the sequential reference.
//!
//! ```bash
//! includes-conformance
//! includes-conformance --size-limit 2000 --scenario float64 --json
//! includes-conformance --exit-policy fail-on-mismatch --stop-on-first-failure
//! includes-conformance --size-limit 64 --mutation empty-second-rejects
//! ```
//!
//! With no flags the fixed sweep runs (seed 42, lengths below one million,
//! both scenarios) and the process exits successfully once it completes.

use std::io::{self, Write};
#[cfg(feature = "config-file")]
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use includes_conformance::algorithm::PstlCandidate;
use includes_conformance::config::{ExitPolicy, HarnessConfig};
use includes_conformance::harness::{Scenario, done, run, run_with};
use includes_conformance::meta::{BuiltinMutation, MutantCandidate};
use includes_conformance::HarnessError;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "includes-conformance",
    version,
    about = "Differential conformance sweep for ordered inclusion",
    long_about = "Checks the candidate includes implementation against the sequential\n\
        reference under every execution policy and access shape, over a\n\
        reproducible sweep of input lengths."
)]
struct Cli {
    /// Seed for the sequence generator
    #[arg(long)]
    seed: Option<u64>,

    /// Exclusive upper bound on generated lengths
    #[arg(long)]
    size_limit: Option<usize>,

    /// Worker threads for the parallel policies
    #[arg(long)]
    workers: Option<usize>,

    /// Run only this scenario (repeatable)
    #[arg(long, value_enum)]
    scenario: Vec<Scenario>,

    /// What the exit status reflects
    #[arg(long, value_enum)]
    exit_policy: Option<ExitPolicy>,

    /// Sweep a built-in broken candidate instead of the shipped one
    #[arg(long, value_enum)]
    mutation: Option<BuiltinMutation>,

    /// Stop after the first mismatch
    #[arg(long, action = ArgAction::SetTrue)]
    stop_on_first_failure: bool,

    /// Load settings from a TOML file before applying flags
    #[cfg(feature = "config-file")]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output as JSON instead of human-readable text
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn base_config(cli: &Cli) -> Result<HarnessConfig, HarnessError> {
    #[cfg(feature = "config-file")]
    if let Some(path) = &cli.config {
        return HarnessConfig::from_toml_file(path);
    }
    #[cfg(not(feature = "config-file"))]
    let _ = cli;
    Ok(HarnessConfig::default())
}

fn build_config(cli: &Cli) -> Result<HarnessConfig, HarnessError> {
    let mut config = base_config(cli)?;
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(size_limit) = cli.size_limit {
        config = config.with_size_limit(size_limit);
    }
    if cli.workers.is_some() {
        config = config.with_workers(cli.workers);
    }
    if let Some(policy) = cli.exit_policy {
        config = config.with_exit_policy(policy);
    }
    if cli.stop_on_first_failure {
        config = config.with_stop_on_first_failure(true);
    }
    config.validate()?;
    Ok(config)
}

fn cmd_run(cli: &Cli) -> Result<u8, HarnessError> {
    let config = build_config(cli)?;
    let scenarios = if cli.scenario.is_empty() {
        Scenario::ALL.to_vec()
    } else {
        cli.scenario.clone()
    };
    let summary = match cli.mutation {
        None => run(&config, &scenarios)?,
        Some(mutation) => {
            let mutant = MutantCandidate::new(mutation, PstlCandidate::from_config(&config)?);
            info!(mutation = mutant.mutation().name(), "sweeping built-in mutation");
            run_with(&config, &mutant, &scenarios)?
        }
    };

    let output = if cli.json {
        summary.render_json()?
    } else {
        summary.to_text()
    };
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", output.trim_end());
    let _ = writeln!(stdout, "{}", done());
    Ok(summary.exit_code())
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    match cmd_run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}
