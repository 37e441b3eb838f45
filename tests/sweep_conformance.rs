//! End-to-end checks of the sweep against the default and broken candidates.

mod common;
use common::*;

use includes_conformance::algorithm::{Candidate, PstlCandidate, reference};
use includes_conformance::compare::{NonConst, less};
use includes_conformance::config::{ExitPolicy, HarnessConfig};
use includes_conformance::harness::{Reporter, Scenario, WRONG_RESULT, run_all, run_with, test_includes};
use includes_conformance::meta::{BuiltinMutation, MutantCandidate};
use includes_conformance::policy::ExecutionPolicy;
use includes_conformance::sequence::Sequence;
use includes_conformance::shape::{BidirectionalView, ForwardView, RandomAccessView};
use includes_conformance::util::SweepRng;
use includes_conformance::value::Num;

fn all_shapes(candidate: &PstlCandidate, first: &[f64], second: &[f64]) -> Vec<bool> {
    let mut answers = Vec::new();
    for policy in ExecutionPolicy::ALL {
        if policy.accepts_sequential_shapes() {
            answers.push(candidate.includes(
                policy,
                ForwardView::new(first),
                ForwardView::new(second),
                less::<f64>,
            ));
            answers.push(candidate.includes(
                policy,
                BidirectionalView::new(first),
                BidirectionalView::new(second),
                NonConst::new(less::<f64>),
            ));
        }
        answers.push(candidate.includes(
            policy,
            RandomAccessView::new(first),
            RandomAccessView::new(second),
            less::<f64>,
        ));
    }
    answers
}

#[test]
fn reduced_sweep_is_clean_for_both_scenarios() {
    init_test("reduced_sweep_is_clean_for_both_scenarios");
    let summary = run_all(&small_config(42)).expect("run");
    for sweep in &summary.sweeps {
        assert_with_log!(sweep.is_clean(), sweep.scenario, 0, sweep.mismatches.len());
        assert_with_log!(sweep.checks > 0, "checks ran", "> 0", sweep.checks);
        assert_with_log!(sweep.skips > 0, "reverse skipped", "> 0", sweep.skips);
    }
    assert_with_log!(summary.exit_code() == 0, "exit code", 0, summary.exit_code());
    test_complete!("reduced_sweep_is_clean_for_both_scenarios");
}

#[test]
fn same_seed_same_report() {
    init_test("same_seed_same_report");
    let config = small_config(DEFAULT_TEST_SEED);
    let a = run_all(&config).expect("first run");
    let b = run_all(&config).expect("second run");
    assert_with_log!(a == b, "identical summaries", a.to_text(), b.to_text());

    let mut rng_a = SweepRng::new(42);
    let mut rng_b = SweepRng::new(42);
    let xs = Sequence::<f64>::wide(64, &mut rng_a);
    let ys = Sequence::<f64>::wide(64, &mut rng_b);
    assert_with_log!(xs == ys, "identical sequences", &xs, &ys);
    test_complete!("same_seed_same_report");
}

#[test]
fn worked_example_under_every_shape() {
    init_test("worked_example_under_every_shape");
    let candidate = PstlCandidate::new(Some(2), 1).expect("pool");
    let first = [0.0, 2.0, 2.0, 5.0];

    let yes = all_shapes(&candidate, &first, &[2.0, 2.0]);
    assert_with_log!(yes.iter().all(|&r| r), "[2,2] included", true, yes);
    let no = all_shapes(&candidate, &first, &[2.0, 2.0, 2.0]);
    assert_with_log!(no.iter().all(|&r| !r), "[2,2,2] excluded", false, no);

    let yes = all_shapes(&candidate, &[1.0, 1.0, 2.0], &[1.0, 1.0]);
    assert_with_log!(yes.iter().all(|&r| r), "[1,1] in [1,1,2]", true, yes);
    let no = all_shapes(&candidate, &[1.0, 1.0, 2.0], &[1.0, 1.0, 1.0]);
    assert_with_log!(no.iter().all(|&r| !r), "[1,1,1] not in [1,1,2]", false, no);
    test_complete!("worked_example_under_every_shape");
}

#[test]
fn empty_and_singleton_edges() {
    init_test("empty_and_singleton_edges");
    let candidate = PstlCandidate::new(Some(2), 1).expect("pool");
    let cases: [(&[f64], &[f64], bool); 6] = [
        (&[], &[], true),
        (&[3.0], &[], true),
        (&[], &[3.0], false),
        (&[3.0], &[3.0], true),
        (&[3.0], &[4.0], false),
        (&[4.0], &[3.0], false),
    ];
    for (first, second, expected) in cases {
        let reference = reference::includes(first, second, less::<f64>);
        assert_with_log!(reference == expected, "reference", expected, reference);
        let answers = all_shapes(&candidate, first, second);
        let agree = answers.iter().all(|&r| r == expected);
        assert_with_log!(agree, "candidate", expected, answers);
    }
    test_complete!("empty_and_singleton_edges");
}

#[test]
fn comparator_forms_agree_on_small_inputs() {
    init_test("comparator_forms_agree_on_small_inputs");
    let candidate = PstlCandidate::new(Some(2), 1).expect("pool");
    let mut rng = SweepRng::new(42);
    for n in 0..5 {
        for m in 0..5 {
            let mut first = Sequence::<f64>::wide(n, &mut rng);
            let mut second = Sequence::<f64>::narrow(m, &mut rng);
            first.sort_by_less(less::<f64>);
            second.sort_by_less(less::<f64>);
            for policy in ExecutionPolicy::ALL {
                let shared = candidate.includes(
                    policy,
                    RandomAccessView::new(&first),
                    RandomAccessView::new(&second),
                    less::<f64>,
                );
                let mutable = candidate.includes(
                    policy,
                    RandomAccessView::new(&first),
                    RandomAccessView::new(&second),
                    NonConst::new(less::<f64>),
                );
                assert_with_log!(shared == mutable, policy.as_str(), shared, mutable);
            }
        }
    }
    test_complete!("comparator_forms_agree_on_small_inputs");
}

#[test]
fn cross_type_scenario_agrees_with_float_scenario() {
    init_test("cross_type_scenario_agrees_with_float_scenario");
    let mut float_rng = SweepRng::new(42);
    let mut num_rng = SweepRng::new(42);
    let comp = |x: &Num<i64>, y: &Num<i32>| x < y;
    let mut cross = includes_conformance::compare::CrossLess::new(comp);
    for n in 0..=17 {
        for m in 0..=17 {
            let mut first_f = Sequence::<f64>::wide(n, &mut float_rng);
            let mut second_f = Sequence::<f64>::narrow(m, &mut float_rng);
            first_f.sort_by_less(less::<f64>);
            second_f.sort_by_less(less::<f64>);

            let mut first_n = Sequence::<Num<i64>>::wide(n, &mut num_rng);
            let mut second_n = Sequence::<Num<i32>>::narrow(m, &mut num_rng);
            first_n.sort_by_less(|x, y| cross.first_first(x, y));
            second_n.sort_by_less(|x, y| cross.second_second(x, y));

            let same = reference::includes(&first_f, &second_f, less::<f64>);
            let mixed = reference::includes(&first_n, &second_n, comp);
            assert_with_log!(same == mixed, "scenarios agree", same, mixed);
        }
    }

    let config = small_config(42);
    let summary = run_all(&config).expect("run");
    let checks: Vec<u64> = summary.sweeps.iter().map(|s| s.checks).collect();
    assert_with_log!(checks[0] == checks[1], "same check count", checks[0], checks[1]);
    test_complete!("cross_type_scenario_agrees_with_float_scenario");
}

#[test]
fn broken_candidate_is_reported_and_sweep_continues() {
    init_test("broken_candidate_is_reported_and_sweep_continues");
    let config = small_config(42).with_exit_policy(ExitPolicy::FailOnMismatch);
    let mutant = MutantCandidate::new(
        BuiltinMutation::EmptySecondRejects,
        PstlCandidate::from_config(&config).expect("pool"),
    );
    let summary = run_with(&config, &mutant, &Scenario::ALL).expect("run");
    assert_with_log!(summary.sweeps.len() == 2, "both sweeps ran", 2, summary.sweeps.len());
    let clean = PstlCandidate::from_config(&config).expect("pool");
    let baseline = run_with(&config, &clean, &Scenario::ALL).expect("run");
    // Every pair is still visited after the first mismatch.
    assert_with_log!(
        summary.sweeps[0].pairs == baseline.sweeps[0].pairs,
        "pairs",
        baseline.sweeps[0].pairs,
        summary.sweeps[0].pairs
    );
    let all_m0 = summary
        .sweeps
        .iter()
        .flat_map(|s| &s.mismatches)
        .all(|mm| mm.m == 0 && mm.expected && !mm.actual && mm.message == WRONG_RESULT);
    assert_with_log!(all_m0, "mismatches only for empty second", true, summary.to_text());
    assert_with_log!(!summary.is_clean(), "dirty", false, summary.is_clean());
    assert_with_log!(summary.exit_code() == 1, "exit code", 1, summary.exit_code());
    test_complete!("broken_candidate_is_reported_and_sweep_continues");
}

#[test]
fn stop_on_first_failure_ends_the_run() {
    init_test("stop_on_first_failure_ends_the_run");
    let config = small_config(42).with_stop_on_first_failure(true);
    let mutant = MutantCandidate::new(
        BuiltinMutation::EmptySecondRejects,
        PstlCandidate::from_config(&config).expect("pool"),
    );
    let summary = run_with(&config, &mutant, &Scenario::ALL).expect("run");
    assert_with_log!(summary.sweeps.len() == 1, "second scenario skipped", 1, summary.sweeps.len());
    let sweep = &summary.sweeps[0];
    assert_with_log!(sweep.pairs == 1, "stopped at (0, 0)", 1, sweep.pairs);
    assert_with_log!(sweep.stopped_early, "flag", true, sweep.stopped_early);
    // Shared and mutable rounds, 8 checked dispatches each.
    let count = sweep.mismatches.len();
    assert_with_log!(count == 16, "mismatches", 16, count);
    assert_with_log!(summary.exit_code() == 0, "report only", 0, summary.exit_code());
    test_complete!("stop_on_first_failure_ends_the_run");
}

#[test]
fn reporter_spans_sweeps_driven_directly() {
    init_test("reporter_spans_sweeps_driven_directly");
    let config = HarnessConfig::new(7).with_size_limit(10).with_workers(Some(2));
    let candidate = PstlCandidate::from_config(&config).expect("pool");
    let mut reporter = Reporter::new(false);
    let first = test_includes::<f64, f64, _, _>(&config, &candidate, "float64", less::<f64>, &mut reporter);
    let second = test_includes::<Num<i64>, Num<i32>, _, _>(
        &config,
        &candidate,
        "num_i64_i32",
        |x: &Num<i64>, y: &Num<i32>| x < y,
        &mut reporter,
    );
    let total = first.checks + second.checks;
    assert_with_log!(reporter.checks() == total, "totals", total, reporter.checks());
    assert_with_log!(reporter.is_clean(), "clean", true, reporter.mismatches());
    test_complete!("reporter_spans_sweeps_driven_directly");
}
