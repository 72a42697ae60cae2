use integration_tests::FeasibilityRestoration;
use optbench_harness::{Config, Submission, constrained_suite, unconstrained_suite};

fn reports<T>(results: Vec<(&'static str, Result<T, optbench_harness::Error>)>) -> Vec<T> {
    results.into_iter().map(|(_, r)| r.unwrap()).collect()
}

#[test]
fn repeated_runs_give_identical_reports() {
    let config = Config::new(100, 0.55, 0.95).unwrap();
    assert_eq!(
        reports(unconstrained_suite(&Submission, &config, ())),
        reports(unconstrained_suite(&Submission, &config, ())),
    );
}

#[test]
fn parallel_runs_match_sequential_runs() {
    let sequential = Config::new(120, 0.55, 0.95).unwrap();
    let parallel = sequential.with_parallel(true);

    assert_eq!(
        reports(unconstrained_suite(&Submission, &sequential, ())),
        reports(unconstrained_suite(&Submission, &parallel, ())),
    );
    assert_eq!(
        reports(constrained_suite(&FeasibilityRestoration, &sequential, ())),
        reports(constrained_suite(&FeasibilityRestoration, &parallel, ())),
    );
}
