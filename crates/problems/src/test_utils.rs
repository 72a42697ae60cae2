use ndarray::ArrayView1;
use rand::{SeedableRng, rngs::StdRng};

use optbench_core::{OptimizationProblem, finite_difference};

/// Largest scaled mismatch tolerated between analytic and numerical gradients.
const GRADIENT_TOL: f64 = 1e-4;

/// Checks the analytic gradient against central differences at `points`
/// starts drawn from the problem's own sampler.
pub(crate) fn assert_gradient_matches<P: OptimizationProblem>(problem: &P, points: usize) {
    let mut rng = StdRng::seed_from_u64(2021);
    for _ in 0..points {
        let x = problem.sample_start(&mut rng);
        let analytic = problem.gradient(x.view());
        let numeric = finite_difference::gradient(
            |x: ArrayView1<'_, f64>| problem.objective(x),
            x.view(),
            finite_difference::DEFAULT_STEP,
        );
        let error = finite_difference::max_scaled_error(analytic.view(), numeric.view());
        assert!(
            error < GRADIENT_TOL,
            "{}: gradient mismatch {error:e} at {x}",
            problem.name(),
        );
    }
}

/// Draws `count` starts and checks each with `in_domain`.
pub(crate) fn assert_starts_within<P, F>(problem: &P, count: usize, in_domain: F)
where
    P: OptimizationProblem,
    F: Fn(ArrayView1<'_, f64>) -> bool,
{
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..count {
        let x = problem.sample_start(&mut rng);
        assert_eq!(x.len(), problem.xdim());
        assert!(in_domain(x.view()), "{}: start {x} out of domain", problem.name());
    }
}
