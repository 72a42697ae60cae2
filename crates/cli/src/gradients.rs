use ndarray::ArrayView1;
use optbench_core::{OptimizationProblem, finite_difference};
use optbench_problems::{constrained, unconstrained};
use rand::{SeedableRng, rngs::StdRng};

use crate::args::GradientArgs;

/// Largest scaled error reported as a match.
const TOLERANCE: f64 = 1e-4;

/// Checks every problem's gradient and prints the worst error per problem.
pub fn run(args: &GradientArgs) {
    let rows = [
        row("unconstrained", &unconstrained::Rosenbrock, args),
        row("unconstrained", &unconstrained::Himmelblau, args),
        row("unconstrained", &unconstrained::Powell, args),
        row("constrained", &constrained::Simple1, args),
        row("constrained", &constrained::Simple2, args),
        row("constrained", &constrained::Simple3, args),
    ];

    for (project, name, error) in rows {
        let status = if error < TOLERANCE { "ok" } else { "MISMATCH" };
        println!("{project:>13} {name}: worst scaled error {error:.3e} [{status}]");
        if error >= TOLERANCE {
            log::warn!("{project} {name}: analytic gradient disagrees with finite differences");
        }
    }
}

fn row<P: OptimizationProblem>(
    project: &'static str,
    problem: &P,
    args: &GradientArgs,
) -> (&'static str, &'static str, f64) {
    (
        project,
        problem.name(),
        worst_error(problem, args.points, args.seed),
    )
}

/// Returns the worst scaled gradient error over `points` sampled starts.
pub fn worst_error<P: OptimizationProblem>(problem: &P, points: usize, seed: u64) -> f64 {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..points)
        .map(|_| {
            let x = problem.sample_start(&mut rng);
            let numeric = finite_difference::gradient(
                |x: ArrayView1<'_, f64>| problem.objective(x),
                x.view(),
                finite_difference::DEFAULT_STEP,
            );
            finite_difference::max_scaled_error(problem.gradient(x.view()).view(), numeric.view())
        })
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn shipped_gradients_match() {
        assert!(worst_error(&unconstrained::Powell, 50, 1) < TOLERANCE);
        assert!(worst_error(&constrained::Simple1, 50, 1) < TOLERANCE);
    }

    #[test]
    fn no_points_means_no_error() {
        assert_relative_eq!(worst_error(&unconstrained::Rosenbrock, 0, 1), 0.0);
    }
}
