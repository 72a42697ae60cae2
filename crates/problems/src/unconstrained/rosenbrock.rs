use ndarray::{Array1, ArrayView1, array};
use rand::Rng;

use optbench_core::OptimizationProblem;

use crate::sampling::clipped_normal;

use super::START_CLIP;

/// Rosenbrock's banana function, `100(x₂ - x₁²)² + (1 - x₁)²`.
///
/// Global minimum `f = 0` at `(1, 1)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rosenbrock;

impl OptimizationProblem for Rosenbrock {
    fn name(&self) -> &'static str {
        "simple1"
    }

    fn xdim(&self) -> usize {
        2
    }

    fn budget(&self) -> usize {
        20
    }

    fn objective(&self, x: ArrayView1<'_, f64>) -> f64 {
        rosenbrock(x)
    }

    fn gradient(&self, x: ArrayView1<'_, f64>) -> Array1<f64> {
        rosenbrock_gradient(x)
    }

    fn sample_start<R: Rng + ?Sized>(&self, rng: &mut R) -> Array1<f64> {
        clipped_normal(rng, self.xdim(), -START_CLIP, START_CLIP)
    }
}

pub(crate) fn rosenbrock(x: ArrayView1<'_, f64>) -> f64 {
    100.0 * (x[1] - x[0].powi(2)).powi(2) + (1.0 - x[0]).powi(2)
}

pub(crate) fn rosenbrock_gradient(x: ArrayView1<'_, f64>) -> Array1<f64> {
    array![
        2.0 * (-1.0 + x[0] + 200.0 * x[0].powi(3) - 200.0 * x[0] * x[1]),
        200.0 * (-x[0].powi(2) + x[1]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::test_utils::{assert_gradient_matches, assert_starts_within};

    #[test]
    fn minimum_at_ones() {
        let x = array![1.0, 1.0];
        assert_relative_eq!(Rosenbrock.objective(x.view()), 0.0);
        assert_eq!(Rosenbrock.gradient(x.view()), array![0.0, 0.0]);
    }

    #[test]
    fn known_value_at_origin() {
        let x = array![0.0, 0.0];
        assert_relative_eq!(Rosenbrock.objective(x.view()), 1.0);
        assert_eq!(Rosenbrock.gradient(x.view()), array![-2.0, 0.0]);
    }

    #[test]
    fn gradient_matches_finite_differences() {
        assert_gradient_matches(&Rosenbrock, 200);
    }

    #[test]
    fn starts_are_clipped() {
        assert_starts_within(&Rosenbrock, 500, |x| x.iter().all(|v| v.abs() <= 3.0));
    }
}
