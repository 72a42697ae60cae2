use ndarray::{Array1, ArrayView1, array};
use rand::Rng;

use optbench_core::OptimizationProblem;

use crate::sampling::clipped_normal;

use super::START_CLIP;

/// Himmelblau's function, `(x² + y - 11)² + (x + y² - 7)²`.
///
/// Four global minima with `f = 0`, one of them at `(3, 2)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Himmelblau;

impl OptimizationProblem for Himmelblau {
    fn name(&self) -> &'static str {
        "simple2"
    }

    fn xdim(&self) -> usize {
        2
    }

    fn budget(&self) -> usize {
        40
    }

    fn objective(&self, v: ArrayView1<'_, f64>) -> f64 {
        let (x, y) = (v[0], v[1]);
        (x.powi(2) + y - 11.0).powi(2) + (x + y.powi(2) - 7.0).powi(2)
    }

    fn gradient(&self, v: ArrayView1<'_, f64>) -> Array1<f64> {
        let (x, y) = (v[0], v[1]);
        array![
            2.0 * (2.0 * x * (x.powi(2) + y - 11.0) + x + y.powi(2) - 7.0),
            2.0 * (x.powi(2) + 2.0 * y * (x + y.powi(2) - 7.0) + y - 11.0),
        ]
    }

    fn sample_start<R: Rng + ?Sized>(&self, rng: &mut R) -> Array1<f64> {
        clipped_normal(rng, self.xdim(), -START_CLIP, START_CLIP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::test_utils::{assert_gradient_matches, assert_starts_within};

    #[test]
    fn minima_are_zero() {
        let minima = [
            [3.0, 2.0],
            [-2.805_118, 3.131_312],
            [-3.779_310, -3.283_186],
            [3.584_428, -1.848_126],
        ];
        for [x, y] in minima {
            assert_relative_eq!(Himmelblau.objective(array![x, y].view()), 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn gradient_vanishes_at_exact_minimum() {
        assert_eq!(Himmelblau.gradient(array![3.0, 2.0].view()), array![0.0, 0.0]);
    }

    #[test]
    fn gradient_matches_finite_differences() {
        assert_gradient_matches(&Himmelblau, 200);
    }

    #[test]
    fn starts_are_clipped() {
        assert_starts_within(&Himmelblau, 500, |x| x.iter().all(|v| v.abs() <= 3.0));
    }
}
