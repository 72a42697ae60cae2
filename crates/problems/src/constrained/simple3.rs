use ndarray::{Array1, ArrayView1, array};
use rand::Rng;

use optbench_core::{ConstrainedOptimizationProblem, OptimizationProblem};

use crate::sampling::scaled_uniform;

use super::BUDGET;

/// A linear objective over the unit ball.
///
/// ```text
/// f  = x₁ - 2x₂ + x₃ + √6
/// c₁ = x₁² + x₂² + x₃² - 1   <= 0
/// ```
///
/// The minimum sits on the sphere at `-(1, -2, 1)/√6`, where `f = 0`.
/// Starts are drawn uniformly from the box `[-2, 2) × (-2, 2] × {0}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simple3;

impl OptimizationProblem for Simple3 {
    fn name(&self) -> &'static str {
        "simple3"
    }

    fn xdim(&self) -> usize {
        3
    }

    fn budget(&self) -> usize {
        BUDGET
    }

    fn objective(&self, x: ArrayView1<'_, f64>) -> f64 {
        x[0] - 2.0 * x[1] + x[2] + 6.0_f64.sqrt()
    }

    fn gradient(&self, _x: ArrayView1<'_, f64>) -> Array1<f64> {
        array![1.0, -2.0, 1.0]
    }

    fn sample_start<R: Rng + ?Sized>(&self, rng: &mut R) -> Array1<f64> {
        let b = array![2.0, -2.0, 0.0];
        let a = -&b;
        scaled_uniform(rng, a.view(), b.view())
    }
}

impl ConstrainedOptimizationProblem for Simple3 {
    fn cdim(&self) -> usize {
        1
    }

    fn constraints(&self, x: ArrayView1<'_, f64>) -> Array1<f64> {
        array![x.dot(&x) - 1.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use optbench_core::is_feasible;
    use rand::{SeedableRng, rngs::StdRng};

    use crate::test_utils::{assert_gradient_matches, assert_starts_within};

    #[test]
    fn minimum_on_unit_sphere() {
        let x = array![-1.0, 2.0, -1.0] / 6.0_f64.sqrt();
        assert_relative_eq!(Simple3.objective(x.view()), 0.0, epsilon = 1e-12);

        let c = Simple3.constraints(x.view());
        assert_relative_eq!(c[0], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn origin_is_strictly_feasible() {
        let c = Simple3.constraints(Array1::zeros(3).view());
        assert_eq!(c, array![-1.0]);
        assert!(is_feasible(c.view()));
    }

    #[test]
    fn gradient_matches_finite_differences() {
        assert_gradient_matches(&Simple3, 200);
    }

    #[test]
    fn starts_fill_the_flat_box() {
        assert_starts_within(&Simple3, 500, |x| {
            (-2.0..2.0).contains(&x[0]) && x[1] > -2.0 && x[1] <= 2.0 && x[2] == 0.0
        });
    }

    #[test]
    fn start_components_are_independent() {
        let mut rng = StdRng::seed_from_u64(11);
        let off_diagonal = (0..50)
            .map(|_| Simple3.sample_start(&mut rng))
            .filter(|x| (x[0] + x[1]).abs() > 1e-6)
            .count();
        assert!(off_diagonal > 0);
    }
}
