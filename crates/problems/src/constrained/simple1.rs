use ndarray::{Array1, ArrayView1, array};
use rand::Rng;

use optbench_core::{ConstrainedOptimizationProblem, OptimizationProblem};

use crate::sampling::scaled_uniform;

use super::BUDGET;

/// Maximize `x₁x₂` under a parabola, written as a minimization.
///
/// ```text
/// f  = -x₁x₂ + 2/(3√3)
/// c₁ = x₁ + x₂² - 1   <= 0
/// c₂ = -x₁ - x₂       <= 0
/// ```
///
/// The offset makes the constrained optimum at `(2/3, 1/√3)` equal zero.
/// Starts are uniform on `[0, 2)²`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simple1;

impl OptimizationProblem for Simple1 {
    fn name(&self) -> &'static str {
        "simple1"
    }

    fn xdim(&self) -> usize {
        2
    }

    fn budget(&self) -> usize {
        BUDGET
    }

    fn objective(&self, x: ArrayView1<'_, f64>) -> f64 {
        -x[0] * x[1] + 2.0 / (3.0 * 3.0_f64.sqrt())
    }

    fn gradient(&self, x: ArrayView1<'_, f64>) -> Array1<f64> {
        array![-x[1], -x[0]]
    }

    fn sample_start<R: Rng + ?Sized>(&self, rng: &mut R) -> Array1<f64> {
        scaled_uniform(rng, array![0.0, 0.0].view(), array![2.0, 2.0].view())
    }
}

impl ConstrainedOptimizationProblem for Simple1 {
    fn cdim(&self) -> usize {
        2
    }

    fn constraints(&self, x: ArrayView1<'_, f64>) -> Array1<f64> {
        array![x[0] + x[1].powi(2) - 1.0, -x[0] - x[1]]
    }
}
