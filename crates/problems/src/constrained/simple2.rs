use ndarray::{Array1, ArrayView1, array};
use rand::Rng;

use optbench_core::{ConstrainedOptimizationProblem, OptimizationProblem};

use crate::{
    sampling::scaled_uniform,
    unconstrained::{rosenbrock, rosenbrock_gradient},
};

use super::BUDGET;

/// Rosenbrock's function constrained by a cubic and a line.
///
/// ```text
/// c₁ = (x₁ - 1)³ - x₂ + 1   <= 0
/// c₂ = x₁ + x₂ - 2          <= 0
/// ```
///
/// The unconstrained minimum `(1, 1)` lies on both constraint boundaries.
/// Starts are uniform on `[-1, 1)²`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simple2;

impl OptimizationProblem for Simple2 {
    fn name(&self) -> &'static str {
        "simple2"
    }

    fn xdim(&self) -> usize {
        2
    }

    fn budget(&self) -> usize {
        BUDGET
    }

    fn objective(&self, x: ArrayView1<'_, f64>) -> f64 {
        rosenbrock(x)
    }

    fn gradient(&self, x: ArrayView1<'_, f64>) -> Array1<f64> {
        rosenbrock_gradient(x)
    }

    fn sample_start<R: Rng + ?Sized>(&self, rng: &mut R) -> Array1<f64> {
        scaled_uniform(rng, array![-1.0, -1.0].view(), array![1.0, 1.0].view())
    }
}

impl ConstrainedOptimizationProblem for Simple2 {
    fn cdim(&self) -> usize {
        2
    }

    fn constraints(&self, x: ArrayView1<'_, f64>) -> Array1<f64> {
        array![(x[0] - 1.0).powi(3) - x[1] + 1.0, x[0] + x[1] - 2.0]
    }
}
