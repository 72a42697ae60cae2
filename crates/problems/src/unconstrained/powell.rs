use ndarray::{Array1, ArrayView1, array};
use rand::Rng;

use optbench_core::OptimizationProblem;

use crate::sampling::clipped_normal;

use super::START_CLIP;

/// Powell's singular function in four variables.
///
/// With `[w, x, y, z]` as the components:
///
/// ```text
/// f = (w + 10x)² + 5(y - z)² + (x - 2y)⁴ + 10(w - z)⁴
/// ```
///
/// Global minimum `f = 0` at the origin, where the Hessian is singular.
#[derive(Debug, Clone, Copy, Default)]
pub struct Powell;

impl OptimizationProblem for Powell {
    fn name(&self) -> &'static str {
        "simple3"
    }

    fn xdim(&self) -> usize {
        4
    }

    fn budget(&self) -> usize {
        100
    }

    fn objective(&self, v: ArrayView1<'_, f64>) -> f64 {
        let (w, x, y, z) = (v[0], v[1], v[2], v[3]);
        (w + 10.0 * x).powi(2)
            + 5.0 * (y - z).powi(2)
            + (x - 2.0 * y).powi(4)
            + 10.0 * (w - z).powi(4)
    }

    fn gradient(&self, v: ArrayView1<'_, f64>) -> Array1<f64> {
        let (w, x, y, z) = (v[0], v[1], v[2], v[3]);
        array![
            2.0 * (20.0 * (w - z).powi(3) + w + 10.0 * x),
            4.0 * (5.0 * (w + 10.0 * x) + (x - 2.0 * y).powi(3)),
            10.0 * (y - z) - 8.0 * (x - 2.0 * y).powi(3),
            10.0 * (-4.0 * (w - z).powi(3) - y + z),
        ]
    }

    fn sample_start<R: Rng + ?Sized>(&self, rng: &mut R) -> Array1<f64> {
        clipped_normal(rng, self.xdim(), -START_CLIP, START_CLIP)
    }
}
