use std::error::Error as StdError;

use ndarray::Array1;
use optbench_core::{ConstrainedOracle, Oracle};
use rand::rngs::StdRng;

/// An optimizer for unconstrained problems.
///
/// `optimize` receives a counted oracle for the problem, a start point `x0`,
/// the weighted evaluation budget `n`, and the problem name `prob`. It must
/// return a point of the same dimension as `x0`.
///
/// `rng` is the trial's generator, already advanced past the draw of `x0`.
/// Use it for any randomness so that trials stay reproducible.
pub trait Optimizer {
    type Error: StdError + Send + Sync + 'static;

    /// Minimizes the oracle's objective starting from `x0`.
    ///
    /// # Errors
    ///
    /// Implementations may fail; scoring of the variant then ends with
    /// [`Error::Optimizer`](crate::Error::Optimizer).
    fn optimize(
        &self,
        oracle: &dyn Oracle,
        x0: &Array1<f64>,
        n: usize,
        prob: &str,
        rng: &mut StdRng,
    ) -> Result<Array1<f64>, Self::Error>;
}

/// An optimizer for constrained problems.
///
/// The contract matches [`Optimizer`], with the oracle also exposing the
/// constraint values `c(x) <= 0`.
pub trait ConstrainedOptimizer {
    type Error: StdError + Send + Sync + 'static;

    /// Minimizes the oracle's objective subject to its constraints.
    ///
    /// # Errors
    ///
    /// Implementations may fail; scoring of the variant then ends with
    /// [`Error::Optimizer`](crate::Error::Optimizer).
    fn optimize(
        &self,
        oracle: &dyn ConstrainedOracle,
        x0: &Array1<f64>,
        n: usize,
        prob: &str,
        rng: &mut StdRng,
    ) -> Result<Array1<f64>, Self::Error>;
}
