use ndarray::{Array1, ArrayView1};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// Defines an unconstrained benchmark problem.
///
/// A problem is a closed-form objective with its exact gradient, a name the
/// optimizer can dispatch on, and the weighted evaluation budget (`n`) allowed
/// per trial. Implementations provide raw math only; evaluation counting and
/// input validation are added by [`Counted`](crate::Counted).
///
/// Methods that take an `ArrayView1` may assume `x.len() == self.xdim()`.
pub trait OptimizationProblem {
    /// Returns the problem name (for example `"simple1"`).
    fn name(&self) -> &'static str;

    /// Returns the dimension of `x`.
    fn xdim(&self) -> usize;

    /// Returns the number of weighted evaluations allowed per trial.
    fn budget(&self) -> usize;

    /// Evaluates the objective at `x`.
    fn objective(&self, x: ArrayView1<'_, f64>) -> f64;

    /// Evaluates the analytic gradient of the objective at `x`.
    fn gradient(&self, x: ArrayView1<'_, f64>) -> Array1<f64>;

    /// Draws a random starting point.
    ///
    /// The default draws each component from a standard normal distribution.
    fn sample_start<R: Rng + ?Sized>(&self, rng: &mut R) -> Array1<f64> {
        Array1::from_shape_fn(self.xdim(), |_| StandardNormal.sample(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;
    use rand::{SeedableRng, rngs::StdRng};

    struct Bowl;

    impl OptimizationProblem for Bowl {
        fn name(&self) -> &'static str {
            "bowl"
        }

        fn xdim(&self) -> usize {
            3
        }

        fn budget(&self) -> usize {
            10
        }

        fn objective(&self, x: ArrayView1<'_, f64>) -> f64 {
            x.dot(&x)
        }

        fn gradient(&self, x: ArrayView1<'_, f64>) -> Array1<f64> {
            x.mapv(|v| 2.0 * v)
        }
    }

    #[test]
    fn default_start_has_problem_dimension() {
        let mut rng = StdRng::seed_from_u64(0);
        let x0 = Bowl.sample_start(&mut rng);
        assert_eq!(x0.len(), 3);
        assert!(x0.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn default_start_is_reproducible_per_seed() {
        let a = Bowl.sample_start(&mut StdRng::seed_from_u64(42));
        let b = Bowl.sample_start(&mut StdRng::seed_from_u64(42));
        let c = Bowl.sample_start(&mut StdRng::seed_from_u64(43));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn raw_math_is_uncounted() {
        let x = array![1.0, 2.0, 3.0];
        assert_relative_eq!(Bowl.objective(x.view()), 14.0);
        assert_eq!(Bowl.gradient(x.view()), array![2.0, 4.0, 6.0]);
    }
}
