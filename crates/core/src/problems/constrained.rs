use ndarray::{Array1, ArrayView1};

use super::OptimizationProblem;

/// Defines a benchmark problem with inequality constraints.
///
/// Constraints follow the `c(x) <= 0` convention: a point is feasible when
/// every component of [`constraints`](Self::constraints) is non-positive.
pub trait ConstrainedOptimizationProblem: OptimizationProblem {
    /// Returns the number of constraints.
    fn cdim(&self) -> usize;

    /// Evaluates the constraint vector at `x`.
    ///
    /// The returned array has length [`cdim`](Self::cdim).
    fn constraints(&self, x: ArrayView1<'_, f64>) -> Array1<f64>;

    /// Returns a separate bound on the number of constraint calls, if any.
    ///
    /// `None` means constraint calls only draw on the shared budget `n`.
    fn constraint_budget(&self) -> Option<usize> {
        None
    }
}

/// Returns `true` if every constraint value is `<= 0`.
///
/// A `NaN` constraint value is never satisfied.
#[must_use]
pub fn is_feasible(constraints: ArrayView1<'_, f64>) -> bool {
    constraints.iter().all(|&c| c <= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::array;

    #[test]
    fn feasible_requires_all_non_positive() {
        assert!(is_feasible(array![-0.25, -1.0].view()));
        assert!(is_feasible(array![0.0, 0.0].view()));
        assert!(!is_feasible(array![-1.0, 1e-12].view()));
    }

    #[test]
    fn nan_is_infeasible() {
        assert!(!is_feasible(array![-1.0, f64::NAN].view()));
    }

    #[test]
    fn empty_constraint_vector_is_feasible() {
        assert!(is_feasible(Array1::<f64>::zeros(0).view()));
    }
}
