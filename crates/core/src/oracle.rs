use ndarray::Array1;

use crate::EvalError;

/// The counted view of an unconstrained problem handed to an optimizer.
///
/// Every call is charged against the trial's evaluation counter:
/// [`f`](Self::f) costs one unit and [`g`](Self::g) costs two.
/// This trait is object safe so a single optimizer entry point can receive
/// any problem as `&dyn Oracle`.
pub trait Oracle {
    /// Evaluates the objective.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::Dimension`] if `x` has the wrong length.
    fn f(&self, x: &Array1<f64>) -> Result<f64, EvalError>;

    /// Evaluates the gradient of the objective.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::Dimension`] if `x` has the wrong length.
    fn g(&self, x: &Array1<f64>) -> Result<Array1<f64>, EvalError>;

    /// Returns the weighted number of evaluations spent so far.
    fn count(&self) -> usize;
}

/// The counted view of a constrained problem handed to an optimizer.
///
/// Constraint calls cost one unit each and share the objective's counter.
pub trait ConstrainedOracle: Oracle {
    /// Evaluates the constraint vector; feasibility means every value `<= 0`.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::Dimension`] if `x` has the wrong length.
    fn c(&self, x: &Array1<f64>) -> Result<Array1<f64>, EvalError>;
}
