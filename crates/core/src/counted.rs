use std::cell::Cell;

use ndarray::Array1;

use crate::{
    Budget, ConstrainedOptimizationProblem, ConstrainedOracle, EvalError, EvalKind,
    OptimizationProblem, Oracle, Tally,
};

/// Wraps a problem and charges every evaluation against a weighted counter.
///
/// Each call validates the input length, adds its [`EvalKind::cost`] to the
/// counter, then delegates to the wrapped problem. A rejected call is not
/// charged. The counter is never enforced here: optimizers may overspend, and
/// the harness checks [`exceeded`](Self::exceeded) after the trial.
///
/// Evaluation goes through the [`Oracle`] and [`ConstrainedOracle`] traits.
#[derive(Debug)]
pub struct Counted<P> {
    problem: P,
    budget: Budget,
    tally: Cell<Tally>,
}

impl<P: OptimizationProblem> Counted<P> {
    /// Wraps `problem` with a zeroed counter and the problem's own budget.
    pub fn new(problem: P) -> Self {
        let budget = Budget::Limited(problem.budget());
        Self {
            problem,
            budget,
            tally: Cell::new(Tally::default()),
        }
    }

    /// Returns the wrapped problem.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Returns the budget the counter is checked against.
    pub fn budget(&self) -> Budget {
        self.budget
    }

    /// Removes the budget, useful for plotting or debugging.
    pub fn no_limit(&mut self) {
        self.budget = Budget::Unlimited;
    }

    /// Returns the per-kind call counts.
    pub fn tally(&self) -> Tally {
        self.tally.get()
    }

    /// Zeroes the counter.
    pub fn reset(&mut self) {
        self.tally.set(Tally::default());
    }

    /// Returns `true` if the weighted count is over budget.
    pub fn exceeded(&self) -> bool {
        self.budget.is_exceeded_by(self.count())
    }

    fn check(&self, x: &Array1<f64>) -> Result<(), EvalError> {
        let expected = self.problem.xdim();
        if x.len() == expected {
            Ok(())
        } else {
            Err(EvalError::Dimension {
                expected,
                found: x.len(),
            })
        }
    }

    fn charge(&self, kind: EvalKind) {
        let mut tally = self.tally.get();
        tally.record(kind);
        self.tally.set(tally);
    }
}

impl<P: OptimizationProblem> Oracle for Counted<P> {
    fn f(&self, x: &Array1<f64>) -> Result<f64, EvalError> {
        self.check(x)?;
        self.charge(EvalKind::Objective);
        Ok(self.problem.objective(x.view()))
    }

    fn g(&self, x: &Array1<f64>) -> Result<Array1<f64>, EvalError> {
        self.check(x)?;
        self.charge(EvalKind::Gradient);
        Ok(self.problem.gradient(x.view()))
    }

    fn count(&self) -> usize {
        self.tally.get().weighted()
    }
}

impl<P: ConstrainedOptimizationProblem> ConstrainedOracle for Counted<P> {
    fn c(&self, x: &Array1<f64>) -> Result<Array1<f64>, EvalError> {
        self.check(x)?;
        self.charge(EvalKind::Constraint);
        Ok(self.problem.constraints(x.view()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::{ArrayView1, array};

    /// `f(x) = x₁ + x₂` subject to `x₁ - 1 <= 0`.
    struct Plane;

    impl OptimizationProblem for Plane {
        fn name(&self) -> &'static str {
            "plane"
        }

        fn xdim(&self) -> usize {
            2
        }

        fn budget(&self) -> usize {
            5
        }

        fn objective(&self, x: ArrayView1<'_, f64>) -> f64 {
            x[0] + x[1]
        }

        fn gradient(&self, _x: ArrayView1<'_, f64>) -> Array1<f64> {
            array![1.0, 1.0]
        }
    }

    impl ConstrainedOptimizationProblem for Plane {
        fn cdim(&self) -> usize {
            1
        }

        fn constraints(&self, x: ArrayView1<'_, f64>) -> Array1<f64> {
            array![x[0] - 1.0]
        }
    }

    #[test]
    fn count_is_weighted_sum_of_calls() {
        let counted = Counted::new(Plane);
        let x = array![0.5, 0.5];

        let (k, m, c) = (4, 3, 2);
        for _ in 0..k {
            counted.f(&x).unwrap();
        }
        for _ in 0..m {
            counted.g(&x).unwrap();
        }
        for _ in 0..c {
            counted.c(&x).unwrap();
        }

        assert_eq!(counted.count(), k + 2 * m + c);
        assert_eq!(
            counted.tally(),
            Tally {
                objective: k,
                gradient: m,
                constraint: c,
            }
        );
    }

    #[test]
    fn delegates_to_problem() {
        let counted = Counted::new(Plane);
        let x = array![2.0, 3.0];

        assert_relative_eq!(counted.f(&x).unwrap(), 5.0);
        assert_eq!(counted.g(&x).unwrap(), array![1.0, 1.0]);
        assert_eq!(counted.c(&x).unwrap(), array![1.0]);
    }

    #[test]
    fn wrong_dimension_is_rejected_and_not_charged() {
        let counted = Counted::new(Plane);
        let x = array![1.0, 2.0, 3.0];

        let expected = EvalError::Dimension {
            expected: 2,
            found: 3,
        };
        assert_eq!(counted.f(&x), Err(expected));
        assert_eq!(counted.g(&x), Err(expected));
        assert_eq!(counted.c(&x), Err(expected));
        assert_eq!(counted.count(), 0);
    }

    #[test]
    fn exceeded_only_when_over_budget() {
        let counted = Counted::new(Plane);
        let x = array![0.0, 0.0];

        counted.g(&x).unwrap();
        counted.g(&x).unwrap();
        counted.f(&x).unwrap();
        assert_eq!(counted.count(), 5);
        assert!(!counted.exceeded());

        counted.c(&x).unwrap();
        assert!(counted.exceeded());
    }

    #[test]
    fn reset_zeroes_counter() {
        let mut counted = Counted::new(Plane);
        counted.g(&array![0.0, 0.0]).unwrap();
        counted.reset();
        assert_eq!(counted.count(), 0);
        assert_eq!(counted.tally(), Tally::default());
    }

    #[test]
    fn no_limit_disables_budget() {
        let mut counted = Counted::new(Plane);
        assert_eq!(counted.budget(), Budget::Limited(5));

        counted.no_limit();
        for _ in 0..100 {
            counted.g(&array![0.0, 0.0]).unwrap();
        }

        assert_eq!(counted.budget(), Budget::Unlimited);
        assert_eq!(counted.count(), 200);
        assert!(!counted.exceeded());
    }

    #[test]
    fn usable_as_trait_object() {
        let counted = Counted::new(Plane);
        let oracle: &dyn ConstrainedOracle = &counted;
        let x = array![0.0, 1.0];

        oracle.f(&x).unwrap();
        oracle.c(&x).unwrap();

        assert_eq!(oracle.count(), 2);
    }
}
