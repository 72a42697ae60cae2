use ndarray::Array1;
use optbench_core::{EvalError, Oracle};
use rand::rngs::StdRng;
use rand_distr::{Distribution, StandardNormal};
use thiserror::Error;

use crate::Optimizer;

/// The random search baseline every unconstrained optimizer is compared to.
///
/// Draws `n` points `x0 + N(0, I)` and returns the one with the lowest
/// objective, keeping the earliest on ties. A `NaN` objective is only kept
/// when no finite value has been seen.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSearch;

/// Errors that can occur during random search.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BaselineError {
    #[error("random search needs a budget of at least one evaluation")]
    EmptyBudget,

    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Optimizer for RandomSearch {
    type Error = BaselineError;

    fn optimize(
        &self,
        oracle: &dyn Oracle,
        x0: &Array1<f64>,
        n: usize,
        _prob: &str,
        rng: &mut StdRng,
    ) -> Result<Array1<f64>, Self::Error> {
        if n == 0 {
            return Err(BaselineError::EmptyBudget);
        }

        let mut best_x = perturb(x0, rng);
        let mut best_f = oracle.f(&best_x)?;

        for _ in 1..n {
            let x = perturb(x0, rng);
            let fx = oracle.f(&x)?;
            if improves(fx, best_f) {
                best_x = x;
                best_f = fx;
            }
        }

        Ok(best_x)
    }
}

fn perturb(x0: &Array1<f64>, rng: &mut StdRng) -> Array1<f64> {
    let noise: Array1<f64> = Array1::from_shape_fn(x0.len(), |_| StandardNormal.sample(rng));
    x0 + &noise
}

fn improves(candidate: f64, incumbent: f64) -> bool {
    candidate < incumbent || (incumbent.is_nan() && !candidate.is_nan())
}
