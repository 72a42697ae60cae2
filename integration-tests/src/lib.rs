//! Optimizers shared by the end-to-end tests.

use std::convert::Infallible;

use ndarray::{Array1, array};
use optbench_core::{ConstrainedOracle, Oracle, is_feasible};
use optbench_harness::{ConstrainedOptimizer, Optimizer};
use rand::rngs::StdRng;

/// Maximum number of halvings in [`FeasibilityRestoration`].
const MAX_HALVINGS: usize = 60;

/// Returns the known minimizer of each unconstrained variant by name.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnownMinimum;

impl Optimizer for KnownMinimum {
    type Error = Infallible;

    fn optimize(
        &self,
        _oracle: &dyn Oracle,
        x0: &Array1<f64>,
        _n: usize,
        prob: &str,
        _rng: &mut StdRng,
    ) -> Result<Array1<f64>, Self::Error> {
        Ok(match prob {
            "simple1" => array![1.0, 1.0],
            "simple2" => array![3.0, 2.0],
            _ => Array1::zeros(x0.len()),
        })
    }
}

/// Pulls `x0` toward a strictly feasible anchor until the constraints hold.
///
/// Tries `anchor + t·(x0 - anchor)` for `t = 1, ½, ¼, ...`, spending one
/// constraint evaluation per try.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeasibilityRestoration;

impl FeasibilityRestoration {
    fn anchor(prob: &str, dim: usize) -> Array1<f64> {
        match prob {
            "simple1" => array![0.25, 0.25],
            "simple2" => array![0.0, 0.5],
            _ => Array1::zeros(dim),
        }
    }
}

impl ConstrainedOptimizer for FeasibilityRestoration {
    type Error = optbench_core::EvalError;

    fn optimize(
        &self,
        oracle: &dyn ConstrainedOracle,
        x0: &Array1<f64>,
        _n: usize,
        prob: &str,
        _rng: &mut StdRng,
    ) -> Result<Array1<f64>, Self::Error> {
        let anchor = Self::anchor(prob, x0.len());
        let direction = x0 - &anchor;

        let mut t = 1.0;
        for _ in 0..MAX_HALVINGS {
            let x = &anchor + &(&direction * t);
            if is_feasible(oracle.c(&x)?.view()) {
                return Ok(x);
            }
            t *= 0.5;
        }
        Ok(anchor)
    }
}
