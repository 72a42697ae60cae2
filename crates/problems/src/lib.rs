//! Analytic benchmark problems for optbench.
//!
//! Two projects are defined, each with three variants named `simple1`,
//! `simple2`, and `simple3`:
//!
//! - [`unconstrained`]: Rosenbrock, Himmelblau, and Powell, scored against
//!   random search
//! - [`constrained`]: three small constrained problems, scored on feasibility
//!
//! Every variant is a unit struct implementing
//! [`OptimizationProblem`](optbench_core::OptimizationProblem) (and
//! [`ConstrainedOptimizationProblem`](optbench_core::ConstrainedOptimizationProblem)
//! for the constrained project), so a fresh instance per trial is just
//! `P::default()`.

pub mod constrained;
pub mod sampling;
pub mod unconstrained;

#[cfg(test)]
mod test_utils;
