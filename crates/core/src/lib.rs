//! Core traits and types for optbench.
//!
//! This crate defines the shared abstractions that benchmark problems, the
//! scoring harness, and observers build on:
//!
//! - [`OptimizationProblem`], [`ConstrainedOptimizationProblem`]: analytic
//!   objective, gradient, and constraint definitions with a start sampler and
//!   an evaluation budget
//! - [`Counted`]: wraps a problem and charges every call against a weighted
//!   counter (objective: 1, gradient: 2, constraint: 1)
//! - [`Oracle`], [`ConstrainedOracle`]: the counted view handed to optimizers
//! - [`Observer`]: receives harness events and optionally returns control actions

mod budget;
mod counted;
mod error;
mod observer;
mod oracle;
mod problems;

pub mod finite_difference;

pub use budget::{Budget, EvalKind, Tally};
pub use counted::Counted;
pub use error::EvalError;
pub use observer::Observer;
pub use oracle::{ConstrainedOracle, Oracle};
pub use problems::{ConstrainedOptimizationProblem, OptimizationProblem, is_feasible};
