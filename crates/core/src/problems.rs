pub mod constrained;
pub mod unconstrained;

pub use constrained::{ConstrainedOptimizationProblem, is_feasible};
pub use unconstrained::OptimizationProblem;
