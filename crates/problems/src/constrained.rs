//! The constrained project: three small problems scored on feasibility.
//!
//! | name      | objective              | constraints | xdim | budget |
//! |-----------|------------------------|-------------|------|--------|
//! | `simple1` | `-x₁x₂ + 2/(3√3)`      | 2           | 2    | 2000   |
//! | `simple2` | Rosenbrock             | 2           | 2    | 2000   |
//! | `simple3` | `x₁ - 2x₂ + x₃ + √6`   | 1           | 3    | 2000   |
//!
//! Constraint and objective calls share one budget; none of the variants set
//! a separate constraint bound.

mod simple1;
mod simple2;
mod simple3;

pub use simple1::Simple1;
pub use simple2::Simple2;
pub use simple3::Simple3;

/// Weighted evaluations allowed per trial for every constrained variant.
const BUDGET: usize = 2000;
