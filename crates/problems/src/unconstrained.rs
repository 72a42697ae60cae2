//! The unconstrained project: three classic test functions.
//!
//! | name      | function   | xdim | budget |
//! |-----------|------------|------|--------|
//! | `simple1` | Rosenbrock | 2    | 20     |
//! | `simple2` | Himmelblau | 2    | 40     |
//! | `simple3` | Powell     | 4    | 100    |
//!
//! Starts are standard normal draws clipped to `[-3, 3]`.

mod himmelblau;
mod powell;
mod rosenbrock;

pub use himmelblau::Himmelblau;
pub use powell::Powell;
pub use rosenbrock::Rosenbrock;

pub(crate) use rosenbrock::{rosenbrock, rosenbrock_gradient};

/// Bound applied to every component of an unconstrained start.
const START_CLIP: f64 = 3.0;
