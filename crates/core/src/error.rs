use thiserror::Error;

/// Errors that can occur when evaluating a counted problem.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// The point does not have the problem's dimension.
    #[error("expected a point with {expected} components, got {found}")]
    Dimension { expected: usize, found: usize },
}
