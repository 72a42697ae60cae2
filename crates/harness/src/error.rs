use std::error::Error as StdError;

use optbench_core::EvalError;
use thiserror::Error;

use crate::BaselineError;

/// Errors that end scoring of a variant.
///
/// A count overrun is not an error; it is reported as
/// [`Verdict::CountExceeded`](crate::Verdict::CountExceeded).
#[derive(Debug, Error)]
pub enum Error {
    /// The optimizer under test returned an error.
    #[error("optimizer failed on {problem} (seed {seed})")]
    Optimizer {
        problem: &'static str,
        seed: u64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The point returned by the optimizer could not be evaluated.
    #[error("optimizer returned an unusable point on {problem} (seed {seed})")]
    Evaluation {
        problem: &'static str,
        seed: u64,
        #[source]
        source: EvalError,
    },

    /// The random search baseline failed.
    #[error("random search baseline failed on {problem} (seed {seed})")]
    Baseline {
        problem: &'static str,
        seed: u64,
        #[source]
        source: BaselineError,
    },
}

impl Error {
    pub(crate) fn optimizer<E>(problem: &'static str, seed: u64, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Optimizer {
            problem,
            seed,
            source: Box::new(source),
        }
    }

    /// Returns the seed of the trial that failed.
    #[must_use]
    pub fn seed(&self) -> u64 {
        match self {
            Self::Optimizer { seed, .. }
            | Self::Evaluation { seed, .. }
            | Self::Baseline { seed, .. } => *seed,
        }
    }
}
