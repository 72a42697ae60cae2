use thiserror::Error;

/// Trials per variant used by the course rubric.
const RUBRIC_TRIALS: usize = 500;

/// Fraction of seeds an optimizer must beat random search on (strictly more).
const RUBRIC_WIN_FRACTION: f64 = 0.55;

/// Fraction of seeds that must yield a feasible point (at least).
const RUBRIC_FEASIBLE_FRACTION: f64 = 0.95;

/// Configuration for a scoring run.
///
/// The default reproduces the course rubric: 500 trials, a 55% win threshold
/// against random search, and a 95% feasibility threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    trials: usize,
    win_fraction: f64,
    feasible_fraction: f64,
    parallel: bool,
}

/// Errors that can occur when validating a scoring config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("trials must be at least 1")]
    Trials,

    #[error("win_fraction must be finite and within [0, 1]")]
    WinFraction,

    #[error("feasible_fraction must be finite and within [0, 1]")]
    FeasibleFraction,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trials: RUBRIC_TRIALS,
            win_fraction: RUBRIC_WIN_FRACTION,
            feasible_fraction: RUBRIC_FEASIBLE_FRACTION,
            parallel: false,
        }
    }
}

impl Config {
    /// Creates a new sequential config with validated thresholds.
    ///
    /// # Errors
    ///
    /// Returns an error if `trials` is zero or a fraction is outside `[0, 1]`.
    pub fn new(
        trials: usize,
        win_fraction: f64,
        feasible_fraction: f64,
    ) -> Result<Self, ConfigError> {
        if trials == 0 {
            return Err(ConfigError::Trials);
        }
        if !is_fraction(win_fraction) {
            return Err(ConfigError::WinFraction);
        }
        if !is_fraction(feasible_fraction) {
            return Err(ConfigError::FeasibleFraction);
        }

        Ok(Self {
            trials,
            win_fraction,
            feasible_fraction,
            parallel: false,
        })
    }

    /// Returns a copy that runs trials on the rayon thread pool.
    ///
    /// Reports are identical either way; trials are reported in seed order.
    #[must_use]
    pub fn with_parallel(self, parallel: bool) -> Self {
        Self { parallel, ..self }
    }

    /// Returns the number of trials per variant (seeds `0..trials`).
    #[must_use]
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Returns the win fraction an unconstrained variant must exceed.
    #[must_use]
    pub fn win_fraction(&self) -> f64 {
        self.win_fraction
    }

    /// Returns the feasible fraction a constrained variant must reach.
    #[must_use]
    pub fn feasible_fraction(&self) -> f64 {
        self.feasible_fraction
    }

    /// Returns `true` if trials run in parallel.
    #[must_use]
    pub fn parallel(&self) -> bool {
        self.parallel
    }
}

fn is_fraction(value: f64) -> bool {
    value.is_finite() && (0.0..=1.0).contains(&value)
}
