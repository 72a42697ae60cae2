use ndarray::Array1;
use optbench_core::Tally;

/// The result of one seeded trial.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialResult {
    /// Seed used for the trial's generator.
    pub seed: u64,

    /// Point returned by the optimizer.
    pub x: Array1<f64>,

    /// Weighted evaluation count spent by the optimizer.
    pub count: usize,

    /// Per-kind breakdown of `count`.
    pub tally: Tally,

    /// Weighted budget the optimizer was given.
    pub budget: usize,

    pub outcome: TrialOutcome,
}

/// How a trial was scored.
#[derive(Debug, Clone, PartialEq)]
pub enum TrialOutcome {
    /// The optimizer went over budget; the returned point was not scored.
    CountExceeded,

    /// Unconstrained trial: objective at the returned point and at the
    /// random search baseline for the same seed.
    Compared { value: f64, baseline: f64 },

    /// Constrained trial: constraint values at the returned point.
    Feasibility {
        constraints: Array1<f64>,
        feasible: bool,
    },
}

impl TrialResult {
    /// Returns `true` if the trial counts toward passing.
    ///
    /// Unconstrained trials win when the value is strictly below the
    /// baseline, with `NaN` values treated as `+∞`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        match &self.outcome {
            TrialOutcome::CountExceeded => false,
            TrialOutcome::Compared { value, baseline } => *baseline > nan_to_inf(*value),
            TrialOutcome::Feasibility { feasible, .. } => *feasible,
        }
    }

    /// Returns `true` if the optimizer's point evaluated to `NaN`.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        matches!(self.outcome, TrialOutcome::Compared { value, .. } if value.is_nan())
    }
}

fn nan_to_inf(value: f64) -> f64 {
    if value.is_nan() { f64::INFINITY } else { value }
}
