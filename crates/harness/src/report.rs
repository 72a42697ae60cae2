use std::fmt;

/// Which course project a report belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Project {
    Unconstrained,
    Constrained,
}

/// How scoring of a variant ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,

    /// The optimizer went over budget on `seed`; later seeds were not run.
    CountExceeded {
        seed: u64,
        count: usize,
        budget: usize,
    },

    /// An observer stopped scoring early.
    Stopped,
}

/// Summary of scoring one problem variant.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub problem: &'static str,
    pub project: Project,

    /// Number of trials scored (within budget).
    pub trials: usize,

    /// Trials that beat the baseline or returned a feasible point.
    pub successes: usize,

    /// Trials whose returned point evaluated to `NaN`.
    pub nan_count: usize,

    pub verdict: Verdict,
}

impl Report {
    /// Returns `true` if the variant passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.verdict == Verdict::Pass
    }

    /// Returns the fraction of scored trials that succeeded, or zero if none
    /// were scored.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn success_fraction(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.successes as f64 / self.trials as f64
        }
    }
}

/// Renders the one-line course verdict.
///
/// The unconstrained fail line reads `Fail: optimize does better than random
/// search on <name> only <pct> pct of the time.`, which mirrors the pass line.
/// The course harness printed `Fail: optimize is only random search on ...`
/// for the same outcome.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.problem;
        let pct = 100.0 * self.success_fraction();
        match (self.verdict, self.project) {
            (Verdict::CountExceeded { .. }, _) => write!(f, "Failed {name}. Count exceeded."),
            (Verdict::Stopped, _) => {
                write!(f, "Stopped {name} after {} trials.", self.trials)
            }
            (Verdict::Pass, Project::Unconstrained) => write!(
                f,
                "Pass: optimize does better than random search on {name} {pct:.3} pct of the time."
            ),
            (Verdict::Fail, Project::Unconstrained) => write!(
                f,
                "Fail: optimize does better than random search on {name} only {pct:.3} pct of the time."
            ),
            (Verdict::Pass, Project::Constrained) => write!(
                f,
                "Pass: optimize returns a feasible solution on {}/{} random seeds.",
                self.successes, self.trials
            ),
            (Verdict::Fail, Project::Constrained) => write!(
                f,
                "Fail: optimize returns a feasible solution on {}/{} random seeds.",
                self.successes, self.trials
            ),
        }
    }
}
