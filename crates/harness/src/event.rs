use crate::{Report, TrialResult};

/// Events emitted while a variant is scored.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    /// Scoring of `problem` is about to run `trials` seeds.
    Started { problem: &'static str, trials: usize },

    /// A trial finished within budget and was scored.
    Trial {
        problem: &'static str,
        result: &'a TrialResult,
    },

    /// A trial went over budget; scoring of the variant stops after this.
    CountExceeded {
        problem: &'static str,
        result: &'a TrialResult,
    },

    /// Scoring finished with `report`.
    ///
    /// Actions returned for this event are ignored.
    Finished { report: &'a Report },
}

impl Event<'_> {
    /// Returns the name of the problem being scored.
    #[must_use]
    pub fn problem(&self) -> &'static str {
        match self {
            Self::Started { problem, .. }
            | Self::Trial { problem, .. }
            | Self::CountExceeded { problem, .. } => problem,
            Self::Finished { report } => report.problem,
        }
    }
}
