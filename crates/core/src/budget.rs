use std::fmt;

/// The kind of evaluation an optimizer requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvalKind {
    /// An objective evaluation, `f(x)`.
    Objective,

    /// A gradient evaluation, `∇f(x)`.
    Gradient,

    /// A constraint evaluation, `c(x)`.
    Constraint,
}

impl EvalKind {
    /// Returns the number of budget units charged for one call.
    #[must_use]
    pub const fn cost(self) -> usize {
        match self {
            Self::Objective | Self::Constraint => 1,
            Self::Gradient => 2,
        }
    }
}

/// The number of weighted evaluations a trial may spend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Budget {
    /// At most this many weighted evaluations.
    Limited(usize),

    /// No limit, for debugging or plotting outside scored runs.
    Unlimited,
}

impl Budget {
    /// Returns `true` if `count` exceeds this budget.
    #[must_use]
    pub fn is_exceeded_by(self, count: usize) -> bool {
        match self {
            Self::Limited(n) => count > n,
            Self::Unlimited => false,
        }
    }

    /// Returns the limit, or `None` if unlimited.
    #[must_use]
    pub fn limit(self) -> Option<usize> {
        match self {
            Self::Limited(n) => Some(n),
            Self::Unlimited => None,
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Limited(n) => write!(f, "{n}"),
            Self::Unlimited => f.write_str("inf"),
        }
    }
}

/// Per-kind call counts behind the weighted evaluation counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub objective: usize,
    pub gradient: usize,
    pub constraint: usize,
}

impl Tally {
    /// Records one call of the given kind.
    pub fn record(&mut self, kind: EvalKind) {
        match kind {
            EvalKind::Objective => self.objective += 1,
            EvalKind::Gradient => self.gradient += 1,
            EvalKind::Constraint => self.constraint += 1,
        }
    }

    /// Returns the weighted total, `objective + 2 * gradient + constraint`.
    #[must_use]
    pub fn weighted(&self) -> usize {
        self.objective * EvalKind::Objective.cost()
            + self.gradient * EvalKind::Gradient.cost()
            + self.constraint * EvalKind::Constraint.cost()
    }
}
