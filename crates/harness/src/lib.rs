//! Scoring harness for optbench.
//!
//! The harness grades an optimizer on each variant of a project by running a
//! fixed number of seeded trials:
//!
//! 1. Instantiate a fresh problem, seed a [`StdRng`] with the trial index, and
//!    draw `x0` from the problem's sampler.
//! 2. Call the optimizer with a counted [`Oracle`], `x0`, the budget, the
//!    problem name, and the trial generator.
//! 3. If the weighted count went over budget, the variant fails with
//!    [`Verdict::CountExceeded`] and scoring stops.
//! 4. Reset the counter and evaluate the returned point once more.
//! 5. Compare against the [`RandomSearch`] baseline (unconstrained) or check
//!    feasibility (constrained).
//!
//! A variant passes when the optimizer beats the baseline on more than 55% of
//! seeds, or returns a feasible point on at least 95% of them.
//!
//! # Observer Events
//!
//! Scoring emits one [`Event::Started`], then one [`Event::Trial`] per scored
//! trial in seed order, an [`Event::CountExceeded`] if the budget is broken,
//! and a final [`Event::Finished`]. Observers can return
//! [`Action::StopEarly`] to end the variant with [`Verdict::Stopped`].
//!
//! [`StdRng`]: rand::rngs::StdRng
//! [`Oracle`]: optbench_core::Oracle

mod action;
mod baseline;
mod config;
mod error;
mod event;
mod optimizer;
mod report;
mod score;
mod submission;
mod suite;
mod trial;

pub use action::Action;
pub use baseline::{BaselineError, RandomSearch};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use optimizer::{ConstrainedOptimizer, Optimizer};
pub use report::{Project, Report, Verdict};
pub use score::{score_constrained, score_unconstrained, trial_rng};
pub use submission::Submission;
pub use suite::{SuiteResult, constrained_suite, unconstrained_suite};
pub use trial::{TrialOutcome, TrialResult};
