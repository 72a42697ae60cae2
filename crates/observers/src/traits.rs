//! Capability traits for generic observers.
//!
//! These traits abstract over harness event and action types, so observers
//! can be written once against the capabilities they need.
//!
//! # Event traits
//!
//! - [`HasSeed`]: events tied to a trial seed
//! - [`HasProblem`]: events tied to a problem variant
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use optbench_core::Observer;
//! use optbench_observers::traits::{CanStopEarly, HasSeed};
//!
//! /// Stops scoring once `last` has been seen.
//! struct StopAfterSeed {
//!     last: u64,
//! }
//!
//! impl<E: HasSeed, A: CanStopEarly> Observer<E, A> for StopAfterSeed {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         match event.seed() {
//!             Some(seed) if seed >= self.last => Some(A::stop_early()),
//!             _ => None,
//!         }
//!     }
//! }
//! ```

use optbench_harness::{Action, Event};

/// An event that may be tied to a trial seed.
pub trait HasSeed {
    /// Returns the seed of the trial this event reports, if any.
    fn seed(&self) -> Option<u64>;
}

/// An event tied to a problem variant.
pub trait HasProblem {
    /// Returns the name of the problem being scored.
    fn problem(&self) -> &'static str;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops scoring early.
    fn stop_early() -> Self;
}

impl HasSeed for Event<'_> {
    fn seed(&self) -> Option<u64> {
        match self {
            Event::Trial { result, .. } | Event::CountExceeded { result, .. } => Some(result.seed),
            Event::Started { .. } | Event::Finished { .. } => None,
        }
    }
}

impl HasProblem for Event<'_> {
    fn problem(&self) -> &'static str {
        Event::problem(self)
    }
}

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
