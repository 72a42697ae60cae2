//! Reusable observers for the optbench scoring harness.
//!
//! This crate provides [`Observer`] implementations and capability traits for
//! watching a scoring run.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for generic observers
//!   ([`HasSeed`], [`HasProblem`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`ConsoleObserver`]: prints the `Testing on ...` banner and report lines
//! - [`LogObserver`]: logs trials and count overruns through `log`
//! - [`Tee`]: fans events out to two observers
//!
//! # Features
//!
//! - `progress`: Enables [`ProgressObserver`], an `indicatif` progress bar
//!   per variant.
//!
//! [`Observer`]: optbench_core::Observer
//! [`HasSeed`]: traits::HasSeed
//! [`HasProblem`]: traits::HasProblem
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod console;
mod log_observer;
mod tee;

#[cfg(feature = "progress")]
mod progress;

pub use console::ConsoleObserver;
pub use log_observer::LogObserver;
pub use tee::Tee;

#[cfg(feature = "progress")]
pub use progress::ProgressObserver;
