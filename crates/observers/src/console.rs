use std::io::{self, Write};

use optbench_core::Observer;
use optbench_harness::{Action, Event};

/// Prints the course harness output.
///
/// Writes `Testing on <name>...` when a variant starts and the report line
/// when it finishes. Write errors are logged at `warn` and scoring continues.
#[derive(Debug)]
pub struct ConsoleObserver<W = io::Stdout> {
    out: W,
}

impl ConsoleObserver {
    /// Creates an observer that prints to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for ConsoleObserver {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write> ConsoleObserver<W> {
    /// Creates an observer that prints to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the observer and returns its writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Observer<Event<'_>, Action> for ConsoleObserver<W> {
    fn observe(&mut self, event: &Event<'_>) -> Option<Action> {
        let written = match event {
            Event::Started { problem, .. } => writeln!(self.out, "Testing on {problem}..."),
            Event::Finished { report } => writeln!(self.out, "{report}"),
            Event::Trial { .. } | Event::CountExceeded { .. } => Ok(()),
        };
        if let Err(error) = written {
            log::warn!("{}: console output failed: {error}", event.problem());
        }
        None
    }
}
