use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use optbench_core::Observer;
use optbench_harness::{Action, Event};

const TEMPLATE: &str = "{prefix:>8} {wide_bar} {pos:>4}/{len:4} [{elapsed_precise}<{eta_precise}]";

/// Shows a progress bar for each variant being scored.
///
/// The bar is drawn to stderr and hidden when stderr is not a terminal.
#[derive(Debug, Default)]
pub struct ProgressObserver {
    bar: Option<ProgressBar>,
}

impl ProgressObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn start(problem: &str, trials: usize) -> ProgressBar {
        if !std::io::stderr().is_terminal() {
            return ProgressBar::hidden();
        }

        let bar = ProgressBar::new(trials as u64);
        bar.set_draw_target(ProgressDrawTarget::stderr_with_hz(10));
        bar.set_style(
            ProgressStyle::with_template(TEMPLATE).unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar.set_prefix(problem.to_owned());
        bar
    }
}

impl Observer<Event<'_>, Action> for ProgressObserver {
    fn observe(&mut self, event: &Event<'_>) -> Option<Action> {
        match event {
            Event::Started { problem, trials } => {
                self.bar = Some(Self::start(problem, *trials));
            }
            Event::Trial { .. } => {
                if let Some(bar) = &self.bar {
                    bar.inc(1);
                }
            }
            Event::CountExceeded { .. } => {
                if let Some(bar) = self.bar.take() {
                    bar.abandon();
                }
            }
            Event::Finished { .. } => {
                if let Some(bar) = self.bar.take() {
                    bar.finish_and_clear();
                }
            }
        }
        None
    }
}
