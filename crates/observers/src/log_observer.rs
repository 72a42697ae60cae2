use optbench_core::Observer;
use optbench_harness::{Action, Event, TrialOutcome};

/// Logs scoring progress through the `log` facade.
///
/// Trials and finished reports go to `debug`, count overruns to `warn`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl Observer<Event<'_>, Action> for LogObserver {
    fn observe(&mut self, event: &Event<'_>) -> Option<Action> {
        match event {
            Event::Started { problem, trials } => {
                log::debug!("{problem}: starting {trials} trials");
            }
            Event::Trial { problem, result } => match &result.outcome {
                TrialOutcome::Compared { value, baseline } => log::debug!(
                    "{problem} seed {}: f = {value:e} vs baseline {baseline:e} ({}/{} evals)",
                    result.seed,
                    result.count,
                    result.budget,
                ),
                TrialOutcome::Feasibility {
                    constraints,
                    feasible,
                } => log::debug!(
                    "{problem} seed {}: c = {constraints}, feasible = {feasible} ({}/{} evals)",
                    result.seed,
                    result.count,
                    result.budget,
                ),
                TrialOutcome::CountExceeded => {}
            },
            Event::CountExceeded { problem, result } => log::warn!(
                "{problem} seed {}: count {} exceeded budget {} ({} f, {} g, {} c)",
                result.seed,
                result.count,
                result.budget,
                result.tally.objective,
                result.tally.gradient,
                result.tally.constraint,
            ),
            Event::Finished { report } => log::debug!("{report}"),
        }
        None
    }
}
