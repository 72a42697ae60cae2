//! `optbench` grades optimizers on the course problems.
//!
//! Report lines go to stdout. Diagnostics go through `log`; set `RUST_LOG`
//! to `debug` to see every trial.

mod args;
mod config_file;
mod gradients;
mod probe;

use anyhow::bail;
use clap::Parser;
use optbench_core::Observer;
use optbench_harness::{
    Action, Config, Event, RandomSearch, Submission, SuiteResult, constrained_suite,
    unconstrained_suite,
};
use optbench_observers::{ConsoleObserver, LogObserver, Tee};

use crate::args::{Cli, Command, OptimizerChoice, ScoreArgs};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Unconstrained(args) => {
            let config = config_file::resolve(&args)?;
            let results = match args.optimizer {
                OptimizerChoice::Stub => unconstrained_suite(&Submission, &config, observer()),
                OptimizerChoice::RandomSearch => {
                    unconstrained_suite(&RandomSearch, &config, observer())
                }
            };
            summarize(results);
        }
        Command::Constrained(args) => {
            let config = constrained_config(&args)?;
            summarize(constrained_suite(&Submission, &config, observer()));
        }
        Command::Probe(args) => probe::run(&args)?,
        Command::CheckGradients(args) => gradients::run(&args),
    }

    Ok(())
}

fn constrained_config(args: &ScoreArgs) -> anyhow::Result<Config> {
    if args.optimizer == OptimizerChoice::RandomSearch {
        bail!("random search has no constrained form; use --optimizer stub");
    }
    config_file::resolve(args)
}

#[cfg(feature = "progress")]
fn observer() -> impl for<'a> Observer<Event<'a>, Action> {
    use optbench_observers::ProgressObserver;

    Tee::new(
        Tee::new(ConsoleObserver::stdout(), LogObserver),
        ProgressObserver::new(),
    )
}

#[cfg(not(feature = "progress"))]
fn observer() -> impl for<'a> Observer<Event<'a>, Action> {
    Tee::new(ConsoleObserver::stdout(), LogObserver)
}

/// Logs variants that could not be scored. Failing reports are already
/// printed by the console observer and do not change the exit code.
fn summarize(results: Vec<SuiteResult>) {
    for (name, result) in results {
        if let Err(error) = result {
            log::error!("{name} could not be scored: {:#}", anyhow::Error::from(error));
        }
    }
}
