mod driver;


use std::ops::ControlFlow;

use optbench_core::{
    ConstrainedOptimizationProblem, ConstrainedOracle, Counted, Observer, OptimizationProblem,
    Oracle, is_feasible,
};
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    Action, BaselineError, Config, ConstrainedOptimizer, Error, Event, Optimizer, Project,
    RandomSearch, Report, TrialOutcome, TrialResult, Verdict,
};

/// Returns the generator for trial `seed`.
///
/// Both the optimizer's trial and the baseline's trial start from this.
#[must_use]
pub fn trial_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Scores an unconstrained optimizer on problem `P`.
///
/// # Errors
///
/// Returns an error if the optimizer or the baseline fails, or if the
/// optimizer returns a point of the wrong dimension.
pub fn score_unconstrained<P, O, Obs>(
    optimizer: &O,
    config: &Config,
    observer: Obs,
) -> Result<Report, Error>
where
    P: OptimizationProblem + Default,
    O: Optimizer + Sync,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    score::<P, _, _>(Project::Unconstrained, config, observer, |seed| {
        unconstrained_trial::<P, O>(optimizer, seed)
    })
}

/// Scores a constrained optimizer on problem `P`.
///
/// # Errors
///
/// Returns an error if the optimizer fails or returns a point of the wrong
/// dimension.
pub fn score_constrained<P, O, Obs>(
    optimizer: &O,
    config: &Config,
    observer: Obs,
) -> Result<Report, Error>
where
    P: ConstrainedOptimizationProblem + Default,
    O: ConstrainedOptimizer + Sync,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    score::<P, _, _>(Project::Constrained, config, observer, |seed| {
        constrained_trial::<P, O>(optimizer, seed)
    })
}

/// Runs every trial and folds the results into a report.
fn score<P, Obs, F>(
    project: Project,
    config: &Config,
    mut observer: Obs,
    trial: F,
) -> Result<Report, Error>
where
    P: OptimizationProblem + Default,
    Obs: for<'a> Observer<Event<'a>, Action>,
    F: Fn(u64) -> Result<TrialResult, Error> + Sync,
{
    let problem = P::default().name();
    log::debug!("scoring {problem} over {} trials", config.trials());

    let mut report = Report {
        problem,
        project,
        trials: 0,
        successes: 0,
        nan_count: 0,
        verdict: Verdict::Stopped,
    };

    let started = Event::Started {
        problem,
        trials: config.trials(),
    };
    if let Some(Action::StopEarly) = observer.observe(&started) {
        observer.observe(&Event::Finished { report: &report });
        return Ok(report);
    }

    let flow = driver::drive(config, trial, |result| {
        if matches!(result.outcome, TrialOutcome::CountExceeded) {
            observer.observe(&Event::CountExceeded {
                problem,
                result: &result,
            });
            return ControlFlow::Break(Verdict::CountExceeded {
                seed: result.seed,
                count: result.count,
                budget: result.budget,
            });
        }

        report.trials += 1;
        report.successes += usize::from(result.is_success());
        report.nan_count += usize::from(result.is_nan());

        match observer.observe(&Event::Trial {
            problem,
            result: &result,
        }) {
            Some(Action::StopEarly) => ControlFlow::Break(Verdict::Stopped),
            None => ControlFlow::Continue(()),
        }
    });
    warn_on_nan(&report);

    report.verdict = match flow? {
        ControlFlow::Break(verdict) => verdict,
        ControlFlow::Continue(()) if passes(project, config, &report) => Verdict::Pass,
        ControlFlow::Continue(()) => Verdict::Fail,
    };

    log::debug!("{problem}: {:?}", report.verdict);
    observer.observe(&Event::Finished { report: &report });
    Ok(report)
}

/// Warns once per variant if any scored trial returned a `NaN` objective.
fn warn_on_nan(report: &Report) {
    if report.nan_count > 0 {
        log::warn!(
            "Warning: NaN returned by optimizer on {}. Leaderboard score will be 0.",
            report.problem
        );
    }
}

#[allow(clippy::cast_precision_loss)]
fn passes(project: Project, config: &Config, report: &Report) -> bool {
    match project {
        Project::Unconstrained => report.success_fraction() > config.win_fraction(),
        Project::Constrained => {
            report.successes as f64 >= config.feasible_fraction() * report.trials as f64
        }
    }
}

/// Runs the optimizer and the baseline on seed `seed` of problem `P`.
fn unconstrained_trial<P, O>(optimizer: &O, seed: u64) -> Result<TrialResult, Error>
where
    P: OptimizationProblem + Default,
    O: Optimizer,
{
    let mut counted = Counted::new(P::default());
    let problem = counted.problem().name();
    let budget = counted.problem().budget();

    let mut rng = trial_rng(seed);
    let x0 = counted.problem().sample_start(&mut rng);
    let x = optimizer
        .optimize(&counted, &x0, budget, problem, &mut rng)
        .map_err(|source| Error::optimizer(problem, seed, source))?;

    let count = counted.count();
    let tally = counted.tally();
    if counted.exceeded() {
        return Ok(TrialResult {
            seed,
            x,
            count,
            tally,
            budget,
            outcome: TrialOutcome::CountExceeded,
        });
    }

    counted.reset();
    let value = counted.f(&x).map_err(|source| Error::Evaluation {
        problem,
        seed,
        source,
    })?;
    let baseline = baseline_value::<P>(seed)?;

    Ok(TrialResult {
        seed,
        x,
        count,
        tally,
        budget,
        outcome: TrialOutcome::Compared { value, baseline },
    })
}

/// Returns the objective at the random search result for seed `seed`.
fn baseline_value<P>(seed: u64) -> Result<f64, Error>
where
    P: OptimizationProblem + Default,
{
    let mut counted = Counted::new(P::default());
    let problem = counted.problem().name();
    let budget = counted.problem().budget();

    let mut rng = trial_rng(seed);
    let x0 = counted.problem().sample_start(&mut rng);
    let baseline_err = |source: BaselineError| Error::Baseline {
        problem,
        seed,
        source,
    };

    let x = RandomSearch
        .optimize(&counted, &x0, budget, problem, &mut rng)
        .map_err(baseline_err)?;

    counted.reset();
    counted.f(&x).map_err(|source| baseline_err(source.into()))
}

/// Runs the optimizer on seed `seed` of problem `P` and checks feasibility.
fn constrained_trial<P, O>(optimizer: &O, seed: u64) -> Result<TrialResult, Error>
where
    P: ConstrainedOptimizationProblem + Default,
    O: ConstrainedOptimizer,
{
    let mut counted = Counted::new(P::default());
    let problem = counted.problem().name();
    let budget = counted.problem().budget();

    let mut rng = trial_rng(seed);
    let x0 = counted.problem().sample_start(&mut rng);
    let x = optimizer
        .optimize(&counted, &x0, budget, problem, &mut rng)
        .map_err(|source| Error::optimizer(problem, seed, source))?;

    let count = counted.count();
    let tally = counted.tally();
    let over_constraint_budget = counted
        .problem()
        .constraint_budget()
        .is_some_and(|limit| tally.constraint > limit);
    if counted.exceeded() || over_constraint_budget {
        return Ok(TrialResult {
            seed,
            x,
            count,
            tally,
            budget,
            outcome: TrialOutcome::CountExceeded,
        });
    }

    counted.reset();
    let constraints = counted.c(&x).map_err(|source| Error::Evaluation {
        problem,
        seed,
        source,
    })?;
    let feasible = is_feasible(constraints.view());

    Ok(TrialResult {
        seed,
        x,
        count,
        tally,
        budget,
        outcome: TrialOutcome::Feasibility {
            constraints,
            feasible,
        },
    })
}
