use optbench_core::Observer;
use optbench_problems::{
    constrained::{Simple1, Simple2, Simple3},
    unconstrained::{Himmelblau, Powell, Rosenbrock},
};

use crate::{
    Action, Config, ConstrainedOptimizer, Error, Event, Optimizer, Report, score_constrained,
    score_unconstrained,
};

/// The outcome of scoring one variant of a suite, keyed by problem name.
pub type SuiteResult = (&'static str, Result<Report, Error>);

/// Scores `optimizer` on `simple1`, `simple2`, and `simple3` of the
/// unconstrained project.
///
/// A failing variant does not stop the suite.
pub fn unconstrained_suite<O, Obs>(
    optimizer: &O,
    config: &Config,
    mut observer: Obs,
) -> Vec<SuiteResult>
where
    O: Optimizer + Sync,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let mut observe = |event: &Event<'_>| observer.observe(event);
    vec![
        (
            "simple1",
            score_unconstrained::<Rosenbrock, _, _>(optimizer, config, &mut observe),
        ),
        (
            "simple2",
            score_unconstrained::<Himmelblau, _, _>(optimizer, config, &mut observe),
        ),
        (
            "simple3",
            score_unconstrained::<Powell, _, _>(optimizer, config, &mut observe),
        ),
    ]
}

/// Scores `optimizer` on `simple1`, `simple2`, and `simple3` of the
/// constrained project.
///
/// A failing variant does not stop the suite.
pub fn constrained_suite<O, Obs>(
    optimizer: &O,
    config: &Config,
    mut observer: Obs,
) -> Vec<SuiteResult>
where
    O: ConstrainedOptimizer + Sync,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let mut observe = |event: &Event<'_>| observer.observe(event);
    vec![
        (
            "simple1",
            score_constrained::<Simple1, _, _>(optimizer, config, &mut observe),
        ),
        (
            "simple2",
            score_constrained::<Simple2, _, _>(optimizer, config, &mut observe),
        ),
        (
            "simple3",
            score_constrained::<Simple3, _, _>(optimizer, config, &mut observe),
        ),
    ]
}
