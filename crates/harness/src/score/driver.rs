use std::ops::ControlFlow;

use rayon::prelude::*;

use crate::{Config, Error, TrialResult};

/// Runs `trial` for seeds `0..config.trials()` and feeds results to `consume`
/// in seed order until it breaks.
///
/// In parallel mode every trial is computed up front on the rayon pool and
/// the results are replayed in order, so the outcome matches a sequential run.
/// The first error in seed order is returned.
pub(super) fn drive<F, C, B>(
    config: &Config,
    trial: F,
    mut consume: C,
) -> Result<ControlFlow<B>, Error>
where
    F: Fn(u64) -> Result<TrialResult, Error> + Sync,
    C: FnMut(TrialResult) -> ControlFlow<B>,
{
    let seeds = 0..config.trials() as u64;

    if config.parallel() {
        let results: Vec<_> = seeds.into_par_iter().map(&trial).collect();
        for result in results {
            if let ControlFlow::Break(value) = consume(result?) {
                return Ok(ControlFlow::Break(value));
            }
        }
    } else {
        for seed in seeds {
            if let ControlFlow::Break(value) = consume(trial(seed)?) {
                return Ok(ControlFlow::Break(value));
            }
        }
    }

    Ok(ControlFlow::Continue(()))
}
