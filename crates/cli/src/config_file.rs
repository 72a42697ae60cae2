use std::{fs, path::Path};

use anyhow::Context;
use optbench_harness::Config;
use serde::Deserialize;

use crate::args::ScoreArgs;

/// Scoring settings read from a TOML file. Every field is optional.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub trials: Option<usize>,
    pub win_fraction: Option<f64>,
    pub feasible_fraction: Option<f64>,
    pub parallel: Option<bool>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}

/// Builds the scoring config from defaults, the optional file, and flags,
/// with later sources taking precedence.
pub fn resolve(args: &ScoreArgs) -> anyhow::Result<Config> {
    let file = match &args.config {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::default(),
    };
    merge(&file, args)
}

fn merge(file: &ConfigFile, args: &ScoreArgs) -> anyhow::Result<Config> {
    let defaults = Config::default();
    let config = Config::new(
        args.trials.or(file.trials).unwrap_or(defaults.trials()),
        file.win_fraction.unwrap_or(defaults.win_fraction()),
        file.feasible_fraction.unwrap_or(defaults.feasible_fraction()),
    )
    .context("invalid scoring config")?;

    Ok(config.with_parallel(args.parallel || file.parallel.unwrap_or(false)))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::args::OptimizerChoice;

    fn args(trials: Option<usize>, parallel: bool) -> ScoreArgs {
        ScoreArgs {
            trials,
            parallel,
            config: None,
            optimizer: OptimizerChoice::Stub,
        }
    }

    #[test]
    fn no_file_gives_rubric_defaults() {
        let config = resolve(&args(None, false)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn file_values_apply() {
        let file: ConfigFile = toml::from_str(
            r"
            trials = 40
            win_fraction = 0.6
            parallel = true
            ",
        )
        .unwrap();

        let config = merge(&file, &args(None, false)).unwrap();
        assert_eq!(config.trials(), 40);
        assert_relative_eq!(config.win_fraction(), 0.6);
        assert_relative_eq!(config.feasible_fraction(), 0.95);
        assert!(config.parallel());
    }

    #[test]
    fn flags_override_file() {
        let file = ConfigFile {
            trials: Some(40),
            ..ConfigFile::default()
        };
        let config = merge(&file, &args(Some(7), true)).unwrap();
        assert_eq!(config.trials(), 7);
        assert!(config.parallel());
    }

    #[test]
    fn invalid_values_are_rejected() {
        let file = ConfigFile {
            feasible_fraction: Some(1.2),
            ..ConfigFile::default()
        };
        assert!(merge(&file, &args(None, false)).is_err());
        assert!(merge(&ConfigFile::default(), &args(Some(0), false)).is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<ConfigFile>("trails = 3").is_err());
    }
}
