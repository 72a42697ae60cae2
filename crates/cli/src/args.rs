use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "optbench")]
#[command(version, about = "Grades optimizers on the optbench course problems")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score an optimizer on the unconstrained project (simple1..simple3).
    Unconstrained(ScoreArgs),

    /// Score an optimizer on the constrained project (simple1..simple3).
    Constrained(ScoreArgs),

    /// Evaluate one problem at a point without a budget.
    Probe(ProbeArgs),

    /// Compare analytic gradients against finite differences.
    CheckGradients(GradientArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Trials per variant (overrides the config file).
    #[arg(long)]
    pub trials: Option<usize>,

    /// Run trials on all cores.
    #[arg(long)]
    pub parallel: bool,

    /// TOML file with `trials`, `win_fraction`, `feasible_fraction`, `parallel`.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Optimizer to score.
    #[arg(long, value_enum, default_value_t = OptimizerChoice::Stub)]
    pub optimizer: OptimizerChoice,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizerChoice {
    /// The student submission (returns `x0` until replaced).
    Stub,

    /// The random search baseline (unconstrained only).
    RandomSearch,
}

#[derive(Args, Debug, Clone)]
pub struct ProbeArgs {
    #[arg(value_enum)]
    pub project: ProjectName,

    #[arg(value_enum)]
    pub name: VariantName,

    /// Point to evaluate.
    #[arg(required = true, allow_negative_numbers = true)]
    pub x: Vec<f64>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectName {
    Unconstrained,
    Constrained,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantName {
    Simple1,
    Simple2,
    Simple3,
}

#[derive(Args, Debug, Clone)]
pub struct GradientArgs {
    /// Start points sampled per problem.
    #[arg(long, default_value_t = 100)]
    pub points: usize,

    /// Seed for the start point sampler.
    #[arg(long, default_value_t = 2021)]
    pub seed: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_score_flags() {
        let cli = Cli::try_parse_from([
            "optbench",
            "unconstrained",
            "--trials",
            "50",
            "--parallel",
            "--optimizer",
            "random-search",
        ])
        .unwrap();

        let Command::Unconstrained(args) = cli.command else {
            panic!("expected the unconstrained command");
        };
        assert_eq!(args.trials, Some(50));
        assert!(args.parallel);
        assert_eq!(args.optimizer, OptimizerChoice::RandomSearch);
        assert!(args.config.is_none());
    }

    #[test]
    fn probe_accepts_negative_coordinates() {
        let cli =
            Cli::try_parse_from(["optbench", "probe", "constrained", "simple3", "-1", "2", "-0.5"])
                .unwrap();

        let Command::Probe(args) = cli.command else {
            panic!("expected the probe command");
        };
        assert_eq!(args.project, ProjectName::Constrained);
        assert_eq!(args.name, VariantName::Simple3);
        assert_eq!(args.x, vec![-1.0, 2.0, -0.5]);
    }

    #[test]
    fn probe_requires_a_point() {
        assert!(Cli::try_parse_from(["optbench", "probe", "unconstrained", "simple1"]).is_err());
    }
}
