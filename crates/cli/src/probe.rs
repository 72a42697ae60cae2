use ndarray::Array1;
use optbench_core::{
    ConstrainedOptimizationProblem, ConstrainedOracle, Counted, OptimizationProblem, Oracle,
};
use optbench_problems::{constrained, unconstrained};

use crate::args::{ProbeArgs, ProjectName, VariantName};

/// Evaluates the requested problem at the given point and prints the results.
pub fn run(args: &ProbeArgs) -> anyhow::Result<()> {
    let x = Array1::from_vec(args.x.clone());
    let lines = match (args.project, args.name) {
        (ProjectName::Unconstrained, VariantName::Simple1) => {
            probe_objective(unconstrained::Rosenbrock, &x)?
        }
        (ProjectName::Unconstrained, VariantName::Simple2) => {
            probe_objective(unconstrained::Himmelblau, &x)?
        }
        (ProjectName::Unconstrained, VariantName::Simple3) => {
            probe_objective(unconstrained::Powell, &x)?
        }
        (ProjectName::Constrained, VariantName::Simple1) => {
            probe_constrained(constrained::Simple1, &x)?
        }
        (ProjectName::Constrained, VariantName::Simple2) => {
            probe_constrained(constrained::Simple2, &x)?
        }
        (ProjectName::Constrained, VariantName::Simple3) => {
            probe_constrained(constrained::Simple3, &x)?
        }
    };

    for line in lines {
        println!("{line}");
    }
    Ok(())
}

fn probe_objective<P: OptimizationProblem>(
    problem: P,
    x: &Array1<f64>,
) -> anyhow::Result<Vec<String>> {
    let mut counted = Counted::new(problem);
    counted.no_limit();

    let f = counted.f(x)?;
    let g = counted.g(x)?;
    Ok(vec![
        format!("f = {f}"),
        format!("g = {g}"),
        format!("count = {}", counted.count()),
    ])
}

fn probe_constrained<P: ConstrainedOptimizationProblem>(
    problem: P,
    x: &Array1<f64>,
) -> anyhow::Result<Vec<String>> {
    let mut counted = Counted::new(problem);
    counted.no_limit();

    let f = counted.f(x)?;
    let g = counted.g(x)?;
    let c = counted.c(x)?;
    let feasible = optbench_core::is_feasible(c.view());
    Ok(vec![
        format!("f = {f}"),
        format!("g = {g}"),
        format!("c = {c} (feasible: {feasible})"),
        format!("count = {}", counted.count()),
    ])
}
