//! Solve command.

use super::{exhaustive_flag, load_problem, print_outcomes, solve_index, write_report, Report};
use crate::config::{CliConfig, OutputFormat};
use clap::Args;
use flipset_search::MonomialOrder;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Args)]
pub struct SolveArgs {
    /// Problem document (JSON)
    #[arg(required = true)]
    pub problem: PathBuf,

    /// Index whose polynomials are searched
    #[arg(short, long)]
    pub s: usize,

    /// Enumerate every flip set instead of stopping at the first
    #[arg(short, long, conflicts_with = "first")]
    pub all: bool,

    /// Stop at the first flip set, overriding an exhaustive configuration
    #[arg(long)]
    pub first: bool,

    /// Monomial processing order (reverse or forward)
    #[arg(long)]
    pub order: Option<MonomialOrder>,

    /// Format of the results printed to stdout
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file for the JSON report
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: SolveArgs, config: &CliConfig) -> anyhow::Result<()> {
    let problem = load_problem(&args.problem)?;
    let search = config.search_config(exhaustive_flag(args.all, args.first), args.order);

    let start = Instant::now();
    let outcome = solve_index(&problem, args.s, search)?;
    tracing::info!(
        "Search for s = {} finished in {}ms ({} nodes, {} pruned)",
        args.s,
        start.elapsed().as_millis(),
        outcome.stats.nodes,
        outcome.stats.pruned
    );

    let outcomes = vec![outcome];
    print_outcomes(&outcomes, config.output_format(args.format))?;

    if let Some(path) = args.output {
        let report = Report {
            problem: args.problem.display().to_string(),
            config: search,
            outcomes,
        };
        write_report(&path, &report)?;
    }
    Ok(())
}
