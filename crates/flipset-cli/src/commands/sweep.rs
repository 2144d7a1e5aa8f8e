//! Sweep command: one independent search per index.

use super::{exhaustive_flag, load_problem, print_outcomes, solve_index, write_report, Report};
use crate::config::{CliConfig, OutputFormat};
use clap::Args;
use flipset_format::Problem;
use flipset_search::{MonomialOrder, SearchConfig, SearchOutcome};
use rayon::prelude::*;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct SweepArgs {
    /// Problem document (JSON)
    #[arg(required = true)]
    pub problem: PathBuf,

    /// Enumerate every flip set instead of stopping at the first
    #[arg(short, long, conflicts_with = "first")]
    pub all: bool,

    /// Stop at the first flip set, overriding an exhaustive configuration
    #[arg(long)]
    pub first: bool,

    /// Monomial processing order (reverse or forward)
    #[arg(long)]
    pub order: Option<MonomialOrder>,

    /// Number of parallel workers (0 = auto)
    #[arg(long)]
    pub workers: Option<usize>,

    /// Format of the results printed to stdout
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file for the JSON report
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Result of sweeping every index of a problem.
#[derive(Debug, Default)]
pub struct SweepSummary {
    /// Outcomes of the indices that completed, in document order.
    pub outcomes: Vec<SearchOutcome>,
    /// Indices whose search was aborted, with the reason.
    pub failed: Vec<(usize, flipset_base::Error)>,
}

impl SweepSummary {
    /// Fails if any index was aborted.
    pub fn ensure_complete(&self) -> anyhow::Result<()> {
        if self.failed.is_empty() {
            return Ok(());
        }
        let total = self.outcomes.len() + self.failed.len();
        anyhow::bail!("{} of {} indices failed", self.failed.len(), total)
    }
}

/// Searches every index of `problem` on a pool of `workers` threads (0 = one per core).
pub fn sweep(
    problem: &Problem,
    search: SearchConfig,
    workers: usize,
) -> anyhow::Result<SweepSummary> {
    let indices: Vec<usize> = problem.indices().collect();
    tracing::info!("Sweeping {} indices", indices.len());

    // Setup thread pool
    let pool = rayon::ThreadPoolBuilder::new().num_threads(workers).build()?;

    // Every index gets its own search state; results keep index order.
    let results: Vec<_> = pool.install(|| {
        indices
            .par_iter()
            .map(|&s| (s, solve_index(problem, s, search)))
            .collect()
    });

    let mut summary = SweepSummary::default();
    for (s, result) in results {
        match result {
            Ok(outcome) => summary.outcomes.push(outcome),
            Err(e) => {
                tracing::error!("Search for s = {} aborted: {}", s, e);
                summary.failed.push((s, e));
            }
        }
    }
    Ok(summary)
}

pub fn run(args: SweepArgs, config: &CliConfig) -> anyhow::Result<()> {
    let problem = load_problem(&args.problem)?;
    let search = config.search_config(exhaustive_flag(args.all, args.first), args.order);
    let workers = args.workers.or(config.workers).unwrap_or(0);

    let summary = sweep(&problem, search, workers)?;
    print_outcomes(&summary.outcomes, config.output_format(args.format))?;

    if let Some(path) = &args.output {
        let report = Report {
            problem: args.problem.display().to_string(),
            config: search,
            outcomes: summary.outcomes.clone(),
        };
        write_report(path, &report)?;
    }

    summary.ensure_complete()?;
    tracing::info!("Sweep complete");
    Ok(())
}
