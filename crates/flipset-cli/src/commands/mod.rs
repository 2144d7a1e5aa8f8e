//! Subcommands and the pieces they share.

pub mod monomials;
pub mod solve;
pub mod sweep;
pub mod verify;

use crate::config::OutputFormat;
use anyhow::Context;
use flipset_base::PartialAssignment;
use flipset_format::Problem;
use flipset_search::{BacktrackingSearch, SearchConfig, SearchOutcome};
use serde::Serialize;
use std::fmt::Write as _;
use std::fs::File;
use std::path::Path;

/// JSON report written by `solve` and `sweep`.
#[derive(Serialize)]
pub struct Report {
    pub problem: String,
    pub config: SearchConfig,
    pub outcomes: Vec<SearchOutcome>,
}

pub fn load_problem(path: &Path) -> anyhow::Result<Problem> {
    tracing::info!("Loading problem from {:?}", path);
    Problem::from_path(path).with_context(|| format!("Cannot load problem {}", path.display()))
}

/// Reads `--all` / `--first` as an override of the configured mode.
pub fn exhaustive_flag(all: bool, first: bool) -> Option<bool> {
    match (all, first) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// Extracts the monomials for `s` and searches them from an empty root.
pub fn solve_index(
    problem: &Problem,
    s: usize,
    config: SearchConfig,
) -> flipset_base::Result<SearchOutcome> {
    let alphabet = problem.valid_alphabet(s)?;
    let monomials = problem.monomials(s)?;
    tracing::info!("s = {}: {} monomials over {} variables", s, monomials.len(), alphabet.len());
    BacktrackingSearch::new(config).run(s, &alphabet, &monomials, &PartialAssignment::new())
}

/// Formats outcomes for stdout.
pub fn render(outcomes: &[SearchOutcome], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(outcomes)?),
        OutputFormat::Text => {
            let mut out = String::new();
            for outcome in outcomes {
                if outcome.solutions.is_empty() {
                    writeln!(out, "No valid V_{} found", outcome.s)?;
                }
                for solution in &outcome.solutions {
                    writeln!(out, "Valid V_{} found: {}", outcome.s, solution)?;
                }
            }
            Ok(out)
        }
    }
}

pub fn print_outcomes(outcomes: &[SearchOutcome], format: OutputFormat) -> anyhow::Result<()> {
    let text = render(outcomes, format)?;
    print!("{text}");
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

pub fn write_report(path: &Path, report: &Report) -> anyhow::Result<()> {
    let f = File::create(path).with_context(|| format!("Cannot create {}", path.display()))?;
    serde_json::to_writer_pretty(f, report)?;
    tracing::info!("Report written to {}", path.display());
    Ok(())
}
