//! flipset CLI - Command-line interface for the parity flip set search.

mod commands;
mod config;

use clap::{Parser, Subcommand};
use config::CliConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "flipset")]
#[command(author, version, about = "Find variable sets whose negation flips every monomial", long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: ~/.flipset/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search flip sets for one index
    Solve(commands::solve::SolveArgs),
    /// Search flip sets for every index of a problem, in parallel
    Sweep(commands::sweep::SweepArgs),
    /// Check a proposed flip set against the monomials of one index
    Verify(commands::verify::VerifyArgs),
    /// Print the monomials extracted for one index
    Monomials(commands::monomials::MonomialsArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::load(cli.config.as_deref())?;
    tracing::debug!(?config, "Loaded configuration");

    match cli.command {
        Commands::Solve(args) => commands::solve::run(args, &config),
        Commands::Sweep(args) => commands::sweep::run(args, &config),
        Commands::Verify(args) => commands::verify::run(args),
        Commands::Monomials(args) => commands::monomials::run(args),
    }
}
