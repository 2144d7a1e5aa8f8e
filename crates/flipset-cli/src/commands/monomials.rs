//! Monomials command.

use super::load_problem;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct MonomialsArgs {
    /// Problem document (JSON)
    #[arg(required = true)]
    pub problem: PathBuf,

    /// Index whose monomials are printed
    #[arg(short, long)]
    pub s: usize,
}

pub fn run(args: MonomialsArgs) -> anyhow::Result<()> {
    let problem = load_problem(&args.problem)?;
    let valid = problem.valid_alphabet(args.s)?;
    let monomials = problem.monomials(args.s)?;

    println!("s = {}, {} valid variables", args.s, valid.len());
    for (i, monomial) in monomials.iter().enumerate() {
        println!("{i:>3}: {monomial}");
    }
    Ok(())
}
