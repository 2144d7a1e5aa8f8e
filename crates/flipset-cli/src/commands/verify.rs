//! Verify command.

use super::load_problem;
use anyhow::Context;
use clap::Args;
use flipset_base::{Monomial, Solution, Variable};
use flipset_format::Problem;
use flipset_search::verify::{brute_force, violations};
use std::path::PathBuf;

#[derive(Args)]
pub struct VerifyArgs {
    /// Problem document (JSON)
    #[arg(required = true)]
    pub problem: PathBuf,

    /// Index whose monomials are checked
    #[arg(short, long)]
    pub s: usize,

    /// Proposed flip set, e.g. C1,D2
    #[arg(long, value_delimiter = ',')]
    pub set: Vec<String>,

    /// Also list every flip set by trying all subsets
    #[arg(long)]
    pub brute_force: bool,
}

/// A proposed flip set checked against the monomials of one index.
#[derive(Debug)]
pub struct Verdict {
    pub s: usize,
    pub candidate: Solution,
    pub monomials: Vec<Monomial>,
    /// Indices of the monomials the candidate does not flip.
    pub violations: Vec<usize>,
}

impl Verdict {
    /// Fails unless every monomial is flipped.
    pub fn ensure_flips(&self) -> anyhow::Result<()> {
        if self.violations.is_empty() {
            return Ok(());
        }
        anyhow::bail!(
            "{} does not flip {} of {} monomials",
            self.candidate,
            self.violations.len(),
            self.monomials.len()
        )
    }
}

/// Parses `set` and checks it against the monomials of `s`.
pub fn check(problem: &Problem, s: usize, set: &[String]) -> anyhow::Result<Verdict> {
    let monomials = problem.monomials(s)?;
    let valid = problem.valid_alphabet(s)?;

    let vars = set
        .iter()
        .map(|name| name.parse::<Variable>().with_context(|| format!("Bad variable {name:?}")))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let candidate = Solution::from_variables(vars);
    for var in candidate.variables().iter().filter(|v| !valid.contains(v)) {
        tracing::warn!("{} is not a valid variable for s = {}", var, s);
    }

    let violations = violations(&candidate, &monomials);
    Ok(Verdict {
        s,
        candidate,
        monomials,
        violations,
    })
}

pub fn run(args: VerifyArgs) -> anyhow::Result<()> {
    let problem = load_problem(&args.problem)?;
    let verdict = check(&problem, args.s, &args.set)?;

    if args.brute_force {
        let all = brute_force(&verdict.monomials)?;
        println!("Brute force: {} flip sets for s = {}", all.len(), args.s);
        for solution in &all {
            println!("  {solution}");
        }
    }

    if verdict.violations.is_empty() {
        println!(
            "V_{} = {} flips all {} monomials",
            verdict.s,
            verdict.candidate,
            verdict.monomials.len()
        );
    }
    for &index in &verdict.violations {
        println!("Monomial {} {} keeps its sign", index, verdict.monomials[index]);
    }
    verdict.ensure_flips()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::problem;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_valid_flip_set() {
        let verdict = check(&problem(), 0, &names(&["D2", "B0"])).unwrap();
        assert_eq!(verdict.candidate.names(), ["B0", "D2"]);
        assert!(verdict.violations.is_empty());
        assert!(verdict.ensure_flips().is_ok());
    }

    #[test]
    fn test_missed_monomial_fails() {
        let verdict = check(&problem(), 0, &names(&["B0"])).unwrap();
        assert_eq!(verdict.violations, [1]);
        let err = verdict.ensure_flips().unwrap_err();
        assert_eq!(err.to_string(), "[B0] does not flip 1 of 2 monomials");
    }

    #[test]
    fn test_bad_input() {
        let p = problem();
        assert!(check(&p, 0, &names(&["C1", "1X"])).is_err());
        assert!(check(&p, 9, &names(&["C1"])).is_err());
    }

    #[test]
    fn test_empty_set_flips_nothing() {
        let verdict = check(&problem(), 2, &[]).unwrap();
        assert_eq!(verdict.violations, [0, 1]);
        assert!(verdict.ensure_flips().is_err());
    }
}
