//! Depth-first search for flip sets.

use crate::combos::odd_subsets;
use crate::consistency::{is_consistent, merge};
use flipset_base::{Alphabet, Error, Monomial, PartialAssignment, Result, Solution, Variable};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::ControlFlow;
use std::str::FromStr;
use tracing::{debug, info, trace, warn};

/// Order in which monomials are consumed, one per recursion level.
///
/// The order decides which flip set is found first and the order of
/// exhaustive results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonomialOrder {
    /// Last monomial first.
    #[default]
    Reverse,
    /// First monomial first.
    Forward,
}

impl MonomialOrder {
    /// Lists the monomials in processing order.
    #[must_use]
    pub fn schedule(self, monomials: &[Monomial]) -> Vec<&Monomial> {
        match self {
            Self::Reverse => monomials.iter().rev().collect(),
            Self::Forward => monomials.iter().collect(),
        }
    }
}

impl fmt::Display for MonomialOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reverse => write!(f, "reverse"),
            Self::Forward => write!(f, "forward"),
        }
    }
}

impl FromStr for MonomialOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "reverse" | "lifo" => Ok(Self::Reverse),
            "forward" | "fifo" => Ok(Self::Forward),
            _ => Err(Error::UnknownOrder(s.to_string())),
        }
    }
}

/// Configuration for the search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Enumerate every flip set instead of stopping at the first.
    pub exhaustive: bool,
    /// Monomial processing order.
    pub order: MonomialOrder,
}

/// Search statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Number of recursion nodes entered.
    pub nodes: u64,
    /// Number of odd subsets considered.
    pub candidates: u64,
    /// Number of odd subsets rejected by the consistency check.
    pub pruned: u64,
    /// Number of flip sets recorded.
    pub solutions: u64,
    /// Deepest level reached (number of monomials consumed).
    pub max_depth: usize,
}

/// The flip sets found for one index `s`, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Index the monomials were produced for.
    pub s: usize,
    /// Flip sets in discovery order.
    pub solutions: Vec<Solution>,
    /// Statistics of the run.
    pub stats: SearchStats,
}

impl SearchOutcome {
    /// Canonical names of every flip set, e.g. `[["C1"], ["B0", "D2"]]`.
    #[must_use]
    pub fn names(&self) -> Vec<Vec<String>> {
        self.solutions.iter().map(Solution::names).collect()
    }
}

/// Backtracking search over a monomial list.
///
/// Each level takes one monomial, tries each of its odd subsets as the
/// included part, prunes splits that contradict earlier levels, and
/// recurses with the merged assignment. A leaf is a flip set.
#[derive(Debug, Clone, Default)]
pub struct BacktrackingSearch {
    config: SearchConfig,
    stats: SearchStats,
}

impl BacktrackingSearch {
    /// Creates a search with the given configuration.
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Returns statistics of the last run.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Checks the monomials against the alphabet, then searches.
    ///
    /// Any variable outside `alphabet` aborts the run before the search
    /// starts; no partial results are produced.
    pub fn run(
        &mut self,
        s: usize,
        alphabet: &Alphabet,
        monomials: &[Monomial],
        root: &PartialAssignment,
    ) -> Result<SearchOutcome> {
        validate(alphabet, monomials)?;
        Ok(self.search(s, root, monomials))
    }

    /// Searches without validating the input.
    pub fn search(
        &mut self,
        s: usize,
        root: &PartialAssignment,
        monomials: &[Monomial],
    ) -> SearchOutcome {
        self.stats = SearchStats::default();
        let schedule = self.config.order.schedule(monomials);
        debug!(
            s,
            monomials = monomials.len(),
            exhaustive = self.config.exhaustive,
            order = %self.config.order,
            "Starting flip set search"
        );

        let mut found = Vec::new();
        let flow = self.descend(s, &schedule, root, 0, &mut found);

        debug!(
            s,
            solutions = found.len(),
            nodes = self.stats.nodes,
            pruned = self.stats.pruned,
            stopped_early = flow.is_break(),
            "Search finished"
        );
        SearchOutcome {
            s,
            solutions: found,
            stats: self.stats.clone(),
        }
    }

    /// Consumes `remaining[0]` and recurses on the rest.
    ///
    /// Returns `Break` once the first flip set is recorded in
    /// non-exhaustive mode.
    fn descend(
        &mut self,
        s: usize,
        remaining: &[&Monomial],
        assignment: &PartialAssignment,
        depth: usize,
        found: &mut Vec<Solution>,
    ) -> ControlFlow<()> {
        self.stats.nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        let Some((monomial, rest)) = remaining.split_first() else {
            let solution = Solution::from_assignment(assignment);
            info!("Valid V_{} found: {}", s, solution);
            found.push(solution);
            self.stats.solutions += 1;
            return if self.config.exhaustive {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            };
        };

        let vars = monomial.variables();
        for included in odd_subsets(vars) {
            self.stats.candidates += 1;
            let excluded: Vec<Variable> = vars
                .iter()
                .filter(|v| !included.contains(v))
                .copied()
                .collect();

            if !is_consistent(&included, &excluded, assignment) {
                self.stats.pruned += 1;
                trace!(depth, %monomial, ?included, "Pruned inconsistent split");
                continue;
            }

            let next = merge(&included, &excluded, assignment);
            if self.descend(s, rest, &next, depth + 1, found).is_break() {
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }
}

/// Checks that every monomial only uses variables of `alphabet`.
pub fn validate(alphabet: &Alphabet, monomials: &[Monomial]) -> Result<()> {
    for (index, monomial) in monomials.iter().enumerate() {
        if let Some(var) = monomial.variables().iter().find(|v| !alphabet.contains(v)) {
            return Err(Error::UnknownVariable {
                monomial: index,
                variable: var.to_string(),
            });
        }
        if monomial.is_empty() {
            warn!(monomial = index, "Monomial has no variables; no flip set can exist");
        }
    }
    Ok(())
}

/// Searches with default order and returns the flip sets only.
///
/// `exhaustive = false` yields at most one flip set.
#[must_use]
pub fn search(
    s: usize,
    assignment: &PartialAssignment,
    monomials: &[Monomial],
    exhaustive: bool,
) -> Vec<Solution> {
    let config = SearchConfig {
        exhaustive,
        ..SearchConfig::default()
    };
    BacktrackingSearch::new(config)
        .search(s, assignment, monomials)
        .solutions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monomials(lists: &[&[&str]]) -> Vec<Monomial> {
        lists.iter().map(|l| Monomial::parse(l).unwrap()).collect()
    }

    #[test]
    fn test_reverse_schedule() {
        let ms = monomials(&[&["B0"], &["C1"], &["D2"]]);
        let order: Vec<String> = MonomialOrder::Reverse
            .schedule(&ms)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(order, ["[D2]", "[C1]", "[B0]"]);
    }

    #[test]
    fn test_order_from_str() {
        assert_eq!("reverse".parse::<MonomialOrder>().unwrap(), MonomialOrder::Reverse);
        assert_eq!("Forward".parse::<MonomialOrder>().unwrap(), MonomialOrder::Forward);
        assert!(matches!(
            "sideways".parse::<MonomialOrder>(),
            Err(Error::UnknownOrder(ref name)) if name == "sideways"
        ));
    }

    #[test]
    fn test_no_monomials_gives_empty_flip_set() {
        let found = search(0, &PartialAssignment::new(), &[], false);
        assert_eq!(found, vec![Solution::default()]);
    }

    #[test]
    fn test_empty_monomial_is_unsatisfiable() {
        let ms = monomials(&[&["B0"], &[]]);
        assert!(search(0, &PartialAssignment::new(), &ms, true).is_empty());
    }

    #[test]
    fn test_stats_count_pruning() {
        let ms = monomials(&[&["B0", "C1"], &["C1", "D2"]]);
        let mut engine = BacktrackingSearch::new(SearchConfig {
            exhaustive: true,
            ..SearchConfig::default()
        });
        let outcome = engine.search(3, &PartialAssignment::new(), &ms);
        assert_eq!(outcome.s, 3);
        assert_eq!(outcome.stats.solutions, 2);
        assert_eq!(outcome.stats.candidates, 6);
        assert_eq!(outcome.stats.pruned, 2);
        assert_eq!(outcome.stats.max_depth, 2);
        assert_eq!(engine.stats(), &outcome.stats);
    }

    #[test]
    fn test_validate_rejects_foreign_variable() {
        let alphabet = Alphabet::grid("BCD", 5).unwrap();
        let ms = monomials(&[&["B0", "C1"], &["A0", "D2"]]);
        let err = BacktrackingSearch::default()
            .run(1, &alphabet, &ms, &PartialAssignment::new())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownVariable { monomial: 1, ref variable } if variable == "A0"
        ));
    }
}
