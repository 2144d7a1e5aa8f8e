//! Checking and applying one monomial's inclusion/exclusion split.
//!
//! `included` and `excluded` partition a monomial's variables: the first
//! set goes into the flip set, the second must stay out of it.

use flipset_base::{Decision, PartialAssignment, Variable};

/// True if the split agrees with every decision already recorded.
///
/// Fails when an included variable is already excluded or an excluded
/// variable is already included. Undecided variables never fail.
#[must_use]
pub fn is_consistent(
    included: &[Variable],
    excluded: &[Variable],
    assignment: &PartialAssignment,
) -> bool {
    included
        .iter()
        .all(|v| assignment.get(v) != Some(Decision::Excluded))
        && excluded
            .iter()
            .all(|v| assignment.get(v) != Some(Decision::Included))
}

/// Returns a new assignment with the split recorded.
///
/// The input is left untouched; sibling branches of the search keep using
/// it. Callers must have checked [`is_consistent`] first.
#[must_use]
pub fn merge(
    included: &[Variable],
    excluded: &[Variable],
    assignment: &PartialAssignment,
) -> PartialAssignment {
    debug_assert!(is_consistent(included, excluded, assignment));
    let mut next = assignment.clone();
    let decisions = included
        .iter()
        .map(|v| (*v, Decision::Included))
        .chain(excluded.iter().map(|v| (*v, Decision::Excluded)));
    for (var, decision) in decisions {
        let accepted = next.decide(var, decision);
        debug_assert!(accepted, "contradicting decision for {var}");
    }
    next
}
