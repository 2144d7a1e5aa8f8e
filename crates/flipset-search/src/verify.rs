//! Parity checks for candidate flip sets.

use flipset_base::{Alphabet, Error, Monomial, Result, Solution};

/// Largest alphabet [`brute_force`] will enumerate.
pub const BRUTE_FORCE_LIMIT: usize = 20;

/// Number of the monomial's variables that are in the flip set.
#[must_use]
pub fn intersection_size(solution: &Solution, monomial: &Monomial) -> usize {
    monomial
        .variables()
        .iter()
        .filter(|v| solution.contains(v))
        .count()
}

/// True if negating the flip set negates the monomial.
#[must_use]
pub fn flips(solution: &Solution, monomial: &Monomial) -> bool {
    intersection_size(solution, monomial) % 2 == 1
}

/// Indices of the monomials the flip set does not negate.
#[must_use]
pub fn violations(solution: &Solution, monomials: &[Monomial]) -> Vec<usize> {
    monomials
        .iter()
        .enumerate()
        .filter(|(_, m)| !flips(solution, m))
        .map(|(i, _)| i)
        .collect()
}

#[must_use]
pub fn flips_all(solution: &Solution, monomials: &[Monomial]) -> bool {
    monomials.iter().all(|m| flips(solution, m))
}

/// The variables that occur in at least one monomial.
#[must_use]
pub fn support(monomials: &[Monomial]) -> Alphabet {
    monomials
        .iter()
        .flat_map(|m| m.variables().iter().copied())
        .collect()
}

/// Every flip set over the monomials' own variables, found by trying all
/// subsets. Results are sorted.
///
/// The backtracking search never includes a variable that no monomial
/// mentions, so its exhaustive output is comparable to this set.
pub fn brute_force(monomials: &[Monomial]) -> Result<Vec<Solution>> {
    let alphabet = support(monomials);
    let vars: Vec<_> = alphabet.iter().copied().collect();
    if vars.len() > BRUTE_FORCE_LIMIT {
        return Err(Error::AlphabetTooLarge {
            len: vars.len(),
            max: BRUTE_FORCE_LIMIT,
        });
    }

    let mut found: Vec<Solution> = (0u32..1 << vars.len())
        .map(|mask| {
            Solution::from_variables(
                vars.iter()
                    .enumerate()
                    .filter(|(bit, _)| mask & (1 << bit) != 0)
                    .map(|(_, v)| *v),
            )
        })
        .filter(|candidate| flips_all(candidate, monomials))
        .collect();
    found.sort();
    Ok(found)
}
