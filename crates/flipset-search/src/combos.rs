//! Odd-sized subsets of a monomial's variables.

use flipset_base::MAX_MONOMIAL_LEN;
use itertools::Itertools;

/// Returns every way to pick an odd number of `items`.
///
/// All subsets of size 1 come first, then size 3, then size 5. Within one
/// size, subsets follow lexicographic order of input position, so
/// `[a, b, c]` gives `[a], [b], [c], [a, b, c]`.
pub fn odd_subsets<T: Copy>(items: &[T]) -> Vec<Vec<T>> {
    debug_assert!(items.len() <= MAX_MONOMIAL_LEN);
    (1..=items.len())
        .step_by(2)
        .flat_map(|k| items.iter().copied().combinations(k))
        .collect()
}

/// Number of odd subsets of an `n`-element list: `2^(n-1)` for `n > 0`.
#[must_use]
pub const fn odd_subset_count(n: usize) -> usize {
    if n == 0 {
        0
    } else {
        1 << (n - 1)
    }
}
