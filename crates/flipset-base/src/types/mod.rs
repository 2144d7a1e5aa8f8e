//! Type system for flipset.
//!
//! Hierarchy:
//! - `Variable` → one symbolic weight, e.g. `C1`
//! - `Alphabet` → the ordered set of variables a search may use
//! - `Monomial` → up to five distinct variables of one additive term
//! - `PartialAssignment` → per-variable decisions made so far
//! - `Solution` → the included variables of a total assignment

mod assignment;
mod monomial;
mod solution;
mod variable;

pub use assignment::{Decision, PartialAssignment};
pub use monomial::{Monomial, MAX_MONOMIAL_LEN};
pub use solution::Solution;
pub use variable::{Alphabet, Variable};
