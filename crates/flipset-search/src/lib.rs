//! # flipset-search
//!
//! Backtracking search for parity flip sets.
//!
//! Implements:
//! - Odd-subset enumeration per monomial
//! - Consistency checking and pure merging of partial assignments
//! - Depth-first search in first-solution or exhaustive mode
//! - Parity verification and a brute-force reference enumerator

pub mod combos;
pub mod consistency;
pub mod search;
pub mod verify;

pub use search::{search, BacktrackingSearch, MonomialOrder, SearchConfig, SearchOutcome, SearchStats};
