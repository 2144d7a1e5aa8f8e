//! # flipset-format
//!
//! The monomial source for flipset.
//!
//! Supports:
//! - **Polynomial text**: tokenizer and recursive-descent parser
//! - **Expansion**: distribution of products into additive terms
//! - **Extraction**: per-term variable lists filtered by a valid alphabet
//! - **Problem documents**: JSON files holding the polynomials per index

pub mod expand;
pub mod extract;
pub mod parser;
pub mod problem;

pub use expand::{Polynomial, Term};
pub use extract::{extract_monomials, monomials_of, term_monomial};
pub use parser::{Expr, Parser, Tokenizer};
pub use problem::{Problem, ProblemEntry};
