//! # flipset-base
//!
//! Core types and errors shared by every flipset crate.
//!
//! This crate provides the foundational building blocks:
//!
//! - **Type System**: variables, alphabets, monomials, partial assignments
//!   and solutions
//! - **Error Types**: unified error handling across the workspace

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{
    Alphabet, Decision, Monomial, PartialAssignment, Solution, Variable, MAX_MONOMIAL_LEN,
};
