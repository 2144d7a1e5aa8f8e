//! Unified error types for flipset.

use thiserror::Error;

/// The main error type for flipset operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A monomial has more variables than the search can handle.
    #[error("Monomial has {len} variables, at most {max} are allowed")]
    MonomialTooLong { len: usize, max: usize },

    /// The same variable appears twice in one monomial.
    #[error("Variable {0} appears more than once in a monomial")]
    DuplicateVariable(String),

    /// A monomial references a variable outside the declared alphabet.
    #[error("Monomial {monomial} uses {variable}, which is not in the alphabet")]
    UnknownVariable { monomial: usize, variable: String },

    /// A string could not be read as a variable name.
    #[error("Invalid variable name: {0:?}")]
    InvalidVariable(String),

    /// Polynomial text could not be parsed.
    #[error("Parse error at offset {offset}: {message}")]
    Parse { offset: usize, message: String },

    /// A coefficient or exponent left the representable range.
    #[error("Arithmetic overflow while expanding: {0}")]
    Overflow(String),

    /// A monomial order name was not recognized.
    #[error("Unknown monomial order {0:?} (expected reverse or forward)")]
    UnknownOrder(String),

    /// No polynomials are defined for the requested index.
    #[error("No polynomials defined for s = {0}")]
    UnknownIndex(usize),

    /// Brute-force enumeration was asked to cover too many variables.
    #[error("Alphabet has {len} variables, brute force is limited to {max}")]
    AlphabetTooLarge { len: usize, max: usize },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
