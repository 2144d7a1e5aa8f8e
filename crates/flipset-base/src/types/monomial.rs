//! Monomials: the variable factors of one additive term.

use super::Variable;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest number of variables a monomial may carry.
///
/// Odd subsets of a monomial therefore have size 1, 3 or 5.
pub const MAX_MONOMIAL_LEN: usize = 5;

/// An ordered list of at most [`MAX_MONOMIAL_LEN`] distinct variables.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Variable>", try_from = "Vec<Variable>")]
pub struct Monomial {
    vars: Vec<Variable>,
}

impl Monomial {
    /// Creates a monomial, rejecting oversized or repeated variable lists.
    pub fn new(vars: Vec<Variable>) -> Result<Self> {
        if vars.len() > MAX_MONOMIAL_LEN {
            return Err(Error::MonomialTooLong {
                len: vars.len(),
                max: MAX_MONOMIAL_LEN,
            });
        }
        for (i, var) in vars.iter().enumerate() {
            if vars[..i].contains(var) {
                return Err(Error::DuplicateVariable(var.to_string()));
            }
        }
        Ok(Self { vars })
    }

    /// Parses a list of names such as `["B0", "C1"]`.
    pub fn parse<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let vars = names
            .iter()
            .map(|n| n.as_ref().parse())
            .collect::<Result<Vec<Variable>>>()?;
        Self::new(vars)
    }

    /// Returns the variables in their original order.
    #[must_use]
    pub fn variables(&self) -> &[Variable] {
        &self.vars
    }

    #[must_use]
    pub fn contains(&self, var: &Variable) -> bool {
        self.vars.contains(var)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl From<Monomial> for Vec<Variable> {
    fn from(m: Monomial) -> Self {
        m.vars
    }
}

impl TryFrom<Vec<Variable>> for Monomial {
    type Error = Error;

    fn try_from(vars: Vec<Variable>) -> Result<Self> {
        Self::new(vars)
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, var) in self.vars.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{var}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_order() {
        let m = Monomial::parse(&["D2", "B0", "C1"]).unwrap();
        assert_eq!(m.len(), 3);
        assert_eq!(m.to_string(), "[D2, B0, C1]");
    }

    #[test]
    fn test_rejects_six_variables() {
        let err = Monomial::parse(&["A0", "A1", "A2", "A3", "A4", "B0"]).unwrap_err();
        assert!(matches!(err, Error::MonomialTooLong { len: 6, max: 5 }));
    }

    #[test]
    fn test_rejects_duplicates() {
        let err = Monomial::parse(&["B0", "C1", "B_0"]).unwrap_err();
        assert!(matches!(err, Error::DuplicateVariable(ref v) if v == "B0"));
    }

    #[test]
    fn test_empty_is_allowed() {
        let m = Monomial::new(Vec::new()).unwrap();
        assert!(m.is_empty());
        assert_eq!(m.to_string(), "[]");
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Monomial = serde_json::from_str(r#"["B0","C1"]"#).unwrap();
        assert_eq!(ok.len(), 2);
        assert!(serde_json::from_str::<Monomial>(r#"["B0","B0"]"#).is_err());
    }
}
