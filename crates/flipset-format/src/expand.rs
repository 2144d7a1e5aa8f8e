//! Expansion of parsed expressions into sums of monomial terms.
//!
//! Symbols are treated as commuting indeterminates. Like terms are merged
//! and terms whose coefficient cancels to zero are dropped, so the result
//! lists each distinct product once, in order of first appearance.

use crate::parser::{self, Expr};
use flipset_base::{Error, Result};
use std::collections::BTreeMap;
use std::fmt;

/// One additive term: an integer coefficient times a product of symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    coeff: i64,
    /// Symbol name -> exponent (always >= 1).
    factors: BTreeMap<String, u32>,
}

impl Term {
    fn constant(coeff: i64) -> Self {
        Self {
            coeff,
            factors: BTreeMap::new(),
        }
    }

    fn symbol(name: String) -> Self {
        Self {
            coeff: 1,
            factors: BTreeMap::from([(name, 1)]),
        }
    }

    #[must_use]
    pub fn coeff(&self) -> i64 {
        self.coeff
    }

    /// Symbols of the product with their exponents, sorted by name.
    pub fn factors(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.factors.iter().map(|(k, v)| (k.as_str(), *v))
    }

    fn mul(&self, other: &Term) -> Result<Term> {
        let coeff = self
            .coeff
            .checked_mul(other.coeff)
            .ok_or_else(|| Error::Overflow(format!("{} * {}", self.coeff, other.coeff)))?;
        let mut factors = self.factors.clone();
        for (name, exp) in &other.factors {
            let e = factors.entry(name.clone()).or_insert(0);
            *e = e
                .checked_add(*exp)
                .ok_or_else(|| Error::Overflow(format!("exponent of {name}")))?;
        }
        Ok(Term { coeff, factors })
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.factors.is_empty() {
            return write!(f, "{}", self.coeff);
        }
        match self.coeff {
            1 => {}
            -1 => write!(f, "-")?,
            c => write!(f, "{c}*")?,
        }
        for (i, (name, exp)) in self.factors.iter().enumerate() {
            if i > 0 {
                write!(f, "*")?;
            }
            if *exp == 1 {
                write!(f, "{name}")?;
            } else {
                write!(f, "{name}^{exp}")?;
            }
        }
        Ok(())
    }
}

/// A fully expanded polynomial.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Polynomial {
    terms: Vec<Term>,
}

impl Polynomial {
    /// Parses and expands polynomial text.
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_expr(&parser::parse(text)?)
    }

    /// Expands an expression tree.
    pub fn from_expr(expr: &Expr) -> Result<Self> {
        match expr {
            Expr::Int(i) => Ok(Self::from_term(Term::constant(*i))),
            Expr::Symbol(s) => Ok(Self::from_term(Term::symbol(s.clone()))),
            Expr::Neg(e) => Self::from_expr(e)?.neg(),
            Expr::Add(l, r) => Self::from_expr(l)?.add(&Self::from_expr(r)?),
            Expr::Sub(l, r) => Self::from_expr(l)?.add(&Self::from_expr(r)?.neg()?),
            Expr::Mul(l, r) => Self::from_expr(l)?.mul(&Self::from_expr(r)?),
            Expr::Pow(base, n) => Self::from_expr(base)?.pow(*n),
        }
    }

    fn from_term(term: Term) -> Self {
        let mut p = Self::default();
        // A zero constant contributes nothing.
        if term.coeff != 0 {
            p.terms.push(term);
        }
        p
    }

    /// The terms, in order of first appearance.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Adds one term, merging it into an existing like term.
    fn push(&mut self, term: Term) -> Result<()> {
        match self.terms.iter().position(|t| t.factors == term.factors) {
            Some(i) => {
                let sum = self.terms[i]
                    .coeff
                    .checked_add(term.coeff)
                    .ok_or_else(|| Error::Overflow(format!("{} + {}", self.terms[i].coeff, term.coeff)))?;
                if sum == 0 {
                    self.terms.remove(i);
                } else {
                    self.terms[i].coeff = sum;
                }
            }
            None if term.coeff != 0 => self.terms.push(term),
            None => {}
        }
        Ok(())
    }

    fn neg(mut self) -> Result<Self> {
        for term in &mut self.terms {
            term.coeff = term
                .coeff
                .checked_neg()
                .ok_or_else(|| Error::Overflow(format!("-({})", term.coeff)))?;
        }
        Ok(self)
    }

    fn add(mut self, other: &Self) -> Result<Self> {
        for term in &other.terms {
            self.push(term.clone())?;
        }
        Ok(self)
    }

    fn mul(&self, other: &Self) -> Result<Self> {
        let mut out = Self::default();
        for a in &self.terms {
            for b in &other.terms {
                out.push(a.mul(b)?)?;
            }
        }
        Ok(out)
    }

    fn pow(&self, n: u32) -> Result<Self> {
        let mut out = Self::from_term(Term::constant(1));
        for _ in 0..n {
            out = out.mul(self)?;
        }
        Ok(out)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        for (i, term) in self.terms.iter().enumerate() {
            let text = term.to_string();
            match (i, text.strip_prefix('-')) {
                (0, _) => write!(f, "{text}")?,
                (_, Some(rest)) => write!(f, " - {rest}")?,
                (_, None) => write!(f, " + {text}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expanded(text: &str) -> String {
        Polynomial::parse(text).unwrap().to_string()
    }

    #[test]
    fn test_distributes_products() {
        assert_eq!(expanded("(A0 + B1)*C2"), "A0*C2 + B1*C2");
        assert_eq!(expanded("-(A0 - B1)*C2"), "-A0*C2 + B1*C2");
    }

    #[test]
    fn test_merges_and_cancels() {
        assert_eq!(expanded("A0*B1 + B1*A0"), "2*A0*B1");
        assert_eq!(expanded("A0*B1 - B1*A0 + C2"), "C2");
        assert_eq!(expanded("A0 - A0"), "0");
    }

    #[test]
    fn test_powers() {
        assert_eq!(expanded("(A0 + B1)^2"), "A0^2 + 2*A0*B1 + B1^2");
        assert_eq!(expanded("A0**0 * B1"), "B1");
    }

    #[test]
    fn test_coefficients_and_constants() {
        let p = Polynomial::parse("3*A0 - 2 + I*B1").unwrap();
        assert_eq!(p.terms().len(), 3);
        assert_eq!(p.terms()[0].coeff(), 3);
        assert_eq!(p.terms()[1].factors().count(), 0);
        let names: Vec<&str> = p.terms()[2].factors().map(|(n, _)| n).collect();
        assert_eq!(names, ["B1", "I"]);
    }

    #[test]
    fn test_overflow_is_reported() {
        let err = Polynomial::parse("9223372036854775807*A0 + 9223372036854775807*A0").unwrap_err();
        assert!(matches!(err, Error::Overflow(_)));
    }
}
