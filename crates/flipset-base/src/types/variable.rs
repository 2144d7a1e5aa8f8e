//! Variables and alphabets.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A symbolic variable: a class letter plus an index, e.g. `C1`.
///
/// The derived ordering (class first, then index) is the canonical order
/// used for enumeration and for rendering solutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Variable {
    class: char,
    index: u16,
}

impl Variable {
    /// Creates a variable. The class must be an ASCII letter and is stored
    /// upper-cased.
    pub fn new(class: char, index: u16) -> Result<Self> {
        if !class.is_ascii_alphabetic() {
            return Err(Error::InvalidVariable(format!("{class}{index}")));
        }
        Ok(Self {
            class: class.to_ascii_uppercase(),
            index,
        })
    }

    /// Returns the class letter.
    #[must_use]
    pub const fn class(&self) -> char {
        self.class
    }

    /// Returns the index within the class.
    #[must_use]
    pub const fn index(&self) -> u16 {
        self.index
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.class, self.index)
    }
}

impl FromStr for Variable {
    type Err = Error;

    /// Accepts both `C1` and `C_1`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidVariable(s.to_string());
        let mut chars = s.trim().chars();
        let class = chars.next().ok_or_else(invalid)?;
        let rest = chars.as_str();
        let digits = rest.strip_prefix('_').unwrap_or(rest);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let index = digits.parse().map_err(|_| invalid())?;
        Self::new(class, index).map_err(|_| invalid())
    }
}

impl From<Variable> for String {
    fn from(var: Variable) -> Self {
        var.to_string()
    }
}

impl TryFrom<String> for Variable {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// The ordered set of variables a search is allowed to use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Alphabet {
    vars: BTreeSet<Variable>,
}

impl Alphabet {
    /// Creates an empty alphabet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the `classes` x `0..width` grid, e.g. `grid("ABCD", 5)` gives
    /// `A0..A4, B0..B4, C0..C4, D0..D4`.
    pub fn grid(classes: &str, width: u16) -> Result<Self> {
        let mut vars = BTreeSet::new();
        for class in classes.chars() {
            for index in 0..width {
                vars.insert(Variable::new(class, index)?);
            }
        }
        Ok(Self { vars })
    }

    /// Returns a copy with every variable of the given classes removed.
    #[must_use]
    pub fn without_classes(&self, classes: &str) -> Self {
        let drop: Vec<char> = classes.chars().map(|c| c.to_ascii_uppercase()).collect();
        self.vars
            .iter()
            .filter(|v| !drop.contains(&v.class()))
            .copied()
            .collect()
    }

    /// Adds a variable, returning false if it was already present.
    pub fn insert(&mut self, var: Variable) -> bool {
        self.vars.insert(var)
    }

    #[must_use]
    pub fn contains(&self, var: &Variable) -> bool {
        self.vars.contains(var)
    }

    /// Iterates in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &Variable> + '_ {
        self.vars.iter()
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

impl FromIterator<Variable> for Alphabet {
    fn from_iter<I: IntoIterator<Item = Variable>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().collect(),
        }
    }
}
