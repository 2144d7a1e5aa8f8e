//! Problem documents: the polynomials to search over, per index `s`.
//!
//! ```json
//! {
//!   "classes": "ABCD",
//!   "width": 5,
//!   "excluded_for_nonzero_s": "A",
//!   "entries": [
//!     { "s": 0, "polynomials": ["A0*A1*A2*A3*A4 - A0*B1*B4*C2*C3", "..."] }
//!   ]
//! }
//! ```

use crate::extract::extract_monomials;
use flipset_base::{Alphabet, Error, Monomial, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

fn default_classes() -> String {
    "ABCD".to_string()
}

const fn default_width() -> u16 {
    5
}

/// The polynomials defined for one index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemEntry {
    /// Index of the polynomial family, e.g. `0 <= s < 16`.
    pub s: usize,
    /// Polynomial texts, typically `a[s]`, `b[s]`, `c[s]`, `d[s]`.
    pub polynomials: Vec<String>,
}

/// The problem document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// Variable class letters.
    #[serde(default = "default_classes")]
    pub classes: String,
    /// Number of indices per class.
    #[serde(default = "default_width")]
    pub width: u16,
    /// Classes that may not be part of a flip set when `s != 0`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub excluded_for_nonzero_s: String,
    /// Polynomials per index.
    pub entries: Vec<ProblemEntry>,
}

impl Problem {
    /// Creates an empty document over the `ABCD` x 5 alphabet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            classes: default_classes(),
            width: default_width(),
            excluded_for_nonzero_s: String::new(),
            entries: Vec::new(),
        }
    }

    /// Parses from JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Serializes to JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Parses from JSON reader.
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Reads a document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Every variable the document can mention.
    pub fn alphabet(&self) -> Result<Alphabet> {
        Alphabet::grid(&self.classes, self.width)
    }

    /// The variables allowed in a flip set for index `s`.
    pub fn valid_alphabet(&self, s: usize) -> Result<Alphabet> {
        let full = self.alphabet()?;
        Ok(if s == 0 {
            full
        } else {
            full.without_classes(&self.excluded_for_nonzero_s)
        })
    }

    /// Looks up the entry for `s`.
    pub fn entry(&self, s: usize) -> Result<&ProblemEntry> {
        self.entries
            .iter()
            .find(|e| e.s == s)
            .ok_or(Error::UnknownIndex(s))
    }

    /// Indices in document order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().map(|e| e.s)
    }

    /// The monomial list for `s`, restricted to [`valid_alphabet`].
    ///
    /// [`valid_alphabet`]: Problem::valid_alphabet
    pub fn monomials(&self, s: usize) -> Result<Vec<Monomial>> {
        let entry = self.entry(s)?;
        extract_monomials(&entry.polynomials, &self.valid_alphabet(s)?)
    }
}

impl Default for Problem {
    fn default() -> Self {
        Self::new()
    }
}
