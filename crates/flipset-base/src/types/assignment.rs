//! Partial assignments built up during the search.

use super::Variable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What a partial assignment says about one variable.
///
/// Variables without a decision are undecided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// The variable belongs to the flip set.
    Included,
    /// The variable must stay out of the flip set.
    Excluded,
}

impl Decision {
    #[must_use]
    pub const fn from_bool(included: bool) -> Self {
        if included {
            Self::Included
        } else {
            Self::Excluded
        }
    }

    #[must_use]
    pub const fn is_included(self) -> bool {
        matches!(self, Self::Included)
    }
}

/// Decisions for the variables seen so far. A missing key is undecided.
///
/// A recorded decision is never replaced by its opposite: [`decide`]
/// refuses contradicting updates.
///
/// [`decide`]: PartialAssignment::decide
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartialAssignment {
    decisions: BTreeMap<Variable, Decision>,
}

impl PartialAssignment {
    /// Creates an assignment with every variable undecided.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the decision for a variable (None if undecided).
    #[must_use]
    pub fn get(&self, var: &Variable) -> Option<Decision> {
        self.decisions.get(var).copied()
    }

    /// True if the variable has been decided either way.
    #[must_use]
    pub fn is_decided(&self, var: &Variable) -> bool {
        self.decisions.contains_key(var)
    }

    /// Records a decision.
    ///
    /// Returns false, leaving the assignment unchanged, if the variable was
    /// already decided the other way.
    pub fn decide(&mut self, var: Variable, decision: Decision) -> bool {
        match self.decisions.get(&var) {
            Some(&existing) if existing != decision => false,
            _ => {
                self.decisions.insert(var, decision);
                true
            }
        }
    }

    /// Iterates over decided variables in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&Variable, Decision)> + '_ {
        self.decisions.iter().map(|(v, d)| (v, *d))
    }

    /// Iterates over included variables in canonical order.
    pub fn included(&self) -> impl Iterator<Item = &Variable> + '_ {
        self.iter()
            .filter_map(|(v, d)| d.is_included().then_some(v))
    }

    /// Number of decided variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(name: &str) -> Variable {
        name.parse().unwrap()
    }

    #[test]
    fn test_undecided_by_default() {
        let a = PartialAssignment::new();
        assert_eq!(a.get(&var("B0")), None);
        assert!(!a.is_decided(&var("B0")));
        assert!(a.is_empty());
    }

    #[test]
    fn test_decide_refuses_contradiction() {
        let mut a = PartialAssignment::new();
        assert!(a.decide(var("B0"), Decision::Included));
        assert!(a.decide(var("B0"), Decision::Included));
        assert!(!a.decide(var("B0"), Decision::Excluded));
        assert_eq!(a.get(&var("B0")), Some(Decision::Included));
    }

    #[test]
    fn test_included_is_sorted() {
        let mut a = PartialAssignment::new();
        a.decide(var("D2"), Decision::Included);
        a.decide(var("C1"), Decision::Excluded);
        a.decide(var("B0"), Decision::Included);
        let inc: Vec<String> = a.included().map(ToString::to_string).collect();
        assert_eq!(inc, ["B0", "D2"]);
        assert_eq!(a.len(), 3);
    }
}
