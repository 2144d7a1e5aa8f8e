//! Flip sets found by the search.

use super::{PartialAssignment, Variable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A flip set: the included variables of a total assignment, sorted
/// canonically and without repeats.
///
/// Variables left undecided by the search are not part of the flip set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "Vec<Variable>", from = "Vec<Variable>")]
pub struct Solution {
    vars: Vec<Variable>,
}

impl Solution {
    /// Collects the included variables of an assignment.
    #[must_use]
    pub fn from_assignment(assignment: &PartialAssignment) -> Self {
        Self {
            vars: assignment.included().copied().collect(),
        }
    }

    /// Builds a flip set from any collection of variables.
    #[must_use]
    pub fn from_variables<I: IntoIterator<Item = Variable>>(vars: I) -> Self {
        let mut vars: Vec<Variable> = vars.into_iter().collect();
        vars.sort_unstable();
        vars.dedup();
        Self { vars }
    }

    #[must_use]
    pub fn variables(&self) -> &[Variable] {
        &self.vars
    }

    /// Returns the canonical variable names, e.g. `["B0", "D2"]`.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.vars.iter().map(ToString::to_string).collect()
    }

    #[must_use]
    pub fn contains(&self, var: &Variable) -> bool {
        self.vars.binary_search(var).is_ok()
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

impl From<Vec<Variable>> for Solution {
    fn from(vars: Vec<Variable>) -> Self {
        Self::from_variables(vars)
    }
}

impl From<Solution> for Vec<Variable> {
    fn from(s: Solution) -> Self {
        s.vars
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.names().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Decision;

    #[test]
    fn test_from_assignment_skips_excluded() {
        let mut a = PartialAssignment::new();
        a.decide("C1".parse().unwrap(), Decision::Included);
        a.decide("B0".parse().unwrap(), Decision::Excluded);
        a.decide("A4".parse().unwrap(), Decision::Included);
        let s = Solution::from_assignment(&a);
        assert_eq!(s.names(), ["A4", "C1"]);
        assert_eq!(s.to_string(), "[A4, C1]");
    }

    #[test]
    fn test_from_variables_sorts_and_dedups() {
        let vars = ["D2", "B0", "D2"].iter().map(|n| n.parse().unwrap());
        let s = Solution::from_variables(vars);
        assert_eq!(s.names(), ["B0", "D2"]);
        assert!(s.contains(&"B0".parse().unwrap()));
    }

    #[test]
    fn test_serializes_as_names() {
        let s = Solution::from_variables(["C1".parse().unwrap()]);
        assert_eq!(serde_json::to_string(&s).unwrap(), r#"["C1"]"#);
    }
}
