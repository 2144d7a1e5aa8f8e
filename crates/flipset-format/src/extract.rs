//! Monomial extraction: from expanded polynomials to the variable lists
//! the search works on.

use crate::expand::{Polynomial, Term};
use flipset_base::{Alphabet, Monomial, Result, Variable};
use std::collections::BTreeMap;
use tracing::debug;

/// Keeps the factors of `term` that are variables of `valid`.
///
/// Numeric coefficients, symbols that are not variable names (such as the
/// imaginary unit `I`) and variables outside `valid` are dropped. A
/// variable raised to an even power keeps its sign under negation, so it is
/// dropped as well; an odd power counts once. This departs from keeping only
/// bare symbol factors, which would drop `B0^3` along with `B0^2`. The
/// result is in canonical variable order.
pub fn term_monomial(term: &Term, valid: &Alphabet) -> Result<Monomial> {
    // `B0` and `B_0` name the same variable, so exponents are summed per
    // variable before the parity test.
    let mut exponents: BTreeMap<Variable, u32> = BTreeMap::new();
    for (name, exp) in term.factors() {
        if let Ok(var) = name.parse::<Variable>() {
            if valid.contains(&var) {
                *exponents.entry(var).or_insert(0) += exp;
            }
        }
    }
    let vars = exponents
        .into_iter()
        .filter(|(_, exp)| exp % 2 == 1)
        .map(|(var, _)| var)
        .collect();
    Monomial::new(vars)
}

/// Extracts one monomial per term, polynomial by polynomial.
pub fn monomials_of(polynomials: &[Polynomial], valid: &Alphabet) -> Result<Vec<Monomial>> {
    let mut result = Vec::new();
    for (index, polynomial) in polynomials.iter().enumerate() {
        for term in polynomial.terms() {
            result.push(term_monomial(term, valid)?);
        }
        debug!(
            polynomial = index,
            terms = polynomial.terms().len(),
            "Extracted monomials"
        );
    }
    Ok(result)
}

/// Parses, expands and extracts a list of polynomial texts.
pub fn extract_monomials<S: AsRef<str>>(polynomials: &[S], valid: &Alphabet) -> Result<Vec<Monomial>> {
    let parsed = polynomials
        .iter()
        .map(|text| Polynomial::parse(text.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    monomials_of(&parsed, valid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flipset_base::Error;

    fn strings(ms: &[Monomial]) -> Vec<String> {
        ms.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_filters_by_alphabet() {
        let valid = Alphabet::grid("ABCD", 5).unwrap().without_classes("A");
        let ms = extract_monomials(&["A0*B1*C2 - 2*A1*D0*B4"], &valid).unwrap();
        assert_eq!(strings(&ms), ["[B1, C2]", "[B4, D0]"]);
    }

    #[test]
    fn test_concatenates_polynomials_in_order() {
        let valid = Alphabet::grid("BCD", 5).unwrap();
        let ms = extract_monomials(&["B0*C1", "C1*D2 + B3", "I*D4"], &valid).unwrap();
        assert_eq!(strings(&ms), ["[B0, C1]", "[C1, D2]", "[B3]", "[D4]"]);
    }

    #[test]
    fn test_even_powers_drop_out() {
        let valid = Alphabet::grid("BC", 5).unwrap();
        let ms = extract_monomials(&["B0^2*C1 + B1^3*C2"], &valid).unwrap();
        assert_eq!(strings(&ms), ["[C1]", "[B1, C2]"]);
    }

    #[test]
    fn test_underscore_names() {
        let valid = Alphabet::grid("BC", 5).unwrap();
        let ms = extract_monomials(&["B_0*C_3", "B_0*B0*C1"], &valid).unwrap();
        assert_eq!(strings(&ms), ["[B0, C3]", "[C1]"]);
    }

    #[test]
    fn test_constant_term_gives_empty_monomial() {
        let valid = Alphabet::grid("B", 5).unwrap();
        let ms = extract_monomials(&["B0 + 7"], &valid).unwrap();
        assert_eq!(strings(&ms), ["[B0]", "[]"]);
    }

    #[test]
    fn test_oversized_term_is_an_error() {
        let valid = Alphabet::grid("B", 6).unwrap();
        let err = extract_monomials(&["B0*B1*B2*B3*B4*B5"], &valid).unwrap_err();
        assert!(matches!(err, Error::MonomialTooLong { len: 6, .. }));
    }
}
