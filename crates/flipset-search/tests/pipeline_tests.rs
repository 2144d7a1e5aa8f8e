//! End-to-end tests: problem document → monomials → flip sets.

use flipset_base::{Error, PartialAssignment};
use flipset_format::Problem;
use flipset_search::verify::{brute_force, flips_all};
use flipset_search::{BacktrackingSearch, MonomialOrder, SearchConfig, SearchOutcome};
use std::path::PathBuf;

fn sample() -> Problem {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/sample_problem.json");
    Problem::from_path(path).expect("sample problem should load")
}

fn solve(problem: &Problem, s: usize, exhaustive: bool) -> Result<SearchOutcome, Error> {
    let config = SearchConfig {
        exhaustive,
        order: MonomialOrder::Reverse,
    };
    BacktrackingSearch::new(config).run(
        s,
        &problem.valid_alphabet(s)?,
        &problem.monomials(s)?,
        &PartialAssignment::new(),
    )
}

// =============================================================================
// Sample Document
// =============================================================================

#[test]
fn test_cycle_with_all_classes() {
    let p = sample();
    assert_eq!(solve(&p, 0, false).unwrap().names(), vec![vec!["A0", "C2"]]);
    assert_eq!(
        solve(&p, 0, true).unwrap().names(),
        vec![vec!["A0", "C2"], vec!["B1", "D3"]]
    );
}

#[test]
fn test_nonzero_index_drops_class_a() {
    let p = sample();
    let monomials: Vec<String> = p.monomials(1).unwrap().iter().map(ToString::to_string).collect();
    assert_eq!(monomials, ["[B1]", "[B1, C2]", "[C2, D3]", "[D3]"]);
    assert_eq!(solve(&p, 1, true).unwrap().names(), vec![vec!["B1", "D3"]]);
}

#[test]
fn test_five_variable_term() {
    let p = sample();
    let first = solve(&p, 2, false).unwrap();
    assert_eq!(first.names(), vec![vec!["B1", "B2"]]);

    let all = solve(&p, 2, true).unwrap();
    assert_eq!(all.solutions.len(), 8);
    let monomials = p.monomials(2).unwrap();
    for solution in &all.solutions {
        assert!(flips_all(solution, &monomials));
    }
    assert_eq!(brute_force(&monomials).unwrap().len(), 8);
}

#[test]
fn test_odd_cycle_has_no_flip_set() {
    let p = sample();
    let outcome = solve(&p, 3, true).unwrap();
    assert!(outcome.solutions.is_empty());
    assert!(outcome.stats.pruned > 0);
}

// =============================================================================
// Error Paths
// =============================================================================

#[test]
fn test_oversized_term_aborts_the_index() {
    let p = Problem::from_json(
        r#"{ "entries": [ { "s": 0, "polynomials": ["B0*B1*B2*B3*B4*C0 + D0"] } ] }"#,
    )
    .unwrap();
    assert!(matches!(
        solve(&p, 0, true),
        Err(Error::MonomialTooLong { len: 6, max: 5 })
    ));
}

#[test]
fn test_missing_index() {
    let p = sample();
    assert!(matches!(solve(&p, 9, false), Err(Error::UnknownIndex(9))));
}
