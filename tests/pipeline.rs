//! End-to-end exercise of the parse -> construct -> tabu -> write pipeline
//! over an in-memory instance, the same shape `main` drives over stdin and
//! stdout.

use daytour::{construct, instance, tabu};
use std::io::Cursor;
use std::time::Duration;

/// Long enough to exercise a handful of tabu iterations on these tiny
/// instances without paying out the real 29-second production budget.
const TEST_BUDGET: Duration = Duration::from_millis(50);

const TRIANGLE: &str = "\
AAA
AAA BBB 0 1
AAA CCC 0 2
BBB CCC 1 1
CCC BBB 1 3
CCC AAA 2 1
BBB AAA 2 2
";

#[test]
fn parses_solves_and_writes_a_feasible_instance() {
    let mut reader = Cursor::new(TRIANGLE);
    let parsed = instance::parse_from(&mut reader).unwrap();

    let (tour, cost) = construct::greedy_tour(&parsed.graph, parsed.start).unwrap();
    assert_eq!(cost, 3);

    let (best, best_cost) = tabu::search_with_budget(&parsed.graph, tour, cost, TEST_BUDGET);
    assert!(best_cost <= cost);

    let mut out = Vec::new();
    instance::write_tour(&mut out, &parsed.graph, &best).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.first(), Some(&best_cost.to_string().as_str()));
    assert_eq!(lines.len(), 1 + best.len());
}

#[test]
fn solve_chains_construction_and_search() {
    let mut reader = Cursor::new(TRIANGLE);
    let parsed = instance::parse_from(&mut reader).unwrap();
    let (tour, cost) = construct::greedy_tour(&parsed.graph, parsed.start).unwrap();
    let (tour, cost) = tabu::search_with_budget(&parsed.graph, tour, cost, TEST_BUDGET);
    assert_eq!(tour.cost(), cost);
    assert!(tour.is_hamiltonian());
    assert!(tour.is_closed());
}

#[test]
fn an_infeasible_instance_is_reported_without_a_parse_error() {
    let text = "\
AAA
AAA BBB 0 1
BBB CCC 1 1
";
    let mut reader = Cursor::new(text);
    let parsed = instance::parse_from(&mut reader).unwrap();
    let err = construct::greedy_tour(&parsed.graph, parsed.start).unwrap_err();
    assert!(matches!(err, daytour::error::TourError::Infeasible(_)));
}

#[test]
fn a_malformed_instance_is_a_parse_error() {
    let text = "AAA\nAAA BBB notaday 1\n";
    let mut reader = Cursor::new(text);
    let err = instance::parse_from(&mut reader).unwrap_err();
    assert!(matches!(err, daytour::error::TourError::Parse(_)));
}
