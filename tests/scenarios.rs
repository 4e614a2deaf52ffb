//! End-to-end scenarios against the public API.

use erdos::prelude::*;
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

#[test]
fn edgeless_graph_scenario() {
    let mut rng = XorShiftRng::seed_from_u64(42);
    let g = build_graph(5, 0.0, &mut rng).unwrap();
    assert_eq!(fraction_in_k_core(&g, 1).unwrap(), 0.0);
    assert!(is_exactly_colorable(&g, 1).unwrap());
}

#[test]
fn triangle_scenario() {
    let mut g = Graph::new(3);
    g.add_edge(0, 1).unwrap();
    g.add_edge(1, 2).unwrap();
    g.add_edge(0, 2).unwrap();
    assert!(!is_exactly_colorable(&g, 2).unwrap());
    assert!(is_exactly_colorable(&g, 3).unwrap());
    assert!(is_greedy_colorable(&g, 3));
    assert_eq!(fraction_in_k_core(&g, 2).unwrap(), 1.0);
}

#[test]
fn star_scenario() {
    let mut g = Graph::new(4);
    for leaf in 1..4 {
        g.add_edge(0, leaf).unwrap();
    }
    assert_eq!(fraction_in_k_core(&g, 2).unwrap(), 0.0);
    assert_eq!(fraction_in_k_core(&g, 1).unwrap(), 1.0);
}

#[test]
fn complete_sampling_reaches_double_degree() {
    let n = 9;
    let g = build_graph(n, 1.0, &mut XorShiftRng::seed_from_u64(9)).unwrap();
    for v in 0..n {
        assert_eq!(g.degree(v), 2 * (n - 1));
    }
    for k in 1..=2 * (n - 1) {
        assert_eq!(fraction_in_k_core(&g, k).unwrap(), 1.0);
    }
}

#[test]
fn errors_are_classified() {
    let mut rng = XorShiftRng::seed_from_u64(1);
    assert_eq!(
        build_graph(4, 1.5, &mut rng).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
    assert_eq!(
        Graph::new(3).add_edge(2, 2).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
    assert_eq!(
        fraction_in_k_core(&Graph::new(0), 1).unwrap_err().kind(),
        ErrorKind::EmptyGraph
    );
}

#[test]
fn analyzers_share_one_graph_without_interference() {
    let g = build_graph(40, 0.03, &mut XorShiftRng::seed_from_u64(0xABCD)).unwrap();
    let snapshot = g.clone();

    let first = fraction_in_k_core(&g, 2).unwrap();
    let greedy = is_greedy_colorable(&g, 4);
    let exact = ExactColorer::new(&g)
        .with_limits(SearchLimits::with_node_budget(5_000_000))
        .is_colorable(4)
        .unwrap();
    let second = fraction_in_k_core(&g, 2).unwrap();

    assert_eq!(first, second);
    assert!(!greedy || exact);
    assert_eq!(g, snapshot);
}

#[test]
fn edge_list_round_trip_through_parser() {
    let text = "4\n0 1\n0 2\n0 3\n";
    let g = parse_edge_list(text).unwrap();
    assert_eq!(fraction_in_k_core(&g, 2).unwrap(), 0.0);
    assert_eq!(greedy_coloring(&g), vec![0, 1, 1, 1]);
}
