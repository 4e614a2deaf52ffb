//! Algebraic properties of the analyzers on arbitrary small multigraphs.

use erdos::exact::is_exactly_colorable;
use erdos::graph::Graph;
use erdos::greedy::{color_count, greedy_coloring, is_greedy_colorable};
use erdos::kcore::fraction_in_k_core;
use erdos::validate::find_conflict;
use proptest::prelude::*;

/// Small multigraphs: up to 8 vertices, up to 20 insertions, self-loops dropped.
fn small_graph() -> impl Strategy<Value = Graph> {
    (1usize..=8)
        .prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..20)))
        .prop_map(|(n, edges)| {
            Graph::from_edges(n, edges.into_iter().filter(|(u, v)| u != v))
                .expect("edges are in range and loop-free")
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn k_zero_core_is_everything(g in small_graph()) {
        prop_assert_eq!(fraction_in_k_core(&g, 0).unwrap(), 1.0);
    }

    #[test]
    fn core_fraction_is_a_fraction(g in small_graph(), k in 0usize..6) {
        let f = fraction_in_k_core(&g, k).unwrap();
        prop_assert!((0.0..=1.0).contains(&f));
    }

    #[test]
    fn add_edge_is_symmetric(g in small_graph(), a in 0usize..8, b in 0usize..8) {
        let mut g = g;
        let n = g.vertex_count();
        let (u, v) = (a % n, b % n);
        prop_assume!(u != v);
        g.add_edge(u, v).unwrap();
        prop_assert!(g.neighbors(u).any(|w| w == v));
        prop_assert!(g.neighbors(v).any(|w| w == u));
    }

    #[test]
    fn greedy_is_proper_and_within_grundy_bound(g in small_graph()) {
        let coloring = greedy_coloring(&g);
        prop_assert!(find_conflict(&g, &coloring).is_none());
        prop_assert!(color_count(&coloring) <= g.max_degree() + 1);
    }

    #[test]
    fn exact_is_monotone_in_k(g in small_graph(), k in 0usize..5) {
        if is_exactly_colorable(&g, k).unwrap() {
            prop_assert!(is_exactly_colorable(&g, k + 1).unwrap());
        }
    }

    #[test]
    fn greedy_success_implies_exact_success(g in small_graph(), k in 0usize..6) {
        if is_greedy_colorable(&g, k) {
            prop_assert!(is_exactly_colorable(&g, k).unwrap());
        }
    }
}
