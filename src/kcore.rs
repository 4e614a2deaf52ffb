//! k-core survivor fraction via depth-first degree peeling.
//!
//! The peel walks the graph depth-first and keeps one shared, signed degree array:
//! - on the way down, a vertex that is already below `k` charges one unit to every
//!   neighbor it scans (its edges are about to disappear);
//! - on the way back up, a child that finished below `k` charges one unit to its
//!   parent (the tree edge disappears from the parent's side).
//!
//! Traversal is seeded at the minimum-degree vertex (lowest index on ties) and then
//! restarted from every still-unvisited vertex in index order. The recursion is
//! unrolled onto an explicit frame stack, so depth is bounded by heap memory rather
//! than by the thread's call stack; visit and decrement order match the recursive form.

use log::debug;

use crate::error::{AnalysisError, Result};
use crate::graph::Graph;

// ============================================================================
// Public API
// ============================================================================

/// Fraction of vertices whose residual degree is still `>= k` after peeling.
///
/// Returns `1.0` for `k == 0` on any non-empty graph.
///
/// # Errors
/// - [`AnalysisError::EmptyGraph`] if the graph has no vertices.
/// - [`AnalysisError::ResourceExhausted`] if the working arrays cannot be allocated.
pub fn fraction_in_k_core(graph: &Graph, k: usize) -> Result<f64> {
    Ok(KCoreAnalyzer::new(graph).peel(k)?.fraction())
}

/// Runs k-core peels against a borrowed graph.
///
/// Each call to [`KCoreAnalyzer::peel`] allocates its own degree and visited arrays, so
/// one analyzer can be queried repeatedly with different `k`.
#[derive(Clone, Copy, Debug)]
pub struct KCoreAnalyzer<'g> {
    graph: &'g Graph,
}

/// Result of one peel: the residual degree of every vertex.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PeelOutcome {
    k: i64,
    degrees: Vec<i64>,
}

impl PeelOutcome {
    /// Residual degree of `v` after peeling. May be negative.
    pub fn residual_degree(&self, v: usize) -> i64 {
        self.degrees[v]
    }

    /// Residual degrees for all vertices, indexed by vertex id.
    pub fn residual_degrees(&self) -> &[i64] {
        &self.degrees
    }

    /// Returns `true` if `v` kept degree `>= k`.
    pub fn is_survivor(&self, v: usize) -> bool {
        self.degrees[v] >= self.k
    }

    /// Surviving vertices in increasing order.
    pub fn survivors(&self) -> impl Iterator<Item = usize> + '_ {
        self.degrees
            .iter()
            .enumerate()
            .filter(|&(_, &d)| d >= self.k)
            .map(|(v, _)| v)
    }

    /// Number of surviving vertices.
    pub fn survivor_count(&self) -> usize {
        self.degrees.iter().filter(|&&d| d >= self.k).count()
    }

    /// `survivor_count / n`. The outcome of a peel always has `n > 0`.
    pub fn fraction(&self) -> f64 {
        self.survivor_count() as f64 / self.degrees.len() as f64
    }
}

// ============================================================================
// Peeling
// ============================================================================

/// One suspended `visit(vertex)`: the next adjacency position to scan.
#[derive(Clone, Copy, Debug)]
struct Frame {
    vertex: usize,
    cursor: usize,
}

/// Per-call working state.
struct PeelState {
    k: i64,
    degree: Vec<i64>,
    visited: Vec<bool>,
    stack: Vec<Frame>,
}

impl<'g> KCoreAnalyzer<'g> {
    /// Wraps `graph` for peeling.
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// Peels the graph at threshold `k` and returns the residual degrees.
    ///
    /// # Errors
    /// - [`AnalysisError::EmptyGraph`] if the graph has no vertices.
    /// - [`AnalysisError::ResourceExhausted`] if the working arrays cannot be allocated.
    pub fn peel(&self, k: usize) -> Result<PeelOutcome> {
        let n = self.graph.vertex_count();
        let Some(seed) = self.graph.min_degree_vertex() else {
            return Err(AnalysisError::EmptyGraph);
        };

        let mut state = PeelState::allocate(self.graph, k)?;
        self.visit_from(seed, &mut state);
        for v in 0..n {
            if !state.visited[v] {
                self.visit_from(v, &mut state);
            }
        }

        let outcome = PeelOutcome {
            k: state.k,
            degrees: state.degree,
        };
        debug!(
            "k-core peel (k={k}, seed={seed}): {}/{n} vertices survive",
            outcome.survivor_count()
        );
        Ok(outcome)
    }

    /// Depth-first visit rooted at `root`, which must be unvisited.
    fn visit_from(&self, root: usize, st: &mut PeelState) {
        debug_assert!(!st.visited[root]);
        debug_assert!(st.stack.is_empty());

        st.visited[root] = true;
        st.stack.push(Frame {
            vertex: root,
            cursor: 0,
        });

        while let Some(frame) = st.stack.last_mut() {
            let v = frame.vertex;
            if let Some(&u) = self.graph.neighbor_slice(v).get(frame.cursor) {
                frame.cursor += 1;
                if st.degree[v] < st.k {
                    st.degree[u] -= 1;
                }
                if !st.visited[u] {
                    st.visited[u] = true;
                    st.stack.push(Frame { vertex: u, cursor: 0 });
                }
            } else {
                st.stack.pop();
                // A child that ends below k retracts the tree edge from its parent.
                if st.degree[v] < st.k {
                    if let Some(parent) = st.stack.last() {
                        st.degree[parent.vertex] -= 1;
                    }
                }
            }
        }
    }
}

impl PeelState {
    fn allocate(graph: &Graph, k: usize) -> Result<Self> {
        let n = graph.vertex_count();

        let mut degree = Vec::new();
        degree
            .try_reserve_exact(n)
            .map_err(|_| AnalysisError::alloc_failed("degree array", n))?;
        degree.extend((0..n).map(|v| graph.degree(v) as i64));

        let mut visited = Vec::new();
        visited
            .try_reserve_exact(n)
            .map_err(|_| AnalysisError::alloc_failed("visited marks", n))?;
        visited.resize(n, false);

        // Every vertex is pushed at most once, so n frames never reallocate.
        let mut stack = Vec::new();
        stack
            .try_reserve_exact(n)
            .map_err(|_| AnalysisError::alloc_failed("traversal stack", n))?;

        Ok(Self {
            k: i64::try_from(k).unwrap_or(i64::MAX),
            degree,
            visited,
            stack,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_graph;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    /// Direct recursive transcription of the peel, used as an oracle.
    fn reference_peel(g: &Graph, k: i64) -> Vec<i64> {
        fn visit(g: &Graph, v: usize, k: i64, marked: &mut [bool], degree: &mut [i64]) -> bool {
            marked[v] = true;
            for u in g.neighbors(v) {
                if degree[v] < k {
                    degree[u] -= 1;
                }
                if !marked[u] && visit(g, u, k, marked, degree) {
                    degree[v] -= 1;
                }
            }
            degree[v] < k
        }

        let n = g.vertex_count();
        let mut degree: Vec<i64> = (0..n).map(|v| g.degree(v) as i64).collect();
        let mut marked = vec![false; n];
        let start = g.min_degree_vertex().unwrap();
        visit(g, start, k, &mut marked, &mut degree);
        for v in 0..n {
            if !marked[v] {
                visit(g, v, k, &mut marked, &mut degree);
            }
        }
        degree
    }

    fn star() -> Graph {
        Graph::from_edges(4, [(0, 1), (0, 2), (0, 3)]).unwrap()
    }

    #[test]
    fn empty_graph_is_an_error() {
        assert_eq!(
            fraction_in_k_core(&Graph::new(0), 1),
            Err(AnalysisError::EmptyGraph)
        );
        assert_eq!(
            fraction_in_k_core(&Graph::new(0), 0),
            Err(AnalysisError::EmptyGraph)
        );
    }

    #[test]
    fn k_zero_keeps_everything() {
        let mut rng = XorShiftRng::seed_from_u64(0xDE17A);
        for p in [0.0, 0.05, 0.3] {
            let g = build_graph(25, p, &mut rng).unwrap();
            assert_eq!(fraction_in_k_core(&g, 0).unwrap(), 1.0);
        }
    }

    #[test]
    fn edgeless_graph_peels_completely() {
        let g = Graph::new(5);
        assert_eq!(fraction_in_k_core(&g, 1).unwrap(), 0.0);
        assert_eq!(fraction_in_k_core(&g, 7).unwrap(), 0.0);
    }

    #[test]
    fn star_graph_peels_at_two() {
        let g = star();
        assert_eq!(fraction_in_k_core(&g, 2).unwrap(), 0.0);
        assert_eq!(fraction_in_k_core(&g, 1).unwrap(), 1.0);
    }

    #[test]
    fn star_residual_degrees_follow_the_traversal() {
        // Seed is vertex 1. Leaves 2 and 3 each charge the center twice: once while
        // scanning it below k and once when their frame pops.
        let outcome = KCoreAnalyzer::new(&star()).peel(2).unwrap();
        assert_eq!(outcome.residual_degrees(), &[-2, 0, 1, 0]);
        assert_eq!(outcome.survivor_count(), 0);
    }

    #[test]
    fn triangle_with_pendant() {
        // 0-1-2 triangle, 3 hangs off 0.
        let g = Graph::from_edges(4, [(0, 1), (1, 2), (0, 2), (0, 3)]).unwrap();
        let outcome = KCoreAnalyzer::new(&g).peel(2).unwrap();
        assert_eq!(outcome.survivors().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert!(!outcome.is_survivor(3));
        assert_eq!(outcome.fraction(), 0.75);
    }

    #[test]
    fn complete_multigraph_survives_up_to_its_degree() {
        let n = 7;
        let g = build_graph(n, 1.0, &mut XorShiftRng::seed_from_u64(5)).unwrap();
        for k in 0..=2 * (n - 1) {
            assert_eq!(fraction_in_k_core(&g, k).unwrap(), 1.0, "k={k}");
        }
        assert_eq!(fraction_in_k_core(&g, 2 * n - 1).unwrap(), 0.0);
    }

    #[test]
    fn disconnected_components_are_all_visited() {
        // Two triangles plus an isolated vertex.
        let g = Graph::from_edges(7, [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]).unwrap();
        let outcome = KCoreAnalyzer::new(&g).peel(2).unwrap();
        assert_eq!(outcome.survivors().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn huge_k_removes_everything() {
        let g = star();
        assert_eq!(fraction_in_k_core(&g, usize::MAX).unwrap(), 0.0);
    }

    #[test]
    fn iterative_peel_matches_recursive_reference() {
        let mut rng = XorShiftRng::seed_from_u64(0xF11B);
        for case in 0..60 {
            let n = 1 + case % 30;
            let p = [0.02, 0.05, 0.1, 0.2, 0.4][case % 5];
            let g = build_graph(n, p, &mut rng).unwrap();
            for k in 0..6usize {
                let expect = reference_peel(&g, k as i64);
                let got = KCoreAnalyzer::new(&g).peel(k).unwrap();
                assert_eq!(got.residual_degrees(), expect.as_slice(), "n={n} p={p} k={k}");
            }
        }
    }

    #[test]
    fn deep_path_does_not_overflow_the_stack() {
        let n = 200_000;
        let g = Graph::from_edges(n, (1..n).map(|v| (v - 1, v))).unwrap();
        assert_eq!(fraction_in_k_core(&g, 2).unwrap(), 0.0);
        assert_eq!(fraction_in_k_core(&g, 1).unwrap(), 1.0);
    }

    #[test]
    fn peel_does_not_mutate_the_graph() {
        let g = build_graph(20, 0.2, &mut XorShiftRng::seed_from_u64(0x5AFE)).unwrap();
        let before = g.clone();
        let _ = fraction_in_k_core(&g, 3).unwrap();
        assert_eq!(g, before);
    }
}
