//! Single-pass greedy coloring.
//!
//! Vertices are colored in index order; each takes the minimum excluded value (mex) of
//! the colors already held by its neighbors. Colors are 0-based. The result is an upper
//! bound on the chromatic number, never below it, and at most `max_degree + 1`.

use log::trace;

use crate::graph::Graph;

/// Colors every vertex greedily and returns the assignment, indexed by vertex id.
pub fn greedy_coloring(graph: &Graph) -> Vec<usize> {
    let n = graph.vertex_count();
    let mut coloring: Vec<Option<usize>> = vec![None; n];
    // `taken[c] == v` marks color `c` as used by a neighbor of the current vertex `v`.
    let mut taken: Vec<usize> = Vec::new();

    for v in 0..n {
        for u in graph.neighbors(v) {
            if let Some(c) = coloring[u] {
                if c >= taken.len() {
                    taken.resize(c + 1, usize::MAX);
                }
                taken[c] = v;
            }
        }
        let color = mex(&taken, v);
        trace!("greedy: vertex {v} -> color {color}");
        coloring[v] = Some(color);
    }

    coloring.into_iter().flatten().collect()
}

/// Number of distinct colors in a greedy assignment (`1 + max`, or 0 if empty).
pub fn color_count(coloring: &[usize]) -> usize {
    coloring.iter().max().map_or(0, |&c| c + 1)
}

/// Returns `true` iff the greedy heuristic uses at most `k` colors, i.e. its largest
/// 0-based color is `< k`. An empty graph needs no colors.
///
/// A `true` answer is always sound: the greedy assignment is itself a proper coloring
/// with at most `k` colors. A `false` answer only means the heuristic failed.
pub fn is_greedy_colorable(graph: &Graph, k: usize) -> bool {
    let coloring = greedy_coloring(graph);
    color_count(&coloring) <= k
}

/// Smallest color not marked as taken for vertex `v`.
#[inline]
fn mex(taken: &[usize], v: usize) -> usize {
    taken.iter().position(|&owner| owner != v).unwrap_or(taken.len())
}

// ============================================================================
// Tests
// ============================================================================
