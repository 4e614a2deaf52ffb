//! Deterministic checks for color assignments.

use crate::graph::Graph;

// ============================================================================
// Public API
// ============================================================================

/// Returns the first edge `(u, v)` (scanning `u` in index order) whose endpoints share a
/// color, or `None` if the assignment is proper.
///
/// # Panics
/// Panics if `colors` is shorter than the vertex count.
pub fn find_conflict<T: PartialEq>(graph: &Graph, colors: &[T]) -> Option<(usize, usize)> {
    (0..graph.vertex_count()).find_map(|u| {
        graph
            .neighbors(u)
            .find(|&v| colors[u] == colors[v])
            .map(|v| (u, v))
    })
}

/// Validates a 1-based exact coloring with colors drawn from `1..=k`.
///
/// # Errors
/// Returns an error message if the assignment has the wrong length, leaves a vertex
/// uncolored (`0`), uses a color above `k`, or colors two neighbors alike.
pub fn validate_exact_coloring(graph: &Graph, colors: &[u32], k: usize) -> Result<(), String> {
    let n = graph.vertex_count();
    if colors.len() != n {
        return Err(format!(
            "coloring has {} entries, graph has {n} vertices",
            colors.len()
        ));
    }
    if let Some(v) = colors.iter().position(|&c| c == 0) {
        return Err(format!("vertex {v} is uncolored"));
    }
    if let Some(v) = colors.iter().position(|&c| c as usize > k) {
        return Err(format!("vertex {v} has color {} > k={k}", colors[v]));
    }
    if let Some((u, v)) = find_conflict(graph, colors) {
        return Err(format!(
            "adjacent vertices {u} and {v} share color {}",
            colors[u]
        ));
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
