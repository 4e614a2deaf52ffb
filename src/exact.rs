//! Exact k-colorability by exhaustive backtracking.
//!
//! Vertices are assigned in index order, each trying colors `1..=k` in increasing order;
//! `0` marks a vertex as uncolored. There is no memoization, symmetry breaking or
//! ordering heuristic: the worst case is \(O(k^n)\), and that cost is what callers near
//! the colorability threshold want to observe.
//!
//! The search runs on an explicit frame stack `(vertex, last color tried)` with explicit
//! undo, so deep graphs cannot exhaust the call stack. Each frame step can also be
//! charged against a node budget and checked against a cancellation flag; neither
//! changes the order in which assignments are tried.

use std::sync::atomic::{AtomicBool, Ordering};

use log::debug;

use crate::error::{AnalysisError, Result};
use crate::graph::Graph;

// ============================================================================
// Configuration
// ============================================================================

/// Bounds on a single exact search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of frame steps before giving up with
    /// [`AnalysisError::ResourceExhausted`]. `None` means unbounded.
    pub node_budget: Option<u64>,
}

impl SearchLimits {
    /// No limits.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Limits the search to `nodes` frame steps.
    pub fn with_node_budget(nodes: u64) -> Self {
        Self {
            node_budget: Some(nodes),
        }
    }
}

/// Outcome of a completed exact search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// A proper coloring with colors in `1..=k`, if one exists.
    pub coloring: Option<Vec<u32>>,
    /// Frame steps taken.
    pub nodes: u64,
}

// ============================================================================
// Public API
// ============================================================================

/// Returns `true` iff the graph admits a proper coloring with colors `1..=k`.
///
/// # Errors
/// Returns [`AnalysisError::ResourceExhausted`] if the working arrays cannot be allocated.
pub fn is_exactly_colorable(graph: &Graph, k: usize) -> Result<bool> {
    ExactColorer::new(graph).is_colorable(k)
}

/// Backtracking k-coloring search against a borrowed graph.
#[derive(Clone, Copy, Debug)]
pub struct ExactColorer<'a> {
    graph: &'a Graph,
    limits: SearchLimits,
    cancel: Option<&'a AtomicBool>,
}

/// One suspended vertex assignment.
#[derive(Clone, Copy, Debug)]
struct Frame {
    vertex: usize,
    last: u32,
}

impl<'a> ExactColorer<'a> {
    /// Unbounded search with no cancellation flag.
    pub fn new(graph: &'a Graph) -> Self {
        Self {
            graph,
            limits: SearchLimits::default(),
            cancel: None,
        }
    }

    /// Applies `limits` to subsequent searches.
    #[must_use]
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Polls `flag` once per frame step; when it reads `true` the search stops with
    /// [`AnalysisError::Cancelled`].
    #[must_use]
    pub fn with_cancel_flag(mut self, flag: &'a AtomicBool) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Returns `true` iff a proper coloring with colors `1..=k` exists.
    ///
    /// # Errors
    /// See [`ExactColorer::search`].
    pub fn is_colorable(&self, k: usize) -> Result<bool> {
        Ok(self.search(k)?.coloring.is_some())
    }

    /// Returns the first proper coloring in search order, if any.
    ///
    /// # Errors
    /// See [`ExactColorer::search`].
    pub fn find_coloring(&self, k: usize) -> Result<Option<Vec<u32>>> {
        Ok(self.search(k)?.coloring)
    }

    /// Runs the search to completion and reports the witness and effort.
    ///
    /// # Errors
    /// - [`AnalysisError::ResourceExhausted`] if allocation fails or the node budget runs out.
    /// - [`AnalysisError::Cancelled`] if the cancellation flag is raised.
    pub fn search(&self, k: usize) -> Result<SearchOutcome> {
        let n = self.graph.vertex_count();
        if n == 0 {
            return Ok(SearchOutcome {
                coloring: Some(Vec::new()),
                nodes: 0,
            });
        }

        // A vertex always has a free color among 1..=n, so colors above n are never
        // tried and clamping k leaves the search order unchanged.
        let k = u32::try_from(k.min(n)).unwrap_or(u32::MAX);

        let mut colors: Vec<u32> = Vec::new();
        colors
            .try_reserve_exact(n)
            .map_err(|_| AnalysisError::alloc_failed("color assignment", n))?;
        colors.resize(n, 0);

        let mut stack: Vec<Frame> = Vec::new();
        stack
            .try_reserve_exact(n)
            .map_err(|_| AnalysisError::alloc_failed("search frames", n))?;
        stack.push(Frame { vertex: 0, last: 0 });

        let mut nodes: u64 = 0;
        while let Some(frame) = stack.last_mut() {
            nodes += 1;
            self.check_limits(nodes)?;

            let v = frame.vertex;
            // Undo whatever this frame assigned before trying the next color.
            colors[v] = 0;
            let next = (frame.last + 1..=k).find(|&c| self.is_free(v, c, &colors));

            match next {
                Some(c) => {
                    frame.last = c;
                    colors[v] = c;
                    if v + 1 == n {
                        debug!("exact search: {k}-coloring found after {nodes} nodes");
                        return Ok(SearchOutcome {
                            coloring: Some(colors),
                            nodes,
                        });
                    }
                    stack.push(Frame {
                        vertex: v + 1,
                        last: 0,
                    });
                }
                None => {
                    stack.pop();
                }
            }
        }

        debug!("exact search: no {k}-coloring after {nodes} nodes");
        Ok(SearchOutcome {
            coloring: None,
            nodes,
        })
    }

    /// `c` is free for `v` if no neighbor currently holds it. Only lower-indexed
    /// vertices are colored at this point.
    #[inline]
    fn is_free(&self, v: usize, c: u32, colors: &[u32]) -> bool {
        self.graph.neighbors(v).all(|u| colors[u] != c)
    }

    fn check_limits(&self, nodes: u64) -> Result<()> {
        if let Some(flag) = self.cancel {
            if flag.load(Ordering::Relaxed) {
                return Err(AnalysisError::Cancelled { nodes });
            }
        }
        if let Some(budget) = self.limits.node_budget {
            if nodes > budget {
                return Err(AnalysisError::ResourceExhausted(format!(
                    "exact search exceeded its budget of {budget} nodes"
                )));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
