//! Random G(n, p) construction.
//!
//! Every *ordered* pair `(i, j)` with `i != j` gets its own Bernoulli(p) trial, and each
//! success inserts the full undirected edge. An unordered pair is therefore inserted
//! zero, one or two times, and is present with probability \(1 - (1 - p)^2\). This is
//! deliberately not the textbook one-trial-per-pair model: measured degrees include
//! the resulting parallel edges.

use log::debug;
use rand::Rng;

use crate::error::{AnalysisError, Result};
use crate::graph::Graph;

/// Parameters of a random graph, validated once and reusable across draws.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RandomGraphBuilder {
    n: usize,
    p: f64,
}

impl RandomGraphBuilder {
    /// Validates `p` and stores the parameters.
    ///
    /// # Errors
    /// Returns [`AnalysisError::InvalidProbability`] if `p` is NaN or outside `[0, 1]`.
    pub fn new(n: usize, p: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&p) {
            return Err(AnalysisError::InvalidProbability(p));
        }
        Ok(Self { n, p })
    }

    /// Vertex count.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Per-trial success probability.
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Probability that a given unordered pair ends up adjacent at least once.
    pub fn effective_edge_probability(&self) -> f64 {
        1.0 - (1.0 - self.p) * (1.0 - self.p)
    }

    /// Draws one graph from `rng`.
    ///
    /// Trials run with `i` as the outer loop and `j` as the inner loop; a trial succeeds
    /// when a uniform draw from `[0, 1)` is `< p`. Identical seeds give identical graphs.
    ///
    /// # Errors
    /// Returns [`AnalysisError::ResourceExhausted`] if `n` adjacency lists cannot be
    /// allocated.
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Graph> {
        let n = self.n;
        let mut g = Graph::try_new(n)?;
        for i in 0..n {
            for j in 0..n {
                if i != j && rng.random::<f64>() < self.p {
                    g.add_edge(i, j)?;
                }
            }
        }
        debug!(
            "built G(n={n}, p={}) with {} edge insertions",
            self.p,
            g.edge_count()
        );
        Ok(g)
    }
}

/// Builds a random graph with `n` vertices using per-ordered-pair probability `p`.
///
/// # Errors
/// Returns [`AnalysisError::InvalidProbability`] if `p` is NaN or outside `[0, 1]`.
pub fn build_graph<R: Rng + ?Sized>(n: usize, p: f64, rng: &mut R) -> Result<Graph> {
    RandomGraphBuilder::new(n, p)?.build(rng)
}

// ============================================================================
// Tests
// ============================================================================
