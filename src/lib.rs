//! # Erdos-Renyi Structural Analysis
//!
//! Random G(n, p) graphs and three structural queries against them.
//!
//! This crate provides:
//! - An append-only undirected multigraph over `[0, n)` with ordered adjacency.
//! - A seedable G(n, p) builder that runs one trial per *ordered* pair, so pairs may
//!   be inserted twice (effective edge probability \(1 - (1 - p)^2\)).
//! - A k-core survivor fraction computed by depth-first degree peeling.
//! - A greedy (mex) coloring heuristic and an exact backtracking k-coloring search.
//!
//! ## Quick Start
//!
//! ```
//! use erdos::prelude::*;
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! let mut rng = SmallRng::seed_from_u64(12345);
//! let g = build_graph(50, 0.02, &mut rng).unwrap();
//!
//! let gamma = fraction_in_k_core(&g, 2).unwrap();
//! assert!((0.0..=1.0).contains(&gamma));
//!
//! // Greedy success implies an exact coloring exists.
//! if is_greedy_colorable(&g, 3) {
//!     assert!(is_exactly_colorable(&g, 3).unwrap());
//! }
//! ```
//!
//! ## Working with Graphs Directly
//!
//! ```
//! use erdos::graph::Graph;
//! use erdos::kcore::fraction_in_k_core;
//! use erdos::exact::is_exactly_colorable;
//!
//! // Star with center 0.
//! let g = Graph::from_edges(4, [(0, 1), (0, 2), (0, 3)]).unwrap();
//! assert_eq!(g.degree(0), 3);
//! assert_eq!(fraction_in_k_core(&g, 2).unwrap(), 0.0);
//! assert!(is_exactly_colorable(&g, 2).unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`graph`]: Multigraph storage and edge-list parsing.
//! - [`builder`]: Seedable G(n, p) construction.
//! - [`kcore`]: k-core survivor fraction.
//! - [`greedy`]: Greedy mex coloring.
//! - [`exact`]: Exact backtracking coloring with node budget and cancellation.
//! - [`validate`]: Proper-coloring checks.
//! - [`error`]: Crate error type.
//!
//! ## Performance Notes
//!
//! - The k-core peel is linear in vertices plus edge insertions.
//! - The exact search is exponential in the worst case by construction. Use
//!   [`exact::SearchLimits`] or a cancellation flag to bound it.
//! - Both traversals keep their frames on the heap, so recursion depth is not limited by
//!   the thread stack.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)] // LaTeX-style notation in docs
#![allow(clippy::multiple_crate_versions)] // Cargo.lock management is external

pub mod builder;
pub mod error;
pub mod exact;
pub mod graph;
pub mod greedy;
pub mod kcore;
pub mod validate;

/// Re-export commonly used types for convenience.
pub mod prelude {
    pub use crate::builder::{build_graph, RandomGraphBuilder};
    pub use crate::error::{AnalysisError, ErrorKind};
    pub use crate::exact::{is_exactly_colorable, ExactColorer, SearchLimits};
    pub use crate::graph::{parse_edge_list, Graph};
    pub use crate::greedy::{greedy_coloring, is_greedy_colorable};
    pub use crate::kcore::{fraction_in_k_core, KCoreAnalyzer};
}
