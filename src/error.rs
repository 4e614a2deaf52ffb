//! Crate-wide error type.

use thiserror::Error;

use crate::graph::GraphParseError;

/// Convenience alias used by every fallible operation in the crate.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Coarse classification of [`AnalysisError`], for callers that only need to branch
/// on the category (e.g. skip an instance on `ResourceExhausted`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A caller-supplied argument was out of its domain.
    InvalidArgument,
    /// The graph has no vertices, so a ratio over `n` is undefined.
    EmptyGraph,
    /// A search ran out of memory or out of its node budget.
    ResourceExhausted,
    /// A search observed its cancellation flag.
    Cancelled,
    /// Text input could not be parsed into a graph.
    Parse,
}

/// Errors produced by graph construction and the analyzers.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalysisError {
    /// `p` is NaN or outside `[0, 1]`.
    #[error("edge probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),

    /// `add_edge(v, v)` was attempted.
    #[error("self-loop rejected at vertex {0}")]
    SelfLoop(usize),

    /// A vertex id was not in `[0, n)`.
    #[error("vertex {vertex} out of range for graph with {n} vertices")]
    VertexOutOfRange {
        /// Offending id.
        vertex: usize,
        /// Vertex count of the graph.
        n: usize,
    },

    /// A fraction over the vertex set was requested on a graph with no vertices.
    #[error("graph has no vertices")]
    EmptyGraph,

    /// Working memory could not be reserved, or the search exceeded its budget.
    #[error("resource exhausted: {0}")]
    ResourceExhausted(String),

    /// The search was interrupted through its cancellation flag.
    #[error("search cancelled after {nodes} nodes")]
    Cancelled {
        /// Search nodes expanded before the flag was seen.
        nodes: u64,
    },

    /// Edge-list input was malformed.
    #[error(transparent)]
    Parse(#[from] GraphParseError),
}

impl AnalysisError {
    /// Returns the coarse category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalysisError::InvalidProbability(_)
            | AnalysisError::SelfLoop(_)
            | AnalysisError::VertexOutOfRange { .. } => ErrorKind::InvalidArgument,
            AnalysisError::EmptyGraph => ErrorKind::EmptyGraph,
            AnalysisError::ResourceExhausted(_) => ErrorKind::ResourceExhausted,
            AnalysisError::Cancelled { .. } => ErrorKind::Cancelled,
            AnalysisError::Parse(_) => ErrorKind::Parse,
        }
    }

    pub(crate) fn alloc_failed(what: &str, len: usize) -> Self {
        AnalysisError::ResourceExhausted(format!("could not reserve {len} entries for {what}"))
    }
}
