//! Undirected multigraph over the dense vertex range `[0, n)`.
//!
//! Adjacency is stored per vertex as an ordered sequence of neighbor ids. Parallel edges
//! are kept as repeated entries and count towards a vertex's degree; the analyzers rely
//! on both the multiplicity and the insertion order.

use std::fmt;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::error::{AnalysisError, Result};

// ============================================================================
// Graph
// ============================================================================

/// A fixed-size, append-only undirected multigraph.
///
/// Representation:
/// - `adj[v]` lists the neighbors of `v` in insertion order, duplicates included.
/// - `edges` counts successful [`Graph::add_edge`] calls, so a parallel edge counts twice.
///
/// Self-loops never occur; [`Graph::add_edge`] rejects them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    adj: Vec<Vec<usize>>,
    edges: usize,
}

impl Graph {
    /// Creates a graph with `n` vertices and no edges.
    pub fn new(n: usize) -> Self {
        Self {
            adj: vec![Vec::new(); n],
            edges: 0,
        }
    }

    /// Creates a graph with `n` vertices, reporting allocation failure instead of aborting.
    ///
    /// # Errors
    /// Returns [`AnalysisError::ResourceExhausted`] if `n` adjacency lists cannot be reserved.
    pub fn try_new(n: usize) -> Result<Self> {
        let mut adj = Vec::new();
        adj.try_reserve_exact(n)
            .map_err(|_| AnalysisError::alloc_failed("adjacency lists", n))?;
        adj.resize_with(n, Vec::new);
        Ok(Self { adj, edges: 0 })
    }

    /// Creates a graph with `n` vertices and inserts `edges` in order.
    ///
    /// # Errors
    /// Fails on the first self-loop or out-of-range endpoint.
    pub fn from_edges<I>(n: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut g = Self::new(n);
        for (u, v) in edges {
            g.add_edge(u, v)?;
        }
        Ok(g)
    }

    /// Inserts the undirected edge `{u, v}`: appends `v` to `u`'s sequence and `u` to
    /// `v`'s sequence. Inserting an existing pair again creates a parallel edge.
    ///
    /// # Errors
    /// Returns [`AnalysisError::SelfLoop`] if `u == v` and
    /// [`AnalysisError::VertexOutOfRange`] if either endpoint is not a vertex.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            return Err(AnalysisError::SelfLoop(u));
        }
        self.adj[u].push(v);
        self.adj[v].push(u);
        self.edges += 1;
        Ok(())
    }

    /// Number of vertices `n`.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    /// Number of edge insertions, counting parallel edges separately.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// Degree of `v`: the length of its adjacency sequence, duplicates included.
    ///
    /// # Panics
    /// Panics if `v` is not a vertex.
    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.adj[v].len()
    }

    /// Neighbors of `v` in insertion order, duplicates included.
    ///
    /// The iterator borrows the graph and can be recreated any number of times.
    ///
    /// # Panics
    /// Panics if `v` is not a vertex.
    #[inline]
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.adj[v].iter().copied()
    }

    /// Adjacency sequence of `v` as a slice.
    #[inline]
    pub(crate) fn neighbor_slice(&self, v: usize) -> &[usize] {
        &self.adj[v]
    }

    /// Largest degree over all vertices (0 for an empty graph).
    pub fn max_degree(&self) -> usize {
        self.adj.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Vertex with the smallest degree; ties go to the lowest index.
    pub fn min_degree_vertex(&self) -> Option<usize> {
        self.adj
            .iter()
            .enumerate()
            .min_by_key(|&(v, nbrs)| (nbrs.len(), v))
            .map(|(v, _)| v)
    }

    /// Returns `true` if `v` appears in `u`'s adjacency sequence.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adj.get(u).is_some_and(|nbrs| nbrs.contains(&v))
    }

    fn check_vertex(&self, v: usize) -> Result<()> {
        if v < self.adj.len() {
            Ok(())
        } else {
            Err(AnalysisError::VertexOutOfRange {
                vertex: v,
                n: self.adj.len(),
            })
        }
    }

    /// Loads a graph from an edge-list file (see [`parse_edge_list`]).
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or its contents are malformed.
    pub fn load_from_file(filename: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(filename)
            .map_err(|e| GraphParseError::Io(e.to_string()))?;
        parse_edge_list(&text)
    }
}

/// One line per vertex: `v: n0 n1 ...`, in adjacency order.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, nbrs) in self.adj.iter().enumerate() {
            write!(f, "{v}:")?;
            for u in nbrs {
                write!(f, " {u}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Errors encountered while parsing an edge list.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GraphParseError {
    /// No header line was found.
    #[error("edge list is empty")]
    Empty,
    /// The header is not a vertex count.
    #[error("line {line}: expected vertex count, got {text:?}")]
    BadHeader {
        /// 1-based line number.
        line: usize,
        /// The offending line.
        text: String,
    },
    /// An edge line does not consist of exactly two vertex ids.
    #[error("line {line}: expected `u v`, got {text:?}")]
    BadEdge {
        /// 1-based line number.
        line: usize,
        /// The offending line.
        text: String,
    },
    /// An edge line names a self-loop or an unknown vertex.
    #[error("line {line}: {reason}")]
    RejectedEdge {
        /// 1-based line number.
        line: usize,
        /// Why the insertion failed.
        reason: String,
    },
    /// I/O error (file not found, etc.).
    #[error("I/O error: {0}")]
    Io(String),
}

/// Parses a whitespace-separated edge list.
///
/// Rules:
/// - Blank lines and lines starting with `#` are ignored.
/// - The first remaining line is the vertex count `n`.
/// - Every following line is an edge `u v`; edges are inserted in file order, and a
///   repeated pair becomes a parallel edge.
///
/// # Errors
/// Returns [`AnalysisError::Parse`] describing the first malformed line, or
/// [`AnalysisError::ResourceExhausted`] if the header names more vertices than can be
/// allocated.
pub fn parse_edge_list(text: &str) -> Result<Graph> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'));

    let (header_line, header) = lines.next().ok_or(GraphParseError::Empty)?;
    let n: usize = header.parse().map_err(|_| GraphParseError::BadHeader {
        line: header_line,
        text: header.to_string(),
    })?;

    let mut g = Graph::try_new(n)?;
    for (line, text) in lines {
        let bad_edge = || GraphParseError::BadEdge {
            line,
            text: text.to_string(),
        };
        let mut fields = text.split_whitespace();
        let (Some(u), Some(v), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(bad_edge().into());
        };
        let u: usize = u.parse().map_err(|_| bad_edge())?;
        let v: usize = v.parse().map_err(|_| bad_edge())?;
        g.add_edge(u, v).map_err(|e| GraphParseError::RejectedEdge {
            line,
            reason: e.to_string(),
        })?;
    }
    Ok(g)
}

// ============================================================================
// Tests
// ============================================================================
