//! Error conditions raised by graph construction and analysis.
//!
//! "Not found" outcomes (no cut of the requested size, no cycle of the requested length, ...) are
//! regular results and are reported through [`Analysis`](crate::algo::Analysis) instead.

use thiserror::Error;

use crate::{Edge, Node, NumEdges, NumNodes};

/// Graph construction and analysis errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An endpoint does not name a vertex of the graph.
    #[error("vertex {vertex} does not exist in a graph with {num_nodes} vertices")]
    InvalidVertex { vertex: Node, num_nodes: NumNodes },

    /// The edge to remove is not part of the graph.
    #[error("edge {0} is not part of the graph")]
    EdgeNotFound(Edge),

    /// The operation requires a connected graph.
    #[error("the graph is not connected")]
    Disconnected,

    /// The operation requires at least one edge.
    #[error("the graph has no edges")]
    NoEdges,

    /// The operation requires at least one vertex.
    #[error("the graph has no vertices")]
    EmptyGraph,

    /// Cycles consist of at least three vertices.
    #[error("a cycle needs at least 3 vertices, {0} requested")]
    CycleTooShort(NumNodes),

    /// A cut must remove at least one edge.
    #[error("cut size {size} is invalid for a graph with {num_edges} edges")]
    InvalidCutSize { size: NumEdges, num_edges: NumEdges },

    /// An adjacency matrix must have as many columns as rows.
    #[error("adjacency matrix has {rows} rows but row {row} has {len} entries")]
    NonSquareMatrix { rows: usize, row: usize, len: usize },

    /// All rows of an incidence matrix must have the same length.
    #[error("matrix row {row} has {len} entries, expected {expected}")]
    RaggedMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// Entry `(u, v)` differs from entry `(v, u)`.
    #[error("adjacency matrix is not symmetric at ({0}, {1})")]
    AsymmetricMatrix(Node, Node),

    /// A matrix entry outside of the accepted alphabet.
    #[error("matrix entry ({row}, {column}) is {value}")]
    NonBinaryEntry { row: usize, column: usize, value: u8 },

    /// An incidence matrix column that does not describe exactly one edge.
    #[error("incidence matrix column {column} does not describe an edge (sum of entries is {sum})")]
    MalformedIncidenceColumn { column: usize, sum: usize },

    /// Deleting a spanning tree edge must leave exactly two components.
    #[error("removing tree edge {edge} left {components} components")]
    TreeSplit { edge: Edge, components: usize },
}

/// Shorthand for results carrying a [`GraphError`].
pub type Result<T, E = GraphError> = std::result::Result<T, E>;
