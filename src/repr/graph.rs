use std::fmt::{Debug, Display};

use fxhash::FxHashSet;
use log::debug;

use super::*;

/// An undirected, unweighted graph over the vertices `0..n`.
///
/// Edges are stored [`Edge::normalized`] in the order they were first inserted. Inserting an edge
/// that is already present (in either orientation) is a no-op. Self-loops are accepted and count
/// twice towards the degree of their vertex.
#[derive(Clone, Default)]
pub struct Graph {
    nbs: Vec<Vec<Node>>,
    edges: Vec<Edge>,
    edge_set: FxHashSet<Edge>,
}

impl Graph {
    /// Returns the label of every edge (`A`, `B`, ...) together with the edge, in insertion order
    pub fn labeled_edges(&self) -> impl Iterator<Item = (String, Edge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(i, &e)| (edge_label(i), e))
    }

    /// Returns the insertion index of an edge, if present
    pub fn position_of(&self, u: Node, v: Node) -> Option<usize> {
        let edge = Edge(u, v).normalized();
        if !self.edge_set.contains(&edge) {
            return None;
        }
        self.edges.iter().position(|&e| e == edge)
    }
}

impl GraphNodeOrder for Graph {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl GraphEdgeOrder for Graph {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl AdjacencyList for Graph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl NeighborsSlice for Graph {
    fn as_neighbors_slice(&self, u: Node) -> &[Node] {
        &self.nbs[u as usize]
    }
}

impl AdjacencyTest for Graph {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.edge_set.contains(&Edge(u, v).normalized())
    }
}

impl EdgeList for Graph {
    fn edge_list(&self) -> &[Edge] {
        &self.edges
    }
}

impl GraphNew for Graph {
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Vec::new(); n as usize],
            edges: Vec::new(),
            edge_set: FxHashSet::default(),
        }
    }
}

impl GraphEdgeEditing for Graph {
    fn insert_edge(&mut self, u: Node, v: Node) -> bool {
        assert!(self.has_vertex(u) && self.has_vertex(v));

        let edge = Edge(u, v).normalized();
        if !self.edge_set.insert(edge) {
            debug!("skipping duplicate edge {edge}");
            return true;
        }

        self.edges.push(edge);
        self.nbs[u as usize].push(v);
        self.nbs[v as usize].push(u);
        false
    }
}

impl PartialEq for Graph {
    /// Two graphs are equal if they have the same vertices and the same edge set,
    /// independent of insertion order
    fn eq(&self, other: &Self) -> bool {
        self.number_of_nodes() == other.number_of_nodes() && self.edge_set == other.edge_set
    }
}

impl Eq for Graph {}

impl Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for Edge(u, v) in &self.edges {
            writeln!(f, "{u} -> {v}")?;
        }
        Ok(())
    }
}

impl Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("n", &self.number_of_nodes())
            .field("edges", &self.edges)
            .finish()
    }
}
