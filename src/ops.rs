use std::ops::Range;

use itertools::Itertools;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns a range over V.
    /// In contrast to borrowing iterators, the range may be used where additional mutable
    /// references of self are needed
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns full bitset with one entry per node
    fn vertex_bitset_set(&self) -> NodeBitSet {
        NodeBitSet::new_all_set(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns *true* if `u` names a node of the graph
    fn has_vertex(&self, u: Node) -> bool {
        u < self.number_of_nodes()
    }

    /// Returns `Err(GraphError::InvalidVertex)` if `u` is not a node of the graph
    fn check_vertex(&self, u: Node) -> Result<()> {
        if self.has_vertex(u) {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex: u,
                num_nodes: self.number_of_nodes(),
            })
        }
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// Neighbors appear in the order in which their edges were inserted.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of neighbors of `u`, a self-loop counts twice.
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the degrees of all nodes
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns an iterator over all vertices with odd degree
    fn vertices_with_odd_degree(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(|&u| self.degree_of(u) % 2 == 1)
    }

    /// Returns the number of nodes with exactly degree `d`
    fn number_of_nodes_with_degree(&self, d: NumNodes) -> NumNodes {
        self.degrees().filter(|&x| x == d).count() as NumNodes
    }

    /// Returns a distribution sorted by degree
    fn degree_distribution(&self) -> Vec<(NumNodes, NumNodes)> {
        let mut distr = self
            .degrees()
            .counts()
            .into_iter()
            .map(|(d, n)| (d, n as NumNodes))
            .collect_vec();
        distr.sort_by_key(|(d, _)| *d);
        distr
    }

    /// Returns the neighbors of a given vertex as a NodeBitSet
    /// ** Panics if `u >= n` **
    fn neighbors_of_as_bitset(&self, u: Node) -> NodeBitSet {
        NodeBitSet::new_with_bits_set(self.number_of_nodes(), self.neighbors_of(u))
    }

    /// Returns the adjacency list, ie. the neighborhood of every vertex in order.
    /// Both directions of every edge are represented.
    fn adjacency_list(&self) -> Vec<Vec<Node>> {
        self.vertices()
            .map(|u| self.neighbors_of(u).collect_vec())
            .collect()
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the egde {u,v} exists in the graph.
    /// Out-of-range endpoints are simply not adjacent.
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns *true* if a self-loop (u,u) exists.
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }
}

/// Trait for accessing the neighborhood of nodes as slices
pub trait NeighborsSlice {
    /// Returns a slice-reference of the neighborhood of a given vertex
    fn as_neighbors_slice(&self, u: Node) -> &[Node];
}

/// Access to the stored edges in insertion order
pub trait EdgeList: GraphEdgeOrder {
    /// Returns all edges, normalized, in the order they were inserted
    fn edge_list(&self) -> &[Edge];

    /// Returns an iterator over all edges in insertion order
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edge_list().iter().copied()
    }

    /// Returns an iterator over all edges in sorted order
    fn ordered_edges(&self) -> impl Iterator<Item = Edge> {
        let mut edges = self.edge_list().to_vec();
        edges.sort_unstable();
        edges.into_iter()
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert edges
pub trait GraphEdgeEditing: GraphNew + GraphNodeOrder {
    /// Adds the edge *{u,v}* to the graph unless it is already present.
    /// Returns *true* exactly if the edge was present previously.
    /// ** Panics if `u >= n || v >= n` **
    fn insert_edge(&mut self, u: Node, v: Node) -> bool;

    /// Adds the edge *{u,v}* to the graph unless it is already present.
    /// Returns *true* exactly if the edge was present previously.
    /// Fails with [`GraphError::InvalidVertex`] if `u >= n || v >= n`.
    fn try_add_edge(&mut self, u: Node, v: Node) -> Result<bool> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(self.insert_edge(u, v))
    }

    /// Adds the edge *{u,v}* to the graph, silently skipping duplicates.
    /// Fails with [`GraphError::InvalidVertex`] if `u >= n || v >= n`.
    fn add_edge(&mut self, u: Node, v: Node) -> Result<()> {
        self.try_add_edge(u, v).map(|_| ())
    }

    /// Adds all edges of the collection that are not yet present
    /// ** Panics if any endpoint is `>= n` **
    fn insert_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.insert_edge(u, v);
        }
    }

    /// Adds all edges in the collection, stopping at the first invalid one
    fn add_edges<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v)?;
        }
        Ok(())
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch: Sized {
    /// Create a graph from a number of nodes and an iterator over Edges
    fn from_edges<I>(n: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Edge>;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges<I>(n: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        let mut graph = Self::new(n);
        graph.add_edges(edges)?;
        Ok(graph)
    }
}
