/*!
# Subgraph Algorithms

Relations between two graphs on the same vertex labels (subgraph, spanning tree) and the
extraction of vertex-induced subgraphs with compacted labels.
*/

use super::*;

/// Subgraph relations and vertex-induced subgraphs
pub trait Subgraph: Sized {
    /// Returns *true* if `self` has at most as many nodes as `other` and every edge of `self`
    /// is an edge of `other`.
    ///
    /// # Examples
    /// ```
    /// use grafo::{prelude::*, algo::*};
    ///
    /// let small = Graph::from_edges(3, [(1, 0)]).unwrap();
    /// let large = Graph::from_edges(4, [(0, 1), (1, 2)]).unwrap();
    /// assert!(small.is_subgraph_of(&large));
    /// assert!(!large.is_subgraph_of(&small));
    /// ```
    fn is_subgraph_of<GO>(&self, other: &GO) -> bool
    where
        GO: AdjacencyTest;

    /// Returns *true* if `self` is a tree on exactly the nodes of `other` and a subgraph of it
    fn is_spanning_tree_of<GO>(&self, other: &GO) -> bool
    where
        GO: AdjacencyTest;

    /// Creates the subgraph induced by the nodes in `vertices`.
    ///
    /// Kept nodes are relabeled `0..k` preserving their relative order and edges keep their
    /// relative insertion order. Returns the subgraph and a mapping from old labels to new
    /// labels, where dropped nodes map to [`INVALID_NODE`].
    fn vertex_induced_as<GO>(&self, vertices: &NodeBitSet) -> (GO, Vec<Node>)
    where
        GO: GraphNew + GraphEdgeEditing;
}

impl<G> Subgraph for G
where
    G: AdjacencyList + EdgeList + Connectivity,
{
    fn is_subgraph_of<GO>(&self, other: &GO) -> bool
    where
        GO: AdjacencyTest,
    {
        self.number_of_nodes() <= other.number_of_nodes()
            && self.edges().all(|Edge(u, v)| other.has_edge(u, v))
    }

    fn is_spanning_tree_of<GO>(&self, other: &GO) -> bool
    where
        GO: AdjacencyTest,
    {
        self.number_of_nodes() == other.number_of_nodes()
            && self.is_tree()
            && self.is_subgraph_of(other)
    }

    fn vertex_induced_as<GO>(&self, vertices: &NodeBitSet) -> (GO, Vec<Node>)
    where
        GO: GraphNew + GraphEdgeEditing,
    {
        let mut mapping = vec![INVALID_NODE; self.len()];
        for (new, old) in vertices.iter_set_bits().enumerate() {
            mapping[old as usize] = new as Node;
        }

        let mut result = GO::new(vertices.cardinality() as NumNodes);
        for Edge(u, v) in self.edges() {
            let (mu, mv) = (mapping[u as usize], mapping[v as usize]);
            if mu != INVALID_NODE && mv != INVALID_NODE {
                result.insert_edge(mu, mv);
            }
        }

        (result, mapping)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens::*;

    #[test]
    fn subgraph_relations() {
        let k4 = Graph::complete_graph(4);
        let path = Graph::from_edges(4, [(3, 2), (2, 1), (1, 0)]).unwrap();
        let star = Graph::star_graph(4);
        let short_path = Graph::path_graph(3);

        assert!(path.is_subgraph_of(&k4));
        assert!(path.is_spanning_tree_of(&k4));
        assert!(star.is_spanning_tree_of(&k4));
        assert!(!star.is_spanning_tree_of(&path));
        assert!(short_path.is_subgraph_of(&k4));
        assert!(!short_path.is_spanning_tree_of(&k4));
        assert!(!k4.is_subgraph_of(&path));
        assert!(!k4.is_spanning_tree_of(&k4));
    }

    #[test]
    fn vertex_induced() {
        let graph = Graph::from_edges(5, [(4, 3), (0, 1), (1, 3), (2, 0)]).unwrap();
        let keep = NodeBitSet::new_with_bits_set(5, [0, 1, 3, 4]);

        let (sub, mapping): (Graph, _) = graph.vertex_induced_as(&keep);
        assert_eq!(mapping, vec![0, 1, INVALID_NODE, 2, 3]);
        assert_eq!(sub.number_of_nodes(), 4);
        assert_eq!(sub.edge_list(), &[Edge(2, 3), Edge(0, 1), Edge(1, 2)]);
    }
}
