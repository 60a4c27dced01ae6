/*!
# Spanning Trees

Kruskal's algorithm over unit edge weights. As all weights are equal, sorting by weight keeps
the insertion order of the edges, so the result is deterministic: an edge is taken if it
connects two different components of the edges taken before it.

Runs in `O(m α(n))` using [`UnionFind`].
*/

use super::*;

/// Spanning trees and forests
pub trait SpanningTree: EdgeList + GraphNodeOrder + Sized {
    /// Returns a spanning forest: a maximal acyclic subset of the edges, in insertion order.
    /// Self-loops are never taken.
    fn spanning_forest(&self) -> Vec<Edge> {
        let mut components = UnionFind::new(self.number_of_nodes());
        self.edges()
            .filter(|&Edge(u, v)| components.union(u, v))
            .collect()
    }

    /// Returns the edges of a (minimum) spanning tree.
    /// Fails with [`GraphError::Disconnected`] if the graph is not connected.
    ///
    /// # Examples
    /// ```
    /// use grafo::{prelude::*, algo::*};
    ///
    /// let triangle = Graph::from_edges(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
    /// assert_eq!(triangle.spanning_tree(), Ok(vec![Edge(0, 1), Edge(1, 2)]));
    ///
    /// let split = Graph::from_edges(3, [(0, 1)]).unwrap();
    /// assert_eq!(split.spanning_tree(), Err(GraphError::Disconnected));
    /// ```
    fn spanning_tree(&self) -> Result<Vec<Edge>> {
        let forest = self.spanning_forest();
        if forest.len() + 1 < self.len() {
            return Err(GraphError::Disconnected);
        }
        Ok(forest)
    }

    /// Returns a spanning tree as graph on the same nodes
    fn spanning_tree_as<GO>(&self) -> Result<GO>
    where
        GO: GraphNew + GraphEdgeEditing,
    {
        let mut tree = GO::new(self.number_of_nodes());
        tree.insert_edges(self.spanning_tree()?);
        Ok(tree)
    }
}

impl<G> SpanningTree for G where G: EdgeList + GraphNodeOrder + Sized {}
