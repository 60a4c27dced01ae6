/*!
# Graph Composition

Set algebra on two graphs and constructive edits. Every operation returns a new graph and
leaves its inputs untouched.

- [`Composition::union`] and [`Composition::intersection`] combine the adjacency matrices of both
  graphs (padded to the larger node count, respectively cut to the smaller one), so their edges
  appear in row-major matrix order.
- [`Composition::symmetric_difference`] XORs the normalized edge sets and emits them sorted.
- Removing a node relabels every node `w > u` to `w - 1`.
*/

use itertools::Itertools;

use super::*;

/// Set algebra and constructive edits returning new graphs
pub trait Composition: Sized {
    /// Graph on `max(n, n')` nodes containing every edge of either graph.
    ///
    /// # Examples
    /// ```
    /// use grafo::{prelude::*, algo::*};
    ///
    /// let a = Graph::from_edges(3, [(0, 1)]).unwrap();
    /// let b = Graph::from_edges(3, [(1, 2)]).unwrap();
    /// let union = a.union(&b);
    /// assert_eq!(union.number_of_nodes(), 3);
    /// assert_eq!(union.edge_list(), &[Edge(0, 1), Edge(1, 2)]);
    /// ```
    fn union(&self, other: &Self) -> Self;

    /// Graph on `min(n, n')` nodes containing the edges present in both graphs
    fn intersection(&self, other: &Self) -> Self;

    /// Graph on `max(n, n')` nodes containing the edges present in exactly one graph
    fn symmetric_difference(&self, other: &Self) -> Self;

    /// Removes `u` and its incident edges; nodes `w > u` are relabeled to `w - 1`.
    /// Fails with [`GraphError::InvalidVertex`] if `u >= n`.
    fn remove_vertex(&self, u: Node) -> Result<Self>;

    /// Removes the edge `{u, v}`, keeping the order of all other edges.
    /// Fails with [`GraphError::EdgeNotFound`] if the edge does not exist.
    fn remove_edge(&self, u: Node, v: Node) -> Result<Self>;

    /// Contracts `b` into `a`: edges of `b` are redirected to `a` and duplicates are merged.
    /// The result has no self-loops: the edge `{a, b}` disappears along with every loop the
    /// graph already had. Afterwards `b` is removed as by [`Composition::remove_vertex`].
    /// Merging a node with itself returns an unchanged copy.
    ///
    /// # Examples
    /// ```
    /// use grafo::{prelude::*, algo::*};
    ///
    /// // the square 0 - 1 - 2 - 3 - 0 collapses into a triangle
    /// let square = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
    /// let merged = square.merge_vertices(0, 1).unwrap();
    /// assert_eq!(merged.number_of_nodes(), 3);
    /// assert_eq!(merged.edge_list(), &[Edge(0, 1), Edge(1, 2), Edge(0, 2)]);
    /// ```
    fn merge_vertices(&self, a: Node, b: Node) -> Result<Self>;
}

impl<G> Composition for G
where
    G: AdjacencyTest + EdgeList + Subgraph + GraphEdgeEditing + Clone,
{
    fn union(&self, other: &Self) -> Self {
        let n = self.number_of_nodes().max(other.number_of_nodes());
        combine_matrices(n, |u, v| self.has_edge(u, v) || other.has_edge(u, v))
    }

    fn intersection(&self, other: &Self) -> Self {
        let n = self.number_of_nodes().min(other.number_of_nodes());
        combine_matrices(n, |u, v| self.has_edge(u, v) && other.has_edge(u, v))
    }

    fn symmetric_difference(&self, other: &Self) -> Self {
        let n = self.number_of_nodes().max(other.number_of_nodes());
        let mut result = Self::new(n);
        result.insert_edges(
            self.edges()
                .filter(|&Edge(u, v)| !other.has_edge(u, v))
                .chain(other.edges().filter(|&Edge(u, v)| !self.has_edge(u, v)))
                .sorted_unstable(),
        );
        result
    }

    fn remove_vertex(&self, u: Node) -> Result<Self> {
        self.check_vertex(u)?;

        let mut kept = self.vertex_bitset_set();
        kept.clear_bit(u);
        let (result, _) = self.vertex_induced_as(&kept);
        Ok(result)
    }

    fn remove_edge(&self, u: Node, v: Node) -> Result<Self> {
        let removed = Edge(u, v).normalized();
        if !self.has_edge(u, v) {
            return Err(GraphError::EdgeNotFound(removed));
        }

        let mut result = Self::new(self.number_of_nodes());
        result.insert_edges(self.edges().filter(|&e| e != removed));
        Ok(result)
    }

    fn merge_vertices(&self, a: Node, b: Node) -> Result<Self> {
        self.check_vertex(a)?;
        self.check_vertex(b)?;
        if a == b {
            return Ok(self.clone());
        }

        let redirect = |w: Node| if w == b { a } else { w };

        let mut merged = Self::new(self.number_of_nodes());
        merged.insert_edges(
            self.edges()
                .map(|Edge(u, v)| Edge(redirect(u), redirect(v)))
                .filter(|e| !e.is_loop()),
        );
        merged.remove_vertex(b)
    }
}

/// Builds a graph on `n` nodes from the upper triangle (diagonal included) of an implicit
/// adjacency matrix, row by row
fn combine_matrices<G, F>(n: NumNodes, has_edge: F) -> G
where
    G: GraphEdgeEditing,
    F: Fn(Node, Node) -> bool,
{
    let mut result = G::new(n);
    for u in 0..n {
        for v in u..n {
            if has_edge(u, v) {
                result.insert_edge(u, v);
            }
        }
    }
    result
}
