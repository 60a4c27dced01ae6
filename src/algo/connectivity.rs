use itertools::Itertools;

use super::*;

/// Connected components and the tree characterizations derived from them
pub trait Connectivity: AdjacencyList + GraphEdgeOrder + Sized {
    /// Returns an iterator over the connected components of the graph.
    /// Components are emitted in order of their smallest node, each in BFS order.
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }

    /// Returns the number of connected components (0 for the empty graph)
    fn number_of_connected_components(&self) -> NumNodes {
        self.connected_components().count() as NumNodes
    }

    /// Returns for every node the index of its connected component, where components are
    /// numbered as emitted by [`Connectivity::connected_components`]
    fn component_labels(&self) -> Vec<NumNodes> {
        let mut labels = vec![0; self.len()];
        for (i, cc) in self.connected_components().enumerate() {
            for u in cc {
                labels[u as usize] = i as NumNodes;
            }
        }
        labels
    }

    /// Returns *true* if a traversal starting at node 0 reaches all nodes.
    /// The graph without nodes is connected.
    ///
    /// # Examples
    /// ```
    /// use grafo::{prelude::*, algo::*};
    ///
    /// assert!(Graph::from_edges(3, [(0, 1), (2, 1)]).unwrap().is_connected());
    /// assert!(!Graph::from_edges(3, [(0, 1)]).unwrap().is_connected());
    /// assert!(Graph::new(0).is_connected());
    /// ```
    fn is_connected(&self) -> bool {
        self.is_empty() || self.dfs(0).count() == self.len()
    }

    /// Returns *true* if the graph is connected and has exactly `n - 1` edges
    fn is_tree(&self) -> bool {
        self.number_of_edges() as u64 + 1 == self.number_of_nodes() as u64 && self.is_connected()
    }

    /// Returns *true* if the graph contains no cycle (self-loops are cycles here)
    fn is_forest(&self) -> bool {
        self.number_of_edges() as u64 + self.number_of_connected_components() as u64
            == self.number_of_nodes() as u64
    }
}

impl<G> Connectivity for G where G: AdjacencyList + GraphEdgeOrder + Sized {}

/// Iterator over the connected components of a graph
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    bfs: Option<BFS<'a, G>>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            bfs: (!graph.is_empty()).then(|| graph.bfs(0)),
        }
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let bfs = self.bfs.as_mut()?;
        loop {
            let cc = bfs.by_ref().collect_vec();
            if !cc.is_empty() {
                return Some(cc);
            }

            if !bfs.try_restart_at_unvisited() {
                return None;
            }
        }
    }
}
