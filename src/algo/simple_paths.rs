/*!
# Simple Path Search

Depth-first enumeration of simple paths with a fixed number of nodes, starting at a fixed node.
Neighbors are tried in adjacency-list order, so the enumeration order is deterministic.

This is the backtracking core shared by the Hamiltonian cycle search and the fixed-length cycle
search. It keeps an explicit stack, so the search depth is bounded by the number of nodes and
not by the call stack.
*/

use super::*;

/// Backtracking search over the simple paths starting at a given node
pub struct SimplePathSearch<'a, G>
where
    G: AdjacencyList + NeighborsSlice,
{
    graph: &'a G,
    start: Node,
    length: NumNodes,
    explored: u64,
}

impl<'a, G> SimplePathSearch<'a, G>
where
    G: AdjacencyList + NeighborsSlice,
{
    /// Creates a search for paths starting at `start` covering all nodes of the graph
    pub fn new(graph: &'a G, start: Node) -> Self {
        Self {
            graph,
            start,
            length: graph.number_of_nodes(),
            explored: 0,
        }
    }

    /// Sets the number of nodes every reported path consists of
    pub fn length(mut self, length: NumNodes) -> Self {
        self.length = length;
        self
    }

    /// Number of complete paths handed to the acceptance predicate so far
    pub fn explored_paths(&self) -> u64 {
        self.explored
    }

    /// Returns the first path (in DFS order) of the configured length that `accept` approves.
    /// ** Panics if `start >= n` **
    pub fn find<F>(&mut self, mut accept: F) -> Option<Vec<Node>>
    where
        F: FnMut(&[Node]) -> bool,
    {
        let length = self.length as usize;
        if length == 0 || length > self.graph.len() {
            return None;
        }

        let mut path = vec![self.start];
        let mut on_path = self.graph.vertex_bitset_unset();
        on_path.set_bit(self.start);
        // index of the next neighbor to try, per path position
        let mut cursors = vec![0usize];

        loop {
            let depth = path.len() - 1;
            let u = path[depth];

            let next = if path.len() == length {
                self.explored += 1;
                if accept(&path) {
                    return Some(path);
                }
                None
            } else {
                let nbs = self.graph.as_neighbors_slice(u);
                let cursor = &mut cursors[depth];
                let mut next = None;
                while let Some(&v) = nbs.get(*cursor) {
                    *cursor += 1;
                    if !on_path.get_bit(v) {
                        next = Some(v);
                        break;
                    }
                }
                next
            };

            if let Some(v) = next {
                path.push(v);
                on_path.set_bit(v);
                cursors.push(0);
            } else {
                path.pop();
                on_path.clear_bit(u);
                cursors.pop();
                if path.is_empty() {
                    return None;
                }
            }
        }
    }
}
