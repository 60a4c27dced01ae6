/*!
Graph traversal algorithms and traversal-derived utilities.

This module provides:
- Generic traversal iterators (BFS, DFS, with and without predecessor tracking).
- Edge exclusion, used by the cut searches to test reachability after deleting edges
  without ever copying the graph.
- Parent and depth arrays derived from a traversal tree.
- A high-level `Traversal` trait that exposes traversal algorithms
  directly as methods on graph data structures.

All traversals use an explicit frontier, so their depth is never bounded by the call stack.
*/

use super::*;
use fxhash::FxHashSet;
use std::{collections::VecDeque, marker::PhantomData};

/// Abstraction for items yielded by a traversal iterator.
///
/// A `SequencedItem` encodes both the node currently visited
/// and an optional predecessor that represents its parent
/// in the traversal tree.
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Constructs a new item without predecessor information.
    fn new_without_predecessor(item: Node) -> Self;

    /// Returns the node represented by this item.
    fn item(&self) -> Node;

    /// Returns the predecessor of this node, if any.
    fn predecessor(&self) -> Option<Node>;
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// Compact representation of `(predecessor, node)` used for
/// traversals with parent tracking.
///
/// Internally, the absence of a predecessor is encoded by
/// setting both tuple entries to the same node value.
pub type PredecessorOfNode = (Node, Node);
impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }
    fn item(&self) -> Node {
        self.1
    }
    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// Abstraction for the traversal frontier data structure.
///
/// - [`VecDeque`] -> queue semantics -> BFS
/// - [`Vec`] -> stack semantics -> DFS
pub trait NodeSequencer<T> {
    /// Creates a new sequencer initialized with a single node.
    fn init(u: T) -> Self;

    /// Pushes a node into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> NodeSequencer<T> for VecDeque<T> {
    fn init(u: T) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> NodeSequencer<T> for Vec<T> {
    fn init(u: T) -> Self {
        vec![u]
    }
    fn push(&mut self, u: T) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit frontier (queue or stack) of nodes to visit,
/// a set of visited nodes, and optionally records predecessor information.
/// Nodes are marked visited when they are pushed, so every node is yielded at most once.
pub struct TraversalSearch<'a, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    graph: &'a G,
    visited: NodeBitSet,
    sequencer: S,
    stop_at: Option<Node>,
    excluded_edges: Option<&'a FxHashSet<Edge>>,
    _item: PhantomData<I>,
}

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>, Node>;

/// A DFS traversal iterator over the graph, visiting nodes in
/// depth-first order from a given starting node.
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Node>, Node>;

/// A BFS traversal iterator that records predecessor information,
/// producing a spanning tree of the search.
pub type BFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, VecDeque<PredecessorOfNode>, PredecessorOfNode>;

impl<G, S, I> Iterator for TraversalSearch<'_, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.sequencer.pop()?;
        let u = popped.item();

        if self.stop_at == Some(u) {
            while self.sequencer.pop().is_some() {} // drop all
        } else {
            for v in self.graph.neighbors_of(u) {
                if self
                    .excluded_edges
                    .is_some_and(|ex| ex.contains(&Edge(u, v).normalized()))
                {
                    continue;
                }

                if !self.visited.set_bit(v) {
                    self.sequencer.push(I::new_with_predecessor(u, v));
                }
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.sequencer.cardinality(),
            Some(self.sequencer.cardinality() + self.visited.iter_cleared_bits().count()),
        )
    }
}

impl<'a, G, S, I> TraversalSearch<'a, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);
        Self {
            graph,
            visited,
            sequencer: S::init(I::new_without_predecessor(start)),
            stop_at: None,
            excluded_edges: None,
            _item: PhantomData,
        }
    }

    /// Returns the set of nodes discovered so far
    pub fn visited(&self) -> &NodeBitSet {
        &self.visited
    }

    /// Tries to restart the search at an yet unvisited node and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert_eq!(self.sequencer.cardinality(), 0);
        let next = self.visited.iter_cleared_bits().next();
        match next {
            None => false,
            Some(x) => {
                self.visited.set_bit(x);
                self.sequencer.push(I::new_without_predecessor(x));
                true
            }
        }
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn stop_at(mut self, stopper: Node) -> Self {
        self.stop_at = Some(stopper);
        self
    }

    /// Excludes a node from the search. It will be treated as if it was already visited,
    /// i.e. no edges to or from that node will be taken.
    ///
    /// # Warning
    /// Calling this method has no effect if the node is already on the stack. It is therefore highly
    /// recommended to call this method directly after the constructor.
    pub fn with_node_excluded(mut self, u: Node) -> Self {
        self.visited.set_bit(u);
        self
    }

    /// Ignores every edge contained in `edges` (stored normalized) during the search, as if the
    /// edges had been deleted from the graph.
    pub fn with_edges_excluded(mut self, edges: &'a FxHashSet<Edge>) -> Self {
        self.excluded_edges = Some(edges);
        self
    }

    /// Consumes the search and returns the set of nodes it reaches
    pub fn into_reachable(mut self) -> NodeBitSet {
        while self.next().is_some() {}
        self.visited
    }
}

impl<'a, G, S> TraversalSearch<'a, G, S, PredecessorOfNode>
where
    G: AdjacencyList,
    S: NodeSequencer<PredecessorOfNode>,
{
    /// Consumes the iterator and returns the parent of every node in the implied traversal
    /// tree. Roots and unreached nodes are their own parent.
    ///
    /// # Examples
    /// ```
    /// use grafo::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(3, [(0, 1), (1, 2)]).unwrap();
    ///
    /// let parents = g.bfs_with_predecessor(0).parent_array();
    /// assert_eq!(parents, vec![0, 0, 1]);
    /// ```
    pub fn parent_array(mut self) -> Vec<Node> {
        let mut tree: Vec<_> = self.graph.vertices_range().collect();
        for pred_with_item in self.by_ref() {
            if let Some(p) = pred_with_item.predecessor() {
                tree[pred_with_item.item() as usize] = p;
            }
        }
        tree
    }

    /// Consumes the iterator and computes the depth of each node in
    /// the traversal tree (root depth = 0). Unreached nodes get [`INVALID_NODE`].
    ///
    /// For a BFS these are exactly the hop distances from the start.
    ///
    /// # Examples
    /// ```
    /// use grafo::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(4, [(0, 1), (1, 2)]).unwrap();
    ///
    /// let depths = g.bfs_with_predecessor(0).depths();
    /// assert_eq!(depths, vec![0, 1, 2, INVALID_NODE]);
    /// ```
    pub fn depths(mut self) -> Vec<Node> {
        let mut depths = vec![INVALID_NODE; self.graph.len()];
        for pred_with_item in self.by_ref() {
            depths[pred_with_item.item() as usize] = pred_with_item
                .predecessor()
                .map_or(0, |p| depths[p as usize] + 1);
        }
        depths
    }

    /// Consumes the iterator and returns the traversed tree edges (normalized), in the order
    /// in which the search visits their child nodes.
    pub fn tree_edges(self) -> Vec<Edge> {
        self.filter_map(|(p, u)| (p != u).then(|| Edge(p, u).normalized()))
            .collect()
    }
}

/// Provides convenient traversal methods (BFS, DFS)
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in breadth-first search (BFS) order.
    ///
    /// # Examples
    /// ```
    /// use grafo::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(3, [(0, 1), (0, 2)]).unwrap();
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in depth-first search (DFS) order.
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }

    /// Returns a BFS iterator starting from `start` that additionally
    /// yields the predecessor relation (edges traversed).
    fn bfs_with_predecessor(&self, start: Node) -> BFSWithPredecessor<'_, Self> {
        BFSWithPredecessor::new(self, start)
    }

    /// Returns *true* if `v` can be reached from `u`
    /// ** Panics if `u >= n || v >= n` **
    fn is_reachable(&self, u: Node, v: Node) -> bool {
        self.bfs(u).stop_at(v).any(|w| w == v)
    }
}

impl<T: AdjacencyList + Sized> Traversal for T {}
