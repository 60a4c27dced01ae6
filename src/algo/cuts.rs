/*!
# Edge Cuts

Three distinct ways of separating a connected graph by deleting edges:

- [`FundamentalCut`]: delete one edge of a spanning tree; the tree falls apart into exactly two
  components and the cut consists of every graph edge between them. Runs in `O(n + m)`.
- [`MinimumCut`]: the smallest set of edges whose deletion disconnects the graph, found by
  exhaustively enumerating edge subsets of size `k = 1, 2, ...` in lexicographic order of their
  insertion indices. Each candidate is checked with a BFS from vertex 0, so the running time is
  `O(sum_k C(m, k) * (n + m))`: exponential, only use it on small or sparse graphs. The result is
  the first cut in enumeration order, not one chosen by any flow criterion.
- [`Cuts::cut_of_size`]: the same enumeration restricted to a single subset size.

All cuts require a connected graph with at least one edge; other graphs are rejected with
[`GraphError::Disconnected`] or [`GraphError::NoEdges`].
*/

use fxhash::FxHashSet;
use itertools::Itertools;
use log::{debug, trace};
use rand::Rng;

use super::*;

/// A set of edges whose deletion disconnects the graph
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeCut {
    edges: Vec<Edge>,
    side: NodeBitSet,
}

impl EdgeCut {
    /// The cut edges, normalized, in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The nodes on one side of the cut. For fundamental cuts this is the component containing
    /// the first endpoint of the deleted tree edge, otherwise the nodes still reachable from
    /// vertex 0.
    pub fn side(&self) -> &NodeBitSet {
        &self.side
    }

    /// Number of cut edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns *true* if the cut has no edges
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns *true* if the cut contains the edge `{u, v}`
    pub fn contains(&self, u: Node, v: Node) -> bool {
        self.edges.contains(&Edge(u, v).normalized())
    }

    /// Consumes the cut and returns its edges
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }
}

fn check_cut_preconditions<G>(graph: &G) -> Result<()>
where
    G: Connectivity,
{
    if !graph.is_connected() {
        return Err(GraphError::Disconnected);
    }
    if graph.is_singleton_graph() {
        return Err(GraphError::NoEdges);
    }
    Ok(())
}

/// Which spanning tree edge a [`FundamentalCut`] deletes
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum TreeEdgeSelection {
    /// The first tree edge
    #[default]
    First,
    /// The last tree edge
    Last,
    /// The tree edge at the given position
    At(usize),
}

/// Computes the fundamental cut of a spanning tree edge.
///
/// The spanning tree is the one returned by [`SpanningTree::spanning_tree`]; tree edges are
/// indexed in its order.
///
/// # Examples
/// ```
/// use grafo::{prelude::*, algo::*};
///
/// // a square with a pendant vertex 4
/// let graph = Graph::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 0), (3, 4)]).unwrap();
///
/// let cut = FundamentalCut::new(&graph).compute().unwrap().into_value().unwrap();
/// assert_eq!(cut.edges(), &[Edge(0, 1), Edge(0, 3)]);
///
/// let cut = FundamentalCut::new(&graph)
///     .tree_edge(TreeEdgeSelection::Last)
///     .compute()
///     .unwrap()
///     .into_value()
///     .unwrap();
/// assert_eq!(cut.edges(), &[Edge(3, 4)]);
/// ```
pub struct FundamentalCut<'a, G> {
    graph: &'a G,
    selection: TreeEdgeSelection,
}

impl<'a, G> FundamentalCut<'a, G>
where
    G: AdjacencyList + EdgeList + Connectivity,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            selection: TreeEdgeSelection::default(),
        }
    }

    /// Selects the tree edge to delete
    pub fn tree_edge(mut self, selection: TreeEdgeSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Selects a uniformly random tree edge to delete
    pub fn random_tree_edge<R: Rng>(self, rng: &mut R) -> Self {
        // a spanning tree of a connected graph has exactly n - 1 edges
        let tree_edges = self.graph.len().saturating_sub(1);
        if tree_edges == 0 {
            return self;
        }
        self.tree_edge(TreeEdgeSelection::At(rng.random_range(0..tree_edges)))
    }

    /// Computes the cut.
    ///
    /// Fails if the graph is disconnected or has no edges. If the tree has no edge at the
    /// selected position, nothing is found.
    pub fn compute(&self) -> Result<Analysis<EdgeCut>> {
        check_cut_preconditions(self.graph)?;

        let tree = self.graph.spanning_tree()?;
        let chosen = match self.selection {
            TreeEdgeSelection::First => tree.first(),
            TreeEdgeSelection::Last => tree.last(),
            TreeEdgeSelection::At(i) => tree.get(i),
        };
        let Some(&chosen) = chosen else {
            return Ok(Analysis::not_found(format!(
                "The spanning tree has no edge at position {:?}",
                self.selection
            )));
        };

        let mut components = UnionFind::new(self.graph.number_of_nodes());
        for &Edge(u, v) in tree.iter().filter(|&&e| e != chosen) {
            components.union(u, v);
        }
        if components.number_of_sets() != 2 {
            return Err(GraphError::TreeSplit {
                edge: chosen,
                components: components.number_of_sets() as usize,
            });
        }

        let root = components.find(chosen.0);
        let side = NodeBitSet::new_with_bits_set(
            self.graph.number_of_nodes(),
            self.graph.vertices().filter(|&u| components.find(u) == root),
        );

        let edges = self
            .graph
            .edges()
            .filter(|&Edge(u, v)| side.get_bit(u) != side.get_bit(v))
            .collect_vec();

        let message = format!(
            "Fundamental cut of tree edge {chosen} found with {} edges",
            edges.len()
        );
        Ok(Analysis::found(EdgeCut { edges, side }, message))
    }
}

/// Exhaustive search for a cut with the fewest edges.
///
/// # Examples
/// ```
/// use grafo::{prelude::*, algo::*};
///
/// // two triangles joined by the edge (2, 3)
/// let graph = Graph::from_edges(6, [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 5), (5, 3)]).unwrap();
///
/// let cut = MinimumCut::new(&graph).compute().unwrap().into_value().unwrap();
/// assert_eq!(cut.edges(), &[Edge(2, 3)]);
/// ```
pub struct MinimumCut<'a, G> {
    graph: &'a G,
    max_size: Option<NumEdges>,
}

impl<'a, G> MinimumCut<'a, G>
where
    G: AdjacencyList + EdgeList + Connectivity,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            max_size: None,
        }
    }

    /// Stops the search after all subsets of `max_size` edges were checked
    pub fn max_size(mut self, max_size: NumEdges) -> Self {
        self.max_size = Some(max_size);
        self
    }

    /// Searches the cut, see the module documentation for the running time.
    pub fn compute(&self) -> Result<Analysis<EdgeCut>> {
        check_cut_preconditions(self.graph)?;

        let m = self.graph.number_of_edges();
        let limit = self.max_size.map_or(m, |k| k.min(m));
        debug!("searching minimum cut with up to {limit} of {m} edges");

        for size in 1..=limit {
            trace!("checking edge subsets of size {size}");
            if let Some(cut) = first_cut_of_size(self.graph, size) {
                let message = format!("Minimum cut found with {size} edges");
                return Ok(Analysis::found(cut, message));
            }
        }

        Ok(Analysis::not_found(if limit < m {
            format!("No cut with at most {limit} edges exists")
        } else {
            "No edge cut exists".to_string()
        }))
    }
}

/// Returns the first subset of `size` edges (lexicographic over insertion indices) whose
/// deletion leaves some vertex unreachable from vertex 0
fn first_cut_of_size<G>(graph: &G, size: NumEdges) -> Option<EdgeCut>
where
    G: AdjacencyList + EdgeList,
{
    let edges = graph.edge_list();
    let mut excluded = FxHashSet::default();
    let mut checked = 0u64;

    for subset in (0..edges.len()).combinations(size as usize) {
        checked += 1;
        excluded.clear();
        excluded.extend(subset.iter().map(|&i| edges[i]));

        let side = graph.bfs(0).with_edges_excluded(&excluded).into_reachable();
        if !side.are_all_set() {
            debug!("found cut of size {size} after checking {checked} subsets");
            return Some(EdgeCut {
                edges: subset.into_iter().map(|i| edges[i]).collect(),
                side,
            });
        }
    }

    trace!("none of {checked} subsets of size {size} is a cut");
    None
}

/// Edge cut shortcuts on the graph itself
pub trait Cuts: AdjacencyList + EdgeList + Connectivity {
    /// Fundamental cut of the first spanning tree edge, see [`FundamentalCut`]
    fn fundamental_cut(&self) -> Result<Analysis<EdgeCut>> {
        FundamentalCut::new(self).compute()
    }

    /// Fundamental cut of a uniformly random spanning tree edge, see [`FundamentalCut`]
    fn random_fundamental_cut<R: Rng>(&self, rng: &mut R) -> Result<Analysis<EdgeCut>> {
        FundamentalCut::new(self).random_tree_edge(rng).compute()
    }

    /// A cut with the fewest edges, see [`MinimumCut`]
    fn minimum_cut(&self) -> Result<Analysis<EdgeCut>> {
        MinimumCut::new(self).compute()
    }

    /// The first subset of exactly `size` edges whose deletion disconnects the graph, in
    /// lexicographic order of insertion indices. The subset need not be minimal.
    ///
    /// Fails if the graph is disconnected, has no edges or `size == 0`.
    /// Exponential in `size`, see [`MinimumCut`].
    fn cut_of_size(&self, size: NumEdges) -> Result<Analysis<EdgeCut>> {
        check_cut_preconditions(self)?;

        let m = self.number_of_edges();
        if size == 0 {
            return Err(GraphError::InvalidCutSize { size, num_edges: m });
        }
        if size > m {
            return Ok(Analysis::not_found(format!(
                "The graph has only {m} edges, no cut with {size} edges exists"
            )));
        }

        debug!("searching cut with {size} of {m} edges");
        Ok(match first_cut_of_size(self, size) {
            Some(cut) => Analysis::found(cut, format!("Cut with {size} edges found")),
            None => Analysis::not_found(format!("No cut with {size} edges exists")),
        })
    }
}

impl<G> Cuts for G where G: AdjacencyList + EdgeList + Connectivity {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{gens::*, testing::*};
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn assert_disconnects(graph: &Graph, cut: &EdgeCut) {
        let excluded: FxHashSet<Edge> = cut.edges().iter().copied().collect();
        let reachable = graph.bfs(0).with_edges_excluded(&excluded).into_reachable();
        assert!(!reachable.are_all_set());
    }

    #[test]
    fn preconditions() {
        let disconnected = Graph::from_edges(3, [(0, 1)]).unwrap();
        assert_eq!(disconnected.fundamental_cut(), Err(GraphError::Disconnected));
        assert_eq!(disconnected.minimum_cut(), Err(GraphError::Disconnected));
        assert_eq!(disconnected.cut_of_size(1), Err(GraphError::Disconnected));

        let single = Graph::new(1);
        assert_eq!(single.fundamental_cut(), Err(GraphError::NoEdges));
        assert_eq!(single.minimum_cut(), Err(GraphError::NoEdges));
        assert_eq!(Graph::new(0).minimum_cut(), Err(GraphError::NoEdges));

        let edge = Graph::path_graph(2);
        assert_eq!(
            edge.cut_of_size(0),
            Err(GraphError::InvalidCutSize {
                size: 0,
                num_edges: 1
            })
        );
    }

    #[test]
    fn single_edge() {
        let graph = Graph::from_edges(2, [(0, 1)]).unwrap();

        let cut = graph.minimum_cut().unwrap().into_value().unwrap();
        assert_eq!(cut.edges(), &[Edge(0, 1)]);
        assert_eq!(cut.len(), 1);

        let cut = graph.fundamental_cut().unwrap().into_value().unwrap();
        assert_eq!(cut.edges(), &[Edge(0, 1)]);
        assert!(cut.side().get_bit(0));
        assert!(!cut.side().get_bit(1));

        let analysis = graph.cut_of_size(2).unwrap();
        assert!(!analysis.is_found());
    }

    #[test]
    fn loop_only_graph() {
        let graph = Graph::from_edges(1, [(0, 0)]).unwrap();
        assert!(!graph.fundamental_cut().unwrap().is_found());
        assert!(!graph.minimum_cut().unwrap().is_found());
        assert!(!graph.cut_of_size(1).unwrap().is_found());
    }

    #[test]
    fn cut_of_size_in_enumeration_order() {
        let square = Graph::cycle_graph(4);
        assert!(!square.cut_of_size(1).unwrap().is_found());

        let cut = square.cut_of_size(2).unwrap().into_value().unwrap();
        assert_eq!(cut.edges(), &[Edge(0, 1), Edge(1, 2)]);

        // the first qualifying triple contains a non-crossing edge
        let cut = square.cut_of_size(3).unwrap().into_value().unwrap();
        assert_eq!(cut.edges(), &[Edge(0, 1), Edge(1, 2), Edge(2, 3)]);

        let cut = square.minimum_cut().unwrap().into_value().unwrap();
        assert_eq!(cut.len(), 2);
        assert!(cut.contains(1, 0));
    }

    #[test]
    fn capped_minimum_cut() {
        let k4 = Graph::complete_graph(4);
        let analysis = MinimumCut::new(&k4).max_size(2).compute().unwrap();
        assert!(!analysis.is_found());
        assert!(analysis.message().contains("at most 2"));

        let cut = k4.minimum_cut().unwrap().into_value().unwrap();
        assert_eq!(cut.len(), 3);
        assert_disconnects(&k4, &cut);
    }

    #[test]
    fn fundamental_cuts_cross_tree_edge() {
        let rng = &mut Pcg64Mcg::seed_from_u64(31);

        for n in 2..20 {
            let graph = random_connected_graph(rng, n, 0.3);
            let tree = graph.spanning_tree().unwrap();

            for (i, &tree_edge) in tree.iter().enumerate() {
                let cut = FundamentalCut::new(&graph)
                    .tree_edge(TreeEdgeSelection::At(i))
                    .compute()
                    .unwrap()
                    .into_value()
                    .unwrap();

                assert!(cut.edges().contains(&tree_edge));
                assert_eq!(
                    cut.edges().iter().filter(|e| tree.contains(e)).count(),
                    1
                );
                assert_disconnects(&graph, &cut);
            }

            let random = graph.random_fundamental_cut(rng).unwrap();
            assert!(random.is_found());

            let beyond = FundamentalCut::new(&graph)
                .tree_edge(TreeEdgeSelection::At(tree.len()))
                .compute()
                .unwrap();
            assert!(!beyond.is_found());
        }
    }

    #[test]
    fn minimum_cut_is_not_larger_than_min_degree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(8);

        for n in 2..8 {
            let graph = random_connected_graph(rng, n, 0.4);
            let cut = graph.minimum_cut().unwrap().into_value().unwrap();
            let min_degree = graph.degrees().min().unwrap();

            assert!(cut.len() <= min_degree as usize);
            assert_disconnects(&graph, &cut);
            assert!(!graph.cut_of_size(cut.len() as NumEdges - 1).is_ok_and(|a| a.is_found()));
        }
    }
}
