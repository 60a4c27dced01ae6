/*!
# Cycle Search

- [`Cycles::find_cycle`] searches a cycle through exactly `length` vertices by extending simple
  paths depth-first from every start vertex in turn ([`SimplePathSearch`]). The first cycle in
  that order is returned. Exponential in `length`.
- [`Cycles::shortest_cycle`] runs a BFS from every vertex. Every edge that joins two reached
  vertices without being a tree edge closes a cycle through the lowest common ancestor of its
  endpoints; the shortest of these over all start vertices is returned. Runs in `O(n (n + m))`.
  On graphs without multi-edges this length equals the girth; ties are broken by start vertex
  and BFS order. Closing at the common ancestor makes the result exact, unlike a search that only
  closes cycles at the start vertex and can report a longer cycle than the shortest one.

Self-loops are never considered cycles.
*/

use super::*;

/// Cycle searches
pub trait Cycles: AdjacencyList + AdjacencyTest + NeighborsSlice {
    /// Returns the first cycle through exactly `length` distinct vertices, as the sequence of its
    /// vertices (the start vertex is not repeated at the end).
    ///
    /// Start vertices are tried in order `0..n`, neighbors in adjacency-list order.
    /// Fails with [`GraphError::CycleTooShort`] if `length < 3`.
    ///
    /// # Examples
    /// ```
    /// use grafo::{prelude::*, algo::*};
    ///
    /// let square = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
    /// assert_eq!(square.find_cycle(3), Ok(None));
    /// assert_eq!(square.find_cycle(4), Ok(Some(vec![0, 1, 2, 3])));
    /// ```
    fn find_cycle(&self, length: NumNodes) -> Result<Option<Vec<Node>>> {
        if length < 3 {
            return Err(GraphError::CycleTooShort(length));
        }

        Ok(self.vertices().find_map(|start| {
            SimplePathSearch::new(self, start)
                .length(length)
                .find(|path| self.has_edge(path[path.len() - 1], start))
        }))
    }

    /// Returns the length and the vertices of a shortest cycle, or `None` if the graph has
    /// fewer than 3 vertices or no cycle.
    ///
    /// # Examples
    /// ```
    /// use grafo::{prelude::*, algo::*};
    ///
    /// // a square with the diagonal (0, 2)
    /// let graph = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]).unwrap();
    /// let (length, cycle) = graph.shortest_cycle().unwrap();
    /// assert_eq!(length, 3);
    /// assert_eq!(cycle.len(), 3);
    /// ```
    fn shortest_cycle(&self) -> Option<(NumNodes, Vec<Node>)> {
        if self.number_of_nodes() < 3 {
            return None;
        }

        let mut best: Option<Vec<Node>> = None;
        let mut parent = vec![INVALID_NODE; self.len()];
        let mut depth = vec![INVALID_NODE; self.len()];

        for start in self.vertices() {
            parent.fill(INVALID_NODE);
            depth.fill(INVALID_NODE);

            let order: Vec<PredecessorOfNode> = self.bfs_with_predecessor(start).collect();
            for &(p, u) in &order {
                parent[u as usize] = p;
                depth[u as usize] = if p == u { 0 } else { depth[p as usize] + 1 };
            }

            for &(_, u) in &order {
                // no cycle found from here on can be shorter than 2 * depth + 1
                if best
                    .as_ref()
                    .is_some_and(|c| (c.len() as Node) <= 2 * depth[u as usize] + 1)
                {
                    break;
                }

                for v in self.neighbors_of(u) {
                    if u == v || parent[u as usize] == v || parent[v as usize] == u {
                        continue;
                    }

                    let cycle = close_cycle(&parent, &depth, u, v);
                    if best.as_ref().is_none_or(|c| cycle.len() < c.len()) {
                        best = Some(cycle);
                    }
                }
            }
        }

        best.map(|c| (c.len() as NumNodes, c))
    }

    /// Length of a shortest cycle, `None` for acyclic graphs
    fn girth(&self) -> Option<NumNodes> {
        self.shortest_cycle().map(|(length, _)| length)
    }
}

/// Cycle formed by the tree paths from `u` and `v` up to their lowest common ancestor and the
/// edge `{u, v}`: `u, .., lca, .., v`
fn close_cycle(parent: &[Node], depth: &[Node], mut u: Node, mut v: Node) -> Vec<Node> {
    let mut up = Vec::new();
    let mut down = Vec::new();

    while depth[u as usize] > depth[v as usize] {
        up.push(u);
        u = parent[u as usize];
    }
    while depth[v as usize] > depth[u as usize] {
        down.push(v);
        v = parent[v as usize];
    }
    while u != v {
        up.push(u);
        down.push(v);
        u = parent[u as usize];
        v = parent[v as usize];
    }

    up.push(u);
    up.extend(down.into_iter().rev());
    up
}

impl<G> Cycles for G where G: AdjacencyList + AdjacencyTest + NeighborsSlice {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{gens::*, testing::*};
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn assert_cycle(graph: &Graph, cycle: &[Node]) {
        assert!(cycle.len() >= 3);
        assert_eq!(cycle.iter().unique().count(), cycle.len());
        assert!(
            cycle
                .iter()
                .circular_tuple_windows()
                .all(|(&u, &v)| graph.has_edge(u, v))
        );
    }

    #[test]
    fn fixed_length() {
        let square = Graph::cycle_graph(4);
        assert_eq!(square.find_cycle(3), Ok(None));
        assert_eq!(square.find_cycle(4), Ok(Some(vec![0, 1, 2, 3])));
        assert_eq!(square.find_cycle(5), Ok(None));
        assert_eq!(square.find_cycle(2), Err(GraphError::CycleTooShort(2)));

        let k5 = Graph::complete_graph(5);
        for length in 3..=5 {
            let cycle = k5.find_cycle(length).unwrap().unwrap();
            assert_eq!(cycle.len(), length as usize);
            assert_cycle(&k5, &cycle);
        }

        // the triangle only exists on the vertices 2, 3, 4
        let graph = Graph::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 2)]).unwrap();
        assert_eq!(graph.find_cycle(3), Ok(Some(vec![2, 3, 4])));
    }

    #[test]
    fn shortest() {
        assert_eq!(Graph::path_graph(6).shortest_cycle(), None);
        assert_eq!(Graph::complete_graph(2).shortest_cycle(), None);
        assert_eq!(
            Graph::from_edges(3, [(0, 0), (1, 1), (0, 1)]).unwrap().shortest_cycle(),
            None
        );

        for n in 3..10 {
            let (length, cycle) = Graph::cycle_graph(n).shortest_cycle().unwrap();
            assert_eq!(length, n);
            assert_cycle(&Graph::cycle_graph(n), &cycle);
        }

        // a square and a disjoint triangle
        let graph =
            Graph::from_edges(7, [(0, 1), (1, 2), (2, 3), (3, 0), (4, 5), (5, 6), (6, 4)]).unwrap();
        let (length, cycle) = graph.shortest_cycle().unwrap();
        assert_eq!(length, 3);
        assert_eq!(cycle.iter().copied().sorted().collect_vec(), vec![4, 5, 6]);
        assert_eq!(graph.girth(), Some(3));

        // the pentagon through vertex 0 hides a triangle hanging off vertex 2
        let graph = Graph::from_edges(
            7,
            [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0), (2, 5), (5, 6), (6, 2)],
        )
        .unwrap();
        let (length, cycle) = graph.shortest_cycle().unwrap();
        assert_eq!(length, 3);
        assert_eq!(cycle.iter().copied().sorted().collect_vec(), vec![2, 5, 6]);
        assert_cycle(&graph, &cycle);
    }

    #[test]
    fn shortest_agrees_with_fixed_length() {
        let rng = &mut Pcg64Mcg::seed_from_u64(21);

        for _ in 0..100 {
            let n = rng.random_range(3..10);
            let graph = random_graph(rng, n, 0.3);

            let expected = (3..=n).find(|&l| graph.find_cycle(l).unwrap().is_some());
            match graph.shortest_cycle() {
                Some((length, cycle)) => {
                    assert_eq!(Some(length), expected);
                    assert_eq!(cycle.len(), length as usize);
                    assert_cycle(&graph, &cycle);
                }
                None => assert_eq!(expected, None),
            }
        }
    }
}
