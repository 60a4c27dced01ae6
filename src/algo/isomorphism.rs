/*!
# Isomorphism

Brute-force isomorphism test over all `n!` relabelings of the nodes. Graphs whose node count,
edge count or sorted degree sequence differ are rejected up front, and candidate relabelings
that map a node onto one of different degree are skipped before any edge is checked.

Meant for small graphs only.
*/

use itertools::Itertools;
use log::debug;

use super::*;

/// Isomorphism test between two graphs
pub trait Isomorphism: AdjacencyList + EdgeList + Sized {
    /// Returns a mapping `p` such that `{u, v}` is an edge of `self` exactly if
    /// `{p[u], p[v]}` is an edge of `other`, or `None` if the graphs are not isomorphic.
    /// The first such mapping in lexicographic order is returned.
    ///
    /// # Examples
    /// ```
    /// use grafo::{prelude::*, algo::*};
    ///
    /// let path = Graph::from_edges(3, [(0, 1), (1, 2)]).unwrap();
    /// let other = Graph::from_edges(3, [(2, 0), (0, 1)]).unwrap();
    /// assert_eq!(path.isomorphism(&other), Some(vec![1, 0, 2]));
    /// ```
    fn isomorphism<GO>(&self, other: &GO) -> Option<Vec<Node>>
    where
        GO: AdjacencyList + AdjacencyTest + GraphEdgeOrder,
    {
        if self.number_of_nodes() != other.number_of_nodes()
            || self.number_of_edges() != other.number_of_edges()
            || !self.degrees().sorted().eq(other.degrees().sorted())
        {
            return None;
        }

        let degrees = self.degrees().collect_vec();
        let other_degrees = other.degrees().collect_vec();

        let mut tried = 0u64;
        let result = self
            .vertices_range()
            .permutations(self.len())
            .filter(|p| {
                p.iter()
                    .enumerate()
                    .all(|(u, &pu)| degrees[u] == other_degrees[pu as usize])
            })
            .find(|p| {
                tried += 1;
                self.edges()
                    .all(|Edge(u, v)| other.has_edge(p[u as usize], p[v as usize]))
            });

        debug!(
            "isomorphism search checked {tried} degree preserving mappings, found: {}",
            result.is_some()
        );
        result
    }

    /// Returns *true* if some relabeling of the nodes maps `self` exactly onto `other`
    fn is_isomorphic_to<GO>(&self, other: &GO) -> bool
    where
        GO: AdjacencyList + AdjacencyTest + GraphEdgeOrder,
    {
        self.isomorphism(other).is_some()
    }
}

impl<G: AdjacencyList + EdgeList + Sized> Isomorphism for G {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{gens::*, testing::*};
    use rand::{Rng, SeedableRng, seq::SliceRandom};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn small_cases() {
        assert!(Graph::new(0).is_isomorphic_to(&Graph::new(0)));
        assert!(!Graph::new(3).is_isomorphic_to(&Graph::new(4)));

        // same degree sequence, but C6 is connected and two triangles are not
        let two_triangles =
            Graph::from_edges(6, [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]).unwrap();
        assert!(!Graph::cycle_graph(6).is_isomorphic_to(&two_triangles));

        let star = Graph::star_graph(4);
        let path = Graph::path_graph(4);
        assert!(!star.is_isomorphic_to(&path));

        let loops = Graph::from_edges(2, [(0, 0), (0, 1)]).unwrap();
        let swapped = Graph::from_edges(2, [(1, 1), (0, 1)]).unwrap();
        assert_eq!(loops.isomorphism(&swapped), Some(vec![1, 0]));
    }

    #[test]
    fn permuted_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(8);

        for _ in 0..30 {
            let n = rng.random_range(1..7);
            let graph = random_graph(rng, n, 0.5);

            let mut mapping = (0..n).collect::<Vec<Node>>();
            mapping.shuffle(rng);
            let other = permuted(rng, &graph, &mapping);

            let found = graph.isomorphism(&other).unwrap();
            for Edge(u, v) in graph.edges() {
                assert!(other.has_edge(found[u as usize], found[v as usize]));
            }
            assert!(other.is_isomorphic_to(&graph));
        }
    }
}
