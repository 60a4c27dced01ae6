//! Shared helpers for randomized tests.

use itertools::Itertools;
use rand::Rng;

use crate::{gens::*, prelude::*};

/// Creates a list of at most `m_ub` random edges for nodes `0..n`, self-loops included
pub(crate) fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
    (0..m_ub)
        .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)))
        .collect_vec()
}

/// A loop-free `G(n,p)` graph
pub(crate) fn random_graph<R: Rng>(rng: &mut R, n: NumNodes, p: f64) -> Graph {
    Graph::gnp(rng, n, p)
}

/// A random tree with additional `G(n,p)` edges on top, hence always connected
pub(crate) fn random_connected_graph<R: Rng>(rng: &mut R, n: NumNodes, p: f64) -> Graph {
    let mut graph = Graph::random_tree(rng, n);
    graph.insert_edges(Gnp::new().nodes(n).prob(p).stream(rng));
    graph
}

/// Relabels every node `u` of `graph` to `mapping[u]`, inserting the edges in shuffled order
pub(crate) fn permuted<R: Rng>(rng: &mut R, graph: &Graph, mapping: &[Node]) -> Graph {
    use rand::seq::SliceRandom;

    let mut edges = graph
        .edges()
        .map(|Edge(u, v)| Edge(mapping[u as usize], mapping[v as usize]))
        .collect_vec();
    edges.shuffle(rng);

    let mut result = Graph::new(graph.number_of_nodes());
    result.insert_edges(edges);
    result
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn graph_new() {
        for n in 0..50 {
            let graph = Graph::new(n);

            assert_eq!(graph.number_of_edges(), 0);
            assert_eq!(graph.number_of_nodes(), n);

            assert_eq!(graph.vertices_range().len(), n as usize);
            assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
        }
    }

    #[test]
    fn adjacency_list_matches_bitsets() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [10 as NumNodes, 20, 50] {
            for m_ub in [n * 2, n * 5, n * 10] {
                for _ in 0..10 {
                    let mut adj_matrix: Vec<NodeBitSet> = vec![NodeBitSet::new(n); n as usize];
                    let mut loops = NodeBitSet::new(n);

                    let mut edges = random_edges(rng, n, m_ub);
                    for &Edge(u, v) in &edges {
                        adj_matrix[u as usize].set_bit(v);
                        adj_matrix[v as usize].set_bit(u);
                        if u == v {
                            loops.set_bit(u);
                        }
                    }

                    let graph = Graph::from_edges(n, edges.iter()).unwrap();

                    edges.iter_mut().for_each(|e| *e = e.normalized());
                    edges.sort_unstable();
                    edges.dedup();

                    assert_eq!(graph.number_of_nodes(), n);
                    assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                    assert_eq!(edges, graph.ordered_edges().collect_vec());

                    for u in 0..n {
                        assert_eq!(graph.neighbors_of_as_bitset(u), adj_matrix[u as usize]);
                        let self_loop = loops.get_bit(u) as NumNodes;
                        assert_eq!(
                            graph.degree_of(u),
                            adj_matrix[u as usize].cardinality() as NumNodes + self_loop
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn connected_helper() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);
        for n in 1..30 {
            let graph = random_connected_graph(rng, n, 0.1);
            assert!(graph.number_of_edges() + 1 >= n);
        }
    }
}
