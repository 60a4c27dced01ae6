/*!
# Distances

Hop distances computed by breadth-first search, and the measures derived from them:
eccentricity, diameter, radius and center. All of these are only defined on connected graphs;
on a disconnected graph they fail with [`GraphError::Disconnected`], on a graph without nodes
with [`GraphError::EmptyGraph`].

The central tree is the BFS tree rooted at the first center node. It is a spanning tree of
minimum height.
*/

use super::*;

/// Distance queries based on breadth-first search
pub trait Distances: AdjacencyList + Sized {
    /// Returns the hop distance from `u` to every node, [`INVALID_NODE`] for unreachable nodes.
    /// ** Panics if `u >= n` **
    ///
    /// # Examples
    /// ```
    /// use grafo::{prelude::*, algo::*};
    ///
    /// let graph = Graph::from_edges(4, [(0, 1), (1, 2)]).unwrap();
    /// assert_eq!(graph.distances_from(1), vec![1, 0, 1, INVALID_NODE]);
    /// ```
    fn distances_from(&self, u: Node) -> Vec<Node> {
        self.bfs_with_predecessor(u).depths()
    }

    /// Returns the all-pairs distance matrix, row `u` holding [`Distances::distances_from`]`(u)`.
    /// Runs one BFS per node.
    fn distance_matrix(&self) -> Vec<Vec<Node>> {
        self.vertices().map(|u| self.distances_from(u)).collect()
    }

    /// Returns the largest distance from `u` to any node.
    /// Fails with [`GraphError::InvalidVertex`] or [`GraphError::Disconnected`].
    fn eccentricity(&self, u: Node) -> Result<NumNodes> {
        self.check_vertex(u)?;
        eccentricity_of(&self.distances_from(u))
    }

    /// Returns the eccentricity of every node
    fn eccentricities(&self) -> Result<Vec<NumNodes>> {
        if self.is_empty() {
            return Err(GraphError::EmptyGraph);
        }
        self.vertices()
            .map(|u| eccentricity_of(&self.distances_from(u)))
            .collect()
    }

    /// Returns the largest distance between any two nodes.
    ///
    /// # Examples
    /// ```
    /// use grafo::{prelude::*, algo::*};
    ///
    /// let path = Graph::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
    /// assert_eq!(path.diameter(), Ok(4));
    /// assert_eq!(path.radius(), Ok(2));
    /// assert_eq!(path.center(), Ok(vec![2]));
    /// ```
    fn diameter(&self) -> Result<NumNodes> {
        Ok(self.eccentricities()?.into_iter().max().unwrap_or(0))
    }

    /// Returns the smallest eccentricity of any node
    fn radius(&self) -> Result<NumNodes> {
        Ok(self.eccentricities()?.into_iter().min().unwrap_or(0))
    }

    /// Returns all nodes whose eccentricity equals the radius, in increasing order
    fn center(&self) -> Result<Vec<Node>> {
        let ecc = self.eccentricities()?;
        let radius = ecc.iter().copied().min().unwrap_or(0);
        Ok(self.vertices().filter(|&u| ecc[u as usize] == radius).collect())
    }

    /// Returns the BFS tree rooted at the first center node together with that root.
    /// Tree edges appear in BFS order.
    fn central_tree_as<GO>(&self) -> Result<(GO, Node)>
    where
        GO: GraphNew + GraphEdgeEditing,
    {
        let center = self.center()?;
        let root = center[0];

        let mut tree = GO::new(self.number_of_nodes());
        for Edge(u, v) in self.bfs_with_predecessor(root).tree_edges() {
            tree.insert_edge(u, v);
        }
        Ok((tree, root))
    }
}

fn eccentricity_of(distances: &[Node]) -> Result<NumNodes> {
    let max = distances.iter().copied().max().unwrap_or(0);
    if max == INVALID_NODE {
        Err(GraphError::Disconnected)
    } else {
        Ok(max)
    }
}

impl<G: AdjacencyList + Sized> Distances for G {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{gens::*, testing::*};
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn measures() {
        let cycle = Graph::cycle_graph(6);
        assert_eq!(cycle.diameter(), Ok(3));
        assert_eq!(cycle.radius(), Ok(3));
        assert_eq!(cycle.center(), Ok((0..6).collect()));

        let star = Graph::star_graph(5);
        assert_eq!(star.diameter(), Ok(2));
        assert_eq!(star.radius(), Ok(1));
        assert_eq!(star.center(), Ok(vec![0]));
        assert_eq!(star.eccentricity(3), Ok(2));

        assert_eq!(Graph::new(1).diameter(), Ok(0));
        assert_eq!(Graph::new(0).diameter(), Err(GraphError::EmptyGraph));
        assert_eq!(Graph::new(2).radius(), Err(GraphError::Disconnected));
        assert_eq!(
            star.eccentricity(5),
            Err(GraphError::InvalidVertex {
                vertex: 5,
                num_nodes: 5
            })
        );
    }

    #[test]
    fn distance_matrix_is_symmetric() {
        let rng = &mut Pcg64Mcg::seed_from_u64(17);

        for _ in 0..20 {
            let n = rng.random_range(1..20);
            let graph = random_graph(rng, n, 0.2);
            let matrix = graph.distance_matrix();

            for u in graph.vertices() {
                assert_eq!(matrix[u as usize][u as usize], 0);
                for v in graph.vertices() {
                    assert_eq!(matrix[u as usize][v as usize], matrix[v as usize][u as usize]);
                    if graph.has_edge(u, v) && u != v {
                        assert_eq!(matrix[u as usize][v as usize], 1);
                    }
                }
            }
        }
    }

    #[test]
    fn central_tree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for _ in 0..20 {
            let n = rng.random_range(1..30);
            let graph = random_connected_graph(rng, n, 0.1);
            let (tree, root): (Graph, Node) = graph.central_tree_as().unwrap();

            assert!(tree.is_spanning_tree_of(&graph));
            assert_eq!(tree.eccentricity(root), graph.radius());
            assert_eq!(graph.center().unwrap()[0], root);
        }

        assert!(
            Graph::new(3)
                .central_tree_as::<Graph>()
                .is_err_and(|e| e == GraphError::Disconnected)
        );
    }
}
