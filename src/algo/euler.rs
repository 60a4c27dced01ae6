/*!
# Eulerian Graphs

Classification by degree parity and connectivity, and construction of the Eulerian
trail/circuit with Hierholzer's algorithm.

A graph is *Eulerian* if it is connected and every vertex has even degree, and *semi-Eulerian*
if it is connected and has exactly two vertices of odd degree. Connectivity is required over all
vertices, so isolated vertices make a graph non-Eulerian. Self-loops contribute 2 to the degree.
*/

use std::fmt::Display;

use itertools::Itertools;

use super::*;

/// Result of the Eulerian classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EulerClass {
    /// Connected and all degrees even: an Eulerian circuit exists
    Eulerian,
    /// Connected with exactly two odd-degree vertices: an Eulerian trail between them exists
    SemiEulerian { odd: (Node, Node) },
    /// Connected, but with more than two odd-degree vertices
    NotEulerian { odd_vertices: Vec<Node> },
    /// Not connected
    Disconnected,
}

impl EulerClass {
    /// Returns *true* only for [`EulerClass::Eulerian`]
    pub fn is_eulerian(&self) -> bool {
        matches!(self, Self::Eulerian)
    }

    /// Returns the human readable verdict
    pub fn message(&self) -> String {
        match self {
            Self::Eulerian => "The graph is Eulerian".into(),
            Self::SemiEulerian { odd: (u, v) } => format!(
                "The graph is semi-Eulerian (it has an Eulerian path between {u} and {v})"
            ),
            Self::NotEulerian { odd_vertices } => format!(
                "The graph is neither Eulerian nor semi-Eulerian ({} vertices of odd degree)",
                odd_vertices.len()
            ),
            Self::Disconnected => "The graph is not connected".into(),
        }
    }
}

impl Display for EulerClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

/// Eulerian classification and trail construction
pub trait Eulerian: AdjacencyList + EdgeList + Connectivity {
    /// Classifies the graph, see [`EulerClass`]
    fn euler_class(&self) -> EulerClass {
        if !self.is_connected() {
            return EulerClass::Disconnected;
        }

        let odd_vertices = self.vertices_with_odd_degree().collect_vec();
        match odd_vertices.as_slice() {
            [] => EulerClass::Eulerian,
            &[u, v] => EulerClass::SemiEulerian { odd: (u, v) },
            _ => EulerClass::NotEulerian { odd_vertices },
        }
    }

    /// Returns *true* if the graph is Eulerian, together with a message that distinguishes
    /// Eulerian, semi-Eulerian, non-Eulerian and disconnected graphs.
    ///
    /// # Examples
    /// ```
    /// use grafo::{prelude::*, algo::*};
    ///
    /// let path = Graph::from_edges(3, [(0, 1), (1, 2)]).unwrap();
    /// let (eulerian, message) = path.is_eulerian();
    /// assert!(!eulerian);
    /// assert!(message.contains("semi-Eulerian"));
    /// ```
    fn is_eulerian(&self) -> (bool, String) {
        let class = self.euler_class();
        (class.is_eulerian(), class.message())
    }

    /// Returns an Eulerian circuit (for Eulerian graphs) or an Eulerian trail (for
    /// semi-Eulerian graphs) as sequence of `m + 1` vertices, `None` otherwise.
    ///
    /// A circuit starts and ends at vertex 0; a trail starts at the smaller odd-degree vertex.
    fn eulerian_trail(&self) -> Option<Vec<Node>> {
        let start = match self.euler_class() {
            EulerClass::Eulerian => 0,
            EulerClass::SemiEulerian { odd: (u, _) } => u,
            _ => return None,
        };

        if self.is_empty() {
            return Some(Vec::new());
        }

        // incidences as (neighbor, edge index); a self-loop appears twice with the same index
        let mut incidences: Vec<Vec<(Node, usize)>> = vec![Vec::new(); self.len()];
        for (i, Edge(u, v)) in self.edges().enumerate() {
            incidences[u as usize].push((v, i));
            incidences[v as usize].push((u, i));
        }

        let mut used = vec![false; self.edge_list().len()];
        let mut next_incidence = vec![0usize; self.len()];
        let mut stack = vec![start];
        let mut trail = Vec::with_capacity(used.len() + 1);

        while let Some(&u) = stack.last() {
            let inc = &incidences[u as usize];
            let ptr = &mut next_incidence[u as usize];
            while *ptr < inc.len() && used[inc[*ptr].1] {
                *ptr += 1;
            }

            if let Some(&(v, i)) = inc.get(*ptr) {
                used[i] = true;
                stack.push(v);
            } else {
                trail.push(u);
                stack.pop();
            }
        }

        trail.reverse();
        Some(trail)
    }
}

impl<G> Eulerian for G where G: AdjacencyList + EdgeList + Connectivity {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{gens::*, testing::*};
    use fxhash::FxHashSet;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn assert_valid_trail(graph: &Graph, trail: &[Node]) {
        assert_eq!(trail.len(), graph.number_of_edges() as usize + 1);
        let used: FxHashSet<Edge> = trail
            .iter()
            .tuple_windows()
            .map(|(&u, &v)| {
                assert!(graph.has_edge(u, v));
                Edge(u, v).normalized()
            })
            .collect();
        assert_eq!(used.len(), graph.number_of_edges() as usize);
    }

    #[test]
    fn classification() {
        let triangle = Graph::from_edges(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
        assert_eq!(triangle.euler_class(), EulerClass::Eulerian);
        assert_eq!(triangle.is_eulerian(), (true, "The graph is Eulerian".to_string()));

        let path = Graph::from_edges(3, [(0, 1), (1, 2)]).unwrap();
        assert_eq!(path.euler_class(), EulerClass::SemiEulerian { odd: (0, 2) });
        assert!(!path.is_eulerian().0);

        let disconnected = Graph::from_edges(4, [(0, 1)]).unwrap();
        let (eulerian, message) = disconnected.is_eulerian();
        assert!(!eulerian);
        assert_eq!(message, "The graph is not connected");

        let k4 = Graph::complete_graph(4);
        assert_eq!(
            k4.euler_class(),
            EulerClass::NotEulerian {
                odd_vertices: vec![0, 1, 2, 3]
            }
        );
        assert!(k4.is_eulerian().1.contains("neither"));
    }

    #[test]
    fn trails() {
        let triangle = Graph::cycle_graph(3);
        let circuit = triangle.eulerian_trail().unwrap();
        assert_valid_trail(&triangle, &circuit);
        assert_eq!(circuit.first(), circuit.last());

        let path = Graph::from_edges(4, [(1, 2), (0, 1), (2, 3)]).unwrap();
        assert_eq!(path.eulerian_trail(), Some(vec![0, 1, 2, 3]));

        let with_loop = Graph::from_edges(2, [(0, 1), (1, 1)]).unwrap();
        let trail = with_loop.eulerian_trail().unwrap();
        assert_valid_trail(&with_loop, &trail);

        assert_eq!(Graph::complete_graph(4).eulerian_trail(), None);
        assert_eq!(Graph::new(1).eulerian_trail(), Some(vec![0]));
    }

    #[test]
    fn random_trails() {
        let rng = &mut Pcg64Mcg::seed_from_u64(77);

        for _ in 0..200 {
            let n = rng.random_range(1..15);
            let graph = random_connected_graph(rng, n, 0.3);

            match graph.euler_class() {
                EulerClass::Eulerian | EulerClass::SemiEulerian { .. } => {
                    let trail = graph.eulerian_trail().unwrap();
                    assert_valid_trail(&graph, &trail);
                }
                EulerClass::NotEulerian { odd_vertices } => {
                    assert!(odd_vertices.len() > 2);
                    assert!(graph.eulerian_trail().is_none());
                }
                EulerClass::Disconnected => unreachable!(),
            }
        }
    }
}
