/*!
# Hamiltonian Cycles

Exhaustive backtracking search for a cycle that visits every vertex exactly once.

The search is rooted at vertex 0: every Hamiltonian cycle passes through vertex 0, so a search
from there decides existence just like trying every start vertex in turn. Neighbors are tried in
adjacency-list order. The only shortcut taken is the degree-1 rule: a graph with more than two
vertices of degree 1 is reported as non-Hamiltonian without searching.

The worst-case running time is `O(n!)`; only use this on small graphs.
*/

use log::{debug, trace};

use super::*;

/// Hamiltonian cycle search
pub trait Hamiltonian: AdjacencyList + AdjacencyTest + NeighborsSlice {
    /// Searches a Hamiltonian cycle and describes the outcome.
    ///
    /// If found, the cycle is returned as the vertices in visiting order, starting at vertex 0
    /// and ending back at vertex 0 (`n + 1` entries).
    ///
    /// # Examples
    /// ```
    /// use grafo::{prelude::*, algo::*};
    ///
    /// let square = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
    /// let analysis = square.hamiltonian_cycle();
    /// assert_eq!(analysis.value(), Some(&vec![0, 1, 2, 3, 0]));
    /// ```
    fn hamiltonian_cycle(&self) -> Analysis<Vec<Node>> {
        let n = self.number_of_nodes();
        if n < 3 {
            return Analysis::not_found(
                "The graph needs at least 3 vertices to be Hamiltonian",
            );
        }

        let leaves = self.number_of_nodes_with_degree(1);
        if leaves > 2 {
            debug!("skipping Hamiltonian search, {leaves} vertices have degree 1");
            return Analysis::not_found(format!(
                "The graph is not Hamiltonian ({leaves} vertices have degree 1)"
            ));
        }

        debug!("searching Hamiltonian cycle on {n} vertices");
        let mut search = SimplePathSearch::new(self, 0);
        let found = search.find(|path| {
            let last = path[path.len() - 1];
            trace!("checking Hamiltonian path {path:?}");
            self.has_edge(last, path[0])
        });
        debug!(
            "Hamiltonian search explored {} complete paths",
            search.explored_paths()
        );

        match found {
            Some(mut cycle) => {
                cycle.push(cycle[0]);
                Analysis::found(cycle, "The graph is Hamiltonian (it has a Hamiltonian cycle)")
            }
            None => Analysis::not_found("The graph is not Hamiltonian"),
        }
    }

    /// Returns *true* if the graph has a Hamiltonian cycle, together with a message
    /// describing the outcome
    fn is_hamiltonian(&self) -> (bool, String) {
        let (cycle, message) = self.hamiltonian_cycle().into_parts();
        (cycle.is_some(), message)
    }
}

impl<G> Hamiltonian for G where G: AdjacencyList + AdjacencyTest + NeighborsSlice {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens::*;
    use itertools::Itertools;

    fn assert_hamiltonian_cycle(graph: &Graph, cycle: &[Node]) {
        assert_eq!(cycle.len(), graph.len() + 1);
        assert_eq!(cycle.first(), cycle.last());
        assert_eq!(
            cycle[..graph.len()].iter().copied().sorted().collect_vec(),
            graph.vertices().collect_vec()
        );
        assert!(cycle.iter().tuple_windows().all(|(&u, &v)| graph.has_edge(u, v)));
    }

    #[test]
    fn complete_graphs() {
        for n in 3..8 {
            let graph = Graph::complete_graph(n);
            let (found, message) = graph.is_hamiltonian();
            assert!(found, "{message}");

            let analysis = graph.hamiltonian_cycle();
            assert_hamiltonian_cycle(&graph, analysis.value().unwrap());
        }
    }

    #[test]
    fn star_is_pruned() {
        let star = Graph::star_graph(4);
        let (found, message) = star.is_hamiltonian();
        assert!(!found);
        assert!(message.contains("degree 1"));
    }

    #[test]
    fn too_small() {
        for n in 0..3 {
            let (found, message) = Graph::complete_graph(n).is_hamiltonian();
            assert!(!found);
            assert!(message.contains("at least 3"));
        }
    }

    #[test]
    fn exhaustive_negative() {
        // two triangles sharing vertex 2
        let bowtie = Graph::from_edges(5, [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)]).unwrap();
        assert_eq!(bowtie.is_hamiltonian(), (false, "The graph is not Hamiltonian".into()));

        // Petersen graph
        let mut petersen = Graph::new(10);
        petersen.connect_cycle(0..5);
        petersen.insert_edges([(5, 7), (7, 9), (9, 6), (6, 8), (8, 5)]);
        petersen.insert_edges((0..5).map(|i| (i, i + 5)));
        assert!(!petersen.is_hamiltonian().0);

        assert!(!Graph::path_graph(5).is_hamiltonian().0);
    }

    #[test]
    fn cycles() {
        for n in 3..10 {
            let graph = Graph::cycle_graph(n);
            let cycle = graph.hamiltonian_cycle().into_value().unwrap();
            assert_hamiltonian_cycle(&graph, &cycle);
        }
    }
}
