/*!
# Substructure Generators

Adds common motifs (paths, cycles, cliques) to an existing graph and builds the
classic named graphs (complete, path, cycle, star) from scratch.

# Example

```rust
use grafo::{prelude::*, gens::*};

let mut g = Graph::new(5);
g.connect_path([0, 1, 2]);
g.connect_cycle([2, 3, 4]);
g.connect_clique(&[0, 2, 4]);

assert_eq!(
    g.ordered_edges().collect::<Vec<Edge>>(),
    vec![Edge(0, 1), Edge(0, 2), Edge(0, 4), Edge(1, 2), Edge(2, 3), Edge(2, 4), Edge(3, 4)]
);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional substructures (paths, cycles, cliques)
/// inside an already existing graph.
///
/// All methods panic if a node is `>= n`; edges that are already present are skipped.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a simple path.
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a cycle: consecutive nodes are connected and the last
    /// node is connected back to the first.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>;

    /// Connects all given nodes into a clique (without self-loops).
    fn connect_clique(&mut self, nodes: &[Node]);
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.insert_edge(u, v);
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        // we use a rather tedious implementation to avoid needing to clone the iterator
        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                self.insert_edge(prev, cur);
                prev = cur;
            }

            self.insert_edge(prev, first);
        }
    }

    fn connect_clique(&mut self, nodes: &[Node]) {
        for (&u, &v) in nodes.iter().tuple_combinations() {
            if u != v {
                self.insert_edge(u, v);
            }
        }
    }
}

/// Constructors for well-known graph families on the nodes `0..n`
pub trait NamedGraphs: Sized {
    /// The complete graph `K_n` with all `n(n-1)/2` edges, in lexicographic order
    fn complete_graph(n: NumNodes) -> Self;

    /// The path `0 - 1 - ... - (n-1)`
    fn path_graph(n: NumNodes) -> Self;

    /// The cycle `0 - 1 - ... - (n-1) - 0`.
    /// For `n < 3` no cycle exists and the path on `n` nodes is returned instead.
    fn cycle_graph(n: NumNodes) -> Self;

    /// The star with center `0` and leaves `1..n`
    fn star_graph(n: NumNodes) -> Self;
}

impl<G> NamedGraphs for G
where
    G: GraphNew + GraphEdgeEditing,
{
    fn complete_graph(n: NumNodes) -> Self {
        let mut graph = Self::new(n);
        graph.connect_clique(&(0..n).collect_vec());
        graph
    }

    fn path_graph(n: NumNodes) -> Self {
        let mut graph = Self::new(n);
        graph.connect_path(0..n);
        graph
    }

    fn cycle_graph(n: NumNodes) -> Self {
        if n < 3 {
            return Self::path_graph(n);
        }

        let mut graph = Self::new(n);
        graph.connect_cycle(0..n);
        graph
    }

    fn star_graph(n: NumNodes) -> Self {
        let mut graph = Self::new(n);
        graph.insert_edges((1..n).map(|v| (0, v)));
        graph
    }
}
