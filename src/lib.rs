/*!
`grafo` is a library for the structural analysis of small graphs that are
- **unlabelled** : Nodes are numbered `0` to `n - 1`
- **unweighted** : Neither nodes nor edges have a weight attached to them
- **undirected** : `Edge(u, v)` and `Edge(v, u)` describe the same edge

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`.

A [`Graph`](crate::repr::Graph) stores every edge normalized (`Edge(min, max)`) and at most once,
in insertion order. The insertion order is observable: it defines adjacency-list order (and thus
the order in which the searches explore the graph) and the edge labels `A, B, ..`
([`edge_label`]). Self-loops are allowed and add 2 to the degree of their node.

# Design

Analyses are provided as traits implemented on the graph itself, so `graph.is_connected()` or
`graph.minimum_cut()` just work after importing them. Configurable algorithms additionally exist
as structs that one can alter using the *Builder* / *Setter* pattern before running them.

No analysis ever mutates the graph it inspects; constructive operations such as union or vertex
removal return a new graph.

# Usage

There are *5* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations and the graph representation,
- [`algo`] includes the analyses: traversals, connectivity, Eulerian and Hamiltonian tests, cuts, cycles, distances, isomorphism and composition,
- [`gens`] includes random graph generators and deterministic families (paths, cycles, cliques, stars),
- [`io`] includes reading and writing the plain edge-list text format,
- [`utils`] includes helper structures such as [`UnionFind`](crate::utils::UnionFind).

[`repr::digest`] computes a `Sha256`-hash of a graph that is independent of edge order, eg. to
cache analysis results per graph.

In most use-cases, `use grafo::{prelude::*, algo::*};` suffices for your needs.

```
use grafo::{prelude::*, algo::*};

let triangle = Graph::from_edges(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
assert!(triangle.is_connected());
assert!(triangle.is_eulerian().0);
assert!(triangle.is_hamiltonian().0);
assert_eq!(triangle.girth(), Some(3));
```

# Complexity
Several analyses are exhaustive searches that take exponential time in the worst case:
Hamiltonian cycles, minimum cuts, cuts of a fixed size, cycles of a fixed length and isomorphism.
They are meant for graphs with a few dozen nodes (or a few dozen edges for the cut searches).
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use error::*;
pub use node::*;

/// `grafo::prelude` includes definitions for nodes, edges and errors, all basic graph operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, error::GraphError, node::*, ops::*, repr::*};
}
