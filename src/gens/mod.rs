/*!
# Graph Generators

Builders for random edge sets and the [`RandomGraph`] shortcuts that turn them into graphs.

The typical usage workflow is:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using builder methods (e.g., `.nodes(n).prob(p)`).
3. Generate edges via `generate()` or `stream()`.

Supported models:
- G(n,m): uniform random graphs with a fixed number of nodes and edges
- G(n,p): Erdős–Rényi model with independent edge probability
- random trees on `n` nodes

Deterministic families (complete graphs, paths, cycles, stars) live in [`NamedGraphs`].
*/

use rand::Rng;

use crate::prelude::*;

mod gnm;
mod gnp;
mod substructures;
mod tree;

pub use gnm::*;
pub use gnp::*;
pub use substructures::*;
pub use tree::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// Trait for generators that allow setting the number of edges.
pub trait NumEdgesGen {
    /// Sets the number of edges in the graph generator.
    fn edges(self, m: NumEdges) -> Self;
}

/// General trait for a configurable random edge generator.
///
/// Generated edges are always normalized, loop-free and distinct.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;
}

/// Trait for building full graph instances from the random models.
pub trait RandomGraph: Sized {
    /// Creates a random `G(n,p)` graph using edge probability `p`.
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng;

    /// Creates a random `G(n,m)` graph with exactly `m` edges.
    fn gnm<R>(rng: &mut R, n: NumNodes, m: NumEdges) -> Self
    where
        R: Rng;

    /// Creates a random tree on `n` nodes.
    fn random_tree<R>(rng: &mut R, n: NumNodes) -> Self
    where
        R: Rng;
}

impl<G> RandomGraph for G
where
    G: GraphNew + GraphEdgeEditing,
{
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng,
    {
        let mut graph = Self::new(n);
        graph.insert_edges(Gnp::new().nodes(n).prob(p).stream(rng));
        graph
    }

    fn gnm<R>(rng: &mut R, n: NumNodes, m: NumEdges) -> Self
    where
        R: Rng,
    {
        let mut graph = Self::new(n);
        graph.insert_edges(Gnm::new().nodes(n).edges(m).stream(rng));
        graph
    }

    fn random_tree<R>(rng: &mut R, n: NumNodes) -> Self
    where
        R: Rng,
    {
        let mut graph = Self::new(n);
        graph.insert_edges(RandomTree::new().nodes(n).stream(rng));
        graph
    }
}
