/*!
# Random Trees

[`RandomTree`] produces a uniformly labeled random recursive tree: the nodes are shuffled and
every node is attached to a uniformly chosen node that precedes it in the shuffled order.
The result is always connected and has exactly `n - 1` edges.

# Examples

```
use grafo::gens::*;

let mut rng = rand::rng();
let edges = RandomTree::new().nodes(5).generate(&mut rng);

assert_eq!(edges.len(), 4);
```
*/

use rand::seq::SliceRandom;

use super::*;

/// Generator for random spanning trees on `n` nodes
#[derive(Debug, Copy, Clone, Default)]
pub struct RandomTree {
    n: NumNodes,
}

impl RandomTree {
    /// Creates a new tree generator with `n = 0`
    pub fn new() -> Self {
        Self::default()
    }
}

impl NumNodesGen for RandomTree {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl GraphGenerator for RandomTree {
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng,
    {
        let mut order: Vec<Node> = (0..self.n).collect();
        order.shuffle(rng);

        (1..order.len())
            .map(|i| {
                let parent = order[rng.random_range(0..i)];
                Edge(parent, order[i]).normalized()
            })
            .collect::<Vec<_>>()
            .into_iter()
    }
}
