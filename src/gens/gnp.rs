use rand_distr::{Bernoulli, Distribution};

use super::*;
use crate::utils::Probability;

/// `G(n,p)` graphs contain every possible loop-free edge on `n` nodes with probability `p`,
/// independent from each other.
///
/// Edges are produced normalized and in lexicographic order.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NumNodes,
    dist: Option<Bernoulli>,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p`
    /// ** Panics if `p` is not within `[0, 1]` **
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probility(), "{prob} is not a probability");
        self.dist = Bernoulli::new(prob).ok();
        self
    }
}

impl NumNodesGen for Gnp {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl GraphGenerator for Gnp {
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng,
    {
        let Some(dist) = self.dist else {
            panic!("Probability of Gnp was not set!");
        };

        let n = self.n;
        (0..n)
            .flat_map(move |u| (u + 1..n).map(move |v| Edge(u, v)))
            .filter(move |_| dist.sample(rng))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);

        assert!(Gnp::new().nodes(10).prob(0.0).generate(rng).is_empty());
        assert_eq!(Gnp::new().nodes(10).prob(1.0).generate(rng).len(), 45);
    }

    #[test]
    fn edges_are_valid() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);

        for n in [1, 5, 20] {
            let edges = Gnp::new().nodes(n).prob(0.5).generate(rng);
            assert!(edges.iter().all(|e| e.is_normalized() && !e.is_loop() && e.1 < n));
            assert!(edges.is_sorted());
        }
    }

    #[test]
    #[should_panic]
    fn invalid_probability() {
        let _ = Gnp::new().nodes(3).prob(1.5);
    }
}
