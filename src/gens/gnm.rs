use rand::seq::index::sample;

use super::*;

/// Generator for uniform `G(n,m)` random graphs with `n` nodes and exactly `m` loop-free edges.
///
/// Edges are drawn without replacement from the `n(n-1)/2` possible ones using
/// [`Edge::from_u64_undir`].
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnm {
    n: NumNodes,
    m: NumEdges,
}

impl Gnm {
    /// Creates a new empty `G(n,m)` generator
    pub fn new() -> Self {
        Self::default()
    }
}

impl NumNodesGen for Gnm {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl NumEdgesGen for Gnm {
    fn edges(mut self, m: NumEdges) -> Self {
        self.m = m;
        self
    }
}

impl GraphGenerator for Gnm {
    /// ** Panics if `m > n(n-1)/2` **
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng,
    {
        let n = self.n as u64;
        let max_edges = n * n.saturating_sub(1) / 2;
        assert!(
            self.m as u64 <= max_edges,
            "A graph with {n} nodes has at most {max_edges} edges"
        );

        sample(rng, max_edges as usize, self.m as usize)
            .into_iter()
            .map(move |x| Edge::from_u64_undir(x as u64, n))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn exact_number_of_edges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);

        for _ in 0..20 {
            let n = rng.random_range(2..30);
            let m = rng.random_range(0..=n * (n - 1) / 2);
            let edges = Gnm::new().nodes(n).edges(m).generate(rng);

            assert_eq!(edges.len(), m as usize);
            assert_eq!(edges.iter().unique().count(), m as usize);
            assert!(edges.iter().all(|e| e.is_normalized() && !e.is_loop() && e.1 < n));
        }
    }

    #[test]
    #[should_panic]
    fn too_many_edges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);
        let _ = Gnm::new().nodes(3).edges(4).generate(rng);
    }
}
