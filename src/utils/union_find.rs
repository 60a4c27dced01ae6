use crate::{Node, NumNodes};

/// Disjoint-set forest over the nodes `0..n` with path halving and union by size.
///
/// Used to grow spanning trees/forests and to count the components left after deleting edges.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<Node>,
    size: Vec<NumNodes>,
    number_of_sets: NumNodes,
}

impl UnionFind {
    /// Creates `n` singleton sets
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n as usize],
            number_of_sets: n,
        }
    }

    /// Returns the representative of the set containing `u`
    pub fn find(&mut self, mut u: Node) -> Node {
        while self.parent[u as usize] != u {
            let grand_parent = self.parent[self.parent[u as usize] as usize];
            self.parent[u as usize] = grand_parent;
            u = grand_parent;
        }
        u
    }

    /// Merges the sets of `u` and `v`.
    /// Returns *true* if they were disjoint before.
    pub fn union(&mut self, u: Node, v: Node) -> bool {
        let (mut ru, mut rv) = (self.find(u), self.find(v));
        if ru == rv {
            return false;
        }

        if self.size[ru as usize] < self.size[rv as usize] {
            std::mem::swap(&mut ru, &mut rv);
        }

        self.parent[rv as usize] = ru;
        self.size[ru as usize] += self.size[rv as usize];
        self.number_of_sets -= 1;
        true
    }

    /// Returns *true* if `u` and `v` are in the same set
    pub fn same_set(&mut self, u: Node, v: Node) -> bool {
        self.find(u) == self.find(v)
    }

    /// Number of disjoint sets
    pub fn number_of_sets(&self) -> NumNodes {
        self.number_of_sets
    }
}
