use std::fmt::{Debug, Display};

use crate::Node;

/// An edge is defined by two nodes/endpoints.
///
/// Graphs in this crate are undirected and store every edge [`Edge::normalized`], ie. with the
/// smaller endpoint first. An `Edge` built by a caller may have any orientation.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }

    /// Simple bidirection from `0..(n choose 2)` to all possible normalized loop-free edges of
    /// `n` nodes.
    ///
    /// The bidirecton works by assigning each node the next `(n - 1)/2` neighbors modulo `n`
    /// (up to rounding) and normalizing the resulting edge
    pub fn from_u64_undir(mut x: u64, n: u64) -> Self {
        debug_assert!(x < n * (n - 1) / 2);

        let mut num_neighbors = (n - 1) / 2;
        // Easy case where `n - 1` is even and no corner cases exist
        if n & 1 == 1 {
            let u = x / num_neighbors;
            let v = (u + 1 + (x % num_neighbors)) % n;

            Edge(u as Node, v as Node).normalized()
        // Harder case where `n - 1` is odd and the number of checked neighbors alternates
        } else {
            let half_n = n / 2;
            let lower_half = num_neighbors * half_n;

            // x is in the half where we only enumerate `floor((n - 1) / 2)` neighbors
            if x < lower_half {
                let u = x / num_neighbors;
                let v = (u + 1 + (x % num_neighbors)) % n;

                // Edges are guaranteed to be normalized in the lower half
                return Edge(u as Node, v as Node);
            }

            // x is the upper half where we enumerate `ceil((n - 1) / 2)` neighbors
            x -= lower_half;
            num_neighbors += 1;

            let u = (x / num_neighbors) + half_n;
            let v = (u + 1 + (x % num_neighbors)) % n;

            Edge(u as Node, v as Node).normalized()
        }
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<(&Node, &Node)> for Edge {
    fn from(value: (&Node, &Node)) -> Self {
        Edge(*value.0, *value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

impl From<Edge> for (Node, Node) {
    fn from(value: Edge) -> Self {
        (value.0, value.1)
    }
}

/// Returns the label of the edge inserted at position `index`.
///
/// Labels count like spreadsheet columns: `A..Z`, then `AA, AB, ..`.
///
/// ```
/// use grafo::edge_label;
///
/// assert_eq!(edge_label(0), "A");
/// assert_eq!(edge_label(25), "Z");
/// assert_eq!(edge_label(26), "AA");
/// assert_eq!(edge_label(27), "AB");
/// ```
pub fn edge_label(index: usize) -> String {
    let mut label = Vec::new();
    let mut rest = index + 1;
    while rest > 0 {
        rest -= 1;
        label.push(b'A' + (rest % 26) as u8);
        rest /= 26;
    }
    label.reverse();
    String::from_utf8_lossy(&label).into_owned()
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn normalization() {
        assert_eq!(Edge(3, 1).normalized(), Edge(1, 3));
        assert_eq!(Edge(1, 3).normalized(), Edge(1, 3));
        assert!(Edge(2, 2).is_loop());
        assert!(!Edge(3, 1).is_normalized());
        assert_eq!(Edge(3, 1).reverse(), Edge(1, 3));
    }

    #[test]
    fn undirected_bijection() {
        for n in [2u64, 3, 6, 7, 10] {
            let edges = (0..n * (n - 1) / 2)
                .map(|x| Edge::from_u64_undir(x, n))
                .collect_vec();

            assert!(edges.iter().all(|e| e.is_normalized() && !e.is_loop()));
            assert!(edges.iter().all(|e| (e.1 as u64) < n));
            assert_eq!(edges.iter().unique().count(), edges.len());
        }
    }

    #[test]
    fn labels() {
        let labels = (0..28).map(edge_label).collect_vec();
        assert_eq!(labels[0], "A");
        assert_eq!(labels[1], "B");
        assert_eq!(labels[25], "Z");
        assert_eq!(labels[26], "AA");
        assert_eq!(labels[27], "AB");
        assert_eq!(edge_label(26 * 27), "AAA");
    }
}
