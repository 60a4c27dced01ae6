/*!
# Graph Hash Digests

[`GraphDigest`] computes a hash of a graph that only depends on its vertex count and its edge
*set*: the edges are encoded normalized and sorted before they are fed into the hash function.
Callers use it to cache analysis results per graph.

## Example
```
use grafo::{prelude::*, repr::digest::GraphDigest};

let a = Graph::from_edges(10, [(4, 3), (1, 2)]).unwrap();
let b = Graph::from_edges(10, [(2, 1), (3, 4)]).unwrap();

assert_eq!(a.digest_sha256(), b.digest_sha256());
assert_eq!(a.digest_sha256().len(), 64);
```
*/

use std::fmt::LowerHex;

use super::*;
use ::digest::{Digest, Output};

/// Trait for computing a canonical hash digest of a graph.
pub trait GraphDigest {
    /// Computes a digest of the graph using the provided hash function `D`.
    /// The result is returned as a hexadecimal string.
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest;

    /// Computes a SHA-256 digest of the graph (64 hex characters).
    fn digest_sha256(&self) -> String {
        self.digest::<sha2::Sha256>()
    }
}

impl<G> GraphDigest for G
where
    G: GraphNodeOrder + EdgeList,
{
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest,
    {
        let mut hasher = D::new();
        let mut buffer = [0u8; 8];

        let encode = |buf: &mut [u8], u: Node| buf[..4].copy_from_slice(&u.to_le_bytes());

        // first encode the number of nodes in the graph
        encode(&mut buffer[0..4], self.number_of_nodes());
        hasher.update(buffer);

        // then append a sorted edge list
        for Edge(u, v) in self.ordered_edges() {
            encode(&mut buffer[0..], u);
            encode(&mut buffer[4..], v);
            hasher.update(buffer);
        }

        format!("{:x}", hasher.finalize())
    }
}
