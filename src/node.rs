/*!
# Node Representation

Vertices are plain integers `0..n`. We choose `Node = u32` as the exhaustive analyses of this
crate are only ever run on small graphs and `u32` keeps adjacency lists compact.
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;
