/*!
# Graph Representations

The crate works on a single representation, [`Graph`]: a fixed number of vertices `0..n` and a
deduplicated list of undirected edges in insertion order. Adjacency lists, adjacency matrices and
incidence matrices are derived views, see [`Matrix`].
*/

use crate::{ops::*, *};

mod graph;
mod matrix;

pub mod digest;

pub use graph::*;
pub use matrix::*;
