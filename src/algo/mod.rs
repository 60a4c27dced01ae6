/*!
# Graph Algorithms

This module provides the analyses run on a [`Graph`](crate::repr::Graph). Every algorithm is a
trait blanket-implemented over the capability traits in [`ops`](crate::ops), so after
```rust
use grafo::{prelude::*, algo::*};
```
they can be called as methods directly on the graph. Configurable algorithms additionally
exist as builder structs (e.g. [`FundamentalCut`], [`MinimumCut`]).

Analyses never mutate the graph they inspect; constructive operations ([`Composition`]) return
a new graph.

Entry points that report a human readable verdict return an [`Analysis`]: the value found (if any)
together with a message. Violated preconditions (e.g. a cut of a disconnected graph) are
reported as [`GraphError`](crate::GraphError) instead; "nothing found" is not an error.

Several searches are exhaustive and exponential in the worst case (Hamiltonian cycles, minimum
cuts, cuts of a fixed size, isomorphism). They are meant for small graphs; callers analyzing
untrusted input should cap the graph size beforehand.
*/

use std::fmt::Display;

mod composition;
mod connectivity;
mod cuts;
mod cycles;
mod distances;
mod euler;
mod hamiltonian;
mod isomorphism;
mod simple_paths;
mod spanning_tree;
mod subgraph;
pub mod traversal;

use crate::{Result, prelude::*, utils::*};

pub use composition::*;
pub use connectivity::*;
pub use cuts::*;
pub use cycles::*;
pub use distances::*;
pub use euler::*;
pub use hamiltonian::*;
pub use isomorphism::*;
pub use simple_paths::*;
pub use spanning_tree::*;
pub use subgraph::*;
pub use traversal::*;

/// Outcome of an analysis: the value found, if any, and a human readable message describing
/// the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis<T> {
    value: Option<T>,
    message: String,
}

impl<T> Analysis<T> {
    /// An analysis that found `value`
    pub fn found<M: Into<String>>(value: T, message: M) -> Self {
        Self {
            value: Some(value),
            message: message.into(),
        }
    }

    /// An analysis that completed without finding anything
    pub fn not_found<M: Into<String>>(message: M) -> Self {
        Self {
            value: None,
            message: message.into(),
        }
    }

    /// Returns *true* if a value was found
    pub fn is_found(&self) -> bool {
        self.value.is_some()
    }

    /// Returns the value found, if any
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Returns the message describing the outcome
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Splits the analysis into value and message
    pub fn into_parts(self) -> (Option<T>, String) {
        (self.value, self.message)
    }

    /// Consumes the analysis and returns the value found, if any
    pub fn into_value(self) -> Option<T> {
        self.value
    }
}

impl<T> Display for Analysis<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
