//! Single-step random walk primitive.

use crate::Graph;
use rand::prelude::*;
use std::hash::Hash;

/// A walk agent positioned on one vertex of a graph.
///
/// Each [`advance`](WalkAgent::advance) moves the agent one uniform
/// edge-step: along an out-edge on directed graphs, along any incident
/// edge on undirected ones. An agent on a vertex with no neighbors
/// stays in place. [`teleport`](WalkAgent::teleport) resets the agent
/// without consuming a step.
pub struct WalkAgent<'a, V> {
    graph: &'a Graph<V>,
    current: V,
}

impl<'a, V: Clone + Eq + Hash> WalkAgent<'a, V> {
    /// Place an agent on the start vertex.
    #[must_use]
    pub fn new(graph: &'a Graph<V>, start: V) -> Self {
        Self { graph, current: start }
    }

    /// The vertex the agent currently occupies.
    #[must_use]
    pub fn current(&self) -> &V {
        &self.current
    }

    /// Move the agent directly to a vertex.
    pub fn teleport(&mut self, v: V) {
        self.current = v;
    }

    /// Advance one step to a uniformly chosen neighbor.
    pub fn advance<R: Rng>(&mut self, rng: &mut R) {
        let neighbors = self.graph.neighbors(&self.current);
        if let Some(next) = neighbors.choose(rng) {
            self.current = next.clone();
        }
    }
}
