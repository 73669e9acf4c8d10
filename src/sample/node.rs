//! Independent weighted node sampling.

use crate::sample::{sample_nodes, Sampler};
use crate::{Graph, Result};
use rand::prelude::*;
use rand_xorshift::XorShiftRng;
use std::collections::HashMap;
use std::hash::Hash;

/// Samples vertices independently with uniform weights.
///
/// # Example
///
/// ```rust
/// use graphlet::{Graph, RandomNodeSampler, Sampler};
///
/// let mut g = Graph::undirected();
/// g.add_edge(1, 2);
/// g.add_edge(1, 3);
/// g.add_edge(2, 3);
/// g.add_edge(3, 4);
///
/// let sampler = RandomNodeSampler::new(&g);
/// let sub = sampler.sample(0.5, 42).unwrap();
/// assert_eq!(sub.vertex_count(), 2); // floor(0.5 * 4)
/// ```
pub struct RandomNodeSampler<'a, V> {
    graph: &'a Graph<V>,
}

impl<'a, V: Clone + Eq + Hash> RandomNodeSampler<'a, V> {
    /// Create a sampler over the graph.
    #[must_use]
    pub fn new(graph: &'a Graph<V>) -> Self {
        Self { graph }
    }
}

impl<V: Clone + Eq + Hash> Sampler<V> for RandomNodeSampler<'_, V> {
    fn sample(&self, p: f64, seed: u64) -> Result<Graph<V>> {
        let mut rng = XorShiftRng::seed_from_u64(seed);
        let weights: HashMap<V, f64> = self.graph.vertices().map(|v| (v.clone(), 1.0)).collect();
        let picked = sample_nodes(self.graph, p, &weights, &mut rng)?;
        Ok(self.graph.subgraph(&picked))
    }
}

/// Samples vertices independently with degree-proportional weights.
///
/// Each vertex is weighted by its raw degree (not degree + 1, not
/// normalized), so high-degree hubs are over-represented relative to
/// [`RandomNodeSampler`]. A graph whose vertices all have degree zero
/// has no usable weights and fails with
/// [`InvalidWeights`](crate::Error::InvalidWeights) for any positive
/// target size.
pub struct RandomDegreeNodeSampler<'a, V> {
    graph: &'a Graph<V>,
}

impl<'a, V: Clone + Eq + Hash> RandomDegreeNodeSampler<'a, V> {
    /// Create a sampler over the graph.
    #[must_use]
    pub fn new(graph: &'a Graph<V>) -> Self {
        Self { graph }
    }
}

impl<V: Clone + Eq + Hash> Sampler<V> for RandomDegreeNodeSampler<'_, V> {
    fn sample(&self, p: f64, seed: u64) -> Result<Graph<V>> {
        let mut rng = XorShiftRng::seed_from_u64(seed);
        #[allow(clippy::cast_precision_loss)]
        let weights: HashMap<V, f64> = self
            .graph
            .vertices()
            .map(|v| (v.clone(), self.graph.degree(v) as f64))
            .collect();
        let picked = sample_nodes(self.graph, p, &weights, &mut rng)?;
        Ok(self.graph.subgraph(&picked))
    }
}
