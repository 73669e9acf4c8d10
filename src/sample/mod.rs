//! Subgraph sampling strategies.
//!
//! Every strategy selects a fraction `p` of the graph's vertices and
//! returns the induced subgraph on the selection:
//!
//! - [`RandomNodeSampler`] - independent draws, uniform weights
//! - [`RandomDegreeNodeSampler`] - independent draws, degree weights
//!   (biased toward hubs)
//! - [`Crawler`] - traversal-based selection, parameterized by an
//!   [`ExplorationPolicy`] (BFS, DFS, random walk with restart, random
//!   jump with restart)
//!
//! All strategies take an explicit seed; equal seeds on equal graphs
//! produce equal subgraphs.

pub mod crawl;
pub mod node;
pub mod select;

pub use crawl::{
    BfsCrawler, BfsPolicy, Crawler, DfsCrawler, DfsPolicy, Explored, ExplorationPolicy,
    RandomJumpPolicy, RandomWalkPolicy, RjCrawler, RwCrawler,
};
pub use node::{RandomDegreeNodeSampler, RandomNodeSampler};
pub use select::{sample_nodes, weighted_choice};

use crate::{Error, Graph, Result};

/// A subgraph sampling strategy.
pub trait Sampler<V> {
    /// Sample a fraction `p` of the graph's vertices and return the
    /// induced subgraph.
    ///
    /// The sample contains exactly `floor(p * |V|)` vertices. All
    /// randomness derives from `seed`, so repeated calls with the same
    /// arguments return the same subgraph.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidFraction`] if `p` is outside `[0, 1]`; strategy
    /// specific errors otherwise.
    fn sample(&self, p: f64, seed: u64) -> Result<Graph<V>>;
}

/// Number of vertices a fraction-`p` sample must contain.
///
/// Rejects fractions outside the unit interval before any sampling
/// work begins.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn target_size(nvertices: usize, p: f64) -> Result<usize> {
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::InvalidFraction(p));
    }
    Ok((nvertices as f64 * p) as usize)
}
