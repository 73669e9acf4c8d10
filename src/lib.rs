// Allow minor clippy style warnings at crate level
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::doc_markdown)]

//! Representative subgraph sampling.
//!
//! Extracts a subgraph from a larger graph by selecting a fraction `p`
//! of its vertices and inducing the subgraph on the selection. Two
//! families of strategies are provided:
//!
//! - **Node sampling** - independent weighted draws without
//!   replacement: [`RandomNodeSampler`] (uniform weights) and
//!   [`RandomDegreeNodeSampler`] (degree-proportional weights, biased
//!   toward hubs).
//! - **Crawling** - traversal of connectivity structure via a
//!   [`Crawler`] with a pluggable [`ExplorationPolicy`]: breadth-first
//!   ([`BfsCrawler`]), depth-first ([`DfsCrawler`]), random walk with
//!   restart to the start vertex ([`RwCrawler`]), and random walk with
//!   restart to a random vertex ([`RjCrawler`]).
//!
//! Every strategy implements [`Sampler`] and takes an explicit seed;
//! sampling is reproducible and single-threaded.
//!
//! # Example
//!
//! ```rust
//! use graphlet::{Crawler, Graph, RandomNodeSampler, Sampler};
//!
//! let mut g = Graph::undirected();
//! g.add_edge(1, 2);
//! g.add_edge(1, 3);
//! g.add_edge(2, 3);
//! g.add_edge(3, 4);
//!
//! // Independent uniform draws
//! let sub = RandomNodeSampler::new(&g).sample(0.5, 42).unwrap();
//! assert_eq!(sub.vertex_count(), 2);
//!
//! // Breadth-first crawl
//! let sub = Crawler::bfs(&g).sample(1.0, 42).unwrap();
//! assert_eq!(sub.vertex_count(), 4);
//! ```

mod error;
mod graph;
pub mod sample;
mod walk;

pub use error::{Error, Result};
pub use graph::Graph;
pub use sample::{
    sample_nodes, weighted_choice, BfsCrawler, BfsPolicy, Crawler, DfsCrawler, DfsPolicy,
    Explored, ExplorationPolicy, RandomDegreeNodeSampler, RandomJumpPolicy, RandomNodeSampler,
    RandomWalkPolicy, RjCrawler, RwCrawler, Sampler,
};
pub use walk::WalkAgent;
