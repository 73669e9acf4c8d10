//! Exploration-based sampling.
//!
//! A [`Crawler`] builds its vertex selection by traversing the graph
//! instead of drawing vertices independently. It visits every connected
//! component with a pluggable [`ExplorationPolicy`], accumulating a
//! global first-visit sequence, then keeps the first `floor(p * |V|)`
//! visited vertices and induces the subgraph on them.
//!
//! Components are processed in uniformly shuffled order so that
//! truncation mid-exploration does not systematically favor components
//! that happen to be enumerated first.
//!
//! Every policy shares one stopping rule: a component is done when all
//! of its vertices appear in the first-visit sequence
//! ([`Explored::covers`]), re-checked after every visited vertex.

use crate::sample::{target_size, Sampler};
use crate::walk::WalkAgent;
use crate::{Error, Graph, Result};
use rand::prelude::*;
use rand_xorshift::XorShiftRng;
use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

/// First-visit log of a crawl.
///
/// Keeps vertices in visitation order (the order determines which
/// vertices survive truncation) and answers membership in O(1). A
/// vertex is recorded at most once.
#[derive(Debug, Clone)]
pub struct Explored<V> {
    order: Vec<V>,
    seen: HashSet<V>,
}

impl<V> Explored<V> {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            seen: HashSet::new(),
        }
    }
}

impl<V> Default for Explored<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone + Eq + Hash> Explored<V> {
    /// Record a first visit. Returns `false` if the vertex was already
    /// visited.
    pub fn record(&mut self, v: &V) -> bool {
        if self.seen.contains(v) {
            return false;
        }
        self.seen.insert(v.clone());
        self.order.push(v.clone());
        true
    }

    /// Whether the vertex has been visited.
    #[must_use]
    pub fn contains(&self, v: &V) -> bool {
        self.seen.contains(v)
    }

    /// Whether every vertex of the component has been visited.
    ///
    /// This is the universal termination predicate of all exploration
    /// policies.
    #[must_use]
    pub fn covers(&self, component: &[V]) -> bool {
        component.iter().all(|v| self.seen.contains(v))
    }

    /// Visited vertices in first-visit order.
    #[must_use]
    pub fn order(&self) -> &[V] {
        &self.order
    }

    /// Number of visited vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing has been visited yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// How a crawl visits one connected component.
///
/// A policy must keep visiting until [`Explored::covers`] holds for the
/// component; the [`Crawler`] driver relies on that to terminate.
pub trait ExplorationPolicy<V> {
    /// Visit the component, appending first visits to `explored`.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyComponent`] if the component has no vertices;
    /// policy-specific errors otherwise.
    fn explore<R: Rng>(
        &self,
        graph: &Graph<V>,
        component: &[V],
        explored: &mut Explored<V>,
        rng: &mut R,
    ) -> Result<()>;
}

enum Pop {
    Front,
    Back,
}

/// Frontier traversal shared by BFS and DFS; only the pop end differs.
fn frontier_crawl<V: Clone + Eq + Hash, R: Rng>(
    graph: &Graph<V>,
    component: &[V],
    explored: &mut Explored<V>,
    rng: &mut R,
    pop: &Pop,
) -> Result<()> {
    let start = component.choose(rng).ok_or(Error::EmptyComponent)?;
    let mut frontier: VecDeque<V> = VecDeque::new();
    frontier.push_back(start.clone());

    while !explored.covers(component) {
        let v = match pop {
            Pop::Front => frontier.pop_front(),
            Pop::Back => frontier.pop_back(),
        }
        .ok_or(Error::DisconnectedComponent)?;

        if explored.record(&v) {
            let mut neighbors = graph.neighbors(&v);
            neighbors.shuffle(rng);
            // Visited neighbors are pushed too; they are filtered at
            // pop time by the record() check above
            frontier.extend(neighbors);
        }
    }
    Ok(())
}

enum Restart {
    ToStart,
    ToRandom,
}

/// Random walk traversal shared by the restart-to-start and
/// restart-to-random policies.
///
/// Each iteration records the agent's position if unvisited, then with
/// probability `restart_prob` teleports the agent, then advances one
/// step. A restarted agent still advances in the same iteration.
fn walk_crawl<V: Clone + Eq + Hash, R: Rng>(
    graph: &Graph<V>,
    component: &[V],
    explored: &mut Explored<V>,
    rng: &mut R,
    restart_prob: f64,
    restart: &Restart,
) -> Result<()> {
    let start = component.choose(rng).ok_or(Error::EmptyComponent)?.clone();
    let mut agent = WalkAgent::new(graph, start.clone());

    while !explored.covers(component) {
        explored.record(agent.current());
        if rng.random::<f64>() < restart_prob {
            let target = match restart {
                Restart::ToStart => start.clone(),
                Restart::ToRandom => component
                    .choose(rng)
                    .ok_or(Error::EmptyComponent)?
                    .clone(),
            };
            agent.teleport(target);
        }
        agent.advance(rng);
    }
    Ok(())
}

/// Breadth-first exploration.
///
/// Seeds a frontier with one uniformly random component vertex, pops
/// from the front, and pushes each visited vertex's neighbors in
/// shuffled order.
#[derive(Debug, Clone, Copy, Default)]
pub struct BfsPolicy;

impl<V: Clone + Eq + Hash> ExplorationPolicy<V> for BfsPolicy {
    fn explore<R: Rng>(
        &self,
        graph: &Graph<V>,
        component: &[V],
        explored: &mut Explored<V>,
        rng: &mut R,
    ) -> Result<()> {
        frontier_crawl(graph, component, explored, rng, &Pop::Front)
    }
}

/// Depth-first exploration: identical to [`BfsPolicy`] except the
/// frontier is popped from the back.
#[derive(Debug, Clone, Copy, Default)]
pub struct DfsPolicy;

impl<V: Clone + Eq + Hash> ExplorationPolicy<V> for DfsPolicy {
    fn explore<R: Rng>(
        &self,
        graph: &Graph<V>,
        component: &[V],
        explored: &mut Explored<V>,
        rng: &mut R,
    ) -> Result<()> {
        frontier_crawl(graph, component, explored, rng, &Pop::Back)
    }
}

/// Random walk with restart to the component's start vertex.
///
/// On directed graphs the walk follows out-edges while components are
/// weakly connected, so a component whose vertices are not all
/// walk-reachable is never covered and the crawl does not terminate.
/// Intended for undirected graphs or strongly connected structure.
#[derive(Debug, Clone, Copy)]
pub struct RandomWalkPolicy {
    /// Per-iteration probability of teleporting back to the start.
    pub restart: f64,
}

impl Default for RandomWalkPolicy {
    fn default() -> Self {
        Self { restart: 0.15 }
    }
}

impl<V: Clone + Eq + Hash> ExplorationPolicy<V> for RandomWalkPolicy {
    fn explore<R: Rng>(
        &self,
        graph: &Graph<V>,
        component: &[V],
        explored: &mut Explored<V>,
        rng: &mut R,
    ) -> Result<()> {
        walk_crawl(graph, component, explored, rng, self.restart, &Restart::ToStart)
    }
}

/// Random walk with restart to a fresh uniformly random component
/// vertex on every restart event.
///
/// Same directed-graph caveat as [`RandomWalkPolicy`].
#[derive(Debug, Clone, Copy)]
pub struct RandomJumpPolicy {
    /// Per-iteration probability of teleporting to a random vertex.
    pub restart: f64,
}

impl Default for RandomJumpPolicy {
    fn default() -> Self {
        Self { restart: 0.15 }
    }
}

impl<V: Clone + Eq + Hash> ExplorationPolicy<V> for RandomJumpPolicy {
    fn explore<R: Rng>(
        &self,
        graph: &Graph<V>,
        component: &[V],
        explored: &mut Explored<V>,
        rng: &mut R,
    ) -> Result<()> {
        walk_crawl(graph, component, explored, rng, self.restart, &Restart::ToRandom)
    }
}

/// Exploration-driven sampler.
///
/// # Example
///
/// ```rust
/// use graphlet::{Crawler, Graph, Sampler};
///
/// let mut g = Graph::undirected();
/// g.add_edge(1, 2);
/// g.add_edge(2, 3);
/// g.add_edge(3, 4);
///
/// let crawler = Crawler::bfs(&g);
/// let sub = crawler.sample(1.0, 7).unwrap();
/// assert_eq!(sub.vertex_count(), 4);
/// ```
pub struct Crawler<'a, V, P> {
    graph: &'a Graph<V>,
    policy: P,
}

impl<'a, V: Clone + Eq + Hash, P: ExplorationPolicy<V>> Crawler<'a, V, P> {
    /// Create a crawler with an explicit exploration policy.
    #[must_use]
    pub fn new(graph: &'a Graph<V>, policy: P) -> Self {
        Self { graph, policy }
    }
}

impl<'a, V: Clone + Eq + Hash> Crawler<'a, V, BfsPolicy> {
    /// Breadth-first crawler.
    #[must_use]
    pub fn bfs(graph: &'a Graph<V>) -> Self {
        Self::new(graph, BfsPolicy)
    }
}

impl<'a, V: Clone + Eq + Hash> Crawler<'a, V, DfsPolicy> {
    /// Depth-first crawler.
    #[must_use]
    pub fn dfs(graph: &'a Graph<V>) -> Self {
        Self::new(graph, DfsPolicy)
    }
}

impl<'a, V: Clone + Eq + Hash> Crawler<'a, V, RandomWalkPolicy> {
    /// Random-walk crawler with the default restart probability.
    #[must_use]
    pub fn random_walk(graph: &'a Graph<V>) -> Self {
        Self::new(graph, RandomWalkPolicy::default())
    }
}

impl<'a, V: Clone + Eq + Hash> Crawler<'a, V, RandomJumpPolicy> {
    /// Random-jump crawler with the default restart probability.
    #[must_use]
    pub fn random_jump(graph: &'a Graph<V>) -> Self {
        Self::new(graph, RandomJumpPolicy::default())
    }
}

impl<V: Clone + Eq + Hash, P: ExplorationPolicy<V>> Sampler<V> for Crawler<'_, V, P> {
    fn sample(&self, p: f64, seed: u64) -> Result<Graph<V>> {
        let target = target_size(self.graph.vertex_count(), p)?;
        let mut rng = XorShiftRng::seed_from_u64(seed);

        let mut components = self.graph.components();
        components.shuffle(&mut rng);

        let mut explored = Explored::new();
        for component in &components {
            self.policy
                .explore(self.graph, component, &mut explored, &mut rng)?;
        }

        let picked: HashSet<V> = explored.order().iter().take(target).cloned().collect();
        Ok(self.graph.subgraph(&picked))
    }
}

/// Breadth-first crawler.
pub type BfsCrawler<'a, V> = Crawler<'a, V, BfsPolicy>;
/// Depth-first crawler.
pub type DfsCrawler<'a, V> = Crawler<'a, V, DfsPolicy>;
/// Random walk with restart-to-start crawler.
pub type RwCrawler<'a, V> = Crawler<'a, V, RandomWalkPolicy>;
/// Random walk with restart-to-random crawler.
pub type RjCrawler<'a, V> = Crawler<'a, V, RandomJumpPolicy>;

#[cfg(test)]
mod tests {
    use super::*;

    /// Undirected graph with edges {(1,2), (1,3), (2,3), (3,4)}.
    fn triangle_with_tail() -> Graph<i32> {
        let mut g = Graph::undirected();
        g.add_edge(1, 2);
        g.add_edge(1, 3);
        g.add_edge(2, 3);
        g.add_edge(3, 4);
        g
    }

    fn two_components() -> Graph<i32> {
        let mut g = Graph::undirected();
        g.add_edge(1, 2);
        g.add_edge(2, 3);
        g.add_edge(10, 11);
        g
    }

    #[test]
    fn test_covers_partial_and_full() {
        let mut explored = Explored::new();
        explored.record(&1);
        explored.record(&2);

        assert!(explored.covers(&[1]));
        assert!(explored.covers(&[1, 2]));
        assert!(!explored.covers(&[1, 2, 3]));
        assert!(explored.covers(&[])); // Vacuously explored
    }

    #[test]
    fn test_record_is_first_visit_only() {
        let mut explored = Explored::new();
        assert!(explored.record(&"a"));
        assert!(!explored.record(&"a"));
        assert_eq!(explored.order(), ["a"]);
        assert_eq!(explored.len(), 1);
    }

    #[test]
    fn test_bfs_policy_visits_each_vertex_once() {
        let g = triangle_with_tail();
        let component: Vec<i32> = g.components().remove(0);

        let mut explored = Explored::new();
        let mut rng = XorShiftRng::seed_from_u64(11);
        BfsPolicy
            .explore(&g, &component, &mut explored, &mut rng)
            .unwrap();

        assert_eq!(explored.len(), g.vertex_count());
        let distinct: HashSet<&i32> = explored.order().iter().collect();
        assert_eq!(distinct.len(), g.vertex_count());
    }

    #[test]
    fn test_dfs_policy_visits_each_vertex_once() {
        let g = triangle_with_tail();
        let component: Vec<i32> = g.components().remove(0);

        let mut explored = Explored::new();
        let mut rng = XorShiftRng::seed_from_u64(11);
        DfsPolicy
            .explore(&g, &component, &mut explored, &mut rng)
            .unwrap();

        assert_eq!(explored.len(), g.vertex_count());
    }

    #[test]
    fn test_policy_rejects_empty_component() {
        let g = triangle_with_tail();
        let mut explored = Explored::new();
        let mut rng = XorShiftRng::seed_from_u64(1);

        assert!(matches!(
            BfsPolicy.explore(&g, &[], &mut explored, &mut rng),
            Err(Error::EmptyComponent)
        ));
    }

    #[test]
    fn test_frontier_drain_is_an_error() {
        // A "component" whose vertices are not mutually reachable:
        // the decomposition contract is violated
        let mut g = Graph::undirected();
        g.add_edge(1, 2);
        g.add_vertex(99);

        let mut explored = Explored::new();
        let mut rng = XorShiftRng::seed_from_u64(1);
        assert!(matches!(
            BfsPolicy.explore(&g, &[1, 99], &mut explored, &mut rng),
            Err(Error::DisconnectedComponent)
        ));
    }

    #[test]
    fn test_bfs_full_fraction_returns_whole_graph() {
        let g = triangle_with_tail();
        let sub = Crawler::bfs(&g).sample(1.0, 3).unwrap();

        assert_eq!(sub.vertex_count(), 4);
        assert_eq!(sub.edge_count(), 4);
    }

    #[test]
    fn test_bfs_half_fraction() {
        let g = triangle_with_tail();
        let sub = Crawler::bfs(&g).sample(0.5, 3).unwrap();

        assert_eq!(sub.vertex_count(), 2);
        for (u, v) in sub.edges() {
            assert!(g.has_edge(&u, &v));
        }
    }

    #[test]
    fn test_crawler_spans_all_components() {
        let g = two_components();
        let sub = Crawler::dfs(&g).sample(1.0, 5).unwrap();
        assert_eq!(sub.vertex_count(), 5);
    }

    #[test]
    fn test_crawler_reproducible() {
        let g = two_components();
        let crawler = Crawler::bfs(&g);

        let a = crawler.sample(0.4, 21).unwrap();
        let b = crawler.sample(0.4, 21).unwrap();

        let mut va: Vec<i32> = a.vertices().copied().collect();
        let mut vb: Vec<i32> = b.vertices().copied().collect();
        va.sort_unstable();
        vb.sort_unstable();
        assert_eq!(va, vb);
        assert_eq!(a.vertex_count(), 2); // floor(0.4 * 5)
    }

    #[test]
    fn test_random_walk_covers_connected_graph() {
        let g = triangle_with_tail();
        let sub = Crawler::random_walk(&g).sample(1.0, 17).unwrap();
        assert_eq!(sub.vertex_count(), 4);
    }

    #[test]
    fn test_random_jump_covers_connected_graph() {
        let g = triangle_with_tail();
        let sub = Crawler::random_jump(&g).sample(1.0, 17).unwrap();
        assert_eq!(sub.vertex_count(), 4);
    }

    #[test]
    fn test_walk_crawlers_span_components() {
        let g = two_components();
        let sub = Crawler::random_jump(&g).sample(1.0, 29).unwrap();
        assert_eq!(sub.vertex_count(), 5);
    }

    #[test]
    fn test_bfs_on_directed_cycle() {
        let mut g = Graph::directed();
        g.add_edge("a", "b");
        g.add_edge("b", "c");
        g.add_edge("c", "a");

        let sub = Crawler::bfs(&g).sample(1.0, 2).unwrap();
        assert_eq!(sub.vertex_count(), 3);
        assert!(sub.is_directed());
    }

    #[test]
    fn test_crawler_rejects_bad_fraction() {
        let g = triangle_with_tail();
        assert!(matches!(
            Crawler::bfs(&g).sample(2.0, 0),
            Err(Error::InvalidFraction(_))
        ));
    }

    #[test]
    fn test_crawler_empty_graph() {
        let g: Graph<i32> = Graph::undirected();
        let sub = Crawler::bfs(&g).sample(1.0, 0).unwrap();
        assert_eq!(sub.vertex_count(), 0);
    }
}
