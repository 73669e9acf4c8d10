use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// A graph over arbitrary hashable vertex identifiers.
///
/// Uses petgraph's directed graph internally with an index for O(1)
/// vertex lookup. Directedness is a runtime flag: an undirected graph
/// stores each edge once and answers `has_edge`, `neighbors` and
/// `degree` symmetrically.
///
/// Parallel edges are not stored; `add_edge` is idempotent.
///
/// # Example
///
/// ```rust
/// use graphlet::Graph;
///
/// let mut g = Graph::undirected();
/// g.add_edge(1, 2);
/// g.add_edge(2, 3);
///
/// assert_eq!(g.vertex_count(), 3);
/// assert!(g.has_edge(&1, &2));
/// assert!(g.has_edge(&2, &1));
/// assert!(!g.has_edge(&1, &3));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "V: Serialize",
    deserialize = "V: Deserialize<'de> + Eq + Hash"
))]
pub struct Graph<V> {
    /// The underlying directed graph.
    graph: DiGraph<V, ()>,

    /// Map from vertex identifier to node index.
    index: HashMap<V, NodeIndex>,

    /// Whether edges are interpreted as directed.
    directed: bool,
}

// Union-Find helpers (at module level per clippy)
fn uf_find(parent: &mut [usize], mut i: usize) -> usize {
    while parent[i] != i {
        parent[i] = parent[parent[i]]; // Path halving
        i = parent[i];
    }
    i
}

fn uf_union(parent: &mut [usize], rank: &mut [usize], x: usize, y: usize) {
    let px = uf_find(parent, x);
    let py = uf_find(parent, y);
    if px == py {
        return;
    }
    // Union by rank
    match rank[px].cmp(&rank[py]) {
        Ordering::Less => parent[px] = py,
        Ordering::Greater => parent[py] = px,
        Ordering::Equal => {
            parent[py] = px;
            rank[px] += 1;
        }
    }
}

impl<V: Clone + Eq + Hash> Graph<V> {
    /// Create an empty graph with the given directedness.
    #[must_use]
    pub fn new(directed: bool) -> Self {
        Self {
            graph: DiGraph::new(),
            index: HashMap::new(),
            directed,
        }
    }

    /// Create an empty directed graph.
    #[must_use]
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Create an empty undirected graph.
    #[must_use]
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Whether edges are directed.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Add a vertex. Returns `true` if it was not already present.
    pub fn add_vertex(&mut self, v: V) -> bool {
        if self.index.contains_key(&v) {
            return false;
        }
        let idx = self.graph.add_node(v.clone());
        self.index.insert(v, idx);
        true
    }

    /// Add every vertex from an iterator.
    pub fn add_vertices<I: IntoIterator<Item = V>>(&mut self, vertices: I) {
        for v in vertices {
            self.add_vertex(v);
        }
    }

    /// Add an edge, inserting missing endpoints. No-op if the edge
    /// (in either orientation, for undirected graphs) already exists.
    pub fn add_edge(&mut self, u: V, v: V) {
        let ui = self.get_or_insert(u);
        let vi = self.get_or_insert(v);
        if !self.edge_between(ui, vi) {
            self.graph.add_edge(ui, vi, ());
        }
    }

    fn get_or_insert(&mut self, v: V) -> NodeIndex {
        if let Some(&idx) = self.index.get(&v) {
            return idx;
        }
        let idx = self.graph.add_node(v.clone());
        self.index.insert(v, idx);
        idx
    }

    fn edge_between(&self, ui: NodeIndex, vi: NodeIndex) -> bool {
        if self.directed {
            self.graph.find_edge(ui, vi).is_some()
        } else {
            self.graph.find_edge_undirected(ui, vi).is_some()
        }
    }

    /// Whether the vertex is present.
    #[must_use]
    pub fn contains(&self, v: &V) -> bool {
        self.index.contains_key(v)
    }

    /// Whether the edge (u, v) exists. Orientation-insensitive for
    /// undirected graphs.
    #[must_use]
    pub fn has_edge(&self, u: &V, v: &V) -> bool {
        let (Some(&ui), Some(&vi)) = (self.index.get(u), self.index.get(v)) else {
            return false;
        };
        self.edge_between(ui, vi)
    }

    /// Iterate over all vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.graph.node_weights()
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All edges as (source, target) pairs, in insertion order.
    #[must_use]
    pub fn edges(&self) -> Vec<(V, V)> {
        self.graph
            .edge_references()
            .map(|e| {
                (
                    self.graph[e.source()].clone(),
                    self.graph[e.target()].clone(),
                )
            })
            .collect()
    }

    /// Neighbors of a vertex: successors on directed graphs, all
    /// adjacent vertices on undirected ones. O(d).
    ///
    /// Returns an empty list for unknown vertices.
    #[must_use]
    pub fn neighbors(&self, v: &V) -> Vec<V> {
        let Some(&idx) = self.index.get(v) else {
            return vec![];
        };
        let adjacent: Vec<NodeIndex> = if self.directed {
            self.graph.neighbors(idx).collect()
        } else {
            self.graph.neighbors_undirected(idx).collect()
        };
        let mut seen = HashSet::with_capacity(adjacent.len());
        adjacent
            .into_iter()
            .filter(|n| seen.insert(*n))
            .map(|n| self.graph[n].clone())
            .collect()
    }

    /// Number of incident edges: in plus out on directed graphs.
    /// Self-loops count twice. O(d).
    #[must_use]
    pub fn degree(&self, v: &V) -> usize {
        match self.index.get(v) {
            Some(&idx) => {
                self.graph.edges_directed(idx, Direction::Outgoing).count()
                    + self.graph.edges_directed(idx, Direction::Incoming).count()
            }
            None => 0,
        }
    }

    /// Decompose the graph into connected components.
    ///
    /// Connectivity ignores edge direction (weak connectivity on
    /// directed graphs). Components are returned in first-seen vertex
    /// order, and vertices within a component in insertion order, so
    /// the decomposition is deterministic for a given graph.
    ///
    /// Uses Union-Find for O(V + E * alpha(V)) computation.
    #[must_use]
    pub fn components(&self) -> Vec<Vec<V>> {
        let n = self.graph.node_count();
        if n == 0 {
            return vec![];
        }

        let mut parent: Vec<usize> = (0..n).collect();
        let mut rank: Vec<usize> = vec![0; n];

        for edge in self.graph.edge_references() {
            uf_union(
                &mut parent,
                &mut rank,
                edge.source().index(),
                edge.target().index(),
            );
        }

        // Group vertices by component root, keeping first-seen order
        let mut slot: HashMap<usize, usize> = HashMap::new();
        let mut components: Vec<Vec<V>> = Vec::new();
        for idx in self.graph.node_indices() {
            let root = uf_find(&mut parent, idx.index());
            let s = *slot.entry(root).or_insert_with(|| {
                components.push(Vec::new());
                components.len() - 1
            });
            components[s].push(self.graph[idx].clone());
        }
        components
    }

    /// Induce a subgraph on a vertex set.
    ///
    /// The result has the same directedness, exactly the given vertices,
    /// and every source edge whose endpoints are both selected. Vertices
    /// not present in the source graph are ignored.
    ///
    /// Checks all vertex pairs, so this is O(|V|^2) edge queries; fine
    /// for the sample sizes this crate targets, but a scaling limit for
    /// very large selections.
    #[must_use]
    pub fn subgraph(&self, vertices: &HashSet<V>) -> Graph<V> {
        let mut sub = Graph::new(self.directed);
        let kept: Vec<&V> = self.vertices().filter(|v| vertices.contains(*v)).collect();
        for &v in &kept {
            sub.add_vertex(v.clone());
        }
        for &u in &kept {
            for &v in &kept {
                if self.has_edge(u, v) {
                    sub.add_edge(u.clone(), v.clone());
                }
            }
        }
        sub
    }
}
