//! Weighted vertex selection.
//!
//! [`weighted_choice`] draws one vertex from a candidate set with
//! probability proportional to its weight, using a single uniform draw
//! against the cumulative weight (never rejection sampling, so the
//! number of RNG draws per call is fixed). [`sample_nodes`] iterates it
//! to select `floor(p * |V|)` distinct vertices without replacement.

use crate::sample::target_size;
use crate::{Error, Graph, Result};
use rand::prelude::*;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Pick a candidate index proportionally to weight. One RNG draw.
fn pick<V: Eq + Hash, R: Rng>(
    candidates: &[V],
    weights: &HashMap<V, f64>,
    rng: &mut R,
) -> Result<usize> {
    if candidates.is_empty() {
        return Err(Error::InvalidWeights("empty candidate set".into()));
    }

    let mut total = 0.0;
    for v in candidates {
        let w = *weights.get(v).ok_or_else(|| {
            Error::InvalidWeights("weight map does not cover the candidate set".into())
        })?;
        if w < 0.0 {
            return Err(Error::InvalidWeights(format!("negative weight {w}")));
        }
        total += w;
    }
    if total <= 0.0 {
        return Err(Error::InvalidWeights(format!(
            "total weight {total} is not positive"
        )));
    }

    let threshold = rng.random::<f64>() * total;
    let mut acc = 0.0;
    for (i, v) in candidates.iter().enumerate() {
        acc += weights[v];
        if threshold < acc {
            return Ok(i);
        }
    }
    // Cumulative sum fell short of total by a rounding error
    Ok(candidates.len() - 1)
}

/// Select one vertex from `candidates` with probability proportional
/// to its weight.
///
/// # Errors
///
/// [`Error::InvalidWeights`] if the candidate set is empty, a candidate
/// is missing from the weight map, any weight is negative, or the total
/// weight is not positive.
pub fn weighted_choice<V: Clone + Eq + Hash, R: Rng>(
    candidates: &[V],
    weights: &HashMap<V, f64>,
    rng: &mut R,
) -> Result<V> {
    pick(candidates, weights, rng).map(|i| candidates[i].clone())
}

/// Select `floor(p * |V|)` distinct vertices of `graph`, weighted by
/// `weights`, without replacement.
///
/// Each round draws one vertex via [`weighted_choice`] and removes it
/// from both the candidate pool and the weight map before the next
/// draw; the raw weights of the remaining candidates are never
/// re-normalized. The caller's weight map is copied on entry and left
/// untouched.
///
/// `p = 0` returns an empty set without consuming randomness; `p = 1`
/// selects every vertex.
///
/// # Errors
///
/// [`Error::InvalidFraction`] if `p` is outside `[0, 1]`,
/// [`Error::InvalidWeights`] as for [`weighted_choice`], and
/// [`Error::ExhaustedCandidates`] if the pool empties before the target
/// size is reached.
pub fn sample_nodes<V: Clone + Eq + Hash, R: Rng>(
    graph: &Graph<V>,
    p: f64,
    weights: &HashMap<V, f64>,
    rng: &mut R,
) -> Result<HashSet<V>> {
    let target = target_size(graph.vertex_count(), p)?;
    let mut pool: Vec<V> = graph.vertices().cloned().collect();
    let mut weights = weights.clone();
    let mut selected = HashSet::with_capacity(target);

    while selected.len() < target {
        if pool.is_empty() {
            return Err(Error::ExhaustedCandidates {
                needed: target,
                selected: selected.len(),
            });
        }
        let i = pick(&pool, &weights, rng)?;
        let v = pool.swap_remove(i);
        weights.remove(&v);
        selected.insert(v);
    }
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_xorshift::XorShiftRng;

    fn path_graph(n: i32) -> Graph<i32> {
        let mut g = Graph::undirected();
        for v in 0..n - 1 {
            g.add_edge(v, v + 1);
        }
        g
    }

    fn uniform_weights(g: &Graph<i32>) -> HashMap<i32, f64> {
        g.vertices().map(|v| (*v, 1.0)).collect()
    }

    #[test]
    fn test_sample_size_is_floor() {
        let g = path_graph(5);
        let w = uniform_weights(&g);
        let mut rng = XorShiftRng::seed_from_u64(1);

        let picked = sample_nodes(&g, 0.5, &w, &mut rng).unwrap();
        assert_eq!(picked.len(), 2); // floor(5 * 0.5)
        assert!(picked.iter().all(|v| g.contains(v)));
    }

    #[test]
    fn test_sample_zero_fraction() {
        let g = path_graph(5);
        let w = uniform_weights(&g);
        let mut rng = XorShiftRng::seed_from_u64(1);
        assert!(sample_nodes(&g, 0.0, &w, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn test_sample_full_fraction_selects_everything() {
        let g = path_graph(6);
        let w = uniform_weights(&g);
        let mut rng = XorShiftRng::seed_from_u64(3);

        let picked = sample_nodes(&g, 1.0, &w, &mut rng).unwrap();
        assert_eq!(picked.len(), 6); // Without replacement: all distinct
    }

    #[test]
    fn test_caller_weights_not_mutated() {
        let g = path_graph(4);
        let w = uniform_weights(&g);
        let mut rng = XorShiftRng::seed_from_u64(5);

        sample_nodes(&g, 1.0, &w, &mut rng).unwrap();
        assert_eq!(w.len(), 4);
    }

    #[test]
    fn test_missing_weight_entry_rejected() {
        let g = path_graph(4);
        let mut w = uniform_weights(&g);
        w.remove(&2);
        let mut rng = XorShiftRng::seed_from_u64(1);

        assert!(matches!(
            sample_nodes(&g, 1.0, &w, &mut rng),
            Err(Error::InvalidWeights(_))
        ));
    }

    #[test]
    fn test_zero_total_weight_rejected() {
        let g = path_graph(3);
        let w: HashMap<i32, f64> = g.vertices().map(|v| (*v, 0.0)).collect();
        let mut rng = XorShiftRng::seed_from_u64(1);

        assert!(matches!(
            sample_nodes(&g, 0.5, &w, &mut rng),
            Err(Error::InvalidWeights(_))
        ));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let candidates = vec![1, 2];
        let w = HashMap::from([(1, 2.0), (2, -1.0)]);
        let mut rng = XorShiftRng::seed_from_u64(1);

        assert!(matches!(
            weighted_choice(&candidates, &w, &mut rng),
            Err(Error::InvalidWeights(_))
        ));
    }

    #[test]
    fn test_invalid_fraction_rejected() {
        let g = path_graph(3);
        let w = uniform_weights(&g);
        let mut rng = XorShiftRng::seed_from_u64(1);

        assert!(matches!(
            sample_nodes(&g, 1.01, &w, &mut rng),
            Err(Error::InvalidFraction(_))
        ));
        assert!(matches!(
            sample_nodes(&g, -0.5, &w, &mut rng),
            Err(Error::InvalidFraction(_))
        ));
    }

    #[test]
    fn test_equal_weights_near_uniform_frequency() {
        let candidates = vec![0, 1, 2, 3];
        let w: HashMap<i32, f64> = candidates.iter().map(|v| (*v, 1.0)).collect();

        let mut counts = [0usize; 4];
        let mut rng = XorShiftRng::seed_from_u64(42);
        for _ in 0..4000 {
            let v = weighted_choice(&candidates, &w, &mut rng).unwrap();
            counts[v as usize] += 1;
        }

        // Expect ~1000 each; loose bounds, not an exact distribution test
        for count in counts {
            assert!((600..=1400).contains(&count), "skewed counts: {counts:?}");
        }
    }

    #[test]
    fn test_heavier_weight_drawn_more_often() {
        let candidates = vec!["heavy", "light"];
        let w = HashMap::from([("heavy", 3.0), ("light", 1.0)]);

        let mut heavy = 0;
        let mut rng = XorShiftRng::seed_from_u64(9);
        for _ in 0..1000 {
            if weighted_choice(&candidates, &w, &mut rng).unwrap() == "heavy" {
                heavy += 1;
            }
        }
        assert!(heavy > 600, "heavy drawn only {heavy}/1000 times");
    }
}
