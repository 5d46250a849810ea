//! Helpers for randomized invariant tests. Only compiled for test builds.

use itertools::Itertools;
use rand::Rng;

use crate::{edge::WeightedEdge, node::NumNodes};

/// Creates `m` random edge triples over vertices `0..n` with weights in
/// `1..50`. Loops and duplicates are deliberately included so that the
/// no-op rules of the mutation operations get exercised.
pub(crate) fn random_weighted_edges<R: Rng>(
    rng: &mut R,
    n: NumNodes,
    m: usize,
) -> Vec<WeightedEdge> {
    (0..m)
        .map(|_| {
            WeightedEdge(
                rng.random_range(0..n),
                rng.random_range(0..n),
                rng.random_range(1..50),
            )
        })
        .collect_vec()
}

/// Creates `m` random label pairs over labels `0..n`, loops included.
pub(crate) fn random_label_pairs<R: Rng>(rng: &mut R, n: u32, m: usize) -> Vec<(u32, u32)> {
    (0..m)
        .map(|_| (rng.random_range(0..n), rng.random_range(0..n)))
        .collect_vec()
}
