//! Genetic operators over depot-anchored closed tours.
//!
//! Both operators leave the depot endpoints untouched and work on the
//! interior permutation `nodes[1..n]` of a closed tour of length `n + 1`.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//!   (order crossover)

use rand::Rng;

/// Order crossover (OX) on the interior of two closed tours.
///
/// Copies a contiguous random slice of `parent1`'s interior into the child
/// at the same positions, then fills the remaining slots with `parent2`'s
/// interior genes in their relative order, skipping genes already present.
///
/// Returns a closed tour with the same depot endpoints as the parents.
///
/// # Panics
///
/// Panics if the parents have different lengths or are shorter than a
/// closed two-node tour.
pub(crate) fn order_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> Vec<usize> {
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");
    assert!(parent1.len() >= 3, "closed tour needs at least two nodes");

    let m = parent1.len() - 2; // interior length
    if m < 2 {
        return parent1.to_vec();
    }

    let inner1 = &parent1[1..=m];
    let inner2 = &parent2[1..=m];

    let a = rng.random_range(0..m);
    let b = rng.random_range(0..m);
    let (start, end) = if a <= b { (a, b) } else { (b, a) };

    let mut child = vec![usize::MAX; m];
    let mut present = vec![false; parent1.len()];
    for i in start..=end {
        child[i] = inner1[i];
        present[inner1[i]] = true;
    }

    let mut fill = 0;
    for &gene in inner2 {
        if present[gene] {
            continue;
        }
        while child[fill] != usize::MAX {
            fill += 1;
        }
        child[fill] = gene;
    }

    let depot = parent1[0];
    let mut nodes = Vec::with_capacity(parent1.len());
    nodes.push(depot);
    nodes.extend(child);
    nodes.push(depot);
    nodes
}

/// Swaps two randomly chosen interior genes in place.
pub(crate) fn swap_mutation<R: Rng>(nodes: &mut [usize], rng: &mut R) {
    let m = nodes.len() - 2;
    if m < 2 {
        return;
    }
    let i = 1 + rng.random_range(0..m);
    let mut j = 1 + rng.random_range(0..m);
    while j == i {
        j = 1 + rng.random_range(0..m);
    }
    nodes.swap(i, j);
}
