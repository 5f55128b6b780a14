//! Stochastic tour construction.
//!
//! One ant builds one closed tour: start at the depot, repeatedly sample the
//! next node among the unvisited set with probability proportional to
//! `tau^alpha * eta^beta`, then close the cycle. Construction only reads the
//! trail and heuristic matrices; it never mutates shared state, so a batch
//! of ants can run concurrently over one consistent snapshot.

use crate::matrix::{HeuristicMatrix, PheromoneMatrix};
use rand::Rng;

/// Builds one closed tour `[depot, ..., depot]` of length `n + 1`.
///
/// At each step, every unvisited node `c` gets weight
/// `tau(current, c)^alpha * eta(current, c)^beta` and the next node is drawn
/// by a cumulative-sum scan against a uniform value in `[0, total)`.
/// If the total weight is zero or non-finite (possible only with degenerate
/// heuristic values), the next node is drawn uniformly among the unvisited
/// set instead of stalling.
pub(crate) fn construct_tour<R: Rng>(
    pheromone: &PheromoneMatrix,
    heuristic: &HeuristicMatrix,
    alpha: f64,
    beta: f64,
    depot: usize,
    rng: &mut R,
) -> Vec<usize> {
    let n = pheromone.size();
    let mut tour = Vec::with_capacity(n + 1);
    tour.push(depot);

    // Unvisited nodes kept in ascending order so the draw order is fixed.
    let mut unvisited: Vec<usize> = (0..n).filter(|&c| c != depot).collect();
    let mut weights = Vec::with_capacity(unvisited.len());

    while !unvisited.is_empty() {
        let current = *tour.last().expect("tour starts at the depot");

        weights.clear();
        let mut total = 0.0;
        for &candidate in &unvisited {
            let tau = pheromone.get(current, candidate).powf(alpha);
            let eta = heuristic.get(current, candidate).powf(beta);
            let w = tau * eta;
            weights.push(w);
            total += w;
        }

        let chosen = if total > 0.0 && total.is_finite() {
            let r = rng.random_range(0.0..total);
            pick_by_cumulative_weight(&weights, r)
        } else {
            rng.random_range(0..unvisited.len())
        };

        tour.push(unvisited.remove(chosen));
    }

    tour.push(depot);
    tour
}

/// Returns the first index whose cumulative weight reaches `r`.
fn pick_by_cumulative_weight(weights: &[f64], r: f64) -> usize {
    let mut cumulative = 0.0;
    for (idx, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative >= r {
            return idx;
        }
    }
    // Floating-point shortfall: the scan can end just below `total`.
    weights.len() - 1
}
