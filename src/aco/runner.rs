//! ACO colony loop execution.
//!
//! [`AcoRunner`] drives the iterate-construct-evaluate-update cycle:
//! initialization → (batch construction × num_ants → best tracking → one
//! pheromone update) × num_iterations → best tour.

use super::config::AcoConfig;
use super::construction::construct_tour;
use crate::error::ColonyError;
use crate::matrix::{CostMatrix, HeuristicMatrix, PheromoneMatrix};
use crate::random::{create_rng, random_seed};
use crate::tour::Tour;
use rand::Rng;
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Result of an ACO optimization run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoResult {
    /// The best tour found during the entire run.
    pub best: Tour,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best cost after each iteration. Non-increasing.
    pub cost_history: Vec<f64>,
}

/// Executes the ant colony loop.
///
/// # Usage
///
/// ```
/// use u_colony::aco::{AcoConfig, AcoRunner, AcoVariant};
/// use u_colony::matrix::CostMatrix;
///
/// let matrix = CostMatrix::from_rows(vec![
///     vec![0.0, 10.0, 15.0, 20.0],
///     vec![10.0, 0.0, 35.0, 25.0],
///     vec![15.0, 35.0, 0.0, 30.0],
///     vec![20.0, 25.0, 30.0, 0.0],
/// ])?;
/// let config = AcoConfig::default()
///     .with_variant(AcoVariant::Elitist { elitist_factor: 5.0 })
///     .with_seed(42);
/// let result = AcoRunner::run(&matrix, &config)?;
/// println!("best cost: {}", result.best.cost);
/// # Ok::<(), u_colony::ColonyError>(())
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs the colony to completion.
    ///
    /// # Errors
    ///
    /// Fails fast, before any iteration, on an invalid configuration, a
    /// depot index outside the matrix, or a degenerate cost under the
    /// rejecting heuristic policy.
    pub fn run(matrix: &CostMatrix, config: &AcoConfig) -> Result<AcoResult, ColonyError> {
        Self::run_with_cancel(matrix, config, None)
    }

    /// Runs the colony with an optional cancellation token.
    ///
    /// If `cancel` is set to `true`, the loop stops at the end of the
    /// current iteration and returns the best tour found so far.
    pub fn run_with_cancel(
        matrix: &CostMatrix,
        config: &AcoConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AcoResult, ColonyError> {
        config.validate().map_err(ColonyError::InvalidConfig)?;

        let n = matrix.size();
        if config.depot >= n {
            return Err(ColonyError::InvalidConfig(format!(
                "depot {} out of range for {} nodes",
                config.depot, n
            )));
        }

        let heuristic = HeuristicMatrix::from_cost(matrix, config.degenerate_policy)?;
        let tau0 = config.variant.initial_pheromone(config.initial_pheromone);
        let mut pheromone = PheromoneMatrix::uniform(n, tau0);

        let mut rng = create_rng(config.seed.unwrap_or_else(random_seed));
        let start = Instant::now();

        let mut best: Option<Tour> = None;
        let mut cost_history = Vec::with_capacity(config.num_iterations);
        let mut iterations = 0usize;
        let mut cancelled = false;

        for _ in 0..config.num_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if let Some(ms) = config.time_limit_ms {
                if start.elapsed().as_millis() >= u128::from(ms) {
                    break;
                }
            }

            let batch = construct_batch(matrix, &pheromone, &heuristic, config, &mut rng);

            // Strict improvement only; ties keep the earlier tour.
            for tour in &batch {
                if best.as_ref().is_none_or(|b| tour.cost < b.cost) {
                    best = Some(tour.clone());
                }
            }

            let current_best = best.as_ref().expect("batch has at least one tour");
            config
                .variant
                .update(&mut pheromone, &batch, current_best, config);

            cost_history.push(current_best.cost);
            iterations += 1;
        }

        // num_iterations >= 1 and the cancel/time checks precede iteration 1,
        // so a cancelled-before-start run still needs a tour to return.
        let best = match best {
            Some(tour) => tour,
            None => {
                let batch = construct_batch(matrix, &pheromone, &heuristic, config, &mut rng);
                batch
                    .into_iter()
                    .min_by(|a, b| a.cost.total_cmp(&b.cost))
                    .expect("num_ants is at least 1")
            }
        };

        Ok(AcoResult {
            best,
            iterations,
            cancelled,
            cost_history,
        })
    }
}

/// Constructs one iteration's ant batch against a fixed trail snapshot.
///
/// Per-ant seeds are drawn sequentially from the master generator first, so
/// the parallel and sequential paths produce identical batches for the same
/// seed regardless of thread scheduling. The rayon join acts as the barrier
/// before the pheromone update.
fn construct_batch<R: Rng>(
    matrix: &CostMatrix,
    pheromone: &PheromoneMatrix,
    heuristic: &HeuristicMatrix,
    config: &AcoConfig,
    rng: &mut R,
) -> Vec<Tour> {
    let seeds: Vec<u64> = (0..config.num_ants).map(|_| rng.random()).collect();

    let build = |seed: u64| {
        let mut ant_rng = create_rng(seed);
        let nodes = construct_tour(
            pheromone,
            heuristic,
            config.alpha,
            config.beta,
            config.depot,
            &mut ant_rng,
        );
        Tour::new(nodes, matrix)
    };

    if config.parallel {
        seeds.into_par_iter().map(build).collect()
    } else {
        seeds.into_iter().map(build).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
