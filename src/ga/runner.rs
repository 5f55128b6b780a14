//! GA generational loop execution.
//!
//! [`GaRunner`] orchestrates initialization → ranking → elitism →
//! crossover/mutation → repeat, tracking the best tour across the whole run.

use super::config::GaConfig;
use super::operators::{order_crossover, swap_mutation};
use crate::error::ColonyError;
use crate::matrix::CostMatrix;
use crate::random::{create_rng, random_seed};
use crate::tour::Tour;
use rand::seq::SliceRandom;
use rand::Rng;
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The best tour seen over the entire run, not just the final
    /// generation.
    pub best: Tour,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best cost after each generation. Non-increasing.
    pub cost_history: Vec<f64>,
}

/// Executes the genetic algorithm.
///
/// # Usage
///
/// ```
/// use u_colony::ga::{GaConfig, GaRunner};
/// use u_colony::matrix::CostMatrix;
///
/// let matrix = CostMatrix::from_rows(vec![
///     vec![0.0, 10.0, 15.0, 20.0],
///     vec![10.0, 0.0, 35.0, 25.0],
///     vec![15.0, 35.0, 0.0, 30.0],
///     vec![20.0, 25.0, 30.0, 0.0],
/// ])?;
/// let result = GaRunner::run(&matrix, &GaConfig::default().with_seed(42))?;
/// println!("best cost: {}", result.best.cost);
/// # Ok::<(), u_colony::ColonyError>(())
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA to completion.
    ///
    /// # Errors
    ///
    /// Fails fast, before any generation, on an invalid configuration or a
    /// depot index outside the matrix.
    pub fn run(matrix: &CostMatrix, config: &GaConfig) -> Result<GaResult, ColonyError> {
        Self::run_with_cancel(matrix, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is set to `true`, the loop stops at the end of the
    /// current generation and returns the best tour found so far.
    pub fn run_with_cancel(
        matrix: &CostMatrix,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult, ColonyError> {
        config.validate().map_err(ColonyError::InvalidConfig)?;

        let n = matrix.size();
        if config.depot >= n {
            return Err(ColonyError::InvalidConfig(format!(
                "depot {} out of range for {} nodes",
                config.depot, n
            )));
        }

        let mut rng = create_rng(config.seed.unwrap_or_else(random_seed));
        let start = Instant::now();

        let mut population: Vec<Tour> = (0..config.population_size)
            .map(|_| random_tour(matrix, config.depot, &mut rng))
            .collect();

        let mut best: Option<Tour> = None;
        let mut cost_history = Vec::with_capacity(config.num_generations);
        let mut generations = 0usize;
        let mut cancelled = false;

        let elite_count = (config.population_size as f64 * config.elitism_rate) as usize;
        let pool = config.parent_pool_size.min(config.population_size);

        for _ in 0..config.num_generations {
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

            population.sort_by(|a, b| a.cost.total_cmp(&b.cost));

            if best.as_ref().is_none_or(|b| population[0].cost < b.cost) {
                best = Some(population[0].clone());
            }

            let mut offspring_nodes = Vec::with_capacity(config.population_size - elite_count);
            while elite_count + offspring_nodes.len() < config.population_size {
                let p1 = rng.random_range(0..pool);
                let mut p2 = rng.random_range(0..pool);
                while p2 == p1 && pool > 1 {
                    p2 = rng.random_range(0..pool);
                }
                let mut child =
                    order_crossover(&population[p1].nodes, &population[p2].nodes, &mut rng);
                if rng.random_range(0.0..1.0) < config.mutation_rate {
                    swap_mutation(&mut child, &mut rng);
                }
                offspring_nodes.push(child);
            }

            let offspring: Vec<Tour> = if config.parallel {
                offspring_nodes
                    .into_par_iter()
                    .map(|nodes| Tour::new(nodes, matrix))
                    .collect()
            } else {
                offspring_nodes
                    .into_iter()
                    .map(|nodes| Tour::new(nodes, matrix))
                    .collect()
            };

            population.truncate(elite_count);
            population.extend(offspring);

            let current_best = best.as_ref().expect("best set on first generation");
            cost_history.push(current_best.cost);
            generations += 1;
        }

        // A run cancelled before the first generation still has the random
        // initial population to report from.
        let best = match best {
            Some(tour) => tour,
            None => {
                population.sort_by(|a, b| a.cost.total_cmp(&b.cost));
                population
                    .into_iter()
                    .next()
                    .expect("population_size is at least 2")
            }
        };

        Ok(GaResult {
            best,
            generations,
            cancelled,
            cost_history,
        })
    }
}

/// A uniformly random closed tour anchored at the depot.
fn random_tour<R: Rng>(matrix: &CostMatrix, depot: usize, rng: &mut R) -> Tour {
    let n = matrix.size();
    let mut interior: Vec<usize> = (0..n).filter(|&c| c != depot).collect();
    interior.shuffle(rng);

    let mut nodes = Vec::with_capacity(n + 1);
    nodes.push(depot);
    nodes.extend(interior);
    nodes.push(depot);
    Tour::new(nodes, matrix)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix4() -> CostMatrix {
        CostMatrix::from_rows(vec![
            vec![0.0, 10.0, 15.0, 20.0],
            vec![10.0, 0.0, 35.0, 25.0],
            vec![15.0, 35.0, 0.0, 30.0],
            vec![20.0, 25.0, 30.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_finds_known_optimum() {
        for seed in [1, 2, 3] {
            let config = GaConfig::default()
                .with_population_size(50)
                .with_num_generations(100)
                .with_seed(seed);
            let result = GaRunner::run(&matrix4(), &config).unwrap();
            assert!(
                result.best.cost <= 80.0 + 1e-9,
                "seed {seed}: cost {}",
                result.best.cost
            );
            assert!(result.best.is_valid_cycle(4, 0));
        }
    }

    #[test]
    fn test_reported_cost_matches_recomputation() {
        let matrix = matrix4();
        let config = GaConfig::default().with_seed(11);
        let result = GaRunner::run(&matrix, &config).unwrap();
        let recomputed = matrix.tour_cost(&result.best.nodes);
        assert!((result.best.cost - recomputed).abs() < 1e-12);
    }

    #[test]
    fn test_deterministic_runs() {
        let config = GaConfig::default()
            .with_population_size(20)
            .with_num_generations(50)
            .with_seed(123);
        let a = GaRunner::run(&matrix4(), &config).unwrap();
        let b = GaRunner::run(&matrix4(), &config).unwrap();
        assert_eq!(a.best.nodes, b.best.nodes);
        assert_eq!(a.best.cost, b.best.cost);
        assert_eq!(a.cost_history, b.cost_history);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let base = GaConfig::default()
            .with_population_size(30)
            .with_num_generations(30)
            .with_seed(77);
        let sequential = GaRunner::run(&matrix4(), &base.clone().with_parallel(false)).unwrap();
        let parallel = GaRunner::run(&matrix4(), &base.with_parallel(true)).unwrap();
        assert_eq!(sequential.best.nodes, parallel.best.nodes);
        assert_eq!(sequential.cost_history, parallel.cost_history);
    }

    #[test]
    fn test_history_non_increasing() {
        let config = GaConfig::default().with_num_generations(60).with_seed(9);
        let result = GaRunner::run(&matrix4(), &config).unwrap();
        assert_eq!(result.cost_history.len(), 60);
        for w in result.cost_history.windows(2) {
            assert!(w[1] <= w[0], "best cost regressed: {} -> {}", w[0], w[1]);
        }
    }

    #[test]
    fn test_small_population_below_parent_pool() {
        // Population smaller than the default pool of 50 must not panic;
        // the pool is capped at the population size.
        let config = GaConfig::default()
            .with_population_size(6)
            .with_num_generations(20)
            .with_seed(3);
        let result = GaRunner::run(&matrix4(), &config).unwrap();
        assert!(result.best.is_valid_cycle(4, 0));
    }

    #[test]
    fn test_two_nodes() {
        let matrix = CostMatrix::from_rows(vec![vec![0.0, 7.0], vec![7.0, 0.0]]).unwrap();
        let config = GaConfig::default()
            .with_population_size(4)
            .with_num_generations(5)
            .with_seed(1);
        let result = GaRunner::run(&matrix, &config).unwrap();
        assert_eq!(result.best.nodes, vec![0, 1, 0]);
        assert!((result.best.cost - 14.0).abs() < 1e-12);
    }

    #[test]
    fn test_custom_depot() {
        let config = GaConfig::default()
            .with_population_size(30)
            .with_num_generations(50)
            .with_depot(2)
            .with_seed(5);
        let result = GaRunner::run(&matrix4(), &config).unwrap();
        assert!(result.best.is_valid_cycle(4, 2));
    }

    #[test]
    fn test_sentinel_cost_still_valid_tour() {
        let matrix = CostMatrix::from_rows(vec![
            vec![0.0, 10.0, 15.0, 9999.0],
            vec![10.0, 0.0, 35.0, 25.0],
            vec![15.0, 35.0, 0.0, 30.0],
            vec![9999.0, 25.0, 30.0, 0.0],
        ])
        .unwrap();
        let config = GaConfig::default().with_seed(4);
        let result = GaRunner::run(&matrix, &config).unwrap();
        assert!(result.best.is_valid_cycle(4, 0));
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = GaConfig::default().with_population_size(1);
        let err = GaRunner::run(&matrix4(), &config).unwrap_err();
        assert!(matches!(err, ColonyError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_out_of_range_depot() {
        let config = GaConfig::default().with_depot(9);
        let err = GaRunner::run(&matrix4(), &config).unwrap_err();
        assert!(matches!(err, ColonyError::InvalidConfig(_)));
    }

    #[test]
    fn test_cancellation_returns_best_so_far() {
        let cancel = Arc::new(AtomicBool::new(true));
        let config = GaConfig::default().with_seed(1);
        let result = GaRunner::run_with_cancel(&matrix4(), &config, Some(cancel)).unwrap();
        assert!(result.cancelled);
        assert_eq!(result.generations, 0);
        assert!(result.best.is_valid_cycle(4, 0));
    }

    #[test]
    fn test_generation_count_is_fixed() {
        let config = GaConfig::default().with_num_generations(35).with_seed(8);
        let result = GaRunner::run(&matrix4(), &config).unwrap();
        assert_eq!(result.generations, 35);
        assert!(!result.cancelled);
    }

    #[test]
    fn test_zero_elitism_still_tracks_best() {
        let config = GaConfig::default()
            .with_population_size(20)
            .with_num_generations(40)
            .with_elitism_rate(0.0)
            .with_seed(6);
        let result = GaRunner::run(&matrix4(), &config).unwrap();
        // Best is tracked across generations even when no elites survive.
        for w in result.cost_history.windows(2) {
            assert!(w[1] <= w[0]);
        }
    }
}
