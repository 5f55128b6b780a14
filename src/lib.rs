//! Tour optimization for the symmetric traveling salesman problem.
//!
//! Provides two independent solver families over a validated pairwise cost
//! matrix:
//!
//! - **Ant Colony Optimization (ACO)**: stochastic tour construction guided
//!   by pheromone trails and inverse-cost heuristic information, with three
//!   pheromone update rules — Standard Ant System (AS), Elitist Ant System
//!   (EAS), and Min-Max Ant System (MMAS).
//! - **Genetic Algorithm (GA)**: a population of depot-anchored permutations
//!   evolved via ranked parent sampling, order crossover, swap mutation, and
//!   elitism.
//!
//! Both solvers share the same tour representation (a closed cycle starting
//! and ending at the depot) and the same cost accounting, so their results
//! are directly comparable on the same [`CostMatrix`](matrix::CostMatrix).
//!
//! # Example
//!
//! ```
//! use u_colony::aco::{AcoConfig, AcoRunner};
//! use u_colony::matrix::CostMatrix;
//!
//! let matrix = CostMatrix::from_rows(vec![
//!     vec![0.0, 10.0, 15.0, 20.0],
//!     vec![10.0, 0.0, 35.0, 25.0],
//!     vec![15.0, 35.0, 0.0, 30.0],
//!     vec![20.0, 25.0, 30.0, 0.0],
//! ])?;
//!
//! let config = AcoConfig::default().with_seed(42);
//! let result = AcoRunner::run(&matrix, &config)?;
//! assert!(result.best.is_valid_cycle(4, 0));
//! # Ok::<(), u_colony::ColonyError>(())
//! ```
//!
//! # Determinism
//!
//! Every stochastic operation draws from an explicitly seeded generator
//! (see [`random`]); two runs with the same seed and input produce identical
//! tours and costs, including under parallel batch construction.

pub mod aco;
pub mod error;
pub mod ga;
pub mod matrix;
pub mod random;
pub mod tour;

pub use error::ColonyError;
pub use tour::Tour;
