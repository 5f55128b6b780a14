//! Matrix types: pairwise costs, heuristic attractiveness, pheromone trails.
//!
//! - [`CostMatrix`]: immutable, validated n×n travel costs (the problem input)
//! - [`HeuristicMatrix`]: static inverse-cost attractiveness derived once
//! - [`PheromoneMatrix`]: mutable per-edge desirability, updated every iteration

mod cost;
mod heuristic;
mod pheromone;

pub use cost::CostMatrix;
pub use heuristic::{DegeneratePolicy, HeuristicMatrix};
pub use pheromone::PheromoneMatrix;
