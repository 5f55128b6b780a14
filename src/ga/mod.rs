//! Genetic algorithm for the symmetric TSP.
//!
//! An independent solver over the same [`CostMatrix`](crate::matrix::CostMatrix)
//! as the ant colony: a population of depot-anchored closed tours evolved by
//! ranked parent sampling, order crossover, swap mutation, and elitism.
//!
//! # Key Types
//!
//! - [`GaConfig`]: algorithm parameters with builder and validation
//! - [`GaRunner`]: executes the generational loop
//! - [`GaResult`]: best tour found plus run statistics
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

mod config;
mod operators;
mod runner;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
