//! Ant Colony Optimization for the symmetric TSP.
//!
//! One stochastic construction engine parameterized by a pluggable pheromone
//! update rule. The three classic variants differ only in that rule:
//!
//! - [`AcoVariant::Standard`]: every ant reinforces its own tour (AS)
//! - [`AcoVariant::Elitist`]: AS plus an extra deposit on the global best (EAS)
//! - [`AcoVariant::MinMax`]: only the global best reinforces, trails clamped
//!   to `[pheromone_min, pheromone_max]` (MMAS)
//!
//! # Key Types
//!
//! - [`AcoConfig`]: algorithm parameters with builder and validation
//! - [`AcoRunner`]: executes the iterate-construct-evaluate-update loop
//! - [`AcoResult`]: best tour found plus run statistics
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Stützle & Hoos (2000), "MAX-MIN Ant System"
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*

mod config;
mod construction;
mod policy;
mod runner;

pub use config::{AcoConfig, AcoVariant};
pub use runner::{AcoResult, AcoRunner};
