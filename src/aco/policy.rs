//! Pheromone update rules.
//!
//! Applied exactly once per iteration, after the full ant batch has been
//! constructed and evaluated — never interleaved with construction.

use super::config::{AcoConfig, AcoVariant};
use crate::matrix::PheromoneMatrix;
use crate::tour::Tour;

impl AcoVariant {
    /// Initial trail strength for this variant.
    ///
    /// Min-Max starts at its ceiling so early iterations explore broadly;
    /// the other variants start at the configured `tau0`.
    pub(crate) fn initial_pheromone(&self, tau0: f64) -> f64 {
        match *self {
            AcoVariant::MinMax { pheromone_max, .. } => pheromone_max,
            _ => tau0,
        }
    }

    /// Evaporates, reinforces, and (for Min-Max) clamps the trail matrix.
    ///
    /// `batch` is the full set of tours constructed this iteration and
    /// `best` the global best across the whole run so far.
    pub(crate) fn update(
        &self,
        pheromone: &mut PheromoneMatrix,
        batch: &[Tour],
        best: &Tour,
        config: &AcoConfig,
    ) {
        let q = config.pheromone_constant;
        pheromone.evaporate(config.evaporation_rate);

        match *self {
            AcoVariant::Standard => {
                for tour in batch {
                    pheromone.deposit_along(&tour.nodes, q / tour.cost);
                }
            }
            AcoVariant::Elitist { elitist_factor } => {
                for tour in batch {
                    pheromone.deposit_along(&tour.nodes, q / tour.cost);
                }
                pheromone.deposit_along(&best.nodes, elitist_factor * q / best.cost);
            }
            AcoVariant::MinMax {
                pheromone_min,
                pheromone_max,
            } => {
                pheromone.deposit_along(&best.nodes, q / best.cost);
                pheromone.clamp(pheromone_min, pheromone_max);
            }
        }
    }
}
