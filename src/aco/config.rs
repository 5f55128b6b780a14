//! ACO configuration.
//!
//! [`AcoConfig`] holds all parameters that control the colony loop, and
//! [`AcoVariant`] selects the pheromone update rule.

use crate::matrix::DegeneratePolicy;

/// Pheromone update rule.
///
/// All three variants share the same construction engine; they differ only
/// in how the trail matrix is evaporated, reinforced, and bounded once per
/// iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AcoVariant {
    /// Standard Ant System: every ant in the batch deposits `Q / cost` on
    /// the edges of its own tour.
    Standard,

    /// Elitist Ant System: Standard reinforcement plus an extra deposit of
    /// `elitist_factor * Q / best_cost` on every edge of the global best.
    Elitist {
        /// Weight of the extra best-tour deposit.
        elitist_factor: f64,
    },

    /// Min-Max Ant System: only the global best tour deposits
    /// (`Q / best_cost`), and every trail entry is clamped into
    /// `[pheromone_min, pheromone_max]` afterwards. The trail matrix is
    /// initialized to `pheromone_max` for this variant.
    MinMax {
        /// Hard floor on every trail entry.
        pheromone_min: f64,
        /// Hard ceiling on every trail entry.
        pheromone_max: f64,
    },
}

/// Configuration for the ACO solvers.
///
/// # Defaults
///
/// ```
/// use u_colony::aco::AcoConfig;
///
/// let config = AcoConfig::default();
/// assert_eq!(config.num_ants, 20);
/// assert_eq!(config.num_iterations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_colony::aco::{AcoConfig, AcoVariant};
///
/// let config = AcoConfig::default()
///     .with_variant(AcoVariant::Elitist { elitist_factor: 5.0 })
///     .with_num_ants(50)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Number of tours constructed per iteration.
    pub num_ants: usize,

    /// Number of iterations; termination is purely count-based.
    pub num_iterations: usize,

    /// Pheromone influence exponent.
    pub alpha: f64,

    /// Heuristic influence exponent.
    pub beta: f64,

    /// Evaporation rate `rho` in `(0, 1]`; trails are scaled by `1 - rho`
    /// before reinforcement.
    pub evaporation_rate: f64,

    /// Deposit constant `Q`; a tour of cost `c` deposits `Q / c`.
    pub pheromone_constant: f64,

    /// Initial trail strength `tau0`. Ignored by [`AcoVariant::MinMax`],
    /// which starts at `pheromone_max`.
    pub initial_pheromone: f64,

    /// The pheromone update rule.
    pub variant: AcoVariant,

    /// Policy for zero-cost edges between distinct nodes.
    pub degenerate_policy: DegeneratePolicy,

    /// Start/end node of every tour.
    pub depot: usize,

    /// Whether to construct the ant batch in parallel with rayon.
    ///
    /// Results are identical to the sequential order for the same seed.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` draws one from the OS.
    pub seed: Option<u64>,

    /// Optional wall-clock limit in milliseconds, checked at iteration
    /// boundaries. The best tour so far is returned when it expires.
    pub time_limit_ms: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            num_ants: 20,
            num_iterations: 100,
            alpha: 1.0,
            beta: 5.0,
            evaporation_rate: 0.5,
            pheromone_constant: 100.0,
            initial_pheromone: 1.0,
            variant: AcoVariant::Standard,
            degenerate_policy: DegeneratePolicy::default(),
            depot: 0,
            parallel: false,
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl AcoConfig {
    /// Sets the number of ants per iteration.
    pub fn with_num_ants(mut self, n: usize) -> Self {
        self.num_ants = n;
        self
    }

    /// Sets the number of iterations.
    pub fn with_num_iterations(mut self, n: usize) -> Self {
        self.num_iterations = n;
        self
    }

    /// Sets the pheromone influence exponent.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the heuristic influence exponent.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the evaporation rate.
    pub fn with_evaporation_rate(mut self, rho: f64) -> Self {
        self.evaporation_rate = rho;
        self
    }

    /// Sets the deposit constant `Q`.
    pub fn with_pheromone_constant(mut self, q: f64) -> Self {
        self.pheromone_constant = q;
        self
    }

    /// Sets the initial trail strength.
    pub fn with_initial_pheromone(mut self, tau0: f64) -> Self {
        self.initial_pheromone = tau0;
        self
    }

    /// Sets the update rule variant.
    pub fn with_variant(mut self, variant: AcoVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the policy for zero-cost edges between distinct nodes.
    pub fn with_degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.degenerate_policy = policy;
        self
    }

    /// Sets the depot node.
    pub fn with_depot(mut self, depot: usize) -> Self {
        self.depot = depot;
        self
    }

    /// Enables or disables parallel batch construction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.num_ants == 0 {
            return Err("num_ants must be at least 1".into());
        }
        if self.num_iterations == 0 {
            return Err("num_iterations must be at least 1".into());
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err("alpha must be finite and non-negative".into());
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err("beta must be finite and non-negative".into());
        }
        if !(self.evaporation_rate > 0.0 && self.evaporation_rate <= 1.0) {
            return Err("evaporation_rate must be in (0, 1]".into());
        }
        if !(self.pheromone_constant > 0.0) || !self.pheromone_constant.is_finite() {
            return Err("pheromone_constant must be positive and finite".into());
        }
        if !(self.initial_pheromone > 0.0) || !self.initial_pheromone.is_finite() {
            return Err("initial_pheromone must be positive and finite".into());
        }
        match self.variant {
            AcoVariant::Standard => {}
            AcoVariant::Elitist { elitist_factor } => {
                if !(elitist_factor > 0.0) || !elitist_factor.is_finite() {
                    return Err("elitist_factor must be positive and finite".into());
                }
            }
            AcoVariant::MinMax {
                pheromone_min,
                pheromone_max,
            } => {
                if !(pheromone_min > 0.0) || !pheromone_min.is_finite() {
                    return Err("pheromone_min must be positive and finite".into());
                }
                if !(pheromone_max >= pheromone_min) || !pheromone_max.is_finite() {
                    return Err("pheromone_max must be finite and >= pheromone_min".into());
                }
            }
        }
        if self.time_limit_ms == Some(0) {
            return Err("time_limit_ms must be positive or None".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AcoConfig::default();
        assert_eq!(config.num_ants, 20);
        assert_eq!(config.num_iterations, 100);
        assert!((config.alpha - 1.0).abs() < 1e-12);
        assert!((config.beta - 5.0).abs() < 1e-12);
        assert!((config.evaporation_rate - 0.5).abs() < 1e-12);
        assert!((config.pheromone_constant - 100.0).abs() < 1e-12);
        assert_eq!(config.variant, AcoVariant::Standard);
        assert_eq!(config.depot, 0);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = AcoConfig::default()
            .with_num_ants(50)
            .with_num_iterations(500)
            .with_alpha(2.0)
            .with_beta(3.0)
            .with_evaporation_rate(0.1)
            .with_pheromone_constant(10.0)
            .with_variant(AcoVariant::Elitist { elitist_factor: 5.0 })
            .with_depot(2)
            .with_parallel(true)
            .with_seed(42);

        assert_eq!(config.num_ants, 50);
        assert_eq!(config.num_iterations, 500);
        assert!((config.alpha - 2.0).abs() < 1e-12);
        assert_eq!(config.variant, AcoVariant::Elitist { elitist_factor: 5.0 });
        assert_eq!(config.depot, 2);
        assert!(config.parallel);
        assert_eq!(config.seed, Some(42));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_ants() {
        assert!(AcoConfig::default().with_num_ants(0).validate().is_err());
    }

    #[test]
    fn test_validate_zero_iterations() {
        assert!(AcoConfig::default().with_num_iterations(0).validate().is_err());
    }

    #[test]
    fn test_validate_evaporation_out_of_range() {
        assert!(AcoConfig::default().with_evaporation_rate(0.0).validate().is_err());
        assert!(AcoConfig::default().with_evaporation_rate(1.5).validate().is_err());
        assert!(AcoConfig::default().with_evaporation_rate(1.0).validate().is_ok());
    }

    #[test]
    fn test_validate_elitist_factor() {
        let config = AcoConfig::default().with_variant(AcoVariant::Elitist {
            elitist_factor: 0.0,
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_minmax_bounds() {
        let bad = AcoConfig::default().with_variant(AcoVariant::MinMax {
            pheromone_min: 2.0,
            pheromone_max: 1.0,
        });
        assert!(bad.validate().is_err());

        let ok = AcoConfig::default().with_variant(AcoVariant::MinMax {
            pheromone_min: 0.1,
            pheromone_max: 10.0,
        });
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_time_limit() {
        assert!(AcoConfig::default().with_time_limit_ms(0).validate().is_err());
    }
}
