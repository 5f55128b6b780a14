//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the generational loop.

/// Configuration for the genetic algorithm.
///
/// # Defaults
///
/// ```
/// use u_colony::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.num_generations, 200);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_colony::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of tours in the population.
    pub population_size: usize,

    /// Number of generations; termination is purely count-based.
    pub num_generations: usize,

    /// Probability of applying swap mutation to an offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Fraction of the population copied unchanged into the next
    /// generation, best first (0.0–1.0).
    pub elitism_rate: f64,

    /// Parents are sampled uniformly from the best-ranked
    /// `min(parent_pool_size, population_size)` tours.
    pub parent_pool_size: usize,

    /// Start/end node of every tour.
    pub depot: usize,

    /// Whether to evaluate offspring costs in parallel with rayon.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` draws one from the OS.
    pub seed: Option<u64>,

    /// Optional wall-clock limit in milliseconds, checked at generation
    /// boundaries. The best tour so far is returned when it expires.
    pub time_limit_ms: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            num_generations: 200,
            mutation_rate: 0.1,
            elitism_rate: 0.1,
            parent_pool_size: 50,
            depot: 0,
            parallel: false,
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_num_generations(mut self, n: usize) -> Self {
        self.num_generations = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the elitism rate.
    pub fn with_elitism_rate(mut self, rate: f64) -> Self {
        self.elitism_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the ranked parent pool size.
    ///
    /// The effective pool is always capped at the population size, so
    /// small populations work without adjustment.
    pub fn with_parent_pool_size(mut self, n: usize) -> Self {
        self.parent_pool_size = n;
        self
    }

    /// Sets the depot node.
    pub fn with_depot(mut self, depot: usize) -> Self {
        self.depot = depot;
        self
    }

    /// Enables or disables parallel offspring evaluation.
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
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.num_generations == 0 {
            return Err("num_generations must be at least 1".into());
        }
        let elite_count = (self.population_size as f64 * self.elitism_rate) as usize;
        if elite_count >= self.population_size {
            return Err("elitism_rate too high: elites fill entire population".into());
        }
        if self.parent_pool_size < 2 {
            return Err("parent_pool_size must be at least 2".into());
        }
        if self.time_limit_ms == Some(0) {
            return Err("time_limit_ms must be positive or None".into());
        }
        Ok(())
    }
}
