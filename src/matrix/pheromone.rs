//! Mutable pheromone trail matrix.

/// Per-edge learned desirability, kept symmetric by construction.
///
/// Initialized uniformly and mutated exclusively by the update policy, once
/// per iteration after the whole ant batch has been constructed and
/// evaluated. Construction only ever reads a consistent snapshot.
#[derive(Debug, Clone)]
pub struct PheromoneMatrix {
    data: Vec<f64>,
    size: usize,
}

impl PheromoneMatrix {
    /// Creates an n×n matrix with every entry set to `tau0`.
    pub fn uniform(n: usize, tau0: f64) -> Self {
        Self {
            data: vec![tau0; n * n],
            size: n,
        }
    }

    /// Returns the trail strength on the edge `from → to`.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of nodes covered by this matrix.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Multiplies every entry by `(1 - rho)`.
    pub fn evaporate(&mut self, rho: f64) {
        let factor = 1.0 - rho;
        for v in &mut self.data {
            *v *= factor;
        }
    }

    /// Adds `amount` to the edge `a ↔ b`, both directions.
    #[inline]
    pub fn deposit(&mut self, a: usize, b: usize, amount: f64) {
        self.data[a * self.size + b] += amount;
        self.data[b * self.size + a] = self.data[a * self.size + b];
    }

    /// Deposits `amount` on every consecutive edge of a node sequence.
    pub fn deposit_along(&mut self, nodes: &[usize], amount: f64) {
        for w in nodes.windows(2) {
            self.deposit(w[0], w[1], amount);
        }
    }

    /// Clamps every entry into `[min, max]`.
    pub fn clamp(&mut self, min: f64, max: f64) {
        for v in &mut self.data {
            *v = v.clamp(min, max);
        }
    }

    /// Smallest entry in the matrix.
    pub fn min_value(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest entry in the matrix.
    pub fn max_value(&self) -> f64 {
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}
