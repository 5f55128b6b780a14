//! Static heuristic attractiveness derived from the cost matrix.

use super::cost::CostMatrix;
use crate::error::ColonyError;

/// Policy for zero-cost edges between distinct nodes.
///
/// `1 / cost` is undefined when two distinct nodes have zero cost (typically
/// duplicate locations). The policy must be chosen explicitly; there is no
/// silent behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DegeneratePolicy {
    /// Fail with [`ColonyError::DegenerateCost`]. The default.
    Reject,

    /// Substitute the given maximum attractiveness for the undefined entry.
    ///
    /// A zero-cost edge becomes maximally attractive, which is usually the
    /// intent when duplicate locations slip through upstream.
    Clamp(f64),
}

impl Default for DegeneratePolicy {
    fn default() -> Self {
        Self::Reject
    }
}

impl DegeneratePolicy {
    /// Conventional clamp ceiling for duplicate-location edges.
    pub const DEFAULT_CLAMP: f64 = 1e6;
}

/// Per-edge attractiveness: `eta[i][j] = 1 / cost[i][j]` for `i != j`.
///
/// Computed once per run and never mutated. Diagonal entries are zero.
#[derive(Debug, Clone)]
pub struct HeuristicMatrix {
    data: Vec<f64>,
    size: usize,
}

impl HeuristicMatrix {
    /// Derives the heuristic matrix from a validated cost matrix.
    ///
    /// # Errors
    ///
    /// [`ColonyError::DegenerateCost`] if any off-diagonal cost is zero and
    /// `policy` is [`DegeneratePolicy::Reject`].
    pub fn from_cost(cost: &CostMatrix, policy: DegeneratePolicy) -> Result<Self, ColonyError> {
        let n = cost.size();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let c = cost.get(i, j);
                data[i * n + j] = if c > 0.0 {
                    1.0 / c
                } else {
                    match policy {
                        DegeneratePolicy::Reject => {
                            return Err(ColonyError::DegenerateCost { from: i, to: j })
                        }
                        DegeneratePolicy::Clamp(max) => max,
                    }
                };
            }
        }
        Ok(Self { data, size: n })
    }

    /// Returns the attractiveness of the edge `from → to`.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of nodes covered by this matrix.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }
}
