//! Validated dense cost matrix.

use crate::error::ColonyError;

/// Tolerance for the symmetry check at load time.
const SYMMETRY_TOL: f64 = 1e-9;

/// An immutable n×n matrix of pairwise travel costs, stored row-major.
///
/// Validated on construction: square, at least 2 nodes, non-negative
/// entries, zero diagonal, and symmetric within a small tolerance. Sentinel
/// "unreachable" costs (e.g. `9999.0`) substituted by an upstream matrix
/// provider are ordinary costs here — tours may route through them, and the
/// solvers make no attempt to avoid them beyond their magnitude.
///
/// # Examples
///
/// ```
/// use u_colony::matrix::CostMatrix;
///
/// let m = CostMatrix::from_rows(vec![
///     vec![0.0, 3.0],
///     vec![3.0, 0.0],
/// ]).unwrap();
/// assert_eq!(m.size(), 2);
/// assert!((m.get(0, 1) - 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostMatrix {
    data: Vec<f64>,
    size: usize,
}

impl CostMatrix {
    /// Builds a cost matrix from nested rows, validating every invariant.
    ///
    /// # Errors
    ///
    /// - [`ColonyError::TooFewNodes`] if fewer than 2 rows
    /// - [`ColonyError::NotSquare`] if any row length differs from the row count
    /// - [`ColonyError::NegativeCost`] on any negative or non-finite entry
    /// - [`ColonyError::NonZeroDiagonal`] if `cost[i][i] != 0`
    /// - [`ColonyError::AsymmetricCost`] if `cost[i][j]` and `cost[j][i]`
    ///   differ beyond tolerance
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, ColonyError> {
        let n = rows.len();
        for row in &rows {
            if row.len() != n {
                return Err(ColonyError::NotSquare {
                    rows: n,
                    cols: row.len(),
                });
            }
        }
        let data: Vec<f64> = rows.into_iter().flatten().collect();
        Self::from_flat(n, data)
    }

    /// Builds a cost matrix from a flat row-major buffer of length `n * n`.
    ///
    /// # Errors
    ///
    /// Same validation as [`from_rows`](Self::from_rows); a length mismatch
    /// is reported as [`ColonyError::NotSquare`].
    pub fn from_flat(n: usize, data: Vec<f64>) -> Result<Self, ColonyError> {
        if n < 2 {
            return Err(ColonyError::TooFewNodes { n });
        }
        if data.len() != n * n {
            return Err(ColonyError::NotSquare {
                rows: n,
                cols: data.len() / n.max(1),
            });
        }

        let matrix = Self { data, size: n };

        for i in 0..n {
            for j in 0..n {
                let c = matrix.get(i, j);
                if !(c >= 0.0) || !c.is_finite() {
                    return Err(ColonyError::NegativeCost {
                        from: i,
                        to: j,
                        cost: c,
                    });
                }
            }
            let diag = matrix.get(i, i);
            if diag != 0.0 {
                return Err(ColonyError::NonZeroDiagonal { node: i, cost: diag });
            }
        }

        for i in 0..n {
            for j in (i + 1)..n {
                if (matrix.get(i, j) - matrix.get(j, i)).abs() > SYMMETRY_TOL {
                    return Err(ColonyError::AsymmetricCost { from: i, to: j });
                }
            }
        }

        Ok(matrix)
    }

    /// Returns the cost of traveling from node `from` to node `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of nodes covered by this matrix.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    ///
    /// Always `true` for matrices built through the validated constructors;
    /// exposed for callers that want to re-check externally supplied data.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Sums the consecutive-edge costs of a node sequence.
    ///
    /// For a closed tour `[depot, ..., depot]` this is the full cycle cost,
    /// including the edge back to the depot.
    pub fn tour_cost(&self, nodes: &[usize]) -> f64 {
        nodes.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }
}
