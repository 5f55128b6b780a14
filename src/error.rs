//! Error types for u-colony operations.
//!
//! All input validation happens before any solver iteration begins: either a
//! run produces a best tour and cost, or it fails fast here.

use std::fmt;

/// Main error type for u-colony operations.
///
/// Covers cost matrix validation failures, degenerate heuristic input,
/// and invalid solver configurations.
///
/// # Examples
///
/// ```
/// use u_colony::ColonyError;
///
/// let err = ColonyError::TooFewNodes { n: 1 };
/// assert!(err.to_string().contains("at least 2"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ColonyError {
    /// The input matrix is ragged or not n×n.
    NotSquare {
        /// Number of rows provided
        rows: usize,
        /// Number of columns in the offending row
        cols: usize,
    },

    /// Fewer than two nodes; no tour exists.
    TooFewNodes {
        /// Number of nodes provided
        n: usize,
    },

    /// A pairwise cost is negative.
    NegativeCost {
        /// Origin node index
        from: usize,
        /// Destination node index
        to: usize,
        /// The offending cost value
        cost: f64,
    },

    /// A diagonal entry is non-zero.
    NonZeroDiagonal {
        /// Node index on the diagonal
        node: usize,
        /// The offending cost value
        cost: f64,
    },

    /// `cost[i][j]` and `cost[j][i]` differ beyond tolerance.
    AsymmetricCost {
        /// First node index
        from: usize,
        /// Second node index
        to: usize,
    },

    /// Zero cost between distinct nodes; the inverse-cost heuristic is
    /// undefined and the rejecting policy is in effect.
    DegenerateCost {
        /// First node index
        from: usize,
        /// Second node index
        to: usize,
    },

    /// A solver configuration failed validation.
    InvalidConfig(String),
}

impl fmt::Display for ColonyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSquare { rows, cols } => {
                write!(f, "cost matrix is not square: {rows} rows but a row of {cols} columns")
            }
            Self::TooFewNodes { n } => {
                write!(f, "cost matrix must cover at least 2 nodes, got {n}")
            }
            Self::NegativeCost { from, to, cost } => {
                write!(f, "negative cost {cost} between nodes {from} and {to}")
            }
            Self::NonZeroDiagonal { node, cost } => {
                write!(f, "non-zero diagonal cost {cost} at node {node}")
            }
            Self::AsymmetricCost { from, to } => {
                write!(f, "asymmetric costs between nodes {from} and {to}")
            }
            Self::DegenerateCost { from, to } => {
                write!(
                    f,
                    "zero cost between distinct nodes {from} and {to}: inverse-cost heuristic is undefined"
                )
            }
            Self::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for ColonyError {}
