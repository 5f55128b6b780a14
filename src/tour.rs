//! Closed tour representation shared by both solver families.

use crate::matrix::CostMatrix;

/// A closed tour: an ordered node sequence starting and ending at the depot,
/// visiting every other node exactly once, with its total cost.
///
/// The cost convention is the same everywhere in this crate: the sum of
/// consecutive-edge costs of the closed sequence, which already includes the
/// edge returning to the depot. No solver adds a separate closing term.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    /// Node indices, `nodes[0] == nodes[n] == depot`, length `n + 1`.
    pub nodes: Vec<usize>,

    /// Total cost of the cycle.
    pub cost: f64,
}

impl Tour {
    /// Wraps a closed node sequence, computing its cost from the matrix.
    pub fn new(nodes: Vec<usize>, matrix: &CostMatrix) -> Self {
        let cost = matrix.tour_cost(&nodes);
        Self { nodes, cost }
    }

    /// Checks the Hamiltonian cycle invariant for an `n`-node problem:
    /// length `n + 1`, starts and ends at `depot`, and every node appears
    /// exactly once apart from the repeated depot.
    pub fn is_valid_cycle(&self, n: usize, depot: usize) -> bool {
        if self.nodes.len() != n + 1 {
            return false;
        }
        if self.nodes[0] != depot || self.nodes[n] != depot {
            return false;
        }
        let mut seen = vec![false; n];
        for &node in &self.nodes[..n] {
            if node >= n || seen[node] {
                return false;
            }
            seen[node] = true;
        }
        true
    }
}
