//! Search types.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::grid::GridCell;

/// An open-list entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct SearchNode {
    pub index: usize,
    pub estimate: u32, // distance + heuristic
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior; ties go to the lower flat index
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A path through the configuration grid, start first.
///
/// Consecutive cells differ by exactly one step (±1 modulo M) on exactly
/// one axis. A path from a cell to itself holds that single cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPath {
    cells: Vec<GridCell>,
    nodes_expanded: usize,
}

impl SearchPath {
    pub(super) fn new(cells: Vec<GridCell>, nodes_expanded: usize) -> Self {
        Self {
            cells,
            nodes_expanded,
        }
    }

    /// Number of cells, including start and goal
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a found path
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves (`len - 1`)
    #[inline]
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// First cell
    pub fn start(&self) -> Option<&GridCell> {
        self.cells.first()
    }

    /// Last cell
    pub fn goal(&self) -> Option<&GridCell> {
        self.cells.last()
    }

    /// All cells, start first
    #[inline]
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Cells expanded by the search that produced this path
    #[inline]
    pub fn nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }

    /// Joint-angle sequence (radians) of the path at `resolution` cells per axis.
    pub fn to_angles(&self, resolution: usize) -> Vec<Vec<f64>> {
        self.cells
            .iter()
            .map(|cell| cell.to_angles(resolution))
            .collect()
    }
}

/// Result of a grid search.
///
/// An unreachable goal is a normal outcome, not an error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchOutcome {
    /// A shortest path in hop count
    Found(SearchPath),
    /// The goal is disconnected from the start
    NoPath {
        /// Cells expanded before the open set ran dry
        nodes_expanded: usize,
    },
}

impl SearchOutcome {
    /// Whether a path was found
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    /// Whether the goal was unreachable
    #[inline]
    pub fn is_no_path(&self) -> bool {
        matches!(self, SearchOutcome::NoPath { .. })
    }

    /// Found path, if any
    pub fn path(&self) -> Option<&SearchPath> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::NoPath { .. } => None,
        }
    }

    /// Take the found path, if any
    pub fn into_path(self) -> Option<SearchPath> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::NoPath { .. } => None,
        }
    }

    /// Cells expanded by the search
    pub fn nodes_expanded(&self) -> usize {
        match self {
            SearchOutcome::Found(path) => path.nodes_expanded(),
            SearchOutcome::NoPath { nodes_expanded } => *nodes_expanded,
        }
    }
}
