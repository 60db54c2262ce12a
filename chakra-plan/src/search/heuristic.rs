//! Toroidal Manhattan heuristic.
//!
//! On a periodic axis of `M` cells the distance between indices `a` and `b`
//! is the shorter way round:
//!
//! ```text
//! d(a, b) = min(|a − b|, M − |a − b|)
//! h(cell) = Σ_axis d(cell[axis], goal[axis])
//! ```
//!
//! `h` is the exact hop count on an empty torus, so it never overestimates
//! and is consistent for unit-cost moves.

use crate::error::Result;
use crate::grid::{GridCell, GridShape};

/// Shorter wrapped distance between two indices on an axis of `resolution` cells.
#[inline]
pub fn toroidal_distance(a: usize, b: usize, resolution: usize) -> u32 {
    let direct = a.abs_diff(b);
    direct.min(resolution.saturating_sub(direct)) as u32
}

/// Heuristic to one goal cell for every cell of a grid.
///
/// Stored as one table of `M` entries per axis instead of `M^N` values.
#[derive(Clone, Debug)]
pub struct HeuristicMap {
    shape: GridShape,
    goal: GridCell,
    axis_tables: Vec<Vec<u32>>,
}

impl HeuristicMap {
    /// Precompute per-axis distances to `goal`.
    pub fn new(shape: &GridShape, goal: &[usize]) -> Result<Self> {
        shape.validate_cell(goal)?;
        let resolution = shape.resolution();
        let axis_tables = goal
            .iter()
            .map(|&target| {
                (0..resolution)
                    .map(|index| toroidal_distance(index, target, resolution))
                    .collect()
            })
            .collect();

        Ok(Self {
            shape: shape.clone(),
            goal: GridCell::from(goal),
            axis_tables,
        })
    }

    /// Goal cell
    pub fn goal(&self) -> &GridCell {
        &self.goal
    }

    /// Heuristic of a cell.
    pub fn get(&self, cell: &[usize]) -> Result<u32> {
        self.shape.validate_cell(cell)?;
        Ok(cell
            .iter()
            .zip(&self.axis_tables)
            .map(|(&index, table)| table[index])
            .sum())
    }

    /// Heuristic at a flat index.
    #[inline]
    pub fn at(&self, index: usize) -> u32 {
        let resolution = self.shape.resolution();
        self.axis_tables
            .iter()
            .enumerate()
            .map(|(axis, table)| table[(index / self.shape.stride(axis)) % resolution])
            .sum()
    }

    /// Dense row-major heuristic for every cell.
    pub fn values(&self) -> Vec<u32> {
        (0..self.shape.cell_count()).map(|index| self.at(index)).collect()
    }
}
