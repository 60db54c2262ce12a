//! Dense occupancy storage over the joint-angle torus.

use serde::{Deserialize, Serialize};

use super::shape::{GridCell, GridShape};
use crate::error::{Error, Result};

/// Occupancy of one configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellState {
    /// Reachable and collision-free
    #[default]
    Free = 0,
    /// Some link intersects some obstacle
    Collision = 1,
    /// Some joint angle is outside its limits
    OutOfLimits = 2,
}

impl CellState {
    /// Whether the search may enter this cell
    #[inline]
    pub fn is_free(self) -> bool {
        self == CellState::Free
    }

    /// Whether the cell is blocked for any reason
    #[inline]
    pub fn is_occupied(self) -> bool {
        !self.is_free()
    }
}

/// Cell counts by state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellCounts {
    /// Free cells.
    pub free: usize,
    /// Cells blocked by an obstacle.
    pub collision: usize,
    /// Cells blocked by joint limits.
    pub out_of_limits: usize,
}

impl CellCounts {
    /// Total blocked cells.
    pub fn occupied(&self) -> usize {
        self.collision + self.out_of_limits
    }

    /// Total cells.
    pub fn total(&self) -> usize {
        self.free + self.occupied()
    }

    /// Share of free cells in `[0, 1]` (0 for an empty count).
    pub fn free_ratio(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.free as f64 / total as f64
        }
    }
}

/// Occupancy grid over `resolution ^ dims` configurations.
///
/// Cell `(i₀, …, iₙ₋₁)` stands for joint angles `θₖ = 2π·iₖ/M − π`.
///
/// Deserializing checks the state buffer against the shape like
/// [`OccupancyGrid::from_states`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GridFields", into = "GridFields")]
pub struct OccupancyGrid {
    shape: GridShape,
    cells: Vec<CellState>,
}

/// Serialized form of an [`OccupancyGrid`].
#[derive(Serialize, Deserialize)]
struct GridFields {
    shape: GridShape,
    cells: Vec<CellState>,
}

impl TryFrom<GridFields> for OccupancyGrid {
    type Error = Error;

    fn try_from(fields: GridFields) -> Result<Self> {
        OccupancyGrid::from_states(fields.shape, fields.cells)
    }
}

impl From<OccupancyGrid> for GridFields {
    fn from(grid: OccupancyGrid) -> Self {
        Self {
            shape: grid.shape,
            cells: grid.cells,
        }
    }
}

impl OccupancyGrid {
    /// Grid with every cell free.
    pub fn all_free(dims: usize, resolution: usize) -> Result<Self> {
        let shape = GridShape::new(dims, resolution)?;
        let cells = vec![CellState::Free; shape.cell_count()];
        Ok(Self { shape, cells })
    }

    /// Grid from a flat row-major state buffer.
    pub fn from_states(shape: GridShape, cells: Vec<CellState>) -> Result<Self> {
        if cells.len() != shape.cell_count() {
            return Err(Error::CellCountMismatch {
                expected: shape.cell_count(),
                actual: cells.len(),
            });
        }
        Ok(Self { shape, cells })
    }

    /// Grid shape
    #[inline]
    pub fn shape(&self) -> &GridShape {
        &self.shape
    }

    /// Number of axes (arm links)
    #[inline]
    pub fn dims(&self) -> usize {
        self.shape.dims()
    }

    /// Cells per axis
    #[inline]
    pub fn resolution(&self) -> usize {
        self.shape.resolution()
    }

    /// State of a cell.
    pub fn get(&self, cell: &[usize]) -> Result<CellState> {
        self.shape.validate_cell(cell)?;
        Ok(self.cells[self.shape.index_of(cell)])
    }

    /// Whether a cell is free.
    pub fn is_free(&self, cell: &[usize]) -> Result<bool> {
        self.get(cell).map(CellState::is_free)
    }

    /// Overwrite the state of a cell.
    pub fn set(&mut self, cell: &[usize], state: CellState) -> Result<()> {
        self.shape.validate_cell(cell)?;
        let index = self.shape.index_of(cell);
        self.cells[index] = state;
        Ok(())
    }

    /// State at a flat index, `None` when out of range.
    #[inline]
    pub fn state_at(&self, index: usize) -> Option<CellState> {
        self.cells.get(index).copied()
    }

    #[inline]
    pub(crate) fn is_free_index(&self, index: usize) -> bool {
        self.cells[index].is_free()
    }

    /// Flat row-major states
    #[inline]
    pub fn states(&self) -> &[CellState] {
        &self.cells
    }

    /// Count cells by state.
    pub fn counts(&self) -> CellCounts {
        let mut counts = CellCounts::default();
        for state in &self.cells {
            match state {
                CellState::Free => counts.free += 1,
                CellState::Collision => counts.collision += 1,
                CellState::OutOfLimits => counts.out_of_limits += 1,
            }
        }
        counts
    }

    /// Joint angles (radians) a cell stands for.
    pub fn cell_angles(&self, cell: &[usize]) -> Result<Vec<f64>> {
        self.shape.validate_cell(cell)?;
        Ok(GridCell::from(cell).to_angles(self.shape.resolution()))
    }
}
