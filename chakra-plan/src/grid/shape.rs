//! Hypercube grid shape, cell coordinates and toroidal neighbors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

use crate::core::math::index_to_angle;
use crate::error::{Error, Result};

/// N-dimensional grid cell: one index per joint axis.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCell(Vec<usize>);

impl GridCell {
    /// Create a cell from per-axis indices
    #[inline]
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    /// Number of axes
    #[inline]
    pub fn dims(&self) -> usize {
        self.0.len()
    }

    /// Per-axis indices
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Take the per-axis indices
    #[inline]
    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }

    /// Joint angles (radians) this cell stands for at `resolution` cells per axis
    pub fn to_angles(&self, resolution: usize) -> Vec<f64> {
        self.0
            .iter()
            .map(|&index| index_to_angle(index, resolution))
            .collect()
    }
}

impl Deref for GridCell {
    type Target = [usize];

    #[inline]
    fn deref(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for GridCell {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl From<&[usize]> for GridCell {
    fn from(indices: &[usize]) -> Self {
        Self(indices.to_vec())
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (axis, index) in self.0.iter().enumerate() {
            if axis > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", index)?;
        }
        write!(f, ")")
    }
}

/// Shape of a hypercube grid with `dims` axes of `resolution` cells each.
///
/// Cells are stored row-major with axis 0 most significant:
///
/// ```text
/// index = ((i₀·M + i₁)·M + i₂)·M + …
/// ```
///
/// Every axis wraps: index −1 ≡ M−1 and index M ≡ 0.
///
/// Serialized as `dims` and `resolution` only; deserializing goes through
/// [`GridShape::new`] so derived fields are always consistent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ShapeFields", into = "ShapeFields")]
pub struct GridShape {
    dims: usize,
    resolution: usize,
    cell_count: usize,
    strides: Vec<usize>,
}

/// Serialized form of a [`GridShape`].
#[derive(Serialize, Deserialize)]
struct ShapeFields {
    dims: usize,
    resolution: usize,
}

impl TryFrom<ShapeFields> for GridShape {
    type Error = Error;

    fn try_from(fields: ShapeFields) -> Result<Self> {
        GridShape::new(fields.dims, fields.resolution)
    }
}

impl From<GridShape> for ShapeFields {
    fn from(shape: GridShape) -> Self {
        Self {
            dims: shape.dims,
            resolution: shape.resolution,
        }
    }
}

impl GridShape {
    /// Create a shape, rejecting a zero resolution or an unaddressable cell count.
    pub fn new(dims: usize, resolution: usize) -> Result<Self> {
        if resolution == 0 {
            return Err(Error::InvalidResolution);
        }
        let too_large = || Error::GridTooLarge { dims, resolution };
        let exponent = u32::try_from(dims).map_err(|_| too_large())?;
        let cell_count = resolution.checked_pow(exponent).ok_or_else(too_large)?;

        let mut strides = vec![1; dims];
        for axis in (0..dims.saturating_sub(1)).rev() {
            strides[axis] = strides[axis + 1] * resolution;
        }

        Ok(Self {
            dims,
            resolution,
            cell_count,
            strides,
        })
    }

    /// Number of axes
    #[inline]
    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Cells per axis
    #[inline]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Total number of cells (`resolution ^ dims`)
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Flat-index distance between neighbors along `axis`
    #[inline]
    pub fn stride(&self, axis: usize) -> usize {
        self.strides[axis]
    }

    /// Check a cell's dimensionality and per-axis bounds.
    pub fn validate_cell(&self, cell: &[usize]) -> Result<()> {
        if cell.len() != self.dims {
            return Err(Error::DimensionMismatch {
                expected: self.dims,
                actual: cell.len(),
            });
        }
        for (axis, &index) in cell.iter().enumerate() {
            if index >= self.resolution {
                return Err(Error::CellOutOfBounds {
                    axis,
                    index,
                    resolution: self.resolution,
                });
            }
        }
        Ok(())
    }

    /// Flat index of a validated cell
    #[inline]
    pub fn index_of(&self, cell: &[usize]) -> usize {
        cell.iter()
            .zip(&self.strides)
            .map(|(&index, &stride)| index * stride)
            .sum()
    }

    /// Cell at a flat index
    pub fn cell_at(&self, index: usize) -> GridCell {
        let mut coords = vec![0; self.dims];
        self.coords_into(index, &mut coords);
        GridCell::new(coords)
    }

    /// Decode a flat index into a per-axis coordinate buffer of length `dims`.
    #[inline]
    pub fn coords_into(&self, index: usize, coords: &mut [usize]) {
        for (coord, &stride) in coords.iter_mut().zip(&self.strides) {
            *coord = (index / stride) % self.resolution;
        }
    }

    /// Flat indices of the `2·dims` toroidal neighbors of `index`.
    ///
    /// Order is fixed: for each axis, the backward step then the forward step.
    pub fn neighbor_indices(&self, index: usize, out: &mut Vec<usize>) {
        out.clear();
        let m = self.resolution;
        for &stride in &self.strides {
            let coord = (index / stride) % m;
            let backward = if coord == 0 {
                index + (m - 1) * stride
            } else {
                index - stride
            };
            let forward = if coord + 1 == m {
                index - coord * stride
            } else {
                index + stride
            };
            out.push(backward);
            out.push(forward);
        }
    }
}
