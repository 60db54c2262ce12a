//! Configuration-space occupancy grid.
//!
//! The joint space of an N-link arm is discretized into `M` cells per
//! joint, giving an N-dimensional grid of `M^N` cells. Every axis is
//! periodic (joint angles wrap at ±π), so the grid is a torus.
//!
//! - [`GridShape`]: flat indexing and toroidal neighbors
//! - [`OccupancyGrid`]: per-cell [`CellState`]
//! - [`OccupancyGridBuilder`]: classifies every cell against limits and obstacles
//!
//! # Example
//!
//! ```
//! use chakra_plan::arm::Arm;
//! use chakra_plan::collision::Obstacle;
//! use chakra_plan::grid::{CellState, build_occupancy_grid};
//!
//! let arm = Arm::new(vec![1.0, 1.0], vec![0.0, 0.0], None).unwrap();
//! let obstacles = [Obstacle::new(2.0, 0.0, 0.2)];
//! let grid = build_occupancy_grid(&arm, &obstacles, 10).unwrap();
//!
//! // Cell (5, 5) is the straight arm along +x, ending inside the obstacle
//! assert_eq!(grid.get(&[5, 5]).unwrap(), CellState::Collision);
//! ```

mod builder;
mod shape;
mod storage;

pub use builder::{GridBuildConfig, OccupancyGridBuilder, build_occupancy_grid};
pub use shape::{GridCell, GridShape};
pub use storage::{CellCounts, CellState, OccupancyGrid};
