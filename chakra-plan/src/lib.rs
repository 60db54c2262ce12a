//! # Chakra-Plan: Configuration-Space Planning for Planar Arms
//!
//! Plans collision-free motions for a planar arm with any number of rigid
//! links by discretizing its joint-angle space into a grid and searching
//! that grid for a shortest path.
//!
//! ## Features
//!
//! - **Forward kinematics** for N-link serial arms with cumulative joint angles
//! - **Joint limits** as inclusive per-joint ranges, checked before any geometry
//! - **Segment–circle collision** with exact endpoint-order symmetry
//! - **Parallel grid build**: every one of the `M^N` configurations classified on rayon
//! - **Toroidal A\***: joint angles wrap at ±π, so paths may cross the seam
//!
//! ## Quick Start
//!
//! ```rust
//! use chakra_plan::{Arm, Obstacle, build_occupancy_grid, find_path};
//!
//! let arm = Arm::new(vec![1.0, 1.0], vec![0.0, 0.0], None)?;
//! let obstacles = [
//!     Obstacle::new(1.75, 0.75, 0.6),
//!     Obstacle::new(0.55, 1.5, 0.5),
//!     Obstacle::new(0.0, -1.0, 0.25),
//! ];
//!
//! // 100 cells per joint: 3.6° per cell
//! let grid = build_occupancy_grid(&arm, &obstacles, 100)?;
//! let outcome = find_path(&grid, &[10, 50], &[58, 56])?;
//!
//! let path = outcome.path().expect("goal is reachable");
//! assert_eq!(path.len(), 127);
//!
//! // Joint angles (radians) for each step
//! let angles = path.to_angles(100);
//! assert_eq!(angles.len(), path.len());
//! # Ok::<(), chakra_plan::Error>(())
//! ```
//!
//! ## Grid Convention
//!
//! Cell index `i` on a joint axis of resolution `M` stands for the angle
//!
//! ```text
//! θ = 2π·i/M − π        (i = 0 → −π, i = M/2 → 0)
//! ```
//!
//! and neighbors wrap: index `M − 1` is adjacent to index 0.
//!
//! ## Architecture
//!
//! - [`core`]: Point2D and angle/index conversions
//! - [`arm`]: Link geometry, joint limits and the stateful arm
//! - [`collision`]: Segment–circle intersection
//! - [`grid`]: Occupancy grid and its builder
//! - [`search`]: Toroidal A*
//! - [`trajectory`]: Path ↔ angle sequence conversions and re-validation
//! - [`planner`]: [`MotionPlanner`] tying the pieces together
//! - [`config`]: YAML planner configuration
//!
//! ## Data Flow
//!
//! ```text
//!   Arm + Obstacles
//!          │ OccupancyGridBuilder::build()  (rayon)
//!          ▼
//!   OccupancyGrid  (M^N cells: Free / Collision / OutOfLimits)
//!          │ TorusPlanner::find_path()
//!          ▼
//!   SearchOutcome  (Found(SearchPath) | NoPath)
//!          │ path_to_angles()
//!          ▼
//!   joint-angle trajectory → end-effector trace
//! ```

pub mod arm;
pub mod collision;
pub mod config;
pub mod core;
pub mod error;
pub mod grid;
pub mod planner;
pub mod search;
pub mod trajectory;

// Re-export main types
pub use arm::{Arm, ArmGeometry, JointLimits};
pub use collision::{Obstacle, Segment, intersects};
pub use config::{ConfigLoadError, PlannerConfig};
pub use crate::core::Point2D;
pub use error::{Error, Result};
pub use grid::{
    CellCounts, CellState, GridBuildConfig, GridCell, GridShape, OccupancyGrid,
    OccupancyGridBuilder, build_occupancy_grid,
};
pub use planner::{MotionPlanner, PlanResult};
pub use search::{HeuristicMap, SearchOutcome, SearchPath, TorusPlanner, find_path};
pub use trajectory::{angles_to_cell, end_effector_trace, is_collision_free, path_to_angles};
