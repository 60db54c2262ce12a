//! Shortest-path search over the joint-angle torus.
//!
//! A* with unit move costs and the toroidal Manhattan heuristic. Because
//! every joint axis wraps, a path may leave index `M − 1` and re-enter at
//! index 0 on any axis.
//!
//! # Example
//!
//! ```
//! use chakra_plan::grid::OccupancyGrid;
//! use chakra_plan::search::find_path;
//!
//! let grid = OccupancyGrid::all_free(2, 5).unwrap();
//!
//! // (0, 0) → (4, 4) wraps on both axes: two moves
//! let outcome = find_path(&grid, &[0, 0], &[4, 4]).unwrap();
//! assert_eq!(outcome.path().unwrap().steps(), 2);
//! ```

mod heuristic;
mod planner;
mod types;

pub use heuristic::{HeuristicMap, toroidal_distance};
pub use planner::{TorusPlanner, find_path};
pub use types::{SearchOutcome, SearchPath};
