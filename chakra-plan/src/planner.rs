//! End-to-end planning: arm + obstacles → grid → path → joint trajectory.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::arm::Arm;
use crate::collision::Obstacle;
use crate::config::PlannerConfig;
use crate::core::Point2D;
use crate::error::{Error, Result};
use crate::grid::{OccupancyGrid, OccupancyGridBuilder};
use crate::search::{SearchOutcome, TorusPlanner};
use crate::trajectory::{angles_to_cell, end_effector_trace};

/// Outcome of one planning query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanResult {
    /// Grid search result
    pub outcome: SearchOutcome,
    /// Joint angles (radians) per path cell; empty without a path
    pub angles: Vec<Vec<f64>>,
    /// End-effector position per path cell; empty without a path
    pub end_effector: Vec<Point2D>,
}

impl PlanResult {
    /// Whether a path was found
    pub fn is_found(&self) -> bool {
        self.outcome.is_found()
    }
}

/// Owns an arm, its obstacles and the occupancy grid built from them.
///
/// The grid is built once at construction and rebuilt whenever the
/// obstacles or the resolution change, so any number of queries can
/// share it.
#[derive(Clone, Debug)]
pub struct MotionPlanner {
    arm: Arm,
    obstacles: Vec<Obstacle>,
    config: PlannerConfig,
    grid: OccupancyGrid,
}

impl MotionPlanner {
    /// Build the occupancy grid for `arm` among `obstacles`.
    pub fn new(arm: Arm, obstacles: Vec<Obstacle>, config: PlannerConfig) -> Result<Self> {
        let grid = OccupancyGridBuilder::new(config.to_build_config()).build(&arm, &obstacles)?;
        info!(
            "[MotionPlanner] ready: {} links, {} obstacles, resolution {} ({:.2}°/cell)",
            arm.n_links(),
            obstacles.len(),
            config.grid.resolution,
            config.grid.cell_size_degrees()
        );
        Ok(Self {
            arm,
            obstacles,
            config,
            grid,
        })
    }

    /// Plan between two grid cells.
    pub fn plan(&self, start: &[usize], goal: &[usize]) -> Result<PlanResult> {
        let outcome = TorusPlanner::new(&self.grid).find_path(start, goal)?;

        let (angles, end_effector) = match outcome.path() {
            Some(path) => {
                let angles = path.to_angles(self.grid.resolution());
                let end_effector = end_effector_trace(self.arm.geometry(), &angles)?;
                (angles, end_effector)
            }
            None => (Vec::new(), Vec::new()),
        };

        Ok(PlanResult {
            outcome,
            angles,
            end_effector,
        })
    }

    /// Plan between two joint configurations (radians), snapped to the nearest cells.
    pub fn plan_angles(&self, start: &[f64], goal: &[f64]) -> Result<PlanResult> {
        let links = self.arm.n_links();
        for angles in [start, goal] {
            if angles.len() != links {
                return Err(Error::LinkAngleMismatch {
                    links,
                    angles: angles.len(),
                });
            }
        }

        let resolution = self.grid.resolution();
        let start_cell = angles_to_cell(start, resolution)?;
        let goal_cell = angles_to_cell(goal, resolution)?;
        debug!(
            "[MotionPlanner] snapped start to {}, goal to {}",
            start_cell, goal_cell
        );
        self.plan(&start_cell, &goal_cell)
    }

    /// Replace the obstacle set and rebuild the grid.
    pub fn set_obstacles(&mut self, obstacles: Vec<Obstacle>) -> Result<()> {
        self.grid = self.build_grid(&self.config, &obstacles)?;
        self.obstacles = obstacles;
        Ok(())
    }

    /// Change the cells per joint axis and rebuild the grid.
    ///
    /// On error the previous grid and resolution are kept.
    pub fn set_resolution(&mut self, resolution: usize) -> Result<()> {
        let config = self.config.clone().with_resolution(resolution);
        self.grid = self.build_grid(&config, &self.obstacles)?;
        self.config = config;
        Ok(())
    }

    fn build_grid(&self, config: &PlannerConfig, obstacles: &[Obstacle]) -> Result<OccupancyGrid> {
        debug!("[MotionPlanner] rebuilding grid");
        OccupancyGridBuilder::new(config.to_build_config()).build(&self.arm, obstacles)
    }

    /// Arm being planned for
    pub fn arm(&self) -> &Arm {
        &self.arm
    }

    /// Current obstacles
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Active configuration
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Occupancy grid for the current arm and obstacles
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// Cells per joint axis
    pub fn resolution(&self) -> usize {
        self.grid.resolution()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn planner(obstacles: Vec<Obstacle>, resolution: usize) -> MotionPlanner {
        let arm = Arm::new(vec![1.0, 1.0], vec![0.0, 0.0], None).unwrap();
        MotionPlanner::new(arm, obstacles, PlannerConfig::default().with_resolution(resolution))
            .unwrap()
    }

    #[test]
    fn test_plan_free_space() {
        let planner = planner(Vec::new(), 12);
        let result = planner.plan(&[0, 0], &[3, 0]).unwrap();
        assert!(result.is_found());
        assert_eq!(result.angles.len(), 4);
        assert_eq!(result.end_effector.len(), 4);
        assert_eq!(result.angles[0], vec![-PI, -PI]);
        // (-π, -π): first link to (-1, 0), second turns back to the origin
        assert_relative_eq!(result.end_effector[0].x, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_no_path_has_empty_trajectory() {
        // Obstacle covering the base blocks every configuration
        let planner = planner(vec![Obstacle::new(0.0, 0.0, 0.5)], 8);
        let result = planner.plan(&[0, 0], &[4, 4]).unwrap();
        assert!(result.outcome.is_no_path());
        assert!(result.angles.is_empty());
        assert!(result.end_effector.is_empty());
    }

    #[test]
    fn test_plan_angles_snaps_to_cells() {
        let planner = planner(Vec::new(), 36);
        let result = planner.plan_angles(&[0.0, 0.0], &[0.01, 0.0]).unwrap();
        // Both snap to (18, 18)
        assert_eq!(result.outcome.path().unwrap().len(), 1);

        assert_eq!(
            planner.plan_angles(&[0.0], &[0.0, 0.0]).unwrap_err(),
            Error::LinkAngleMismatch {
                links: 2,
                angles: 1
            }
        );
    }

    #[test]
    fn test_plan_angles_rejects_non_finite() {
        let planner = planner(Vec::new(), 10);
        assert!(matches!(
            planner.plan_angles(&[f64::NAN, 0.0], &[0.0, 0.0]),
            Err(Error::NonFiniteAngle { joint: 0, .. })
        ));
        assert_eq!(
            planner
                .plan_angles(&[0.0, 0.0], &[0.0, f64::INFINITY])
                .unwrap_err(),
            Error::NonFiniteAngle {
                joint: 1,
                angle: f64::INFINITY
            }
        );
    }

    #[test]
    fn test_set_obstacles_rebuilds() {
        let mut planner = planner(Vec::new(), 10);
        assert_eq!(planner.grid().counts().free, 100);

        planner
            .set_obstacles(vec![Obstacle::new(0.0, 0.0, 0.5)])
            .unwrap();
        assert_eq!(planner.grid().counts().free, 0);
        assert_eq!(planner.obstacles().len(), 1);
    }

    #[test]
    fn test_set_resolution_rebuilds() {
        let mut planner = planner(Vec::new(), 10);
        planner.set_resolution(20).unwrap();
        assert_eq!(planner.resolution(), 20);
        assert_eq!(planner.config().grid.resolution, 20);
        assert_eq!(planner.grid().states().len(), 400);

        assert_eq!(planner.set_resolution(0).unwrap_err(), Error::InvalidResolution);
        assert_eq!(planner.resolution(), 20);
        assert_eq!(planner.config().grid.resolution, 20);
    }
}
