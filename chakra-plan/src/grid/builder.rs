//! Occupancy grid construction over the full joint-angle space.
//!
//! Every cell is decoded to joint angles and classified:
//!
//! 1. Outside the joint limits → [`CellState::OutOfLimits`] (no kinematics run).
//! 2. Any link segment intersects any obstacle → [`CellState::Collision`].
//! 3. Otherwise → [`CellState::Free`].
//!
//! Cells are independent, so the build is split across rayon workers.
//! Each worker owns its own coordinate, angle and point buffers; the
//! result is identical to the sequential build.

use log::debug;
use rayon::prelude::*;
use std::time::Instant;

use super::shape::GridShape;
use super::storage::{CellState, OccupancyGrid};
use crate::arm::{Arm, ArmGeometry, JointLimits};
use crate::collision::{Obstacle, segments_collide};
use crate::config::defaults;
use crate::core::Point2D;
use crate::core::math::index_to_angle;
use crate::error::{Error, Result};

/// Grid construction settings.
///
/// Loaded from YAML through [`GridSection`](crate::config::GridSection).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridBuildConfig {
    /// Cells per joint axis (M).
    pub resolution: usize,

    /// Whether to classify cells on the rayon thread pool.
    pub parallel: bool,
}

impl Default for GridBuildConfig {
    fn default() -> Self {
        Self {
            resolution: defaults::resolution(),
            parallel: defaults::enabled(),
        }
    }
}

impl GridBuildConfig {
    /// Default settings with a specific resolution.
    pub fn with_resolution(resolution: usize) -> Self {
        Self {
            resolution,
            ..Default::default()
        }
    }

    /// Same settings, classified on the calling thread only.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

/// Per-worker scratch buffers.
struct Scratch {
    coords: Vec<usize>,
    angles: Vec<f64>,
    points: Vec<Point2D>,
}

impl Scratch {
    fn new(dims: usize) -> Self {
        Self {
            coords: vec![0; dims],
            angles: vec![0.0; dims],
            points: Vec::with_capacity(dims + 1),
        }
    }
}

/// Read-only inputs shared by every worker.
struct CellClassifier<'a> {
    shape: &'a GridShape,
    geometry: &'a ArmGeometry,
    limits: Option<&'a JointLimits>,
    obstacles: &'a [Obstacle],
    angle_table: Vec<f64>,
}

impl CellClassifier<'_> {
    #[inline]
    fn classify(&self, index: usize, scratch: &mut Scratch) -> CellState {
        self.shape.coords_into(index, &mut scratch.coords);
        for (angle, &coord) in scratch.angles.iter_mut().zip(&scratch.coords) {
            *angle = self.angle_table[coord];
        }

        if let Some(limits) = self.limits {
            if !limits.is_within_limits(&scratch.angles) {
                return CellState::OutOfLimits;
            }
        }

        self.geometry
            .forward_kinematics_into(&scratch.angles, &mut scratch.points);
        if segments_collide(&scratch.points, self.obstacles) {
            CellState::Collision
        } else {
            CellState::Free
        }
    }
}

/// Builds [`OccupancyGrid`]s for an arm and an obstacle set.
#[derive(Clone, Debug, Default)]
pub struct OccupancyGridBuilder {
    config: GridBuildConfig,
}

impl OccupancyGridBuilder {
    /// Create a builder.
    pub fn new(config: GridBuildConfig) -> Self {
        Self { config }
    }

    /// Current settings
    pub fn config(&self) -> &GridBuildConfig {
        &self.config
    }

    /// Classify every configuration of `arm` against `obstacles`.
    ///
    /// Only the arm's link lengths and limits are used; its current joint
    /// angles are ignored.
    pub fn build(&self, arm: &Arm, obstacles: &[Obstacle]) -> Result<OccupancyGrid> {
        self.build_from_parts(arm.geometry(), arm.joint_limits(), obstacles)
    }

    /// Classify every configuration of a link set with optional limits.
    pub fn build_from_parts(
        &self,
        geometry: &ArmGeometry,
        limits: Option<&JointLimits>,
        obstacles: &[Obstacle],
    ) -> Result<OccupancyGrid> {
        let started = Instant::now();
        let shape = GridShape::new(geometry.n_links(), self.config.resolution)?;
        let dims = shape.dims();
        if let Some(limits) = limits {
            if limits.len() != dims {
                return Err(Error::LimitCountMismatch {
                    links: dims,
                    limits: limits.len(),
                });
            }
        }

        let classifier = CellClassifier {
            shape: &shape,
            geometry,
            limits,
            obstacles,
            angle_table: (0..shape.resolution())
                .map(|index| index_to_angle(index, shape.resolution()))
                .collect(),
        };

        let mut cells = vec![CellState::Free; shape.cell_count()];
        if self.config.parallel {
            cells.par_iter_mut().enumerate().for_each_init(
                || Scratch::new(dims),
                |scratch, (index, state)| *state = classifier.classify(index, scratch),
            );
        } else {
            let mut scratch = Scratch::new(dims);
            for (index, state) in cells.iter_mut().enumerate() {
                *state = classifier.classify(index, &mut scratch);
            }
        }

        let grid = OccupancyGrid::from_states(shape, cells)?;
        let counts = grid.counts();
        debug!(
            "[GridBuilder] built {}^{} grid: free={} ({:.1}%), collision={}, out_of_limits={}, obstacles={}, parallel={}, took {:.1}ms",
            self.config.resolution,
            dims,
            counts.free,
            counts.free_ratio() * 100.0,
            counts.collision,
            counts.out_of_limits,
            obstacles.len(),
            self.config.parallel,
            started.elapsed().as_secs_f64() * 1000.0
        );

        Ok(grid)
    }
}

/// Build an occupancy grid with `resolution` cells per joint axis.
pub fn build_occupancy_grid(
    arm: &Arm,
    obstacles: &[Obstacle],
    resolution: usize,
) -> Result<OccupancyGrid> {
    OccupancyGridBuilder::new(GridBuildConfig::with_resolution(resolution)).build(arm, obstacles)
}
