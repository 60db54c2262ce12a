//! Test utilities for Chakra-Plan integration tests.
//!
//! Scenario arms and obstacle fields, plus path invariant checks.

#![allow(dead_code)]

use std::f64::consts::{FRAC_PI_2, PI};

use chakra_plan::search::toroidal_distance;
use chakra_plan::{Arm, JointLimits, Obstacle, OccupancyGrid, SearchPath};

/// A planning scenario: arm, obstacles and start/goal cells at resolution 100.
pub struct Scenario {
    pub arm: Arm,
    pub obstacles: Vec<Obstacle>,
    pub start: Vec<usize>,
    pub goal: Vec<usize>,
}

/// Install env_logger once; repeated calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn obstacles(raw: &[[f64; 3]]) -> Vec<Obstacle> {
    raw.iter().copied().map(Obstacle::from).collect()
}

fn scenario(links: Vec<f64>, raw: &[[f64; 3]], start: [usize; 2], goal: [usize; 2]) -> Scenario {
    let n = links.len();
    Scenario {
        arm: Arm::new(links, vec![0.0; n], None).expect("valid arm"),
        obstacles: obstacles(raw),
        start: start.to_vec(),
        goal: goal.to_vec(),
    }
}

/// Two unit links weaving between three obstacles.
pub fn two_link_weave() -> Scenario {
    scenario(
        vec![1.0, 1.0],
        &[[1.75, 0.75, 0.6], [0.55, 1.5, 0.5], [0.0, -1.0, 0.25]],
        [10, 50],
        [58, 56],
    )
}

/// `two_link_weave` with joint 0 in [-90°, 90°] and joint 1 in [-180°, 90°].
pub fn two_link_weave_limited() -> Scenario {
    let mut scenario = two_link_weave();
    let limits = JointLimits::new(vec![(-FRAC_PI_2, FRAC_PI_2), (-PI, FRAC_PI_2)])
        .expect("valid limits");
    scenario.arm = Arm::new(vec![1.0, 1.0], vec![0.0, 0.0], Some(limits)).expect("valid arm");
    scenario
}

/// Unequal links with a large obstacle under the base.
pub fn short_long_weave() -> Scenario {
    scenario(
        vec![0.5, 1.5],
        &[[1.75, 0.75, 0.6], [0.55, 1.5, 0.5], [0.0, -1.0, 0.7]],
        [10, 50],
        [58, 56],
    )
}

/// Goal configuration walled off by obstacles.
pub fn enclosed_goal() -> Scenario {
    scenario(
        vec![1.2, 0.8],
        &[[-0.5, 1.0, 0.4], [1.2, 0.2, 0.5]],
        [5, 5],
        [85, 90],
    )
}

/// Start configuration inside an obstacle.
pub fn blocked_start() -> Scenario {
    scenario(
        vec![0.5, 1.5],
        &[[0.5, 0.5, 0.4], [-1.0, -0.5, 0.6]],
        [20, 20],
        [75, 75],
    )
}

/// Three links among three obstacles.
pub fn three_link_arm() -> (Arm, Vec<Obstacle>) {
    let arm = Arm::new(vec![1.0, 0.8, 0.6], vec![0.0; 3], None).expect("valid arm");
    let obstacles = obstacles(&[[1.2, 1.0, 0.35], [-1.0, -0.9, 0.4], [0.3, -1.5, 0.3]]);
    (arm, obstacles)
}

/// Assert path invariants: endpoints, unit steps, and free interior cells.
pub fn assert_valid_path(grid: &OccupancyGrid, path: &SearchPath, start: &[usize], goal: &[usize]) {
    let resolution = grid.resolution();
    assert_eq!(path.start().map(|c| c.as_slice()), Some(start));
    assert_eq!(path.goal().map(|c| c.as_slice()), Some(goal));

    for pair in path.cells().windows(2) {
        let moved: u32 = pair[0]
            .iter()
            .zip(pair[1].iter())
            .map(|(&a, &b)| toroidal_distance(a, b, resolution))
            .sum();
        assert_eq!(moved, 1, "step {} -> {} is not a unit move", pair[0], pair[1]);
    }

    let cells = path.cells();
    if cells.len() > 2 {
        for cell in &cells[1..cells.len() - 1] {
            assert!(grid.is_free(cell).unwrap(), "path crosses occupied cell {}", cell);
        }
    }
}
