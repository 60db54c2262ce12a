//! Search behavior on hand-built and generated grids.

mod common;

use chakra_plan::grid::GridShape;
use chakra_plan::search::toroidal_distance;
use chakra_plan::{
    CellState, Error, HeuristicMap, OccupancyGrid, SearchPath, angles_to_cell,
    build_occupancy_grid, find_path, path_to_angles,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ============================================================================
// Small hand-built grids
// ============================================================================

#[test]
fn test_free_five_by_five() {
    let grid = OccupancyGrid::all_free(2, 5).unwrap();
    let path = find_path(&grid, &[0, 0], &[2, 2]).unwrap().into_path().unwrap();
    assert_eq!(path.len(), 5);
    common::assert_valid_path(&grid, &path, &[0, 0], &[2, 2]);
}

#[test]
fn test_wraparound_as_short_as_neighbor() {
    let grid = OccupancyGrid::all_free(2, 5).unwrap();
    let across_seam = find_path(&grid, &[0, 0], &[4, 4]).unwrap().into_path().unwrap();
    let direct = find_path(&grid, &[0, 0], &[1, 1]).unwrap().into_path().unwrap();
    assert_eq!(across_seam.len(), 3);
    assert_eq!(direct.len(), 3);
}

#[test]
fn test_everything_blocked_but_start() {
    let shape = GridShape::new(2, 5).unwrap();
    let mut states = vec![CellState::Collision; shape.cell_count()];
    states[shape.index_of(&[0, 0])] = CellState::Free;
    let mut grid = OccupancyGrid::from_states(shape, states).unwrap();
    // Goal is free but unreachable
    grid.set(&[2, 2], CellState::Free).unwrap();

    let outcome = find_path(&grid, &[0, 0], &[2, 2]).unwrap();
    assert!(outcome.is_no_path());
    assert!(outcome.path().is_none());
}

#[test]
fn test_start_equals_goal_is_single_cell() {
    let grid = OccupancyGrid::all_free(2, 5).unwrap();
    let outcome = find_path(&grid, &[3, 1], &[3, 1]).unwrap();
    assert!(outcome.is_found());
    assert_eq!(outcome.path().unwrap().len(), 1);
}

#[test]
fn test_dimension_mismatch_is_an_error() {
    let grid = OccupancyGrid::all_free(2, 5).unwrap();
    let err = find_path(&grid, &[0, 0, 0], &[1, 1]).unwrap_err();
    assert_eq!(
        err,
        Error::DimensionMismatch {
            expected: 2,
            actual: 3
        }
    );
    assert_eq!(err.code(), "DIMENSION_MISMATCH");
}

// ============================================================================
// Heuristic
// ============================================================================

#[test]
fn test_heuristic_zero_at_goal_and_symmetric() {
    let mut rng = StdRng::seed_from_u64(11);
    let shape = GridShape::new(3, 8).unwrap();
    for _ in 0..50 {
        let a = shape.cell_at(rng.random_range(0..shape.cell_count()));
        let b = shape.cell_at(rng.random_range(0..shape.cell_count()));
        let to_a = HeuristicMap::new(&shape, &a).unwrap();
        let to_b = HeuristicMap::new(&shape, &b).unwrap();

        assert_eq!(to_a.get(&a).unwrap(), 0);
        assert_eq!(to_a.get(&b).unwrap(), to_b.get(&a).unwrap());
    }
}

#[test]
fn test_heuristic_never_overestimates() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..30 {
        let grid = random_grid(&mut rng, 2, 9, 0.25);
        let shape = grid.shape().clone();
        let start = shape.cell_at(rng.random_range(0..shape.cell_count()));
        let goal = shape.cell_at(rng.random_range(0..shape.cell_count()));

        if let Some(path) = find_path(&grid, &start, &goal).unwrap().into_path() {
            let heuristic = HeuristicMap::new(&shape, &goal).unwrap();
            // Remaining hops from each path cell bound its heuristic from above
            for (i, cell) in path.cells().iter().enumerate() {
                let remaining = (path.len() - 1 - i) as u32;
                assert!(heuristic.get(cell).unwrap() <= remaining);
            }
        }
    }
}

// ============================================================================
// Angle decoding
// ============================================================================

#[test]
fn test_path_angles_round_trip_to_cells() {
    let grid = OccupancyGrid::all_free(3, 36).unwrap();
    let path = find_path(&grid, &[0, 35, 18], &[34, 2, 20])
        .unwrap()
        .into_path()
        .unwrap();
    let angles = path_to_angles(&path, 36);
    assert_eq!(angles.len(), path.len());

    for (cell, angles) in path.cells().iter().zip(&angles) {
        assert_eq!(&angles_to_cell(angles, 36).unwrap(), cell);
        for &angle in angles {
            assert!((-std::f64::consts::PI..std::f64::consts::PI).contains(&angle));
        }
    }
}

// ============================================================================
// Three links
// ============================================================================

#[test]
fn test_three_link_paths() {
    common::init_logging();
    let (arm, obstacles) = common::three_link_arm();
    let grid = build_occupancy_grid(&arm, &obstacles, 24).unwrap();
    assert_eq!(grid.dims(), 3);
    assert_eq!(grid.counts().total(), 24 * 24 * 24);

    let start = [12, 12, 12];
    for (goal, expected_len) in [([20, 12, 12], 27), ([8, 16, 8], 13)] {
        let path = find_path(&grid, &start, &goal).unwrap().into_path().unwrap();
        assert_eq!(path.len(), expected_len, "goal {:?}", goal);
        common::assert_valid_path(&grid, &path, &start, &goal);
    }
}

#[test]
fn test_three_link_colliding_goal_unreachable() {
    let (arm, obstacles) = common::three_link_arm();
    let grid = build_occupancy_grid(&arm, &obstacles, 24).unwrap();

    // Straight up then hard right runs through the obstacle at (1.2, 1.0);
    // entering the goal is allowed but no free cell leads to it
    let goal = [18, 6, 12];
    assert_eq!(grid.get(&goal).unwrap(), CellState::Collision);

    let outcome = find_path(&grid, &[12, 12, 12], &goal).unwrap();
    assert!(outcome.is_no_path());
    assert!(outcome.nodes_expanded() <= grid.counts().free);
}

// ============================================================================
// Generated grids
// ============================================================================

fn random_grid(rng: &mut StdRng, dims: usize, resolution: usize, blocked: f64) -> OccupancyGrid {
    let shape = GridShape::new(dims, resolution).unwrap();
    let states = (0..shape.cell_count())
        .map(|_| {
            if rng.random_bool(blocked) {
                CellState::Collision
            } else {
                CellState::Free
            }
        })
        .collect();
    OccupancyGrid::from_states(shape, states).unwrap()
}

fn assert_shortest_on_free_grid(path: &SearchPath, start: &[usize], goal: &[usize], resolution: usize) {
    let lower_bound: u32 = start
        .iter()
        .zip(goal)
        .map(|(&a, &b)| toroidal_distance(a, b, resolution))
        .sum();
    assert_eq!(path.steps() as u32, lower_bound);
}

#[test]
fn test_free_grids_reach_toroidal_bound() {
    let mut rng = StdRng::seed_from_u64(99);
    for dims in 1..=4 {
        let resolution = 7;
        let grid = OccupancyGrid::all_free(dims, resolution).unwrap();
        let shape = grid.shape();
        for _ in 0..10 {
            let start = shape.cell_at(rng.random_range(0..shape.cell_count()));
            let goal = shape.cell_at(rng.random_range(0..shape.cell_count()));
            let path = find_path(&grid, &start, &goal).unwrap().into_path().unwrap();
            assert_shortest_on_free_grid(&path, &start, &goal, resolution);
            common::assert_valid_path(&grid, &path, &start, &goal);
        }
    }
}

#[test]
fn test_search_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(3);
    let grid = random_grid(&mut rng, 2, 20, 0.3);
    let first = find_path(&grid, &[1, 1], &[15, 12]).unwrap();
    for _ in 0..5 {
        assert_eq!(find_path(&grid, &[1, 1], &[15, 12]).unwrap(), first);
    }
}
