//! A* over the toroidal configuration grid.

use log::{debug, trace};
use std::collections::BinaryHeap;

use super::heuristic::HeuristicMap;
use super::types::{SearchNode, SearchOutcome, SearchPath};
use crate::error::Result;
use crate::grid::{GridCell, OccupancyGrid};

const UNREACHED: u32 = u32::MAX;
const NO_PARENT: usize = usize::MAX;

/// Shortest-path search on an [`OccupancyGrid`].
///
/// Each cell has `2·N` neighbors (one step back and one step forward on
/// every axis, wrapping modulo M). Moves cost 1. A neighbor may be entered
/// when it is free or when it is the goal; the start cell is never checked.
///
/// The open cell with the lowest `(estimate, flat index)` is expanded
/// first, so results are deterministic for a given grid.
pub struct TorusPlanner<'a> {
    grid: &'a OccupancyGrid,
}

impl<'a> TorusPlanner<'a> {
    /// Create a planner borrowing `grid`.
    pub fn new(grid: &'a OccupancyGrid) -> Self {
        Self { grid }
    }

    /// Grid being searched
    pub fn grid(&self) -> &OccupancyGrid {
        self.grid
    }

    /// Find a shortest path from `start` to `goal`.
    ///
    /// Fails only when a cell does not fit the grid. An unreachable goal
    /// yields [`SearchOutcome::NoPath`].
    pub fn find_path(&self, start: &[usize], goal: &[usize]) -> Result<SearchOutcome> {
        let shape = self.grid.shape();
        trace!(
            "[TorusSearch] find_path: start={} goal={} grid={}^{}",
            GridCell::from(start),
            GridCell::from(goal),
            shape.resolution(),
            shape.dims()
        );

        shape.validate_cell(start)?;
        let heuristic = HeuristicMap::new(shape, goal)?;

        let start_index = shape.index_of(start);
        let goal_index = shape.index_of(goal);
        if start_index == goal_index {
            trace!("[TorusSearch] start is the goal");
            return Ok(SearchOutcome::Found(SearchPath::new(
                vec![GridCell::from(start)],
                0,
            )));
        }

        let cell_count = shape.cell_count();
        let mut distance = vec![UNREACHED; cell_count];
        let mut estimate = vec![UNREACHED; cell_count];
        let mut parent = vec![NO_PARENT; cell_count];
        let mut closed = vec![false; cell_count];

        distance[start_index] = 0;
        estimate[start_index] = heuristic.at(start_index);

        let mut open_set = BinaryHeap::new();
        open_set.push(SearchNode {
            index: start_index,
            estimate: estimate[start_index],
        });

        let mut neighbors = Vec::with_capacity(2 * shape.dims());
        let mut nodes_expanded = 0;
        let mut reached = false;

        while let Some(current) = open_set.pop() {
            // Stale entry left behind by a later improvement
            if closed[current.index] || current.estimate != estimate[current.index] {
                continue;
            }
            if current.index == goal_index {
                reached = true;
                break;
            }

            closed[current.index] = true;
            nodes_expanded += 1;

            let next_distance = distance[current.index] + 1;
            shape.neighbor_indices(current.index, &mut neighbors);
            for &neighbor in &neighbors {
                if closed[neighbor] {
                    continue;
                }
                if neighbor != goal_index && !self.grid.is_free_index(neighbor) {
                    continue;
                }
                if next_distance < distance[neighbor] {
                    distance[neighbor] = next_distance;
                    estimate[neighbor] = next_distance.saturating_add(heuristic.at(neighbor));
                    parent[neighbor] = current.index;
                    open_set.push(SearchNode {
                        index: neighbor,
                        estimate: estimate[neighbor],
                    });
                }
            }
        }

        if !reached {
            debug!(
                "[TorusSearch] FAILED: NoPath after expanding {} nodes",
                nodes_expanded
            );
            return Ok(SearchOutcome::NoPath { nodes_expanded });
        }

        let mut indices = vec![goal_index];
        let mut current = goal_index;
        while current != start_index {
            current = parent[current];
            indices.push(current);
        }
        indices.reverse();

        let cells: Vec<GridCell> = indices.into_iter().map(|i| shape.cell_at(i)).collect();
        debug!(
            "[TorusSearch] SUCCESS: path length={} cells, nodes_expanded={}",
            cells.len(),
            nodes_expanded
        );

        Ok(SearchOutcome::Found(SearchPath::new(cells, nodes_expanded)))
    }
}

/// Find a shortest path from `start` to `goal` on `grid`.
pub fn find_path(grid: &OccupancyGrid, start: &[usize], goal: &[usize]) -> Result<SearchOutcome> {
    TorusPlanner::new(grid).find_path(start, goal)
}
