use std::collections::VecDeque;

use super::{PathResult, path::reconstruct_path};
use crate::error::Result;
use crate::maze::{CellMap, Coordinate, Grid};

/// Breadth-first search. Returns a route with the fewest possible steps.
pub fn solve_bfs(
    grid: &mut Grid,
    start: Coordinate,
    target: Coordinate,
) -> Result<Option<PathResult>> {
    let mut visited = CellMap::new(grid.rows(), grid.cols(), false)?;
    let mut parents: CellMap<Option<Coordinate>> = CellMap::new(grid.rows(), grid.cols(), None)?;

    let mut queue = VecDeque::from([start]);
    visited.set(start, true)?;

    while let Some(current) = queue.pop_front() {
        if current == target {
            return reconstruct_path(grid, &parents, start, target).map(Some);
        }

        // Mark at enqueue time so no cell is queued twice
        let unvisited = grid
            .neighbors(current)
            .filter(|&n| grid.is_blank(n) && visited.at(n) == Ok(false))
            .collect::<Vec<_>>();
        for neighbor in unvisited {
            visited.set(neighbor, true)?;
            parents.set(neighbor, Some(current))?;
            queue.push_back(neighbor);
        }
    }

    Ok(None)
}
