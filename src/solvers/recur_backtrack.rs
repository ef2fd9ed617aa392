use super::PathResult;
use crate::error::Result;
use crate::maze::{CellMap, CellState, Coordinate, Grid};

/// Depth-first exploration from `cell`. Returns true once the target has been reached,
/// marking and recording each cell on the way back up.
fn explore(
    grid: &mut Grid,
    cell: Coordinate,
    target: Coordinate,
    visited: &mut CellMap<bool>,
    route: &mut Vec<Coordinate>,
) -> Result<bool> {
    if cell == target {
        return Ok(true);
    }
    visited.set(cell, true)?;

    // Collect first so that the grid can be mutated while unwinding
    let neighbors = grid.neighbors(cell).collect::<Vec<_>>();
    for neighbor in neighbors {
        if !visited.at(neighbor)?
            && grid.cell_state(neighbor)? == CellState::Blank
            && explore(grid, neighbor, target, visited, route)?
        {
            grid.set_cell_state(neighbor, CellState::Path)?;
            route.push(neighbor);
            return Ok(true);
        }
    }
    Ok(false)
}

/// Recursive backtracking search. Finds some route, not necessarily the shortest.
pub fn solve_recur_backtrack(
    grid: &mut Grid,
    start: Coordinate,
    target: Coordinate,
) -> Result<Option<PathResult>> {
    let mut visited = CellMap::new(grid.rows(), grid.cols(), false)?;
    let mut route = Vec::new();

    if !explore(grid, start, target, &mut visited, &mut route)? {
        return Ok(None);
    }
    grid.set_cell_state(start, CellState::Path)?;
    route.push(start);
    Ok(Some(PathResult::from_target_to_start(route)))
}
