use super::PathResult;
use crate::error::Result;
use crate::maze::{CellMap, CellState, Coordinate, Grid};

/// Iterative depth-first search with an explicit stack.
///
/// Cells on the stack are marked as the route; a dead end is popped and reverted to
/// blank, so the stack always holds a simple route from the start to its top.
pub fn solve_dfs(
    grid: &mut Grid,
    start: Coordinate,
    target: Coordinate,
) -> Result<Option<PathResult>> {
    let mut visited = CellMap::new(grid.rows(), grid.cols(), false)?;

    // Initialize the stack with the starting point
    let mut stack = vec![start];
    visited.set(start, true)?;
    grid.set_cell_state(start, CellState::Path)?;

    while let Some(&cell) = stack.last() {
        if cell == target {
            tracing::trace!("[solve] dfs reached target with {} cells on stack", stack.len());
            stack.reverse();
            return Ok(Some(PathResult::from_target_to_start(stack)));
        }

        let next = grid
            .neighbors(cell)
            .find(|&n| grid.is_blank(n) && visited.at(n) == Ok(false));

        match next {
            Some(neighbor) => {
                visited.set(neighbor, true)?;
                grid.set_cell_state(neighbor, CellState::Path)?;
                stack.push(neighbor);
            }
            None => {
                // Dead end, backtrack
                stack.pop();
                grid.set_cell_state(cell, CellState::Blank)?;
            }
        }
    }

    Ok(None)
}
