use rand::Rng;

use crate::error::{MazeError, Result};
use crate::maze::{CellState, Coordinate, Direction, Grid};

/// A wall cell next to the carved region, with the direction it was reached from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrontierEntry {
    coord: Coordinate,
    direction: Direction,
}

/// Push every wall neighbor of `from` onto the frontier, tagged with the direction
/// leading from `from` to it.
fn push_adjacent_walls(
    grid: &Grid,
    from: Coordinate,
    frontiers: &mut Vec<FrontierEntry>,
) -> Result<()> {
    for direction in Direction::ALL {
        let coord = direction.step(from);
        if grid.is_in_bounds(coord) && grid.cell_state(coord)? == CellState::Wall {
            frontiers
                .try_reserve(1)
                .map_err(MazeError::exhausted("frontier list"))?;
            frontiers.push(FrontierEntry { coord, direction });
        }
    }
    Ok(())
}

/// Randomized Prim's algorithm over wall cells.
///
/// Resets the grid to walls, opens `start`, then repeatedly picks a random frontier
/// entry and, if the cell beyond it is still a wall, carves through both. Every carve
/// connects exactly one new cell to the carved region, so the open cells form a tree.
/// Odd dimensions with an odd `start` keep the outer border solid.
pub fn randomized_prim<R: Rng>(
    grid: &mut Grid,
    start: Coordinate,
    rng: &mut R,
) -> Result<()> {
    // Initialize the maze with walls
    grid.fill(CellState::Wall);
    grid.set_cell_state(start, CellState::Blank)?;

    let mut frontiers = Vec::new();
    frontiers
        .try_reserve(grid.rows() + grid.cols())
        .map_err(MazeError::exhausted("frontier list"))?;
    push_adjacent_walls(grid, start, &mut frontiers)?;

    let mut carved = 1usize;
    while !frontiers.is_empty() {
        // Randomly select an entry from the frontiers
        let idx = rng.random_range(0..frontiers.len());
        let FrontierEntry { coord, direction } = frontiers.swap_remove(idx);

        let far = direction.step(coord);
        if grid.is_in_bounds(far) && grid.cell_state(far)? == CellState::Wall {
            grid.set_cell_state(coord, CellState::Blank)?;
            grid.set_cell_state(far, CellState::Blank)?;
            carved += 2;
            push_adjacent_walls(grid, far, &mut frontiers)?;
        }
    }

    tracing::debug!(
        "[generate] carved {} cells in a {}x{} grid from {:?}",
        carved,
        grid.rows(),
        grid.cols(),
        start
    );
    Ok(())
}
