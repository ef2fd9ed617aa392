use std::{collections::HashSet, fmt};

use crate::error::{MazeError, Result};
use crate::maze::{CellMap, CellState, Coordinate, Grid};

/// Route found by a solver, stored from the target back to the start.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    coords: Vec<Coordinate>,
}

impl PathResult {
    /// Wraps coordinates that are already ordered target first, start last.
    pub fn from_target_to_start(coords: Vec<Coordinate>) -> Self {
        Self { coords }
    }

    /// Coordinates in target → start order.
    pub fn coords(&self) -> &[Coordinate] {
        &self.coords
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Number of moves along the route.
    pub fn steps(&self) -> usize {
        self.coords.len().saturating_sub(1)
    }

    pub fn target(&self) -> Option<Coordinate> {
        self.coords.first().copied()
    }

    pub fn start(&self) -> Option<Coordinate> {
        self.coords.last().copied()
    }

    /// Coordinates in start → target order, for display.
    pub fn iter_from_start(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.coords.iter().rev().copied()
    }

    /// True if no coordinate appears twice.
    pub fn is_simple(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.coords.len());
        self.coords.iter().all(|c| seen.insert(*c))
    }

    /// True if every consecutive pair of coordinates is orthogonally adjacent.
    pub fn is_connected(&self) -> bool {
        self.coords
            .windows(2)
            .all(|w| w[0].0.abs_diff(w[1].0) + w[0].1.abs_diff(w[1].1) == 1)
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (row, col)) in self.iter_from_start().enumerate() {
            if i > 0 {
                write!(f, " --> ")?;
            }
            write!(f, "({},{})", row, col)?;
        }
        Ok(())
    }
}

/// Follow parent pointers from `target` back to `start`, marking every cell on the
/// way as part of the route.
pub(crate) fn reconstruct_path(
    grid: &mut Grid,
    parents: &CellMap<Option<Coordinate>>,
    start: Coordinate,
    target: Coordinate,
) -> Result<PathResult> {
    let mut coords = vec![target];
    let mut current = target;
    while current != start {
        current = parents
            .at(current)?
            .ok_or(MazeError::BrokenParentChain {
                row: current.0,
                col: current.1,
            })?;
        coords.push(current);
    }
    for &coord in &coords {
        grid.set_cell_state(coord, CellState::Path)?;
    }
    Ok(PathResult::from_target_to_start(coords))
}
