use std::cmp::Ordering;

use super::{PathResult, path::reconstruct_path, priority_queue::PriorityQueue};
use crate::error::Result;
use crate::maze::{CellMap, Coordinate, Grid};

/// Open-set entry for A*.
///
/// Compares by `total_estimated_cost` only, so two nodes for different cells with
/// the same estimate are equal as far as the queue is concerned.
#[derive(Debug, Clone, Copy)]
pub struct SearchNode {
    /// Coordinates of the cell in the maze
    pub coord: Coordinate,
    /// Cost to reach this cell from the start
    pub accumulated_cost: usize,
    /// Accumulated cost plus the heuristic estimate to the target
    pub total_estimated_cost: usize,
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.total_estimated_cost == other.total_estimated_cost
    }
}

impl Eq for SearchNode {}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total_estimated_cost.cmp(&other.total_estimated_cost)
    }
}

pub fn manhattan_distance(a: Coordinate, b: Coordinate) -> usize {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

/// Push the open-able neighbors of `current` onto the open set.
///
/// A neighbor that is already open is only replaced when the new estimate is strictly
/// lower, and its parent pointer moves with it. Returns how many open entries were
/// replaced.
fn relax_neighbors(
    grid: &Grid,
    current: SearchNode,
    target: Coordinate,
    visited: &CellMap<bool>,
    parents: &mut CellMap<Option<Coordinate>>,
    open_set: &mut PriorityQueue<SearchNode>,
) -> Result<usize> {
    let new_cost = current.accumulated_cost + 1; // Uniform cost for each step
    let candidates = grid
        .neighbors(current.coord)
        .filter(|&n| grid.is_blank(n) && visited.at(n) == Ok(false))
        .collect::<Vec<_>>();

    let mut replaced = 0;
    for neighbor in candidates {
        let node = SearchNode {
            coord: neighbor,
            accumulated_cost: new_cost,
            total_estimated_cost: new_cost + manhattan_distance(neighbor, target),
        };

        let open_cost = open_set
            .find(|n| n.coord == neighbor)
            .map(|n| n.total_estimated_cost);
        match open_cost {
            Some(cost) if cost <= node.total_estimated_cost => continue,
            Some(_) => {
                open_set.remove_first(|n| n.coord == neighbor);
                replaced += 1;
            }
            None => {}
        }
        open_set.insert(node)?;
        parents.set(neighbor, Some(current.coord))?;
    }
    Ok(replaced)
}

/// A* search with the Manhattan distance heuristic and unit step cost.
///
/// The heuristic is consistent on a 4-connected grid, so the first time the target is
/// popped its route is a shortest one.
pub fn solve_astar(
    grid: &mut Grid,
    start: Coordinate,
    target: Coordinate,
) -> Result<Option<PathResult>> {
    let (rows, cols) = (grid.rows(), grid.cols());
    // Closed set: cells whose shortest cost is final
    let mut visited = CellMap::new(rows, cols, false)?;
    let mut parents: CellMap<Option<Coordinate>> = CellMap::new(rows, cols, None)?;
    // Every cell is in the open set at most once
    let mut open_set = PriorityQueue::with_capacity(rows * cols)?;

    open_set.insert(SearchNode {
        coord: start,
        accumulated_cost: 0,
        total_estimated_cost: manhattan_distance(start, target),
    })?;

    let (mut expanded, mut replaced) = (0usize, 0usize);
    while let Some(&current) = open_set.peek() {
        if current.coord == target {
            tracing::trace!(
                "[solve] astar expanded {} cells, replaced {} open entries",
                expanded,
                replaced
            );
            return reconstruct_path(grid, &parents, start, target).map(Some);
        }
        open_set.pop_front();
        visited.set(current.coord, true)?;
        expanded += 1;
        replaced += relax_neighbors(grid, current, target, &visited, &mut parents, &mut open_set)?;
    }

    Ok(None)
}
