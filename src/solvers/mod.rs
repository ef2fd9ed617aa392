mod astar;
mod bfs;
mod dfs;
mod path;
mod priority_queue;
mod recur_backtrack;

use std::str::FromStr;

pub use astar::{SearchNode, manhattan_distance, solve_astar};
pub use bfs::solve_bfs;
pub use dfs::solve_dfs;
pub use path::PathResult;
pub use priority_queue::PriorityQueue;
pub use recur_backtrack::solve_recur_backtrack;

use crate::error::Result;
use crate::maze::{Coordinate, Grid};

/// The available pathfinding strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Solver {
    RecurBacktrack,
    Dfs,
    Bfs,
    AStar,
}

impl Solver {
    /// All solvers, in menu order.
    pub const ALL: [Solver; 4] = [
        Solver::RecurBacktrack,
        Solver::Dfs,
        Solver::Bfs,
        Solver::AStar,
    ];

    /// Search `grid` for a route from `start` to `target`.
    ///
    /// On success the route's cells are marked as [`CellState::Path`](crate::maze::CellState::Path)
    /// and the route is returned target first. On `Ok(None)` the grid is left as it was.
    pub fn solve(
        &self,
        grid: &mut Grid,
        start: Coordinate,
        target: Coordinate,
    ) -> Result<Option<PathResult>> {
        match self {
            Solver::RecurBacktrack => solve_recur_backtrack(grid, start, target),
            Solver::Dfs => solve_dfs(grid, start, target),
            Solver::Bfs => solve_bfs(grid, start, target),
            Solver::AStar => solve_astar(grid, start, target),
        }
    }

    /// Whether the solver always returns a shortest route.
    pub fn is_optimal(&self) -> bool {
        matches!(self, Solver::Bfs | Solver::AStar)
    }
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::RecurBacktrack => write!(f, "Recursive Backtracking"),
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Solver::AStar => write!(f, "A* Search"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSolverError(String);

impl std::fmt::Display for ParseSolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown solver '{}', expected one of: recursive, dfs, bfs, astar (or 1-4)",
            self.0
        )
    }
}

impl std::error::Error for ParseSolverError {}

impl FromStr for Solver {
    type Err = ParseSolverError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "recursive" | "recur-backtrack" | "backtrack" => Ok(Solver::RecurBacktrack),
            "2" | "dfs" => Ok(Solver::Dfs),
            "3" | "bfs" => Ok(Solver::Bfs),
            "4" | "astar" | "a*" => Ok(Solver::AStar),
            _ => Err(ParseSolverError(s.to_string())),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::maze::CellState;

    /// 3x7 grid with a single open corridor along row 1, columns 1 to 5.
    pub(crate) fn corridor() -> Grid {
        let mut grid = Grid::new(3, 7).unwrap();
        (1..=5).for_each(|col| grid.set_cell_state((1, col), CellState::Blank).unwrap());
        grid
    }

    /// Builds a grid from text rows, `#` for walls and anything else for blank cells.
    pub(crate) fn grid_from_rows(rows: &[&str]) -> Grid {
        let mut grid = Grid::new(rows.len(), rows[0].len()).unwrap();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                if ch != '#' {
                    grid.set_cell_state((row, col), CellState::Blank).unwrap();
                }
            }
        }
        grid
    }

    /// 5x5 grid with an open 3x3 room in the middle.
    pub(crate) fn open_room() -> Grid {
        let mut grid = Grid::new(5, 5).unwrap();
        (1..=3).for_each(|row| {
            (1..=3).for_each(|col| grid.set_cell_state((row, col), CellState::Blank).unwrap())
        });
        grid
    }

    #[test]
    fn test_parse_solver() {
        assert_eq!("astar".parse::<Solver>(), Ok(Solver::AStar));
        assert_eq!(" BFS ".parse::<Solver>(), Ok(Solver::Bfs));
        assert_eq!("2".parse::<Solver>(), Ok(Solver::Dfs));
        assert_eq!("recursive".parse::<Solver>(), Ok(Solver::RecurBacktrack));
        assert!("dijkstra".parse::<Solver>().is_err());
    }

    #[test]
    fn test_every_solver_agrees_on_a_corridor() {
        for solver in Solver::ALL {
            let mut grid = corridor();
            let path = solver.solve(&mut grid, (1, 5), (1, 1)).unwrap().unwrap();
            assert_eq!(
                path.coords(),
                &[(1, 1), (1, 2), (1, 3), (1, 4), (1, 5)],
                "{solver}"
            );
        }
    }

    #[test]
    fn test_optimal_solvers() {
        assert!(Solver::Bfs.is_optimal());
        assert!(Solver::AStar.is_optimal());
        assert!(!Solver::Dfs.is_optimal());
        assert!(!Solver::RecurBacktrack.is_optimal());
    }

    #[test]
    fn test_no_solver_walks_through_walls() {
        for solver in Solver::ALL {
            let mut grid = Grid::new(5, 5).unwrap();
            grid.set_cell_state((1, 1), CellState::Blank).unwrap();
            grid.set_cell_state((3, 3), CellState::Blank).unwrap();
            assert_eq!(solver.solve(&mut grid, (1, 1), (3, 3)), Ok(None), "{solver}");
            assert_eq!(grid.count(CellState::Path), 0);
        }
    }
}
