pub mod cell;
mod grid;

use std::io::Write;

use crossterm::{queue, style::PrintStyledContent};

pub use cell::{CellState, Glyph};
pub use grid::{CellMap, Coordinate, Direction, Grid};

use crate::{
    config::MazeConfig,
    error::{MazeError, Result},
    generators::generate_maze,
    solvers::{PathResult, Solver},
};

/// A generated maze together with its endpoints and the last route found in it.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid,
    start: Coordinate,
    target: Coordinate,
    path: PathResult,
}

impl Maze {
    /// Creates a new `rows x cols` maze carved from `start`, using OS randomness.
    pub fn new(rows: usize, cols: usize, start: Coordinate, target: Coordinate) -> Result<Self> {
        Self::generate(rows, cols, start, target, None)
    }

    /// Like [`Maze::new`], but reproducible: the same seed and dimensions always give
    /// the same maze.
    pub fn with_seed(
        rows: usize,
        cols: usize,
        start: Coordinate,
        target: Coordinate,
        seed: u64,
    ) -> Result<Self> {
        Self::generate(rows, cols, start, target, Some(seed))
    }

    pub fn from_config(config: &MazeConfig) -> Result<Self> {
        Self::generate(
            config.rows,
            config.cols,
            config.start,
            config.target,
            config.seed,
        )
    }

    fn generate(
        rows: usize,
        cols: usize,
        start: Coordinate,
        target: Coordinate,
        seed: Option<u64>,
    ) -> Result<Self> {
        let mut grid = Grid::new(rows, cols)?;
        for (row, col) in [start, target] {
            if !grid.is_in_bounds((row, col)) {
                return Err(MazeError::OutOfRange {
                    row,
                    col,
                    rows,
                    cols,
                });
            }
        }
        generate_maze(&mut grid, start, seed)?;
        // Only cells an even number of steps from the start in both axes get carved
        for (row, col) in [start, target] {
            if grid.cell_state((row, col))? == CellState::Wall {
                return Err(MazeError::WalledEndpoint { row, col });
            }
        }
        Ok(Maze {
            grid,
            start,
            target,
            path: PathResult::default(),
        })
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn start(&self) -> Coordinate {
        self.start
    }

    pub fn target(&self) -> Coordinate {
        self.target
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The route found by the last successful solve, target first. Empty until a
    /// solve succeeds.
    pub fn path(&self) -> &PathResult {
        &self.path
    }

    /// Runs `solver` from the start to the target.
    ///
    /// Any route left by an earlier solve is cleared first. Returns `Ok(false)` if the
    /// target is unreachable, in which case the grid is left as generated.
    pub fn solve_with(&mut self, solver: Solver) -> Result<bool> {
        self.clear_path();
        match solver.solve(&mut self.grid, self.start, self.target)? {
            Some(path) => {
                tracing::info!(
                    "[solve] {} found a route of {} steps",
                    solver,
                    path.steps()
                );
                self.path = path;
                Ok(true)
            }
            None => {
                tracing::info!("[solve] {} found no route", solver);
                Ok(false)
            }
        }
    }

    /// Reverts route cells to blank and forgets the stored route.
    pub fn clear_path(&mut self) {
        self.grid.replace(CellState::Path, CellState::Blank);
        self.path = PathResult::default();
    }

    /// Fills everything except the start cell with walls, leaving nothing reachable.
    pub fn fill_walls(&mut self) {
        self.path = PathResult::default();
        self.grid.fill(CellState::Wall);
        // The start is in bounds, checked at construction
        let _ = self.grid.set_cell_state(self.start, CellState::Blank);
    }

    fn glyph_at(&self, coord: Coordinate) -> Glyph {
        if coord == self.start {
            Glyph::Start
        } else if coord == self.target {
            Glyph::Target
        } else {
            Glyph::Cell(self.grid.cell_state(coord).unwrap_or_default())
        }
    }

    fn glyph_rows(&self) -> impl Iterator<Item = impl Iterator<Item = Glyph> + '_> + '_ {
        (0..self.rows()).map(move |row| (0..self.cols()).map(move |col| self.glyph_at((row, col))))
    }

    /// Renders the maze as text, one line per row and two characters per cell.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.rows() * (self.cols() * Glyph::CELL_WIDTH + 1));
        for row in self.glyph_rows() {
            row.for_each(|glyph| out.push_str(&glyph.to_string()));
            out.push('\n');
        }
        out
    }

    /// Writes the same dump as [`Maze::render`] with terminal colours.
    pub fn print_styled<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for row in self.glyph_rows() {
            for glyph in row {
                queue!(out, PrintStyledContent(glyph.styled()))?;
            }
            writeln!(out)?;
        }
        out.flush()
    }
}

impl std::fmt::Display for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(rows: usize, cols: usize, seed: u64) -> Maze {
        Maze::with_seed(rows, cols, (1, 1), (rows - 2, cols - 2), seed).unwrap()
    }

    #[test]
    fn test_smallest_maze_is_solvable_by_every_solver() {
        for seed in 0..16 {
            for solver in Solver::ALL {
                let mut maze = seeded(7, 7, seed);
                assert!(maze.solve_with(solver).unwrap(), "{solver} seed {seed}");
                assert_eq!(maze.path().start(), Some((1, 1)));
                assert_eq!(maze.path().target(), Some((5, 5)));
                assert!(maze.path().is_connected());
            }
        }
    }

    #[test]
    fn test_bfs_and_astar_agree_on_length() {
        for seed in 0..10 {
            let mut maze = seeded(31, 41, seed);
            assert!(maze.solve_with(Solver::Bfs).unwrap());
            let bfs_len = maze.path().len();
            assert!(maze.solve_with(Solver::AStar).unwrap());
            assert_eq!(maze.path().len(), bfs_len, "seed {seed}");
        }
    }

    #[test]
    fn test_depth_first_routes_are_simple() {
        for seed in 0..10 {
            for solver in [Solver::Dfs, Solver::RecurBacktrack] {
                let mut maze = seeded(25, 25, seed);
                assert!(maze.solve_with(solver).unwrap());
                let path = maze.path();
                assert!(path.is_simple(), "{solver} seed {seed}");
                assert!(path.is_connected(), "{solver} seed {seed}");
                assert_eq!(maze.grid().count(CellState::Path), path.len());
            }
        }
    }

    #[test]
    fn test_perfect_maze_has_one_route() {
        // Exactly one simple path exists between two cells of a perfect maze
        for seed in 0..5 {
            let mut maze = seeded(21, 21, seed);
            let mut routes = Vec::new();
            for solver in Solver::ALL {
                assert!(maze.solve_with(solver).unwrap());
                routes.push(maze.path().clone());
            }
            assert!(routes.windows(2).all(|w| w[0] == w[1]), "seed {seed}");
        }
    }

    #[test]
    fn test_arbitrary_endpoints() {
        let mut maze = Maze::with_seed(15, 15, (1, 1), (7, 9), 11).unwrap();
        for solver in Solver::ALL {
            assert!(maze.solve_with(solver).unwrap());
            assert_eq!(maze.path().target(), Some((7, 9)));
        }
    }

    #[test]
    fn test_corridor_maze() {
        // Three rows leave only one direction to carve in
        let mut maze = Maze::with_seed(3, 11, (1, 1), (1, 9), 0).unwrap();
        let expected = (1..=9).rev().map(|col| (1, col)).collect::<Vec<_>>();
        for solver in Solver::ALL {
            assert!(maze.solve_with(solver).unwrap());
            assert_eq!(maze.path().coords(), expected.as_slice(), "{solver}");
        }
    }

    #[test]
    fn test_walled_in_start_fails_everywhere() {
        let mut maze = seeded(9, 9, 1);
        maze.fill_walls();
        let before = maze.grid().clone();
        for solver in Solver::ALL {
            assert!(!maze.solve_with(solver).unwrap(), "{solver}");
            assert!(maze.path().is_empty());
            assert_eq!(maze.grid(), &before);
        }
    }

    #[test]
    fn test_failed_solve_forgets_previous_route() {
        let mut maze = seeded(9, 9, 2);
        assert!(maze.solve_with(Solver::Bfs).unwrap());
        assert!(!maze.path().is_empty());
        maze.fill_walls();
        assert!(!maze.solve_with(Solver::Bfs).unwrap());
        assert!(maze.path().is_empty());
    }

    #[test]
    fn test_resolving_clears_old_marks() {
        let mut maze = seeded(15, 15, 3);
        let generated = maze.grid().clone();
        assert!(maze.solve_with(Solver::Dfs).unwrap());
        maze.clear_path();
        assert_eq!(maze.grid(), &generated);
        assert!(maze.path().is_empty());
    }

    #[test]
    fn test_same_seed_same_maze() {
        assert_eq!(seeded(21, 31, 9).grid(), seeded(21, 31, 9).grid());
    }

    #[test]
    fn test_endpoints_out_of_range() {
        assert!(matches!(
            Maze::new(7, 7, (1, 1), (7, 5)),
            Err(MazeError::OutOfRange { row: 7, col: 5, .. })
        ));
        assert!(matches!(
            Maze::new(7, 7, (0, 9), (5, 5)),
            Err(MazeError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_even_size_corner_target_is_rejected() {
        let config = MazeConfig::new(8, 8).with_seed(0);
        assert_eq!(
            Maze::from_config(&config).map(|m| m.target()),
            Err(MazeError::WalledEndpoint { row: 6, col: 6 })
        );
        // Same size is fine once the target sits on a carved room
        let maze = Maze::from_config(&config.with_target((5, 5))).unwrap();
        assert_eq!(maze.grid().cell_state((5, 5)), Ok(CellState::Blank));
    }

    #[test]
    fn test_target_off_the_room_lattice_is_rejected() {
        assert_eq!(
            Maze::with_seed(9, 9, (1, 1), (2, 2), 3).map(|m| m.target()),
            Err(MazeError::WalledEndpoint { row: 2, col: 2 })
        );
    }

    #[test]
    fn test_render() {
        let mut maze = Maze::with_seed(3, 5, (1, 1), (1, 3), 0).unwrap();
        assert_eq!(maze.render(), "##########\n##S   G ##\n##########\n");
        maze.solve_with(Solver::Bfs).unwrap();
        // Markers stay on top of the route
        assert_eq!(maze.render(), "##########\n##S **G ##\n##########\n");
    }

    #[test]
    fn test_print_styled_writes_every_row() {
        let maze = seeded(7, 9, 4);
        let mut buf = Vec::new();
        maze.print_styled(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 7);
    }

    #[test]
    fn test_from_config() {
        let config = MazeConfig::new(11, 13).with_seed(5);
        let maze = Maze::from_config(&config).unwrap();
        assert_eq!((maze.rows(), maze.cols()), (11, 13));
        assert_eq!(maze.start(), (1, 1));
        assert_eq!(maze.target(), (9, 11));
        assert_eq!(maze.grid(), seeded(11, 13, 5).grid());
    }
}
