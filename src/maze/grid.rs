use super::cell::CellState;
use crate::error::{MazeError, Result};

/// A `(row, col)` position in the grid.
pub type Coordinate = (usize, usize);

/// One of the four orthogonal moves. `ALL` is the fixed order in which every
/// generator and solver enumerates neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Moves one step from `coord`.
    ///
    /// NOTE: Stepping up or left from row/column 0 wraps to `usize::MAX`, and stepping
    /// down or right from `usize::MAX` saturates, so the result is always rejected by
    /// `is_in_bounds` instead of under/overflowing.
    pub fn step(&self, coord: Coordinate) -> Coordinate {
        let (row, col) = coord;
        match self {
            Direction::Up => (row.wrapping_sub(1), col),
            Direction::Down => (row.saturating_add(1), col),
            Direction::Left => (row, col.wrapping_sub(1)),
            Direction::Right => (row, col.saturating_add(1)),
        }
    }
}

/// Allocates `len` copies of `value`, reporting allocation failure instead of aborting.
fn try_filled<T: Clone>(len: usize, value: T, what: &'static str) -> Result<Box<[T]>> {
    let mut data = Vec::new();
    data.try_reserve_exact(len).map_err(MazeError::exhausted(what))?;
    data.resize(len, value);
    Ok(data.into_boxed_slice())
}

/// Flat `rows x cols` buffer of values indexed by `row * cols + col`.
///
/// Used both for the maze grid itself and for the scratch matrices (visited
/// markers, parent pointers) that each solve call allocates and drops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellMap<T> {
    data: Box<[T]>,
    rows: usize,
    cols: usize,
}

impl<T: Clone> CellMap<T> {
    pub fn new(rows: usize, cols: usize, value: T) -> Result<Self> {
        let len = rows
            .checked_mul(cols)
            .ok_or(MazeError::ResourceExhausted { what: "cell map" })?;
        Ok(CellMap {
            data: try_filled(len, value, "cell map")?,
            rows,
            cols,
        })
    }
}

impl<T> CellMap<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_in_bounds(&self, coord: Coordinate) -> bool {
        coord.0 < self.rows && coord.1 < self.cols
    }

    fn ravel_index(&self, coord: Coordinate) -> Result<usize> {
        if self.is_in_bounds(coord) {
            Ok(coord.0 * self.cols + coord.1)
        } else {
            Err(MazeError::OutOfRange {
                row: coord.0,
                col: coord.1,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    pub fn get(&self, coord: Coordinate) -> Result<&T> {
        let idx = self.ravel_index(coord)?;
        Ok(&self.data[idx])
    }

    pub fn set(&mut self, coord: Coordinate, value: T) -> Result<()> {
        let idx = self.ravel_index(coord)?;
        self.data[idx] = value;
        Ok(())
    }

    /// Row-major view of every value.
    pub fn values(&self) -> &[T] {
        &self.data
    }

    /// Get in-bounds neighbors of a cell, in the order up, down, left, right.
    pub fn neighbors(&self, coord: Coordinate) -> impl Iterator<Item = Coordinate> + '_ {
        Direction::ALL
            .into_iter()
            .map(move |dir| dir.step(coord))
            .filter(|&c| self.is_in_bounds(c))
    }
}

impl<T: Copy> CellMap<T> {
    /// Like `get`, but copies the value out.
    pub fn at(&self, coord: Coordinate) -> Result<T> {
        self.get(coord).copied()
    }
}

/// The maze topology: a rectangular matrix of cell states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: CellMap<CellState>,
}

impl Grid {
    /// Creates a grid where every cell is a wall.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Ok(Grid {
            cells: CellMap::new(rows, cols, CellState::Wall)?,
        })
    }

    pub fn rows(&self) -> usize {
        self.cells.rows()
    }

    pub fn cols(&self) -> usize {
        self.cells.cols()
    }

    pub fn is_in_bounds(&self, coord: Coordinate) -> bool {
        self.cells.is_in_bounds(coord)
    }

    pub fn cell_state(&self, coord: Coordinate) -> Result<CellState> {
        self.cells.at(coord)
    }

    pub fn set_cell_state(&mut self, coord: Coordinate, state: CellState) -> Result<()> {
        self.cells.set(coord, state)
    }

    /// True if the cell is in bounds and carved but not yet on a route.
    pub fn is_blank(&self, coord: Coordinate) -> bool {
        matches!(self.cells.get(coord), Ok(CellState::Blank))
    }

    pub fn neighbors(&self, coord: Coordinate) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells.neighbors(coord)
    }

    /// Row-major view of all cell states.
    pub fn cells(&self) -> &[CellState] {
        self.cells.values()
    }

    /// Sets every cell to `state`.
    pub fn fill(&mut self, state: CellState) {
        let (rows, cols) = (self.rows(), self.cols());
        (0..rows).for_each(|row| {
            (0..cols).for_each(|col| {
                // In bounds by construction of the ranges.
                let _ = self.cells.set((row, col), state);
            })
        });
    }

    /// Replaces every cell in state `from` with `to`.
    pub fn replace(&mut self, from: CellState, to: CellState) {
        let (rows, cols) = (self.rows(), self.cols());
        (0..rows).for_each(|row| {
            (0..cols).for_each(|col| {
                if self.cells.get((row, col)) == Ok(&from) {
                    let _ = self.cells.set((row, col), to);
                }
            })
        });
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells().iter().filter(|&&c| c == state).count()
    }

    /// Coordinates of every cell currently in `state`, row-major.
    pub fn coords_with(&self, state: CellState) -> impl Iterator<Item = Coordinate> + '_ {
        let cols = self.cols();
        self.cells()
            .iter()
            .enumerate()
            .filter(move |&(_, &c)| c == state)
            .map(move |(i, _)| (i / cols, i % cols))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_indexing() {
        let mut grid = Grid::new(5, 7).unwrap();
        grid.set_cell_state((2, 3), CellState::Blank).unwrap();
        assert_eq!(grid.cell_state((2, 3)), Ok(CellState::Blank));
        assert_eq!(grid.cell_state((3, 2)), Ok(CellState::Wall));
        // Row-major layout
        assert_eq!(grid.cells()[2 * 7 + 3], CellState::Blank);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = Grid::new(5, 7).unwrap();
        assert!(!grid.is_in_bounds((5, 0)));
        assert!(!grid.is_in_bounds((0, 7)));
        assert!(!grid.is_in_bounds((usize::MAX, 0)));
        assert!(grid.is_in_bounds((4, 6)));
        assert_eq!(
            grid.cell_state((5, 0)),
            Err(MazeError::OutOfRange {
                row: 5,
                col: 0,
                rows: 5,
                cols: 7
            })
        );
        assert!(grid.set_cell_state((0, 7), CellState::Path).is_err());
    }

    #[test]
    fn test_neighbors_order_and_bounds() {
        let grid = Grid::new(7, 7).unwrap();
        let neighbors = grid.neighbors((3, 3)).collect::<Vec<_>>();
        assert_eq!(neighbors, vec![(2, 3), (4, 3), (3, 2), (3, 4)]);

        // Corner cells only have two neighbors
        let neighbors = grid.neighbors((0, 0)).collect::<Vec<_>>();
        assert_eq!(neighbors, vec![(1, 0), (0, 1)]);
        let neighbors = grid.neighbors((6, 6)).collect::<Vec<_>>();
        assert_eq!(neighbors, vec![(5, 6), (6, 5)]);
    }

    #[test]
    fn test_fill_replace_and_count() {
        let mut grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.count(CellState::Wall), 12);
        grid.fill(CellState::Blank);
        assert_eq!(grid.count(CellState::Blank), 12);
        grid.set_cell_state((1, 1), CellState::Path).unwrap();
        grid.set_cell_state((2, 3), CellState::Path).unwrap();
        assert_eq!(
            grid.coords_with(CellState::Path).collect::<Vec<_>>(),
            vec![(1, 1), (2, 3)]
        );
        grid.replace(CellState::Path, CellState::Blank);
        assert_eq!(grid.count(CellState::Path), 0);
    }

    #[test]
    fn test_cell_map_defaults() {
        let mut visited = CellMap::new(2, 3, false).unwrap();
        assert_eq!(visited.at((1, 2)), Ok(false));
        visited.set((1, 2), true).unwrap();
        assert_eq!(visited.at((1, 2)), Ok(true));
        assert!(visited.at((2, 0)).is_err());
    }

    #[test]
    fn test_huge_cell_map_is_resource_exhausted() {
        let result = CellMap::new(usize::MAX, 2, 0u8);
        assert!(matches!(result, Err(MazeError::ResourceExhausted { .. })));
    }
}
