//! Maze construction settings.

use crate::maze::Coordinate;

/// Smallest maze size accepted by the command line.
pub const MIN_SIZE: usize = 7;
/// Largest maze size accepted by the command line.
pub const MAX_SIZE: usize = 99;

/// Parses a maze dimension: an odd number between [`MIN_SIZE`] and [`MAX_SIZE`].
///
/// Even sizes would leave the bottom-right corner room on the wall lattice.
pub fn parse_odd_size(s: &str) -> Result<usize, String> {
    let size: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("`{s}` is not a number"))?;
    if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
        return Err(format!("size must be between {MIN_SIZE} and {MAX_SIZE}"));
    }
    if size % 2 == 0 {
        return Err(format!("size must be odd, got {size}"));
    }
    Ok(size)
}

/// Parses a `ROW,COL` coordinate.
pub fn parse_coordinate(s: &str) -> Result<Coordinate, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got `{s}`"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<usize>()
            .map_err(|_| format!("`{v}` is not a valid index"))
    };
    Ok((parse(row)?, parse(col)?))
}

/// Everything needed to build a [`Maze`](crate::maze::Maze).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeConfig {
    pub rows: usize,
    pub cols: usize,
    /// Cell the generator starts carving from, and the solvers start searching from
    pub start: Coordinate,
    pub target: Coordinate,
    /// Seed for the generator. `None` draws a fresh seed from the OS
    pub seed: Option<u64>,
}

impl MazeConfig {
    /// Start in the top-left room and target the bottom-right room.
    ///
    /// With odd dimensions both corners land on carved rooms and the outer
    /// border stays solid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            start: (1, 1),
            target: (rows.saturating_sub(2), cols.saturating_sub(2)),
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_start(mut self, start: Coordinate) -> Self {
        self.start = start;
        self
    }

    pub fn with_target(mut self, target: Coordinate) -> Self {
        self.target = target;
        self
    }
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self::new(21, 21)
    }
}
