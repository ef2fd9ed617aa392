//! Error types for maze generation and solving

use thiserror::Error;

/// Errors raised by the grid, the generator and the solvers.
///
/// A search that explores everything without reaching the target is not an
/// error; solvers report it as `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("Failed to allocate {what}")]
    ResourceExhausted { what: &'static str },

    #[error("Coordinate ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Endpoint ({row}, {col}) is a wall after generation")]
    WalledEndpoint { row: usize, col: usize },

    #[error("Priority queue is full (capacity {capacity})")]
    QueueFull { capacity: usize },

    #[error("Cell ({row}, {col}) has no parent while reconstructing the path")]
    BrokenParentChain { row: usize, col: usize },
}

impl MazeError {
    pub(crate) fn exhausted(
        what: &'static str,
    ) -> impl FnOnce(std::collections::TryReserveError) -> Self {
        move |_| MazeError::ResourceExhausted { what }
    }
}

pub type Result<T> = std::result::Result<T, MazeError>;
