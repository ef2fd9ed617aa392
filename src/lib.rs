pub mod config;
pub mod error;
pub mod generators;
pub mod maze;
pub mod solvers;

pub use config::MazeConfig;
pub use error::{MazeError, Result};
pub use maze::{CellState, Coordinate, Maze};
pub use solvers::{PathResult, Solver};
