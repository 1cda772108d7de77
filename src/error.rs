use thiserror::Error;

use crate::maze::Coord;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("coordinate {coord:?} is outside the {width}x{height} grid")]
    OutOfBounds {
        coord: Coord,
        width: usize,
        height: usize,
    },
    #[error("operation was cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, MazeError>;
