use thiserror::Error;

pub mod board;
pub mod generator;
pub mod validation;

pub use board::{Board, CellFlags, Entry, Grid, CELLS, SIZE};
pub use generator::{generate_board, DEFAULT_HINTS};
pub use validation::is_valid_placement;

/// Precondition violations on the public entry points. Backtracking
/// exhaustion inside the generator is ordinary control flow and never
/// surfaces as one of these.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("cell ({row}, {col}) is outside the 9x9 grid")]
    OutOfBounds { row: usize, col: usize },
    #[error("digit {0} is outside 0..=9")]
    InvalidDigit(u8),
    #[error("{0} hints requested but the grid has only 81 cells")]
    TooManyHints(u8),
}
