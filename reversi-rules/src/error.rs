//! Errors raised by board construction and board operations.

use crate::{Player, DIMENSION};
use derive_more::{Display, Error};

/// A rejected board operation.
///
/// Every variant is a usage error: the call that produced it had no effect.
#[derive(Clone, Copy, Debug, PartialEq, Display, Error)]
pub enum BoardError {
    /// The supplied grid does not have `DIMENSION` rows.
    #[display("grid requires {} rows, found {found}", DIMENSION)]
    RowCount { found: usize },

    /// A row of the supplied grid does not have `DIMENSION` columns.
    #[display("row {row} requires {} columns, found {found}", DIMENSION)]
    ColumnCount { row: usize, found: usize },

    /// A grid value that is not a cell code.
    #[display("illegal value {value} at ({row}, {col})")]
    IllegalValue { row: usize, col: usize, value: i64 },

    /// A player argument that names neither player one nor player two.
    #[display("illegal player {value}")]
    InvalidPlayer { value: i64 },

    /// A coordinate that is not a whole number.
    #[display("coordinate {value} is not an integer")]
    NonIntegral { value: f64 },

    /// A coordinate outside the board.
    #[display("({row}, {col}) is outside the {}x{} board", DIMENSION, DIMENSION)]
    OutOfBounds { row: i64, col: i64 },

    /// An empty, in-bounds square where the player captures nothing.
    #[display("({row}, {col}) is not a legal move for {player}")]
    IllegalMove {
        row: usize,
        col: usize,
        player: Player,
    },
}

/// Broad classes of [`BoardError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum ErrorKind {
    /// Wrong number of rows or columns.
    Shape,
    /// Illegal cell value.
    Value,
    /// Argument is not a player.
    InvalidPlayer,
    /// Non-integral coordinate.
    Type,
    OutOfBounds,
    IllegalMove,
}

impl BoardError {
    /// The class this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BoardError::RowCount { .. } | BoardError::ColumnCount { .. } => ErrorKind::Shape,
            BoardError::IllegalValue { .. } => ErrorKind::Value,
            BoardError::InvalidPlayer { .. } => ErrorKind::InvalidPlayer,
            BoardError::NonIntegral { .. } => ErrorKind::Type,
            BoardError::OutOfBounds { .. } => ErrorKind::OutOfBounds,
            BoardError::IllegalMove { .. } => ErrorKind::IllegalMove,
        }
    }
}
