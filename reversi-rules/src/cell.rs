//! The contents of a square and the two players who can own one.

use crate::error::BoardError;
use derive_more::Display;

/// The state of a single square: empty, or owned by one of the players.
///
/// Cells travel across the grid boundary as integer codes: 0 for empty,
/// 1 for player one, 2 for player two.
#[derive(Clone, Copy, Debug, Default, Display, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    #[display("empty")]
    Empty,
    #[display("player one")]
    PlayerOne,
    #[display("player two")]
    PlayerTwo,
}

impl Cell {
    /// Every cell state, in code order.
    pub const ALL: [Cell; 3] = [Cell::Empty, Cell::PlayerOne, Cell::PlayerTwo];

    /// The integer code for this cell.
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::PlayerOne => 1,
            Cell::PlayerTwo => 2,
        }
    }

    /// Decode an integer code, or `None` if it names no cell state.
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Cell::Empty),
            1 => Some(Cell::PlayerOne),
            2 => Some(Cell::PlayerTwo),
            _ => None,
        }
    }

    /// The player owning this cell, if any.
    #[inline]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerOne => Some(Player::One),
            Cell::PlayerTwo => Some(Player::Two),
        }
    }

    /// Character used when printing a board.
    pub(crate) const fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::PlayerOne => 'X',
            Cell::PlayerTwo => 'O',
        }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell.code()
    }
}

macro_rules! impl_cell_try_from {
    ($($int:ty),*) => {
        $(
            /// Decode a cell code. Fails with [`BoardError::IllegalValue`] at (0, 0)
            /// since a lone code carries no coordinate.
            impl TryFrom<$int> for Cell {
                type Error = BoardError;

                fn try_from(code: $int) -> Result<Self, Self::Error> {
                    let value = i64::from(code);
                    Cell::from_code(value).ok_or(BoardError::IllegalValue { row: 0, col: 0, value })
                }
            }
        )*
    };
}

impl_cell_try_from!(u8, i8, u16, i16, u32, i32, i64);

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum Player {
    #[display("player one")]
    One,
    #[display("player two")]
    Two,
}

impl Default for Player {
    /// Gets the starting player.
    fn default() -> Self {
        Self::One
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl Player {
    /// The cell state of a square this player owns.
    #[inline]
    pub const fn cell(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        player.cell()
    }
}

impl TryFrom<Cell> for Player {
    type Error = BoardError;

    fn try_from(cell: Cell) -> Result<Self, Self::Error> {
        cell.owner().ok_or(BoardError::InvalidPlayer {
            value: i64::from(cell.code()),
        })
    }
}

/// Anything accepted where a board operation asks for a player.
///
/// A [`Player`] always converts. A [`Cell`] or integer code converts only when
/// it names player one or player two; anything else is a
/// [`BoardError::InvalidPlayer`].
pub trait IntoPlayer {
    fn into_player(self) -> Result<Player, BoardError>;
}

impl IntoPlayer for Player {
    #[inline]
    fn into_player(self) -> Result<Player, BoardError> {
        Ok(self)
    }
}

impl IntoPlayer for Cell {
    #[inline]
    fn into_player(self) -> Result<Player, BoardError> {
        Player::try_from(self)
    }
}

macro_rules! impl_into_player {
    ($($int:ty),*) => {
        $(
            impl IntoPlayer for $int {
                fn into_player(self) -> Result<Player, BoardError> {
                    let value = i64::from(self);
                    match value {
                        1 => Ok(Player::One),
                        2 => Ok(Player::Two),
                        _ => Err(BoardError::InvalidPlayer { value }),
                    }
                }
            }
        )*
    };
}

impl_into_player!(u8, i8, u16, i16, u32, i32, i64);
