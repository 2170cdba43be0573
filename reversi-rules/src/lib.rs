//! `reversi-rules` implements the rules of Reversi (Othello) for UIs, CLIs and test harnesses.
//!
//! The crate is organized around a single immutable [`Board`]:
//!
//!  - [`Board`] holds the grid of [`Cell`]s, answers legal-move queries and
//!    applies moves by returning a brand-new board.
//!  - [`Outcome`] summarizes a board's standing: piece counts, whether the game
//!    is finished, and who won.
//!  - [`Position`] and [`PositionSet`] name squares and sets of squares; sets are
//!    backed by a [`bitboard::Bitboard`] so they deduplicate by coordinate.
//!
//! Every entry point validates its input and reports violations as a [`BoardError`].

pub mod bitboard;
pub mod test_utils;

mod board;
mod cell;
mod error;
mod location;
mod outcome;
mod utils;

pub use board::*;
pub use cell::*;
pub use error::*;
pub use location::*;
pub use outcome::*;

/// The number of rows (and columns) on a Reversi board.
pub const DIMENSION: usize = 8;

/// The number of squares on a Reversi board.
pub const NUM_SPACES: usize = DIMENSION * DIMENSION;

// Position sets store one bit per square.
const _: () = assert!(NUM_SPACES <= 64);
