//! Masks holding one bit per square of the board.
//!
//! Bit `row * DIMENSION + col` stands for the square at (`row`, `col`), so the
//! least significant bit is the upper-left corner and ascending bit order is
//! row-major order.

use crate::{utils, DIMENSION, NUM_SPACES};
use derive_more::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, From, Into, Not,
};
use std::fmt::{self, Display, Formatter};

/// Holds a single bit per square on a Reversi board.
/// Wraps [`u64`] for bit-twiddling, but avoids mixing with numerics.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Default,
    From,
    Into,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct Bitboard(u64);

/// Mask with every square of the board set.
pub const FULL: Bitboard = Bitboard(u64::MAX >> (64 - NUM_SPACES));

impl Bitboard {
    /// The mask with no squares set.
    pub const EMPTY: Self = Self(0);

    /// A mask with only the square at `index` set.
    /// `index` must be below [`NUM_SPACES`].
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self(1 << index)
    }

    /// A mask with only the square at (`row`, `col`) set.
    #[inline]
    pub const fn from_coords(row: usize, col: usize) -> Self {
        Self::from_index(row * DIMENSION + col)
    }

    /// Count the number of set squares.
    #[inline]
    pub fn count_occupied(self) -> u8 {
        (self & FULL).0.count_ones() as u8
    }

    /// Count the number of unset squares.
    #[inline]
    pub fn count_empty(self) -> u8 {
        NUM_SPACES as u8 - self.count_occupied()
    }

    /// Return true if no square is set.
    #[inline]
    pub fn is_empty(self) -> bool {
        (self & FULL).0 == 0
    }

    /// Return true if the square at `index` is set.
    #[inline]
    pub fn is_set(self, index: usize) -> bool {
        index < NUM_SPACES && !(self & Self::from_index(index)).is_empty()
    }

    /// Index of the lowest set square, if any.
    #[inline]
    pub fn first_index(self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.0.trailing_zeros() as usize)
        }
    }
}

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        utils::format_grid(
            self.into_iter().map(|bit| match bit {
                false => '.',
                true => '#',
            }),
            f,
        )
    }
}

/// Iterator for the bits in a [`Bitboard`].
#[derive(Clone, Copy, Debug)]
pub struct Bits {
    next: usize,
    bitboard: Bitboard,
}

impl Iterator for Bits {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= NUM_SPACES {
            return None;
        }

        let bit = self.bitboard.is_set(self.next);
        self.next += 1;

        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = NUM_SPACES.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Bits {}

/// Iterate over the bits in row-major order.
impl IntoIterator for Bitboard {
    type Item = bool;
    type IntoIter = Bits;

    fn into_iter(self) -> Self::IntoIter {
        Bits {
            next: 0,
            bitboard: self,
        }
    }
}
