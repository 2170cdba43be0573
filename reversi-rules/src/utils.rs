//! Miscellaneous project utilities.

use crate::DIMENSION;
use std::fmt::{self, Formatter};
use std::iter::Iterator;

/// Column letters used in position notation, left to right.
pub(crate) const COLUMN_LETTERS: &str = "ABCDEFGH";

/// Format one character per square into a grid with a column header and row numbers.
/// `piece_iter` must yield exactly `DIMENSION * DIMENSION` items in row-major order.
pub fn format_grid<T: Iterator<Item = char>>(mut piece_iter: T, f: &mut Formatter) -> fmt::Result {
    write!(f, "  ")?;
    for letter in COLUMN_LETTERS.chars().take(DIMENSION) {
        write!(f, " {}", letter)?;
    }

    for row in 0..DIMENSION {
        write!(f, "\n {} ", row + 1)?;
        for _ in 0..DIMENSION {
            write!(f, "{} ", piece_iter.next().ok_or(fmt::Error)?)?;
        }
    }

    match piece_iter.next() {
        None => Ok(()),
        _ => Err(fmt::Error),
    }
}
