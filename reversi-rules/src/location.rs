//! Code for working with [`Position`]s on the board.

use crate::bitboard::Bitboard;
use crate::error::BoardError;
use crate::utils::COLUMN_LETTERS;
use crate::{DIMENSION, NUM_SPACES};
use derive_more::{From, Into};
use std::fmt::{self, Display, Formatter, Write};

/// A square on the board, addressed by zero-based row and column.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Construct a position, or `None` if it lies off the board.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < DIMENSION && col < DIMENSION {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Construct a position from signed coordinates, or `None` if it lies off the board.
    #[inline]
    pub fn checked(row: i64, col: i64) -> Option<Self> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        Self::new(row, col)
    }

    #[inline]
    pub const fn row(self) -> usize {
        self.row
    }

    #[inline]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Convert into a row-major square index.
    #[inline]
    pub const fn to_index(self) -> usize {
        self.row * DIMENSION + self.col
    }

    /// Convert from a row-major square index, or `None` if it lies off the board.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < NUM_SPACES {
            Some(Self {
                row: index / DIMENSION,
                col: index % DIMENSION,
            })
        } else {
            None
        }
    }

    /// The neighboring position one step in `direction`, if it is on the board.
    #[inline]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (d_row, d_col) = direction.offset();
        Self::checked(self.row as i64 + d_row, self.col as i64 + d_col)
    }

    /// Walk from this position in `direction`, excluding this position.
    /// The walk stops at the board edge.
    pub fn ray(self, direction: Direction) -> impl Iterator<Item = Position> {
        std::iter::successors(self.step(direction), move |pos| pos.step(direction))
    }

    #[inline]
    pub(crate) const fn bit(self) -> Bitboard {
        Bitboard::from_coords(self.row, self.col)
    }
}

/// Convert this [`Position`] into string notation ("D3": column letter, then 1-based row).
impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let col_str = COLUMN_LETTERS.chars().nth(self.col).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        write!(f, "{}", self.row + 1)
    }
}

#[derive(Debug, PartialEq)]
pub struct ParsePositionError;

impl Display for ParsePositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid position string")
    }
}

impl std::error::Error for ParsePositionError {}

/// Build a [`Position`] from 1-indexed string notation ("D3", "h8").
impl std::str::FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col_str = chars.next().ok_or(ParsePositionError)?.to_ascii_uppercase();
        let col = COLUMN_LETTERS.find(col_str).ok_or(ParsePositionError)?;
        let row = chars
            .next()
            .ok_or(ParsePositionError)?
            .to_digit(10)
            .ok_or(ParsePositionError)? as usize;

        if row == 0 || chars.next().is_some() {
            return Err(ParsePositionError);
        }

        Self::new(row - 1, col).ok_or(ParsePositionError)
    }
}

/// One of the eight compass directions.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The (row, column) shift of one step. North is toward row 0.
    #[inline]
    pub const fn offset(self) -> (i64, i64) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// The direction pointing the other way.
    pub const fn reverse(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
        }
    }
}

/// A set of positions on the board, stored one bit per square.
///
/// Positions deduplicate by coordinate, and iteration yields them in row-major order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, From, Into)]
pub struct PositionSet(Bitboard);

impl PositionSet {
    /// The set with no positions.
    pub const EMPTY: Self = Self(Bitboard::EMPTY);

    /// Returns whether `pos` is in this set.
    #[inline]
    pub fn contains(self, pos: Position) -> bool {
        !(pos.bit() & self.0).is_empty()
    }

    /// Add `pos` to this set. Adding a position twice has no effect.
    #[inline]
    pub fn insert(&mut self, pos: Position) {
        self.0 |= pos.bit();
    }

    /// The positions in either set.
    #[inline]
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_occupied() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the positions in row-major order.
    #[inline]
    pub fn iter(self) -> PositionSetIter {
        PositionSetIter(self.0)
    }
}

impl FromIterator<Position> for PositionSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for pos in iter {
            set.insert(pos);
        }
        set
    }
}

impl IntoIterator for PositionSet {
    type Item = Position;
    type IntoIter = PositionSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Row-major iterator over a [`PositionSet`].
#[derive(Clone, Copy, Debug)]
pub struct PositionSetIter(Bitboard);

impl Iterator for PositionSetIter {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let index = self.0.first_index()?;
        self.0 ^= Bitboard::from_index(index);
        Position::from_index(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_occupied() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for PositionSetIter {}

impl Display for PositionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = self
            .iter()
            .map(|pos| pos.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}

/// A numeric type accepted as a move coordinate.
///
/// Integers always convert. Floats convert only when finite and whole; anything
/// else is a [`BoardError::NonIntegral`].
pub trait Coordinate: Copy {
    fn to_coordinate(self) -> Result<i64, BoardError>;
}

macro_rules! impl_int_coordinate {
    ($($int:ty),*) => {
        $(
            impl Coordinate for $int {
                #[inline]
                fn to_coordinate(self) -> Result<i64, BoardError> {
                    // Anything too large for i64 is off the board anyway.
                    Ok(i64::try_from(self).unwrap_or(i64::MAX))
                }
            }
        )*
    };
}

impl_int_coordinate!(u8, i8, u16, i16, u32, i32, u64, i64, usize, isize);

impl Coordinate for f64 {
    fn to_coordinate(self) -> Result<i64, BoardError> {
        if self.is_finite() && self.fract() == 0.0 {
            // Saturating cast: whole values past i64 land off the board.
            Ok(self as i64)
        } else {
            Err(BoardError::NonIntegral { value: self })
        }
    }
}

impl Coordinate for f32 {
    fn to_coordinate(self) -> Result<i64, BoardError> {
        f64::from(self).to_coordinate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn position_new() {
        assert_eq!(Position::new(7, 7).map(Position::to_index), Some(63));
        assert_eq!(Position::new(0, 8), None);
        assert_eq!(Position::new(8, 0), None);
        assert_eq!(Position::checked(-1, 0), None);
        assert_eq!(Position::checked(3, 4), Some(pos(3, 4)));
    }

    #[test]
    fn position_index() {
        assert_eq!(pos(0, 0).to_index(), 0);
        assert_eq!(pos(2, 3).to_index(), 19);
        assert_eq!(Position::from_index(19), Some(pos(2, 3)));
        assert_eq!(Position::from_index(64), None);
    }

    #[test]
    fn position_step() {
        assert_eq!(pos(0, 0).step(Direction::North), None);
        assert_eq!(pos(0, 0).step(Direction::SouthEast), Some(pos(1, 1)));
        assert_eq!(pos(7, 3).step(Direction::South), None);
        assert_eq!(pos(4, 0).step(Direction::West), None);
        assert_eq!(pos(4, 0).step(Direction::NorthEast), Some(pos(3, 1)));
    }

    #[test]
    fn position_ray() {
        let ray: Vec<Position> = pos(5, 2).ray(Direction::NorthEast).collect();
        assert_eq!(ray, vec![pos(4, 3), pos(3, 4), pos(2, 5), pos(1, 6), pos(0, 7)]);
        assert_eq!(pos(0, 4).ray(Direction::North).count(), 0);
    }

    #[test]
    fn direction_offsets() {
        for direction in Direction::ALL {
            let (d_row, d_col) = direction.offset();
            assert_ne!((d_row, d_col), (0, 0));
            let (r_row, r_col) = direction.reverse().offset();
            assert_eq!((d_row + r_row, d_col + r_col), (0, 0));
        }
    }

    #[test]
    fn position_from_str_success() {
        assert_eq!(Position::from_str("A1"), Ok(pos(0, 0)));
        assert_eq!(Position::from_str("h8"), Ok(pos(7, 7)));
        assert_eq!(Position::from_str("D3"), Ok(pos(2, 3)));
    }

    #[test]
    fn position_from_str_fail() {
        assert_eq!(Position::from_str(""), Err(ParsePositionError));
        assert_eq!(Position::from_str("A12"), Err(ParsePositionError));
        assert_eq!(Position::from_str("AA"), Err(ParsePositionError));
        assert_eq!(Position::from_str("A9"), Err(ParsePositionError));
        assert_eq!(Position::from_str("A0"), Err(ParsePositionError));
        assert_eq!(Position::from_str("I5"), Err(ParsePositionError));
    }

    #[test]
    fn position_to_str() {
        assert_eq!(pos(7, 7).to_string(), "H8");
        assert_eq!(pos(0, 0).to_string(), "A1");
        assert_eq!(Position::from_str("E2").unwrap().to_string(), "E2");
        assert_eq!(Position::from_str("F6").unwrap().to_string(), "F6");
    }

    #[test]
    fn set_dedups_by_coordinate() {
        let mut set = PositionSet::EMPTY;
        set.insert(pos(2, 3));
        set.insert(pos(2, 3));
        set.insert(pos(0, 1));
        assert_eq!(set.len(), 2);
        assert!(set.contains(pos(2, 3)));
        assert!(!set.contains(pos(3, 2)));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![pos(0, 1), pos(2, 3)]);
        assert_eq!(set.to_string(), "[B1, D3]");
    }

    #[test]
    fn set_equality_ignores_insertion_order() {
        let a: PositionSet = vec![pos(5, 4), pos(2, 3)].into_iter().collect();
        let b: PositionSet = vec![pos(2, 3), pos(5, 4), pos(2, 3)].into_iter().collect();
        assert_eq!(a, b);
        assert_eq!(a.union(PositionSet::EMPTY), a);
        assert!(PositionSet::EMPTY.is_empty());
    }

    #[test]
    fn coordinates() {
        assert_eq!(3usize.to_coordinate(), Ok(3));
        assert_eq!((-1i32).to_coordinate(), Ok(-1));
        assert_eq!(u64::MAX.to_coordinate(), Ok(i64::MAX));
        assert_eq!(4.0f64.to_coordinate(), Ok(4));
        assert_eq!(
            2.5f64.to_coordinate(),
            Err(BoardError::NonIntegral { value: 2.5 })
        );
        assert!(f64::NAN.to_coordinate().is_err());
        assert!(f32::INFINITY.to_coordinate().is_err());
    }
}
