//! The Reversi board and its rules.
//!
//! A [`Board`] never changes once built. Moves are applied by [`Board::play`],
//! which validates its arguments and returns a new board, leaving the old one
//! untouched so callers can keep it for history or undo.

use crate::bitboard::Bitboard;
use crate::error::BoardError;
use crate::location::{Coordinate, Direction, Position, PositionSet};
use crate::{utils, Cell, IntoPlayer, Outcome, Player, DIMENSION};
use std::fmt;
use tracing::trace;

type Grid<T> = [[T; DIMENSION]; DIMENSION];

/// Lower of the two central rows and columns.
const CENTER: usize = DIMENSION / 2 - 1;

/// The four central squares of the opening position.
const STARTING_CELLS: [(usize, usize, Cell); 4] = [
    (CENTER, CENTER, Cell::PlayerTwo),
    (CENTER, CENTER + 1, Cell::PlayerOne),
    (CENTER + 1, CENTER + 1, Cell::PlayerTwo),
    (CENTER + 1, CENTER, Cell::PlayerOne),
];

/// A `DIMENSION` x `DIMENSION` grid of [`Cell`]s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: Grid<Cell>,
}

impl Default for Board {
    /// Gets the opening position.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The opening position: every square empty except the four central
    /// squares, which hold two pieces per player on the diagonals.
    pub const fn new() -> Self {
        let mut cells = [[Cell::Empty; DIMENSION]; DIMENSION];
        let mut i = 0;
        while i < STARTING_CELLS.len() {
            let (row, col, cell) = STARTING_CELLS[i];
            cells[row][col] = cell;
            i += 1;
        }
        Self { cells }
    }

    /// Build a board from explicit rows of cell codes (0 empty, 1 player one,
    /// 2 player two).
    ///
    /// Fails with a shape error if there are not exactly `DIMENSION` rows of
    /// `DIMENSION` columns, or with [`BoardError::IllegalValue`] naming the first
    /// square holding anything but a cell code. The grid is copied; no opening
    /// pieces are added.
    pub fn from_grid<R, T>(grid: &[R]) -> Result<Self, BoardError>
    where
        R: AsRef<[T]>,
        T: Copy + Into<i64>,
    {
        if grid.len() != DIMENSION {
            return Err(BoardError::RowCount { found: grid.len() });
        }

        let mut cells = [[Cell::Empty; DIMENSION]; DIMENSION];
        for (row, values) in grid.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != DIMENSION {
                return Err(BoardError::ColumnCount {
                    row,
                    found: values.len(),
                });
            }

            for (col, &value) in values.iter().enumerate() {
                let value: i64 = value.into();
                cells[row][col] =
                    Cell::from_code(value).ok_or(BoardError::IllegalValue { row, col, value })?;
            }
        }

        let board = Self { cells };
        trace!(pieces = board.occupied().count_occupied(), "built board from grid");
        Ok(board)
    }

    /// The cell codes of every square, by row then column.
    pub fn to_grid(&self) -> Grid<u8> {
        let mut grid = [[0; DIMENSION]; DIMENSION];
        for (codes, cells) in grid.iter_mut().zip(self.cells.iter()) {
            for (code, cell) in codes.iter_mut().zip(cells.iter()) {
                *code = cell.code();
            }
        }
        grid
    }

    /// An independent copy of this board.
    #[inline]
    pub fn copy(&self) -> Self {
        *self
    }

    /// The contents of the square at `pos`.
    #[inline]
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Iterate over every square and its contents in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(col, &cell)| Position::new(row, col).map(|pos| (pos, cell)))
        })
    }

    /// Every position holding `state`, in row-major order.
    pub fn cells_with_state(&self, state: Cell) -> Vec<Position> {
        self.iter()
            .filter(|&(_, cell)| cell == state)
            .map(|(pos, _)| pos)
            .collect()
    }

    /// The number of squares holding `state`.
    pub fn count(&self, state: Cell) -> usize {
        self.iter().filter(|&(_, cell)| cell == state).count()
    }

    /// The cell value of the other player.
    /// Fails with [`BoardError::InvalidPlayer`] if `player` is not a player.
    pub fn opponent(&self, player: impl IntoPlayer) -> Result<Cell, BoardError> {
        Ok((!player.into_player()?).cell())
    }

    /// The opponent pieces `player` would capture walking from `pos` in
    /// `direction`: a maximal run of opponent pieces closed off by one of
    /// `player`'s own. A run ending at the edge or an empty square captures nothing.
    fn run(&self, pos: Position, direction: Direction, player: Player) -> Bitboard {
        let opponent = (!player).cell();
        let mut captured = Bitboard::EMPTY;

        for next in pos.ray(direction) {
            match self.cell(next) {
                cell if cell == opponent => captured |= next.bit(),
                cell if cell == player.cell() => return captured,
                _ => break,
            }
        }

        Bitboard::EMPTY
    }

    /// Every opponent piece that `player` placing at `pos` would flip.
    /// Empty if `pos` is occupied or not a legal move.
    pub fn flips(&self, pos: Position, player: Player) -> PositionSet {
        if self.cell(pos) != Cell::Empty {
            return PositionSet::EMPTY;
        }

        Direction::ALL
            .iter()
            .fold(Bitboard::EMPTY, |flips, &direction| {
                flips | self.run(pos, direction, player)
            })
            .into()
    }

    /// Whether `player` placing at `pos` captures in some direction.
    fn is_legal(&self, pos: Position, player: Player) -> bool {
        let opponent = (!player).cell();

        self.cell(pos) == Cell::Empty
            && Direction::ALL.iter().any(|&direction| {
                // The neighbor must be an opponent piece for a run to start.
                pos.step(direction)
                    .map_or(false, |next| self.cell(next) == opponent)
                    && !self.run(pos, direction, player).is_empty()
            })
    }

    /// Every empty square where `player` would capture at least one piece.
    pub fn get_moves(&self, player: Player) -> PositionSet {
        self.cells_with_state(Cell::Empty)
            .into_iter()
            .filter(|&pos| self.is_legal(pos, player))
            .collect()
    }

    /// Checked form of [`Board::get_moves`].
    /// Fails with [`BoardError::InvalidPlayer`] if `player` is not a player.
    pub fn legal_moves(&self, player: impl IntoPlayer) -> Result<PositionSet, BoardError> {
        Ok(self.get_moves(player.into_player()?))
    }

    /// Whether `player` has any legal move.
    pub fn can_move(&self, player: impl IntoPlayer) -> Result<bool, BoardError> {
        Ok(!self.legal_moves(player)?.is_empty())
    }

    /// Place a piece for `player` at `pos` and flip everything it captures,
    /// without checking that the move is legal.
    /// Placing where nothing is captured only fills the square.
    pub fn make_move(self, pos: Position, player: Player) -> Self {
        let mut next = self;
        for flipped in self.flips(pos, player) {
            next.cells[flipped.row()][flipped.col()] = player.cell();
        }
        next.cells[pos.row()][pos.col()] = player.cell();
        next
    }

    /// Play `player` at (`row`, `col`), returning the resulting board.
    ///
    /// Checks, in order: `player` is a player ([`BoardError::InvalidPlayer`]),
    /// both coordinates are whole numbers ([`BoardError::NonIntegral`]), the
    /// square is on the board ([`BoardError::OutOfBounds`]), and the square is
    /// one of [`Board::legal_moves`] ([`BoardError::IllegalMove`]).
    /// `self` is never modified.
    pub fn play<R, C, P>(&self, row: R, col: C, player: P) -> Result<Self, BoardError>
    where
        R: Coordinate,
        C: Coordinate,
        P: IntoPlayer,
    {
        let player = player.into_player()?;
        let (row, col) = (row.to_coordinate()?, col.to_coordinate()?);
        let pos = Position::checked(row, col).ok_or(BoardError::OutOfBounds { row, col })?;

        if !self.get_moves(player).contains(pos) {
            return Err(BoardError::IllegalMove {
                row: pos.row(),
                col: pos.col(),
                player,
            });
        }

        let flips = self.flips(pos, player);
        trace!(position = %pos, %player, flips = flips.len(), "played move");
        Ok(self.make_move(pos, player))
    }

    /// Summarize piece counts and, if the board is full, the winner.
    pub fn result(&self) -> Outcome {
        Outcome::from_counts(
            self.count(Cell::PlayerOne),
            self.count(Cell::PlayerTwo),
            self.count(Cell::Empty),
        )
    }

    /// Mask of the non-empty squares.
    fn occupied(&self) -> Bitboard {
        self.iter()
            .filter(|&(_, cell)| cell != Cell::Empty)
            .fold(Bitboard::EMPTY, |mask, (pos, _)| mask | pos.bit())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(self.iter().map(|(_, cell)| cell.symbol()), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    fn set(positions: &[(usize, usize)]) -> PositionSet {
        positions.iter().map(|&(row, col)| pos(row, col)).collect()
    }

    #[test]
    fn opening_position() {
        let board = Board::new();
        assert_eq!(board.cell(pos(3, 3)), Cell::PlayerTwo);
        assert_eq!(board.cell(pos(3, 4)), Cell::PlayerOne);
        assert_eq!(board.cell(pos(4, 4)), Cell::PlayerTwo);
        assert_eq!(board.cell(pos(4, 3)), Cell::PlayerOne);
        assert_eq!(board.count(Cell::Empty), 60);
        assert_eq!(board, Board::default());
    }

    #[test]
    fn run_stops_at_edge_and_empty() {
        let mut grid = [[0u8; DIMENSION]; DIMENSION];
        grid[0][1] = 2;
        grid[0][2] = 2;
        grid[5][5] = 2;
        grid[3][7] = 2;
        grid[4][7] = 1;
        let board = Board::from_grid(&grid).unwrap();

        assert!(board.run(pos(0, 0), Direction::East, Player::One).is_empty());
        assert!(board.run(pos(4, 4), Direction::SouthEast, Player::One).is_empty());
        assert!(board.run(pos(3, 6), Direction::East, Player::One).is_empty());
        assert!(board.run(pos(4, 6), Direction::NorthEast, Player::One).is_empty());
        assert!(board.flips(pos(0, 0), Player::One).is_empty());
    }

    #[test]
    fn run_closed_by_own_piece() {
        let mut grid = [[0u8; DIMENSION]; DIMENSION];
        grid[0][1] = 2;
        grid[0][2] = 2;
        grid[0][3] = 1;
        let board = Board::from_grid(&grid).unwrap();

        let run = board.run(pos(0, 0), Direction::East, Player::One);
        assert_eq!(PositionSet::from(run), set(&[(0, 1), (0, 2)]));
        assert!(board.run(pos(0, 0), Direction::East, Player::Two).is_empty());
    }

    #[test]
    fn flips_in_several_directions() {
        let mut grid = [[0u8; DIMENSION]; DIMENSION];
        // Player one at (2, 2) captures east, south and southeast runs.
        grid[2][3] = 2;
        grid[2][4] = 1;
        grid[3][2] = 2;
        grid[4][2] = 2;
        grid[5][2] = 1;
        grid[3][3] = 2;
        grid[4][4] = 1;
        // A run closed by an empty square is not captured.
        grid[1][1] = 2;
        let board = Board::from_grid(&grid).unwrap();

        assert_eq!(
            board.flips(pos(2, 2), Player::One),
            set(&[(2, 3), (3, 2), (4, 2), (3, 3)])
        );
        assert!(board.flips(pos(2, 3), Player::One).is_empty());
    }

    #[test]
    fn make_move_flips_and_places() {
        let board = Board::new().make_move(pos(2, 3), Player::One);
        assert_eq!(board.cell(pos(2, 3)), Cell::PlayerOne);
        assert_eq!(board.cell(pos(3, 3)), Cell::PlayerOne);
        assert_eq!(board.count(Cell::PlayerOne), 4);
        assert_eq!(board.count(Cell::PlayerTwo), 1);
    }

    #[test]
    fn can_move() {
        assert_eq!(Board::new().can_move(Player::One), Ok(true));

        let mut grid = [[0u8; DIMENSION]; DIMENSION];
        grid[0][0] = 1;
        grid[7][7] = 2;
        let board = Board::from_grid(&grid).unwrap();
        assert_eq!(board.can_move(Player::One), Ok(false));
        assert_eq!(board.can_move(Player::Two), Ok(false));
        assert!(!board.result().finished);
    }

    #[test]
    fn occupied_mask() {
        assert_eq!(Board::new().occupied().count_occupied(), 4);
    }

    #[test]
    fn display() {
        let text = Board::new().to_string();
        assert!(text.starts_with("   A B C D E F G H"));
        assert!(text.contains("\n 4 . . . O X . . . "));
        assert!(text.contains("\n 5 . . . X O . . . "));
    }
}
