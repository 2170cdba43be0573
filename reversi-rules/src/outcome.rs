//! The standing of a board: piece counts and, once the board is full, the winner.

use crate::Player;
use derive_more::Display;

/// A read-only summary of a board's standing.
///
/// A game counts as finished only when no empty square remains. A board where
/// neither player can move but squares are still empty is reported as
/// unfinished; see [`crate::Board::can_move`] to detect that case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[display(
    "player one: {player_one}, player two: {player_two}, empty: {empty}, finished: {finished}"
)]
pub struct Outcome {
    pub player_one: usize,
    pub player_two: usize,
    pub empty: usize,
    pub finished: bool,
    /// Only true for a finished game with equal counts.
    pub tied: bool,
    /// Only set for a finished game with unequal counts.
    pub winner: Option<Player>,
}

impl Outcome {
    /// Summarize a board from its per-state square counts.
    pub fn from_counts(player_one: usize, player_two: usize, empty: usize) -> Self {
        let finished = empty == 0;
        let tied = finished && player_one == player_two;
        let winner = if !finished || tied {
            None
        } else if player_one > player_two {
            Some(Player::One)
        } else {
            Some(Player::Two)
        };

        Self {
            player_one,
            player_two,
            empty,
            finished,
            tied,
            winner,
        }
    }

    /// Pieces of `player`.
    pub fn count(&self, player: Player) -> usize {
        match player {
            Player::One => self.player_one,
            Player::Two => self.player_two,
        }
    }

    /// Score as: # player one pieces - # player two pieces.
    pub fn difference(&self) -> i32 {
        self.player_one as i32 - self.player_two as i32
    }

    /// Score as: # player one squares - # player two squares, where empty
    /// squares are credited to whoever leads.
    pub fn winner_gets_empties(&self) -> i32 {
        let difference = self.difference();
        let empty = self.empty as i32;

        if difference.is_positive() {
            difference + empty
        } else if difference.is_negative() {
            difference - empty
        } else {
            0
        }
    }
}
