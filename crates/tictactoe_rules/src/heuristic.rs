//! Greedy one-ply opponent.
//!
//! Candidates are tried in a fixed priority order: complete our own line,
//! block the opponent's line, take the center, then any empty square at
//! random. It does not look further ahead than one move, so a player who
//! sets up a fork can beat it.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

use crate::rules::check_winner;
use crate::{Board, Mark, Position};

/// First empty square (ascending index) where `mark` completes a line.
fn completing_square(board: &Board, mark: Mark) -> Option<Position> {
    board
        .empty_positions()
        .into_iter()
        .find(|pos| check_winner(&board.with_mark(*pos, mark)) == Some(mark))
}

/// Chooses a square for `mark` to play.
///
/// Returns `None` only when the board has no empty square.
#[instrument(skip(board, rng), fields(board = %board.display()))]
pub fn best_move<R: Rng + ?Sized>(board: &Board, mark: Mark, rng: &mut R) -> Option<Position> {
    if let Some(pos) = completing_square(board, mark) {
        debug!(position = %pos, "Taking winning square");
        return Some(pos);
    }

    if let Some(pos) = completing_square(board, mark.opponent()) {
        debug!(position = %pos, "Blocking opponent");
        return Some(pos);
    }

    if board.is_empty(Position::Center) {
        debug!("Taking center");
        return Some(Position::Center);
    }

    let choice = board.empty_positions().choose(rng).copied();
    debug!(position = ?choice, "Picking random empty square");
    choice
}
