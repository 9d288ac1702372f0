//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a [`Board`] according to tic-tac-toe rules.
//! Rules are kept apart from board storage so any caller can recompute
//! the game result after a mutation.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};

use crate::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result derived from a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// No line complete and at least one empty square.
    InProgress,
    /// A mark completed a line.
    Won(Mark),
    /// Board full with no line complete.
    Draw,
}

impl GameResult {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameResult::Won(mark) => Some(*mark),
            _ => None,
        }
    }

    /// Returns true once the game can accept no more moves.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameResult::InProgress)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::InProgress => write!(f, "In progress"),
            GameResult::Won(mark) => write!(f, "{} wins", mark),
            GameResult::Draw => write!(f, "Draw"),
        }
    }
}

/// Derives the game result from the board. A win is reported before fullness.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameResult {
    if let Some(winner) = check_winner(board) {
        GameResult::Won(winner)
    } else if is_full(board) {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}

/// A move is legal when nobody has won yet and the square is empty.
#[instrument(skip(board))]
pub fn is_legal_move(board: &Board, pos: Position) -> bool {
    board.is_empty(pos) && check_winner(board).is_none()
}
