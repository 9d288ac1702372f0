//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winner.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position};

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        for pos in Position::ALL.into_iter().take(8) {
            board.place(pos, Mark::X).unwrap();
        }
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.place(pos, Mark::X).unwrap();
        }
        assert!(is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let mut board = Board::new();
        #[rustfmt::skip]
        let layout = [
            Mark::X, Mark::O, Mark::X,
            Mark::O, Mark::X, Mark::X,
            Mark::O, Mark::X, Mark::O,
        ];
        for (pos, mark) in Position::ALL.into_iter().zip(layout) {
            board.place(pos, mark).unwrap();
        }

        assert!(is_draw(&board));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Mark::X).unwrap();
        board.place(Position::TopCenter, Mark::X).unwrap();
        board.place(Position::TopRight, Mark::X).unwrap();
        board.place(Position::MiddleLeft, Mark::O).unwrap();
        board.place(Position::Center, Mark::O).unwrap();

        assert!(!is_draw(&board));
    }
}
