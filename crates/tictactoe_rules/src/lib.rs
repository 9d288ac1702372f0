//! Pure tic-tac-toe rules.
//!
//! Board storage, win/draw detection and a greedy one-ply opponent.
//! Nothing in this crate performs I/O or keeps state beyond the
//! [`Board`] value handed to it.
//!
//! # Example
//!
//! ```
//! use tictactoe_rules::{Board, GameResult, Mark, Position, evaluate};
//!
//! let mut board = Board::new();
//! for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
//!     board.place(pos, Mark::X).unwrap();
//! }
//! assert_eq!(evaluate(&board), GameResult::Won(Mark::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod heuristic;
mod position;
pub mod rules;
mod types;

pub use heuristic::best_move;
pub use position::Position;
pub use rules::{GameResult, check_winner, evaluate, is_draw, is_full, is_legal_move, winning_line};
pub use types::{Board, BoardError, Mark, Square};
