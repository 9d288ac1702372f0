//! Terminal tic-tac-toe.
//!
//! This crate wraps the pure rules in [`tictactoe_rules`] with the
//! pieces an interactive game needs.
//!
//! # Architecture
//!
//! - **Controller**: the session state machine (mode select, play, finish)
//! - **Scheduler**: cancellable delay before the heuristic opponent moves
//! - **Driver**: maps user input onto the controller and keeps the
//!   scheduler in step with it
//! - **Config**: optional TOML settings
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameController, Mode, Phase};
//! use tictactoe_rules::{GameResult, Mark};
//!
//! let mut controller = GameController::new(Mark::O);
//! controller.select_mode(Mode::TwoHuman);
//! controller.start();
//! for index in [0, 4, 1, 3, 2] {
//!     controller.apply_move(index);
//! }
//! assert_eq!(controller.result(), GameResult::Won(Mark::X));
//! assert_eq!(controller.phase(), Phase::Finished);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod controller;
mod driver;
mod scheduler;
mod simulate;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_OPPONENT_DELAY_MS, GameConfig};

// Crate-level exports - Controller
pub use controller::{
    AutoMoveTicket, GameController, IgnoreReason, Mode, Phase, SessionView, Transition,
};

// Crate-level exports - Driver and scheduling
pub use driver::{GameDriver, UserInput};
pub use scheduler::AutoMoveScheduler;

// Crate-level exports - Simulation
pub use simulate::{SimulationReport, simulate};
