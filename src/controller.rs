//! The state machine driving one tic-tac-toe session.
//!
//! The controller owns the board. Every operation is a synchronous method
//! call; an operation that is not allowed in the current state is ignored
//! and reported as [`Transition::Ignored`], never as an error.
//!
//! ```text
//! ModeSelect --start--> InProgress --win/draw--> Finished
//!      ^                    |                       |
//!      +------reset---------+-----------------------+
//! ```

use derive_getters::Getters;
use derive_more::Display;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tictactoe_rules::{Board, GameResult, Mark, Position, best_move, evaluate, is_legal_move};
use tracing::{debug, info, instrument};

/// Who is playing, in menu order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    clap::ValueEnum,
    strum::EnumIter,
)]
pub enum Mode {
    /// Two people share the keyboard.
    #[default]
    #[display("Two players")]
    TwoHuman,
    /// One person plays against the heuristic.
    #[display("Player vs computer")]
    HumanVsHeuristic,
}

impl Mode {
    /// Toggles between the two modes.
    pub fn toggle(self) -> Self {
        match self {
            Self::TwoHuman => Self::HumanVsHeuristic,
            Self::HumanVsHeuristic => Self::TwoHuman,
        }
    }
}

/// Controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Phase {
    /// Waiting for a mode choice and a start.
    ModeSelect,
    /// Moves are being accepted.
    InProgress,
    /// Someone won or the board filled up.
    Finished,
}

/// Why an operation left the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IgnoreReason {
    /// The operation is not available in this phase.
    #[display("not allowed during {}", _0)]
    WrongPhase(Phase),
    /// The game already has a result.
    #[display("game is over")]
    GameOver,
    /// The index is not on the board.
    #[display("index {} is off the board", _0)]
    OutOfBounds(usize),
    /// The square already holds a mark.
    #[display("{} is occupied", _0)]
    Occupied(Position),
    /// A scheduled move was issued for an earlier session state.
    #[display("scheduled move is stale")]
    StaleTicket,
    /// It is not the heuristic's turn, or the mode has no heuristic.
    #[display("heuristic is not due to move")]
    NotHeuristicTurn,
    /// The heuristic found no empty square.
    #[display("no move available")]
    NoMoveAvailable,
}

/// What an operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The session changed.
    Applied,
    /// The session is unchanged.
    Ignored(IgnoreReason),
}

impl Transition {
    /// Returns true if the session changed.
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied)
    }
}

/// Permission for the heuristic to move, valid for a single generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters)]
pub struct AutoMoveTicket {
    /// Session generation the ticket was issued for.
    generation: u64,
    /// Mark the heuristic will play.
    mark: Mark,
}

/// Read-only projection of a session for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct SessionView {
    /// Board snapshot.
    board: Board,
    /// Mark to move next.
    current_mark: Mark,
    /// Result derived from the board.
    result: GameResult,
    /// Selected mode.
    mode: Mode,
    /// Controller phase.
    phase: Phase,
    /// True once `start` has run and until `reset`.
    started: bool,
    /// Mark played by the heuristic.
    opponent_mark: Mark,
}

/// State machine for a single game session.
#[derive(Debug, Clone)]
pub struct GameController {
    board: Board,
    current_mark: Mark,
    result: GameResult,
    mode: Mode,
    phase: Phase,
    opponent_mark: Mark,
    generation: u64,
    rng: StdRng,
}

impl GameController {
    /// Creates a controller in `ModeSelect` with a randomly seeded heuristic.
    #[instrument]
    pub fn new(opponent_mark: Mark) -> Self {
        Self::with_rng(opponent_mark, StdRng::from_entropy())
    }

    /// Creates a controller whose heuristic draws from `rng`.
    #[instrument(skip(rng))]
    pub fn with_rng(opponent_mark: Mark, rng: StdRng) -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::STARTING,
            result: GameResult::InProgress,
            mode: Mode::default(),
            phase: Phase::ModeSelect,
            opponent_mark,
            generation: 0,
            rng,
        }
    }

    /// Records the mode for the next game. Only valid in `ModeSelect`.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn select_mode(&mut self, mode: Mode) -> Transition {
        if self.phase != Phase::ModeSelect {
            return self.ignore(IgnoreReason::WrongPhase(self.phase));
        }
        self.mode = mode;
        self.bump();
        debug!(mode = %mode, "Mode selected");
        Transition::Applied
    }

    /// Starts a game with an empty board. Only valid in `ModeSelect`.
    #[instrument(skip(self), fields(phase = %self.phase, mode = %self.mode))]
    pub fn start(&mut self) -> Transition {
        if self.phase != Phase::ModeSelect {
            return self.ignore(IgnoreReason::WrongPhase(self.phase));
        }
        self.board = Board::new();
        self.current_mark = Mark::STARTING;
        self.result = evaluate(&self.board);
        self.phase = Phase::InProgress;
        self.bump();
        info!("Game started");
        Transition::Applied
    }

    /// Places the current mark at `index` (0-8).
    ///
    /// Checks the phase and the index range here; whether the square may
    /// take a mark is up to [`is_legal_move`].
    #[instrument(skip(self), fields(mark = %self.current_mark))]
    pub fn apply_move(&mut self, index: usize) -> Transition {
        if self.phase != Phase::InProgress {
            return self.ignore(IgnoreReason::WrongPhase(self.phase));
        }
        let pos = match Position::try_from(index) {
            Ok(pos) => pos,
            Err(index) => return self.ignore(IgnoreReason::OutOfBounds(index)),
        };
        if !is_legal_move(&self.board, pos) {
            let reason = if self.board.is_empty(pos) {
                IgnoreReason::GameOver
            } else {
                IgnoreReason::Occupied(pos)
            };
            return self.ignore(reason);
        }
        if let Err(e) = self.board.place(pos, self.current_mark) {
            debug!(error = %e, "Board rejected a legal move");
            return self.ignore(IgnoreReason::Occupied(pos));
        }

        self.result = evaluate(&self.board);
        self.bump();
        debug!(position = %pos, result = %self.result, "Move applied");

        if self.result.is_over() {
            self.phase = Phase::Finished;
            info!(result = %self.result, "Game finished");
        } else {
            self.current_mark = self.current_mark.opponent();
        }
        Transition::Applied
    }

    /// Returns to `ModeSelect` with an empty board and the default mode.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn reset(&mut self) -> Transition {
        self.board = Board::new();
        self.current_mark = Mark::STARTING;
        self.result = GameResult::InProgress;
        self.mode = Mode::default();
        self.phase = Phase::ModeSelect;
        self.bump();
        info!("Session reset");
        Transition::Applied
    }

    /// Returns a ticket when the heuristic is due to move.
    pub fn pending_auto_move(&self) -> Option<AutoMoveTicket> {
        self.heuristic_due().then_some(AutoMoveTicket {
            generation: self.generation,
            mark: self.opponent_mark,
        })
    }

    /// Plays the heuristic's move if `ticket` is still current.
    ///
    /// A ticket goes stale as soon as anything else changes the session,
    /// so a reset, mode change or move during the delay discards it.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn fire_auto_move(&mut self, ticket: AutoMoveTicket) -> Transition {
        if ticket.generation != self.generation || ticket.mark != self.opponent_mark {
            return self.ignore(IgnoreReason::StaleTicket);
        }
        if !self.heuristic_due() {
            return self.ignore(IgnoreReason::NotHeuristicTurn);
        }
        match best_move(&self.board, self.opponent_mark, &mut self.rng) {
            Some(pos) => {
                info!(position = %pos, mark = %self.opponent_mark, "Heuristic moves");
                self.apply_move(pos.to_index())
            }
            None => self.ignore(IgnoreReason::NoMoveAvailable),
        }
    }

    /// Snapshot for the presentation layer.
    pub fn view(&self) -> SessionView {
        SessionView {
            board: self.board.clone(),
            current_mark: self.current_mark,
            result: self.result,
            mode: self.mode,
            phase: self.phase,
            started: self.is_started(),
            opponent_mark: self.opponent_mark,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move next.
    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    /// Returns the result derived after the last mutation.
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Returns the selected mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the controller phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True between `start` and `reset`.
    pub fn is_started(&self) -> bool {
        self.phase != Phase::ModeSelect
    }

    /// Returns the mark played by the heuristic.
    pub fn opponent_mark(&self) -> Mark {
        self.opponent_mark
    }

    /// Counter bumped by every applied operation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn heuristic_due(&self) -> bool {
        self.phase == Phase::InProgress
            && self.mode == Mode::HumanVsHeuristic
            && self.current_mark == self.opponent_mark
            && !self.result.is_over()
    }

    fn bump(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    fn ignore(&self, reason: IgnoreReason) -> Transition {
        debug!(reason = %reason, "Operation ignored");
        Transition::Ignored(reason)
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(Mark::O)
    }
}
