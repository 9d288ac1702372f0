//! Routes user input and fired timers into the controller.

use crate::config::GameConfig;
use crate::controller::{AutoMoveTicket, GameController, Mode, SessionView, Transition};
use crate::scheduler::AutoMoveScheduler;
use derive_new::new;
use tokio::sync::mpsc;
use tracing::{debug, instrument};

/// Discrete events coming from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserInput {
    /// Choose the mode for the next game.
    SelectMode(Mode),
    /// Start the game.
    Start,
    /// A board cell (0-8) was clicked.
    CellClicked(usize),
    /// Abandon the session and return to the mode menu.
    Reset,
}

/// Couples a [`GameController`] with the scheduler for its automated moves.
///
/// After every applied operation the driver either schedules the
/// heuristic's move or cancels whatever was pending.
#[derive(Debug, new)]
pub struct GameDriver {
    controller: GameController,
    scheduler: AutoMoveScheduler,
}

impl GameDriver {
    /// Builds a driver from configuration, returning the channel on which
    /// fired auto-move tickets arrive.
    #[instrument(skip(config))]
    pub fn from_config(config: &GameConfig) -> (Self, mpsc::UnboundedReceiver<AutoMoveTicket>) {
        let controller = GameController::new(*config.opponent_mark());
        let (scheduler, rx) = AutoMoveScheduler::channel(config.opponent_delay());
        (Self::new(controller, scheduler), rx)
    }

    /// Applies one user event.
    #[instrument(skip(self))]
    pub fn handle_input(&mut self, input: UserInput) -> Transition {
        let transition = match input {
            UserInput::SelectMode(mode) => self.controller.select_mode(mode),
            UserInput::Start => self.controller.start(),
            UserInput::CellClicked(index) => self.controller.apply_move(index),
            UserInput::Reset => self.controller.reset(),
        };
        self.reschedule(transition);
        transition
    }

    /// Applies a ticket delivered by the scheduler.
    #[instrument(skip(self))]
    pub fn handle_auto_move(&mut self, ticket: AutoMoveTicket) -> Transition {
        let transition = self.controller.fire_auto_move(ticket);
        self.reschedule(transition);
        transition
    }

    fn reschedule(&mut self, transition: Transition) {
        if !transition.is_applied() {
            return;
        }
        match self.controller.pending_auto_move() {
            Some(ticket) => self.scheduler.schedule(ticket),
            None => self.scheduler.cancel(),
        }
        debug!(generation = self.controller.generation(), "Rescheduled");
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> SessionView {
        self.controller.view()
    }

    /// The underlying controller.
    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    /// True while the heuristic's move is waiting on its delay.
    pub fn auto_move_pending(&self) -> bool {
        self.scheduler.is_pending()
    }
}
