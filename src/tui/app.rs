//! Application state and logic.

use crossterm::event::KeyCode;
use tictactoe::{AutoMoveTicket, GameDriver, Mode, Phase, SessionView, UserInput};
use tictactoe_rules::Position;
use tracing::{debug, instrument};

use super::input::{KeyAction, key_action, move_cursor};

/// Main application state: the driver plus UI-only selection state.
#[derive(Debug)]
pub struct App {
    driver: GameDriver,
    menu_mode: Mode,
    default_menu_mode: Mode,
    cursor: Position,
    quit: bool,
}

impl App {
    /// Creates a new application with `menu_mode` highlighted.
    pub fn new(driver: GameDriver, menu_mode: Mode) -> Self {
        Self {
            driver,
            menu_mode,
            default_menu_mode: menu_mode,
            cursor: Position::Center,
            quit: false,
        }
    }

    /// Session snapshot.
    pub fn view(&self) -> SessionView {
        self.driver.view()
    }

    /// Mode highlighted in the menu.
    pub fn menu_mode(&self) -> Mode {
        self.menu_mode
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        let action = key_action(self.driver.controller().phase(), key);
        debug!(?action, "Key action");

        match action {
            KeyAction::Quit => self.quit = true,
            KeyAction::Reset => {
                self.driver.handle_input(UserInput::Reset);
                self.menu_mode = self.default_menu_mode;
                self.cursor = Position::Center;
            }
            KeyAction::HighlightMode(mode) => self.menu_mode = mode,
            KeyAction::ToggleMode => self.menu_mode = self.menu_mode.toggle(),
            KeyAction::Confirm => match self.driver.controller().phase() {
                Phase::ModeSelect => {
                    self.driver.handle_input(UserInput::SelectMode(self.menu_mode));
                    self.driver.handle_input(UserInput::Start);
                }
                _ => self.click(self.cursor),
            },
            KeyAction::Place(pos) => {
                self.cursor = pos;
                self.click(pos);
            }
            KeyAction::MoveCursor(key) => self.cursor = move_cursor(self.cursor, key),
            KeyAction::Ignore => {}
        }
    }

    /// Forwards a cell click unless the heuristic owns the turn.
    fn click(&mut self, pos: Position) {
        if self.driver.controller().pending_auto_move().is_some() {
            debug!(position = %pos, "Click ignored while computer is thinking");
            return;
        }
        self.driver.handle_input(UserInput::CellClicked(pos.to_index()));
    }

    /// Handles a fired auto-move ticket.
    pub fn handle_auto_move(&mut self, ticket: AutoMoveTicket) {
        self.driver.handle_auto_move(ticket);
    }
}
