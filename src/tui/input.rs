//! Key mapping and cursor movement.

use crossterm::event::KeyCode;
use strum::IntoEnumIterator;
use tictactoe::{Mode, Phase};
use tictactoe_rules::Position;

/// What a key press means in the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Leave the program.
    Quit,
    /// Abandon the session.
    Reset,
    /// Highlight a specific mode in the menu.
    HighlightMode(Mode),
    /// Highlight the other mode in the menu.
    ToggleMode,
    /// Start with the highlighted mode, or place at the cursor.
    Confirm,
    /// Place directly at a position.
    Place(Position),
    /// Move the board cursor.
    MoveCursor(KeyCode),
    /// Nothing to do.
    Ignore,
}

/// Maps a key press to an action.
pub fn key_action(phase: Phase, key: KeyCode) -> KeyAction {
    match (phase, key) {
        (_, KeyCode::Char('q') | KeyCode::Char('Q')) => KeyAction::Quit,
        (_, KeyCode::Char('r') | KeyCode::Char('R')) => KeyAction::Reset,

        (Phase::ModeSelect, KeyCode::Enter | KeyCode::Char(' ')) => KeyAction::Confirm,
        (Phase::ModeSelect, KeyCode::Char(c)) => match c.to_digit(10) {
            Some(digit @ 1..=9) => Mode::iter()
                .nth(digit as usize - 1)
                .map(KeyAction::HighlightMode)
                .unwrap_or(KeyAction::Ignore),
            _ => KeyAction::Ignore,
        },
        (Phase::ModeSelect, KeyCode::Up | KeyCode::Down | KeyCode::Tab) => KeyAction::ToggleMode,

        (Phase::InProgress, KeyCode::Enter | KeyCode::Char(' ')) => KeyAction::Confirm,
        (Phase::InProgress, KeyCode::Char(c)) => match c.to_digit(10) {
            Some(digit @ 1..=9) => Position::from_index(digit as usize - 1)
                .map(KeyAction::Place)
                .unwrap_or(KeyAction::Ignore),
            _ => KeyAction::Ignore,
        },
        (Phase::InProgress, KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
            KeyAction::MoveCursor(key)
        }

        (Phase::InProgress | Phase::Finished, KeyCode::Esc) => KeyAction::Reset,
        (Phase::Finished, KeyCode::Enter) => KeyAction::Reset,

        _ => KeyAction::Ignore,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}
