//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strum::IntoEnumIterator;
use tictactoe::{Mode, Phase, SessionView};
use tictactoe_rules::{GameResult, Mark, Position, Square, winning_line};

use super::app::App;

/// Renders the whole screen for the current phase.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.view();
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Menu or board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    match view.phase() {
        Phase::ModeSelect => draw_menu(frame, chunks[1], app.menu_mode()),
        Phase::InProgress | Phase::Finished => draw_board(frame, chunks[1], &view, app.cursor()),
    }

    let status = Paragraph::new(status_line(&view))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(help_line(*view.phase()))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

/// Status message: whose turn it is, or how the game ended.
pub fn status_line(view: &SessionView) -> String {
    match (view.phase(), view.result()) {
        (Phase::ModeSelect, _) => "Choose a mode".to_string(),
        (_, GameResult::Won(mark)) => format!("{} wins!", mark),
        (_, GameResult::Draw) => "Draw!".to_string(),
        (_, GameResult::InProgress) => {
            let mark = *view.current_mark();
            if *view.mode() == Mode::HumanVsHeuristic && mark == *view.opponent_mark() {
                format!("{} is thinking...", mark)
            } else {
                format!("{} to move", mark)
            }
        }
    }
}

fn help_line(phase: Phase) -> &'static str {
    match phase {
        Phase::ModeSelect => "↑↓ / 1-2: Choose | Enter: Start | q: Quit",
        Phase::InProgress => "Arrows + Enter or 1-9: Place | r: Reset | q: Quit",
        Phase::Finished => "Enter / r: Back to menu | q: Quit",
    }
}

fn draw_menu(frame: &mut Frame, area: Rect, highlighted: Mode) {
    let items: Vec<ListItem> = Mode::iter()
        .enumerate()
        .map(|(i, mode)| ListItem::new(format!("{}. {}", i + 1, mode)))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Mode"))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Mode::iter().position(|m| m == highlighted));
    frame.render_stateful_widget(list, center_rect(area, 40, 4), &mut state);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &SessionView, cursor: Position) {
    let board_area = center_rect(area, 40, 11);
    let highlight = winning_line(view.board());
    let show_cursor = *view.phase() == Phase::InProgress;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
            ])
            .split(rows[row * 2]);

        for col in 0..3 {
            let Some(pos) = Position::from_row_col(row, col) else {
                continue;
            };
            let winning = highlight.is_some_and(|line| line.contains(&pos));
            let cell = cell_widget(view, pos, show_cursor && pos == cursor, winning);
            frame.render_widget(cell, cols[col * 2]);
            if col < 2 {
                frame.render_widget(
                    Paragraph::new("│").style(Style::default().fg(Color::DarkGray)),
                    cols[col * 2 + 1],
                );
            }
        }

        if row < 2 {
            frame.render_widget(
                Paragraph::new("─".repeat(38)).style(Style::default().fg(Color::DarkGray)),
                rows[row * 2 + 1],
            );
        }
    }
}

fn cell_widget(
    view: &SessionView,
    pos: Position,
    selected: bool,
    winning: bool,
) -> Paragraph<'static> {
    let (symbol, base_style) = match view.board().get(pos) {
        Square::Empty => (
            format!(" {} ", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Mark::X) => (
            " X ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            " O ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if selected {
        base_style.bg(Color::White).fg(Color::Black)
    } else if winning {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe::GameController;

    #[test]
    fn test_status_line_through_a_game() {
        let mut controller = GameController::new(Mark::O);
        assert_eq!(status_line(&controller.view()), "Choose a mode");

        controller.start();
        assert_eq!(status_line(&controller.view()), "X to move");

        for index in [0, 4, 1, 3, 2] {
            controller.apply_move(index);
        }
        assert_eq!(status_line(&controller.view()), "X wins!");
    }

    #[test]
    fn test_status_line_thinking() {
        let mut controller = GameController::new(Mark::O);
        controller.select_mode(Mode::HumanVsHeuristic);
        controller.start();
        controller.apply_move(0);
        assert_eq!(status_line(&controller.view()), "O is thinking...");
    }
}
