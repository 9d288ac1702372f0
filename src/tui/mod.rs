//! Terminal UI for tictactoe.

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tictactoe::{AutoMoveTicket, GameConfig, GameDriver, Mode};
use tokio::sync::mpsc;
use tokio::time::{Duration, sleep};
use tracing::{error, info, instrument};

use app::App;

/// Run the TUI until the user quits.
///
/// Restores the terminal even when the event loop fails.
#[instrument(skip(config))]
pub async fn run_tui(config: GameConfig, menu_mode: Mode) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (driver, auto_rx) = GameDriver::from_config(&config);
    let mut app = App::new(driver, menu_mode);

    let res = run_event_loop(&mut terminal, &mut app, auto_rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!("TUI exited");
    res
}

/// Draw, drain fired auto moves, then poll the keyboard, until quit.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    mut auto_rx: mpsc::UnboundedReceiver<AutoMoveTicket>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &*app))?;

        while let Ok(ticket) = auto_rx.try_recv() {
            app.handle_auto_move(ticket);
        }

        // Short poll timeout keeps fired auto moves responsive.
        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind != KeyEventKind::Release {
                app.handle_key(key.code);
            }
        }

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }

        sleep(Duration::from_millis(10)).await;
    }
}
