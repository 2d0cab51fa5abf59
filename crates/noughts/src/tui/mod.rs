//! Terminal UI for Noughts.

mod app;
mod input;
mod ui;
mod widgets;

pub use app::{App, Control, Focus};
pub use input::{AppEvent, move_cursor, translate};
pub use ui::{ClickTarget, Hitboxes, draw};
pub use widgets::{BoardHitMap, BoardView, Button, CellView, NameInput, visible_tail};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io::{self, Write};
use std::time::Duration;
use tracing::{error, info, instrument};

use crate::Config;

/// Runs the game until the user quits.
///
/// The terminal is restored before returning, whether the loop ended
/// normally or with an error.
#[instrument(skip_all)]
pub fn run_tui(config: &Config) -> Result<()> {
    info!("Starting Noughts TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut terminal = start_terminal(io::stdout(), disable_raw_mode)?;

    let mut app = App::new(config.player_names());
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    let scores = app.session().scores();
    info!(
        rounds = app.session().round(),
        x_wins = scores.x_wins(),
        o_wins = scores.o_wins(),
        draws = scores.draws(),
        "Session finished"
    );
    res
}

/// Switches `out` to the alternate screen with mouse capture. Raw mode is
/// already on, so `leave_raw_mode` runs if anything here fails.
fn start_terminal<W: Write>(
    mut out: W,
    leave_raw_mode: impl FnOnce() -> io::Result<()>,
) -> Result<Terminal<CrosstermBackend<W>>> {
    let started = execute!(out, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")
        .and_then(|()| Ok(Terminal::new(CrosstermBackend::new(out))?));
    if started.is_err() {
        leave_raw_mode()?;
    }
    started
}

/// Draw, wait for one event, handle it, repeat.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        let mut hitboxes = Hitboxes::default();
        terminal.draw(|f| hitboxes = ui::draw(f, app))?;
        app.set_hitboxes(hitboxes);

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        let Some(event) = translate(event::read()?) else {
            continue;
        };
        if app.handle_event(event) == Control::Quit {
            info!("User quit");
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::ErrorKind::BrokenPipe.into())
        }
    }

    #[test]
    fn test_failed_start_leaves_raw_mode() {
        let mut left = false;
        let result = start_terminal(BrokenPipe, || {
            left = true;
            Ok(())
        });
        assert!(result.is_err());
        assert!(left);
    }
}
