//! Full-screen interactive viewer.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

use super::Presenter;
use crate::app::{App, Theme};
use crate::error::{Result, Shapes2dError};
use crate::figure::Figure;
use crate::ui;

/// Shows a figure in the terminal until the user quits.
#[derive(Debug, Default)]
pub struct TerminalPresenter {
    theme: Theme,
}

impl TerminalPresenter {
    /// Create a presenter with the given starting theme.
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

impl Presenter for TerminalPresenter {
    fn present(&mut self, figure: &Figure) -> Result<()> {
        info!(lines = figure.axes().lines().len(), "opening viewer");

        // Setup terminal
        enable_raw_mode().map_err(Shapes2dError::terminal)?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(Shapes2dError::terminal(err));
        }
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = match Terminal::new(backend) {
            Ok(terminal) => terminal,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                return Err(Shapes2dError::terminal(err));
            }
        };

        // Run viewer
        let app = App::new(figure.clone(), self.theme);
        let res = run_app(&mut terminal, app);

        // Restore terminal
        restore(&mut terminal);

        info!("viewer closed");
        res
    }
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    while !app.should_quit {
        terminal
            .draw(|f| ui::draw(f, &app))
            .map_err(Shapes2dError::terminal)?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }
    Ok(())
}

fn restore(terminal: &mut Terminal<CrosstermBackend<Stdout>>) {
    if let Err(err) = disable_raw_mode() {
        warn!(%err, "failed to disable raw mode");
    }
    if let Err(err) = execute!(terminal.backend_mut(), LeaveAlternateScreen) {
        warn!(%err, "failed to leave alternate screen");
    }
    if let Err(err) = terminal.show_cursor() {
        warn!(%err, "failed to show cursor");
    }
}
