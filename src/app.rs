//! Application state and logic for the interactive viewer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::figure::Figure;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Gruvbox dark theme.
    #[default]
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Viewer state for one presented figure.
#[derive(Debug)]
pub struct App {
    /// The figure being shown.
    pub figure: Figure,
    /// Current theme.
    pub theme: Theme,
    /// Whether grid lines are drawn.
    pub show_grid: bool,
    /// Whether the legend is drawn.
    pub show_legend: bool,
    /// Status message.
    pub status: String,
    /// Set once the user asks to leave.
    pub should_quit: bool,
}

impl App {
    /// Create a new application instance.
    pub fn new(figure: Figure, theme: Theme) -> Self {
        let show_grid = figure.axes().grid_enabled();
        let lines = figure.axes().lines().len();
        Self {
            figure,
            theme,
            show_grid,
            show_legend: true,
            status: format!("{} line(s) plotted", lines),
            should_quit: false,
        }
    }

    /// Toggle grid lines.
    pub fn toggle_grid(&mut self) {
        self.show_grid = !self.show_grid;
        self.status = format!("Grid: {}", on_off(self.show_grid));
    }

    /// Toggle the legend.
    pub fn toggle_legend(&mut self) {
        self.show_legend = !self.show_legend;
        self.status = format!("Legend: {}", on_off(self.show_legend));
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Apply a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            // Quit
            (KeyModifiers::NONE, KeyCode::Char('q'))
            | (KeyModifiers::NONE, KeyCode::Esc)
            | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
                self.should_quit = true;
            }

            // Display toggles
            (KeyModifiers::NONE, KeyCode::Char('g')) => self.toggle_grid(),
            (KeyModifiers::NONE, KeyCode::Char('l')) => self.toggle_legend(),
            (KeyModifiers::SHIFT, KeyCode::Char('T')) | (KeyModifiers::NONE, KeyCode::Char('t')) => {
                self.cycle_theme()
            }
            (KeyModifiers::SHIFT, KeyCode::Char('?')) | (KeyModifiers::NONE, KeyCode::Char('?')) => {
                self.status = "Help: q=quit, g=grid, l=legend, t=theme".to_string();
            }

            _ => {}
        }
    }
}

fn on_off(on: bool) -> &'static str {
    if on {
        "on"
    } else {
        "off"
    }
}
