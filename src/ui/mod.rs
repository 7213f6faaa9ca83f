//! User interface rendering.

mod figure;
mod formatters;
mod keymap_bar;
mod status_bar;
mod theme;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use figure::{clip_segment, dash_segments, fit_equal_aspect, FigureWidget};
pub use formatters::{format_axis_label, truncate_to_width};
pub use theme::ThemeColors;

/// Draw the viewer UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Main layout with status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
        .split(f.area());

    let widget = FigureWidget::new(&app.figure, &colors)
        .show_grid(app.show_grid)
        .show_legend(app.show_legend);
    f.render_widget(widget, chunks[0]);

    status_bar::draw_status(f, chunks[1], &app.status, &colors);
    keymap_bar::draw_keymap(f, chunks[2], &colors);
}
