//! Non-interactive text rendering.

use std::io::Write;

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use tracing::info;

use super::Presenter;
use crate::app::Theme;
use crate::error::Result;
use crate::figure::Figure;
use crate::ui::{FigureWidget, ThemeColors};

/// Render `figure` into a `width`×`height` character grid.
///
/// Lines are joined with `\n` and trailing spaces are trimmed.
pub fn render_to_string(figure: &Figure, width: u16, height: u16, theme: Theme) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    let colors = ThemeColors::from_theme(&theme);
    FigureWidget::new(figure, &colors).render(area, &mut buf);

    let mut out = String::new();
    for y in 0..height {
        let row: String = (0..width)
            .map(|x| buf.cell((x, y)).map_or(" ", |cell| cell.symbol()))
            .collect();
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}

/// Writes one rendered frame to a writer.
#[derive(Debug)]
pub struct TextPresenter<W: Write> {
    writer: W,
    width: u16,
    height: u16,
    theme: Theme,
}

impl<W: Write> TextPresenter<W> {
    /// Create a presenter writing `width`×`height` frames to `writer`.
    pub fn new(writer: W, width: u16, height: u16) -> Self {
        Self {
            writer,
            width,
            height,
            theme: Theme::default(),
        }
    }

    /// Use a different theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn present(&mut self, figure: &Figure) -> Result<()> {
        info!(
            width = self.width,
            height = self.height,
            lines = figure.axes().lines().len(),
            "rendering figure as text"
        );
        let text = render_to_string(figure, self.width, self.height, self.theme);
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}
