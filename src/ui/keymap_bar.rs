//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let paragraph = Paragraph::new("q/Esc:quit | g:grid | l:legend | t:theme | ?:help")
        .style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
