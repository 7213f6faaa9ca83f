//! Color themes for the UI.

use crate::app::Theme;
use crate::style::PlotColor;
use ratatui::style::Color;

/// The ten-color category palette behind `C0`..`C9`.
const CATEGORY10: [(u8, u8, u8); 10] = [
    (31, 119, 180),
    (255, 127, 14),
    (44, 160, 44),
    (214, 39, 40),
    (148, 103, 189),
    (140, 86, 75),
    (227, 119, 194),
    (127, 127, 127),
    (188, 189, 34),
    (23, 190, 207),
];

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Heading text color.
    pub heading: Color,
    /// Border color.
    pub border: Color,
    /// Grid line color.
    pub grid: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Series color for `b`.
    pub blue: Color,
    /// Series color for `g`.
    pub green: Color,
    /// Series color for `r`.
    pub red: Color,
    /// Series color for `c`.
    pub cyan: Color,
    /// Series color for `m`.
    pub magenta: Color,
    /// Series color for `y`.
    pub yellow: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                heading: Color::Rgb(251, 184, 108),
                border: Color::Rgb(102, 92, 84),
                grid: Color::Rgb(80, 73, 69),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
                blue: Color::Rgb(131, 165, 152),
                green: Color::Rgb(184, 187, 38),
                red: Color::Rgb(251, 73, 52),
                cyan: Color::Rgb(142, 192, 124),
                magenta: Color::Rgb(211, 134, 155),
                yellow: Color::Rgb(250, 189, 47),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                heading: Color::Rgb(175, 58, 3),
                border: Color::Rgb(213, 196, 161),
                grid: Color::Rgb(235, 219, 178),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
                blue: Color::Rgb(7, 102, 120),
                green: Color::Rgb(121, 116, 14),
                red: Color::Rgb(157, 0, 6),
                cyan: Color::Rgb(66, 123, 88),
                magenta: Color::Rgb(143, 63, 113),
                yellow: Color::Rgb(181, 118, 20),
            },
        }
    }

    /// Terminal color for a plot color code.
    ///
    /// Black and white follow the theme's text and background, so `k` stays
    /// visible on dark themes.
    pub fn plot_color(&self, color: PlotColor) -> Color {
        match color {
            PlotColor::Blue => self.blue,
            PlotColor::Green => self.green,
            PlotColor::Red => self.red,
            PlotColor::Cyan => self.cyan,
            PlotColor::Magenta => self.magenta,
            PlotColor::Yellow => self.yellow,
            PlotColor::Black => self.text,
            PlotColor::White => self.bg,
            PlotColor::Category(n) => {
                let (r, g, b) = CATEGORY10[usize::from(n) % CATEGORY10.len()];
                Color::Rgb(r, g, b)
            }
        }
    }
}
