//! Matplotlib-style line format strings such as `"ro-"` or `"g--"`.
//!
//! A format string holds at most one color code, one marker and one line
//! pattern, in any order. Missing pieces fall back as matplotlib does: no
//! marker and no pattern means a solid line; a marker alone means markers
//! without a connecting line.
//!
//! Colors are the single letters `bgrcmykw` or `C0`..`C9` (the ten-color
//! category palette). Named and hex colors are not accepted here.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, Shapes2dError};

/// Color codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotColor {
    /// `b`
    Blue,
    /// `g`
    Green,
    /// `r`
    Red,
    /// `c`
    Cyan,
    /// `m`
    Magenta,
    /// `y`
    Yellow,
    /// `k`
    Black,
    /// `w`
    White,
    /// `C0`..`C9`, an index into the category palette.
    Category(u8),
}

impl PlotColor {
    /// Parse a single-letter color code.
    pub fn from_code(code: char) -> Option<Self> {
        Some(match code {
            'b' => Self::Blue,
            'g' => Self::Green,
            'r' => Self::Red,
            'c' => Self::Cyan,
            'm' => Self::Magenta,
            'y' => Self::Yellow,
            'k' => Self::Black,
            'w' => Self::White,
            _ => return None,
        })
    }

    /// Parse a `C<digit>` category color.
    pub fn from_category(digit: char) -> Option<Self> {
        digit.to_digit(10).map(|d| Self::Category(d as u8))
    }

    /// The color code as written in a format string.
    pub fn code(self) -> String {
        let letter = match self {
            Self::Blue => 'b',
            Self::Green => 'g',
            Self::Red => 'r',
            Self::Cyan => 'c',
            Self::Magenta => 'm',
            Self::Yellow => 'y',
            Self::Black => 'k',
            Self::White => 'w',
            Self::Category(n) => return format!("C{}", n),
        };
        letter.to_string()
    }
}

/// Point markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// `.`
    Point,
    /// `,`
    Pixel,
    /// `o`
    Circle,
    /// `v`
    TriangleDown,
    /// `^`
    TriangleUp,
    /// `<`
    TriangleLeft,
    /// `>`
    TriangleRight,
    /// `s`
    Square,
    /// `*`
    Star,
    /// `+`
    Plus,
    /// `x`
    Cross,
    /// `D`
    Diamond,
    /// `d`
    ThinDiamond,
    /// `|`
    VLine,
    /// `_`
    HLine,
    /// `1`
    TriDown,
    /// `2`
    TriUp,
    /// `3`
    TriLeft,
    /// `4`
    TriRight,
    /// `8`
    Octagon,
    /// `p`
    Pentagon,
    /// `P`
    PlusFilled,
    /// `h`
    Hexagon1,
    /// `H`
    Hexagon2,
    /// `X`
    CrossFilled,
}

impl MarkerKind {
    /// Parse a marker code.
    pub fn from_code(code: char) -> Option<Self> {
        Some(match code {
            '.' => Self::Point,
            ',' => Self::Pixel,
            'o' => Self::Circle,
            'v' => Self::TriangleDown,
            '^' => Self::TriangleUp,
            '<' => Self::TriangleLeft,
            '>' => Self::TriangleRight,
            's' => Self::Square,
            '*' => Self::Star,
            '+' => Self::Plus,
            'x' => Self::Cross,
            'D' => Self::Diamond,
            'd' => Self::ThinDiamond,
            '|' => Self::VLine,
            '_' => Self::HLine,
            '1' => Self::TriDown,
            '2' => Self::TriUp,
            '3' => Self::TriLeft,
            '4' => Self::TriRight,
            '8' => Self::Octagon,
            'p' => Self::Pentagon,
            'P' => Self::PlusFilled,
            'h' => Self::Hexagon1,
            'H' => Self::Hexagon2,
            'X' => Self::CrossFilled,
            _ => return None,
        })
    }

    /// The marker code.
    pub fn code(self) -> char {
        match self {
            Self::Point => '.',
            Self::Pixel => ',',
            Self::Circle => 'o',
            Self::TriangleDown => 'v',
            Self::TriangleUp => '^',
            Self::TriangleLeft => '<',
            Self::TriangleRight => '>',
            Self::Square => 's',
            Self::Star => '*',
            Self::Plus => '+',
            Self::Cross => 'x',
            Self::Diamond => 'D',
            Self::ThinDiamond => 'd',
            Self::VLine => '|',
            Self::HLine => '_',
            Self::TriDown => '1',
            Self::TriUp => '2',
            Self::TriLeft => '3',
            Self::TriRight => '4',
            Self::Octagon => '8',
            Self::Pentagon => 'p',
            Self::PlusFilled => 'P',
            Self::Hexagon1 => 'h',
            Self::Hexagon2 => 'H',
            Self::CrossFilled => 'X',
        }
    }

    /// Terminal glyph used to draw the marker.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Point => "•",
            Self::Pixel => "·",
            Self::Circle => "o",
            Self::TriangleDown => "▼",
            Self::TriangleUp => "▲",
            Self::TriangleLeft => "◀",
            Self::TriangleRight => "▶",
            Self::Square => "■",
            Self::Star => "*",
            Self::Plus => "+",
            Self::Cross => "x",
            Self::Diamond => "◆",
            Self::ThinDiamond => "◇",
            Self::VLine => "|",
            Self::HLine => "_",
            Self::TriDown => "Y",
            Self::TriUp => "⅄",
            Self::TriLeft => "≺",
            Self::TriRight => "≻",
            Self::Octagon => "●",
            Self::Pentagon => "⬠",
            Self::PlusFilled => "✚",
            Self::Hexagon1 | Self::Hexagon2 => "⬡",
            Self::CrossFilled => "✖",
        }
    }
}

/// Connecting line patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `-`
    Solid,
    /// `--`
    Dashed,
    /// `-.`
    DashDot,
    /// `:`
    Dotted,
    /// No connecting line.
    None,
}

impl LineKind {
    /// The format-string spelling, empty for [`LineKind::None`].
    pub fn code(self) -> &'static str {
        match self {
            Self::Solid => "-",
            Self::Dashed => "--",
            Self::DashDot => "-.",
            Self::Dotted => ":",
            Self::None => "",
        }
    }

    /// Alternating on/off lengths, in units of the base dash length.
    /// Empty for solid lines.
    pub fn pattern(self) -> &'static [f64] {
        match self {
            Self::Solid | Self::None => &[],
            Self::Dashed => &[3.0, 2.0],
            Self::DashDot => &[3.0, 1.5, 0.5, 1.5],
            Self::Dotted => &[0.5, 1.5],
        }
    }
}

/// A parsed line format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpec {
    /// Explicit color, if any.
    pub color: Option<PlotColor>,
    /// Marker drawn at each point, if any.
    pub marker: Option<MarkerKind>,
    /// Connecting line pattern.
    pub line: LineKind,
}

impl LineSpec {
    /// Parse a format string.
    pub fn parse(spec: &str) -> Result<Self> {
        let mut color = None;
        let mut marker = None;
        let mut line = None;

        let chars: Vec<char> = spec.chars().collect();
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            let next = chars.get(i + 1).copied();

            // Category colors are two characters wide and must not be
            // read as the digit markers.
            if c == 'C' {
                let col = next.and_then(PlotColor::from_category).ok_or_else(|| {
                    Shapes2dError::invalid_line_spec(spec, "'C' must be followed by a digit")
                })?;
                set_once(&mut color, col, spec, "color")?;
                i += 2;
                continue;
            }

            // Two-character line patterns take precedence over '-' and '.'.
            let (kind, width) = match (c, next) {
                ('-', Some('-')) => (Some(LineKind::Dashed), 2),
                ('-', Some('.')) => (Some(LineKind::DashDot), 2),
                ('-', _) => (Some(LineKind::Solid), 1),
                (':', _) => (Some(LineKind::Dotted), 1),
                _ => (None, 1),
            };

            if let Some(kind) = kind {
                set_once(&mut line, kind, spec, "line style")?;
            } else if let Some(m) = MarkerKind::from_code(c) {
                set_once(&mut marker, m, spec, "marker")?;
            } else if let Some(col) = PlotColor::from_code(c) {
                set_once(&mut color, col, spec, "color")?;
            } else {
                return Err(Shapes2dError::invalid_line_spec(
                    spec,
                    format!("unrecognized character '{}'", c),
                ));
            }
            i += width;
        }

        let line = match (line, marker) {
            (Some(line), _) => line,
            (None, Some(_)) => LineKind::None,
            (None, None) => LineKind::Solid,
        };

        Ok(Self {
            color,
            marker,
            line,
        })
    }

    /// Copy with the color filled in when none was given.
    pub fn with_default_color(self, color: PlotColor) -> Self {
        Self {
            color: self.color.or(Some(color)),
            ..self
        }
    }
}

impl FromStr for LineSpec {
    type Err = Shapes2dError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for LineSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(color) = self.color {
            write!(f, "{}", color.code())?;
        }
        if let Some(marker) = self.marker {
            write!(f, "{}", marker.code())?;
        }
        f.write_str(self.line.code())
    }
}

fn set_once<T>(slot: &mut Option<T>, value: T, spec: &str, what: &str) -> Result<()> {
    if slot.is_some() {
        return Err(Shapes2dError::invalid_line_spec(
            spec,
            format!("more than one {} given", what),
        ));
    }
    *slot = Some(value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_marker_line() {
        let spec = LineSpec::parse("bo-").unwrap();
        assert_eq!(spec.color, Some(PlotColor::Blue));
        assert_eq!(spec.marker, Some(MarkerKind::Circle));
        assert_eq!(spec.line, LineKind::Solid);
    }

    #[test]
    fn order_does_not_matter() {
        assert_eq!(LineSpec::parse("--r").unwrap(), LineSpec::parse("r--").unwrap());
        assert_eq!(LineSpec::parse("o-g").unwrap(), LineSpec::parse("go-").unwrap());
    }

    #[test]
    fn color_only_is_solid_line() {
        let spec = LineSpec::parse("g").unwrap();
        assert_eq!(spec.color, Some(PlotColor::Green));
        assert_eq!(spec.marker, None);
        assert_eq!(spec.line, LineKind::Solid);
    }

    #[test]
    fn empty_is_solid_without_color() {
        let spec = LineSpec::parse("").unwrap();
        assert_eq!(spec.color, None);
        assert_eq!(spec.line, LineKind::Solid);
    }

    #[test]
    fn marker_only_has_no_line() {
        let spec = LineSpec::parse("r.").unwrap();
        assert_eq!(spec.marker, Some(MarkerKind::Point));
        assert_eq!(spec.line, LineKind::None);
    }

    #[test]
    fn two_char_patterns() {
        assert_eq!(LineSpec::parse("-.").unwrap().line, LineKind::DashDot);
        assert_eq!(LineSpec::parse("k--").unwrap().line, LineKind::Dashed);
        assert_eq!(LineSpec::parse(":").unwrap().line, LineKind::Dotted);
    }

    #[test]
    fn rejects_unknown_and_repeated() {
        assert!(LineSpec::parse("q").is_err());
        assert!(LineSpec::parse("rg").is_err());
        assert!(LineSpec::parse("o^").is_err());
        assert!(LineSpec::parse("--:").is_err());
    }

    #[test]
    fn extended_markers() {
        for (code, marker) in [
            ('1', MarkerKind::TriDown),
            ('4', MarkerKind::TriRight),
            ('8', MarkerKind::Octagon),
            ('p', MarkerKind::Pentagon),
            ('P', MarkerKind::PlusFilled),
            ('h', MarkerKind::Hexagon1),
            ('H', MarkerKind::Hexagon2),
            ('X', MarkerKind::CrossFilled),
        ] {
            let spec = LineSpec::parse(&format!("r{}--", code)).unwrap();
            assert_eq!(spec.marker, Some(marker));
            assert_eq!(spec.line, LineKind::Dashed);
        }
    }

    #[test]
    fn category_colors() {
        let spec = LineSpec::parse("C3o-").unwrap();
        assert_eq!(spec.color, Some(PlotColor::Category(3)));
        assert_eq!(spec.marker, Some(MarkerKind::Circle));
        assert_eq!(spec.to_string(), "C3o-");

        // The digit after 'C' is never a marker.
        let spec = LineSpec::parse("C1").unwrap();
        assert_eq!(spec.marker, None);
        assert_eq!(spec.line, LineKind::Solid);

        assert!(LineSpec::parse("C").is_err());
        assert!(LineSpec::parse("Cx").is_err());
        assert!(LineSpec::parse("C0r").is_err());
    }

    #[test]
    fn display_round_trips_codes() {
        let spec: LineSpec = "mD:".parse().unwrap();
        assert_eq!(spec.to_string(), "mD:");
        assert_eq!(LineSpec::parse("x").unwrap().to_string(), "x");
    }

    #[test]
    fn default_color_only_fills_gaps() {
        let spec = LineSpec::parse("o-").unwrap().with_default_color(PlotColor::Red);
        assert_eq!(spec.color, Some(PlotColor::Red));
        let spec = LineSpec::parse("b").unwrap().with_default_color(PlotColor::Red);
        assert_eq!(spec.color, Some(PlotColor::Blue));
    }
}
