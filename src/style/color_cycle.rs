//! Cycling palette for plots drawn without an explicit color.

use super::PlotColor;
use crate::error::{Result, Shapes2dError};

/// Default palette: blue, green, red, cyan, magenta, yellow, black.
pub const DEFAULT_PALETTE: &str = "bgrcmyk";

/// A finite palette of color codes with a current position.
///
/// Each call to [`ColorCycle::next_color`] returns the color at the current
/// position and advances it, wrapping at the end of the palette. The cycle
/// is an ordinary owned value, so separate figures keep separate state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorCycle {
    palette: Vec<char>,
    index: usize,
}

impl ColorCycle {
    /// Create a cycle over [`DEFAULT_PALETTE`].
    pub fn new() -> Self {
        Self {
            palette: DEFAULT_PALETTE.chars().collect(),
            index: 0,
        }
    }

    /// Create a cycle over a custom palette of color codes.
    pub fn with_palette(palette: &str) -> Result<Self> {
        if palette.is_empty() {
            return Err(Shapes2dError::invalid_palette(palette, "palette is empty"));
        }
        if let Some(bad) = palette.chars().find(|&c| PlotColor::from_code(c).is_none()) {
            return Err(Shapes2dError::invalid_palette(
                palette,
                format!("unknown color code '{}'", bad),
            ));
        }
        Ok(Self {
            palette: palette.chars().collect(),
            index: 0,
        })
    }

    /// Return the current color code and advance.
    pub fn next_color(&mut self) -> char {
        let color = self.palette[self.index];
        self.index = (self.index + 1) % self.palette.len();
        color
    }

    /// Return the current color code without advancing.
    pub fn peek(&self) -> char {
        self.palette[self.index]
    }

    /// Current position in the palette.
    pub fn position(&self) -> usize {
        self.index
    }

    /// Palette length.
    pub fn len(&self) -> usize {
        self.palette.len()
    }

    /// Always false; a cycle cannot be built from an empty palette.
    pub fn is_empty(&self) -> bool {
        self.palette.is_empty()
    }
}

impl Default for ColorCycle {
    fn default() -> Self {
        Self::new()
    }
}
