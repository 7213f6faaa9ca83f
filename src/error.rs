//! Error types for shapes2d.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for shapes2d operations.
pub type Result<T> = std::result::Result<T, Shapes2dError>;

/// Errors that can occur in shapes2d.
#[derive(Debug, Error)]
pub enum Shapes2dError {
    /// A shape generator was given a negative density.
    #[error("Invalid density for {shape}: {k} (must be >= 0)")]
    InvalidDensity {
        /// Generator name.
        shape: &'static str,
        /// Rejected density.
        k: i64,
    },

    /// A line format string could not be parsed.
    #[error("Invalid line spec '{spec}': {reason}")]
    InvalidLineSpec {
        /// The format string as given.
        spec: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A color palette was empty or held an unknown color code.
    #[error("Invalid color palette '{palette}': {reason}")]
    InvalidPalette {
        /// The palette as given.
        palette: String,
        /// What was wrong with it.
        reason: String,
    },

    /// X and Y coordinate sequences differ in length.
    #[error("Coordinate length mismatch: {x_len} x values, {y_len} y values")]
    DimensionMismatch {
        /// Number of x values.
        x_len: usize,
        /// Number of y values.
        y_len: usize,
    },

    /// A point table did not have exactly two rows.
    #[error("Point table must have 2 rows, got {rows}")]
    InvalidShape {
        /// Rows actually present.
        rows: usize,
    },

    /// Axis limits were not finite or not increasing.
    #[error("Invalid {axis} limits: [{lo}, {hi}]")]
    InvalidLimits {
        /// `'x'` or `'y'`.
        axis: char,
        /// Lower limit.
        lo: f64,
        /// Upper limit.
        hi: f64,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal error.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl Shapes2dError {
    /// Create an InvalidDensity error.
    pub fn invalid_density(shape: &'static str, k: i64) -> Self {
        Self::InvalidDensity { shape, k }
    }

    /// Create an InvalidLineSpec error.
    pub fn invalid_line_spec(spec: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidLineSpec {
            spec: spec.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidPalette error.
    pub fn invalid_palette(palette: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPalette {
            palette: palette.into(),
            reason: reason.into(),
        }
    }

    /// Create a Terminal error from anything displayable.
    pub fn terminal(err: impl std::fmt::Display) -> Self {
        Self::Terminal(err.to_string())
    }
}
