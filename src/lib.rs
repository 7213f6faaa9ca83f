//! shapes2d - parametric 2D shapes plotted in the terminal.
//!
//! shapes2d generates small point tables for a handful of canonical shapes
//! and draws them on a figure using matplotlib-style line format strings.
//! Figures are shown in an interactive terminal viewer or printed as text.
//!
//! # Features
//!
//! - Shape generators: x-axis segment, V, square and circle
//! - `draw_polyline` / `draw_polygon` with automatic color cycling
//! - Format strings such as `"ro-"`, `"g--"` or `"k:"`
//! - Equal-aspect Braille rendering with grid and legend
//! - Gruvbox color themes
//!
//! # Example
//!
//! ```no_run
//! use shapes2d::figure::{draw_polygon, Aspect, Figure};
//! use shapes2d::geometry::polygon_circle;
//! use shapes2d::present::{Presenter, TextPresenter};
//! use shapes2d::style::ColorCycle;
//!
//! let mut figure = Figure::new("circle");
//! let ax = figure.subplot(Aspect::Equal);
//! ax.grid(true);
//!
//! let mut colors = ColorCycle::new();
//! draw_polygon(&polygon_circle(10)?, ax, &mut colors, None)?;
//!
//! TextPresenter::new(std::io::stdout(), 80, 40).present(&figure)?;
//! # Ok::<(), shapes2d::Shapes2dError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod demo;
pub mod error;
pub mod figure;
pub mod geometry;
pub mod present;
pub mod style;
pub mod ui;
pub mod util;

pub use error::{Result, Shapes2dError};
