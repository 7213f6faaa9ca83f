//! Utility functions.
//!
//! This module provides layout settings and the tick arithmetic used when
//! laying out axes.

mod layout_config;
mod ticks;

pub use layout_config::{LayoutConfig, LegendLayoutConfig, PlotLayoutConfig};
pub use ticks::{grid_ticks, nice_step};
