//! Line styling: color codes, markers, line patterns and the color cycle.

mod color_cycle;
mod line_spec;

pub use color_cycle::{ColorCycle, DEFAULT_PALETTE};
pub use line_spec::{LineKind, LineSpec, MarkerKind, PlotColor};
