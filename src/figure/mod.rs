//! Figures, axes and the drawing helpers that feed them.
//!
//! [`Axes`] is the drawing surface: it records plot calls with their line
//! style and remembers limits, aspect and grid settings. Nothing is rendered
//! until a [`Presenter`](crate::present::Presenter) is handed the finished
//! [`Figure`].

mod axes;
mod draw;
mod surface;

pub use axes::{Aspect, Axes, Figure, Line2D};
pub use draw::{draw_polygon, draw_polyline, AUTO_STYLE_SUFFIX};
pub use surface::Surface;
