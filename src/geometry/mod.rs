//! Point tables and the parametric shapes built from them.
//!
//! Every generator maps a density `K` (the number of extra points along each
//! edge) to a fresh 2×N [`PointTable`] centered on the origin.

mod linspace;
mod points;
mod shapes;

pub use linspace::linspace;
pub use points::PointTable;
pub use shapes::{polygon_circle, polygon_square, polyline_vee, polyline_x_axis, ShapeKind};
