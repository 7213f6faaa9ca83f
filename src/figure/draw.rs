//! Drawing point tables on a surface.

use tracing::trace;

use super::Surface;
use crate::error::Result;
use crate::geometry::PointTable;
use crate::style::ColorCycle;

/// Marker and line appended to a cycled color when no style is given:
/// circular markers joined by solid lines.
pub const AUTO_STYLE_SUFFIX: &str = "o-";

/// Plot every point as a dot, joined in order by straight segments.
///
/// Without `linespec` the next color from `colors` is combined with
/// [`AUTO_STYLE_SUFFIX`] and the cycle advances; otherwise `linespec` is
/// passed through untouched and `colors` is left alone.
pub fn draw_polyline<S: Surface + ?Sized>(
    points: &PointTable,
    surface: &mut S,
    colors: &mut ColorCycle,
    linespec: Option<&str>,
) -> Result<()> {
    let spec = resolve_spec(colors, linespec);
    trace!(points = points.len(), spec = %spec, "draw polyline");
    surface.plot(points.x(), points.y(), &spec)
}

/// Like [`draw_polyline`], with a final segment back to the first point.
pub fn draw_polygon<S: Surface + ?Sized>(
    points: &PointTable,
    surface: &mut S,
    colors: &mut ColorCycle,
    linespec: Option<&str>,
) -> Result<()> {
    let spec = resolve_spec(colors, linespec);
    let closed = points.closed();
    trace!(points = closed.len(), spec = %spec, "draw polygon");
    surface.plot(closed.x(), closed.y(), &spec)
}

fn resolve_spec(colors: &mut ColorCycle, linespec: Option<&str>) -> String {
    match linespec {
        Some(spec) => spec.to_string(),
        None => format!("{}{}", colors.next_color(), AUTO_STYLE_SUFFIX),
    }
}
