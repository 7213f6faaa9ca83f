//! Demonstration figures.
//!
//! The shape demo places one of each generated shape in its own quadrant.
//! The parabola demo plots a curve and its mirror image, once with the
//! surface's automatic color and once with an explicit style, the way a
//! script has to when nothing tracks colors for it.

use ndarray::Array1;
use tracing::info;

use crate::error::Result;
use crate::figure::{draw_polygon, draw_polyline, Aspect, Axes, Figure};
use crate::geometry::{linspace, ShapeKind};
use crate::present::Presenter;
use crate::style::ColorCycle;

/// Half-width of the square plotting window.
pub const VIEW_EXTENT: f64 = 5.0;

/// Distance of each shape's center from both axes.
pub const QUADRANT_OFFSET: f64 = 2.5;

/// Which demo to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    /// One of each shape in its own quadrant.
    Shapes(ShapeDensities),
    /// `y = 0.4x² - 0.8x - 4` and its reflection.
    Parabola,
}

/// Density used for each shape in the shape demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeDensities {
    /// Extra points on the x-axis segment.
    pub x_axis: i64,
    /// Extra points on each leg of the V.
    pub vee: i64,
    /// Extra points on each side of the square.
    pub square: i64,
    /// Extra points on the circle.
    pub circle: i64,
}

impl ShapeDensities {
    /// Density for `shape`.
    pub fn get(&self, shape: ShapeKind) -> i64 {
        match shape {
            ShapeKind::XAxis => self.x_axis,
            ShapeKind::Vee => self.vee,
            ShapeKind::Square => self.square,
            ShapeKind::Circle => self.circle,
        }
    }
}

impl Default for ShapeDensities {
    fn default() -> Self {
        Self {
            x_axis: 4,
            vee: 4,
            square: 3,
            circle: 10,
        }
    }
}

/// Where each shape is centered in the shape demo.
pub fn quadrant_offset(shape: ShapeKind) -> (f64, f64) {
    let d = QUADRANT_OFFSET;
    match shape {
        ShapeKind::XAxis => (d, d),
        ShapeKind::Vee => (-d, d),
        ShapeKind::Square => (-d, -d),
        ShapeKind::Circle => (d, -d),
    }
}

/// Fixed square window with equal aspect and a grid.
fn square_axes(figure: &mut Figure) -> Result<&mut Axes> {
    let ax = figure.subplot(Aspect::Equal);
    ax.set_xlim(-VIEW_EXTENT, VIEW_EXTENT)?;
    ax.set_ylim(-VIEW_EXTENT, VIEW_EXTENT)?;
    ax.grid(true);
    Ok(ax)
}

/// Build the shape demo figure, drawing colors from `colors`.
pub fn shapes_figure(densities: &ShapeDensities, colors: &mut ColorCycle) -> Result<Figure> {
    let mut figure = Figure::new("shapes2d");
    let ax = square_axes(&mut figure)?;
    ax.set_title("shapes");

    for shape in ShapeKind::ALL {
        let (dx, dy) = quadrant_offset(shape);
        let points = shape.generate(densities.get(shape))?.translated(dx, dy);
        if shape.is_closed() {
            draw_polygon(&points, ax, colors, None)?;
        } else {
            draw_polyline(&points, ax, colors, None)?;
        }
    }

    Ok(figure)
}

/// Build the parabola demo figure.
pub fn parabola_figure() -> Result<Figure> {
    let x = linspace(-VIEW_EXTENT, VIEW_EXTENT, 51, true);
    let y: Array1<f64> = x.mapv(|x| 0.4 * x * x - 0.8 * x - 4.0);
    let mirrored = -&y;

    let mut figure = Figure::new("shapes2d");
    let ax = square_axes(&mut figure)?;
    ax.set_title("parabola");

    // The axes pick the first color for us; the second is spelled out.
    ax.plot_labeled(x.view(), y.view(), "", "0.4x² - 0.8x - 4")?;
    ax.plot_labeled(x.view(), mirrored.view(), "g", "-(0.4x² - 0.8x - 4)")?;

    Ok(figure)
}

/// Build the chosen demo figure.
pub fn build(demo: Demo) -> Result<Figure> {
    match demo {
        Demo::Shapes(densities) => shapes_figure(&densities, &mut ColorCycle::new()),
        Demo::Parabola => parabola_figure(),
    }
}

/// Build the demo figure completely, then present it once.
pub fn run<P: Presenter + ?Sized>(demo: Demo, presenter: &mut P) -> Result<()> {
    let figure = build(demo)?;
    info!(
        ?demo,
        lines = figure.axes().lines().len(),
        "figure ready, presenting"
    );
    presenter.present(&figure)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadrants_are_distinct() {
        let offsets: Vec<_> = ShapeKind::ALL.iter().map(|&s| quadrant_offset(s)).collect();
        for (i, a) in offsets.iter().enumerate() {
            for b in &offsets[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn shape_demo_uses_cycle_in_order() {
        let mut colors = ColorCycle::new();
        let fig = shapes_figure(&ShapeDensities::default(), &mut colors).unwrap();
        let specs: Vec<String> = fig
            .axes()
            .lines()
            .iter()
            .map(|l| l.style.to_string())
            .collect();
        assert_eq!(specs, vec!["bo-", "go-", "ro-", "co-"]);
        assert_eq!(colors.position(), 4);
    }

    #[test]
    fn parabola_demo_colors() {
        let fig = parabola_figure().unwrap();
        let lines = fig.axes().lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].style.to_string(), "b-");
        assert_eq!(lines[1].style.to_string(), "g-");
        assert_eq!(lines[0].len(), 51);
        // Vertex of 0.4x² - 0.8x - 4 sits at x = 1.
        let (min_idx, _) = lines[0]
            .y
            .iter()
            .enumerate()
            .fold((0, f64::INFINITY), |(bi, bv), (i, &v)| if v < bv { (i, v) } else { (bi, bv) });
        assert!((lines[0].x[min_idx] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn negative_density_fails_before_drawing() {
        let densities = ShapeDensities {
            square: -1,
            ..Default::default()
        };
        let mut colors = ColorCycle::new();
        assert!(shapes_figure(&densities, &mut colors).is_err());
    }
}
