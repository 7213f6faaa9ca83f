//! Parametric shape generators.
//!
//! Each generator takes a density `k` and returns the shape's vertices as a
//! [`PointTable`]. Shapes fit inside the square with corners (±1, ±1).
//! Negative densities are rejected with [`Shapes2dError::InvalidDensity`].

use std::f64::consts::PI;
use std::fmt;

use ndarray::{concatenate, Array1, Axis};
use tracing::debug;

use super::{linspace, PointTable};
use crate::error::{Result, Shapes2dError};

/// The shapes this module can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Segment along the x axis.
    XAxis,
    /// V shape.
    Vee,
    /// Square with side 2.
    Square,
    /// Unit circle.
    Circle,
}

impl ShapeKind {
    /// All shapes, in demo order.
    pub const ALL: [ShapeKind; 4] = [Self::XAxis, Self::Vee, Self::Square, Self::Circle];

    /// Generate this shape with density `k`.
    pub fn generate(self, k: i64) -> Result<PointTable> {
        match self {
            Self::XAxis => polyline_x_axis(k),
            Self::Vee => polyline_vee(k),
            Self::Square => polygon_square(k),
            Self::Circle => polygon_circle(k),
        }
    }

    /// Whether the shape is drawn as a closed outline.
    pub fn is_closed(self) -> bool {
        matches!(self, Self::Square | Self::Circle)
    }

    /// Get display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::XAxis => "x-axis",
            Self::Vee => "vee",
            Self::Square => "square",
            Self::Circle => "circle",
        }
    }

    /// Number of points produced for density `k`.
    pub fn point_count(self, k: usize) -> usize {
        match self {
            Self::XAxis => k + 2,
            Self::Vee => 2 * k + 3,
            Self::Square => 4 * (k + 1),
            Self::Circle => k + 3,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn density(shape: ShapeKind, k: i64) -> Result<usize> {
    usize::try_from(k).map_err(|_| Shapes2dError::invalid_density(shape.name(), k))
}

/// Points along the x axis from (-1, 0) to (1, 0), with `k` extra points
/// equally spaced in between.
pub fn polyline_x_axis(k: i64) -> Result<PointTable> {
    let k = density(ShapeKind::XAxis, k)?;
    let n = k + 2;

    let x = linspace(-1.0, 1.0, n, true);
    let y = Array1::zeros(n);

    debug!(k, points = n, "generated x-axis polyline");
    PointTable::from_xy(x, y)
}

/// A V shape filling the unit square, with `k` points in the middle of each
/// leg.
///
/// The left leg stops short of the vertex so the vertex appears once.
pub fn polyline_vee(k: i64) -> Result<PointTable> {
    let k = density(ShapeKind::Vee, k)?;

    let x = linspace(-1.0, 1.0, 2 * k + 3, true);
    let left_y = linspace(1.0, -1.0, k + 1, false);
    let right_y = linspace(-1.0, 1.0, k + 2, true);
    let y = join(&[left_y, right_y]);

    debug!(k, points = x.len(), "generated vee polyline");
    PointTable::from_xy(x, y)
}

/// Square of side 2 centered on the origin, traced counter-clockwise from
/// the top-right corner, with `k` points in the middle of each side.
pub fn polygon_square(k: i64) -> Result<PointTable> {
    let k = density(ShapeKind::Square, k)?;
    let side = k + 1;

    // Each side drops its trailing corner; the next side starts there.
    let x = join(&[
        linspace(1.0, -1.0, side, false),
        Array1::from_elem(side, -1.0),
        linspace(-1.0, 1.0, side, false),
        Array1::from_elem(side, 1.0),
    ]);
    let y = join(&[
        Array1::from_elem(side, 1.0),
        linspace(1.0, -1.0, side, false),
        Array1::from_elem(side, -1.0),
        linspace(-1.0, 1.0, side, false),
    ]);

    debug!(k, points = x.len(), "generated square polygon");
    PointTable::from_xy(x, y)
}

/// `k + 3` points equally spaced by angle around the unit circle, starting
/// at angle 0.
pub fn polygon_circle(k: i64) -> Result<PointTable> {
    let k = density(ShapeKind::Circle, k)?;

    let angles = linspace(0.0, 2.0 * PI, k + 3, false);
    let x = angles.mapv(f64::cos);
    let y = angles.mapv(f64::sin);

    debug!(k, points = x.len(), "generated circle polygon");
    PointTable::from_xy(x, y)
}

fn join(parts: &[Array1<f64>]) -> Array1<f64> {
    let views: Vec<_> = parts.iter().map(|p| p.view()).collect();
    // 1-D arrays always concatenate along their only axis.
    concatenate(Axis(0), &views).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_shapes_at_zero_density() {
        assert_eq!(polyline_x_axis(0).unwrap().len(), 2);
        assert_eq!(polyline_vee(0).unwrap().len(), 3);
        assert_eq!(polygon_square(0).unwrap().len(), 4);
        assert_eq!(polygon_circle(0).unwrap().len(), 3);
    }

    #[test]
    fn vee_zero_density_is_three_corners() {
        let vee = polyline_vee(0).unwrap();
        assert_eq!(
            vee.points().collect::<Vec<_>>(),
            vec![(-1.0, 1.0), (0.0, -1.0), (1.0, 1.0)]
        );
    }

    #[test]
    fn square_zero_density_is_four_corners() {
        let square = polygon_square(0).unwrap();
        assert_eq!(
            square.points().collect::<Vec<_>>(),
            vec![(1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)]
        );
    }

    #[test]
    fn negative_density_is_rejected() {
        for shape in ShapeKind::ALL {
            let err = shape.generate(-1).unwrap_err();
            match err {
                Shapes2dError::InvalidDensity { shape: name, k } => {
                    assert_eq!(name, shape.name());
                    assert_eq!(k, -1);
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn point_count_matches_generators() {
        for shape in ShapeKind::ALL {
            for k in 0..6 {
                let table = shape.generate(k as i64).unwrap();
                assert_eq!(table.len(), shape.point_count(k), "{shape} k={k}");
            }
        }
    }
}
