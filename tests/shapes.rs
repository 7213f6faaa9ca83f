//! Properties of the shape generators across densities.

use std::f64::consts::PI;

use shapes2d::geometry::{
    polygon_circle, polygon_square, polyline_vee, polyline_x_axis, PointTable, ShapeKind,
};
use shapes2d::Shapes2dError;

const EPS: f64 = 1e-12;

fn xs(t: &PointTable) -> Vec<f64> {
    t.x().to_vec()
}

fn ys(t: &PointTable) -> Vec<f64> {
    t.y().to_vec()
}

fn strictly_increasing(v: &[f64]) -> bool {
    v.windows(2).all(|w| w[0] < w[1])
}

fn strictly_decreasing(v: &[f64]) -> bool {
    v.windows(2).all(|w| w[0] > w[1])
}

#[test]
fn x_axis_properties() {
    for k in 0..=20 {
        let t = polyline_x_axis(k).unwrap();
        let x = xs(&t);
        assert_eq!(t.len(), k as usize + 2);
        assert!(ys(&t).iter().all(|&y| y == 0.0));
        assert!(strictly_increasing(&x));
        assert_eq!(x[0], -1.0);
        assert_eq!(*x.last().unwrap(), 1.0);
    }
}

#[test]
fn vee_properties() {
    for k in 0..=20 {
        let t = polyline_vee(k).unwrap();
        let (x, y) = (xs(&t), ys(&t));
        let k = k as usize;
        assert_eq!(t.len(), 2 * k + 3);

        assert!(strictly_increasing(&x));
        assert_eq!(x[0], -1.0);
        assert_eq!(*x.last().unwrap(), 1.0);

        assert_eq!(y[0], 1.0);
        assert!(strictly_decreasing(&y[..=k + 1]), "left leg k={k}");
        assert_eq!(y[k + 1], -1.0, "vertex k={k}");
        assert!(strictly_increasing(&y[k + 1..]), "right leg k={k}");
        assert_eq!(*y.last().unwrap(), 1.0);
    }
}

#[test]
fn vee_vertex_sits_at_origin() {
    for k in 0..=10 {
        let t = polyline_vee(k).unwrap();
        let (vx, vy) = t.point(k as usize + 1).unwrap();
        assert!(vx.abs() < EPS);
        assert_eq!(vy, -1.0);
    }
}

#[test]
fn square_properties() {
    for k in 0..=20 {
        let t = polygon_square(k).unwrap();
        assert_eq!(t.len(), 4 * (k as usize + 1));

        // Every point on the boundary of the (±1, ±1) square.
        for (x, y) in t.points() {
            assert!(x.abs() <= 1.0 + EPS && y.abs() <= 1.0 + EPS);
            assert!(
                (x.abs() - 1.0).abs() < EPS || (y.abs() - 1.0).abs() < EPS,
                "({x}, {y}) is not on the boundary"
            );
        }

        // No repeated points.
        let pts: Vec<_> = t.points().collect();
        for (i, a) in pts.iter().enumerate() {
            for b in &pts[i + 1..] {
                assert!((a.0 - b.0).abs() > EPS || (a.1 - b.1).abs() > EPS);
            }
        }

        // Counter-clockwise: positive signed area.
        let closed = t.closed();
        let pts: Vec<_> = closed.points().collect();
        let area: f64 = pts
            .windows(2)
            .map(|w| w[0].0 * w[1].1 - w[1].0 * w[0].1)
            .sum::<f64>()
            / 2.0;
        assert!((area - 4.0).abs() < 1e-9, "area {area} k={k}");
    }
}

#[test]
fn square_starts_on_top_edge() {
    let t = polygon_square(3).unwrap();
    assert_eq!(t.point(0), Some((1.0, 1.0)));
    assert_eq!(t.point(1).map(|p| p.1), Some(1.0));
    assert!(t.point(1).unwrap().0 < 1.0);
}

#[test]
fn circle_properties() {
    for k in 0..=20 {
        let t = polygon_circle(k).unwrap();
        assert_eq!(t.len(), k as usize + 3);
        for (x, y) in t.points() {
            assert!((x * x + y * y - 1.0).abs() < 1e-9);
        }

        assert_eq!(t.point(0), Some((1.0, 0.0)));
        let angles: Vec<f64> = t
            .points()
            .map(|(x, y)| y.atan2(x).rem_euclid(2.0 * PI))
            .collect();
        assert!(strictly_increasing(&angles), "k={k}");
        assert!(*angles.last().unwrap() < 2.0 * PI);
    }
}

#[test]
fn negative_density_is_invalid_argument() {
    let generators: [fn(i64) -> shapes2d::Result<PointTable>; 4] =
        [polyline_x_axis, polyline_vee, polygon_square, polygon_circle];
    for generate in generators {
        assert!(matches!(
            generate(-3),
            Err(Shapes2dError::InvalidDensity { k: -3, .. })
        ));
    }
}

#[test]
fn shape_kind_dispatch() {
    assert!(!ShapeKind::XAxis.is_closed());
    assert!(!ShapeKind::Vee.is_closed());
    assert!(ShapeKind::Square.is_closed());
    assert!(ShapeKind::Circle.is_closed());
    assert_eq!(ShapeKind::Circle.generate(2).unwrap(), polygon_circle(2).unwrap());
}

#[test]
fn translation_repositions_shape() {
    let t = polygon_square(1).unwrap().translated(-2.5, -2.5);
    assert_eq!(t.bounds(), Some(((-3.5, -1.5), (-3.5, -1.5))));
}
