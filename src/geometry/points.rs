//! The 2×N point table.

use ndarray::{arr2, concatenate, s, stack, Array1, Array2, ArrayView1, Axis};

use crate::error::{Result, Shapes2dError};

/// Ordered points in the plane: row 0 holds x, row 1 holds y.
///
/// Column `i` is the `i`-th point in drawing order. The two-row shape is
/// checked on construction and the table is never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PointTable {
    data: Array2<f64>,
}

impl PointTable {
    /// Wrap a 2×N array.
    pub fn new(data: Array2<f64>) -> Result<Self> {
        if data.nrows() != 2 {
            return Err(Shapes2dError::InvalidShape { rows: data.nrows() });
        }
        Ok(Self { data })
    }

    /// Build a table from parallel x and y sequences.
    pub fn from_xy(x: Array1<f64>, y: Array1<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(Shapes2dError::DimensionMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        let data = stack(Axis(0), &[x.view(), y.view()])
            .map_err(|_| Shapes2dError::DimensionMismatch {
                x_len: x.len(),
                y_len: y.len(),
            })?;
        Ok(Self { data })
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.data.ncols()
    }

    /// Whether the table holds no points.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// X coordinates.
    pub fn x(&self) -> ArrayView1<'_, f64> {
        self.data.row(0)
    }

    /// Y coordinates.
    pub fn y(&self) -> ArrayView1<'_, f64> {
        self.data.row(1)
    }

    /// Point `i` as an `(x, y)` pair.
    pub fn point(&self, i: usize) -> Option<(f64, f64)> {
        (i < self.len()).then(|| (self.data[[0, i]], self.data[[1, i]]))
    }

    /// Iterate over points in drawing order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x().into_iter().copied().zip(self.y().into_iter().copied())
    }

    /// A copy shifted by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        let offset = arr2(&[[dx], [dy]]);
        Self {
            data: &self.data + &offset,
        }
    }

    /// A copy with the first point repeated at the end.
    pub fn closed(&self) -> Self {
        if self.is_empty() {
            return self.clone();
        }
        let first = self.data.slice(s![.., 0..1]);
        let data = concatenate(Axis(1), &[self.data.view(), first])
            .unwrap_or_else(|_| self.data.clone());
        Self { data }
    }

    /// Axis-aligned bounding box as `((x_min, x_max), (y_min, y_max))`.
    pub fn bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        if self.is_empty() {
            return None;
        }
        Some((min_max(self.x()), min_max(self.y())))
    }
}

fn min_max(values: ArrayView1<'_, f64>) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| {
            (min.min(v), max.max(v))
        })
}
