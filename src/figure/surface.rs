//! The drawing-surface seam.

use ndarray::ArrayView1;

use crate::error::Result;

/// Something points can be plotted on.
///
/// `spec` is a line format string (see [`LineSpec`](crate::style::LineSpec));
/// the surface parses it and resolves anything it leaves unspecified.
pub trait Surface {
    /// Plot the points `(x[i], y[i])` in order, connected as `spec` says.
    fn plot(&mut self, x: ArrayView1<'_, f64>, y: ArrayView1<'_, f64>, spec: &str) -> Result<()>;
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn plot(&mut self, x: ArrayView1<'_, f64>, y: ArrayView1<'_, f64>, spec: &str) -> Result<()> {
        (**self).plot(x, y, spec)
    }
}
