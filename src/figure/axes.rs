//! Axes and figures.

use ndarray::{Array1, ArrayView1};
use tracing::debug;

use super::Surface;
use crate::error::{Result, Shapes2dError};
use crate::style::{ColorCycle, LineSpec, PlotColor};
use crate::util::PlotLayoutConfig;

/// Aspect handling for an axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Aspect {
    /// Stretch the data to fill the available area.
    #[default]
    Auto,
    /// One x unit is drawn as long as one y unit.
    Equal,
}

/// One recorded plot call.
#[derive(Debug, Clone, PartialEq)]
pub struct Line2D {
    /// X coordinates.
    pub x: Array1<f64>,
    /// Y coordinates.
    pub y: Array1<f64>,
    /// Resolved style; the color is always set.
    pub style: LineSpec,
    /// Legend label.
    pub label: Option<String>,
}

impl Line2D {
    /// Number of points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the line has no points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate over points in drawing order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// The resolved color.
    pub fn color(&self) -> PlotColor {
        self.style.color.unwrap_or(PlotColor::Blue)
    }

    /// Bounding box of the finite points.
    pub fn bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        self.points()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .fold(None, |acc, (x, y)| match acc {
                None => Some(((x, x), (y, y))),
                Some(((x0, x1), (y0, y1))) => {
                    Some(((x0.min(x), x1.max(x)), (y0.min(y), y1.max(y))))
                }
            })
    }
}

/// A single plotting area.
#[derive(Debug, Clone, Default)]
pub struct Axes {
    xlim: Option<(f64, f64)>,
    ylim: Option<(f64, f64)>,
    aspect: Aspect,
    grid: bool,
    title: Option<String>,
    lines: Vec<Line2D>,
    colors: ColorCycle,
}

impl Axes {
    /// Create empty axes with autoscaled limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the x range.
    pub fn set_xlim(&mut self, lo: f64, hi: f64) -> Result<()> {
        self.xlim = Some(check_limits('x', lo, hi)?);
        Ok(())
    }

    /// Fix the y range.
    pub fn set_ylim(&mut self, lo: f64, hi: f64) -> Result<()> {
        self.ylim = Some(check_limits('y', lo, hi)?);
        Ok(())
    }

    /// Set aspect handling.
    pub fn set_aspect(&mut self, aspect: Aspect) {
        self.aspect = aspect;
    }

    /// Turn grid lines on or off.
    pub fn grid(&mut self, on: bool) {
        self.grid = on;
    }

    /// Set the axes title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Aspect handling.
    pub fn aspect(&self) -> Aspect {
        self.aspect
    }

    /// Whether grid lines are drawn.
    pub fn grid_enabled(&self) -> bool {
        self.grid
    }

    /// Axes title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Recorded lines, in plot order.
    pub fn lines(&self) -> &[Line2D] {
        &self.lines
    }

    /// Plot with a legend label.
    pub fn plot_labeled(
        &mut self,
        x: ArrayView1<'_, f64>,
        y: ArrayView1<'_, f64>,
        spec: &str,
        label: impl Into<String>,
    ) -> Result<()> {
        self.record(x, y, spec, Some(label.into()))
    }

    /// Limits to draw: explicit ones where set, padded data bounds otherwise.
    pub fn view_limits(&self) -> ((f64, f64), (f64, f64)) {
        self.view_limits_with(&PlotLayoutConfig::default())
    }

    /// Like [`Axes::view_limits`], with explicit layout settings.
    pub fn view_limits_with(&self, config: &PlotLayoutConfig) -> ((f64, f64), (f64, f64)) {
        let data = self.data_bounds();
        let pad = |range: Option<(f64, f64)>| match range {
            Some((lo, hi)) if hi > lo => {
                let padding = (hi - lo) * config.autoscale_padding;
                (lo - padding, hi + padding)
            }
            // Degenerate range: center a unit window on it.
            Some((v, _)) => (v - 1.0, v + 1.0),
            None => (-1.0, 1.0),
        };

        let x = self.xlim.unwrap_or_else(|| pad(data.map(|d| d.0)));
        let y = self.ylim.unwrap_or_else(|| pad(data.map(|d| d.1)));
        (x, y)
    }

    /// Bounding box of every recorded line.
    pub fn data_bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        self.lines
            .iter()
            .filter_map(Line2D::bounds)
            .reduce(|((ax0, ax1), (ay0, ay1)), ((bx0, bx1), (by0, by1))| {
                ((ax0.min(bx0), ax1.max(bx1)), (ay0.min(by0), ay1.max(by1)))
            })
    }

    fn record(
        &mut self,
        x: ArrayView1<'_, f64>,
        y: ArrayView1<'_, f64>,
        spec: &str,
        label: Option<String>,
    ) -> Result<()> {
        if x.len() != y.len() {
            return Err(Shapes2dError::DimensionMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        let mut style = LineSpec::parse(spec)?;
        if style.color.is_none() {
            // Codes in the cycle are validated on construction.
            let code = self.colors.next_color();
            if let Some(color) = PlotColor::from_code(code) {
                style = style.with_default_color(color);
            }
        }

        debug!(points = x.len(), spec, style = %style, "recorded plot");
        self.lines.push(Line2D {
            x: x.to_owned(),
            y: y.to_owned(),
            style,
            label,
        });
        Ok(())
    }
}

impl Surface for Axes {
    fn plot(&mut self, x: ArrayView1<'_, f64>, y: ArrayView1<'_, f64>, spec: &str) -> Result<()> {
        self.record(x, y, spec, None)
    }
}

fn check_limits(axis: char, lo: f64, hi: f64) -> Result<(f64, f64)> {
    if lo.is_finite() && hi.is_finite() && lo < hi {
        Ok((lo, hi))
    } else {
        Err(Shapes2dError::InvalidLimits { axis, lo, hi })
    }
}

/// A window holding one axes.
#[derive(Debug, Clone)]
pub struct Figure {
    title: String,
    axes: Axes,
}

impl Figure {
    /// Create a figure with empty axes.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            axes: Axes::new(),
        }
    }

    /// Reset the figure to a single subplot with the given aspect and
    /// return it.
    pub fn subplot(&mut self, aspect: Aspect) -> &mut Axes {
        self.axes = Axes::new();
        self.axes.set_aspect(aspect);
        &mut self.axes
    }

    /// Window title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The axes.
    pub fn axes(&self) -> &Axes {
        &self.axes
    }

    /// The axes, mutably.
    pub fn axes_mut(&mut self) -> &mut Axes {
        &mut self.axes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn auto_colors_cycle() {
        let mut ax = Axes::new();
        let x = array![0.0, 1.0];
        for _ in 0..3 {
            ax.plot(x.view(), x.view(), "").unwrap();
        }
        let codes: Vec<String> = ax.lines().iter().map(|l| l.color().code()).collect();
        assert_eq!(codes, vec!["b", "g", "r"]);
    }

    #[test]
    fn explicit_color_does_not_advance_cycle() {
        let mut ax = Axes::new();
        let x = array![0.0, 1.0];
        ax.plot(x.view(), x.view(), "k--").unwrap();
        ax.plot(x.view(), x.view(), "o").unwrap();
        assert_eq!(ax.lines()[0].color(), PlotColor::Black);
        assert_eq!(ax.lines()[1].color(), PlotColor::Blue);
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let mut ax = Axes::new();
        let err = ax
            .plot(array![0.0, 1.0].view(), array![0.0].view(), "")
            .unwrap_err();
        assert!(matches!(err, Shapes2dError::DimensionMismatch { .. }));
        assert!(ax.lines().is_empty());
    }

    #[test]
    fn rejects_bad_spec_without_recording() {
        let mut ax = Axes::new();
        let x = array![0.0];
        assert!(ax.plot(x.view(), x.view(), "zz").is_err());
        assert!(ax.lines().is_empty());
    }

    #[test]
    fn rejects_bad_limits() {
        let mut ax = Axes::new();
        assert!(ax.set_xlim(1.0, -1.0).is_err());
        assert!(ax.set_ylim(0.0, f64::NAN).is_err());
        assert!(ax.set_xlim(-5.0, 5.0).is_ok());
    }

    #[test]
    fn explicit_limits_win() {
        let mut ax = Axes::new();
        ax.set_xlim(-5.0, 5.0).unwrap();
        ax.set_ylim(-4.0, 4.0).unwrap();
        ax.plot(array![100.0].view(), array![100.0].view(), "o").unwrap();
        assert_eq!(ax.view_limits(), ((-5.0, 5.0), (-4.0, 4.0)));
    }

    #[test]
    fn autoscale_pads_data() {
        let mut ax = Axes::new();
        ax.plot(array![0.0, 10.0].view(), array![0.0, 0.0].view(), "")
            .unwrap();
        let config = PlotLayoutConfig {
            autoscale_padding: 0.1,
            ..Default::default()
        };
        let ((x0, x1), (y0, y1)) = ax.view_limits_with(&config);
        assert_eq!((x0, x1), (-1.0, 11.0));
        // Flat data gets a unit window.
        assert_eq!((y0, y1), (-1.0, 1.0));
    }

    #[test]
    fn empty_axes_show_unit_box() {
        assert_eq!(Axes::new().view_limits(), ((-1.0, 1.0), (-1.0, 1.0)));
    }

    #[test]
    fn subplot_resets_axes() {
        let mut fig = Figure::new("test");
        fig.axes_mut()
            .plot(array![0.0].view(), array![0.0].view(), "o")
            .unwrap();
        let ax = fig.subplot(Aspect::Equal);
        assert!(ax.lines().is_empty());
        assert_eq!(fig.axes().aspect(), Aspect::Equal);
    }
}
