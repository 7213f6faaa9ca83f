//! Figure rendering - draws recorded lines onto a Braille canvas.

use super::formatters::{format_axis_label, truncate_to_width};
use super::ThemeColors;
use crate::figure::{Aspect, Figure, Line2D};
use crate::style::LineKind;
use crate::util::{grid_ticks, LayoutConfig};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine},
        Block, Borders, Clear, Paragraph, Widget,
    },
};
use unicode_width::UnicodeWidthStr;

type Segment = ((f64, f64), (f64, f64));

/// Widget that renders a [`Figure`].
#[derive(Debug, Clone)]
pub struct FigureWidget<'a> {
    figure: &'a Figure,
    colors: &'a ThemeColors,
    show_grid: bool,
    show_legend: bool,
    layout: LayoutConfig,
}

impl<'a> FigureWidget<'a> {
    /// Create a widget using the figure's own grid setting.
    pub fn new(figure: &'a Figure, colors: &'a ThemeColors) -> Self {
        Self {
            figure,
            colors,
            show_grid: figure.axes().grid_enabled(),
            show_legend: true,
            layout: LayoutConfig::default(),
        }
    }

    /// Override grid visibility.
    pub fn show_grid(mut self, on: bool) -> Self {
        self.show_grid = on;
        self
    }

    /// Toggle the legend.
    pub fn show_legend(mut self, on: bool) -> Self {
        self.show_legend = on;
        self
    }
}

impl Widget for FigureWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let axes = self.figure.axes();
        let ((x0, x1), (y0, y1)) = axes.view_limits_with(&self.layout.plot);
        let colors = self.colors;

        let title = match axes.title() {
            Some(t) => format!(" {} - {} ", self.figure.title(), t),
            None => format!(" {} ", self.figure.title()),
        };
        let limits = format!(
            " x: [{}, {}]  y: [{}, {}] ",
            format_axis_label(x0),
            format_axis_label(x1),
            format_axis_label(y0),
            format_axis_label(y1)
        );

        let block = Block::default()
            .title(Span::styled(
                title,
                Style::default()
                    .fg(colors.heading)
                    .add_modifier(Modifier::BOLD),
            ))
            .title_bottom(Line::from(Span::styled(
                limits,
                Style::default().fg(colors.text),
            )))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border))
            .style(Style::default().bg(colors.bg));

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let plot_area = match axes.aspect() {
            Aspect::Equal => fit_equal_aspect(inner, x1 - x0, y1 - y0),
            Aspect::Auto => inner,
        };

        let grid = if self.show_grid {
            let max = self.layout.plot.max_grid_lines;
            (grid_ticks(x0, x1, max), grid_ticks(y0, y1, max))
        } else {
            (Vec::new(), Vec::new())
        };
        let dash_unit = (x1 - x0).max(y1 - y0) * self.layout.plot.dash_fraction;

        Canvas::default()
            .marker(Marker::Braille)
            .background_color(colors.bg)
            .x_bounds([x0, x1])
            .y_bounds([y0, y1])
            .paint(|ctx| {
                for &x in &grid.0 {
                    ctx.draw(&CanvasLine::new(x, y0, x, y1, colors.grid));
                }
                for &y in &grid.1 {
                    ctx.draw(&CanvasLine::new(x0, y, x1, y, colors.grid));
                }
                ctx.layer();

                for line in axes.lines() {
                    paint_line(ctx, line, colors, ((x0, x1), (y0, y1)), dash_unit);
                }
            })
            .render(plot_area, buf);

        if self.show_legend {
            render_legend(axes.lines(), plot_area, buf, colors, &self.layout);
        }
    }
}

fn paint_line(
    ctx: &mut Context<'_>,
    line: &Line2D,
    colors: &ThemeColors,
    view: ((f64, f64), (f64, f64)),
    dash_unit: f64,
) {
    let color = colors.plot_color(line.color());
    let points: Vec<(f64, f64)> = line.points().collect();

    if line.style.line != LineKind::None {
        let pattern = line.style.line.pattern();
        for pair in points.windows(2) {
            // Dash only what is visible.
            let Some((a, b)) = clip_segment(pair[0], pair[1], view.0, view.1) else {
                continue;
            };
            for ((ax, ay), (bx, by)) in dash_segments(a, b, pattern, dash_unit) {
                ctx.draw(&CanvasLine::new(ax, ay, bx, by, color));
            }
        }
    }

    if let Some(marker) = line.style.marker {
        for &(x, y) in &points {
            ctx.print(x, y, Span::styled(marker.glyph(), Style::default().fg(color)));
        }
    }
}

fn render_legend(
    lines: &[Line2D],
    plot_area: Rect,
    buf: &mut Buffer,
    colors: &ThemeColors,
    layout: &LayoutConfig,
) {
    let entries: Vec<(String, &Line2D)> = lines
        .iter()
        .filter_map(|l| {
            l.label
                .as_deref()
                .map(|label| (truncate_to_width(label, layout.legend.max_label_width), l))
        })
        .take(layout.legend.max_entries)
        .collect();
    if entries.is_empty() {
        return;
    }

    let label_width = entries.iter().map(|(label, _)| label.width()).max().unwrap_or(0);
    // Swatch, space, label, two borders.
    let width = (label_width + 5) as u16;
    let height = entries.len() as u16 + 2;
    if width > plot_area.width || height > plot_area.height {
        return;
    }
    let area = Rect::new(
        plot_area.x + plot_area.width - width,
        plot_area.y,
        width,
        height,
    );

    let text: Vec<Line<'_>> = entries
        .iter()
        .map(|(label, line)| {
            let swatch = match (line.style.line, line.style.marker) {
                (LineKind::None, Some(marker)) => marker.glyph(),
                (LineKind::None, None) => "•",
                _ => "──",
            };
            Line::from(vec![
                Span::styled(
                    format!("{:<2}", swatch),
                    Style::default().fg(colors.plot_color(line.color())),
                ),
                Span::raw(" "),
                Span::styled(label.clone(), Style::default().fg(colors.text)),
            ])
        })
        .collect();

    Clear.render(area, buf);
    Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border)),
        )
        .style(Style::default().bg(colors.bg))
        .render(area, buf);
}

/// Largest centered rectangle inside `area` where one x unit and one y unit
/// cover the same physical length.
///
/// Terminal cells are about twice as tall as they are wide, so a square
/// region of data spans twice as many columns as rows.
pub fn fit_equal_aspect(area: Rect, x_span: f64, y_span: f64) -> Rect {
    if !(x_span > 0.0 && y_span > 0.0) || area.width == 0 || area.height == 0 {
        return area;
    }

    let ratio = x_span / y_span;
    let wanted_width = 2.0 * f64::from(area.height) * ratio;
    let (width, height) = if wanted_width <= f64::from(area.width) {
        (wanted_width.round().max(1.0) as u16, area.height)
    } else {
        let h = f64::from(area.width) / (2.0 * ratio);
        (area.width, h.round().clamp(1.0, f64::from(area.height)) as u16)
    };

    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Clip the segment `a`→`b` to the rectangle `xs` × `ys` (Liang-Barsky).
///
/// Returns `None` when no part of the segment lies inside.
pub fn clip_segment(
    a: (f64, f64),
    b: (f64, f64),
    xs: (f64, f64),
    ys: (f64, f64),
) -> Option<Segment> {
    if [a.0, a.1, b.0, b.1].iter().any(|v| v.is_nan()) {
        return None;
    }
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    for (p, q) in [
        (-dx, a.0 - xs.0),
        (dx, xs.1 - a.0),
        (-dy, a.1 - ys.0),
        (dy, ys.1 - a.1),
    ] {
        if p == 0.0 {
            // Parallel to this edge.
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }
        if t0 > t1 {
            return None;
        }
    }

    let at = |t: f64| (a.0 + dx * t, a.1 + dy * t);
    Some((at(t0), at(t1)))
}

/// Split the segment `a`→`b` into the visible pieces of a dash pattern.
///
/// `pattern` alternates on and off lengths in multiples of `unit`; an empty
/// pattern yields the whole segment.
pub fn dash_segments(a: (f64, f64), b: (f64, f64), pattern: &[f64], unit: f64) -> Vec<Segment> {
    let length = (b.0 - a.0).hypot(b.1 - a.1);
    if pattern.is_empty() || !(unit > 0.0 && length > 0.0) {
        return vec![(a, b)];
    }

    let at = |t: f64| (a.0 + (b.0 - a.0) * t / length, a.1 + (b.1 - a.1) * t / length);
    let mut pieces = Vec::new();
    let mut t = 0.0;
    let mut i = 0;
    while t < length {
        let end = (t + pattern[i % pattern.len()] * unit).min(length);
        if i % 2 == 0 {
            pieces.push((at(t), at(end)));
        }
        t = end;
        i += 1;
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_aspect_square_data_in_wide_area() {
        let rect = fit_equal_aspect(Rect::new(0, 0, 100, 20), 10.0, 10.0);
        assert_eq!(rect, Rect::new(30, 0, 40, 20));
    }

    #[test]
    fn equal_aspect_square_data_in_tall_area() {
        let rect = fit_equal_aspect(Rect::new(2, 1, 40, 40), 10.0, 10.0);
        assert_eq!(rect, Rect::new(2, 11, 40, 20));
    }

    #[test]
    fn equal_aspect_exact_fit() {
        let area = Rect::new(0, 0, 80, 40);
        assert_eq!(fit_equal_aspect(area, 10.0, 10.0), area);
    }

    #[test]
    fn solid_is_one_piece() {
        let pieces = dash_segments((0.0, 0.0), (1.0, 0.0), &[], 0.1);
        assert_eq!(pieces, vec![((0.0, 0.0), (1.0, 0.0))]);
    }

    #[test]
    fn dashes_alternate() {
        let pieces = dash_segments((0.0, 0.0), (10.0, 0.0), &[3.0, 2.0], 1.0);
        assert_eq!(
            pieces,
            vec![
                ((0.0, 0.0), (3.0, 0.0)),
                ((5.0, 0.0), (8.0, 0.0)),
            ]
        );
    }

    #[test]
    fn clip_trims_to_view_edge() {
        let ((ax, ay), (bx, by)) =
            clip_segment((0.0, 0.0), (1e7, 0.0), (-5.0, 5.0), (-5.0, 5.0)).unwrap();
        assert_eq!((ax, ay), (0.0, 0.0));
        assert!((bx - 5.0).abs() < 1e-9 && by == 0.0);

        let diagonal = clip_segment((-10.0, -10.0), (10.0, 10.0), (-5.0, 5.0), (-5.0, 5.0));
        assert_eq!(diagonal, Some(((-5.0, -5.0), (5.0, 5.0))));
    }

    #[test]
    fn clip_keeps_inside_segment() {
        let seg = clip_segment((-1.0, 2.0), (3.0, -4.0), (-5.0, 5.0), (-5.0, 5.0));
        assert_eq!(seg, Some(((-1.0, 2.0), (3.0, -4.0))));
    }

    #[test]
    fn clip_drops_segment_outside_view() {
        assert_eq!(
            clip_segment((10.0, 10.0), (1e6, 10.0), (-5.0, 5.0), (-5.0, 5.0)),
            None
        );
        assert_eq!(
            clip_segment((6.0, -100.0), (6.0, 100.0), (-5.0, 5.0), (-5.0, 5.0)),
            None
        );
        assert_eq!(
            clip_segment((f64::NAN, 0.0), (1.0, 0.0), (-5.0, 5.0), (-5.0, 5.0)),
            None
        );
    }

    #[test]
    fn long_dashed_segment_is_bounded_after_clipping() {
        let unit = 10.0 * 0.012;
        let (a, b) = clip_segment((0.0, 0.0), (1e6, 0.0), (-5.0, 5.0), (-5.0, 5.0)).unwrap();
        let pieces = dash_segments(a, b, &[3.0, 2.0], unit);
        // 5 units of view at 0.6 per dash period.
        assert!(pieces.len() <= 10, "got {} pieces", pieces.len());
        assert!(pieces.iter().all(|&(_, (x, _))| x <= 5.0 + 1e-9));
    }

    #[test]
    fn zero_length_segment_survives() {
        let pieces = dash_segments((1.0, 1.0), (1.0, 1.0), &[3.0, 2.0], 1.0);
        assert_eq!(pieces.len(), 1);
    }
}
