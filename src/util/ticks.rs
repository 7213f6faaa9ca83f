//! Grid tick selection.

/// Smallest 1, 2 or 5 × 10ⁿ step that splits `span` into at most
/// `max_lines` intervals.
pub fn nice_step(span: f64, max_lines: usize) -> f64 {
    if !span.is_finite() || span <= 0.0 || max_lines == 0 {
        return 1.0;
    }

    let raw = span / max_lines as f64;
    let exponent = raw.log10().floor() as i32;
    // Divide for negative exponents so 0.1, 0.2, ... come out exact.
    let scale = |m: f64| {
        if exponent >= 0 {
            m * 10f64.powi(exponent)
        } else {
            m / 10f64.powi(-exponent)
        }
    };
    [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(scale)
        .find(|&step| step >= raw)
        .unwrap_or_else(|| scale(10.0))
}

/// Multiples of a nice step that fall inside `[lo, hi]`.
pub fn grid_ticks(lo: f64, hi: f64, max_lines: usize) -> Vec<f64> {
    if !(lo.is_finite() && hi.is_finite()) || hi <= lo {
        return Vec::new();
    }

    let step = nice_step(hi - lo, max_lines);
    let first = (lo / step - 1e-9).ceil() as i64;
    let last = (hi / step + 1e-9).floor() as i64;
    (first..=last)
        .map(|i| i as f64 * step)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_steps_for_ten_span() {
        assert_eq!(nice_step(10.0, 12), 1.0);
        assert_eq!(grid_ticks(-5.0, 5.0, 12).len(), 11);
    }

    #[test]
    fn coarser_steps_for_wide_spans() {
        assert_eq!(nice_step(100.0, 12), 10.0);
        assert_eq!(nice_step(30.0, 12), 5.0);
        assert_eq!(nice_step(20.0, 12), 2.0);
    }

    #[test]
    fn fractional_steps() {
        let step = nice_step(1.0, 4);
        assert!((step - 0.5).abs() < 1e-12);
    }

    #[test]
    fn degenerate_ranges() {
        assert!(grid_ticks(1.0, 1.0, 10).is_empty());
        assert!(grid_ticks(1.0, -1.0, 10).is_empty());
        assert_eq!(nice_step(0.0, 10), 1.0);
    }

    #[test]
    fn ticks_stay_inside_range() {
        let ticks = grid_ticks(-2.3, 7.9, 10);
        assert!(ticks.iter().all(|&t| (-2.3..=7.9).contains(&t)));
        assert_eq!(ticks.len(), 5);
        assert_eq!(ticks.first(), Some(&-2.0));
        assert_eq!(ticks.last(), Some(&6.0));
    }
}
