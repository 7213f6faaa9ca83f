//! Evenly spaced sample sequences.

use ndarray::Array1;

/// Return `num` evenly spaced values over `[start, stop]`.
///
/// With `endpoint` the last value is exactly `stop`; without it the interval
/// is half-open and `stop` itself is never produced. `num == 0` yields an
/// empty array and `num == 1` yields `[start]`.
pub fn linspace(start: f64, stop: f64, num: usize, endpoint: bool) -> Array1<f64> {
    let divisions = if endpoint { num.saturating_sub(1) } else { num };
    if divisions == 0 {
        return Array1::from_elem(num, start);
    }

    let step = (stop - start) / divisions as f64;
    let mut values = Array1::from_iter((0..num).map(|i| start + i as f64 * step));
    if endpoint {
        values[num - 1] = stop;
    }
    values
}
