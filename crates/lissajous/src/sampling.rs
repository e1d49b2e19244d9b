//! Parameter-domain sampling.

use std::f64::consts::PI;

/// `count` evenly spaced values over `[start, stop]`, both endpoints included.
///
/// The last value is written as `stop` directly rather than accumulated, so
/// it lands exactly on the upper bound. With `count == 1` the only sample is
/// `start`; with `count == 0` the result is empty.
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            values[count - 1] = stop;
            values
        }
    }
}

/// The sampling domain `[-length·π, length·π]` with `count` samples.
#[inline]
pub fn domain(length: f64, count: usize) -> Vec<f64> {
    linspace(-length * PI, length * PI, count)
}
