//! Array primitives shared by the unwrapper and the interpolators.

use itertools::Itertools;

/// Number of significant digits kept by [`fmod`].
pub const FMOD_SIGNIFICANT_DIGITS: i32 = 8;

/// Discrete difference `seq[i + 1] - seq[i]` of adjacent elements.
///
/// The output has one element fewer than the input; empty and
/// single-element inputs yield an empty vector.
pub fn diff(seq: &[f64]) -> Vec<f64> {
    seq.iter().tuple_windows().map(|(a, b)| b - a).collect()
}

/// Running total of `seq`, with `result[0] == seq[0]`.
pub fn cumsum(seq: &[f64]) -> Vec<f64> {
    seq.iter()
        .scan(0., |acc, &x| {
            *acc += x;
            Some(*acc)
        })
        .collect()
}

/// Floored remainder `a - floor(a / b) * b`.
///
/// The result takes the sign of `b` and is rounded to
/// [`FMOD_SIGNIFICANT_DIGITS`] significant digits so that values that
/// should land exactly on a boundary (eg. `-period / 2`) compare equal
/// downstream.
pub fn fmod(a: f64, b: f64) -> f64 {
    round_significant(a - (a / b).floor() * b, FMOD_SIGNIFICANT_DIGITS)
}

/// Round `x` to `digits` significant decimal digits.
pub(crate) fn round_significant(x: f64, digits: i32) -> f64 {
    if x == 0. || !x.is_finite() {
        return x;
    }
    let magnitude = x.abs().log10().floor() as i32;
    let shift = digits - 1 - magnitude;
    // 10^shift overflows for subnormal inputs; split the scaling in two.
    if shift > 300 {
        let head = 10f64.powi(300);
        let tail = 10f64.powi(shift - 300);
        return (x * head * tail).round() / tail / head;
    }
    if shift >= 0 {
        let factor = 10f64.powi(shift);
        (x * factor).round() / factor
    } else {
        let factor = 10f64.powi(-shift);
        (x / factor).round() * factor
    }
}
