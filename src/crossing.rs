//! Detection of antimeridian crossings in a longitude sequence.

use log::debug;

use crate::math::diff;

/// First antimeridian crossing found in a longitude sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    /// Index `i` of the step `lons[i] -> lons[i + 1]` that jumps.
    pub index: usize,
    /// Meridian (`-180` or `180`) the unwrapped geometry must be split
    /// along.
    pub meridian: f64,
}

/// Scan `lons` for a step larger than 180° in magnitude.
///
/// Unwrapping keeps the first longitude fixed, so the direction of the
/// first jump tells which side the continuous geometry spills over: a
/// positive jump (west across `-180`) spills below `-180`, a negative
/// one spills above `180`. Returns `None` if no step jumps.
pub fn detect_crossing(lons: &[f64]) -> Option<Crossing> {
    let (index, step) = diff(lons)
        .into_iter()
        .enumerate()
        .find(|(_, d)| d.abs() > 180.)?;
    let meridian = if step > 180. { -180. } else { 180. };
    debug!("crossing at step {index} ({step}): split along {meridian}");
    Some(Crossing { index, meridian })
}
