//! Phase unwrapping of angular sequences and of the longitude channel
//! of coordinates.
//!
//! Geographic longitudes jump by ~360° when a path crosses the
//! antimeridian. Unwrapping replaces such jumps by the equivalent small
//! step, producing "continuous" longitudes that may leave `[-180, 180]`.

use geo::{Coordinate, LineString, Polygon};
use log::{debug, trace};

use crate::{
    math::{cumsum, diff, fmod},
    ops::{lon_extent, translate_ring_x},
};

/// Period of longitudes in degrees.
pub const LON_PERIOD: f64 = 360.;

/// Period used by classic phase unwrapping (radians).
pub const DEFAULT_PERIOD: f64 = 2. * std::f64::consts::PI;

/// Remove wraparound discontinuities from an angular sequence.
///
/// Every step `d = seq[i + 1] - seq[i]` with `|d| >= period / 2` is
/// replaced by its representative in `(-period / 2, period / 2]`, and the
/// correction is carried forward to all later elements. The first
/// element is never changed and steps smaller than half a period are
/// left untouched.
///
/// ```rust
/// use geo_antimeridian::unwrap;
/// let seq = unwrap(&[179., -179., -179., 179., 179.], 360.);
/// assert_eq!(seq, vec![179., 181., 181., 179., 179.]);
/// ```
pub fn unwrap(seq: &[f64], period: f64) -> Vec<f64> {
    let diffs = diff(seq);
    let interval_high = period / 2.;
    let interval_low = -interval_high;

    let corrections: Vec<f64> = diffs
        .iter()
        .map(|&d| {
            if d.abs() < interval_high {
                return 0.;
            }
            let mut folded = fmod(d - interval_low, period) + interval_low;
            // Steps of exactly half a period keep their sign.
            if folded == interval_low && d > 0. {
                folded = interval_high;
            }
            folded - d
        })
        .collect();

    let offsets = cumsum(&corrections);
    seq.iter()
        .enumerate()
        .map(|(i, &x)| if i == 0 { x } else { x + offsets[i - 1] })
        .collect()
}

/// Unwrap the longitudes of a coordinate sequence with a 360° period.
///
/// Latitudes are passed through untouched.
pub fn unwrap_lons(coords: &[Coordinate<f64>]) -> Vec<Coordinate<f64>> {
    let lons: Vec<f64> = coords.iter().map(|c| c.x).collect();
    unwrap(&lons, LON_PERIOD)
        .into_iter()
        .zip(coords)
        .map(|(x, c)| Coordinate { x, y: c.y })
        .collect()
}

/// Unwrap every ring of a polygon body.
///
/// Rings are unwrapped independently. A ring whose unwrapped closing
/// point no longer matches its first point is closed again by appending
/// the first point. Ring 0 is the exterior and sets the reference
/// longitude envelope; any later ring (hole) lying below that envelope
/// is shifted by `+360`, or by `-360` if it lies above it, so holes stay
/// co-located with the exterior.
pub fn unwrap_rings(rings: &[LineString<f64>]) -> Vec<LineString<f64>> {
    let mut envelope: Option<(f64, f64)> = None;
    let mut result = Vec::with_capacity(rings.len());

    for (idx, ring) in rings.iter().enumerate() {
        let mut coords = unwrap_lons(&ring.0);
        if let (Some(&first), Some(&last)) = (coords.first(), coords.last()) {
            if first != last {
                trace!("re-closing ring {idx}: {first:?} != {last:?}");
                coords.push(first);
            }
        }
        let mut ring = LineString(coords);

        let extent = match lon_extent(&ring.0) {
            Some(extent) => extent,
            None => {
                result.push(ring);
                continue;
            }
        };

        match envelope {
            None => envelope = Some(extent),
            Some((outer_min, outer_max)) => {
                let (min, max) = extent;
                if min < outer_min {
                    debug!("hole {idx} below exterior ({min} < {outer_min}): shifting +360");
                    ring = translate_ring_x(&ring, LON_PERIOD);
                } else if max > outer_max {
                    debug!("hole {idx} above exterior ({max} > {outer_max}): shifting -360");
                    ring = translate_ring_x(&ring, -LON_PERIOD);
                }
            }
        }
        result.push(ring);
    }
    result
}

/// Unwrap the exterior and interiors of a polygon.
///
/// See [`unwrap_rings`].
pub fn unwrap_polygon(poly: &Polygon<f64>) -> Polygon<f64> {
    let rings: Vec<_> = std::iter::once(poly.exterior())
        .chain(poly.interiors())
        .cloned()
        .collect();
    let mut rings = unwrap_rings(&rings).into_iter();
    let exterior = rings.next().unwrap_or_else(|| LineString(vec![]));
    Polygon::new(exterior, rings.collect())
}
