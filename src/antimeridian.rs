//! Splitting geographic lines and polygons at the ±180° antimeridian.
//!
//! The pipeline is the same for both kinds: find the first longitude
//! jump, unwrap into continuous longitudes, split along the meridian
//! the geometry spills over, then shift every piece back into
//! `[-180, 180]`.

use geo::{Geometry, LineString, MultiLineString, MultiPolygon, Polygon};
use log::{debug, trace};

use crate::{
    crossing::detect_crossing,
    feature::unsupported,
    ops::{lon_extent, translate_ring_x},
    split::{split_line, split_poly},
    unwrap::{unwrap_lons, unwrap_polygon, LON_PERIOD},
    Feature, Result,
};

/// Split a geographic line feature at the antimeridian.
///
/// Returns a `MultiLineString` feature whose pieces all lie within
/// `[-180, 180]`, or the input feature itself if the line does not
/// cross the antimeridian.
pub fn split_line_string_antimeridian<P>(
    feature: Feature<Geometry<f64>, P>,
) -> Result<Feature<Geometry<f64>, P>> {
    let line = match &feature.geometry {
        Geometry::LineString(line) => line,
        other => return Err(unsupported("LineString", other)),
    };
    Ok(match split_line_at_antimeridian(line) {
        Some(parts) => feature.map_geometry(|_| Geometry::MultiLineString(parts)),
        None => feature,
    })
}

/// Split a geographic polygon feature at the antimeridian.
///
/// Only the exterior is inspected for a crossing. Returns a
/// `MultiPolygon` feature whose rings all lie within `[-180, 180]`, or
/// the input feature itself if no crossing is found or the split is
/// degenerate.
pub fn split_polygon_antimeridian<P>(
    feature: Feature<Geometry<f64>, P>,
) -> Result<Feature<Geometry<f64>, P>> {
    let poly = match &feature.geometry {
        Geometry::Polygon(poly) => poly,
        other => return Err(unsupported("Polygon", other)),
    };
    Ok(match split_polygon_at_antimeridian(poly) {
        Some(parts) => feature.map_geometry(|_| Geometry::MultiPolygon(parts)),
        None => feature,
    })
}

/// Split a line or polygon feature at the antimeridian, dispatching on
/// its geometry kind.
pub fn split_antimeridian<P>(
    feature: Feature<Geometry<f64>, P>,
) -> Result<Feature<Geometry<f64>, P>> {
    match feature.geometry {
        Geometry::LineString(_) => split_line_string_antimeridian(feature),
        Geometry::Polygon(_) => split_polygon_antimeridian(feature),
        ref other => Err(unsupported("LineString or Polygon", other)),
    }
}

fn split_line_at_antimeridian(line: &LineString<f64>) -> Option<MultiLineString<f64>> {
    let lons: Vec<f64> = line.0.iter().map(|c| c.x).collect();
    let crossing = detect_crossing(&lons)?;

    let unwrapped = LineString(unwrap_lons(&line.0));
    let parts = match split_line(&unwrapped, crossing.meridian) {
        Some(parts) => parts,
        None => {
            debug!("unwrapped line does not reach {}", crossing.meridian);
            return None;
        }
    };
    Some(MultiLineString(parts.0.iter().map(rewrap).collect()))
}

fn split_polygon_at_antimeridian(poly: &Polygon<f64>) -> Option<MultiPolygon<f64>> {
    let lons: Vec<f64> = poly.exterior().0.iter().map(|c| c.x).collect();
    let crossing = detect_crossing(&lons)?;

    let unwrapped = unwrap_polygon(poly);
    let parts = match split_poly(&unwrapped, crossing.meridian) {
        Some(parts) => parts,
        None => {
            debug!("unwrapped polygon does not straddle {}", crossing.meridian);
            return None;
        }
    };
    Some(MultiPolygon(
        parts
            .0
            .iter()
            .map(|part| {
                Polygon::new(
                    rewrap(part.exterior()),
                    part.interiors().iter().map(rewrap).collect(),
                )
            })
            .collect(),
    ))
}

/// Shift a ring or line piece by a full turn if it lies outside
/// `[-180, 180]`.
fn rewrap(ring: &LineString<f64>) -> LineString<f64> {
    match lon_extent(&ring.0) {
        Some((min, _)) if min < -180. => {
            trace!("rewrapping piece with min lon {min} by +360");
            translate_ring_x(ring, LON_PERIOD)
        }
        Some((_, max)) if max > 180. => {
            trace!("rewrapping piece with max lon {max} by -360");
            translate_ring_x(ring, -LON_PERIOD)
        }
        _ => ring.clone(),
    }
}
