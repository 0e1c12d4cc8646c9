//! Splitting lines and polygons along a vertical line `x = const`.

use geo::{Geometry, Line, LineString, MultiLineString, MultiPolygon, Polygon, Rect};
use log::debug;

use crate::{
    clip::{bbox_clip, line_split},
    feature::unsupported,
    Feature, Result,
};

/// Largest coordinate magnitude used for the splitter line and the
/// half-plane boxes (`2^53 - 1`).
pub const SAFE_EXTENT: f64 = 9_007_199_254_740_991.;

/// Split a line feature along the vertical line at `x`.
///
/// Returns a `MultiLineString` feature with the pieces in traversal
/// order, or the input feature itself if the line does not cross `x`.
/// Any geometry other than a `LineString` is rejected.
pub fn split_line_string<P>(
    feature: Feature<Geometry<f64>, P>,
    x: f64,
) -> Result<Feature<Geometry<f64>, P>> {
    let line = match &feature.geometry {
        Geometry::LineString(line) => line,
        other => return Err(unsupported("LineString", other)),
    };
    Ok(match split_line(line, x) {
        Some(parts) => feature.map_geometry(|_| Geometry::MultiLineString(parts)),
        None => feature,
    })
}

/// Split a polygon feature along the vertical line at `x`.
///
/// Returns a `MultiPolygon` feature holding the western and then the
/// eastern part, or the input feature itself if either side of `x` is
/// empty. Any geometry other than a `Polygon` is rejected.
pub fn split_polygon<P>(
    feature: Feature<Geometry<f64>, P>,
    x: f64,
) -> Result<Feature<Geometry<f64>, P>> {
    let poly = match &feature.geometry {
        Geometry::Polygon(poly) => poly,
        other => return Err(unsupported("Polygon", other)),
    };
    Ok(match split_poly(poly, x) {
        Some(parts) => feature.map_geometry(|_| Geometry::MultiPolygon(parts)),
        None => feature,
    })
}

pub(crate) fn split_line(line: &LineString<f64>, x: f64) -> Option<MultiLineString<f64>> {
    let splitter = Line::new((x, -SAFE_EXTENT), (x, SAFE_EXTENT));
    let mut pieces = line_split(line, &splitter);
    if pieces.is_empty() {
        debug!("line does not cross x = {x}");
        return None;
    }

    debug_assert!(pieces.len() >= 2);
    // Cut points lie on the splitter; pin them there exactly.
    let last = pieces.len() - 1;
    for (idx, piece) in pieces.iter_mut().enumerate() {
        if idx > 0 {
            if let Some(start) = piece.0.first_mut() {
                start.x = x;
            }
        }
        if idx < last {
            if let Some(end) = piece.0.last_mut() {
                end.x = x;
            }
        }
    }
    debug!("line split at x = {x} into {n} pieces", n = pieces.len());
    Some(MultiLineString(pieces))
}

pub(crate) fn split_poly(poly: &Polygon<f64>, x: f64) -> Option<MultiPolygon<f64>> {
    let west = bbox_clip(
        poly,
        Rect::new((-SAFE_EXTENT, -SAFE_EXTENT), (x, SAFE_EXTENT)),
    );
    let east = bbox_clip(
        poly,
        Rect::new((x, -SAFE_EXTENT), (SAFE_EXTENT, SAFE_EXTENT)),
    );

    match (west.exterior().0.is_empty(), east.exterior().0.is_empty()) {
        (false, false) => Some(MultiPolygon(vec![west, east])),
        (true, true) => {
            debug!("polygon has no part on either side of x = {x}");
            None
        }
        _ => {
            debug!("polygon lies on one side of x = {x}: degenerate split");
            None
        }
    }
}
