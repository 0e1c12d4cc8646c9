//! Planar clip and split primitives used by the vertical splitter.
//!
//! An axis-aligned Sutherland-Hodgman clip for polygons and a
//! segment-wise cut for lines. Both assume the input is a simple
//! geometry.

use geo::{
    line_intersection::{line_intersection, LineIntersection},
    winding_order::Winding,
    Coordinate, Line, LineString, Polygon, Rect,
};
use log::trace;

/// Restrict a polygon to an axis-aligned box.
///
/// Every ring is clipped independently. Rings that collapse to less than
/// a closed triangle, or to a zero-area sliver along the box, are
/// dropped; if the exterior is dropped, the result is a polygon with an
/// empty exterior and no interiors.
pub fn bbox_clip(poly: &Polygon<f64>, bbox: Rect<f64>) -> Polygon<f64> {
    let exterior = clip_ring(poly.exterior(), bbox);
    if !has_area(&exterior) {
        return Polygon::new(LineString(vec![]), vec![]);
    }
    let interiors = poly
        .interiors()
        .iter()
        .map(|ring| clip_ring(ring, bbox))
        .filter(has_area)
        .collect();
    Polygon::new(exterior, interiors)
}

fn clip_ring(ring: &LineString<f64>, bbox: Rect<f64>) -> LineString<f64> {
    let (min, max) = (bbox.min(), bbox.max());

    let mut coords = clip_against_edge(&ring.0, |c| c.x >= min.x, |a, b| at_x(a, b, min.x));
    coords = clip_against_edge(&coords, |c| c.x <= max.x, |a, b| at_x(a, b, max.x));
    coords = clip_against_edge(&coords, |c| c.y >= min.y, |a, b| at_y(a, b, min.y));
    coords = clip_against_edge(&coords, |c| c.y <= max.y, |a, b| at_y(a, b, max.y));
    coords.dedup();

    if let (Some(&first), Some(&last)) = (coords.first(), coords.last()) {
        if first != last {
            coords.push(first);
        }
    }
    trace!("clipped ring: {} -> {} coords", ring.0.len(), coords.len());
    LineString(coords)
}

fn has_area(ring: &LineString<f64>) -> bool {
    ring.0.len() >= 4 && ring.winding_order().is_some()
}

/// One Sutherland-Hodgman pass: keep the vertices on the inner side of
/// an edge, inserting the crossing point wherever the ring passes
/// through it.
fn clip_against_edge<F, I>(vertices: &[Coordinate<f64>], inside: F, intersect: I) -> Vec<Coordinate<f64>>
where
    F: Fn(&Coordinate<f64>) -> bool,
    I: Fn(&Coordinate<f64>, &Coordinate<f64>) -> Coordinate<f64>,
{
    let mut output = Vec::with_capacity(vertices.len() + 2);
    for (idx, current) in vertices.iter().enumerate() {
        let next = &vertices[(idx + 1) % vertices.len()];
        match (inside(current), inside(next)) {
            (true, true) => output.push(*current),
            (true, false) => {
                output.push(*current);
                output.push(intersect(current, next));
            }
            (false, true) => output.push(intersect(current, next)),
            (false, false) => {}
        }
    }
    output
}

fn at_x(a: &Coordinate<f64>, b: &Coordinate<f64>, x: f64) -> Coordinate<f64> {
    let t = (x - a.x) / (b.x - a.x);
    Coordinate {
        x,
        y: a.y + t * (b.y - a.y),
    }
}

fn at_y(a: &Coordinate<f64>, b: &Coordinate<f64>, y: f64) -> Coordinate<f64> {
    let t = (y - a.y) / (b.y - a.y);
    Coordinate {
        x: a.x + t * (b.x - a.x),
        y,
    }
}

/// Cut a line at every point where it meets `splitter`.
///
/// Pieces are returned in the order they are traversed along `line`;
/// consecutive pieces share the cut point. Touching the splitter only at
/// the line's own end points does not cut it. Returns an empty vector if
/// no cut was made.
pub fn line_split(line: &LineString<f64>, splitter: &Line<f64>) -> Vec<LineString<f64>> {
    let first = match line.0.first() {
        Some(&first) => first,
        None => return vec![],
    };
    let last_segment = line.0.len().saturating_sub(2);

    let mut pieces = vec![];
    let mut current = vec![first];
    for (idx, segment) in line.lines().enumerate() {
        let cut = match line_intersection(segment, *splitter) {
            // A hit on the segment start was already handled as the end
            // of the previous segment (or is the start of the line).
            Some(LineIntersection::SinglePoint { intersection, .. })
                if intersection != segment.start =>
            {
                Some(intersection)
            }
            _ => None,
        };

        match cut {
            Some(point) => {
                current.push(point);
                let at_end = point == segment.end;
                if !(at_end && idx == last_segment) {
                    trace!("cutting line at {point:?}");
                    pieces.push(LineString(std::mem::replace(&mut current, vec![point])));
                }
                if !at_end {
                    current.push(segment.end);
                }
            }
            None => current.push(segment.end),
        }
    }

    if pieces.is_empty() {
        return vec![];
    }
    pieces.push(LineString(current));
    pieces
}
