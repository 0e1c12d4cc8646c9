use geo::Geometry;

use crate::Error;

/// A geometry paired with a caller-defined properties payload.
///
/// The transforms in this crate replace the geometry and move the
/// properties over untouched; they are never inspected.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature<G, P> {
    pub geometry: G,
    pub properties: P,
}

impl<G, P> Feature<G, P> {
    pub fn new(geometry: G, properties: P) -> Self {
        Feature {
            geometry,
            properties,
        }
    }

    /// Replace the geometry, carrying the properties over.
    pub fn map_geometry<H, F: FnOnce(G) -> H>(self, f: F) -> Feature<H, P> {
        Feature {
            geometry: f(self.geometry),
            properties: self.properties,
        }
    }

    pub fn into_parts(self) -> (G, P) {
        (self.geometry, self.properties)
    }
}

/// Name of the variant held by a [`Geometry`].
pub fn geometry_kind(geom: &Geometry<f64>) -> &'static str {
    match geom {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}

pub(crate) fn unsupported(expected: &'static str, found: &Geometry<f64>) -> Error {
    Error::UnsupportedGeometryKind {
        expected,
        found: geometry_kind(found),
    }
}
