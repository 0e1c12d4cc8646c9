//! Antimeridian-aware splitting and interpolation of geographic
//! geometries.
//!
//! 1. [Phase Unwrapping](#phase-unwrapping)
//! 1. [Splitting](#splitting)
//! 1. [Interpolation](#interpolation)
//!
//! # Phase Unwrapping
//!
//! Longitudes are periodic: a path going east from `179°` continues at
//! `-179°`. [`unwrap`] removes such artificial jumps from any angular
//! sequence, and [`unwrap_lons`] / [`unwrap_rings`] apply it to the
//! longitude of coordinates, so that the geometry becomes continuous
//! (and may leave `[-180, 180]`).
//!
//! ```rust
//! use geo::Coordinate;
//! use geo_antimeridian::unwrap_lons;
//! let coords = vec![
//!     Coordinate { x: 179., y: 0. },
//!     Coordinate { x: -179., y: 1. },
//! ];
//! assert_eq!(unwrap_lons(&coords)[1], Coordinate { x: 181., y: 1. });
//! ```
//!
//! # Splitting
//!
//! [`split_line_string`] and [`split_polygon`] cut a [`Feature`] along a
//! vertical line. [`split_line_string_antimeridian`] and
//! [`split_polygon_antimeridian`] detect a crossing of the ±180°
//! meridian, split the unwrapped geometry there and bring each piece
//! back into `[-180, 180]`. A geometry that does not cross is returned
//! unchanged, as a single-part geometry; a split yields the `Multi*`
//! variant. The properties of the feature are carried over as they are.
//!
//! ```rust
//! use geo::{Geometry, LineString};
//! use geo_antimeridian::{split_line_string_antimeridian, Feature};
//! let line = LineString::from(vec![(170., 0.), (-170., 10.)]);
//! let split = split_line_string_antimeridian(Feature::new(Geometry::LineString(line), "route"))
//!     .unwrap();
//! assert!(matches!(split.geometry, Geometry::MultiLineString(_)));
//! assert_eq!(split.properties, "route");
//! ```
//!
//! # Interpolation
//!
//! [`interp_lon_lat`] and [`interp_lon_lat_batch`] interpolate positions
//! between two time samples along the shorter side of the antimeridian.
//!
//! ```rust
//! use geo::Coordinate;
//! use geo_antimeridian::interp_lon_lat;
//! let samples = [Coordinate { x: 179., y: 18. }, Coordinate { x: -171., y: 22. }];
//! let mid = interp_lon_lat(5., &[0., 10.], &samples).unwrap();
//! assert_eq!(mid, Coordinate { x: -176., y: 20. });
//! ```
mod error;
pub use error::{Error, Result};

pub mod math;
pub use math::{cumsum, diff, fmod};

mod ops;
pub use ops::{lon_extent, translate_ring_x, translate_x};

mod unwrap;
pub use unwrap::{unwrap, unwrap_lons, unwrap_polygon, unwrap_rings, DEFAULT_PERIOD, LON_PERIOD};

mod feature;
pub use feature::{geometry_kind, Feature};

mod crossing;
pub use crossing::{detect_crossing, Crossing};

pub mod clip;

mod split;
pub use split::{split_line_string, split_polygon, SAFE_EXTENT};

mod antimeridian;
pub use antimeridian::{
    split_antimeridian, split_line_string_antimeridian, split_polygon_antimeridian,
};

mod interp;
pub use interp::{interp, interp_lon_lat, interp_lon_lat_batch};

#[cfg(test)]
#[path = "../benches/utils/random.rs"]
pub mod random;
