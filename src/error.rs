//! Error types returned by the crate.

use thiserror::Error;

/// Failures reported by the transforms and interpolators.
///
/// A geometry that does not cross the requested meridian is not an
/// error: the split operations hand back the input unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Operation invoked on a geometry variant it does not accept.
    #[error("expected {expected} geometry, found {found}")]
    UnsupportedGeometryKind {
        expected: &'static str,
        found: &'static str,
    },
    /// Interpolation given other than exactly two samples.
    #[error("expected {expected} samples, found {found}")]
    InsufficientSamples { expected: usize, found: usize },
    /// Sample abscissae coincide and the slope is undefined.
    #[error("degenerate interval: samples coincide at {at}")]
    DegenerateInterval { at: f64 },
    /// Batched interpolation given coordinate lists of unequal length.
    #[error("coordinate lists differ in length: {first} != {second}")]
    LengthMismatch { first: usize, second: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
