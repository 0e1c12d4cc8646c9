//! Linear interpolation of positions between two time samples, taking
//! the short way across the antimeridian.

use geo::Coordinate;

use crate::{unwrap::unwrap_lons, Error, Result};

fn check_samples(found: usize) -> Result<()> {
    if found != 2 {
        return Err(Error::InsufficientSamples { expected: 2, found });
    }
    Ok(())
}

/// Evaluate at `x` the line through `(xp[0], fp[0])` and `(xp[1], fp[1])`.
///
/// Exactly two samples are required. Coinciding samples yield `fp[0]`;
/// coinciding abscissae with distinct values have no slope and fail
/// with [`Error::DegenerateInterval`].
///
/// ```rust
/// use geo_antimeridian::interp;
/// assert_eq!(interp(9., &[2., 10.], &[8., 3.]), Ok(3.625));
/// ```
pub fn interp(x: f64, xp: &[f64], fp: &[f64]) -> Result<f64> {
    check_samples(xp.len())?;
    check_samples(fp.len())?;

    let (x0, x1) = (xp[0], xp[1]);
    let (y0, y1) = (fp[0], fp[1]);
    if x0 == x1 {
        if y0 == y1 {
            return Ok(y0);
        }
        return Err(Error::DegenerateInterval { at: x0 });
    }

    let slope = (y1 - y0) / (x1 - x0);
    Ok(slope * (x - x0) + y0)
}

/// Interpolate a `(lon, lat)` position at time `t` between two samples.
///
/// The longitudes are unwrapped before interpolating so that the path
/// crosses the antimeridian when that is shorter, and the result is
/// wrapped back into `[-180, 180]`. Latitude is interpolated as is.
pub fn interp_lon_lat(t: f64, tp: &[f64], coords: &[Coordinate<f64>]) -> Result<Coordinate<f64>> {
    check_samples(tp.len())?;
    check_samples(coords.len())?;
    if tp[0] == tp[1] {
        return Err(Error::DegenerateInterval { at: tp[0] });
    }

    let unwrapped = unwrap_lons(coords);
    let mut lon = interp(t, tp, &[unwrapped[0].x, unwrapped[1].x])?;
    if lon < -180. {
        lon += 360.;
    } else if lon > 180. {
        lon -= 360.;
    }
    let lat = interp(t, tp, &[coords[0].y, coords[1].y])?;

    Ok(Coordinate { x: lon, y: lat })
}

/// [`interp_lon_lat`] applied pointwise to two equally long coordinate
/// lists sampled at `tp[0]` and `tp[1]`.
///
/// Fails as a whole if the lists differ in length or any point fails.
pub fn interp_lon_lat_batch<C: AsRef<[Coordinate<f64>]>>(
    t: f64,
    tp: &[f64],
    coord_lists: &[C],
) -> Result<Vec<Coordinate<f64>>> {
    check_samples(tp.len())?;
    check_samples(coord_lists.len())?;

    let (first, second) = (coord_lists[0].as_ref(), coord_lists[1].as_ref());
    if first.len() != second.len() {
        return Err(Error::LengthMismatch {
            first: first.len(),
            second: second.len(),
        });
    }

    first
        .iter()
        .zip(second)
        .map(|(&c0, &c1)| interp_lon_lat(t, tp, &[c0, c1]))
        .collect()
}
