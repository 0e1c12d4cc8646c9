use std::f64::consts::PI;

use geo::{Coordinate, LineString, Polygon};
use rand::Rng;
use rand_distr::{Standard, Uniform};

/// Wrap a continuous longitude back into `[-180, 180]`.
pub fn wrap_lon(x: f64) -> f64 {
    if x > 180. {
        x - 360.
    } else if x < -180. {
        x + 360.
    } else {
        x
    }
}

/// A random star-shaped polygon with `steps` vertices around
/// `center_lon`, wound clockwise from a random start angle.
///
/// Returns the polygon in geographic (wrapped) longitudes together with
/// the same polygon in continuous longitudes.
pub fn circular_polygon<R: Rng>(
    mut rng: R,
    center_lon: f64,
    steps: usize,
) -> (Polygon<f64>, Polygon<f64>) {
    let center_lat = rng.sample(Uniform::new(-60., 60.));
    let radii = Uniform::new(5., 10.);
    let offset = rng.sample::<f64, _>(Standard) * 2. * PI;

    let coords: Vec<Coordinate<f64>> = (0..steps)
        .map(|i| {
            let angle = offset - 2. * PI * i as f64 / steps as f64;
            let r = rng.sample(radii);
            Coordinate {
                x: center_lon + r * angle.cos(),
                y: center_lat + r * angle.sin(),
            }
        })
        .collect();

    let wrapped = coords
        .iter()
        .map(|c| Coordinate {
            x: wrap_lon(c.x),
            y: c.y,
        })
        .collect();
    (
        Polygon::new(LineString(wrapped), vec![]),
        Polygon::new(LineString(coords), vec![]),
    )
}

/// A random walk of `steps` positions drifting east from `start_lon`,
/// in geographic longitudes.
///
/// The walk covers between a quarter and three quarters of a turn in
/// total, so a walk of at least 16 steps starting 20° west of the
/// antimeridian crosses it exactly once.
pub fn eastward_track<R: Rng>(mut rng: R, start_lon: f64, steps: usize) -> Vec<Coordinate<f64>> {
    let mean_step = 180. / steps as f64;
    let step = Uniform::new(0.5 * mean_step, 1.5 * mean_step);
    let jitter = Uniform::new(-0.5, 0.5);
    let mut lon = start_lon;
    let mut lat = 0.;
    (0..steps)
        .map(|_| {
            lon += rng.sample(step);
            lat += rng.sample(jitter);
            Coordinate {
                x: wrap_lon(lon),
                y: lat,
            }
        })
        .collect()
}
