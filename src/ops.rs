use geo::{Coordinate, LineString};
use itertools::{Itertools, MinMaxResult};

/// Translate the longitude (`x`) of every coordinate by `dx`.
///
/// Returns new coordinates; the input is not modified.
pub fn translate_x(coords: &[Coordinate<f64>], dx: f64) -> Vec<Coordinate<f64>> {
    if dx == 0. {
        return coords.to_vec();
    }
    coords
        .iter()
        .map(|c| Coordinate { x: c.x + dx, y: c.y })
        .collect()
}

/// [`translate_x`] over the coordinates of a ring or line.
pub fn translate_ring_x(ring: &LineString<f64>, dx: f64) -> LineString<f64> {
    LineString(translate_x(&ring.0, dx))
}

/// Minimum and maximum longitude of a coordinate sequence, or `None`
/// if it is empty.
pub fn lon_extent(coords: &[Coordinate<f64>]) -> Option<(f64, f64)> {
    match coords.iter().map(|c| c.x).minmax_by(|a, b| a.total_cmp(b)) {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(x) => Some((x, x)),
        MinMaxResult::MinMax(min, max) => Some((min, max)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(raw: &[[f64; 2]]) -> Vec<Coordinate<f64>> {
        raw.iter().map(|&c| c.into()).collect()
    }

    #[test]
    fn test_translate_x() {
        let input = coords(&[[170., 2.], [175., 4.], [-178., 8.], [173., 7.], [170., 2.]]);

        let east = coords(&[[190., 2.], [195., 4.], [-158., 8.], [193., 7.], [190., 2.]]);
        assert_eq!(translate_x(&input, 20.), east);

        let west = coords(&[[150., 2.], [155., 4.], [-198., 8.], [153., 7.], [150., 2.]]);
        assert_eq!(translate_x(&input, -20.), west);

        assert_eq!(translate_x(&input, 0.), input);
        assert_eq!(input[2].x, -178.);
    }

    #[test]
    fn test_translate_ring_x() {
        let ring = LineString(coords(&[[181., 0.], [182., 1.], [181., 0.]]));
        let moved = translate_ring_x(&ring, -360.);
        assert_eq!(moved, LineString(coords(&[[-179., 0.], [-178., 1.], [-179., 0.]])));
    }

    #[test]
    fn test_lon_extent() {
        assert_eq!(lon_extent(&[]), None);
        assert_eq!(lon_extent(&coords(&[[3., 9.]])), Some((3., 3.)));
        assert_eq!(
            lon_extent(&coords(&[[170., 2.], [182., 8.], [165., -4.], [173., 7.]])),
            Some((165., 182.))
        );
    }
}
