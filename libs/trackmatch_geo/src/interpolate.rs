//! Fixed-interval densification of linestrings.

use geo::{Distance, Haversine, InterpolatableLine, LineString, Point};
use log::trace;

/// A position along a linestring, either one of its original
/// vertices or a synthetic position inserted by [`interpolate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breakpoint {
    /// Cumulative haversine distance, in meters, from the start of the linestring.
    pub distance: f64,
    pub position: Point,
    pub synthetic: bool,
}

/// Walks the linestring and returns every original vertex together with
/// synthetic positions placed every `spacing` meters of cumulative distance.
///
/// Breakpoints are returned in order of increasing distance. The first and
/// last breakpoints are always the original end vertices. A non-positive or
/// non-finite `spacing` yields only the original vertices.
///
/// ```rust
/// use geo::wkt;
/// use trackmatch_geo::interpolate;
///
/// let line = wkt! { LINESTRING (0.0 0.0, 0.001 0.0) };
/// let points = interpolate(&line, 10.0);
/// assert_eq!(points.len(), 13);
/// ```
pub fn interpolate(linestring: &LineString, spacing: f64) -> Vec<Breakpoint> {
    let densify = spacing.is_finite() && spacing > 0.0;

    let mut breakpoints = Vec::with_capacity(linestring.0.len());
    let mut travelled = 0.0;
    let mut next_mark = spacing;

    for (index, line) in linestring.lines().enumerate() {
        if index == 0 {
            breakpoints.push(Breakpoint {
                distance: 0.0,
                position: line.start_point(),
                synthetic: false,
            });
        }

        let length = Haversine.distance(line.start_point(), line.end_point());

        if densify && length > 0.0 {
            while next_mark < travelled + length {
                let ratio = (next_mark - travelled) / length;
                breakpoints.push(Breakpoint {
                    distance: next_mark,
                    position: line.point_at_ratio_from_start(&Haversine, ratio),
                    synthetic: true,
                });
                next_mark += spacing;
            }
        }

        travelled += length;
        breakpoints.push(Breakpoint {
            distance: travelled,
            position: line.end_point(),
            synthetic: false,
        });

        // Synthetic positions never coincide with a vertex
        if densify && (next_mark - travelled).abs() < f64::EPSILON {
            next_mark += spacing;
        }
    }

    trace!(
        "Interpolated {} vertices into {} breakpoints at {spacing}m",
        linestring.0.len(),
        breakpoints.len()
    );

    breakpoints
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use geo::wkt;

    #[test]
    fn spacing_is_uniform() {
        // ~111.2m
        let line = wkt! { LINESTRING (0.0 0.0, 0.001 0.0) };
        let points = interpolate(&line, 10.0);

        let synthetic = points.iter().filter(|p| p.synthetic).collect::<Vec<_>>();
        assert_eq!(synthetic.len(), 11);

        for (index, point) in synthetic.iter().enumerate() {
            assert_relative_eq!(point.distance, 10.0 * (index + 1) as f64);
        }

        assert!(!points.first().expect("non-empty").synthetic);
        assert!(!points.last().expect("non-empty").synthetic);
    }

    #[test]
    fn spacing_continues_over_vertices() {
        let line = wkt! { LINESTRING (0.0 0.0, 0.0001 0.0, 0.0003 0.0) };
        let points = interpolate(&line, 5.0);

        let distances = points.iter().map(|p| p.distance).collect::<Vec<_>>();
        assert!(distances.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn non_positive_spacing_keeps_vertices() {
        let line = wkt! { LINESTRING (0.0 0.0, 0.0001 0.0, 0.0003 0.0) };
        assert_eq!(interpolate(&line, 0.0).len(), 3);
        assert_eq!(interpolate(&line, f64::NAN).len(), 3);
    }
}
