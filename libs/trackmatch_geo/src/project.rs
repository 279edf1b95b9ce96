//! Perpendicular projection of a position onto a straight segment.

use geo::{Distance, Haversine, InterpolatableLine, Line, LineLocatePoint, Point};

/// The nearest position upon a segment to some origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    /// The projected position upon the segment.
    pub point: Point,

    /// The fraction (`0..=1`) through the segment at which the projection lies.
    pub ratio: f64,

    /// The haversine distance, in meters, from the origin to [`point`](#field.point).
    pub distance: f64,
}

/// Projects `point` onto the `line`.
///
/// We locate the point upon the line, and then project that fractional (%)
/// upon the line to obtain a point. Degenerate (zero-length) lines project
/// onto their start.
pub fn project(line: &Line, point: &Point) -> Option<Projection> {
    if line.start == line.end {
        let start = line.start_point();
        return Some(Projection {
            point: start,
            ratio: 0.0,
            distance: Haversine.distance(start, *point),
        });
    }

    let ratio = line.line_locate_point(point)?;
    let projected = line.point_at_ratio_from_start(&Haversine, ratio);

    Some(Projection {
        point: projected,
        ratio,
        distance: Haversine.distance(projected, *point),
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use geo::coord;

    #[test]
    fn projects_perpendicular() {
        let line = Line::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 0.002, y: 0.0 });
        let projection = project(&line, &Point::new(0.001, 0.0001)).expect("must project");

        assert_relative_eq!(projection.ratio, 0.5, epsilon = 1e-9);
        assert_relative_eq!(projection.point.x(), 0.001, epsilon = 1e-9);
        assert_relative_eq!(projection.distance, 11.12, max_relative = 0.01);
    }

    #[test]
    fn clamps_to_segment_ends() {
        let line = Line::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 0.001, y: 0.0 });
        let projection = project(&line, &Point::new(0.003, 0.0)).expect("must project");

        assert_relative_eq!(projection.ratio, 1.0);
        assert_relative_eq!(projection.point.x(), 0.001, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_line_projects_to_start() {
        let line = Line::new(coord! { x: 0.5, y: 0.5 }, coord! { x: 0.5, y: 0.5 });
        let projection = project(&line, &Point::new(0.5, 0.5)).expect("must project");

        assert_eq!(projection.ratio, 0.0);
        assert_eq!(projection.distance, 0.0);
    }
}
