//! Bounding helpers for radius searches and network coverage.

use geo::{Destination, Geodesic, Haversine, Point, Rect, coord};
use rstar::AABB;

/// Relative enlargement applied to the radius of a [`bounding`] box.
pub const PADDING: f64 = 1.01;

/// Constructs the rectangular Axis-Aligned Bounding Box ([AABB])
/// which fully encloses the circle of `distance` meters around `point`.
///
/// The box is built from the haversine destinations due north, east,
/// south and west of the point, padded by [`PADDING`] since the widest
/// longitude of a circle away from the equator is not due east. Every
/// position within `distance` of the origin lies inside it. Corners may
/// include positions further than `distance` away, so results must still
/// be filtered exactly.
pub fn bounding(point: Point, distance: f64) -> AABB<Point> {
    let distance = distance * PADDING;

    let north = Haversine.destination(point, 0.0, distance);
    let east = Haversine.destination(point, 90.0, distance);
    let south = Haversine.destination(point, 180.0, distance);
    let west = Haversine.destination(point, 270.0, distance);

    AABB::from_corners(
        Point::new(west.x(), south.y()),
        Point::new(east.x(), north.y()),
    )
}

/// Enlarges a bounding rectangle by `margin` meters on every side.
///
/// This is the area a road-network provider must cover for a trip whose
/// observations lie within `rect`, such that candidates near the border
/// of the trip still find their edges.
pub fn enlarge_bbox(rect: Rect, margin: f64) -> Rect {
    let min = Point::from(rect.min());
    let max = Point::from(rect.max());

    let south = Geodesic.destination(min, 180.0, margin).y();
    let west = Geodesic.destination(min, 270.0, margin).x();
    let north = Geodesic.destination(max, 0.0, margin).y();
    let east = Geodesic.destination(max, 90.0, margin).x();

    Rect::new(coord! { x: west, y: south }, coord! { x: east, y: north })
}

#[cfg(test)]
mod test {
    use super::*;
    use geo::Distance;
    use rstar::Envelope;

    #[test]
    fn bounding_encloses_radius() {
        let origin = Point::new(-77.0234, 38.9126);
        let bbox = bounding(origin, 100.0);

        for bearing in [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0] {
            let edge = Geodesic.destination(origin, bearing, 99.0);
            assert!(
                bbox.contains_point(&edge),
                "Expected {edge:?} (bearing {bearing}) within {bbox:?}"
            );
        }

        let outside = Geodesic.destination(origin, 0.0, 110.0);
        assert!(!bbox.contains_point(&outside));
    }

    #[test]
    fn bounding_encloses_haversine_circle_at_high_latitude() {
        let origin = Point::new(10.75, 59.91);
        let bbox = bounding(origin, 500.0);

        for step in 0..72 {
            let bearing = step as f64 * 5.0;
            let edge = Haversine.destination(origin, bearing, 500.0);
            assert!(
                bbox.contains_point(&edge),
                "Expected {edge:?} (bearing {bearing}) within {bbox:?}"
            );
        }
    }

    #[test]
    fn enlarge_grows_each_side() {
        let rect = Rect::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 0.01, y: 0.01 });
        let enlarged = enlarge_bbox(rect, 500.0);

        let south_gap = Haversine.distance(
            Point::new(0.0, enlarged.min().y),
            Point::new(0.0, rect.min().y),
        );

        assert!((south_gap - 500.0).abs() < 1.0);
        assert!(enlarged.min().x < rect.min().x);
        assert!(enlarged.max().x > rect.max().x);
        assert!(enlarged.max().y > rect.max().y);
    }
}
