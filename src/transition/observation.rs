use crate::transition::MatchError;

use geo::{BoundingRect, LineString, MultiPoint, Point, Rect};
use std::ops::Deref;
use trackmatch_geo::{GeoError, LatLng, enlarge_bbox};

/// A single GPS fix, at (x: longitude, y: latitude).
///
/// Observations carry no timestamp: their order within
/// [`Observations`] is their temporal order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Observation {
    pub position: Point,
}

impl Observation {
    pub fn new(lat: f64, lng: f64) -> Result<Self, GeoError> {
        LatLng::from_degree(lat, lng).map(|latlng| Observation {
            position: latlng.point(),
        })
    }

    /// Validates the position of an observation constructed without [`Observation::new`].
    pub fn validate(&self) -> Result<(), GeoError> {
        LatLng::from_degree(self.position.y(), self.position.x()).map(|_| ())
    }
}

impl From<Point> for Observation {
    fn from(position: Point) -> Self {
        Observation { position }
    }
}

/// An ordered trip of [`Observation`]s.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Observations(Vec<Observation>);

impl Observations {
    /// Constructs observations from `(lat, lng)` pairs, rejecting invalid coordinates.
    ///
    /// ```rust
    /// use trackmatch::{MatchError, Observations};
    ///
    /// let trip = Observations::from_lat_lng([(51.5, -0.12), (51.6, -0.13)]).unwrap();
    /// assert_eq!(trip.len(), 2);
    ///
    /// let invalid = Observations::from_lat_lng([(51.5, -0.12), (91.0, 0.0)]);
    /// assert!(matches!(invalid, Err(MatchError::InvalidObservation { index: 1, .. })));
    /// ```
    pub fn from_lat_lng(pairs: impl IntoIterator<Item = (f64, f64)>) -> Result<Self, MatchError> {
        pairs
            .into_iter()
            .enumerate()
            .map(|(index, (lat, lng))| {
                Observation::new(lat, lng)
                    .map_err(|source| MatchError::InvalidObservation { index, source })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Observations)
    }

    /// The bounding box of the trip, enlarged by `margin` meters on every side.
    ///
    /// This is the area a road network must cover for every observation
    /// to find its candidates. Returns `None` for an empty trip.
    pub fn bounds(&self, margin: f64) -> Option<Rect> {
        self.0
            .iter()
            .map(|observation| observation.position)
            .collect::<MultiPoint>()
            .bounding_rect()
            .map(|rect| enlarge_bbox(rect, margin))
    }
}

impl Deref for Observations {
    type Target = [Observation];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<LineString> for Observations {
    /// Each vertex of the linestring, at (x: longitude, y: latitude), is an observation.
    fn from(linestring: LineString) -> Self {
        Observations(linestring.points().map(Observation::from).collect())
    }
}

impl FromIterator<Observation> for Observations {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        Observations(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use geo::wkt;

    #[test]
    fn bounds_cover_every_observation() {
        let trip = Observations::from(wkt! { LINESTRING (0.0 0.0, 0.01 0.005, 0.02 0.0) });
        let bounds = trip.bounds(500.0).expect("non-empty trip");

        assert!(bounds.min().x < 0.0 && bounds.min().y < 0.0);
        assert!(bounds.max().x > 0.02 && bounds.max().y > 0.005);
        assert_eq!(Observations::default().bounds(500.0), None);
    }

    #[test]
    fn rejects_non_finite_positions() {
        let observation = Observation::from(Point::new(f64::NAN, 0.0));
        assert!(observation.validate().is_err());
        assert!(Observation::new(0.0, 181.0).is_err());
    }
}
