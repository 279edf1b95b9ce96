use std::fmt::{Debug, Formatter};

use crate::error::GeoError;

pub type Degree = f64;

/// `LatLng`
/// The latitude, longitude pair structure, geotags an item with a location.
///
/// ```rust
/// use trackmatch_geo::LatLng;
/// let latlng = LatLng::from_degree(38.9126, -77.0234).unwrap();
/// println!("Position: {:?}", latlng);
/// ```
#[derive(Clone, Copy, PartialOrd, PartialEq)]
pub struct LatLng {
    pub lat: Degree,
    pub lng: Degree,
}

impl LatLng {
    /// Validates and constructs a `LatLng` from degrees.
    ///
    /// Rejects non-finite values, latitudes outside `[-90, 90]`
    /// and longitudes outside `[-180, 180]`.
    pub fn from_degree(lat: Degree, lng: Degree) -> Result<Self, GeoError> {
        if !lat.is_finite() || !(-90f64..=90f64).contains(&lat) {
            return Err(GeoError::InvalidCoordinate(format!(
                "Latitude must be finite and within [-90, 90]. Given: {lat}"
            )));
        }

        if !lng.is_finite() || !(-180f64..=180f64).contains(&lng) {
            return Err(GeoError::InvalidCoordinate(format!(
                "Longitude must be finite and within [-180, 180]. Given: {lng}"
            )));
        }

        Ok(Self::from_degree_unchecked(lat, lng))
    }

    pub fn from_degree_unchecked(lat: Degree, lng: Degree) -> Self {
        LatLng { lat, lng }
    }

    pub fn point(&self) -> geo::Point {
        geo::Point::new(self.lng, self.lat)
    }
}

impl From<LatLng> for geo::Point {
    fn from(value: LatLng) -> Self {
        value.point()
    }
}

impl Debug for LatLng {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "POINT({} {})", self.lng, self.lat)
    }
}

#[cfg(test)]
mod test {
    use super::LatLng;

    #[test]
    fn rejects_out_of_range() {
        assert!(LatLng::from_degree(91.0, 0.0).is_err());
        assert!(LatLng::from_degree(0.0, -180.5).is_err());
        assert!(LatLng::from_degree(f64::NAN, 0.0).is_err());
        assert!(LatLng::from_degree(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn point_is_lng_lat() {
        let latlng = LatLng::from_degree(38.9, -77.0).expect("valid coordinate");
        let point = latlng.point();

        assert_eq!(point.x(), -77.0);
        assert_eq!(point.y(), 38.9);
    }
}
