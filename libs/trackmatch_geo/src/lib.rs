//! Geodesic primitives shared by the matching engine.
//!
//! All positions are [`geo::Point`]s in `(x: longitude, y: latitude)` order,
//! all distances are meters on the haversine sphere.

pub const MEAN_EARTH_RADIUS: f64 = 6371008.8;

pub mod bounds;
#[doc(hidden)]
pub mod coord;
#[doc(hidden)]
pub mod error;
pub mod interpolate;
pub mod project;

#[doc(inline)]
pub use bounds::{bounding, enlarge_bbox};
#[doc(inline)]
pub use coord::latlng::LatLng;
#[doc(inline)]
pub use error::GeoError;
#[doc(inline)]
pub use interpolate::{Breakpoint, interpolate};
#[doc(inline)]
pub use project::{Projection, project};
