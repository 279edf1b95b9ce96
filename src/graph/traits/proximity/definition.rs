use crate::graph::{Projected, Segment};

use geo::Point;

/// Trait containing utility functions to find edges upon a root structure.
pub trait Scan {
    /// Returns an unsorted iterator of [`Segment`] references whose envelope
    /// intersects the square enclosing a circle of `distance` meters around
    /// the input [point](Point).
    ///
    /// ### Note
    /// This function implements a square-scan, and therefore may return
    /// segments which are further than `distance` from the point. It never
    /// omits a segment which is within `distance`.
    fn scan_segments<'a>(
        &'a self,
        point: &Point,
        distance: f64,
    ) -> impl Iterator<Item = &'a Segment>;

    /// Returns the [`Projected`] position upon each edge within the specified `distance`,
    /// at most one per edge, sorted by distance and then by edge index.
    ///
    /// ### Note
    /// This is achieved by projecting the point onto every segment from
    /// [`Scan::scan_segments`], and keeping the closest projection of each
    /// edge that lies within the exact haversine `distance`.
    ///
    /// [`Projected`]: https://en.wikipedia.org/wiki/Projection_(linear_algebra)
    fn scan_edges_projected(&self, point: &Point, distance: f64) -> Vec<Projected>;
}
