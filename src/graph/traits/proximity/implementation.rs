use crate::graph::{InterpolatedGraph, Projected, RoadGraph, Scan, Segment};

use geo::Point;

#[cfg(feature = "tracing")]
use tracing::Level;

impl Scan for RoadGraph {
    #[inline]
    fn scan_segments<'a>(
        &'a self,
        point: &Point,
        distance: f64,
    ) -> impl Iterator<Item = &'a Segment> {
        self.index.scan(point, distance)
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(level = Level::DEBUG, skip(self)))]
    fn scan_edges_projected(&self, point: &Point, distance: f64) -> Vec<Projected> {
        self.index.projected(self, point, distance)
    }
}

impl Scan for InterpolatedGraph<'_> {
    #[inline]
    fn scan_segments<'a>(
        &'a self,
        point: &Point,
        distance: f64,
    ) -> impl Iterator<Item = &'a Segment> {
        self.index().scan(point, distance)
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(level = Level::DEBUG, skip(self)))]
    fn scan_edges_projected(&self, point: &Point, distance: f64) -> Vec<Projected> {
        self.projected(point, distance)
    }
}
