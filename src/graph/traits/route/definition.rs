use crate::graph::{EdgeIx, EdgePosition, RoadGraph};

use geo::Point;
use itertools::Itertools;

/// Network distance between positions upon the graph.
///
/// Every query is bounded: a position which cannot be reached within
/// the `bound` (in meters) is treated as unreachable, and returned as `None`.
pub trait Route {
    /// The shortest directed network distance, in meters, from `from` to `to`.
    fn route_distance(&self, from: EdgePosition, to: EdgePosition, bound: f64) -> Option<f64>;

    /// The shortest directed network distances from `from` to each of the
    /// targets, each checked against its own bound.
    ///
    /// Equivalent to calling [`Route::route_distance`] for each target,
    /// while only searching the network once.
    fn route_distances(&self, from: EdgePosition, targets: &[(EdgePosition, f64)]) -> Vec<Option<f64>>;

    /// The shortest directed route from `from` to `to`, including the edges traversed.
    fn route(&self, from: EdgePosition, to: EdgePosition, bound: f64) -> Option<RouteLeg>;
}

/// A route between two positions upon the graph.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteLeg {
    pub from: EdgePosition,
    pub to: EdgePosition,
    pub distance: f64,

    /// The edges wholly traversed between leaving `from.edge`
    /// and entering `to.edge`, in order of traversal.
    pub via: Vec<EdgeIx>,

    /// Whether the route stays upon a single edge, moving forward along it.
    pub direct: bool,
}

impl RouteLeg {
    /// The geometry of the route, from the `from` position to the `to` position.
    pub fn geometry(&self, map: &RoadGraph) -> Vec<Point> {
        if self.direct {
            return map
                .edge(self.from.edge)
                .map(|edge| edge.slice(self.from.offset, self.to.offset))
                .unwrap_or_default();
        }

        let head = map
            .edge(self.from.edge)
            .map(|edge| edge.slice(self.from.offset, edge.length))
            .unwrap_or_default();

        let body = self
            .via
            .iter()
            .filter_map(|ix| map.edge(*ix))
            .flat_map(|edge| edge.geometry.points());

        let tail = map
            .edge(self.to.edge)
            .map(|edge| edge.slice(0.0, self.to.offset))
            .unwrap_or_default();

        head.into_iter().chain(body).chain(tail).dedup().collect()
    }
}
