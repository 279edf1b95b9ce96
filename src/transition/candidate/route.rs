use crate::graph::{RoadGraph, Route};
use crate::transition::*;

use geo::{Distance, Haversine, LineString, Point};
use itertools::Itertools;
use log::warn;

/// A route representing the parsed output from a function
/// passed through the transition graph.
#[derive(Clone, Debug, PartialEq)]
pub struct RoutedPath {
    /// The exactly-routed elements.
    ///
    /// For a map-match request, these are the values which line up with the inputs
    /// for a one-to-one match. I.e. there is a discretized point for every input point
    /// which had any candidate.
    pub discretized: MatchedPath,

    /// The interpolated route.
    ///
    /// This is the full interpreted trip, consisting of every turn and roadway
    /// the algorithm has assumed as a part of the path taken. This is useful for visualising
    /// a trip by "recovering" lost information, or understanding subtle details such as
    /// when the route left or joined a highway.
    pub interpolated: LineString,
}

impl RoutedPath {
    /// Routes between each consecutive pair of matched candidates within the
    /// `bound`, joining the geometry of every edge travelled along the way.
    pub fn new(discretized: MatchedPath, map: &RoadGraph, bound: SearchBound) -> Self {
        let candidates = discretized.matched();

        let legs = candidates.iter().tuple_windows().flat_map(|(source, target)| {
            let straight = Haversine.distance(source.position, target.position);
            let leg = map.route(
                source.edge_position(),
                target.edge_position(),
                bound.limit(straight),
            );

            match leg {
                Some(leg) => leg.geometry(map),
                None => {
                    warn!(
                        "No route from observation {} to {}, joining directly",
                        source.observation(),
                        target.observation()
                    );

                    vec![source.position, target.position]
                }
            }
        });

        let interpolated = if candidates.len() < 2 {
            candidates
                .iter()
                .map(|candidate| candidate.position)
                .collect::<Vec<Point>>()
        } else {
            legs.dedup().collect::<Vec<Point>>()
        };

        RoutedPath {
            discretized,
            interpolated: LineString::from(interpolated),
        }
    }
}
