use crate::graph::{EdgeIx, RoadGraph};

use geo::{Distance, Haversine, Line, Point};
use indexmap::IndexMap;
use indexmap::map::Entry;
use itertools::Itertools;
use rstar::{AABB, RTree, RTreeObject};
use rustc_hash::FxBuildHasher;
use trackmatch_geo::{bounding, project};

/// A single straight piece of an edge's geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub edge: EdgeIx,
    pub line: Line,

    /// The geometric (haversine) distance from the start of the edge
    /// to the start of this segment, in meters.
    pub start: f64,
}

impl Segment {
    pub fn new(edge: EdgeIx, line: Line, start: f64) -> Self {
        Segment { edge, line, start }
    }
}

impl RTreeObject for Segment {
    type Envelope = AABB<Point>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.line.start_point(), self.line.end_point())
    }
}

/// The nearest position of an edge to some origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub edge: EdgeIx,
    pub position: Point,

    /// The offset of the position along the edge, in units of edge length.
    pub offset: f64,

    /// The haversine distance from the origin to the position, in meters.
    pub distance: f64,
}

/// R-Tree over edge [`Segment`]s.
#[derive(Debug, Default)]
pub struct SegmentIndex {
    tree: RTree<Segment>,
}

impl SegmentIndex {
    pub fn new(segments: Vec<Segment>) -> Self {
        SegmentIndex {
            tree: RTree::bulk_load(segments),
        }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.tree.iter()
    }

    /// Every segment whose envelope intersects the square
    /// enclosing a circle of `distance` meters around `point`.
    pub fn scan(&self, point: &Point, distance: f64) -> impl Iterator<Item = &Segment> {
        let bbox = bounding(*point, distance);
        self.tree.locate_in_envelope_intersecting(&bbox)
    }

    /// Projects `point` onto every edge with a segment within `distance` meters,
    /// returning one projection per edge, sorted by distance and then edge index.
    pub fn projected(&self, map: &RoadGraph, point: &Point, distance: f64) -> Vec<Projected> {
        nearest_per_edge(map, point, distance, self.scan(point, distance))
    }
}

/// Reduces segments to the closest projection of `point` per edge,
/// discarding any projection further than `distance`.
pub(crate) fn nearest_per_edge<'a>(
    map: &RoadGraph,
    point: &Point,
    distance: f64,
    segments: impl Iterator<Item = &'a Segment>,
) -> Vec<Projected> {
    let mut nearest: IndexMap<EdgeIx, Projected, FxBuildHasher> = IndexMap::default();

    for segment in segments {
        let Some(projection) = project(&segment.line, point) else {
            continue;
        };

        if projection.distance > distance {
            continue;
        }

        let Some(edge) = map.edge(segment.edge) else {
            continue;
        };

        let along = segment.start + Haversine.distance(segment.line.start_point(), projection.point);
        let candidate = Projected {
            edge: segment.edge,
            position: projection.point,
            offset: edge.offset_of(along),
            distance: projection.distance,
        };

        match nearest.entry(segment.edge) {
            Entry::Vacant(entry) => {
                entry.insert(candidate);
            }
            Entry::Occupied(mut entry) => {
                let current = entry.get();
                let closer = candidate.distance < current.distance
                    || (candidate.distance == current.distance && candidate.offset < current.offset);

                if closer {
                    entry.insert(candidate);
                }
            }
        }
    }

    nearest
        .into_values()
        .sorted_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then_with(|| a.edge.cmp(&b.edge))
        })
        .collect()
}
