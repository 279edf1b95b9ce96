use geo::{Distance, Haversine, InterpolatableLine, LineString, Point};

pub type NodeIx = petgraph::graph::NodeIndex;
pub type EdgeIx = petgraph::graph::EdgeIndex;

/// The identifier of a node within the source dataset.
pub type NodeId = i64;

/// The identifier of an edge within the source dataset.
///
/// Not unique: the two directions of a two-way road share their id.
pub type EdgeId = i64;

/// A junction or terminal of the road network.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub position: Point,
}

impl Node {
    pub fn new(id: NodeId, position: Point) -> Self {
        Node { id, position }
    }
}

/// A directed road segment between two [`Node`]s.
///
/// The `length` is the traversal length used for routing, and is not
/// required to match the haversine length of the `geometry`. Offsets
/// along the edge are always expressed in units of `length`.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    pub id: EdgeId,
    pub geometry: LineString,
    pub length: f64,

    /// The haversine length of the geometry, in meters.
    pub(crate) geometric_length: f64,
}

impl Edge {
    pub(crate) fn new(id: EdgeId, geometry: LineString, length: f64) -> Self {
        let geometric_length = geometry
            .lines()
            .map(|line| Haversine.distance(line.start_point(), line.end_point()))
            .sum();

        Edge {
            id,
            geometry,
            length,
            geometric_length,
        }
    }

    /// The ratio of routing length to geometric length.
    #[inline]
    pub fn scale(&self) -> f64 {
        if self.geometric_length > 0.0 {
            self.length / self.geometric_length
        } else {
            1.0
        }
    }

    /// Converts a geometric distance along the geometry into an offset along the edge.
    #[inline]
    pub fn offset_of(&self, geometric: f64) -> f64 {
        (geometric * self.scale()).clamp(0.0, self.length)
    }

    /// The position at the given `offset` along the edge.
    pub fn position_at(&self, offset: f64) -> Option<Point> {
        let target = offset / self.scale();
        let mut travelled = 0.0;
        let mut last = None;

        for line in self.geometry.lines() {
            let length = Haversine.distance(line.start_point(), line.end_point());
            if travelled + length >= target && length > 0.0 {
                let ratio = (target - travelled) / length;
                return Some(if ratio <= 0.0 {
                    line.start_point()
                } else if ratio >= 1.0 {
                    line.end_point()
                } else {
                    line.point_at_ratio_from_start(&Haversine, ratio)
                });
            }

            travelled += length;
            last = Some(line.end_point());
        }

        last.or_else(|| self.geometry.points().next())
    }

    /// The geometry between the offsets `from` and `to`, inclusive of both
    /// end positions. Returns an empty vector when `from` exceeds `to`.
    pub fn slice(&self, from: f64, to: f64) -> Vec<Point> {
        if from > to {
            return vec![];
        }

        let (Some(head), Some(tail)) = (self.position_at(from), self.position_at(to)) else {
            return vec![];
        };

        let (lower, upper) = (from / self.scale(), to / self.scale());
        let mut points = vec![head];
        let mut travelled = 0.0;

        for line in self.geometry.lines() {
            travelled += Haversine.distance(line.start_point(), line.end_point());
            if travelled > lower && travelled < upper {
                points.push(line.end_point());
            }
        }

        points.push(tail);
        points
    }
}

/// A position along a directed edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgePosition {
    pub edge: EdgeIx,

    /// The distance from the source of the edge, in units of [`Edge::length`].
    pub offset: f64,
}

impl EdgePosition {
    pub fn new(edge: EdgeIx, offset: f64) -> Self {
        EdgePosition { edge, offset }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use geo::wkt;

    #[test]
    fn scaled_edge_positions() {
        let geometry = wkt! { LINESTRING (0.0 0.0, 0.001 0.0, 0.002 0.0) };
        let edge = Edge::new(0, geometry, 100.0);

        assert_relative_eq!(edge.geometric_length, 222.39, max_relative = 0.001);
        assert_relative_eq!(edge.scale(), 100.0 / edge.geometric_length);

        let middle = edge.position_at(50.0).expect("must resolve");
        assert_relative_eq!(middle.x(), 0.001, epsilon = 1e-9);
    }

    #[test]
    fn slice_keeps_inner_vertices() {
        let geometry = wkt! { LINESTRING (0.0 0.0, 0.001 0.0, 0.001 0.001) };
        let edge = Edge::new(0, geometry, 222.39);

        let sliced = edge.slice(50.0, 150.0);
        assert_eq!(sliced.len(), 3);
        assert_relative_eq!(sliced[1].x(), 0.001, epsilon = 1e-12);
        assert_relative_eq!(sliced[1].y(), 0.0, epsilon = 1e-12);

        assert!(edge.slice(150.0, 50.0).is_empty());
        assert_eq!(edge.slice(10.0, 20.0).len(), 2);
    }
}
