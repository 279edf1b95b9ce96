use crate::graph::{Edge, EdgeIx, GraphBuilder, GraphError, Node, NodeId, NodeIx, Segment, SegmentIndex};

use geo::{Distance, Haversine, LineString, Point};
use petgraph::Directed;
use petgraph::visit::EdgeRef;
use rustc_hash::FxHashMap;
use std::fmt::{Debug, Formatter};

pub type GraphStructure = petgraph::Graph<Node, Edge, Directed>;

/// The road network.
///
/// An immutable arena of [`Node`]s and directed [`Edge`]s, with an R-Tree
/// over the edge geometry. Constructed through a [`GraphBuilder`] or from
/// plain linestrings using [`RoadGraph::from_linestrings`].
pub struct RoadGraph {
    pub(crate) graph: GraphStructure,
    pub(crate) lookup: FxHashMap<NodeId, NodeIx>,
    pub(crate) index: SegmentIndex,
}

impl Debug for RoadGraph {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RoadGraph with Nodes: {}, Edges: {}",
            self.size(),
            self.edge_count()
        )
    }
}

impl RoadGraph {
    pub(crate) fn with_capacity(nodes: usize, edges: usize) -> Self {
        RoadGraph {
            graph: GraphStructure::with_capacity(nodes, edges),
            lookup: FxHashMap::default(),
            index: SegmentIndex::default(),
        }
    }

    pub fn builder() -> GraphBuilder {
        GraphBuilder::default()
    }

    /// Builds a graph where each linestring is a single directed edge.
    ///
    /// Endpoints are shared between edges when their coordinates are exactly
    /// equal. When `two_way` is set, each linestring also produces the reverse
    /// edge, with reversed geometry and the same id, inserted directly after
    /// the forward edge.
    ///
    /// ```rust
    /// use geo::wkt;
    /// use trackmatch::RoadGraph;
    ///
    /// let lines = wkt! { MULTILINESTRING ((0.0 0.0, 0.001 0.0), (0.001 0.0, 0.001 0.001)) };
    /// let graph = RoadGraph::from_linestrings(lines, true).unwrap();
    ///
    /// assert_eq!(graph.size(), 3);
    /// assert_eq!(graph.edge_count(), 4);
    /// ```
    pub fn from_linestrings(
        lines: impl IntoIterator<Item = LineString>,
        two_way: bool,
    ) -> Result<RoadGraph, GraphError> {
        let mut builder = GraphBuilder::default();
        let mut endpoints: FxHashMap<(u64, u64), NodeId> = FxHashMap::default();

        let mut endpoint = |builder: &mut GraphBuilder, point: Point| {
            let key = (point.x().to_bits(), point.y().to_bits());
            let next = endpoints.len() as NodeId;

            *endpoints.entry(key).or_insert_with(|| {
                builder.node(next, point);
                next
            })
        };

        for (id, line) in lines.into_iter().enumerate() {
            let id = id as i64;
            let (Some(first), Some(last)) = (line.points().next(), line.points().last()) else {
                return Err(GraphError::InvalidGeometry {
                    edge: id,
                    reason: "geometry is empty".to_string(),
                });
            };

            let source = endpoint(&mut builder, first);
            let target = endpoint(&mut builder, last);

            let reversed = two_way.then(|| {
                let mut reversed = line.clone();
                reversed.0.reverse();
                reversed
            });

            builder.edge_with(id, source, target, Some(line), None);
            if let Some(reversed) = reversed {
                builder.edge_with(id, target, source, Some(reversed), None);
            }
        }

        builder.build()
    }

    /// Rebuilds the segment index from the edge geometry.
    pub(crate) fn reindex(&mut self) {
        let segments = self
            .graph
            .edge_references()
            .flat_map(|edge| segments_of(edge.id(), &edge.weight().geometry))
            .collect::<Vec<_>>();

        self.index = SegmentIndex::new(segments);
    }

    pub fn index(&self) -> &SegmentIndex {
        &self.index
    }

    /// The number of nodes in the graph.
    pub fn size(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    #[inline]
    pub fn node(&self, index: NodeIx) -> Option<&Node> {
        self.graph.node_weight(index)
    }

    #[inline]
    pub fn edge(&self, index: EdgeIx) -> Option<&Edge> {
        self.graph.edge_weight(index)
    }

    /// The (source, target) nodes of the edge.
    #[inline]
    pub fn endpoints(&self, index: EdgeIx) -> Option<(NodeIx, NodeIx)> {
        self.graph.edge_endpoints(index)
    }

    #[inline]
    pub fn node_index(&self, id: NodeId) -> Option<NodeIx> {
        self.lookup.get(&id).copied()
    }

    #[inline]
    pub fn get_position(&self, id: NodeId) -> Option<Point> {
        self.node_index(id)
            .and_then(|index| self.node(index))
            .map(|node| node.position)
    }

    pub fn edges(&self) -> impl Iterator<Item = (EdgeIx, &Edge)> {
        self.graph
            .edge_references()
            .map(|edge| (edge.id(), edge.weight()))
    }

    /// Outgoing edges of the node, as (edge, target) pairs.
    pub fn outgoing(&self, node: NodeIx) -> impl Iterator<Item = (EdgeIx, NodeIx)> + '_ {
        self.graph
            .edges_directed(node, petgraph::Outgoing)
            .map(|edge| (edge.id(), edge.target()))
    }
}

/// Splits the geometry of an edge into its straight [`Segment`]s.
pub(crate) fn segments_of(edge: EdgeIx, geometry: &LineString) -> Vec<Segment> {
    let mut start = 0.0;

    geometry
        .lines()
        .map(|line| {
            let segment = Segment::new(edge, line, start);
            start += Haversine.distance(line.start_point(), line.end_point());
            segment
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use trackmatch_fixtures::{DISCONNECTED_ROADS, JUNCTION_ROADS};
    use wkt::TryFromWkt;

    fn lines(wkt: &str) -> Vec<LineString> {
        geo::MultiLineString::try_from_wkt_str(wkt)
            .expect("fixture must parse")
            .0
    }

    #[test]
    fn shares_exact_endpoints() {
        let graph = RoadGraph::from_linestrings(lines(JUNCTION_ROADS), false).expect("must build");

        assert_eq!(graph.size(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.index().len(), 2);

        // Nodes are numbered in order of first appearance
        assert_eq!(graph.get_position(1), Some(Point::new(0.001, 0.0)));
        assert_eq!(graph.get_position(3), None);
    }

    #[test]
    fn two_way_adds_reversed_edges() {
        let graph =
            RoadGraph::from_linestrings(lines(DISCONNECTED_ROADS), true).expect("must build");

        assert_eq!(graph.size(), 4);
        assert_eq!(graph.edge_count(), 4);

        for (ix, edge) in graph.edges() {
            let (source, target) = graph.endpoints(ix).expect("edge must exist");
            let first = edge.geometry.points().next().expect("non-empty");
            let last = edge.geometry.points().last().expect("non-empty");

            assert_eq!(graph.node(source).map(|n| n.position), Some(first));
            assert_eq!(graph.node(target).map(|n| n.position), Some(last));
        }
    }

    #[test]
    fn rejects_empty_linestrings() {
        let result = RoadGraph::from_linestrings(vec![LineString::new(vec![])], false);
        assert!(matches!(result, Err(GraphError::InvalidGeometry { edge: 0, .. })));
    }
}
