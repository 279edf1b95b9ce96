use crate::graph::{Edge, EdgeId, GraphError, Node, NodeId, RoadGraph};

use geo::{Distance, Haversine, LineString, Point};
use log::debug;
use trackmatch_geo::LatLng;

/// Maximum distance, in meters, an edge's geometry may
/// start or end away from the position of its endpoint node.
const ENDPOINT_TOLERANCE: f64 = 0.5;

struct PendingEdge {
    id: EdgeId,
    source: NodeId,
    target: NodeId,
    geometry: Option<LineString>,
    length: Option<f64>,
}

/// Incrementally assembles a [`RoadGraph`], validating it on [`build`](GraphBuilder::build).
///
/// ```rust
/// use geo::Point;
/// use trackmatch::GraphBuilder;
///
/// let mut builder = GraphBuilder::default();
/// builder
///     .node(1, Point::new(0.0, 0.0))
///     .node(2, Point::new(0.001, 0.0))
///     .edge(10, 1, 2);
///
/// let graph = builder.build().unwrap();
/// assert_eq!(graph.size(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// ```
#[derive(Default)]
pub struct GraphBuilder {
    nodes: Vec<Node>,
    edges: Vec<PendingEdge>,
}

impl GraphBuilder {
    /// Inserts a node at `position`, given as (x: longitude, y: latitude).
    pub fn node(&mut self, id: NodeId, position: Point) -> &mut Self {
        self.nodes.push(Node::new(id, position));
        self
    }

    /// Inserts a directed edge whose geometry is the straight line between
    /// its endpoints, and whose length is the haversine length of that line.
    pub fn edge(&mut self, id: EdgeId, source: NodeId, target: NodeId) -> &mut Self {
        self.edge_with(id, source, target, None, None)
    }

    /// Inserts a directed edge with optional explicit geometry and length.
    pub fn edge_with(
        &mut self,
        id: EdgeId,
        source: NodeId,
        target: NodeId,
        geometry: Option<LineString>,
        length: Option<f64>,
    ) -> &mut Self {
        self.edges.push(PendingEdge {
            id,
            source,
            target,
            geometry,
            length,
        });
        self
    }

    pub fn build(self) -> Result<RoadGraph, GraphError> {
        let mut graph = RoadGraph::with_capacity(self.nodes.len(), self.edges.len());

        for node in self.nodes {
            LatLng::from_degree(node.position.y(), node.position.x()).map_err(|source| {
                GraphError::InvalidPosition {
                    node: node.id,
                    source,
                }
            })?;

            if graph.lookup.contains_key(&node.id) {
                return Err(GraphError::DuplicateNode(node.id));
            }

            let index = graph.graph.add_node(node);
            graph.lookup.insert(node.id, index);
        }

        for pending in self.edges {
            let resolve = |id: NodeId| {
                graph
                    .lookup
                    .get(&id)
                    .copied()
                    .ok_or(GraphError::MissingNode {
                        edge: pending.id,
                        node: id,
                    })
            };

            let source = resolve(pending.source)?;
            let target = resolve(pending.target)?;

            let (from, to) = (graph.graph[source].position, graph.graph[target].position);
            let geometry = match pending.geometry {
                Some(geometry) => validate_geometry(pending.id, geometry, from, to)?,
                None => LineString::from(vec![from, to]),
            };

            let mut edge = Edge::new(pending.id, geometry, 0.0);
            edge.length = match pending.length {
                Some(length) if !length.is_finite() || length < 0.0 => {
                    return Err(GraphError::InvalidLength {
                        edge: pending.id,
                        length,
                    });
                }
                Some(length) => length,
                None => edge.geometric_length,
            };

            graph.graph.add_edge(source, target, edge);
        }

        graph.reindex();
        debug!(
            "Built graph with {} nodes and {} edges",
            graph.size(),
            graph.edge_count()
        );

        Ok(graph)
    }
}

fn validate_geometry(
    edge: EdgeId,
    geometry: LineString,
    source: Point,
    target: Point,
) -> Result<LineString, GraphError> {
    let invalid = |reason: &str| GraphError::InvalidGeometry {
        edge,
        reason: reason.to_string(),
    };

    if geometry.0.len() < 2 {
        return Err(invalid("geometry must contain at least two positions"));
    }

    if geometry.coords().any(|c| !c.x.is_finite() || !c.y.is_finite()) {
        return Err(invalid("geometry contains non-finite positions"));
    }

    let (Some(first), Some(last)) = (geometry.points().next(), geometry.points().last()) else {
        return Err(invalid("geometry is empty"));
    };

    if Haversine.distance(first, source) > ENDPOINT_TOLERANCE {
        return Err(invalid("geometry does not start at the source node"));
    }

    if Haversine.distance(last, target) > ENDPOINT_TOLERANCE {
        return Err(invalid("geometry does not end at the target node"));
    }

    Ok(geometry)
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use geo::wkt;

    fn two_nodes() -> GraphBuilder {
        let mut builder = GraphBuilder::default();
        builder
            .node(1, Point::new(0.0, 0.0))
            .node(2, Point::new(0.001, 0.0));
        builder
    }

    #[test]
    fn fills_missing_geometry_and_length() {
        let mut builder = two_nodes();
        builder.edge(7, 1, 2);

        let graph = builder.build().expect("must build");
        let (ix, edge) = graph.edges().next().expect("must contain an edge");

        assert_eq!(edge.id, 7);
        assert_eq!(edge.geometry.0.len(), 2);
        assert_relative_eq!(edge.length, 111.19, max_relative = 0.001);
        assert_eq!(graph.endpoints(ix).map(|(s, _)| graph.node(s).map(|n| n.id)), Some(Some(1)));
    }

    #[test]
    fn rejects_missing_nodes() {
        let mut builder = two_nodes();
        builder.edge(7, 1, 3);

        assert_eq!(
            builder.build().err(),
            Some(GraphError::MissingNode { edge: 7, node: 3 })
        );
    }

    #[test]
    fn rejects_duplicate_nodes() {
        let mut builder = two_nodes();
        builder.node(2, Point::new(0.5, 0.5));

        assert_eq!(builder.build().err(), Some(GraphError::DuplicateNode(2)));
    }

    #[test]
    fn rejects_invalid_lengths() {
        for length in [-1.0, f64::NAN, f64::INFINITY] {
            let mut builder = two_nodes();
            builder.edge_with(7, 1, 2, None, Some(length));

            assert!(matches!(
                builder.build(),
                Err(GraphError::InvalidLength { edge: 7, .. })
            ));
        }
    }

    #[test]
    fn rejects_detached_geometry() {
        let mut builder = two_nodes();
        let geometry = wkt! { LINESTRING (0.0 0.0, 0.002 0.0) };
        builder.edge_with(7, 1, 2, Some(geometry), None);

        assert!(matches!(
            builder.build(),
            Err(GraphError::InvalidGeometry { edge: 7, .. })
        ));
    }

    #[test]
    fn rejects_invalid_positions() {
        let mut builder = two_nodes();
        builder.node(3, Point::new(200.0, 0.0));

        assert!(matches!(
            builder.build(),
            Err(GraphError::InvalidPosition { node: 3, .. })
        ));
    }

    #[test]
    fn explicit_length_overrides_geometry() {
        let mut builder = two_nodes();
        let geometry = wkt! { LINESTRING (0.0 0.0, 0.0005 0.0001, 0.001 0.0) };
        builder.edge_with(7, 1, 2, Some(geometry), Some(50.0));

        let graph = builder.build().expect("must build");
        let (_, edge) = graph.edges().next().expect("must contain an edge");

        assert_eq!(edge.length, 50.0);
        assert_eq!(edge.geometry.0.len(), 3);
        assert!(edge.scale() < 1.0);
    }
}
